use maomi::prelude::*;
use maomi_dom::{element::*, prelude::*};
use portfolio_content::{
    dictionary::{HeroCopy, Locale},
    image::resolve_image,
    site::{Links, Profile},
};

stylesheet! {
    #[css_name("hero")]
    class hero {}
    #[css_name("container")]
    class container {}
    #[css_name("hero-grid")]
    class hero_grid {}
    #[css_name("hero-text")]
    class hero_text {}
    #[css_name("kicker")]
    class kicker {}
    #[css_name("headline")]
    class headline {}
    #[css_name("lead")]
    class lead {}
    #[css_name("cta-row")]
    class cta_row {}
    #[css_name("btn")]
    class btn {}
    #[css_name("btn-primary")]
    class btn_primary {}
    #[css_name("btn-outline")]
    class btn_outline {}
    #[css_name("btn-large")]
    class btn_large {}
    #[css_name("hero-media")]
    class hero_media {}
    #[css_name("profile-image")]
    class profile_image {}
    #[css_name("profile-glow")]
    class profile_glow {}
}

/// What the hero shows about the person.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HeroProfile {
    pub image_src: String,
    pub image_alt: String,
}

impl HeroProfile {
    pub fn new(profile: &Profile, locale: &Locale) -> Self {
        Self {
            image_src: resolve_image(&profile.image_src, &profile.fallback_image),
            image_alt: locale.profile.image_alt.clone(),
        }
    }
}

#[component(Backend = DomBackend)]
pub struct Hero {
    template: template! {
        <section class:hero>
            <div class:container class:hero_grid>
                <div class:hero_text>
                    <p class:kicker> { &self.copy.kicker } </p>
                    <h1 class:headline> { &self.copy.headline } </h1>
                    <p class:lead> { &self.copy.sub } </p>
                    <div class:cta_row>
                        <a
                            class:btn
                            class:btn_primary
                            class:btn_large
                            href={ &self.links.github }
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            { &self.copy.cta_portfolio }
                        </a>
                        <a
                            class:btn
                            class:btn_outline
                            class:btn_large
                            href={ &self.links.cv }
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            { &self.copy.cta_cv }
                        </a>
                    </div>
                </div>
                <div class:hero_media>
                    <img
                        id="profile-image"
                        class:profile_image
                        src={ &self.profile.image_src }
                        alt={ &self.profile.image_alt }
                    ></img>
                    <div class:profile_glow aria_hidden="true"></div>
                </div>
            </div>
        </section>
    },
    pub copy: Prop<HeroCopy>,
    pub profile: Prop<HeroProfile>,
    pub links: Prop<Links>,
}

impl Component for Hero {
    fn new() -> Self {
        Self {
            template: Default::default(),
            copy: Prop::new(Default::default()),
            profile: Prop::new(Default::default()),
            links: Prop::new(Default::default()),
        }
    }
}
