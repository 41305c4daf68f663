use std::rc::Rc;

use maomi::prelude::*;
use maomi_dom::{async_task, element::*, event::*, prelude::*};
use portfolio_content::{
    dictionary::Locale,
    lang::{persist_lang, restore_lang, Lang, PreferenceStore},
    seo::HeadPlan,
    site::{DirectLink, Site},
};

use crate::{
    browser,
    sections::{
        about::About,
        contact::Contact,
        footer::Footer,
        hero::{Hero, HeroProfile},
        projects::Projects,
        skills::Skills,
    },
};

stylesheet! {
    #[css_name("skip-link")]
    class skip_link {}
    #[css_name("navbar")]
    class navbar {}
    #[css_name("container")]
    class container {}
    #[css_name("navbar-inner")]
    class navbar_inner {}
    #[css_name("brand")]
    class brand {}
    #[css_name("brand-badge")]
    class brand_badge {}
    #[css_name("brand-text")]
    class brand_text {}
    #[css_name("brand-location")]
    class brand_location {}
    #[css_name("brand-name")]
    class brand_name {}
    #[css_name("nav-links")]
    class nav_links {}
    #[css_name("nav-actions")]
    class nav_actions {}
    #[css_name("btn")]
    class btn {}
    #[css_name("btn-primary")]
    class btn_primary {}
    #[css_name("btn-outline")]
    class btn_outline {}
}

/// The whole page.
///
/// Holds the current language and re-renders every section when it changes.
#[component(Backend = DomBackend)]
pub struct App {
    template: template! {
        <a href="#main" class:skip_link> "Skip to content" </a>
        <header class:navbar>
            <nav class:container class:navbar_inner>
                <a href="#" class:brand>
                    <span class:brand_badge aria_hidden="true"> { &self.site.config.profile.initials } </span>
                    <span class:brand_text>
                        <span class:brand_location> { &self.site.config.profile.location } </span>
                        <span class:brand_name> { &self.brand } </span>
                    </span>
                </a>
                <div class:nav_links>
                    <a href="#about"> { &self.locale.nav.about } </a>
                    <a href="#skills"> { &self.locale.nav.skills } </a>
                    <a href="#projects"> { &self.locale.nav.projects } </a>
                    <a href="#contact"> { &self.locale.nav.contact } </a>
                </div>
                <div class:nav_actions>
                    <a
                        class:btn
                        class:btn_outline
                        href={ &self.site.config.links.github }
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        "GitHub"
                    </a>
                    <button
                        r#type="button"
                        id="lang-toggle"
                        title="Toggle language"
                        class:btn
                        class:btn_primary
                        tap=@toggle_lang()
                    >
                        { &self.locale.lang_label }
                    </button>
                </div>
            </nav>
        </header>
        <main id="main">
            <Hero
                copy={ &self.locale.hero }
                profile={ &self.hero_profile }
                links={ &self.site.config.links }
            />
            <About copy={ &self.locale.about } />
            <Skills copy={ &self.locale.skills } />
            <Projects copy={ &self.locale.projects } />
            <Contact copy={ &self.locale.contact } links={ &self.direct_links } />
        </main>
        <Footer copy={ &self.locale.footer } links={ &self.direct_links } />
    },
    site: Rc<Site>,
    store: Option<Box<dyn PreferenceStore>>,
    lang: Lang,
    locale: Locale,
    brand: String,
    hero_profile: HeroProfile,
    direct_links: Vec<DirectLink>,
}

impl Component for App {
    fn new() -> Self {
        Self {
            template: Default::default(),
            site: Rc::new(Site::default()),
            store: None,
            lang: Lang::default(),
            locale: Locale::default(),
            brand: String::new(),
            hero_profile: HeroProfile::default(),
            direct_links: Vec::new(),
        }
    }
}

impl App {
    /// Provide the content and the preference store.
    ///
    /// The saved language is restored immediately.
    /// Must be called before the first render, i.e. inside the `attach` init closure.
    pub fn attach_site(&mut self, site: Rc<Site>, store: Box<dyn PreferenceStore>) {
        let lang = restore_lang(store.as_ref());
        self.direct_links = site.config.links.direct_links();
        self.site = site;
        self.store = Some(store);
        self.show(lang);
    }

    /// The language currently shown.
    pub fn lang(&self) -> Lang {
        self.lang
    }

    /// Show `lang` and remember it.
    pub fn set_lang(&mut self, lang: Lang) {
        self.show(lang);
        if let Some(store) = self.store.as_ref() {
            if let Err(err) = persist_lang(store.as_ref(), lang) {
                log::warn!("Cannot save the language preference: {}", err);
            }
        }
    }

    /// Switch to the other language.
    pub fn toggle(&mut self) {
        self.set_lang(self.lang.toggle());
    }

    fn show(&mut self, lang: Lang) {
        let locale = self.site.locale(lang).clone();
        self.brand = format!(
            "{} — {}",
            self.site.config.profile.name, locale.profile.title
        );
        self.hero_profile = HeroProfile::new(&self.site.config.profile, &locale);
        self.locale = locale;
        self.lang = lang;
        log::debug!("Showing language {}", lang);

        if let Err(err) = browser::set_document_lang(lang) {
            log::warn!("{}", err);
        }
        let plan = HeadPlan::build(&self.site, lang, &browser::page_url());
        match browser::apply_head(&plan) {
            Ok(()) => {
                browser::check_head();
            }
            Err(err) => log::warn!("Cannot update the document head: {}", err),
        }
    }

    fn toggle_lang(this: ComponentRc<Self>, _detail: &mut TapEvent) {
        async_task(async move {
            let ret = this.update(|this| this.toggle()).await;
            if let Err(err) = ret {
                log::error!("Cannot switch language: {:?}", err);
            }
        });
    }
}
