use maomi::prelude::*;
use maomi_dom::{element::*, prelude::*};
use portfolio_content::dictionary::AboutCopy;

stylesheet! {
    #[css_name("section")]
    class page_section {}
    #[css_name("container")]
    class container {}
    #[css_name("section-title")]
    class section_title {}
    #[css_name("prose")]
    class prose {}
}

#[component(Backend = DomBackend)]
pub struct About {
    template: template! {
        <section id="about" class:page_section>
            <div class:container>
                <h2 class:section_title> { &self.copy.title } </h2>
                <div class:prose>
                    for para in self.copy.paragraphs.iter() {
                        <p> { para } </p>
                    }
                </div>
            </div>
        </section>
    },
    pub copy: Prop<AboutCopy>,
}

impl Component for About {
    fn new() -> Self {
        Self {
            template: Default::default(),
            copy: Prop::new(Default::default()),
        }
    }
}
