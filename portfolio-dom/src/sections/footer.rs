use maomi::prelude::*;
use maomi_dom::{element::*, prelude::*};
use portfolio_content::{dictionary::FooterCopy, site::DirectLink};

stylesheet! {
    #[css_name("footer")]
    class footer_bar {}
    #[css_name("container")]
    class container {}
    #[css_name("footer-inner")]
    class footer_inner {}
    #[css_name("footer-links")]
    class footer_links {}
}

#[component(Backend = DomBackend)]
pub struct Footer {
    template: template! {
        <footer class:footer_bar>
            <div class:container class:footer_inner>
                <p> { &self.copy.copyright } </p>
                <nav class:footer_links title={ &self.copy.links }>
                    for link in self.links.iter() {
                        <a href={ &link.href } target="_blank" rel="noopener noreferrer"> { &link.label } </a>
                    }
                </nav>
            </div>
        </footer>
    },
    pub copy: Prop<FooterCopy>,
    pub links: Prop<Vec<DirectLink>>,
}

impl Component for Footer {
    fn new() -> Self {
        Self {
            template: Default::default(),
            copy: Prop::new(Default::default()),
            links: Prop::new(Vec::new()),
        }
    }
}
