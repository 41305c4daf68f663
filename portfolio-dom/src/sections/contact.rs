use maomi::prelude::*;
use maomi_dom::{element::*, prelude::*};
use portfolio_content::{dictionary::ContactCopy, site::DirectLink};

stylesheet! {
    #[css_name("section")]
    class page_section {}
    #[css_name("section-alt")]
    class section_alt {}
    #[css_name("container")]
    class container {}
    #[css_name("section-title")]
    class section_title {}
    #[css_name("contact-grid")]
    class contact_grid {}
    #[css_name("muted")]
    class muted {}
    #[css_name("contact-form")]
    class contact_form {}
    #[css_name("field")]
    class field {}
    #[css_name("field-label")]
    class field_label {}
    #[css_name("field-input")]
    class field_input {}
    #[css_name("btn")]
    class btn {}
    #[css_name("btn-primary")]
    class btn_primary {}
    #[css_name("card")]
    class card {}
    #[css_name("card-title")]
    class card_title {}
    #[css_name("link-list")]
    class link_list {}
    #[css_name("badge")]
    class badge {}
}

#[component(Backend = DomBackend)]
pub struct Contact {
    template: template! {
        <section id="contact" class:page_section class:section_alt>
            <div class:container>
                <h2 class:section_title> { &self.copy.title } </h2>
                <div class:contact_grid>
                    <div>
                        <p class:muted> { &self.copy.desc } </p>
                        <form id="contact-form" class:contact_form>
                            <div class:field>
                                <label r#for="contact-name" class:field_label> { &self.copy.name } </label>
                                <input id="contact-name" name="name" r#type="text" class:field_input></input>
                            </div>
                            <div class:field>
                                <label r#for="contact-email" class:field_label> { &self.copy.email } </label>
                                <input id="contact-email" name="email" r#type="email" class:field_input></input>
                            </div>
                            <div class:field>
                                <label r#for="contact-inquiry" class:field_label> { &self.copy.inquiry } </label>
                                <textarea id="contact-inquiry" name="inquiry" class:field_input></textarea>
                            </div>
                            <button r#type="submit" class:btn class:btn_primary> { &self.copy.submit } </button>
                        </form>
                    </div>
                    <aside class:card>
                        <h3 class:card_title> { &self.copy.direct_links } </h3>
                        <ul class:link_list>
                            for link in self.links.iter() {
                                <li>
                                    <a href={ &link.href } target="_blank" rel="noopener noreferrer"> { &link.label } </a>
                                </li>
                            }
                        </ul>
                        <span class:badge> { &self.copy.reply_sla } </span>
                    </aside>
                </div>
            </div>
        </section>
    },
    pub copy: Prop<ContactCopy>,
    pub links: Prop<Vec<DirectLink>>,
}

impl Component for Contact {
    fn new() -> Self {
        Self {
            template: Default::default(),
            copy: Prop::new(Default::default()),
            links: Prop::new(Vec::new()),
        }
    }
}
