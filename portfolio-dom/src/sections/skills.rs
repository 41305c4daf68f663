use maomi::prelude::*;
use maomi_dom::{element::*, prelude::*};
use portfolio_content::dictionary::SkillsCopy;

stylesheet! {
    #[css_name("section")]
    class page_section {}
    #[css_name("section-alt")]
    class section_alt {}
    #[css_name("container")]
    class container {}
    #[css_name("section-title")]
    class section_title {}
    #[css_name("card-grid")]
    class card_grid {}
    #[css_name("card")]
    class card {}
    #[css_name("card-title")]
    class card_title {}
    #[css_name("skill-list")]
    class skill_list {}
    #[css_name("skill")]
    class skill {}
    #[css_name("skill-icon")]
    class skill_icon {}
}

#[component(Backend = DomBackend)]
pub struct Skills {
    template: template! {
        <section id="skills" class:page_section class:section_alt>
            <div class:container>
                <h2 class:section_title> { &self.copy.title } </h2>
                <div class:card_grid>
                    for category in self.copy.categories.iter() {
                        <div class:card>
                            <h3 class:card_title> { &category.group } </h3>
                            <ul class:skill_list>
                                for item in category.items.iter() {
                                    <li class:skill>
                                        <span class:skill_icon aria_hidden="true"> { &item.icon } </span>
                                        <span> { &item.label } </span>
                                    </li>
                                }
                            </ul>
                        </div>
                    }
                </div>
            </div>
        </section>
    },
    pub copy: Prop<SkillsCopy>,
}

impl Component for Skills {
    fn new() -> Self {
        Self {
            template: Default::default(),
            copy: Prop::new(Default::default()),
        }
    }
}
