use maomi::prelude::*;
use maomi_dom::{element::*, prelude::*};
use portfolio_content::dictionary::ProjectsCopy;

stylesheet! {
    #[css_name("section")]
    class page_section {}
    #[css_name("container")]
    class container {}
    #[css_name("section-title")]
    class section_title {}
    #[css_name("project-grid")]
    class project_grid {}
    #[css_name("card")]
    class card {}
    #[css_name("project-card")]
    class project_card {}
    #[css_name("card-title")]
    class card_title {}
    #[css_name("project-facts")]
    class project_facts {}
    #[css_name("fact-label")]
    class fact_label {}
    #[css_name("fact-list")]
    class fact_list {}
    #[css_name("card-actions")]
    class card_actions {}
    #[css_name("btn")]
    class btn {}
    #[css_name("btn-outline")]
    class btn_outline {}
    #[css_name("btn-small")]
    class btn_small {}
}

#[component(Backend = DomBackend)]
pub struct Projects {
    template: template! {
        <section id="projects" class:page_section>
            <div class:container>
                <h2 class:section_title> { &self.copy.title } </h2>
                <div class:project_grid>
                    for project in self.copy.list.iter() {
                        <article class:card class:project_card>
                            <h3 class:card_title> { &project.name } </h3>
                            <dl class:project_facts>
                                <dt class:fact_label> { &self.copy.labels.context } </dt>
                                <dd> { &project.context } </dd>
                                <dt class:fact_label> { &self.copy.labels.data } </dt>
                                <dd> { &project.data } </dd>
                                <dt class:fact_label> { &self.copy.labels.approach } </dt>
                                <dd> { &project.approach } </dd>
                                <dt class:fact_label> { &self.copy.labels.tools } </dt>
                                <dd> { &project.tools } </dd>
                                <dt class:fact_label> { &self.copy.labels.findings } </dt>
                                <dd>
                                    <ul class:fact_list>
                                        for finding in project.findings.iter() {
                                            <li> { finding } </li>
                                        }
                                    </ul>
                                </dd>
                                <dt class:fact_label> { &self.copy.labels.impact } </dt>
                                <dd>
                                    <ul class:fact_list>
                                        for impact in project.impact.iter() {
                                            <li> { impact } </li>
                                        }
                                    </ul>
                                </dd>
                            </dl>
                            <div class:card_actions>
                                if let Some(href) = project.links.github.as_ref() {
                                    <a class:btn class:btn_outline class:btn_small href={ href } target="_blank" rel="noopener noreferrer">
                                        "GitHub"
                                    </a>
                                }
                                if let Some(href) = project.links.drive.as_ref() {
                                    <a class:btn class:btn_outline class:btn_small href={ href } target="_blank" rel="noopener noreferrer">
                                        "Drive"
                                    </a>
                                }
                                if let Some(href) = project.links.website.as_ref() {
                                    <a class:btn class:btn_outline class:btn_small href={ href } target="_blank" rel="noopener noreferrer">
                                        "Website"
                                    </a>
                                }
                            </div>
                        </article>
                    }
                </div>
            </div>
        </section>
    },
    pub copy: Prop<ProjectsCopy>,
}

impl Component for Projects {
    fn new() -> Self {
        Self {
            template: Default::default(),
            copy: Prop::new(Default::default()),
        }
    }
}
