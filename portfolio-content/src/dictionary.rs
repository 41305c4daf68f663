//! The bilingual content dictionary.
//!
//! Every displayed string lives in one TOML file per language under `i18n/` .
//! The files are compiled in and deserialized into `Locale` .

use serde::Deserialize;

use crate::{error::Error, lang::Lang};

/// The placeholder replaced with the profile name when a locale is loaded.
pub const NAME_PLACEHOLDER: &str = "{name}";

pub(crate) const EN_SOURCE: &str = include_str!("../i18n/en.toml");
pub(crate) const ID_SOURCE: &str = include_str!("../i18n/id.toml");

/// All strings of one language.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Locale {
    pub lang_label: String,
    pub profile: ProfileCopy,
    pub nav: NavCopy,
    pub hero: HeroCopy,
    pub about: AboutCopy,
    pub skills: SkillsCopy,
    pub projects: ProjectsCopy,
    pub contact: ContactCopy,
    pub footer: FooterCopy,
    pub meta: MetaCopy,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ProfileCopy {
    pub title: String,
    pub image_alt: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct NavCopy {
    pub about: String,
    pub skills: String,
    pub projects: String,
    pub contact: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct HeroCopy {
    pub kicker: String,
    pub headline: String,
    pub sub: String,
    pub cta_portfolio: String,
    pub cta_cv: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct AboutCopy {
    pub title: String,
    pub paragraphs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SkillsCopy {
    pub title: String,
    pub categories: Vec<SkillCategory>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SkillCategory {
    pub group: String,
    pub items: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Skill {
    pub label: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ProjectsCopy {
    pub title: String,
    pub labels: ProjectLabels,
    pub list: Vec<Project>,
}

/// The field captions shown on each project card.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ProjectLabels {
    pub context: String,
    pub data: String,
    pub approach: String,
    pub tools: String,
    pub findings: String,
    pub impact: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Project {
    pub name: String,
    pub context: String,
    pub data: String,
    pub approach: String,
    pub tools: String,
    pub findings: Vec<String>,
    pub impact: Vec<String>,
    #[serde(default)]
    pub links: ProjectLinks,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ProjectLinks {
    pub github: Option<String>,
    pub drive: Option<String>,
    pub website: Option<String>,
}

impl Project {
    /// The link that best represents the project.
    ///
    /// Prefers the live website, then the source repository, then the drive folder.
    pub fn primary_url<'a>(&'a self, default: &'a str) -> &'a str {
        self.links
            .website
            .as_deref()
            .or(self.links.github.as_deref())
            .or(self.links.drive.as_deref())
            .unwrap_or(default)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ContactCopy {
    pub title: String,
    pub desc: String,
    pub name: String,
    pub email: String,
    pub inquiry: String,
    pub submit: String,
    pub direct_links: String,
    pub reply_sla: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct FooterCopy {
    pub copyright: String,
    pub links: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct MetaCopy {
    pub title: String,
    pub description: String,
    pub keywords: String,
}

impl Locale {
    /// Parse a locale from TOML, filling the name placeholder.
    ///
    /// `source` names the file in error messages.
    pub fn from_toml(source: &str, text: &str, profile_name: &str) -> Result<Self, Error> {
        let parse_err = |msg: String| Error::Parse {
            source: source.to_string(),
            msg,
        };
        let mut value: toml::Value = toml::from_str(text).map_err(|err| parse_err(err.to_string()))?;
        fill_placeholder(&mut value, profile_name);
        value
            .try_into::<Locale>()
            .map_err(|err| parse_err(err.to_string()))
    }
}

fn fill_placeholder(value: &mut toml::Value, profile_name: &str) {
    match value {
        toml::Value::String(s) => {
            if s.contains(NAME_PLACEHOLDER) {
                *s = s.replace(NAME_PLACEHOLDER, profile_name);
            }
        }
        toml::Value::Array(items) => {
            for item in items {
                fill_placeholder(item, profile_name);
            }
        }
        toml::Value::Table(table) => {
            for (_, item) in table.iter_mut() {
                fill_placeholder(item, profile_name);
            }
        }
        _ => {}
    }
}

/// Both locales.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dictionary {
    en: Locale,
    id: Locale,
}

impl Dictionary {
    /// Build from already-parsed locales.
    pub fn new(en: Locale, id: Locale) -> Self {
        Self { en, id }
    }

    /// Load the compiled-in locale files.
    pub fn embedded(profile_name: &str) -> Result<Self, Error> {
        Ok(Self {
            en: Locale::from_toml("i18n/en.toml", EN_SOURCE, profile_name)?,
            id: Locale::from_toml("i18n/id.toml", ID_SOURCE, profile_name)?,
        })
    }

    /// The locale for a language.
    pub fn get(&self, lang: Lang) -> &Locale {
        match lang {
            Lang::En => &self.en,
            Lang::Id => &self.id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
lang_label = "EN"

[profile]
title = "Data Analyst"
image_alt = "Photo of {name}"

[nav]
about = "About"
skills = "Skills"
projects = "Projects"
contact = "Contact"

[hero]
kicker = "k"
headline = "h"
sub = "I'm {name}."
cta_portfolio = "p"
cta_cv = "cv"

[about]
title = "About"
paragraphs = ["one", "two by {name}"]

[skills]
title = "Skills"
categories = []

[projects]
title = "Projects"

[projects.labels]
context = "Context"
data = "Data"
approach = "Approach"
tools = "Tools"
findings = "Key Findings"
impact = "Impact"

[[projects.list]]
name = "P"
context = "c"
data = "d"
approach = "a"
tools = "t"
findings = ["f"]
impact = ["i"]

[contact]
title = "Contact"
desc = "d"
name = "Name"
email = "Email"
inquiry = "Inquiry"
submit = "Send"
direct_links = "Direct links"
reply_sla = "Soon"

[footer]
copyright = "© {name}"
links = "Links"

[meta]
title = "t"
description = "d"
keywords = "k"
"#;

    #[test]
    fn placeholder_is_filled_everywhere() {
        let locale = Locale::from_toml("minimal", MINIMAL, "Ada").unwrap();
        assert_eq!(locale.hero.sub, "I'm Ada.");
        assert_eq!(locale.profile.image_alt, "Photo of Ada");
        assert_eq!(locale.about.paragraphs[1], "two by Ada");
        assert_eq!(locale.footer.copyright, "© Ada");
    }

    #[test]
    fn missing_links_table_defaults() {
        let locale = Locale::from_toml("minimal", MINIMAL, "Ada").unwrap();
        let project = &locale.projects.list[0];
        assert_eq!(project.links, ProjectLinks::default());
        assert_eq!(project.primary_url("https://fallback"), "https://fallback");
    }

    #[test]
    fn parse_errors_name_the_source() {
        let err = Locale::from_toml("i18n/xx.toml", "lang_label = ", "Ada").unwrap_err();
        match err {
            Error::Parse { source, .. } => assert_eq!(source, "i18n/xx.toml"),
            other => panic!("unexpected error {:?}", other),
        }
        let err = Locale::from_toml("i18n/xx.toml", "lang_label = \"EN\"", "Ada").unwrap_err();
        assert!(err.to_string().starts_with("Cannot parse i18n/xx.toml"));
    }

    #[test]
    fn primary_url_order() {
        let mut project = Project::default();
        project.links.drive = Some("drive".into());
        assert_eq!(project.primary_url("repo"), "drive");
        project.links.github = Some("github".into());
        assert_eq!(project.primary_url("repo"), "github");
        project.links.website = Some("website".into());
        assert_eq!(project.primary_url("repo"), "website");
    }
}
