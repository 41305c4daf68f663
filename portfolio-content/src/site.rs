//! Site configuration: the profile, external links and page settings.

use serde::Deserialize;
use url::Url;

use crate::{
    dictionary::{Dictionary, Locale},
    error::Error,
    lang::Lang,
};

pub(crate) const SITE_SOURCE: &str = include_str!("../site.toml");

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SiteConfig {
    pub profile: Profile,
    pub links: Links,
    pub contact: ContactConfig,
    pub seo: SeoConfig,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Profile {
    pub name: String,
    pub initials: String,
    pub location: String,
    pub locality: String,
    pub country: String,
    pub job_title: String,
    pub image_src: String,
    pub fallback_image: String,
}

/// External links shown across the page.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Links {
    pub github: String,
    pub drive: String,
    pub cv: String,
    pub linkedin: String,
    /// A web mail compose link, shown as the "Email" direct link.
    pub email: String,
    pub tableau: String,
    pub kaggle: String,
    pub instagram: String,
}

impl Links {
    /// The profiles listed as `sameAs` in structured data.
    pub fn same_as(&self) -> [&str; 5] {
        [
            self.github.as_str(),
            self.linkedin.as_str(),
            self.tableau.as_str(),
            self.kaggle.as_str(),
            self.instagram.as_str(),
        ]
    }

    /// The links listed in the contact section, in display order.
    pub fn direct_links(&self) -> Vec<DirectLink> {
        [
            ("Email", &self.email),
            ("LinkedIn", &self.linkedin),
            ("GitHub", &self.github),
            ("Tableau", &self.tableau),
            ("Kaggle", &self.kaggle),
            ("Instagram", &self.instagram),
            ("Drive", &self.drive),
        ]
        .into_iter()
        .map(|(label, href)| DirectLink {
            label: label.to_string(),
            href: href.clone(),
        })
        .collect()
    }

    fn named(&self) -> [(&'static str, &str); 8] {
        [
            ("links.github", self.github.as_str()),
            ("links.drive", self.drive.as_str()),
            ("links.cv", self.cv.as_str()),
            ("links.linkedin", self.linkedin.as_str()),
            ("links.email", self.email.as_str()),
            ("links.tableau", self.tableau.as_str()),
            ("links.kaggle", self.kaggle.as_str()),
            ("links.instagram", self.instagram.as_str()),
        ]
    }
}

/// A labelled external link.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DirectLink {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ContactConfig {
    /// The recipient of contact form messages.
    pub address: String,
    pub subject_prefix: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SeoConfig {
    pub og_type: String,
    pub og_image: String,
}

impl SiteConfig {
    /// Parse and validate a site config.
    pub fn from_toml(source: &str, text: &str) -> Result<Self, Error> {
        let config: SiteConfig = toml::from_str(text).map_err(|err| Error::Parse {
            source: source.to_string(),
            msg: err.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load the compiled-in `site.toml` .
    pub fn embedded() -> Result<Self, Error> {
        Self::from_toml("site.toml", SITE_SOURCE)
    }

    /// Check the values serde cannot check.
    pub fn validate(&self) -> Result<(), Error> {
        if self.profile.name.trim().is_empty() {
            return Err(Error::InvalidConfig {
                field: "profile.name",
                msg: "must not be empty".into(),
            });
        }
        for (field, link) in self.links.named() {
            check_web_url(field, link)?;
        }
        let address = self.contact.address.trim();
        if address.is_empty() || !address.contains('@') {
            return Err(Error::InvalidConfig {
                field: "contact.address",
                msg: format!("{:?} is not a mail address", self.contact.address),
            });
        }
        Ok(())
    }
}

fn check_web_url(field: &'static str, link: &str) -> Result<(), Error> {
    let url = Url::parse(link).map_err(|err| Error::InvalidConfig {
        field,
        msg: format!("{:?}: {}", link, err),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(Error::InvalidConfig {
            field,
            msg: format!("unsupported scheme {:?}", scheme),
        }),
    }
}

/// Everything needed to render the page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Site {
    pub config: SiteConfig,
    pub dictionary: Dictionary,
}

impl Site {
    /// Load the compiled-in config and content.
    pub fn embedded() -> Result<Self, Error> {
        let config = SiteConfig::embedded()?;
        let dictionary = Dictionary::embedded(&config.profile.name)?;
        log::debug!("Loaded site content for {}", config.profile.name);
        Ok(Self { config, dictionary })
    }

    /// The locale for a language.
    pub fn locale(&self, lang: Lang) -> &Locale {
        self.dictionary.get(lang)
    }
}
