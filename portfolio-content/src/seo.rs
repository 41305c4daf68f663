//! The SEO tags written into the document head.
//!
//! `HeadPlan` is a plain description of the tags.
//! The browser side applies it by upserting each entry, so applying it twice never duplicates tags.

use serde_json::{json, Value};

use crate::{image::resolve_image, lang::Lang, site::Site};

/// The `id` of the JSON-LD `Person` script.
pub const PERSON_SCRIPT_ID: &str = "jsonld-person";
/// The `id` of the JSON-LD `ItemList` script.
pub const ITEM_LIST_SCRIPT_ID: &str = "jsonld-itemlist";

/// Which attribute identifies a `<meta>` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaAttr {
    Name,
    Property,
}

impl MetaAttr {
    pub fn as_str(self) -> &'static str {
        match self {
            MetaAttr::Name => "name",
            MetaAttr::Property => "property",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetaTag {
    pub attr: MetaAttr,
    pub key: &'static str,
    pub content: String,
}

impl MetaTag {
    fn name(key: &'static str, content: impl Into<String>) -> Self {
        Self {
            attr: MetaAttr::Name,
            key,
            content: content.into(),
        }
    }

    fn property(key: &'static str, content: impl Into<String>) -> Self {
        Self {
            attr: MetaAttr::Property,
            key,
            content: content.into(),
        }
    }

    /// A CSS selector matching this tag.
    pub fn selector(&self) -> String {
        format!("meta[{}='{}']", self.attr.as_str(), self.key)
    }
}

/// A `<script type="application/ld+json">` with a fixed id.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonLdScript {
    pub id: &'static str,
    pub json: Value,
}

/// All head entries for one language.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadPlan {
    pub title: String,
    pub meta: Vec<MetaTag>,
    pub canonical: String,
    pub scripts: Vec<JsonLdScript>,
}

/// Selectors that must match after the plan has been applied.
pub const REQUIRED_SELECTORS: [&str; 4] = [
    "meta[name='description']",
    "meta[name='keywords']",
    "meta[property='og:title']",
    "link[rel='canonical']",
];

impl HeadPlan {
    /// Build the head entries for `lang` on the page at `page_url` .
    ///
    /// Keywords and the project list always use the English copy.
    pub fn build(site: &Site, lang: Lang, page_url: &str) -> Self {
        let meta_copy = &site.locale(lang).meta;
        let seo = &site.config.seo;
        let meta = vec![
            MetaTag::name("description", meta_copy.description.as_str()),
            MetaTag::name("keywords", site.locale(Lang::En).meta.keywords.as_str()),
            MetaTag::property("og:title", meta_copy.title.as_str()),
            MetaTag::property("og:description", meta_copy.description.as_str()),
            MetaTag::property("og:type", seo.og_type.as_str()),
            MetaTag::property("og:url", page_url),
            MetaTag::property("og:image", seo.og_image.as_str()),
        ];
        Self {
            title: meta_copy.title.clone(),
            meta,
            canonical: page_url.to_string(),
            scripts: vec![
                JsonLdScript {
                    id: PERSON_SCRIPT_ID,
                    json: person_json(site, page_url),
                },
                JsonLdScript {
                    id: ITEM_LIST_SCRIPT_ID,
                    json: item_list_json(site),
                },
            ],
        }
    }

    /// Find a meta tag by key.
    pub fn meta(&self, key: &str) -> Option<&MetaTag> {
        self.meta.iter().find(|m| m.key == key)
    }
}

fn person_json(site: &Site, page_url: &str) -> Value {
    let profile = &site.config.profile;
    json!({
        "@context": "https://schema.org",
        "@type": "Person",
        "name": profile.name,
        "jobTitle": profile.job_title,
        "address": {
            "@type": "PostalAddress",
            "addressLocality": profile.locality,
            "addressCountry": profile.country,
        },
        "url": page_url,
        "image": resolve_image(&profile.image_src, &profile.fallback_image),
        "sameAs": site.config.links.same_as(),
    })
}

fn item_list_json(site: &Site) -> Value {
    let default_url = site.config.links.github.as_str();
    let items: Vec<Value> = site
        .locale(Lang::En)
        .projects
        .list
        .iter()
        .enumerate()
        .map(|(index, project)| {
            json!({
                "@type": "ListItem",
                "position": index + 1,
                "url": project.primary_url(default_url),
                "name": project.name,
                "description": project.context,
            })
        })
        .collect();
    json!({
        "@context": "https://schema.org",
        "@type": "ItemList",
        "itemListElement": items,
    })
}
