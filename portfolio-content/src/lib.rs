//! Content and page helpers for a bilingual portfolio page.
//!
//! This crate does not touch the DOM.
//! It holds the content dictionary, the site config,
//! and the pure parts of every page operation:
//!
//! * `lang` : the display language and its persisted preference flag;
//! * `dictionary` : all displayed strings, per language;
//! * `site` : profile, external links and page settings;
//! * `contact` : the mail-client redirect built from the contact form;
//! * `seo` : the meta tags and JSON-LD written into `<head>` ;
//! * `image` : profile image resolution and fallback.
//!
//! ```rust
//! use portfolio_content::{lang::Lang, site::Site};
//!
//! let site = Site::embedded().unwrap();
//! let en = &site.locale(Lang::En).hero.headline;
//! let id = &site.locale(Lang::En.toggle()).hero.headline;
//! assert_ne!(en, id);
//! ```

pub mod contact;
pub mod dictionary;
pub mod error;
pub mod image;
pub mod lang;
pub mod seo;
pub mod site;

pub use error::Error;
