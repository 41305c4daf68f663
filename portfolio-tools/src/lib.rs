//! Offline checks for the portfolio content files.
//!
//! Translators edit `en.toml` and `id.toml` by hand.
//! [`check_locales`] reports keys that exist in one locale but not in the other,
//! and also loads both files through the same schema the page uses.

use std::path::{Path, PathBuf};

use portfolio_content::{
    dictionary::Locale,
    lang::Lang,
    site::SiteConfig,
};
use rustc_hash::FxHashSet;
use toml::Value;

#[derive(Debug)]
pub enum Error {
    Io { path: PathBuf, msg: String },
    Toml { path: PathBuf, msg: String },
    Content(portfolio_content::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io { path, msg } => {
                write!(f, "Cannot read {}: {}", path.display(), msg)?;
            }
            Error::Toml { path, msg } => {
                write!(f, "Cannot parse {}: {}", path.display(), msg)?;
            }
            Error::Content(err) => {
                write!(f, "{}", err)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for Error {}

impl From<portfolio_content::Error> for Error {
    fn from(err: portfolio_content::Error) -> Self {
        Error::Content(err)
    }
}

/// Flatten a TOML document into dotted key paths.
///
/// Arrays of tables are addressed by index, e.g. `projects.list.0.name` .
/// Other arrays are leaves, so translations may have a different number of bullet points.
pub fn flatten_keys(value: &Value) -> Vec<String> {
    fn walk(prefix: &str, value: &Value, out: &mut Vec<String>) {
        match value {
            Value::Table(table) => {
                for (key, value) in table.iter() {
                    let path = if prefix.is_empty() {
                        key.clone()
                    } else {
                        format!("{}.{}", prefix, key)
                    };
                    walk(&path, value, out);
                }
            }
            Value::Array(items) if !items.is_empty() && items.iter().all(Value::is_table) => {
                for (index, item) in items.iter().enumerate() {
                    walk(&format!("{}.{}", prefix, index), item, out);
                }
            }
            _ => out.push(prefix.to_string()),
        }
    }
    let mut out = vec![];
    walk("", value, &mut out);
    out
}

/// Keys that differ between a reference document and another one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct KeyDiff {
    /// In the reference, absent from the other document.
    pub missing: Vec<String>,
    /// In the other document, absent from the reference.
    pub extra: Vec<String>,
}

impl KeyDiff {
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.extra.is_empty()
    }
}

/// Compare the key sets of two documents.
///
/// The result follows the order of [`flatten_keys`] .
pub fn diff_keys(reference: &Value, other: &Value) -> KeyDiff {
    let reference = flatten_keys(reference);
    let other = flatten_keys(other);
    let reference_set: FxHashSet<&str> = reference.iter().map(|x| x.as_str()).collect();
    let other_set: FxHashSet<&str> = other.iter().map(|x| x.as_str()).collect();
    KeyDiff {
        missing: reference
            .iter()
            .filter(|x| !other_set.contains(x.as_str()))
            .cloned()
            .collect(),
        extra: other
            .iter()
            .filter(|x| !reference_set.contains(x.as_str()))
            .cloned()
            .collect(),
    }
}

fn read(path: &Path) -> Result<String, Error> {
    std::fs::read_to_string(path).map_err(|err| Error::Io {
        path: path.to_path_buf(),
        msg: err.to_string(),
    })
}

fn parse(path: &Path, text: &str) -> Result<Value, Error> {
    toml::from_str(text).map_err(|err| Error::Toml {
        path: path.to_path_buf(),
        msg: err.to_string(),
    })
}

/// The locale file for `lang` inside `dir` .
pub fn locale_path(dir: &Path, lang: Lang) -> PathBuf {
    dir.join(format!("{}.toml", lang.code()))
}

/// Compare every locale in `dir` against the English one.
///
/// Each locale is also loaded as a [`Locale`] so schema errors surface here instead of in the browser.
pub fn check_locales(dir: &Path) -> Result<Vec<(Lang, KeyDiff)>, Error> {
    let reference_path = locale_path(dir, Lang::En);
    let reference_text = read(&reference_path)?;
    let reference = parse(&reference_path, &reference_text)?;
    let mut ret = vec![];
    for lang in Lang::all() {
        let path = locale_path(dir, *lang);
        let text = read(&path)?;
        Locale::from_toml(&path.to_string_lossy(), &text, "")?;
        if *lang == Lang::En {
            continue;
        }
        let value = parse(&path, &text)?;
        let diff = diff_keys(&reference, &value);
        log::debug!(
            "{}: {} missing, {} extra",
            path.display(),
            diff.missing.len(),
            diff.extra.len()
        );
        ret.push((*lang, diff));
    }
    Ok(ret)
}

/// Load and validate a site config file.
pub fn check_site(path: &Path) -> Result<SiteConfig, Error> {
    let text = read(path)?;
    let config = SiteConfig::from_toml(&path.to_string_lossy(), &text)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(text: &str) -> Value {
        toml::from_str(text).unwrap()
    }

    #[test]
    fn flattens_tables_and_arrays_of_tables() {
        let doc = value(
            r#"
            lang_label = "EN"
            [hero]
            kicker = "k"
            [about]
            paragraphs = ["a", "b"]
            [[projects.list]]
            name = "x"
            findings = ["f"]
            [[projects.list]]
            name = "y"
            "#,
        );
        let keys = flatten_keys(&doc);
        assert!(keys.contains(&"lang_label".to_string()));
        assert!(keys.contains(&"hero.kicker".to_string()));
        assert!(keys.contains(&"about.paragraphs".to_string()));
        assert!(keys.contains(&"projects.list.0.name".to_string()));
        assert!(keys.contains(&"projects.list.0.findings".to_string()));
        assert!(keys.contains(&"projects.list.1.name".to_string()));
        assert!(!keys.iter().any(|x| x.starts_with("about.paragraphs.")));
    }

    #[test]
    fn reports_missing_and_extra_keys() {
        let en = value("[nav]\nabout = \"About\"\nskills = \"Skills\"\n");
        let id = value("[nav]\nabout = \"Tentang\"\ncontact = \"Kontak\"\n");
        let diff = diff_keys(&en, &id);
        assert_eq!(diff.missing, vec!["nav.skills".to_string()]);
        assert_eq!(diff.extra, vec!["nav.contact".to_string()]);
        assert!(!diff.is_empty());
    }

    #[test]
    fn bullet_counts_may_differ() {
        let en = value("findings = [\"a\", \"b\"]");
        let id = value("findings = [\"a\"]");
        assert!(diff_keys(&en, &id).is_empty());
    }

    #[test]
    fn bundled_locales_match() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../portfolio-content/i18n");
        let report = check_locales(&dir).unwrap();
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].0, Lang::Id);
        assert!(report[0].1.is_empty(), "{:?}", report[0].1);
    }

    #[test]
    fn bundled_site_config_is_valid() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../portfolio-content/site.toml");
        let config = check_site(&path).unwrap();
        assert!(!config.profile.name.is_empty());
    }

    #[test]
    fn missing_dir_is_an_io_error() {
        let err = check_locales(Path::new("/nonexistent/i18n")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
