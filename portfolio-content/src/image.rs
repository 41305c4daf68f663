//! Profile image sources and the broken-image fallback.

use url::Url;

use crate::site::Profile;

/// Turn a shareable link into a source an `<img>` can load.
///
/// Google Drive `file/d/<id>/view` pages are rewritten to the direct view endpoint.
/// Anything else is returned as-is, and an empty source resolves to `fallback` .
pub fn resolve_image(src: &str, fallback: &str) -> String {
    let src = src.trim();
    if src.is_empty() {
        return fallback.to_string();
    }
    match drive_file_id(src) {
        Some(id) => format!("https://drive.google.com/uc?export=view&id={}", id),
        None => src.to_string(),
    }
}

fn drive_file_id(src: &str) -> Option<String> {
    let url = Url::parse(src).ok()?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str() != Some("drive.google.com") {
        return None;
    }
    let mut segments = url.path_segments()?;
    match (segments.next(), segments.next(), segments.next()) {
        (Some("file"), Some("d"), Some(id)) if !id.is_empty() => {
            match segments.next() {
                Some("view") => Some(id.to_string()),
                _ => None,
            }
        }
        _ => None,
    }
}

/// The hero image with its local fallback.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileImage {
    pub src: String,
    pub fallback: String,
}

impl ProfileImage {
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            src: resolve_image(&profile.image_src, &profile.fallback_image),
            fallback: profile.fallback_image.clone(),
        }
    }

    /// The source to switch to after `current` failed to load.
    ///
    /// Returns `None` once the fallback itself is showing, so a missing fallback does not loop.
    pub fn fallback_for(&self, current: &str) -> Option<&str> {
        if self.fallback.is_empty() || current.contains(self.fallback.as_str()) {
            None
        } else {
            Some(&self.fallback)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drive_links_are_rewritten() {
        assert_eq!(
            resolve_image("https://drive.google.com/file/d/1AbC_d-9/view?usp=sharing", "/me.png"),
            "https://drive.google.com/uc?export=view&id=1AbC_d-9",
        );
        assert_eq!(
            resolve_image("https://drive.google.com/drive/folders/xyz", "/me.png"),
            "https://drive.google.com/drive/folders/xyz",
        );
        assert_eq!(
            resolve_image("https://example.com/file/d/abc/view", "/me.png"),
            "https://example.com/file/d/abc/view",
        );
    }

    #[test]
    fn local_and_empty_sources() {
        assert_eq!(resolve_image("/dimas.png", "/me.png"), "/dimas.png");
        assert_eq!(resolve_image("  ", "/me.png"), "/me.png");
    }

    #[test]
    fn fallback_once() {
        let image = ProfileImage {
            src: "https://cdn.example.com/dimas.jpg".into(),
            fallback: "/dimas.png".into(),
        };
        assert_eq!(image.fallback_for(&image.src), Some("/dimas.png"));
        assert_eq!(image.fallback_for("https://site.example/dimas.png"), None);
    }
}
