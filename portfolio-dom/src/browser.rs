//! Browser bindings outside the component tree.
//!
//! The preference store, the document head, the contact form and the profile image
//! are plain DOM nodes, so they are handled through `web_sys` directly.

use portfolio_content::{
    contact::{ContactField, ContactForm, MailRedirect},
    image::ProfileImage,
    lang::{Lang, PreferenceStore},
    seo::{HeadPlan, REQUIRED_SELECTORS},
    Error as ContentError,
};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Document, Element, HtmlFormElement, HtmlImageElement};

use crate::error::{js_error_message, Error};

fn window() -> Result<web_sys::Window, Error> {
    web_sys::window().ok_or_else(|| Error::backend("Cannot access `window` outside web page environment"))
}

fn document() -> Result<Document, Error> {
    window()?
        .document()
        .ok_or_else(|| Error::backend("Cannot access `document` before it is ready"))
}

fn element_by_id<T: JsCast>(id: &str) -> Result<T, Error> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| Error::backend(format!("Cannot find the element {:?}", id)))?
        .dyn_into::<T>()
        .map_err(|_| Error::backend(format!("The element {:?} has an unexpected type", id)))
}

/// The preference store backed by `window.localStorage` .
pub struct LocalStorageStore {
    storage: web_sys::Storage,
}

impl LocalStorageStore {
    pub fn new() -> Result<Self, Error> {
        let storage = window()?
            .local_storage()
            .map_err(Error::from_js)?
            .ok_or_else(|| Error::backend("localStorage is not available"))?;
        Ok(Self { storage })
    }
}

impl PreferenceStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>, ContentError> {
        self.storage
            .get_item(key)
            .map_err(|err| ContentError::Storage {
                msg: js_error_message(&err),
            })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ContentError> {
        self.storage
            .set_item(key, value)
            .map_err(|err| ContentError::Storage {
                msg: js_error_message(&err),
            })
    }
}

/// The current page address.
pub fn page_url() -> String {
    window()
        .and_then(|window| window.location().href().map_err(Error::from_js))
        .unwrap_or_else(|err| {
            log::warn!("{}", err);
            String::new()
        })
}

/// Set `<html lang>` .
pub fn set_document_lang(lang: Lang) -> Result<(), Error> {
    let root = document()?
        .document_element()
        .ok_or_else(|| Error::backend("Cannot find the <html> element"))?;
    root.set_attribute("lang", lang.code()).map_err(Error::from_js)
}

fn upsert_head_element(
    document: &Document,
    head: &Element,
    selector: &str,
    tag_name: &str,
    init: impl FnOnce(&Element) -> Result<(), Error>,
) -> Result<Element, Error> {
    if let Some(elem) = head.query_selector(selector).map_err(Error::from_js)? {
        return Ok(elem);
    }
    let elem = document.create_element(tag_name).map_err(Error::from_js)?;
    init(&elem)?;
    head.append_child(&elem).map_err(Error::from_js)?;
    Ok(elem)
}

/// Write the title, meta tags, canonical link and JSON-LD scripts.
///
/// Existing tags are updated in place.
pub fn apply_head(plan: &HeadPlan) -> Result<(), Error> {
    let document = document()?;
    let head: Element = document
        .head()
        .ok_or_else(|| Error::backend("Cannot find the <head> element"))?
        .into();
    document.set_title(&plan.title);
    for tag in plan.meta.iter() {
        let elem = upsert_head_element(&document, &head, &tag.selector(), "meta", |elem| {
            elem.set_attribute(tag.attr.as_str(), tag.key)
                .map_err(Error::from_js)
        })?;
        elem.set_attribute("content", &tag.content)
            .map_err(Error::from_js)?;
    }
    let canonical = upsert_head_element(&document, &head, "link[rel='canonical']", "link", |elem| {
        elem.set_attribute("rel", "canonical").map_err(Error::from_js)
    })?;
    canonical
        .set_attribute("href", &plan.canonical)
        .map_err(Error::from_js)?;
    for script in plan.scripts.iter() {
        let elem = match document.get_element_by_id(script.id) {
            Some(elem) => elem,
            None => {
                let elem = document.create_element("script").map_err(Error::from_js)?;
                elem.set_attribute("type", "application/ld+json")
                    .map_err(Error::from_js)?;
                elem.set_id(script.id);
                head.append_child(&elem).map_err(Error::from_js)?;
                elem
            }
        };
        elem.set_text_content(Some(&script.json.to_string()));
    }
    Ok(())
}

/// Warn about required head tags that are missing.
///
/// Returns the selectors that matched nothing.
pub fn check_head() -> Vec<&'static str> {
    let head = match document().map(|document| document.head()) {
        Ok(Some(head)) => head,
        _ => return REQUIRED_SELECTORS.to_vec(),
    };
    let missing: Vec<&'static str> = REQUIRED_SELECTORS
        .iter()
        .copied()
        .filter(|selector| !matches!(head.query_selector(selector), Ok(Some(_))))
        .collect();
    for selector in missing.iter() {
        log::warn!("[SEO] Missing {}", selector);
    }
    missing
}

/// Read the contact form and build the redirect URL.
pub fn contact_redirect_url(form: &HtmlFormElement, redirect: &MailRedirect) -> Result<String, Error> {
    let data = web_sys::FormData::new_with_form(form).map_err(Error::from_js)?;
    let field = |name: &str| data.get(name).as_string().unwrap_or_default();
    let contact = ContactForm::new(&field("name"), &field("email"), &field("inquiry"));
    redirect
        .to_url(&contact)
        .map_err(|err| Error::backend(err.to_string()))
}

/// Intercept the contact form submission and hand the message to the mail client.
///
/// The text fields are also marked `required` for native validation.
pub fn bind_contact_form(form_id: &str, redirect: MailRedirect) -> Result<(), Error> {
    let form: HtmlFormElement = element_by_id(form_id)?;
    for field in ContactField::all() {
        let selector = format!("[name='{}']", field.name());
        if let Some(control) = form.query_selector(&selector).map_err(Error::from_js)? {
            control
                .set_attribute("required", "")
                .map_err(Error::from_js)?;
        }
    }
    let target = form.clone();
    let cb = Closure::<dyn Fn(web_sys::SubmitEvent)>::new(move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let url = match contact_redirect_url(&target, &redirect) {
            Ok(url) => url,
            Err(err) => {
                log::warn!("{}", err);
                return;
            }
        };
        log::debug!("Redirecting contact form to the mail client");
        if let Err(err) = window().and_then(|w| w.location().set_href(&url).map_err(Error::from_js)) {
            log::error!("{}", err);
        }
    });
    form.add_event_listener_with_callback("submit", cb.as_ref().unchecked_ref())
        .map_err(Error::from_js)?;
    // the form lives as long as the page
    cb.forget();
    Ok(())
}

/// Swap a failed image for the fallback.
///
/// Returns whether the source changed.
pub fn apply_image_fallback(img: &HtmlImageElement, image: &ProfileImage) -> bool {
    let current = img.src();
    match image.fallback_for(&current) {
        Some(fallback) => {
            log::warn!("Cannot load image {:?}, using {:?}", current, fallback);
            img.set_src(fallback);
            true
        }
        None => false,
    }
}

/// Install the broken-image fallback on the element with `img_id` .
pub fn bind_image_fallback(img_id: &str, image: ProfileImage) -> Result<(), Error> {
    let img: HtmlImageElement = element_by_id(img_id)?;
    if img.complete() && img.natural_width() == 0 && !img.src().is_empty() {
        apply_image_fallback(&img, &image);
    }
    let cb = Closure::<dyn Fn(web_sys::Event)>::new(move |ev: web_sys::Event| {
        let target = ev
            .target()
            .and_then(|x| x.dyn_into::<HtmlImageElement>().ok());
        if let Some(img) = target {
            apply_image_fallback(&img, &image);
        }
    });
    img.add_event_listener_with_callback("error", cb.as_ref().unchecked_ref())
        .map_err(Error::from_js)?;
    cb.forget();
    Ok(())
}
