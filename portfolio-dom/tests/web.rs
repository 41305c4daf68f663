#![cfg(target_arch = "wasm32")]

use std::rc::Rc;

use maomi::BackendContext;
use maomi_dom::DomBackend;
use portfolio_content::{
    contact::MailRedirect,
    image::ProfileImage,
    lang::{Lang, MemoryStore, PreferenceStore, PREFERENCE_KEY},
    seo::{HeadPlan, REQUIRED_SELECTORS},
    site::Site,
    Error as ContentError,
};
use portfolio_dom::{app::App, browser};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{HtmlFormElement, HtmlImageElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn site() -> Rc<Site> {
    Rc::new(Site::embedded().unwrap())
}

struct SharedStore(Rc<MemoryStore>);

impl PreferenceStore for SharedStore {
    fn get(&self, key: &str) -> Result<Option<String>, ContentError> {
        self.0.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ContentError> {
        self.0.set(key, value)
    }
}

#[wasm_bindgen_test]
fn contact_form_becomes_mail_url() {
    let form: HtmlFormElement = document()
        .create_element("form")
        .unwrap()
        .dyn_into()
        .unwrap();
    form.set_inner_html(
        r#"<input name="name" value="Rina"><input name="email" value="rina@example.com"><textarea name="inquiry">Need a dashboard</textarea>"#,
    );
    let redirect = MailRedirect::new("mailto:someone@example.com", "Portfolio Inquiry");
    let url = browser::contact_redirect_url(&form, &redirect).unwrap();
    assert!(url.starts_with("mailto:someone@example.com?subject=Portfolio%20Inquiry"));
    assert!(url.contains("rina%40example.com"));
    assert!(url.ends_with("Need%20a%20dashboard"));
}

#[wasm_bindgen_test]
fn empty_contact_form_is_rejected() {
    let form: HtmlFormElement = document()
        .create_element("form")
        .unwrap()
        .dyn_into()
        .unwrap();
    form.set_inner_html(r#"<input name="name" value="Rina"><input name="email" value="">"#);
    let redirect = MailRedirect::new("mailto:someone@example.com", "Portfolio Inquiry");
    assert!(browser::contact_redirect_url(&form, &redirect).is_err());
}

#[wasm_bindgen_test]
fn broken_image_switches_to_fallback_once() {
    let img: HtmlImageElement = document()
        .create_element("img")
        .unwrap()
        .dyn_into()
        .unwrap();
    img.set_src("https://unreachable.invalid/profile.jpg");
    let image = ProfileImage {
        src: "https://unreachable.invalid/profile.jpg".into(),
        fallback: "/dimas.png".into(),
    };
    assert!(browser::apply_image_fallback(&img, &image));
    assert!(img.src().ends_with("/dimas.png"));
    assert!(!browser::apply_image_fallback(&img, &image));
}

#[wasm_bindgen_test]
fn head_tags_are_updated_in_place() {
    let site = site();
    let head = document().head().unwrap();
    browser::apply_head(&HeadPlan::build(&site, Lang::En, "https://dimas.example/")).unwrap();
    browser::apply_head(&HeadPlan::build(&site, Lang::Id, "https://dimas.example/")).unwrap();
    assert_eq!(
        head.query_selector_all("meta[name='description']").unwrap().length(),
        1
    );
    assert_eq!(
        head.query_selector_all("script[type='application/ld+json']").unwrap().length(),
        2
    );
    assert_eq!(document().title(), site.locale(Lang::Id).meta.title);
    assert!(browser::check_head().is_empty());
    assert_eq!(REQUIRED_SELECTORS.len(), 4);
}

#[wasm_bindgen_test]
fn local_storage_keeps_the_language() {
    let store = browser::LocalStorageStore::new().unwrap();
    store.set(PREFERENCE_KEY, "id").unwrap();
    assert_eq!(store.get(PREFERENCE_KEY).unwrap().as_deref(), Some("id"));
    store.set(PREFERENCE_KEY, "en").unwrap();
    assert_eq!(store.get(PREFERENCE_KEY).unwrap().as_deref(), Some("en"));
}

#[wasm_bindgen_test]
async fn toggle_rerenders_and_saves() {
    let site = site();
    let store = Rc::new(MemoryStore::new());
    let elem = document().create_element("div").unwrap();
    let dom_backend = DomBackend::new_with_element(elem.clone()).unwrap();
    let backend_context = BackendContext::new(dom_backend);
    let site_for_app = site.clone();
    let store_for_app = Box::new(SharedStore(store.clone()));
    let mount_point = backend_context
        .enter_sync(move |ctx| {
            ctx.attach(move |app: &mut App| app.attach_site(site_for_app, store_for_app))
                .unwrap()
        })
        .map_err(|_| "Cannot init mount point")
        .unwrap();

    let en = site.locale(Lang::En);
    let id = site.locale(Lang::Id);
    assert!(elem.inner_html().contains(&en.hero.headline));
    assert_eq!(store.get(PREFERENCE_KEY).unwrap(), None);

    let root_rc = mount_point.root_component().rc();
    root_rc.update(|app| app.toggle()).await.unwrap();
    let html = elem.inner_html();
    assert!(html.contains(&id.hero.headline));
    assert!(html.contains(&id.nav.about));
    assert!(!html.contains(&en.hero.headline));
    assert_eq!(store.get(PREFERENCE_KEY).unwrap().as_deref(), Some("id"));
    assert_eq!(
        document().document_element().unwrap().get_attribute("lang").as_deref(),
        Some("id")
    );

    root_rc.update(|app| app.toggle()).await.unwrap();
    assert!(elem.inner_html().contains(&en.hero.headline));
    assert_eq!(store.get(PREFERENCE_KEY).unwrap().as_deref(), Some("en"));
}

#[wasm_bindgen_test]
fn mounted_page_restores_the_saved_language() {
    let site = site();
    let container = document().create_element("div").unwrap();
    container.set_id("app-mount-test");
    document().body().unwrap().append_child(&container).unwrap();
    let store = MemoryStore::new();
    store.set(PREFERENCE_KEY, "id").unwrap();

    portfolio_dom::mount("app-mount-test", site.clone(), Box::new(store)).unwrap();
    let html = container.inner_html();
    assert!(html.contains(&site.locale(Lang::Id).hero.headline));
    assert!(document().get_element_by_id("contact-form").is_some());
    assert!(document().get_element_by_id("profile-image").is_some());
    assert_eq!(document().title(), site.locale(Lang::Id).meta.title);
}
