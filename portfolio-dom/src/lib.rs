//! The portfolio page, rendered in the browser with maomi.
//!
//! `wasm_main` runs when the module is instantiated:
//! it loads the compiled-in content, restores the saved language,
//! mounts [`app::App`] into the `#app` element,
//! and wires the contact form and the profile image fallback.
//!
//! ```html
//! <div id="app"></div>
//! <script type="module">
//!     import init from "./pkg/portfolio_dom.js"
//!     init()
//! </script>
//! ```

use std::rc::Rc;

use maomi::BackendContext;
use maomi_dom::DomBackend;
use portfolio_content::{
    contact::MailRedirect,
    image::ProfileImage,
    lang::{MemoryStore, PreferenceStore},
    site::Site,
};
use wasm_bindgen::prelude::*;

pub mod app;
pub mod browser;
mod error;
pub mod sections;

pub use error::Error;

/// The id of the element the page mounts into.
pub const MOUNT_ELEMENT_ID: &str = "app";

fn preference_store() -> Box<dyn PreferenceStore> {
    match browser::LocalStorageStore::new() {
        Ok(store) => Box::new(store),
        Err(err) => {
            log::warn!("{}, the language preference will not be saved", err);
            Box::new(MemoryStore::new())
        }
    }
}

/// Render the page into the element with `element_id` .
///
/// The mount point and the backend context live until the page unloads.
pub fn mount(element_id: &str, site: Rc<Site>, store: Box<dyn PreferenceStore>) -> Result<(), Error> {
    let dom_backend =
        DomBackend::new_with_element_id(element_id).map_err(|err| Error::backend(format!("{:?}", err)))?;
    let backend_context = BackendContext::new(dom_backend);

    let site_for_app = site.clone();
    backend_context
        .enter_sync(move |ctx| {
            let mount_point = ctx
                .attach(move |app: &mut app::App| app.attach_site(site_for_app, store))
                .map_err(|err| Error::backend(format!("{:?}", err)))?;
            // leak the mount point, so that event callbacks still work
            Box::leak(Box::new(mount_point));
            Ok::<(), Error>(())
        })
        .map_err(|_| Error::backend("Cannot init mount point"))??;

    // leak the backend context, so that event callbacks still work
    Box::leak(Box::new(backend_context));

    browser::bind_contact_form(
        sections::CONTACT_FORM_ID,
        MailRedirect::from_config(&site.config.contact),
    )?;
    browser::bind_image_fallback(
        sections::PROFILE_IMAGE_ID,
        ProfileImage::from_profile(&site.config.profile),
    )?;
    Ok(())
}

#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    // init logger
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    console_log::init_with_level(level).map_err(|err| Error::backend(err.to_string()))?;

    let site = Rc::new(Site::embedded().map_err(Error::from)?);
    mount(MOUNT_ELEMENT_ID, site, preference_store())?;
    log::info!("Portfolio page mounted");
    Ok(())
}
