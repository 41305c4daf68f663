use portfolio_content::{
    contact::{ContactForm, MailRedirect},
    image::ProfileImage,
    lang::{persist_lang, restore_lang, Lang, MemoryStore},
    seo::HeadPlan,
    site::Site,
};

fn site() -> Site {
    Site::embedded().unwrap()
}

#[test]
fn locales_have_the_same_shape() {
    let site = site();
    let en = site.locale(Lang::En);
    let id = site.locale(Lang::Id);
    assert_eq!(en.about.paragraphs.len(), id.about.paragraphs.len());
    assert_eq!(en.skills.categories.len(), id.skills.categories.len());
    for (a, b) in en.skills.categories.iter().zip(&id.skills.categories) {
        assert_eq!(a.items.len(), b.items.len());
    }
    assert_eq!(en.projects.list.len(), id.projects.list.len());
    for (a, b) in en.projects.list.iter().zip(&id.projects.list) {
        assert_eq!(a.links, b.links);
        assert!(!a.findings.is_empty() && !b.findings.is_empty());
        assert!(!a.impact.is_empty() && !b.impact.is_empty());
    }
}

#[test]
fn name_placeholder_is_gone() {
    let site = site();
    for lang in Lang::all() {
        let locale = site.locale(*lang);
        assert!(locale.hero.sub.contains("Dimas Prayoga"));
        assert!(locale.footer.copyright.contains("Dimas Prayoga"));
        assert!(!format!("{:?}", locale).contains("{name}"));
    }
}

#[test]
fn toggling_switches_copy_and_preference() {
    let site = site();
    let store = MemoryStore::new();
    let mut lang = restore_lang(&store);
    assert_eq!(lang, Lang::En);
    assert_eq!(site.locale(lang).lang_label, "EN");
    let before = site.locale(lang).hero.headline.clone();

    lang = lang.toggle();
    persist_lang(&store, lang).unwrap();
    assert_eq!(site.locale(lang).lang_label, "ID");
    assert_ne!(site.locale(lang).hero.headline, before);
    assert_eq!(restore_lang(&store), Lang::Id);

    lang = lang.toggle();
    persist_lang(&store, lang).unwrap();
    assert_eq!(site.locale(lang).hero.headline, before);
    assert_eq!(restore_lang(&store), Lang::En);
}

#[test]
fn contact_redirect_uses_configured_address() {
    let site = site();
    let redirect = MailRedirect::from_config(&site.config.contact);
    let url = redirect
        .to_url(&ContactForm::new("Rina", "rina@example.com", "Hello"))
        .unwrap();
    assert!(url.starts_with("mailto:dimassprayoga08@gmail.com?subject=Portfolio%20Inquiry"));
    assert!(url.contains("Rina"));
    assert!(url.contains("rina%40example.com"));
    assert!(url.ends_with("Hello"));
}

#[test]
fn profile_image_falls_back_to_local_file() {
    let site = site();
    let image = ProfileImage::from_profile(&site.config.profile);
    assert_eq!(image.fallback, "/dimas.png");
    assert_eq!(
        image.fallback_for("https://unreachable.example/dimas.jpg"),
        Some("/dimas.png"),
    );
    assert_eq!(image.fallback_for(&format!("https://site.example{}", image.fallback)), None);
}

#[test]
fn head_plan_has_required_entries() {
    let site = site();
    let plan = HeadPlan::build(&site, Lang::En, "https://dimas.example/");
    for key in ["description", "keywords", "og:title", "og:description", "og:type", "og:url", "og:image"] {
        assert!(plan.meta(key).is_some(), "missing {}", key);
    }
    assert_eq!(plan.meta("og:image").unwrap().content, "/og-image.webp");
    assert_eq!(plan.scripts.len(), 2);
}
