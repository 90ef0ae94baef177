use dioxus::{prelude::*, signals::Signal};
use tracing::info;

use crate::{
    config::AppConfig,
    domain::{Catalog, SelectionStore},
    i18n::{Locale, MessageKey},
    infra::catalog::load_catalog,
    ui::{
        components::toast::{Toast, ToastKind, ToastMessage},
        pages::{InfluencerPage, MySelectionsPage, VenuePage},
        shell::Shell,
        text::t,
    },
    util::assets,
};

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    #[route("/influencers")]
    Influencers {},
    #[route("/venue")]
    Venues {},
    #[route("/my-selections")]
    MySelections {},
}

/// Session state handed to every page as an explicit prop.
#[derive(Clone, Copy, PartialEq)]
pub struct AppHandles {
    pub store: Signal<SelectionStore>,
    pub catalog: Signal<Catalog>,
    pub locale: Signal<Locale>,
    pub toasts: Signal<Vec<ToastMessage>>,
}

#[component]
pub fn App() -> Element {
    // Parsed once in `main` and handed over through the launch builder.
    let config = use_hook(|| try_consume_context::<AppConfig>().unwrap_or_default());
    let (initial_catalog, initial_toasts) = use_hook(|| {
        let (catalog, errors) = load_catalog(config.catalog_dir.as_deref());
        let toasts = if errors.is_empty() {
            Vec::new()
        } else {
            vec![ToastMessage::new(
                ToastKind::Error,
                t(config.locale, MessageKey::CatalogUnavailable),
            )]
        };
        (catalog, toasts)
    });
    let locale = use_signal(|| config.locale);
    let toasts = use_signal(move || initial_toasts);
    let store = use_signal(SelectionStore::new);
    let catalog = use_signal(move || initial_catalog);

    use_hook(|| info!(locale = config.locale.code(), "Session started"));

    // Routable components take no props, so the route wrappers below pull the
    // handles from context once and every page receives them as a prop.
    use_context_provider(|| AppHandles {
        store,
        catalog,
        locale,
        toasts,
    });
    // The toast overlay reads its queue from context.
    use_context_provider(|| toasts);

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Script { src: TAILWIND_CDN }
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

#[component]
pub fn Influencers() -> Element {
    let handles = use_context::<AppHandles>();
    rsx! { Shell { handles, InfluencerPage { handles } } }
}

#[component]
pub fn Venues() -> Element {
    let handles = use_context::<AppHandles>();
    rsx! { Shell { handles, VenuePage { handles } } }
}

#[component]
pub fn MySelections() -> Element {
    let handles = use_context::<AppHandles>();
    rsx! { Shell { handles, MySelectionsPage { handles } } }
}
