use dioxus::prelude::*;

use crate::{
    app::AppHandles,
    domain::EntityKind,
    i18n::MessageKey,
    ui::{
        components::toast::{push_toast, ToastKind},
        text::t,
        theme,
    },
    util::format::format_krw,
};

/// Running count and minimum total for the shortlist of one catalog.
#[component]
pub fn FloatingBar(handles: AppHandles, kind: EntityKind) -> Element {
    let locale = (handles.locale)();
    let (count, cost) = handles.store.with(|store| {
        handles
            .catalog
            .with(|catalog| (store.selected_count(kind), store.aggregate_cost(kind, catalog)))
    });
    let label = match kind {
        EntityKind::Influencer => t(locale, MessageKey::SelectedInfluencers),
        EntityKind::Venue => t(locale, MessageKey::SelectedVenues),
    };
    let toasts = handles.toasts;

    rsx! {
        div {
            class: "floating-bar fixed bottom-8 left-1/2 z-40 flex w-[90%] max-w-2xl -translate-x-1/2 items-center justify-between rounded-full bg-[#1d1d1f] px-8 py-4 text-white shadow-2xl",
            div { class: "flex items-center gap-8",
                div { class: "flex flex-col",
                    span { class: "mb-0.5 text-xs font-bold uppercase tracking-wider text-gray-400", "{label}" }
                    div { class: "flex items-baseline gap-1",
                        span { class: "text-accent font-mono text-2xl font-bold", "{count}" }
                        span { class: "text-sm text-gray-400", "{t(locale, MessageKey::Items)}" }
                    }
                }
                div { class: "h-8 w-px bg-gray-700" }
                div { class: "flex flex-col",
                    span { class: "text-xs font-bold uppercase tracking-wider text-gray-400", "{t(locale, MessageKey::TotalMinimum)}" }
                    span { class: "font-mono text-xl font-bold", "{format_krw(cost)}~" }
                }
            }
            button {
                class: "{theme::BTN_ACCENT}",
                onclick: move |_| {
                    push_toast(toasts, ToastKind::Info, t(locale, MessageKey::RequestUnavailable));
                },
                "{t(locale, MessageKey::SendRequest)}"
            }
        }
    }
}
