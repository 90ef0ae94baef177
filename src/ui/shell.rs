use dioxus::prelude::*;

use crate::app::{AppHandles, Route};
use crate::domain::EntityKind;
use crate::i18n::MessageKey;
use crate::ui::components::floating_bar::FloatingBar;
use crate::ui::text::t;
use crate::ui::theme;

#[component]
pub fn Shell(handles: AppHandles, children: Element) -> Element {
    let current_route = use_route::<Route>();
    let nav = use_navigator();
    let locale = (handles.locale)();
    let mut locale_signal = handles.locale;

    // The cost bar only makes sense on the two browse pages.
    let bar_kind = match current_route {
        Route::Influencers {} => Some(EntityKind::Influencer),
        Route::Venues {} => Some(EntityKind::Venue),
        Route::MySelections {} => None,
    };

    rsx! {
        div { class: "min-h-screen bg-[#f5f5f7] font-sans text-[#1d1d1f]",
            header {
                class: "fixed inset-x-0 top-0 z-30 h-16 border-b border-gray-100 bg-white/80 backdrop-blur",
                div { class: "mx-auto flex h-full max-w-7xl items-center justify-between px-6",
                    span { class: "text-lg font-bold tracking-tight", "BOOKING BOARD" }
                    nav { class: "flex gap-1",
                        NavButton {
                            active: matches!(current_route, Route::Influencers {}),
                            onclick: move |_| { nav.push(Route::Influencers {}); },
                            label: t(locale, MessageKey::NavInfluencer),
                        }
                        NavButton {
                            active: matches!(current_route, Route::Venues {}),
                            onclick: move |_| { nav.push(Route::Venues {}); },
                            label: t(locale, MessageKey::NavVenue),
                        }
                        NavButton {
                            active: matches!(current_route, Route::MySelections {}),
                            onclick: move |_| { nav.push(Route::MySelections {}); },
                            label: t(locale, MessageKey::NavSelections),
                        }
                    }
                    button {
                        class: "rounded-full border border-gray-200 px-3 py-1.5 text-xs font-bold uppercase hover:border-black",
                        onclick: move |_| locale_signal.with_mut(|current| *current = current.toggle()),
                        "{locale.toggle().code()}"
                    }
                }
            }
            main { class: "min-h-screen pb-24 pt-16",
                {children}
            }
            if let Some(kind) = bar_kind {
                FloatingBar { handles, kind }
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    rsx! {
        button {
            class: "{theme::nav_link(active)}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
