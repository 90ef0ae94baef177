use dioxus::prelude::*;

use crate::{
    app::AppHandles,
    domain::{query_venues, EntityKind, FilterConfig, Purpose, SortOption, Venue},
    i18n::{Locale, MessageKey},
    ui::{
        components::favorite_button::FavoriteButton,
        text::{t, t_count},
        theme,
    },
    util::format::format_krw,
};

#[derive(Clone, Debug, PartialEq)]
struct VenueRow {
    venue: Venue,
    selected: bool,
    liked: bool,
}

fn sort_label(sort: SortOption) -> MessageKey {
    match sort {
        SortOption::Recommended => MessageKey::SortRecommended,
        SortOption::PriceLow => MessageKey::SortPriceLow,
        SortOption::PriceHigh => MessageKey::SortPriceHigh,
    }
}

#[component]
pub fn VenuePage(handles: AppHandles) -> Element {
    let locale = (handles.locale)();
    let mut store = handles.store;
    let mut purposes = use_signal(FilterConfig::default);
    let mut sort = use_signal(SortOption::default);
    let mut sort_open = use_signal(|| false);

    let current_purposes = purposes();
    let current_sort = sort();
    let rows: Vec<VenueRow> = handles.catalog.with(|catalog| {
        store.with(|s| {
            query_venues(catalog.venues(), &current_purposes, current_sort)
                .into_iter()
                .map(|venue| VenueRow {
                    selected: s.is_selected(EntityKind::Venue, venue.id),
                    liked: s.is_favorite(EntityKind::Venue, venue.id),
                    venue: venue.clone(),
                })
                .collect()
        })
    });
    let showing = t_count(locale, MessageKey::VenueShowing, rows.len());

    let on_select = move |id: u32| store.with_mut(|s| s.toggle_venue_selection(id));
    let on_favorite = move |(kind, id): (EntityKind, u32)| store.with_mut(|s| s.toggle_favorite(kind, id));

    rsx! {
        div { class: "flex flex-col",
            div { class: "sticky top-16 z-10 flex flex-wrap items-center justify-between gap-3 border-b border-gray-100 bg-white px-6 py-4 shadow-sm",
                div { class: "hide-scrollbar flex flex-1 items-center gap-2 overflow-x-auto",
                    h1 { class: "mr-4 whitespace-nowrap text-xl font-bold", "{t(locale, MessageKey::VenueTitle)}" }
                    for purpose in Purpose::FILTER_CHIPS {
                        button {
                            class: "{theme::chip(current_purposes.contains(purpose))} whitespace-nowrap",
                            onclick: move |_| purposes.with_mut(|f| f.toggle(purpose)),
                            "{t(locale, MessageKey::Purpose(purpose))}"
                        }
                    }
                }
                div { class: "relative",
                    button {
                        class: "rounded-lg border border-gray-200 px-3 py-2 text-sm font-medium hover:border-black",
                        onclick: move |_| sort_open.set(!sort_open()),
                        "{t(locale, MessageKey::SortLabel)}: {t(locale, sort_label(current_sort))} ▾"
                    }
                    if sort_open() {
                        div { class: "absolute right-0 mt-2 w-48 overflow-hidden rounded-lg border border-gray-100 bg-white shadow-lg",
                            for option in SortOption::ALL {
                                button {
                                    class: "block w-full px-4 py-2 text-left text-sm hover:bg-gray-50",
                                    onclick: move |_| {
                                        sort.set(option);
                                        sort_open.set(false);
                                    },
                                    "{t(locale, sort_label(option))}"
                                }
                            }
                        }
                    }
                }
            }

            div { class: "mx-auto w-full max-w-7xl px-6 py-6",
                p { class: "mb-4 text-sm text-gray-500", "{showing}" }
                div { class: "grid grid-cols-1 gap-5 md:grid-cols-2 lg:grid-cols-3",
                    for row in rows {
                        VenueCard {
                            key: "{row.venue.id}",
                            row,
                            locale,
                            onselect: on_select,
                            onfavorite: on_favorite,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn VenueCard(
    row: VenueRow,
    locale: Locale,
    onselect: EventHandler<u32>,
    onfavorite: EventHandler<(EntityKind, u32)>,
) -> Element {
    let venue = row.venue;
    let id = venue.id;
    let location = match locale {
        Locale::Ko if !venue.location_ko.is_empty() => venue.location_ko.clone(),
        _ => venue.location.clone(),
    };
    let tags: Vec<&'static str> = venue
        .types
        .iter()
        .map(|purpose| t(locale, MessageKey::Purpose(*purpose)))
        .collect();
    let select_label = if row.selected {
        t(locale, MessageKey::Selected)
    } else {
        t(locale, MessageKey::Select)
    };

    rsx! {
        article { class: "{theme::card(row.selected)}",
            div { class: "relative aspect-[16/10] overflow-hidden bg-gray-100",
                img { class: "h-full w-full object-cover", src: "{venue.image}", alt: "{venue.name}" }
                div { class: "absolute right-2 top-2",
                    FavoriteButton {
                        kind: EntityKind::Venue,
                        id,
                        liked: row.liked,
                        ontoggle: move |key| onfavorite.call(key),
                    }
                }
            }
            div { class: "space-y-2 p-4",
                div { class: "flex items-start justify-between gap-2",
                    div {
                        h3 { class: "text-base font-bold leading-tight", "{venue.name}" }
                        p { class: "text-xs text-gray-400", "📍 {location}" }
                    }
                    p { class: "whitespace-nowrap font-mono text-sm font-bold", "{format_krw(venue.price)}" }
                }
                p { class: "text-xs text-gray-500", "{venue.pyeong}평 · {venue.sqm}㎡" }
                div { class: "flex flex-wrap gap-1",
                    for tag in tags {
                        span { class: "rounded bg-gray-100 px-1.5 py-0.5 text-[10px] font-medium text-gray-600", "{tag}" }
                    }
                }
                button {
                    class: "{theme::select_button(row.selected)}",
                    onclick: move |_| onselect.call(id),
                    "{select_label}"
                }
            }
        }
    }
}
