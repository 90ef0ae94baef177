use dioxus::prelude::*;

use crate::{
    app::AppHandles,
    domain::{EntityKind, Influencer, Venue},
    i18n::{Locale, MessageKey},
    ui::{
        components::{favorite_button::FavoriteButton, tier_badge::TierBadge},
        text::{t, t_count},
        theme,
    },
    util::format::{format_followers, format_krw},
};

#[component]
pub fn MySelectionsPage(handles: AppHandles) -> Element {
    let locale = (handles.locale)();
    let mut store = handles.store;
    let mut active_tab = use_signal(|| EntityKind::Influencer);

    // Favorites whose ids no longer resolve in the catalog are skipped.
    let (influencers, venues): (Vec<Influencer>, Vec<Venue>) = handles.catalog.with(|catalog| {
        store.with(|s| {
            let influencers = s
                .favorite_ids(EntityKind::Influencer)
                .into_iter()
                .filter_map(|id| catalog.influencer(id).cloned())
                .collect();
            let venues = s
                .favorite_ids(EntityKind::Venue)
                .into_iter()
                .filter_map(|id| catalog.venue(id).cloned())
                .collect();
            (influencers, venues)
        })
    });

    let on_unfavorite = move |(kind, id): (EntityKind, u32)| store.with_mut(|s| s.toggle_favorite(kind, id));
    let tab = active_tab();
    let influencer_tab = t_count(locale, MessageKey::TabInfluencers, influencers.len());
    let venue_tab = t_count(locale, MessageKey::TabVenues, venues.len());
    let is_empty = match tab {
        EntityKind::Influencer => influencers.is_empty(),
        EntityKind::Venue => venues.is_empty(),
    };

    rsx! {
        div { class: "mx-auto flex max-w-5xl flex-col px-6 py-6",
            h1 { class: "mb-6 text-3xl font-bold tracking-tight", "{t(locale, MessageKey::NavSelections)}" }
            div { class: "mb-6 flex gap-6 border-b border-gray-100",
                button {
                    class: "{theme::tab(tab == EntityKind::Influencer)}",
                    onclick: move |_| active_tab.set(EntityKind::Influencer),
                    "{influencer_tab}"
                }
                button {
                    class: "{theme::tab(tab == EntityKind::Venue)}",
                    onclick: move |_| active_tab.set(EntityKind::Venue),
                    "{venue_tab}"
                }
            }

            if is_empty {
                div { class: "{theme::EMPTY_STATE}", "{t(locale, MessageKey::NoFavorites)}" }
            } else {
                div { class: "flex flex-col gap-2",
                    match tab {
                        EntityKind::Influencer => rsx! {
                            for influencer in influencers {
                                FavoriteInfluencerRow { key: "{influencer.id}", influencer, onremove: on_unfavorite }
                            }
                        },
                        EntityKind::Venue => rsx! {
                            for venue in venues {
                                FavoriteVenueRow { key: "{venue.id}", venue, locale, onremove: on_unfavorite }
                            }
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn FavoriteInfluencerRow(influencer: Influencer, onremove: EventHandler<(EntityKind, u32)>) -> Element {
    rsx! {
        div { class: "{theme::list_row(false)}",
            img { class: "mr-4 h-12 w-12 rounded-full object-cover", src: "{influencer.image}", alt: "{influencer.name}" }
            div { class: "flex-1",
                h3 { class: "text-sm font-bold", "{influencer.name}" }
                p { class: "text-xs text-gray-400", "{influencer.handle} · {influencer.category}" }
            }
            div { class: "mr-6 flex items-center gap-3 text-xs",
                TierBadge { follower_count: influencer.follower_count }
                span { class: "font-bold", "{format_followers(influencer.follower_count)}" }
            }
            FavoriteButton {
                kind: EntityKind::Influencer,
                id: influencer.id,
                liked: true,
                ontoggle: move |key| onremove.call(key),
            }
        }
    }
}

#[component]
fn FavoriteVenueRow(venue: Venue, locale: Locale, onremove: EventHandler<(EntityKind, u32)>) -> Element {
    let location = match locale {
        Locale::Ko if !venue.location_ko.is_empty() => venue.location_ko.clone(),
        _ => venue.location.clone(),
    };

    rsx! {
        div { class: "{theme::list_row(false)}",
            img { class: "mr-4 h-12 w-16 rounded-lg object-cover", src: "{venue.image}", alt: "{venue.name}" }
            div { class: "flex-1",
                h3 { class: "text-sm font-bold", "{venue.name}" }
                p { class: "text-xs text-gray-400", "{location} · {venue.pyeong}평" }
            }
            span { class: "mr-6 font-mono text-xs font-bold", "{format_krw(venue.price)}" }
            FavoriteButton {
                kind: EntityKind::Venue,
                id: venue.id,
                liked: true,
                ontoggle: move |key| onremove.call(key),
            }
        }
    }
}
