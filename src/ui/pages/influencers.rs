use dioxus::prelude::*;

use crate::{
    app::AppHandles,
    domain::{
        estimate, influencer_categories, ContentType, EntityKind, Influencer, InfluencerFilter,
        Platform, PriceEstimate, Tier,
    },
    i18n::{Locale, MessageKey},
    ui::{
        components::{favorite_button::FavoriteButton, tier_badge::TierBadge},
        text::t,
        theme,
    },
    util::format::{format_followers, format_krw},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ViewMode {
    Grid,
    List,
}

/// Precomputed per-row data so cards never touch the store directly.
#[derive(Clone, Debug, PartialEq)]
struct InfluencerRow {
    influencer: Influencer,
    selected: bool,
    liked: bool,
    price: PriceEstimate,
}

#[component]
pub fn InfluencerPage(handles: AppHandles) -> Element {
    let locale = (handles.locale)();
    let mut store = handles.store;
    let mut view_mode = use_signal(|| ViewMode::Grid);
    let mut filter = use_signal(InfluencerFilter::default);

    let contents = store.with(|s| s.content_selection().clone());
    let current_filter = filter();
    let (rows, categories) = handles.catalog.with(|catalog| {
        let rows: Vec<InfluencerRow> = store.with(|s| {
            current_filter
                .apply(catalog.influencers())
                .into_iter()
                .map(|influencer| InfluencerRow {
                    selected: s.is_selected(EntityKind::Influencer, influencer.id),
                    liked: s.is_favorite(EntityKind::Influencer, influencer.id),
                    price: estimate(influencer.follower_count, &contents),
                    influencer: influencer.clone(),
                })
                .collect()
        });
        (rows, influencer_categories(catalog.influencers()))
    });

    let on_select = move |id: u32| store.with_mut(|s| s.toggle_influencer_selection(id));
    let on_favorite = move |(kind, id): (EntityKind, u32)| store.with_mut(|s| s.toggle_favorite(kind, id));

    rsx! {
        div { class: "mx-auto flex max-w-7xl flex-col px-6 py-6",
            header { class: "mb-6 flex flex-wrap items-end justify-between gap-4",
                div {
                    h1 { class: "text-3xl font-bold tracking-tight", "{t(locale, MessageKey::InfluencerTitle)}" }
                    p { class: "mt-1 text-sm text-gray-500", "{t(locale, MessageKey::InfluencerSubtitle)}" }
                }
                div { class: "flex gap-1 rounded-full bg-white p-1 shadow-sm",
                    button {
                        class: "{theme::chip(view_mode() == ViewMode::Grid)}",
                        onclick: move |_| view_mode.set(ViewMode::Grid),
                        "{t(locale, MessageKey::ViewGrid)}"
                    }
                    button {
                        class: "{theme::chip(view_mode() == ViewMode::List)}",
                        onclick: move |_| view_mode.set(ViewMode::List),
                        "{t(locale, MessageKey::ViewList)}"
                    }
                }
            }

            section { class: "{theme::PANEL} mb-6 flex flex-wrap items-center gap-6",
                div { class: "flex items-center gap-2",
                    span { class: "text-xs font-bold uppercase text-gray-400", "{t(locale, MessageKey::FilterContent)}" }
                    for content in ContentType::ALL {
                        button {
                            class: "{theme::chip(contents.contains(content))}",
                            onclick: move |_| {
                                store.with_mut(|s| {
                                    s.toggle_content_type(content);
                                });
                            },
                            "{content.label()}"
                        }
                    }
                }
                div { class: "flex items-center gap-2",
                    span { class: "text-xs font-bold uppercase text-gray-400", "{t(locale, MessageKey::FilterCategory)}" }
                    select {
                        class: "rounded-lg border border-gray-200 bg-gray-50 px-3 py-1.5 text-sm",
                        onchange: move |evt: FormEvent| {
                            let value = evt.value();
                            filter.with_mut(|f| {
                                f.category = if value.is_empty() { None } else { Some(value) };
                            });
                        },
                        option { value: "", "{t(locale, MessageKey::AllCategories)}" }
                        for category in categories {
                            option {
                                value: "{category}",
                                selected: current_filter.category.as_deref() == Some(category.as_str()),
                                "{category}"
                            }
                        }
                    }
                }
                div { class: "flex items-center gap-2",
                    span { class: "text-xs font-bold uppercase text-gray-400", "{t(locale, MessageKey::FilterFollowers)}" }
                    for tier in Tier::ALL {
                        button {
                            class: "{theme::chip(current_filter.tiers.contains(&tier))}",
                            onclick: move |_| filter.with_mut(|f| f.toggle_tier(tier)),
                            "{tier.name()} "
                            span { class: "opacity-60", "{tier.band_label()}" }
                        }
                    }
                }
                div { class: "flex items-center gap-2",
                    span { class: "text-xs font-bold uppercase text-gray-400", "{t(locale, MessageKey::FilterPlatform)}" }
                    for platform in Platform::ALL {
                        button {
                            class: "{theme::chip(current_filter.platforms.contains(&platform))}",
                            onclick: move |_| filter.with_mut(|f| f.toggle_platform(platform)),
                            "{platform.code()}"
                        }
                    }
                }
            }

            match view_mode() {
                ViewMode::Grid => rsx! {
                    div { class: "grid grid-cols-2 gap-5 md:grid-cols-3 lg:grid-cols-4",
                        for row in rows {
                            InfluencerCard {
                                key: "{row.influencer.id}",
                                row,
                                locale,
                                onselect: on_select,
                                onfavorite: on_favorite,
                            }
                        }
                    }
                },
                ViewMode::List => rsx! {
                    div { class: "flex flex-col gap-2",
                        for row in rows {
                            InfluencerListRow {
                                key: "{row.influencer.id}",
                                row,
                                onselect: on_select,
                                onfavorite: on_favorite,
                            }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn InfluencerCard(
    row: InfluencerRow,
    locale: Locale,
    onselect: EventHandler<u32>,
    onfavorite: EventHandler<(EntityKind, u32)>,
) -> Element {
    let influencer = row.influencer;
    let id = influencer.id;
    let select_label = if row.selected {
        t(locale, MessageKey::Selected)
    } else {
        t(locale, MessageKey::Select)
    };

    rsx! {
        article { class: "{theme::card(row.selected)}",
            div { class: "relative aspect-[4/5] overflow-hidden bg-gray-100",
                img { class: "h-full w-full object-cover", src: "{influencer.image}", alt: "{influencer.name}" }
                div { class: "absolute left-2 top-2 flex gap-1",
                    span { class: "{theme::CATEGORY_BADGE}", "{influencer.category}" }
                    TierBadge { follower_count: influencer.follower_count }
                }
                div { class: "absolute right-2 top-2",
                    FavoriteButton {
                        kind: EntityKind::Influencer,
                        id,
                        liked: row.liked,
                        ontoggle: move |key| onfavorite.call(key),
                    }
                }
                if row.selected {
                    span { class: "bg-accent absolute bottom-2 left-2 rounded px-2 py-0.5 text-[10px] font-bold text-black",
                        "{t(locale, MessageKey::Selected)}"
                    }
                }
            }
            div { class: "space-y-3 p-3",
                div {
                    h3 { class: "truncate text-base font-bold leading-tight", "{influencer.name}" }
                    p { class: "text-xs text-gray-400", "{influencer.handle}" }
                }
                div { class: "grid grid-cols-2 gap-2 border-y border-gray-50 py-2 text-center",
                    div {
                        p { class: "text-sm font-bold", "{format_followers(influencer.follower_count)}" }
                        p { class: "text-[9px] uppercase tracking-wide text-gray-400", "{t(locale, MessageKey::StatFollowers)}" }
                    }
                    div {
                        p { class: "text-sm font-bold", "{influencer.engagement}" }
                        p { class: "text-[9px] uppercase tracking-wide text-gray-400", "{t(locale, MessageKey::StatEngagement)}" }
                    }
                }
                div {
                    p { class: "text-[9px] uppercase tracking-wide text-gray-400", "{t(locale, MessageKey::Estimate)}" }
                    p { class: "font-mono text-xs font-semibold",
                        "{format_krw(row.price.min)} ~ {format_krw(row.price.max)}"
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

#[component]
fn InfluencerListRow(
    row: InfluencerRow,
    onselect: EventHandler<u32>,
    onfavorite: EventHandler<(EntityKind, u32)>,
) -> Element {
    let influencer = row.influencer;
    let id = influencer.id;

    rsx! {
        div {
            class: "{theme::list_row(row.selected)}",
            onclick: move |_| onselect.call(id),
            img { class: "mr-4 h-12 w-12 rounded-full object-cover", src: "{influencer.image}", alt: "{influencer.name}" }
            div { class: "flex-1",
                h3 { class: "text-sm font-bold", "{influencer.name}" }
                p { class: "text-xs text-gray-400", "{influencer.handle}" }
            }
            div { class: "mr-6 flex items-center gap-3 text-xs",
                TierBadge { follower_count: influencer.follower_count }
                span { class: "font-bold", "{format_followers(influencer.follower_count)}" }
                span { class: "text-gray-500", "{influencer.engagement}" }
                span { class: "font-mono text-gray-500", "{format_krw(row.price.min)}~" }
            }
            div { class: "mr-2",
                FavoriteButton {
                    kind: EntityKind::Influencer,
                    id,
                    liked: row.liked,
                    ontoggle: move |key| onfavorite.call(key),
                }
            }
            if row.selected {
                div { class: "h-2.5 w-2.5 rounded-full bg-black" }
            }
        }
    }
}
