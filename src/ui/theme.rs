//! Shared class strings so cards, chips and buttons look the same on every page.

use crate::domain::Tier;

// ============================================
// BUTTON STYLES
// ============================================

pub fn chip(active: bool) -> &'static str {
    if active {
        "rounded-full border border-black bg-black px-3 py-1.5 text-xs font-semibold text-white transition"
    } else {
        "rounded-full border border-gray-200 bg-white px-3 py-1.5 text-xs font-medium text-gray-600 transition hover:border-black hover:text-black"
    }
}

pub fn select_button(selected: bool) -> &'static str {
    if selected {
        "w-full rounded-md bg-black py-2 text-xs font-bold text-white transition-all duration-200"
    } else {
        "w-full rounded-md border border-gray-200 bg-white py-2 text-xs font-bold text-black transition-all duration-200 hover:bg-black hover:text-white"
    }
}

pub fn nav_link(active: bool) -> &'static str {
    if active {
        "rounded-full bg-black px-4 py-2 text-sm font-semibold text-white"
    } else {
        "rounded-full px-4 py-2 text-sm font-medium text-gray-500 transition hover:bg-gray-100 hover:text-black"
    }
}

pub fn tab(active: bool) -> &'static str {
    if active {
        "border-b-2 border-black pb-2 text-sm font-bold text-black"
    } else {
        "border-b-2 border-transparent pb-2 text-sm font-medium text-gray-400 hover:text-black"
    }
}

pub const BTN_ACCENT: &str = "bg-accent rounded-full px-6 py-2.5 font-bold text-black transition-all hover:brightness-110 active:scale-95";

pub const BTN_ICON: &str = "rounded-full bg-white/90 p-1.5 shadow-sm transition-colors hover:bg-white";

// ============================================
// PANEL / CONTAINER STYLES
// ============================================

pub fn card(selected: bool) -> &'static str {
    if selected {
        "card-lift relative overflow-hidden rounded-xl bg-white ring-accent"
    } else {
        "card-lift relative overflow-hidden rounded-xl border border-transparent bg-white shadow-sm hover:shadow-lg"
    }
}

pub fn list_row(selected: bool) -> &'static str {
    if selected {
        "flex cursor-pointer items-center rounded-xl border border-accent bg-white p-3 shadow-md transition-all"
    } else {
        "flex cursor-pointer items-center rounded-xl border border-transparent bg-white p-3 shadow-sm transition-all hover:border-gray-100 hover:shadow-md"
    }
}

pub const PANEL: &str = "rounded-xl border border-gray-100 bg-white p-4 shadow-sm";

pub const EMPTY_STATE: &str = "rounded-xl border border-dashed border-gray-200 bg-white p-10 text-center text-sm text-gray-400";

// ============================================
// BADGES
// ============================================

pub fn tier_badge(tier: Tier) -> &'static str {
    match tier {
        Tier::Mega => "rounded bg-black px-1.5 py-0.5 text-[10px] font-bold uppercase tracking-wide text-accent",
        Tier::Macro => "rounded bg-gray-800 px-1.5 py-0.5 text-[10px] font-bold uppercase tracking-wide text-white",
        Tier::Micro => "rounded bg-gray-200 px-1.5 py-0.5 text-[10px] font-bold uppercase tracking-wide text-gray-800",
        Tier::Nano => "rounded bg-gray-100 px-1.5 py-0.5 text-[10px] font-bold uppercase tracking-wide text-gray-500",
    }
}

pub const CATEGORY_BADGE: &str = "rounded bg-white/90 px-1.5 py-0.5 text-[10px] font-semibold text-black";
