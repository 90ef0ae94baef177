use dioxus::prelude::*;

use crate::{domain::classify, ui::theme};

#[component]
pub fn TierBadge(follower_count: u64) -> Element {
    let tier = classify(follower_count);
    rsx! {
        span { class: "{theme::tier_badge(tier)}", "{tier.name()}" }
    }
}
