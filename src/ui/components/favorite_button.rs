use dioxus::prelude::*;

use crate::{domain::EntityKind, ui::theme};

/// Heart toggle; stops the click from reaching the card underneath.
#[component]
pub fn FavoriteButton(kind: EntityKind, id: u32, liked: bool, ontoggle: EventHandler<(EntityKind, u32)>) -> Element {
    let (symbol, color, title) = if liked {
        ("♥", "text-[#ff4d4d]", "Remove favorite")
    } else {
        ("♡", "text-black", "Add favorite")
    };

    rsx! {
        button {
            class: "{theme::BTN_ICON} {color}",
            title: "{title}",
            onclick: move |evt: MouseEvent| {
                evt.stop_propagation();
                ontoggle.call((kind, id));
            },
            "{symbol}"
        }
    }
}
