pub mod favorite_button;
pub mod floating_bar;
pub mod tier_badge;
pub mod toast;
