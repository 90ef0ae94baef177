//! Shortlisting, pricing and catalog logic lives here; nothing in this module renders.

pub mod catalog;
pub mod entities;
pub mod pricing;
pub mod query;
pub mod selection;
pub mod tier;

pub use catalog::Catalog;
#[allow(unused_imports)]
pub use entities::{EntityKind, Influencer, InfluencerId, Platform, Purpose, Venue, VenueId};
#[allow(unused_imports)]
pub use pricing::{estimate, ContentSelection, ContentType, PriceEstimate};
#[allow(unused_imports)]
pub use query::{influencer_categories, query_venues, FilterConfig, InfluencerFilter, SortOption};
#[allow(unused_imports)]
pub use selection::{FavoriteKey, SelectionState, SelectionStore, SharedSelectionStore};
#[allow(unused_imports)]
pub use tier::{classify, Tier, TierPolicy};
