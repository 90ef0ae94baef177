#![allow(dead_code)]

use std::collections::HashMap;

use super::entities::{Influencer, InfluencerId, Venue, VenueId};

/// Immutable snapshot of both catalogs with id lookups.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    influencers: Vec<Influencer>,
    venues: Vec<Venue>,
    influencer_index: HashMap<InfluencerId, usize>,
    venue_index: HashMap<VenueId, usize>,
}

impl Catalog {
    /// Builds lookups over the given rows. When an id repeats, the first row wins.
    pub fn new(influencers: Vec<Influencer>, venues: Vec<Venue>) -> Self {
        let mut influencer_index = HashMap::with_capacity(influencers.len());
        for (position, influencer) in influencers.iter().enumerate() {
            influencer_index.entry(influencer.id).or_insert(position);
        }
        let mut venue_index = HashMap::with_capacity(venues.len());
        for (position, venue) in venues.iter().enumerate() {
            venue_index.entry(venue.id).or_insert(position);
        }

        Self {
            influencers,
            venues,
            influencer_index,
            venue_index,
        }
    }

    pub fn influencers(&self) -> &[Influencer] {
        &self.influencers
    }

    pub fn venues(&self) -> &[Venue] {
        &self.venues
    }

    pub fn influencer(&self, id: InfluencerId) -> Option<&Influencer> {
        self.influencer_index
            .get(&id)
            .and_then(|&position| self.influencers.get(position))
    }

    pub fn venue(&self, id: VenueId) -> Option<&Venue> {
        self.venue_index
            .get(&id)
            .and_then(|&position| self.venues.get(position))
    }

    pub fn is_empty(&self) -> bool {
        self.influencers.is_empty() && self.venues.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn influencer(id: u32, name: &str) -> Influencer {
        serde_json::from_value(json!({
            "id": id,
            "name": name,
            "handle": format!("@{name}"),
            "followerCount": 1_000,
        }))
        .unwrap()
    }

    #[test]
    fn first_row_wins_on_duplicate_ids() {
        let catalog = Catalog::new(
            vec![influencer(1, "first"), influencer(2, "other"), influencer(1, "second")],
            Vec::new(),
        );
        assert_eq!(catalog.influencer(1).map(|i| i.name.as_str()), Some("first"));
        assert_eq!(catalog.influencers().len(), 3);
    }

    #[test]
    fn unknown_ids_resolve_to_none() {
        let catalog = Catalog::new(vec![influencer(1, "solo")], Vec::new());
        assert!(catalog.influencer(7).is_none());
        assert!(catalog.venue(1).is_none());
        assert!(!catalog.is_empty());
        assert!(Catalog::default().is_empty());
    }
}
