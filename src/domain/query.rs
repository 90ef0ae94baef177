//! Catalog filtering and ordering for the browse pages.

use std::collections::{BTreeSet, HashSet};

use super::{
    entities::{Influencer, Platform, Purpose, Venue},
    tier::{Tier, TierPolicy},
};

/// Purposes picked on the venue page. Empty means "no filter".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterConfig {
    purposes: BTreeSet<Purpose>,
}

impl FilterConfig {
    pub fn new(purposes: impl IntoIterator<Item = Purpose>) -> Self {
        Self {
            purposes: purposes.into_iter().collect(),
        }
    }

    pub fn toggle(&mut self, purpose: Purpose) {
        if !self.purposes.remove(&purpose) {
            self.purposes.insert(purpose);
        }
    }

    pub fn contains(&self, purpose: Purpose) -> bool {
        self.purposes.contains(&purpose)
    }

    pub fn is_empty(&self) -> bool {
        self.purposes.is_empty()
    }

    /// A venue passes when it carries any of the selected purposes.
    pub fn matches(&self, venue: &Venue) -> bool {
        self.is_empty() || !self.purposes.is_disjoint(&venue.types)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOption {
    #[default]
    Recommended,
    PriceLow,
    PriceHigh,
}

impl SortOption {
    pub const ALL: [SortOption; 3] = [
        SortOption::Recommended,
        SortOption::PriceLow,
        SortOption::PriceHigh,
    ];
}

/// Filters and orders `catalog` without touching it.
///
/// Sorting is stable: venues with equal prices keep their catalog order, and
/// `Recommended` is catalog order.
pub fn query_venues<'a>(catalog: &'a [Venue], filter: &FilterConfig, sort: SortOption) -> Vec<&'a Venue> {
    let mut venues: Vec<&Venue> = catalog.iter().filter(|venue| filter.matches(venue)).collect();

    match sort {
        SortOption::Recommended => {}
        SortOption::PriceLow => venues.sort_by(|a, b| a.price.cmp(&b.price)),
        SortOption::PriceHigh => venues.sort_by(|a, b| b.price.cmp(&a.price)),
    }

    venues
}

/// Filter options for the influencer page.
///
/// Each field left empty is ignored; populated fields must all match.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InfluencerFilter {
    pub tiers: HashSet<Tier>,
    pub category: Option<String>,
    pub platforms: HashSet<Platform>,
}

impl InfluencerFilter {
    pub fn toggle_tier(&mut self, tier: Tier) {
        if !self.tiers.remove(&tier) {
            self.tiers.insert(tier);
        }
    }

    pub fn toggle_platform(&mut self, platform: Platform) {
        if !self.platforms.remove(&platform) {
            self.platforms.insert(platform);
        }
    }

    pub fn matches(&self, influencer: &Influencer) -> bool {
        if !self.tiers.is_empty()
            && !self
                .tiers
                .contains(&TierPolicy::Band.classify(influencer.follower_count))
        {
            return false;
        }
        if let Some(ref category) = self.category {
            if !influencer.category.trim().eq_ignore_ascii_case(category.trim()) {
                return false;
            }
        }
        if !self.platforms.is_empty() {
            let Some(platform) = influencer.platform_kind() else {
                return false;
            };
            if !self.platforms.contains(&platform) {
                return false;
            }
        }
        true
    }

    pub fn apply<'a>(&self, catalog: &'a [Influencer]) -> Vec<&'a Influencer> {
        catalog.iter().filter(|influencer| self.matches(influencer)).collect()
    }
}

/// Distinct categories in catalog order, for the category dropdown.
///
/// Entries are trimmed and deduplicated ignoring ASCII case, matching how
/// [`InfluencerFilter::matches`] compares them. The first spelling wins.
pub fn influencer_categories(catalog: &[Influencer]) -> Vec<String> {
    let mut seen = HashSet::new();
    catalog
        .iter()
        .map(|influencer| influencer.category.trim())
        .filter(|category| !category.is_empty())
        .filter(|category| seen.insert(category.to_ascii_lowercase()))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    fn venue(id: u32, price: u64, types: &[Purpose]) -> Venue {
        Venue {
            id,
            name: format!("Venue {id}"),
            location: "Itaewon".into(),
            location_ko: "이태원".into(),
            price,
            pyeong: 40.0,
            sqm: 132.2,
            types: types.iter().copied().collect(),
            coordinates: Value::Null,
            image: String::new(),
        }
    }

    fn catalog() -> Vec<Venue> {
        vec![
            venue(1, 800_000, &[Purpose::Club, Purpose::Lounge]),
            venue(2, 300_000, &[Purpose::Cafe]),
            venue(3, 800_000, &[]),
            venue(4, 300_000, &[Purpose::Lounge, Purpose::PartyRoom]),
            venue(5, 1_500_000, &[Purpose::Hotel]),
        ]
    }

    fn ids(venues: &[&Venue]) -> Vec<u32> {
        venues.iter().map(|venue| venue.id).collect()
    }

    #[test]
    fn empty_filter_recommended_keeps_catalog_order() {
        let catalog = catalog();
        let result = query_venues(&catalog, &FilterConfig::default(), SortOption::Recommended);
        assert_eq!(ids(&result), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn purposes_combine_with_or() {
        let catalog = catalog();
        let filter = FilterConfig::new([Purpose::Lounge, Purpose::Hotel]);
        let result = query_venues(&catalog, &filter, SortOption::Recommended);
        assert_eq!(ids(&result), vec![1, 4, 5]);
        assert!(result.iter().all(|venue| filter.matches(venue)));
    }

    #[test]
    fn untagged_venues_only_pass_an_empty_filter() {
        let catalog = catalog();
        let filter = FilterConfig::new([Purpose::Studio]);
        assert!(query_venues(&catalog, &filter, SortOption::PriceLow).is_empty());
    }

    #[test]
    fn price_low_is_stable_ascending() {
        let catalog = catalog();
        let result = query_venues(&catalog, &FilterConfig::default(), SortOption::PriceLow);
        assert_eq!(ids(&result), vec![2, 4, 1, 3, 5]);
        assert!(result.windows(2).all(|pair| pair[0].price <= pair[1].price));
    }

    #[test]
    fn price_high_is_stable_descending() {
        let catalog = catalog();
        let result = query_venues(&catalog, &FilterConfig::default(), SortOption::PriceHigh);
        assert_eq!(ids(&result), vec![5, 1, 3, 2, 4]);
    }

    #[test]
    fn query_leaves_input_untouched() {
        let catalog = catalog();
        let before = catalog.clone();
        let _ = query_venues(&catalog, &FilterConfig::new([Purpose::Cafe]), SortOption::PriceHigh);
        assert_eq!(catalog, before);
    }

    #[test]
    fn empty_catalog_yields_nothing() {
        assert!(query_venues(&[], &FilterConfig::new([Purpose::Club]), SortOption::PriceLow).is_empty());
    }

    #[test]
    fn filter_toggle_is_an_involution() {
        let mut filter = FilterConfig::default();
        filter.toggle(Purpose::Pub);
        assert!(filter.contains(Purpose::Pub));
        filter.toggle(Purpose::Pub);
        assert_eq!(filter, FilterConfig::default());
    }

    fn influencer(id: u32, follower_count: u64, category: &str, platform: &str) -> Influencer {
        Influencer {
            id,
            name: format!("Creator {id}"),
            handle: format!("@c{id}"),
            follower_count,
            engagement: "2.0%".into(),
            category: category.into(),
            platform: platform.into(),
            image: String::new(),
        }
    }

    fn influencers() -> Vec<Influencer> {
        vec![
            influencer(1, 5_000, "Food", "IG"),
            influencer(2, 150_000, "Beauty", "YT"),
            influencer(3, 60_000, "Food", "TikTok"),
            influencer(4, 1_200_000, "Fashion", "Instagram"),
        ]
    }

    #[test]
    fn tier_filter_uses_band_thresholds() {
        let catalog = influencers();
        let mut filter = InfluencerFilter::default();
        filter.toggle_tier(Tier::Mega);
        let found: Vec<_> = filter.apply(&catalog).iter().map(|i| i.id).collect();
        assert_eq!(found, vec![2, 4]);
    }

    #[test]
    fn influencer_filters_combine_with_and() {
        let catalog = influencers();
        let filter = InfluencerFilter {
            tiers: HashSet::new(),
            category: Some("food".into()),
            platforms: [Platform::TikTok].into_iter().collect(),
        };
        let found: Vec<_> = filter.apply(&catalog).iter().map(|i| i.id).collect();
        assert_eq!(found, vec![3]);
        assert_eq!(InfluencerFilter::default().apply(&catalog).len(), 4);
    }

    #[test]
    fn offered_categories_always_find_their_influencers() {
        let catalog = vec![
            influencer(1, 5_000, " Food ", "IG"),
            influencer(2, 20_000, "food", "YT"),
            influencer(3, 30_000, "Travel\t", "IG"),
        ];
        let offered = influencer_categories(&catalog);
        assert_eq!(offered, vec!["Food".to_string(), "Travel".to_string()]);

        let mut filter = InfluencerFilter::default();
        filter.category = Some(offered[0].clone());
        let found: Vec<_> = filter.apply(&catalog).iter().map(|i| i.id).collect();
        assert_eq!(found, vec![1, 2]);

        filter.category = Some(offered[1].clone());
        assert_eq!(filter.apply(&catalog).len(), 1);
    }

    #[test]
    fn categories_are_distinct_in_catalog_order() {
        assert_eq!(
            influencer_categories(&influencers()),
            vec!["Food".to_string(), "Beauty".to_string(), "Fashion".to_string()]
        );
    }
}
