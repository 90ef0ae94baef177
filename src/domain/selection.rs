//! Session shortlist: selected influencers, selected venues and favorites.

use std::{
    collections::HashMap,
    hash::Hash,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use tracing::debug;

use super::{
    catalog::Catalog,
    entities::EntityKind,
    pricing::{estimate, ContentSelection, ContentType},
};

/// Insertion-ordered set of ids.
///
/// Removal leaves a hole in `slots` that is compacted away once holes
/// outnumber live entries, so toggles stay O(1) amortized.
#[derive(Clone, Debug)]
pub struct IdSet<T> {
    slots: Vec<Option<T>>,
    index: HashMap<T, usize>,
}

impl<T: Copy + Eq> PartialEq for IdSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.slots.iter().flatten().eq(other.slots.iter().flatten())
    }
}

impl<T: Copy + Eq> Eq for IdSet<T> {}

impl<T> Default for IdSet<T> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T: Copy + Eq + Hash> IdSet<T> {
    /// Removes `id` if present, inserts it otherwise. Returns whether it is now a member.
    pub fn toggle(&mut self, id: T) -> bool {
        if let Some(position) = self.index.remove(&id) {
            self.slots[position] = None;
            if self.slots.len() - self.index.len() > self.index.len() {
                self.compact();
            }
            false
        } else {
            self.index.insert(id, self.slots.len());
            self.slots.push(Some(id));
            true
        }
    }

    fn compact(&mut self) {
        self.slots.retain(Option::is_some);
        for (position, slot) in self.slots.iter().enumerate() {
            if let Some(id) = slot {
                self.index.insert(*id, position);
            }
        }
    }

    pub fn contains(&self, id: &T) -> bool {
        self.index.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.slots.iter().flatten().copied()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

/// Bookmark on a catalog entry of either kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FavoriteKey {
    pub kind: EntityKind,
    pub id: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub selected_influencers: IdSet<u32>,
    pub selected_venues: IdSet<u32>,
    pub favorites: IdSet<FavoriteKey>,
}

impl SelectionState {
    fn selected(&self, kind: EntityKind) -> &IdSet<u32> {
        match kind {
            EntityKind::Influencer => &self.selected_influencers,
            EntityKind::Venue => &self.selected_venues,
        }
    }
}

/// Owns the shortlist state for one session.
///
/// Ids are never checked against the catalog here; dangling ids are tolerated
/// and resolve to nothing when the catalog is consulted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectionStore {
    state: SelectionState,
    contents: ContentSelection,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn toggle_influencer_selection(&mut self, id: u32) {
        let selected = self.state.selected_influencers.toggle(id);
        debug!(id, selected, "toggled influencer selection");
    }

    pub fn toggle_venue_selection(&mut self, id: u32) {
        let selected = self.state.selected_venues.toggle(id);
        debug!(id, selected, "toggled venue selection");
    }

    pub fn toggle_favorite(&mut self, kind: EntityKind, id: u32) {
        let favorite = self.state.favorites.toggle(FavoriteKey { kind, id });
        debug!(?kind, id, favorite, "toggled favorite");
    }

    pub fn is_favorite(&self, kind: EntityKind, id: u32) -> bool {
        self.state.favorites.contains(&FavoriteKey { kind, id })
    }

    pub fn is_selected(&self, kind: EntityKind, id: u32) -> bool {
        self.state.selected(kind).contains(&id)
    }

    pub fn selected_count(&self, kind: EntityKind) -> usize {
        self.state.selected(kind).len()
    }

    pub fn selected_ids(&self, kind: EntityKind) -> Vec<u32> {
        self.state.selected(kind).iter().collect()
    }

    /// Favorite ids of one kind, oldest first.
    pub fn favorite_ids(&self, kind: EntityKind) -> Vec<u32> {
        self.state
            .favorites
            .iter()
            .filter(|key| key.kind == kind)
            .map(|key| key.id)
            .collect()
    }

    /// Lower-bound cost of everything selected of `kind`.
    ///
    /// Influencers are priced with every content type requested and only the
    /// `min` end counts; venues contribute their flat price. Ids missing from
    /// the catalog contribute zero.
    pub fn aggregate_cost(&self, kind: EntityKind, catalog: &Catalog) -> u64 {
        let selected = self.state.selected(kind);
        match kind {
            EntityKind::Influencer => {
                let contents = ContentSelection::full();
                selected
                    .iter()
                    .filter_map(|id| catalog.influencer(id))
                    .map(|influencer| estimate(influencer.follower_count, &contents).min)
                    .fold(0u64, u64::saturating_add)
            }
            EntityKind::Venue => selected
                .iter()
                .filter_map(|id| catalog.venue(id))
                .map(|venue| venue.price)
                .fold(0u64, u64::saturating_add),
        }
    }

    /// Content types requested on the influencer page; never empty.
    pub fn content_selection(&self) -> &ContentSelection {
        &self.contents
    }

    /// Returns false when the toggle was ignored to keep one type selected.
    pub fn toggle_content_type(&mut self, content: ContentType) -> bool {
        let applied = self.contents.toggle(content);
        if !applied {
            debug!(content = content.label(), "kept last content type selected");
        }
        applied
    }
}

/// Thread-safe handle around a [`SelectionStore`].
///
/// Each call holds the lock for the whole read-modify-write so concurrent
/// toggles never lose updates.
#[derive(Clone, Debug, Default)]
pub struct SharedSelectionStore {
    inner: Arc<Mutex<SelectionStore>>,
}

impl SharedSelectionStore {
    pub fn new(store: SelectionStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SelectionStore> {
        // Toggles cannot panic midway, so a poisoned guard still holds consistent state.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn toggle_influencer_selection(&self, id: u32) {
        self.lock().toggle_influencer_selection(id);
    }

    pub fn toggle_venue_selection(&self, id: u32) {
        self.lock().toggle_venue_selection(id);
    }

    pub fn toggle_favorite(&self, kind: EntityKind, id: u32) {
        self.lock().toggle_favorite(kind, id);
    }

    pub fn is_favorite(&self, kind: EntityKind, id: u32) -> bool {
        self.lock().is_favorite(kind, id)
    }

    pub fn aggregate_cost(&self, kind: EntityKind, catalog: &Catalog) -> u64 {
        self.lock().aggregate_cost(kind, catalog)
    }

    /// Runs `f` against the store while holding the lock.
    pub fn with<R>(&self, f: impl FnOnce(&mut SelectionStore) -> R) -> R {
        f(&mut self.lock())
    }

    pub fn snapshot(&self) -> SelectionStore {
        self.lock().clone()
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use serde_json::Value;

    use super::*;
    use crate::domain::entities::{Influencer, Venue};

    fn influencer(id: u32, follower_count: u64) -> Influencer {
        Influencer {
            id,
            name: format!("Creator {id}"),
            handle: format!("@creator{id}"),
            follower_count,
            engagement: "3.1%".into(),
            category: "Beauty".into(),
            platform: "IG".into(),
            image: String::new(),
        }
    }

    fn venue(id: u32, price: u64) -> Venue {
        Venue {
            id,
            name: format!("Venue {id}"),
            location: "Hongdae".into(),
            location_ko: "홍대".into(),
            price,
            pyeong: 20.0,
            sqm: 66.1,
            types: Default::default(),
            coordinates: Value::Null,
            image: String::new(),
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(
            vec![influencer(1, 1_000), influencer(2, 12_345)],
            vec![venue(10, 500_000), venue(11, 1_200_000)],
        )
    }

    #[test]
    fn toggling_twice_restores_previous_state() {
        let mut store = SelectionStore::new();
        store.toggle_influencer_selection(1);
        store.toggle_favorite(EntityKind::Venue, 10);
        let before = store.clone();

        store.toggle_influencer_selection(2);
        store.toggle_influencer_selection(2);
        store.toggle_venue_selection(11);
        store.toggle_venue_selection(11);
        store.toggle_favorite(EntityKind::Influencer, 1);
        store.toggle_favorite(EntityKind::Influencer, 1);

        assert_eq!(store, before);
    }

    #[test]
    fn favorites_are_scoped_by_kind() {
        let mut store = SelectionStore::new();
        store.toggle_favorite(EntityKind::Influencer, 10);
        assert!(store.is_favorite(EntityKind::Influencer, 10));
        assert!(!store.is_favorite(EntityKind::Venue, 10));
        assert!(!store.is_selected(EntityKind::Influencer, 10));
    }

    #[test]
    fn selection_keeps_insertion_order() {
        let mut store = SelectionStore::new();
        for id in [3, 1, 2] {
            store.toggle_venue_selection(id);
        }
        store.toggle_venue_selection(1);
        store.toggle_venue_selection(1);
        assert_eq!(store.selected_ids(EntityKind::Venue), vec![3, 2, 1]);
        assert_eq!(store.selected_count(EntityKind::Venue), 3);
        assert_eq!(store.selected_count(EntityKind::Influencer), 0);
    }

    #[test]
    fn id_set_compacts_without_losing_order() {
        let mut ids = IdSet::default();
        for id in 0..100u32 {
            ids.toggle(id);
        }
        for id in (0..100u32).step_by(2) {
            assert!(!ids.toggle(id));
            assert!(ids.slots.len() <= 2 * ids.len());
        }
        ids.toggle(4);

        let mut expected: Vec<u32> = (1..100).step_by(2).collect();
        expected.push(4);
        assert_eq!(ids.iter().collect::<Vec<_>>(), expected);
        assert_eq!(ids.len(), 51);
        assert!(ids.contains(&99) && ids.contains(&4) && !ids.contains(&2));

        for id in expected {
            ids.toggle(id);
        }
        assert!(ids.is_empty());
        assert!(ids.slots.is_empty());
        assert_eq!(ids, IdSet::default());
    }

    #[test]
    fn favorite_ids_filter_by_kind_in_order() {
        let mut store = SelectionStore::new();
        store.toggle_favorite(EntityKind::Venue, 11);
        store.toggle_favorite(EntityKind::Influencer, 2);
        store.toggle_favorite(EntityKind::Venue, 10);
        assert_eq!(store.favorite_ids(EntityKind::Venue), vec![11, 10]);
        assert_eq!(store.favorite_ids(EntityKind::Influencer), vec![2]);
    }

    #[test]
    fn venue_cost_ignores_dangling_ids() {
        let mut store = SelectionStore::new();
        store.toggle_venue_selection(99);
        store.toggle_venue_selection(10);
        assert_eq!(store.aggregate_cost(EntityKind::Venue, &catalog()), 500_000);
    }

    #[test]
    fn influencer_cost_sums_full_package_minimums() {
        let mut store = SelectionStore::new();
        store.toggle_influencer_selection(1);
        store.toggle_influencer_selection(2);
        store.toggle_influencer_selection(404);
        // 1,000 followers -> 28,000; 12,345 followers -> 346,000
        assert_eq!(
            store.aggregate_cost(EntityKind::Influencer, &catalog()),
            374_000
        );
    }

    #[test]
    fn empty_selection_costs_nothing() {
        let store = SelectionStore::new();
        assert_eq!(store.aggregate_cost(EntityKind::Venue, &catalog()), 0);
        assert_eq!(store.aggregate_cost(EntityKind::Influencer, &Catalog::default()), 0);
    }

    #[test]
    fn content_selection_never_empties() {
        let mut store = SelectionStore::new();
        assert!(!store.toggle_content_type(ContentType::Feed));
        assert!(store.content_selection().contains(ContentType::Feed));
        assert!(store.toggle_content_type(ContentType::Story));
        assert!(store.toggle_content_type(ContentType::Feed));
        assert!(!store.toggle_content_type(ContentType::Story));
        assert!(store.content_selection().contains(ContentType::Story));
    }

    #[test]
    fn concurrent_toggles_do_not_lose_updates() {
        let shared = SharedSelectionStore::default();
        let handles: Vec<_> = (0..8u32)
            .map(|worker| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for round in 0..100u32 {
                        shared.toggle_influencer_selection(worker * 1_000 + round);
                        shared.toggle_favorite(EntityKind::Venue, worker);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let snapshot = shared.snapshot();
        assert_eq!(snapshot.selected_count(EntityKind::Influencer), 800);
        // 100 toggles per worker is an even count, so every favorite is back off.
        assert!(snapshot.favorite_ids(EntityKind::Venue).is_empty());
    }
}
