use std::collections::BTreeMap;

use super::catalog::{Catalog, WallpaperId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Loaded,
    Failed,
}

/// Per-image load tracking.
///
/// Every entry starts out `Loading` and settles exactly once. Later
/// completions for a settled entry are no-ops, so completions may be merged
/// in any order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadingMap {
    states: BTreeMap<WallpaperId, LoadState>,
}

impl LoadingMap {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        LoadingMap {
            states: catalog
                .iter()
                .map(|entry| (entry.id, LoadState::Loading))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn state(&self, id: WallpaperId) -> Option<LoadState> {
        self.states.get(&id).copied()
    }

    pub fn is_loading(&self, id: WallpaperId) -> bool {
        self.state(id) == Some(LoadState::Loading)
    }

    pub fn mark_loaded(&mut self, id: WallpaperId) {
        self.settle(id, LoadState::Loaded)
    }

    pub fn mark_failed(&mut self, id: WallpaperId) {
        self.settle(id, LoadState::Failed)
    }

    pub fn all_settled(&self) -> bool {
        self.states.values().all(|s| *s != LoadState::Loading)
    }

    pub fn iter(&self) -> impl Iterator<Item = (WallpaperId, LoadState)> + '_ {
        self.states.iter().map(|(id, state)| (*id, *state))
    }

    fn settle(&mut self, id: WallpaperId, outcome: LoadState) {
        match self.states.get_mut(&id) {
            Some(state) if *state == LoadState::Loading => {
                log::debug!("Wallpaper {} settled as {:?}", id, outcome);
                *state = outcome;
            }
            Some(_) => {}
            None => log::debug!("Ignoring load event for unknown wallpaper {}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(map: &LoadingMap, state: LoadState) -> Vec<u32> {
        map.iter()
            .filter(|(_, s)| *s == state)
            .map(|(id, _)| id.0)
            .collect()
    }

    #[test]
    fn starts_all_loading() {
        let map = LoadingMap::from_catalog(&Catalog::builtin());
        assert_eq!(map.len(), 9);
        assert_eq!(ids(&map, LoadState::Loading).len(), 9);
        assert!(!map.all_settled());
    }

    #[test]
    fn only_the_completed_entry_changes() {
        let mut map = LoadingMap::from_catalog(&Catalog::builtin());
        map.mark_loaded(WallpaperId(4));

        assert!(!map.is_loading(WallpaperId(4)));
        assert_eq!(ids(&map, LoadState::Loaded), vec![4]);
        assert_eq!(ids(&map, LoadState::Loading).len(), 8);
    }

    #[test]
    fn settled_entries_never_revert() {
        let mut map = LoadingMap::from_catalog(&Catalog::builtin());
        map.mark_loaded(WallpaperId(2));
        map.mark_failed(WallpaperId(2));
        map.mark_loaded(WallpaperId(2));
        assert_eq!(map.state(WallpaperId(2)), Some(LoadState::Loaded));

        map.mark_failed(WallpaperId(3));
        map.mark_loaded(WallpaperId(3));
        assert_eq!(map.state(WallpaperId(3)), Some(LoadState::Failed));
        assert!(!map.is_loading(WallpaperId(3)));
    }

    #[test]
    fn completion_order_does_not_matter() {
        let catalog = Catalog::builtin();
        let mut forward = LoadingMap::from_catalog(&catalog);
        let mut backward = LoadingMap::from_catalog(&catalog);

        for id in 1..=9 {
            forward.mark_loaded(WallpaperId(id));
        }
        for id in (1..=9).rev() {
            backward.mark_loaded(WallpaperId(id));
            backward.mark_loaded(WallpaperId(id));
        }

        assert_eq!(forward, backward);
        assert!(forward.all_settled());
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut map = LoadingMap::from_catalog(&Catalog::builtin());
        map.mark_loaded(WallpaperId(42));
        assert_eq!(map.len(), 9);
        assert_eq!(map.state(WallpaperId(42)), None);
        assert!(!map.is_loading(WallpaperId(42)));
    }

    #[test]
    fn empty_catalog_is_settled() {
        let map = LoadingMap::from_catalog(&Catalog::default());
        assert!(map.is_empty());
        assert!(map.all_settled());
    }
}
