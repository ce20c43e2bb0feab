//! Fund Selection State
//!
//! Per-fund `selected` / `clicked` flags and the two derived views
//! (unselected and selected). Views are recomputed from scratch on every
//! read, in the order the funds were loaded.

use std::collections::HashMap;
use crate::models::Fund;

/// Toggle flags tracked for each loaded fund
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ItemState {
    /// Fund belongs to the selected view
    pub selected: bool,
    /// Fund is staged for the pending "Add" action
    pub clicked: bool,
}

/// Selection state over one loaded fund list.
///
/// Every loaded fund has exactly one `ItemState`, so the unselected and
/// selected views always partition the fund list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    funds: Vec<Fund>,
    states: HashMap<u32, ItemState>,
}

impl Selection {
    pub fn new(funds: Vec<Fund>) -> Self {
        let mut selection = Self::default();
        selection.load(funds);
        selection
    }

    /// Replace the fund list, discarding all previous state
    pub fn load(&mut self, funds: Vec<Fund>) {
        self.states = funds
            .iter()
            .map(|fund| (fund.id, ItemState::default()))
            .collect();
        self.funds = funds;
    }

    pub fn funds(&self) -> &[Fund] {
        &self.funds
    }

    pub fn state(&self, id: u32) -> Option<ItemState> {
        self.states.get(&id).copied()
    }

    pub fn is_clicked(&self, id: u32) -> bool {
        self.state(id).map_or(false, |s| s.clicked)
    }

    pub fn unselected_view(&self) -> Vec<Fund> {
        self.filter(|s| !s.selected)
    }

    pub fn selected_view(&self) -> Vec<Fund> {
        self.filter(|s| s.selected)
    }

    /// Flip the clicked flag. Unknown ids are ignored.
    pub fn toggle_clicked(&mut self, id: u32) {
        if let Some(state) = self.states.get_mut(&id) {
            state.clicked = !state.clicked;
        }
    }

    /// Flip the selected flag. Unknown ids are ignored.
    pub fn toggle_selected(&mut self, id: u32) {
        if let Some(state) = self.states.get_mut(&id) {
            state.selected = !state.selected;
        }
    }

    /// Collect the funds currently clicked.
    ///
    /// Does not promote them into the selected view and does not clear their
    /// clicked flags; callers only get a report of the staged set.
    pub fn commit_selection(&self) -> Vec<Fund> {
        self.filter(|s| s.clicked)
    }

    fn filter(&self, pred: impl Fn(&ItemState) -> bool) -> Vec<Fund> {
        self.funds
            .iter()
            .filter(|fund| self.states.get(&fund.id).map_or(false, |s| pred(s)))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_funds(n: u32) -> Vec<Fund> {
        (0..n)
            .map(|i| Fund { id: i, name: format!("Fund {}", i) })
            .collect()
    }

    fn ids(funds: &[Fund]) -> Vec<u32> {
        funds.iter().map(|f| f.id).collect()
    }

    #[test]
    fn test_fresh_load_is_all_unselected() {
        let selection = Selection::new(make_funds(5));

        assert_eq!(selection.unselected_view(), make_funds(5));
        assert!(selection.selected_view().is_empty());
        for id in 0..5 {
            assert_eq!(selection.state(id), Some(ItemState::default()));
        }
    }

    #[test]
    fn test_default_is_empty() {
        let selection = Selection::default();
        assert!(selection.unselected_view().is_empty());
        assert!(selection.selected_view().is_empty());
    }

    #[test]
    fn test_views_partition_for_every_assignment() {
        let funds = make_funds(5);
        // Every subset of the five funds as the selected set
        for mask in 0u32..(1 << 5) {
            let mut selection = Selection::new(funds.clone());
            for id in 0..5 {
                if mask & (1 << id) != 0 {
                    selection.toggle_selected(id);
                }
            }

            let unselected = ids(&selection.unselected_view());
            let selected = ids(&selection.selected_view());

            assert!(unselected.iter().all(|id| !selected.contains(id)));
            let mut union: Vec<u32> = unselected.iter().chain(selected.iter()).copied().collect();
            union.sort();
            assert_eq!(union, ids(&funds));

            // Each view keeps source order
            assert!(unselected.windows(2).all(|w| w[0] < w[1]));
            assert!(selected.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_views_keep_source_order() {
        let funds = vec![
            Fund { id: 7, name: "Fund 7".to_string() },
            Fund { id: 2, name: "Fund 2".to_string() },
            Fund { id: 5, name: "Fund 5".to_string() },
        ];
        let mut selection = Selection::new(funds);
        selection.toggle_selected(5);
        selection.toggle_selected(7);

        assert_eq!(ids(&selection.selected_view()), vec![7, 5]);
        assert_eq!(ids(&selection.unselected_view()), vec![2]);
    }

    #[test]
    fn test_double_toggle_clicked_round_trips() {
        let mut selection = Selection::new(make_funds(5));

        selection.toggle_clicked(2);
        assert!(selection.is_clicked(2));
        selection.toggle_clicked(2);
        assert!(!selection.is_clicked(2));
        assert_eq!(selection.state(2), Some(ItemState::default()));
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut selection = Selection::new(make_funds(5));
        selection.toggle_clicked(1);
        let before = selection.clone();

        selection.toggle_clicked(999);
        selection.toggle_selected(999);

        assert_eq!(selection, before);
        assert!(!selection.is_clicked(999));
        assert_eq!(selection.state(999), None);
    }

    #[test]
    fn test_clicked_does_not_move_between_views() {
        let mut selection = Selection::new(make_funds(3));
        selection.toggle_clicked(0);

        assert_eq!(selection.unselected_view().len(), 3);
        assert!(selection.selected_view().is_empty());
    }

    #[test]
    fn test_toggle_selected_moves_back_and_forth() {
        let mut selection = Selection::new(make_funds(3));

        selection.toggle_selected(1);
        assert_eq!(ids(&selection.selected_view()), vec![1]);
        assert_eq!(ids(&selection.unselected_view()), vec![0, 2]);

        selection.toggle_selected(1);
        assert!(selection.selected_view().is_empty());
        assert_eq!(ids(&selection.unselected_view()), vec![0, 1, 2]);
    }

    // Commit reports the clicked funds but does not move them into the
    // selected view. Pinned as current behaviour until the intended
    // semantics of "Add" are settled.
    #[test]
    fn test_commit_selection_reports_without_mutating() {
        let mut selection = Selection::new(make_funds(5));
        selection.toggle_clicked(1);
        selection.toggle_clicked(3);
        let before = selection.clone();

        let committed = selection.commit_selection();

        assert_eq!(ids(&committed), vec![1, 3]);
        assert!(selection.selected_view().is_empty());
        assert_eq!(selection.unselected_view(), make_funds(5));
        assert!(selection.is_clicked(1));
        assert!(selection.is_clicked(3));
        assert_eq!(selection, before);
    }

    #[test]
    fn test_reload_resets_state() {
        let mut selection = Selection::new(make_funds(5));
        selection.toggle_clicked(0);
        selection.toggle_selected(4);

        selection.load(make_funds(5));

        assert!(selection.selected_view().is_empty());
        assert!(selection.commit_selection().is_empty());
        assert_eq!(selection.unselected_view().len(), 5);
    }

    #[test]
    fn test_reload_drops_states_of_missing_funds() {
        let mut selection = Selection::new(make_funds(5));
        selection.load(make_funds(2));

        assert_eq!(selection.funds().len(), 2);
        assert_eq!(selection.state(4), None);
    }
}
