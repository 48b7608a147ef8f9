//! Selection state — which service detail is open, if any
//!
//! Owned by the page composition. The modal is open exactly when a selection
//! exists; selecting replaces any previous selection, so at most one detail
//! view can ever be open.

use crate::catalog::entities::ServiceId;

/// Currently chosen service, or none
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionState {
    current: Option<ServiceId>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a service, replacing any previous selection.
    ///
    /// Returns the previously selected id, if the selection changed identity.
    pub fn select(&mut self, id: ServiceId) -> Option<ServiceId> {
        match &self.current {
            Some(prev) if prev == &id => None,
            _ => self.current.replace(id),
        }
    }

    /// Clear the selection (modal close)
    pub fn clear(&mut self) -> Option<ServiceId> {
        self.current.take()
    }

    pub fn selected(&self) -> Option<&ServiceId> {
        self.current.as_ref()
    }

    /// The modal-open flag is derived, never stored separately
    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_iff_selected() {
        let mut state = SelectionState::new();
        assert!(!state.is_open());

        state.select(ServiceId::from("a"));
        assert!(state.is_open());
        assert_eq!(state.selected().unwrap().as_str(), "a");

        state.clear();
        assert!(!state.is_open());
        assert!(state.selected().is_none());
    }

    #[test]
    fn test_select_replaces_previous() {
        let mut state = SelectionState::new();
        state.select(ServiceId::from("a"));
        let prev = state.select(ServiceId::from("b"));

        assert_eq!(prev, Some(ServiceId::from("a")));
        assert_eq!(state.selected().unwrap().as_str(), "b");
    }

    #[test]
    fn test_reselect_same_service_is_identity() {
        let mut state = SelectionState::new();
        state.select(ServiceId::from("a"));
        let prev = state.select(ServiceId::from("a"));

        assert_eq!(prev, None);
        assert!(state.is_open());
    }
}
