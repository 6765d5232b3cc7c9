//! # Plant Selection
//!
//! The single plant every management page is scoped to.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::watch;

/// A solar plant as returned by the backend.
///
/// Only identity and display name are interpreted; capacity, loggers and
/// other server attributes are carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    /// Server-assigned identifier.
    pub plant_id: String,
    /// Display name.
    pub plant_name: String,
    /// Remaining server attributes.
    #[serde(flatten)]
    pub details: BTreeMap<String, serde_json::Value>,
}

impl Plant {
    /// Creates a plant with no extra attributes.
    pub fn new(plant_id: impl Into<String>, plant_name: impl Into<String>) -> Self {
        Self {
            plant_id: plant_id.into(),
            plant_name: plant_name.into(),
            details: BTreeMap::new(),
        }
    }
}

/// The selected plant, or none.
///
/// Each write replaces the previous selection and bumps the revision, so
/// consumers can tell a reselection of the same plant from no change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlantSelection {
    selected: Option<Plant>,
    revision: u64,
}

impl PlantSelection {
    /// Creates an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the selection.
    pub fn set(&mut self, plant: Option<Plant>) {
        self.selected = plant;
        self.revision += 1;
    }

    /// Clears the selection.
    pub fn clear(&mut self) {
        self.set(None);
    }

    /// The selected plant.
    #[must_use]
    pub fn selected(&self) -> Option<&Plant> {
        self.selected.as_ref()
    }

    /// Number of writes since creation.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

/// Shared handle to the shell's plant selection.
///
/// Cloning the handle shares the selection. It can only be obtained from
/// a [`Shell`](crate::Shell), so pages rendered outside the shell have no
/// way to read or change the selected plant.
#[derive(Debug, Clone)]
pub struct PlantContext {
    tx: Arc<watch::Sender<PlantSelection>>,
}

impl PlantContext {
    pub(crate) fn new() -> Self {
        let (tx, _rx) = watch::channel(PlantSelection::new());
        Self { tx: Arc::new(tx) }
    }

    /// The selected plant.
    #[must_use]
    pub fn selected(&self) -> Option<Plant> {
        self.tx.borrow().selected().cloned()
    }

    /// Snapshot of the selection including its revision.
    #[must_use]
    pub fn snapshot(&self) -> PlantSelection {
        self.tx.borrow().clone()
    }

    /// Replaces the selection and notifies subscribers.
    ///
    /// The plant is not checked against the backend.
    pub fn set_selected(&self, plant: Option<Plant>) {
        match &plant {
            Some(p) => tracing::info!(plant_id = %p.plant_id, plant_name = %p.plant_name, "Plant selected"),
            None => tracing::info!("Plant selection cleared"),
        }
        self.tx.send_modify(|selection| selection.set(plant));
    }

    /// Clears the selection.
    pub fn clear(&self) {
        self.set_selected(None);
    }

    /// Subscribes to selection changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<PlantSelection> {
        self.tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plant_deserializes_with_extra_fields() {
        let plant: Plant = serde_json::from_value(serde_json::json!({
            "plantId": "p-2",
            "plantName": "Pokhran Solar Park",
            "capacity": "456 MW"
        }))
        .unwrap();

        assert_eq!(plant.plant_id, "p-2");
        assert_eq!(plant.details["capacity"], "456 MW");
    }

    #[test]
    fn test_selection_is_exclusive() {
        let ctx = PlantContext::new();
        ctx.set_selected(Some(Plant::new("p-1", "Technocraft_Shivale")));
        ctx.set_selected(Some(Plant::new("p-2", "Pokhran Solar Park")));

        assert_eq!(ctx.selected(), Some(Plant::new("p-2", "Pokhran Solar Park")));
        assert_eq!(ctx.snapshot().revision(), 2);
    }

    #[test]
    fn test_clones_share_selection() {
        let ctx = PlantContext::new();
        let other = ctx.clone();
        other.set_selected(Some(Plant::new("p-3", "KSIPL_Hinduja_20MW")));
        assert_eq!(ctx.selected().unwrap().plant_id, "p-3");

        ctx.clear();
        assert_eq!(other.selected(), None);
    }

    #[tokio::test]
    async fn test_subscribers_observe_changes() {
        let ctx = PlantContext::new();
        let mut rx = ctx.subscribe();

        ctx.set_selected(Some(Plant::new("p-2", "Pokhran Solar Park")));
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().selected().unwrap().plant_id, "p-2");

        ctx.set_selected(Some(Plant::new("p-2", "Pokhran Solar Park")));
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().revision(), 2);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: the last write wins, whatever came before
        #[test]
        fn prop_last_write_wins(ids in prop::collection::vec(prop::option::of("[a-z0-9-]{1,8}"), 1..16)) {
            let mut selection = PlantSelection::new();
            for id in &ids {
                selection.set(id.clone().map(|id| Plant::new(id.clone(), id)));
            }
            let last = ids.last().unwrap().clone();
            prop_assert_eq!(selection.selected().map(|p| p.plant_id.clone()), last);
            prop_assert_eq!(selection.revision(), ids.len() as u64);
        }
    }
}
