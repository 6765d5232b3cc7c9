//! Selected plant, provided by the shell to the pages nested in it.

use dioxus::prelude::*;
use energize_core::{Plant, PlantContext, PlantSelection};
use tokio::sync::watch;

/// Handle to the shell's plant selection.
///
/// Wraps the [`PlantContext`] owned by the app-wide shell, plus a revision
/// signal so components re-render when the selection changes. Only
/// [`ShellLayout`](super::ShellLayout) provides this context, so pages
/// rendered outside the shell cannot reach it.
#[derive(Clone, Copy)]
pub struct PlantScope {
    context: CopyValue<PlantContext>,
    revision: Signal<u64>,
}

impl PlantScope {
    pub(super) fn new(context: PlantContext, revision: Signal<u64>) -> Self {
        Self {
            context: CopyValue::new(context),
            revision,
        }
    }

    /// The selected plant. Subscribes the caller to changes.
    #[must_use]
    pub fn selected(&self) -> Option<Plant> {
        let _ = self.revision.read();
        self.context.read().selected()
    }

    /// Id of the selected plant.
    #[must_use]
    pub fn plant_id(&self) -> Option<String> {
        self.selected().map(|p| p.plant_id)
    }

    /// Replaces the selection. Last write wins.
    pub fn select(&mut self, plant: Option<Plant>) {
        let context = self.context.read().clone();
        context.set_selected(plant);
        self.revision.set(context.snapshot().revision());
    }

    pub(super) fn subscribe(&self) -> watch::Receiver<PlantSelection> {
        self.context.read().subscribe()
    }
}
