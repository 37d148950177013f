use std::collections::BTreeSet;

use crate::card::{render_cards, ResourceCard};
use crate::details::ResourceDetails;
use crate::error::{DashboardError, DashboardResult};
use crate::filter::{is_visible, FilterPredicate};
use crate::model::{InventorySnapshot, ResourceKind};
use crate::stats::InventoryStats;
use crate::theme::{ThemePreference, ThemeStore, THEME_KEY};

/// View-model for the dashboard: current snapshot, rendered cards, filter and theme.
///
/// All mutation goes through this type; filter changes recompute visibility
/// synchronously and never touch the network.
pub struct ViewStateController {
    snapshot: Option<InventorySnapshot>,
    cards: Vec<ResourceCard>,
    visible: Vec<bool>,
    predicate: FilterPredicate,
    theme: ThemePreference,
    store: Box<dyn ThemeStore>,
}

impl ViewStateController {
    /// Creates an empty view and restores the persisted theme.
    pub fn new(store: impl ThemeStore + 'static) -> Self {
        let mut view = Self {
            snapshot: None,
            cards: Vec::new(),
            visible: Vec::new(),
            predicate: FilterPredicate::default(),
            theme: ThemePreference::Light,
            store: Box::new(store),
        };
        view.theme = view.load_persisted_theme();
        view
    }

    pub fn predicate(&self) -> &FilterPredicate {
        &self.predicate
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.predicate.search_term = term.into();
        self.recompute();
    }

    pub fn set_resource_type(&mut self, resource_type: impl Into<String>) {
        self.predicate.resource_type = resource_type.into();
        self.recompute();
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.predicate.location = location.into();
        self.recompute();
    }

    pub fn clear_filters(&mut self) {
        self.predicate = FilterPredicate::default();
        self.recompute();
    }

    /// Swap in a freshly fetched snapshot. The active filter is reapplied.
    pub fn replace_snapshot(&mut self, snapshot: InventorySnapshot) {
        self.cards = render_cards(&snapshot);
        tracing::info!(
            resources = self.cards.len(),
            "snapshot replaced"
        );
        self.snapshot = Some(snapshot);
        self.recompute();
    }

    pub fn snapshot(&self) -> Option<&InventorySnapshot> {
        self.snapshot.as_ref()
    }

    pub fn cards(&self) -> &[ResourceCard] {
        &self.cards
    }

    pub fn visible_cards(&self) -> impl Iterator<Item = &ResourceCard> {
        self.cards
            .iter()
            .zip(self.visible.iter())
            .filter(|(_, shown)| **shown)
            .map(|(card, _)| card)
    }

    /// Returns `(visible, total)`.
    pub fn visible_count(&self) -> (usize, usize) {
        let visible = self.visible.iter().filter(|shown| **shown).count();
        (visible, self.cards.len())
    }

    fn recompute(&mut self) {
        self.visible = self
            .cards
            .iter()
            .map(|card| is_visible(card, &self.predicate))
            .collect();
        tracing::debug!(predicate = ?self.predicate, counts = ?self.visible_count(), "filter applied");
    }

    pub fn theme(&self) -> ThemePreference {
        self.theme
    }

    /// Reads the stored preference. Absent, unreadable or unrecognised values mean light.
    pub fn load_persisted_theme(&self) -> ThemePreference {
        match self.store.load(THEME_KEY) {
            Ok(value) => ThemePreference::from_stored(value.as_deref()),
            Err(e) => {
                tracing::warn!(error = %e, "could not read theme preference");
                ThemePreference::Light
            }
        }
    }

    /// Flips the theme and persists the new value.
    pub fn toggle_theme(&mut self) -> ThemePreference {
        self.theme = self.theme.toggled();
        if let Err(e) = self.store.store(THEME_KEY, self.theme.as_str()) {
            tracing::warn!(error = %e, "could not persist theme preference");
        }
        self.theme
    }

    /// Details for the first record of `kind` named `name` in the current snapshot.
    pub fn resource_details(&self, kind: ResourceKind, name: &str) -> DashboardResult<ResourceDetails> {
        self.snapshot
            .as_ref()
            .and_then(|s| s.find(kind, name))
            .map(ResourceDetails::from_record)
            .ok_or_else(|| DashboardError::ResourceNotFound {
                kind,
                name: name.to_string(),
            })
    }

    pub fn stats(&self) -> InventoryStats {
        self.snapshot
            .as_ref()
            .map(InventoryStats::from_snapshot)
            .unwrap_or_default()
    }

    /// Distinct locations across all cards, sorted.
    pub fn locations(&self) -> Vec<String> {
        self.cards
            .iter()
            .filter(|c| !c.location.is_empty())
            .map(|c| c.location.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
