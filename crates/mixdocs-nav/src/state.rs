//! Disclosure and active-location state.
//!
//! [`NavState`] is an immutable value. Every transition returns a new state
//! and leaves the receiver untouched, so a failed transition never disturbs
//! what is currently displayed.

use std::collections::BTreeSet;

use mixdocs_content::{ContentRegistry, Icon, Location};
use serde::Serialize;

use crate::tree::NavTree;

/// Navigation transition error.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum NavError {
    /// No sidebar entry has the given identifier.
    #[error("Navigation entry not found: {0}")]
    EntryNotFound(String),
    /// The location does not address a registered page or section.
    #[error("Navigation target not found: {0}")]
    TargetNotFound(String),
}

/// Current location plus the set of expanded sidebar entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavState {
    location: Location,
    expanded: BTreeSet<String>,
}

impl NavState {
    /// Initial state for a session.
    ///
    /// Only the entry matching `initial` starts expanded.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::TargetNotFound`] if `initial` is not registered.
    pub fn new(
        registry: &ContentRegistry,
        tree: &NavTree,
        initial: Location,
    ) -> Result<Self, NavError> {
        registry
            .resolve(&initial)
            .map_err(|_| NavError::TargetNotFound(initial.href()))?;

        let expanded = tree
            .active_entry(&initial)
            .map(|entry| entry.label.clone())
            .into_iter()
            .collect();

        Ok(Self {
            location: initial,
            expanded,
        })
    }

    /// Current location.
    #[must_use]
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Whether the entry with the given identifier is expanded.
    #[must_use]
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    /// Identifiers of expanded entries in sidebar order.
    #[must_use]
    pub fn expanded_ids<'t>(&self, tree: &'t NavTree) -> Vec<&'t str> {
        tree.entries()
            .iter()
            .filter(|e| self.expanded.contains(&e.label))
            .map(|e| e.label.as_str())
            .collect()
    }

    /// Flip one entry between collapsed and expanded.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::EntryNotFound`] for an unknown identifier.
    pub fn toggle(&self, tree: &NavTree, id: &str) -> Result<Self, NavError> {
        let entry = tree
            .get(id)
            .ok_or_else(|| NavError::EntryNotFound(id.to_owned()))?;

        let mut next = self.clone();
        if !next.expanded.remove(&entry.label) {
            next.expanded.insert(entry.label.clone());
        }

        tracing::debug!(
            entry = %entry.label,
            expanded = next.is_expanded(&entry.label),
            "Toggled navigation entry"
        );

        Ok(next)
    }

    /// Move to another location. Expansion state is kept as is.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::TargetNotFound`] if the page or section does not
    /// exist. The receiver remains valid and unchanged.
    pub fn navigate(&self, registry: &ContentRegistry, target: &Location) -> Result<Self, NavError> {
        if let Err(e) = registry.resolve(target) {
            tracing::debug!(location = %target, error = %e, "Navigation target not found");
            return Err(NavError::TargetNotFound(target.href()));
        }

        tracing::debug!(from = %self.location, to = %target, "Navigated");

        Ok(Self {
            location: target.clone(),
            expanded: self.expanded.clone(),
        })
    }

    /// Replace the expanded set, keeping the location.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::EntryNotFound`] for the first unknown identifier.
    pub fn with_expanded<I, S>(&self, tree: &NavTree, ids: I) -> Result<Self, NavError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut expanded = BTreeSet::new();
        for id in ids {
            let id = id.as_ref();
            let entry = tree
                .get(id)
                .ok_or_else(|| NavError::EntryNotFound(id.to_owned()))?;
            expanded.insert(entry.label.clone());
        }

        Ok(Self {
            location: self.location.clone(),
            expanded,
        })
    }

    /// Render-ready view of the tree under this state.
    #[must_use]
    pub fn snapshot(&self, tree: &NavTree) -> NavSnapshot {
        let active = tree.active_entry(&self.location).map(|e| e.label.as_str());

        let entries = tree
            .entries()
            .iter()
            .map(|entry| EntrySnapshot {
                id: entry.label.clone(),
                title: entry.label.clone(),
                href: entry.href(),
                icon: entry.icon,
                expanded: self.expanded.contains(&entry.label),
                active: active == Some(entry.label.as_str()),
                links: entry
                    .links
                    .iter()
                    .map(|link| LinkSnapshot {
                        title: link.title.clone(),
                        href: link.target.href(),
                        active: link.target == self.location,
                    })
                    .collect(),
            })
            .collect();

        NavSnapshot {
            location: self.location.href(),
            entries,
        }
    }
}

/// Serializable navigation view for one render pass.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavSnapshot {
    /// Current location in URL form.
    pub location: String,
    pub entries: Vec<EntrySnapshot>,
}

impl NavSnapshot {
    /// Identifiers of expanded entries in sidebar order.
    #[must_use]
    pub fn expanded_ids(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.expanded)
            .map(|e| e.id.as_str())
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EntrySnapshot {
    pub id: String,
    pub title: String,
    pub href: String,
    pub icon: Icon,
    pub expanded: bool,
    pub active: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<LinkSnapshot>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LinkSnapshot {
    pub title: String,
    pub href: String,
    pub active: bool,
}
