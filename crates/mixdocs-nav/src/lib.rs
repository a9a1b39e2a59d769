//! Sidebar navigation for the `AproxMixer` documentation.
//!
//! [`NavTree`] is the static sidebar structure derived from a
//! [`ContentRegistry`](mixdocs_content::ContentRegistry). [`NavState`] tracks
//! which entries are expanded and where the reader currently is; each
//! transition yields a new state.
//!
//! # Example
//!
//! ```
//! use mixdocs_content::{Location, catalog};
//! use mixdocs_nav::{NavState, NavTree};
//!
//! let registry = catalog::registry().unwrap();
//! let tree = NavTree::from_registry(&registry);
//!
//! let state = NavState::new(&registry, &tree, Location::root()).unwrap();
//! let state = state.toggle(&tree, "Architecture").unwrap();
//! assert!(state.is_expanded("Architecture"));
//!
//! let state = state.navigate(&registry, &Location::parse("/quick-start#wallet")).unwrap();
//! assert_eq!(state.location().href(), "/quick-start#wallet");
//! ```

mod breadcrumbs;
mod state;
mod tree;

pub use breadcrumbs::{BreadcrumbItem, breadcrumbs};
pub use state::{EntrySnapshot, LinkSnapshot, NavError, NavSnapshot, NavState};
pub use tree::{NavEntry, NavLink, NavTree};
