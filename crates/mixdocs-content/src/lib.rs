//! Documentation content for the `AproxMixer` site.
//!
//! This crate owns the content model ([`Page`], [`Section`],
//! [`ContentBlock`]), route [`Location`]s, and the immutable
//! [`ContentRegistry`] that every other crate reads from.
//!
//! # Quick Start
//!
//! ```
//! use mixdocs_content::{Location, catalog};
//!
//! let registry = catalog::registry().unwrap();
//! let (page, section) = registry.resolve(&Location::parse("/quick-start#wallet")).unwrap();
//!
//! assert_eq!(page.title, "Quick Start");
//! assert_eq!(section.unwrap().title, "Connect Your Wallet");
//! ```

pub mod catalog;
mod location;
mod model;
mod registry;

pub use location::Location;
pub use model::{
    Callout, Card, CodeSample, ContentBlock, Icon, List, Page, Section, Severity, Table,
};
pub use registry::{
    ContentError, ContentRegistry, OutlineEntry, OutlineLink, RegistryBuilder, SiteInfo,
};
