//! Site rendering and static build for the `AproxMixer` documentation.
//!
//! This crate provides:
//! - [`Site`]: content registry, navigation tree and renderer joined into
//!   rendered pages and full HTML documents
//! - [`StaticSiteBuilder`]: writes every page and asset to a directory
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use mixdocs_config::Config;
//! use mixdocs_content::catalog;
//! use mixdocs_site::Site;
//!
//! let site = Site::new(catalog::registry()?, &Config::default())?;
//!
//! let state = site.state::<&str>("/quick-start#wallet", None)?;
//! let page = site.render(&state)?;
//! assert_eq!(page.title, "Quick Start");
//! # Ok(())
//! # }
//! ```

mod builder;
mod site;

pub use builder::{BuildError, StaticSiteBuilder};
pub use site::{RenderedPage, Site, SiteError};
