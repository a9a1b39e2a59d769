//! CLI command implementations.

pub(crate) mod build;
pub(crate) mod copy;
pub(crate) mod pages;
pub(crate) mod serve;

pub(crate) use build::BuildArgs;
pub(crate) use copy::CopyArgs;
pub(crate) use serve::ServeArgs;
