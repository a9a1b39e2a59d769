//! `mixdocs pages` command implementation.

use mixdocs_content::catalog;

use crate::error::CliError;
use crate::output::Output;

/// List every page and its section anchors in navigation order.
pub(crate) fn execute() -> Result<(), CliError> {
    let output = Output::new();
    let registry = catalog::registry()?;

    for page in registry.pages() {
        output.heading(&format!("{}  {}", page.href(), page.title));
        for section in &page.sections {
            output.item(&format!("  {}#{}", page.href(), section.id), &section.title);
        }
    }
    Ok(())
}
