//! `mixdocs copy` command implementation.

use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::Term;
use mixdocs_config::Config;
use mixdocs_content::{CodeSample, ContentRegistry, Location, Section, catalog};
use mixdocs_renderer::{CopyFeedback, Osc52Clipboard};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the copy command.
#[derive(Args)]
pub(crate) struct CopyArgs {
    /// Page or section holding the sample (e.g. `/quick-start#environment`).
    href: String,

    /// Which code sample to copy, counting from 0 in page order.
    #[arg(short, long, default_value_t = 0)]
    index: usize,

    /// Path to configuration file (default: auto-discover mixdocs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl CopyArgs {
    /// Copy the selected sample to the terminal clipboard.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Copy`] when stdout is not a terminal.
    pub(crate) fn execute(&self) -> Result<(), CliError> {
        let output = Output::new();
        let config = Config::load(self.config.as_deref(), None)?;
        let registry = catalog::registry()?;

        let location = Location::parse(&self.href);
        let sample = select_sample(&registry, &location, self.index)?;

        let term = Term::stdout();
        let is_terminal = term.is_term();
        let mut clipboard = Osc52Clipboard::new(term, is_terminal);
        let mut feedback = CopyFeedback::new(config.copy.confirmation_window());

        feedback.copy(&mut clipboard, sample, Instant::now())?;

        let label = sample.title.as_deref().unwrap_or(&sample.language);
        output.success(&format!("Copied {label} from {location}"));
        Ok(())
    }
}

/// Pick the `index`-th code sample of a section, or of the whole page when
/// the location has no fragment.
fn select_sample<'r>(
    registry: &'r ContentRegistry,
    location: &Location,
    index: usize,
) -> Result<&'r CodeSample, CliError> {
    let (page, section) = registry.resolve(location)?;
    let samples: Vec<&CodeSample> = match section {
        Some(section) => section.code_samples().collect(),
        None => page.sections.iter().flat_map(Section::code_samples).collect(),
    };

    samples.get(index).copied().ok_or_else(|| {
        CliError::Validation(format!(
            "{location} has {} code sample(s), no index {index}",
            samples.len()
        ))
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_select_sample_in_section() {
        let registry = catalog::registry().unwrap();

        let sample =
            select_sample(&registry, &Location::parse("/tutorials#integration"), 0).unwrap();

        assert!(sample.source.contains("npm install"));
    }

    #[test]
    fn test_select_sample_out_of_range() {
        let registry = catalog::registry().unwrap();

        let err = select_sample(&registry, &Location::parse("/tutorials#integration"), 99)
            .unwrap_err();

        assert!(matches!(err, CliError::Validation(_)));
    }

    #[test]
    fn test_select_sample_unknown_section() {
        let registry = catalog::registry().unwrap();

        let err = select_sample(&registry, &Location::parse("/tutorials#nope"), 0).unwrap_err();

        assert_eq!(err.to_string(), "Section not found: /tutorials#nope");
    }
}
