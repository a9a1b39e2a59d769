//! Static AproxMixer documentation catalog.
//!
//! Every page is authored in its own module as a builder chain. [`registry`]
//! assembles them in sidebar order together with the authored outline.

mod api_reference;
mod appendices;
mod architecture;
mod compliance;
mod introduction;
mod quick_start;
mod tutorials;
mod zk_proofs;

use crate::model::Icon;
use crate::registry::{ContentError, ContentRegistry, OutlineEntry, RegistryBuilder, SiteInfo};

/// Version badge shown when configuration does not override it.
pub const DEFAULT_VERSION: &str = "v1.0.0-beta";

/// Build the AproxMixer content registry.
///
/// # Errors
///
/// Returns a [`ContentError`] if the catalog contains an authoring defect.
pub fn registry() -> Result<ContentRegistry, ContentError> {
    RegistryBuilder::new()
        .info(SiteInfo {
            name: "AproxMixer".to_owned(),
            tagline: "Documentation".to_owned(),
            version: DEFAULT_VERSION.to_owned(),
        })
        .page(introduction::page())
        .page(quick_start::page())
        .page(architecture::page())
        .page(zk_proofs::page())
        .page(api_reference::page())
        .page(tutorials::page())
        .page(compliance::page())
        .page(appendices::page())
        .outline_entry(
            OutlineEntry::new("Introduction", "", Icon::Book)
                .link("Overview", "/")
                .link("Features", "/#features")
                .link("Architecture", "/#architecture-overview"),
        )
        .outline_entry(
            OutlineEntry::new("Quick Start", "quick-start", Icon::Rocket)
                .link("Connect Wallet", "/quick-start#wallet")
                .link("Deposit & Withdraw", "/quick-start#deposit-withdraw")
                .link("Environment Setup", "/quick-start#environment"),
        )
        .outline_entry(
            OutlineEntry::new("Architecture", "architecture", Icon::Layers)
                .link("Smart Contracts", "/architecture#contracts")
                .link("Frontend", "/architecture#frontend")
                .link("Backend/Relayer", "/architecture#relayer")
                .link("Data Flow", "/architecture#data-flow"),
        )
        .outline_entry(
            OutlineEntry::new("Zero-Knowledge Proofs", "zk-proofs", Icon::Shield)
                .link("zk-SNARKs Overview", "/zk-proofs#overview")
                .link("Verifier Contract", "/zk-proofs#verifier")
                .link("Privacy Guarantees", "/zk-proofs#privacy"),
        )
        .outline_entry(
            OutlineEntry::new("API Reference", "api", Icon::Code)
                .link("Backend API", "/api#backend")
                .link("Relayer API", "/api#relayer")
                .link("Error Codes", "/api#errors"),
        )
        .outline_entry(
            OutlineEntry::new("Tutorials", "tutorials", Icon::GraduationCap)
                .link("Deposit Tutorial", "/tutorials#deposit")
                .link("Withdrawal Tutorial", "/tutorials#withdrawal")
                .link("Relayer Usage", "/tutorials#relayer")
                .link("Frontend Integration", "/tutorials#integration"),
        )
        .outline_entry(
            OutlineEntry::new("Compliance", "compliance", Icon::Scale)
                .link("Non-custodial Design", "/compliance#non-custodial")
                .link("Data Minimization", "/compliance#data")
                .link("Relayer Model", "/compliance#relayer"),
        )
        .outline_entry(
            OutlineEntry::new("Appendices", "appendices", Icon::FileText)
                .link("Environment Variables", "/appendices#env")
                .link("Contract Addresses", "/appendices#contracts")
                .link("Resources", "/appendices#resources"),
        )
        .build()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::location::Location;
    use crate::model::{ContentBlock, Severity};

    #[test]
    fn test_catalog_builds() {
        let registry = registry().unwrap();

        let ids: Vec<&str> = registry.pages().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "",
                "quick-start",
                "architecture",
                "zk-proofs",
                "api",
                "tutorials",
                "compliance",
                "appendices",
            ]
        );
        assert_eq!(registry.info().version, "v1.0.0-beta");
    }

    #[test]
    fn test_outline_matches_page_order() {
        let registry = registry().unwrap();

        let pages: Vec<&str> = registry.outline().iter().map(|e| e.page.as_str()).collect();
        let ids: Vec<&str> = registry.pages().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(pages, ids);
    }

    #[test]
    fn test_every_outline_link_resolves() {
        let registry = registry().unwrap();

        for entry in registry.outline() {
            for link in &entry.links {
                assert!(
                    registry.resolve(&link.target).is_ok(),
                    "{} -> {}",
                    entry.label,
                    link.target
                );
            }
        }
    }

    #[test]
    fn test_compliance_outline_labels() {
        let registry = registry().unwrap();
        let compliance = registry
            .outline()
            .iter()
            .find(|e| e.label == "Compliance")
            .unwrap();

        let titles: Vec<&str> = compliance.links.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Non-custodial Design", "Data Minimization", "Relayer Model"]
        );
    }

    #[test]
    fn test_quick_start_wallet_section() {
        let registry = registry().unwrap();

        let (page, section) = registry
            .resolve(&Location::parse("/quick-start#wallet"))
            .unwrap();

        assert_eq!(page.title, "Quick Start");
        let section = section.unwrap();
        assert_eq!(section.title, "Connect Your Wallet");
        assert_eq!(section.code_samples().count(), 1);
    }

    #[test]
    fn test_compliance_has_danger_disclaimer() {
        let registry = registry().unwrap();
        let page = registry.get_page("compliance").unwrap();

        let jurisdiction = page.get_section("jurisdiction").unwrap();
        let disclaimer = jurisdiction.blocks.iter().find_map(|b| match b {
            ContentBlock::Callout(c) if c.severity == Severity::Danger => c.title.as_deref(),
            _ => None,
        });

        assert_eq!(disclaimer, Some("Disclaimer"));
    }

    #[test]
    fn test_integration_install_command() {
        let registry = registry().unwrap();
        let section = registry
            .get_page("tutorials")
            .unwrap()
            .get_section("integration")
            .unwrap();

        let install = section.code_samples().next().unwrap();

        assert_eq!(install.language, "bash");
        assert_eq!(
            install.source,
            "npm install wagmi viem @tanstack/react-query snarkjs circomlibjs"
        );
    }
}
