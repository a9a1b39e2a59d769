use crate::model::{Callout, Card, CodeSample, Icon, Page, Section};

pub(super) fn page() -> Page {
    Page::new("", "AproxMixer")
        .subtitle("Privacy-First Mixing Protocol")
        .lead(
            "A non-custodial, zero-knowledge proof-based mixing protocol for Ethereum-compatible \
             networks. Achieve transaction privacy through cryptographic unlinkability without \
             compromising on security or decentralization.",
        )
        .icon(Icon::Book)
        .section(
            Section::new("features", "Key Features")
                .subtitle("What makes AproxMixer unique")
                .cards([
                    Card::new(
                        "Non-Custodial Design",
                        "Your funds remain under your control at all times. Smart contracts \
                         handle deposits and withdrawals without third-party custody.",
                    ),
                    Card::new(
                        "zk-SNARK Privacy",
                        "Zero-knowledge proofs ensure complete unlinkability between deposits \
                         and withdrawals while maintaining verifiability.",
                    ),
                    Card::new(
                        "Multi-Chain Support",
                        "Deploy and operate across multiple Ethereum-compatible networks \
                         including Ethereum, Polygon, Arbitrum, and more.",
                    ),
                    Card::new(
                        "Gas-Optimized Relayers",
                        "Optional relayer network allows withdrawals without linking to your \
                         original address through gas payments.",
                    ),
                ]),
        )
        .section(
            Section::new("privacy-overview", "Privacy Guarantees")
                .subtitle("How AproxMixer protects your transactions")
                .cards([
                    Card::new(
                        "Unlinkability",
                        "Deposits and withdrawals cannot be linked through on-chain analysis",
                    ),
                    Card::new(
                        "Confidentiality",
                        "Transaction details remain private and verifiable only by participants",
                    ),
                    Card::new(
                        "Decentralization",
                        "No central authority controls the mixing process or holds user funds",
                    ),
                ])
                .callout(
                    Callout::info(
                        "AproxMixer is designed for legitimate privacy use cases. Users are \
                         responsible for ensuring compliance with applicable laws and \
                         regulations in their jurisdiction.",
                    )
                    .title("Important Note"),
                ),
        )
        .section(
            Section::new("architecture-overview", "Architecture Overview")
                .subtitle("High-level system components")
                .heading(4, "Smart Contracts")
                .paragraph(
                    "Core protocol logic deployed on-chain, including the `Mixer.sol` for \
                     deposit/withdrawal operations and `Verifier.sol` for zk-SNARK proof \
                     verification.",
                )
                .code(
                    CodeSample::new(
                        "// Core contracts
├── Mixer.sol          // Deposit & withdrawal logic
├── Verifier.sol       // zk-SNARK proof verification
└── MerkleTree.sol     // Commitment tree management",
                    )
                    .language("solidity"),
                )
                .heading(4, "Frontend Application")
                .paragraph(
                    "React-based web application built with Vite and shadcn/ui, providing a \
                     seamless user experience for interacting with the protocol.",
                )
                .code(
                    CodeSample::new(
                        "// Tech stack
├── React + TypeScript
├── Vite (build tool)
├── shadcn/ui + Tailwind
└── ethers.js / wagmi",
                    )
                    .language("text"),
                )
                .heading(4, "Backend & Relayer Services")
                .paragraph(
                    "Optional backend services for proof generation assistance and relayer \
                     network for anonymous withdrawals without gas payments from the \
                     recipient address.",
                )
                .code(
                    CodeSample::new(
                        "// Services
├── Proof Generator API
├── Relayer Network
└── Merkle Tree Indexer",
                    )
                    .language("text"),
                ),
        )
        .section(
            Section::new("continue-reading", "Continue Reading").cards([
                Card::new("Quick Start Guide", "Get up and running in minutes").link("/quick-start"),
                Card::new("Architecture Deep Dive", "Understand the system design")
                    .link("/architecture"),
                Card::new("Zero-Knowledge Proofs", "Learn about zk-SNARKs").link("/zk-proofs"),
                Card::new("API Reference", "Integrate with the protocol").link("/api"),
            ]),
        )
}
