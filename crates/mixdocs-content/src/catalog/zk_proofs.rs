use crate::model::{Callout, Card, CodeSample, ContentBlock, Icon, List, Page, Section, Table};

pub(super) fn page() -> Page {
    Page::new("zk-proofs", "Zero-Knowledge Proofs")
        .lead(
            "Understanding how zk-SNARKs enable privacy in AproxMixer while maintaining full \
             verifiability of transactions.",
        )
        .icon(Icon::Shield)
        .section(
            Section::new("overview", "zk-SNARKs Overview")
                .subtitle("Zero-Knowledge Succinct Non-Interactive Arguments of Knowledge")
                .paragraph(
                    "zk-SNARKs are cryptographic proofs that allow one party (the prover) to \
                     prove to another party (the verifier) that a statement is true, without \
                     revealing any information beyond the validity of the statement itself.",
                )
                .heading(4, "Key Properties")
                .cards([
                    Card::new("Completeness", "Valid proofs are always accepted by the verifier"),
                    Card::new("Soundness", "Invalid proofs cannot fool the verifier"),
                    Card::new("Zero-Knowledge", "Proof reveals nothing beyond statement validity"),
                    Card::new("Succinctness", "Proofs are small and quick to verify"),
                ])
                .heading(4, "How It Works in AproxMixer")
                .paragraph(
                    "When withdrawing, users prove they know the secret preimage of a \
                     commitment in the Merkle tree without revealing which commitment is theirs:",
                )
                .code(
                    CodeSample::new(
                        "Proof Statement:
\"I know (secret, nullifier) such that:
  1. commitment = hash(nullifier, secret)
  2. commitment is in the Merkle tree with root R
  3. nullifierHash = hash(nullifier)
I'm proving this without revealing secret, nullifier, or which leaf is mine.\"",
                    )
                    .language("text"),
                ),
        )
        .section(
            Section::new("verifier", "Verifier Contract")
                .subtitle("On-chain proof verification")
                .paragraph(
                    "The Verifier contract is automatically generated from the compiled \
                     zk-SNARK circuit using snarkjs. It implements the Groth16 verification \
                     algorithm.",
                )
                .heading(4, "Verification Process")
                .steps([
                    "**Parse Proof:** extract proof components (A, B, C elliptic curve points)",
                    "**Load Public Inputs:** Merkle root, nullifier hash, recipient, relayer, fee",
                    "**Pairing Check:** verify cryptographic pairing equation holds",
                    "**Return Result:** boolean indicating proof validity",
                ])
                .code(
                    CodeSample::new(
                        "interface IVerifier {
    /// @notice Verifies a Groth16 proof
    /// @param _proof The proof bytes (A, B, C curve points)
    /// @param _pubSignals Public signals array:
    ///   [0] merkleRoot - Current Merkle tree root
    ///   [1] nullifierHash - Hash of the nullifier (prevents double-spend)
    ///   [2] recipient - Address receiving the withdrawal
    ///   [3] relayer - Relayer address (or 0 for self-relay)
    ///   [4] fee - Relayer fee amount
    /// @return bool True if proof is valid
    function verifyProof(
        bytes calldata _proof,
        uint256[5] calldata _pubSignals
    ) external view returns (bool);
}

// Gas cost: ~300,000 gas for Groth16 verification
// Proof size: 256 bytes (8 field elements)",
                    )
                    .language("solidity")
                    .title("Verifier Interface"),
                )
                .callout(
                    Callout::info(
                        "The withdrawal circuit is based on the Tornado Cash circuit design, \
                         adapted for AproxMixer's requirements. The circuit source is available \
                         in the `circuits/` directory.",
                    )
                    .title("Circuit Reference"),
                ),
        )
        .section(
            Section::new("privacy", "Privacy Guarantees")
                .subtitle("What information is protected")
                .heading(4, "Unlinkability")
                .paragraph(
                    "The core privacy guarantee: deposits cannot be linked to withdrawals \
                     through on-chain analysis.",
                )
                .paragraph(
                    "**Why it works:** The zk-SNARK proof proves membership in the set of all \
                     depositors without revealing which specific deposit is being withdrawn. \
                     The anonymity set equals all deposits of the same denomination.",
                )
                .heading(4, "Confidentiality")
                .paragraph("Transaction details remain private between the depositor and recipient.")
                .list([
                    "**Hidden:** Which deposit is being withdrawn",
                    "**Hidden:** Depositor's identity",
                    "**Hidden:** Link between deposit and withdrawal addresses",
                    "**Public:** Deposit/withdrawal amounts (fixed denominations)",
                    "**Public:** Recipient address, relayer, fee",
                ])
                .heading(4, "Anonymity Set Size")
                .paragraph(
                    "Privacy strength depends on the anonymity set - the pool of \
                     indistinguishable deposits:",
                )
                .table(
                    Table::new(["Set", "Deposits", "Privacy"])
                        .row(["Small", "<100", "Lower privacy"])
                        .row(["Medium", "100-1000", "Good privacy"])
                        .row(["Large", ">1000", "Strong privacy"]),
                )
                .callout(
                    Callout::warning("Follow these practices to get the most out of the anonymity set:")
                        .title("Privacy Best Practices")
                        .block(ContentBlock::List(List::unordered([
                            "Wait for more deposits before withdrawing to increase anonymity set",
                            "Use a relayer to avoid linking gas payments",
                            "Withdraw to a fresh address with no prior history",
                            "Vary withdrawal timing to avoid timing analysis",
                        ]))),
                ),
        )
}
