use crate::model::{Callout, CodeSample, Icon, Page, Section, Table};

pub(super) fn page() -> Page {
    Page::new("architecture", "Architecture")
        .lead(
            "How the AproxMixer components fit together: on-chain contracts, the web \
             application, and the optional backend and relayer services.",
        )
        .icon(Icon::Layers)
        .section(
            Section::new("contracts", "Smart Contracts")
                .subtitle("On-chain protocol logic")
                .paragraph(
                    "Each denomination pool is an independent `Mixer` contract. Deposits insert \
                     a commitment into an incremental Merkle tree; withdrawals present a \
                     zk-SNARK proof that is checked by the `Verifier` contract.",
                )
                .table(
                    Table::new(["Contract", "Responsibility"])
                        .row(["Mixer.sol", "Accepts fixed-denomination deposits and proof-backed withdrawals"])
                        .row(["Verifier.sol", "Groth16 verification generated from the withdrawal circuit"])
                        .row(["MerkleTree.sol", "Incremental commitment tree with a ring buffer of recent roots"]),
                )
                .code(
                    CodeSample::new(
                        "interface IMixer {
    function deposit(bytes32 commitment) external payable;

    function withdraw(
        bytes calldata proof,
        bytes32 root,
        bytes32 nullifierHash,
        address payable recipient,
        address payable relayer,
        uint256 fee
    ) external;

    function isKnownRoot(bytes32 root) external view returns (bool);
    function isSpent(bytes32 nullifierHash) external view returns (bool);
}",
                    )
                    .language("solidity")
                    .title("Mixer Interface"),
                ),
        )
        .section(
            Section::new("frontend", "Frontend")
                .subtitle("Client-side proof generation")
                .paragraph(
                    "The web application is built with React, Vite and shadcn/ui. Wallet access \
                     goes through wagmi and WalletConnect, and proofs are generated in the \
                     browser so secrets never leave the user's device.",
                )
                .list([
                    "Notes are created and parsed locally",
                    "Circuit artifacts (`withdraw.wasm`, `withdraw_final.zkey`) are fetched from IPFS",
                    "Proof generation runs in a Web Worker to keep the UI responsive",
                ]),
        )
        .section(
            Section::new("relayer", "Backend/Relayer")
                .subtitle("Optional supporting services")
                .paragraph(
                    "The indexer serves Merkle paths and pool statistics. Relayers submit \
                     withdrawal transactions on the user's behalf so the recipient address \
                     never needs gas from a linked account.",
                )
                .callout(
                    Callout::info(
                        "Relayers cannot alter the recipient or fee: both are public inputs of \
                         the proof and any change makes verification fail.",
                    )
                    .title("Trust Model"),
                ),
        )
        .section(
            Section::new("data-flow", "Data Flow")
                .subtitle("From deposit to withdrawal")
                .steps([
                    "The client generates a secret and nullifier and computes the commitment",
                    "The commitment is deposited and inserted into the Merkle tree",
                    "Later, the client fetches the Merkle path for its commitment from the indexer",
                    "The client generates a proof of membership bound to recipient, relayer and fee",
                    "The proof is submitted directly or through a relayer and verified on-chain",
                ])
                .code(
                    CodeSample::new(
                        "Client ──deposit(commitment)──► Mixer ──insert──► MerkleTree
Client ◄──path(commitment)──── Indexer
Client ──proof──► Relayer ──withdraw(proof, ...)──► Mixer ──verify──► Verifier",
                    )
                    .language("text"),
                ),
        )
}
