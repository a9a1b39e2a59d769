use crate::model::{Callout, Card, CodeSample, Icon, Page, Section, Table};

pub(super) fn page() -> Page {
    Page::new("appendices", "Appendices")
        .lead("Reference materials, configuration details, and additional resources.")
        .icon(Icon::FileText)
        .section(
            Section::new("env", "Environment Variables")
                .subtitle("Complete .env reference")
                .code(
                    CodeSample::new(
                        "# ============================================
# WALLETCONNECT CONFIGURATION
# ============================================
# Get your project ID from https://cloud.walletconnect.com
VITE_WC_PROJECT_ID=your_walletconnect_project_id

# ============================================
# RPC ENDPOINTS
# ============================================
# Use your own RPC endpoints (Alchemy, Infura, QuickNode, etc.)
VITE_RPC_MAINNET=https://eth-mainnet.g.alchemy.com/v2/YOUR_API_KEY
VITE_RPC_POLYGON=https://polygon-mainnet.g.alchemy.com/v2/YOUR_API_KEY
VITE_RPC_ARBITRUM=https://arb-mainnet.g.alchemy.com/v2/YOUR_API_KEY
VITE_RPC_OPTIMISM=https://opt-mainnet.g.alchemy.com/v2/YOUR_API_KEY

# ============================================
# CONTRACT ADDRESSES
# ============================================
# Ethereum Mainnet
VITE_MIXER_ETH_01=0x...  # 0.1 ETH pool
VITE_MIXER_ETH_1=0x...   # 1 ETH pool
VITE_MIXER_ETH_10=0x...  # 10 ETH pool

# Polygon
VITE_MIXER_MATIC_100=0x...   # 100 MATIC pool
VITE_MIXER_MATIC_1000=0x...  # 1000 MATIC pool

# Arbitrum
VITE_MIXER_ARB_01=0x...  # 0.1 ETH pool
VITE_MIXER_ARB_1=0x...   # 1 ETH pool

# ============================================
# BACKEND SERVICES
# ============================================
VITE_API_URL=https://api.aproxmixer.io
VITE_RELAYER_URL=https://relayer.aproxmixer.io

# ============================================
# OPTIONAL CONFIGURATION
# ============================================
# Custom gas oracle
VITE_GAS_ORACLE_URL=https://api.etherscan.io/api

# IPFS gateway for circuit files
VITE_IPFS_GATEWAY=https://cloudflare-ipfs.com/ipfs/

# Enable testnet mode
VITE_ENABLE_TESTNETS=false",
                    )
                    .language("bash")
                    .title(".env.example"),
                )
                .callout(Callout::info(
                    "Never commit your `.env` file to version control. Add it to `.gitignore` \
                     and use environment variables in your deployment platform.",
                )),
        )
        .section(
            Section::new("contracts", "Contract Addresses")
                .subtitle("Deployed contract addresses by network")
                .callout(Callout::warning(
                    "These addresses are placeholders. Actual deployed addresses will be \
                     published after mainnet launch and audit completion.",
                ))
                .table(
                    Table::new(["Network", "Pool", "Address"])
                        .row(["Ethereum Mainnet", "0.1 ETH", "TBD"])
                        .row(["Ethereum Mainnet", "1 ETH", "TBD"])
                        .row(["Ethereum Mainnet", "10 ETH", "TBD"])
                        .row(["Polygon", "100 MATIC", "TBD"])
                        .row(["Polygon", "1000 MATIC", "TBD"])
                        .row(["Arbitrum", "0.1 ETH", "TBD"])
                        .row(["Arbitrum", "1 ETH", "TBD"]),
                )
                .heading(4, "Testnet Deployments")
                .paragraph("For development and testing, use the following testnet deployments:")
                .table(
                    Table::default()
                        .row(["Sepolia", "0.01 ETH", "0x1234...abcd"])
                        .row(["Mumbai", "10 MATIC", "0x5678...efgh"]),
                ),
        )
        .section(
            Section::new("resources", "Additional Resources")
                .subtitle("External documentation and references")
                .cards([
                    Card::new(
                        "Circom Documentation",
                        "Official documentation for the Circom circuit language used in zk-SNARK \
                         development.",
                    )
                    .link("https://docs.circom.io/"),
                    Card::new(
                        "snarkjs",
                        "JavaScript library for generating and verifying zk-SNARK proofs.",
                    )
                    .link("https://github.com/iden3/snarkjs"),
                    Card::new(
                        "wagmi",
                        "React Hooks for Ethereum - the recommended way to integrate with \
                         AproxMixer.",
                    )
                    .link("https://wagmi.sh/"),
                    Card::new(
                        "WalletConnect",
                        "Documentation for WalletConnect v2 wallet connection protocol.",
                    )
                    .link("https://docs.walletconnect.com/"),
                    Card::new(
                        "shadcn/ui",
                        "Re-usable components built with Radix UI and Tailwind CSS.",
                    )
                    .link("https://ui.shadcn.com/"),
                    Card::new(
                        "Tailwind CSS",
                        "Utility-first CSS framework used for styling the frontend.",
                    )
                    .link("https://tailwindcss.com/docs"),
                ])
                .heading(4, "Academic References")
                .list([
                    "**Groth16:** \"On the Size of Pairing-based Non-interactive Arguments\" - \
                     Jens Groth, 2016",
                    "**Poseidon Hash:** \"Poseidon: A New Hash Function for Zero-Knowledge Proof \
                     Systems\" - Grassi et al., 2021",
                    "**Merkle Trees:** \"A Digital Signature Based on a Conventional Encryption \
                     Function\" - Ralph Merkle, 1987",
                ]),
        )
}
