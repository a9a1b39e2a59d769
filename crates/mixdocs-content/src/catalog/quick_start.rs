use crate::model::{Callout, CodeSample, Icon, Page, Section};

pub(super) fn page() -> Page {
    Page::new("quick-start", "Quick Start")
        .lead(
            "Get started with AproxMixer in just a few minutes. This guide covers wallet \
             connection, basic deposit and withdrawal operations, and environment setup.",
        )
        .icon(Icon::Rocket)
        .section(
            Section::new("wallet", "Connect Your Wallet")
                .subtitle("Using WalletConnect for secure connections")
                .paragraph(
                    "AproxMixer uses WalletConnect for secure, cross-platform wallet \
                     connections. Follow these steps to connect your wallet:",
                )
                .steps([
                    "**Open the Application:** navigate to the AproxMixer web application and \
                     click the \"Connect Wallet\" button in the top right corner.",
                    "**Select Your Wallet:** choose your preferred wallet from the list \
                     (MetaMask, WalletConnect, Coinbase Wallet, etc.). For mobile wallets, \
                     scan the QR code with your wallet app.",
                    "**Approve Connection:** confirm the connection request in your wallet. \
                     Once approved, you'll see your connected address displayed in the \
                     application.",
                ])
                .code(
                    CodeSample::new(
                        "import { useConnect, useAccount } from 'wagmi'
import { WalletConnectConnector } from 'wagmi/connectors/walletConnect'

function ConnectButton() {
  const { connect } = useConnect({
    connector: new WalletConnectConnector({
      options: {
        projectId: process.env.NEXT_PUBLIC_WC_PROJECT_ID,
      },
    }),
  })
  const { address, isConnected } = useAccount()

  if (isConnected) {
    return <span>Connected: {address}</span>
  }

  return <button onClick={() => connect()}>Connect Wallet</button>
}",
                    )
                    .language("tsx")
                    .title("React Integration Example"),
                ),
        )
        .section(
            Section::new("deposit-withdraw", "Deposit & Withdraw")
                .subtitle("Core mixing operations")
                .heading(3, "Making a Deposit")
                .steps([
                    "Select the token and amount you wish to deposit (e.g., 0.1 ETH, 1 ETH, 10 ETH)",
                    "Click \"Deposit\" and approve the transaction in your wallet",
                    "**Important:** Save your secret note securely. This note is required to \
                     withdraw your funds later",
                    "Wait for transaction confirmation on-chain",
                ])
                .callout(
                    Callout::warning(
                        "Your secret note is the only way to withdraw your deposited funds. If \
                         you lose it, your funds will be permanently locked in the contract. \
                         Store it securely offline.",
                    )
                    .title("Critical Security Note"),
                )
                .code(
                    CodeSample::new(
                        "// Generate commitment
const secret = randomBytes(31)
const nullifier = randomBytes(31)
const commitment = poseidonHash([nullifier, secret])

// Create note for user to save
const note = `aprox-${chainId}-${amount}-${toHex(commitment)}`

// Call deposit function
await mixerContract.deposit(commitment, { value: amount })",
                    )
                    .title("Deposit Flow"),
                )
                .heading(3, "Making a Withdrawal")
                .steps([
                    "Enter your secret note from the deposit",
                    "Specify the recipient address (can be different from deposit address)",
                    "Choose whether to use a relayer for enhanced privacy",
                    "Generate the zk-SNARK proof (this may take a few seconds)",
                    "Submit the withdrawal transaction",
                ])
                .code(
                    CodeSample::new(
                        "// Parse note and generate proof
const { nullifier, secret, commitment } = parseNote(note)
const merkleProof = await getMerkleProof(commitment)

const proof = await generateProof({
  nullifier,
  secret,
  merkleProof,
  recipient: recipientAddress,
  relayer: relayerAddress,
  fee: relayerFee,
})

// Submit to relayer or directly to contract
if (useRelayer) {
  await relayer.submitWithdrawal(proof)
} else {
  await mixerContract.withdraw(proof, ...)
}",
                    )
                    .title("Withdrawal Flow"),
                ),
        )
        .section(
            Section::new("environment", "Environment Setup")
                .subtitle("Required configuration variables")
                .paragraph(
                    "Configure the following environment variables in your `.env` file to \
                     connect to the AproxMixer services:",
                )
                .code(
                    CodeSample::new(
                        "# WalletConnect Configuration
NEXT_PUBLIC_WC_PROJECT_ID=your_walletconnect_project_id

# RPC Endpoints
NEXT_PUBLIC_RPC_URL_MAINNET=https://eth-mainnet.g.alchemy.com/v2/YOUR_KEY
NEXT_PUBLIC_RPC_URL_POLYGON=https://polygon-mainnet.g.alchemy.com/v2/YOUR_KEY
NEXT_PUBLIC_RPC_URL_ARBITRUM=https://arb-mainnet.g.alchemy.com/v2/YOUR_KEY

# Contract Addresses (per network)
NEXT_PUBLIC_MIXER_ADDRESS_MAINNET=0x...
NEXT_PUBLIC_MIXER_ADDRESS_POLYGON=0x...
NEXT_PUBLIC_MIXER_ADDRESS_ARBITRUM=0x...

# Backend Services
NEXT_PUBLIC_RELAYER_URL=https://relayer.aproxmixer.io
NEXT_PUBLIC_PROOF_API_URL=https://api.aproxmixer.io

# Optional: Custom Gas Settings
NEXT_PUBLIC_GAS_PRICE_ORACLE=https://api.etherscan.io/api",
                    )
                    .language("bash")
                    .title(".env.example"),
                )
                .heading(4, "Configuration Notes")
                .list([
                    "**WalletConnect Project ID:** Obtain from \
                     [cloud.walletconnect.com](https://cloud.walletconnect.com)",
                    "**RPC URLs:** Use your own nodes or services like Alchemy, Infura, or QuickNode",
                    "**Contract Addresses:** See [Appendices](/appendices#contracts) for deployed \
                     addresses",
                    "**Relayer URL:** Optional. Use for anonymous withdrawals",
                ])
                .callout(Callout::info(
                    "For local development, you can use Hardhat or Anvil to run a local \
                     blockchain with the mixer contracts deployed. See the \
                     [Frontend Integration tutorial](/tutorials#integration) for details.",
                )),
        )
}
