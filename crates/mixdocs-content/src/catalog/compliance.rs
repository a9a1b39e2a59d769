use crate::model::{Callout, Card, Icon, Page, Section};

pub(super) fn page() -> Page {
    Page::new("compliance", "Compliance")
        .lead(
            "Understanding AproxMixer's compliance model, data practices, and jurisdictional \
             considerations.",
        )
        .icon(Icon::Scale)
        .section(
            Section::new("non-custodial", "Non-Custodial Design")
                .subtitle("Users maintain full control of funds")
                .heading(4, "No Custody of User Funds")
                .paragraph(
                    "AproxMixer smart contracts are non-custodial. The protocol never holds, \
                     controls, or has access to user funds. Deposits are locked in immutable \
                     smart contracts, and only users with valid proofs can withdraw.",
                )
                .heading(4, "What AproxMixer Controls")
                .list([
                    "Cannot access deposited funds",
                    "Cannot freeze or confiscate assets",
                    "Cannot block withdrawals",
                    "Cannot identify depositors",
                ])
                .heading(4, "What Users Control")
                .list([
                    "Full custody of secret notes",
                    "Exclusive withdrawal rights",
                    "Choice of recipient address",
                    "Decision to use relayers",
                ]),
        )
        .section(
            Section::new("data", "Data Minimization")
                .subtitle("Privacy by design principles")
                .heading(4, "No Personal Data Collection")
                .paragraph(
                    "AproxMixer does not collect, store, or process any personally identifiable \
                     information (PII). The protocol operates purely on cryptographic \
                     commitments and proofs.",
                )
                .heading(4, "Data Practices")
                .cards([
                    Card::new(
                        "No PII Collection",
                        "No names, emails, phone numbers, or identity documents are requested or \
                         stored.",
                    ),
                    Card::new(
                        "No IP Logging",
                        "IP addresses are not logged by the frontend or backend services.",
                    ),
                    Card::new(
                        "No Analytics Tracking",
                        "No third-party analytics or tracking scripts are embedded in the \
                         frontend.",
                    ),
                    Card::new(
                        "On-chain Data Only",
                        "The only data stored are cryptographic commitments on the public \
                         blockchain.",
                    ),
                ])
                .callout(
                    Callout::info(
                        "While AproxMixer provides transaction privacy, all deposits and \
                         withdrawals are recorded on the public blockchain. The privacy comes \
                         from the cryptographic unlinkability between deposits and withdrawals, \
                         not from hiding transactions.",
                    )
                    .title("Blockchain Transparency"),
                ),
        )
        .section(
            Section::new("relayer", "Relayer Compliance Model")
                .subtitle("Independent operator responsibilities")
                .heading(4, "Relayer Independence")
                .paragraph(
                    "Relayers are independent operators who choose to participate in the \
                     network. Each relayer is responsible for their own compliance with local \
                     regulations.",
                )
                .heading(4, "Permissionless Relaying")
                .paragraph(
                    "Any operator can run a relayer without permission. Users choose which \
                     relayer to use based on fees, reliability, and trust.",
                )
                .heading(4, "Compliance-Focused Relayers")
                .paragraph(
                    "Operators may choose to implement additional compliance measures such as:",
                )
                .list([
                    "OFAC sanctions list screening",
                    "Chainanalysis or similar screening integration",
                    "Geofencing based on jurisdiction",
                    "Transaction monitoring and reporting",
                ])
                .callout(
                    Callout::warning(
                        "Relayer operators should consult with legal counsel regarding their \
                         obligations under applicable laws, including but not limited to money \
                         transmission regulations, sanctions compliance, and anti-money \
                         laundering requirements.",
                    )
                    .title("Operator Responsibility"),
                ),
        )
        .section(
            Section::new("jurisdiction", "Jurisdictional Considerations")
                .subtitle("User and operator responsibilities")
                .heading(4, "Legal Status Varies by Jurisdiction")
                .paragraph(
                    "The legality of privacy tools varies significantly across jurisdictions. \
                     Users are responsible for understanding and complying with the laws \
                     applicable to them.",
                )
                .heading(4, "User Responsibility")
                .list([
                    "Understand local regulations",
                    "Ensure lawful use of the protocol",
                    "Comply with tax reporting obligations",
                    "Not use for prohibited activities",
                ])
                .heading(4, "Protocol Neutrality")
                .list([
                    "Open-source, permissionless protocol",
                    "No central authority or operator",
                    "Smart contracts execute autonomously",
                    "Code is law on the blockchain",
                ])
                .callout(
                    Callout::danger(
                        "This documentation is for informational purposes only and does not \
                         constitute legal advice. Users should consult with qualified legal \
                         counsel regarding the use of privacy protocols in their jurisdiction. \
                         AproxMixer makes no representations regarding the legality of the \
                         protocol in any jurisdiction.",
                    )
                    .title("Disclaimer"),
                ),
        )
}
