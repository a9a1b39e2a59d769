use crate::model::{Callout, CodeSample, Icon, Page, Section, Table};

fn json(source: &str, title: &str) -> CodeSample {
    CodeSample::new(source).language("json").title(title)
}

pub(super) fn page() -> Page {
    Page::new("api", "API Reference")
        .lead("Complete API documentation for backend services and relayer endpoints.")
        .icon(Icon::Code)
        .section(
            Section::new("backend", "Backend API")
                .subtitle("Proof generation and indexer services")
                .heading(4, "GET /api/merkle/path/:commitment")
                .paragraph(
                    "Retrieves the Merkle path for a given commitment, required for proof \
                     generation.",
                )
                .code(json(
                    r#"{
  "root": "0x1234...abcd",
  "pathElements": [
    "0xabc...",
    "0xdef...",
    // ... 20 elements for tree depth 20
  ],
  "pathIndices": [0, 1, 0, 1, ...],
  "leafIndex": 42
}"#,
                    "Response",
                ))
                .heading(4, "GET /api/deposits")
                .paragraph(
                    "Lists recent deposits with pagination. Useful for displaying pool \
                     statistics.",
                )
                .code(
                    CodeSample::new("?page=1&limit=20&network=ethereum")
                        .language("text")
                        .title("Query Parameters"),
                )
                .code(json(
                    r#"{
  "deposits": [
    {
      "commitment": "0x...",
      "leafIndex": 42,
      "timestamp": 1699999999,
      "transactionHash": "0x..."
    }
  ],
  "total": 1234,
  "page": 1,
  "limit": 20
}"#,
                    "Response",
                ))
                .heading(4, "GET /api/stats")
                .paragraph(
                    "Returns pool statistics including total deposits, anonymity set size, \
                     and TVL.",
                )
                .code(json(
                    r#"{
  "totalDeposits": 5420,
  "totalWithdrawals": 4100,
  "tvlEth": "132.0",
  "anonymitySet": {
    "0.1": 2100,
    "1": 1800,
    "10": 1520
  }
}"#,
                    "Response",
                )),
        )
        .section(
            Section::new("relayer", "Relayer API")
                .subtitle("Anonymous withdrawal submission")
                .callout(Callout::info(
                    "Relayer endpoints accept withdrawal requests and submit them on-chain. \
                     The relayer fee is deducted from the withdrawal amount.",
                ))
                .heading(4, "POST /api/relay")
                .paragraph("Submit a withdrawal request to be relayed on-chain.")
                .code(json(
                    r#"{
  "proof": "0x...",
  "args": {
    "root": "0x...",
    "nullifierHash": "0x...",
    "recipient": "0x...",
    "relayer": "0x...",
    "fee": "100000000000000000",
    "refund": "0"
  },
  "contract": "0x...",
  "network": "ethereum"
}"#,
                    "Request Body",
                ))
                .code(json(
                    r#"{
  "success": true,
  "txHash": "0x...",
  "message": "Withdrawal submitted successfully"
}"#,
                    "Response (Success)",
                ))
                .heading(4, "GET /api/status")
                .paragraph("Check relayer status and current fee rates.")
                .code(json(
                    r#"{
  "relayerAddress": "0x...",
  "networks": {
    "ethereum": {
      "enabled": true,
      "feePercent": "0.1",
      "minFeeEth": "0.001"
    },
    "polygon": {
      "enabled": true,
      "feePercent": "0.05",
      "minFeeMatic": "0.5"
    }
  },
  "queueLength": 3,
  "health": "operational"
}"#,
                    "Response",
                ))
                .heading(4, "GET /api/job/:id")
                .paragraph("Check the status of a submitted withdrawal job.")
                .code(json(
                    r#"{
  "id": "abc123",
  "status": "confirmed",  // pending | submitted | confirmed | failed
  "txHash": "0x...",
  "confirmations": 12,
  "error": null
}"#,
                    "Response",
                )),
        )
        .section(
            Section::new("errors", "Error Codes")
                .subtitle("API error responses")
                .table(
                    Table::new(["Code", "Message", "Description"])
                        .row(["400", "INVALID_PROOF", "The zk-SNARK proof is invalid or malformed"])
                        .row(["400", "INVALID_ROOT", "Merkle root is not recognized by the contract"])
                        .row(["400", "SPENT_NULLIFIER", "This note has already been withdrawn"])
                        .row(["400", "INSUFFICIENT_FEE", "Fee is below the relayer's minimum"])
                        .row(["429", "RATE_LIMITED", "Too many requests, please wait"])
                        .row(["500", "RELAY_FAILED", "Transaction submission failed on-chain"])
                        .row(["503", "SERVICE_UNAVAILABLE", "Relayer is temporarily unavailable"]),
                )
                .code(json(
                    r#"{
  "success": false,
  "error": {
    "code": "INVALID_PROOF",
    "message": "The provided proof failed verification",
    "details": {
      "reason": "Pairing check failed"
    }
  }
}"#,
                    "Error Response Format",
                )),
        )
}
