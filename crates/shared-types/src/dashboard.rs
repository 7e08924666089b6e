use serde::{Deserialize, Serialize};

/// Agent profile as returned by the dashboard endpoint.
///
/// Every field is optional on the wire — the UI substitutes a placeholder
/// ("NA" or blank) rather than failing the whole decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub mobile_number: Option<String>,
    #[serde(default)]
    pub wallet_balance: Option<f64>,
}

/// Direction of a wallet movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Credit,
    Debit,
    /// Anything the backend sends that we don't recognize. Rendered like a
    /// credit — only debits get special treatment.
    #[serde(other)]
    Other,
}

impl TransactionType {
    pub fn is_debit(&self) -> bool {
        matches!(self, TransactionType::Debit)
    }

    /// Wire-style lowercase label for display in badges.
    pub fn label(&self) -> &'static str {
        match self {
            TransactionType::Credit => "credit",
            TransactionType::Debit => "debit",
            TransactionType::Other => "other",
        }
    }
}

/// One wallet ledger entry. Ordering is whatever the backend returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub vehicle_number: String,
    pub amount: f64,
    pub transaction_type: TransactionType,
    /// ISO-8601 timestamp, formatted client-side.
    pub created_at: String,
}

/// Full payload of `GET /api/dashboard/get-user-dashboard-data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    #[serde(default)]
    pub user_data: Option<UserProfile>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn decodes_full_payload() {
        let json = r#"{
            "userData": {
                "fullName": "Asha Verma",
                "mobileNumber": "9876543210",
                "walletBalance": 240.5
            },
            "transactions": [
                {
                    "vehicleNumber": "RJ14AB1234",
                    "amount": 20.0,
                    "transactionType": "debit",
                    "createdAt": "2026-08-01T10:15:00Z"
                }
            ]
        }"#;

        let data: DashboardData = serde_json::from_str(json).unwrap();
        let user = data.user_data.unwrap();
        assert_eq!(user.full_name.as_deref(), Some("Asha Verma"));
        assert_eq!(user.wallet_balance, Some(240.5));
        assert_eq!(data.transactions.len(), 1);
        assert!(data.transactions[0].transaction_type.is_debit());
    }

    #[test]
    fn missing_fields_become_none() {
        let data: DashboardData = serde_json::from_str("{}").unwrap();
        assert_eq!(data.user_data, None);
        assert!(data.transactions.is_empty());

        let user: UserProfile = serde_json::from_str("{}").unwrap();
        assert_eq!(user.full_name, None);
        assert_eq!(user.mobile_number, None);
        assert_eq!(user.wallet_balance, None);
    }

    #[test]
    fn unknown_transaction_type_is_tolerated() {
        let json = r#"{
            "vehicleNumber": "MH12XY9999",
            "amount": 5.0,
            "transactionType": "refund",
            "createdAt": "2026-08-02T08:00:00Z"
        }"#;
        let txn: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(txn.transaction_type, TransactionType::Other);
        assert!(!txn.transaction_type.is_debit());
    }
}
