use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body shared by mutation endpoints and informational replies.
///
/// `data` is omitted from the JSON when there is nothing to return.
#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub response: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            response: true,
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            response: true,
            message: message.into(),
            data: None,
        }
    }
}

/// Body of every failed request.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub response: bool,
    pub message: String,
    /// Stringified cause, only set for internal errors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            response: false,
            message: message.into(),
            error: None,
        }
    }

    pub fn internal(error: impl Into<String>) -> Self {
        Self {
            response: false,
            message: "Server error".to_string(),
            error: Some(error.into()),
        }
    }
}

pub mod user {
    use super::*;
    use crate::transaction::TransactionView;

    /// A CPF as clients send it: either a JSON string (possibly formatted) or
    /// a JSON number.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(untagged)]
    pub enum CpfValue {
        Number(u64),
        Text(String),
    }

    impl std::fmt::Display for CpfValue {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Self::Number(number) => write!(f, "{number}"),
                Self::Text(text) => f.write_str(text),
            }
        }
    }

    /// Request body for registering a user. Every field is required; the
    /// server reports the first missing one.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct UserNew {
        pub name: Option<String>,
        pub cpf: Option<CpfValue>,
        pub email: Option<String>,
        pub age: Option<u32>,
    }

    /// Request body for updating a user. The CPF is immutable.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct UserUpdate {
        pub name: Option<String>,
        pub email: Option<String>,
        pub age: Option<u32>,
    }

    /// Query string of the user list endpoint.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct UserQuery {
        pub name: Option<String>,
        pub email: Option<String>,
        pub cpf: Option<String>,
    }

    /// Public fields of a user, without its ledger.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct UserProfile {
        pub id: Uuid,
        pub name: String,
        pub cpf: String,
        pub email: String,
        pub age: u32,
    }

    /// A user with its ledger, as found in repository snapshots.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct UserView {
        pub id: Uuid,
        pub name: String,
        pub cpf: String,
        pub email: String,
        pub age: u32,
        pub transactions: Vec<TransactionView>,
    }
}

pub mod transaction {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum TransactionKind {
        Income,
        Outcome,
    }

    /// Request body for creating a transaction.
    ///
    /// `type` is kept as free text so an unknown tag is reported by the
    /// server with its own message instead of a deserialization error.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct TransactionNew {
        pub title: Option<String>,
        pub value: Option<f64>,
        #[serde(rename = "type")]
        pub kind: Option<String>,
    }

    /// Request body for replacing a transaction.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct TransactionUpdate {
        pub title: Option<String>,
        pub value: Option<f64>,
        #[serde(rename = "type")]
        pub kind: Option<String>,
    }

    /// Query string of the transaction list endpoint. `title` wins over
    /// `type` when both are given.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct TransactionQuery {
        pub title: Option<String>,
        #[serde(rename = "type")]
        pub kind: Option<String>,
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct TransactionView {
        pub id: Uuid,
        pub title: String,
        pub value: f64,
        #[serde(rename = "type")]
        pub kind: TransactionKind,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
    pub struct Balance {
        pub incomes: f64,
        pub outcomes: f64,
        /// Incomes minus outcomes.
        #[serde(rename = "credito")]
        pub credit: f64,
    }

    /// Response of the transaction list endpoint. The balance is only
    /// included when no filter was given.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransactionListResponse {
        pub transactions: Vec<TransactionView>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub balance: Option<Balance>,
    }
}
