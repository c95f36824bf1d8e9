//! Command structs for engine operations.
//!
//! Every write operation takes a validated command. The `try_new`
//! constructors receive the raw, possibly missing, request fields and check
//! them in a fixed order: the first failing field is the one reported.

use crate::{
    Cpf, EngineError, ResultEngine, TransactionKind,
    util::{non_empty, require_age, require_amount, require_text},
};

/// Register a new user.
#[derive(Clone, Debug, PartialEq)]
pub struct NewUserCmd {
    pub name: String,
    pub cpf: Cpf,
    pub email: String,
    pub age: u32,
}

impl NewUserCmd {
    /// Checks `name`, `cpf`, `email` and `age`, in this order.
    pub fn try_new(
        name: Option<String>,
        cpf: Option<Cpf>,
        email: Option<String>,
        age: Option<u32>,
    ) -> ResultEngine<Self> {
        let name = require_text(name, "Name")?;
        let cpf = cpf.ok_or(EngineError::MissingField("CPF"))?;
        let email = require_text(email, "Email")?;
        let age = require_age(age, "Age")?;

        Ok(Self {
            name,
            cpf,
            email,
            age,
        })
    }
}

/// Replace the editable fields of a user. The CPF cannot be changed.
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateUserCmd {
    pub name: String,
    pub email: String,
    pub age: u32,
}

impl UpdateUserCmd {
    /// Checks `name`, `age` and `email`, in this order.
    pub fn try_new(
        name: Option<String>,
        email: Option<String>,
        age: Option<u32>,
    ) -> ResultEngine<Self> {
        let name = require_text(name, "Name")?;
        let age = require_age(age, "Age")?;
        let email = require_text(email, "Email")?;

        Ok(Self { name, email, age })
    }
}

/// Append a transaction to a user ledger.
#[derive(Clone, Debug, PartialEq)]
pub struct NewTransactionCmd {
    pub title: String,
    pub value: f64,
    pub kind: TransactionKind,
}

impl NewTransactionCmd {
    /// Checks `title`, `value` and `type` for presence, in this order, then
    /// that `type` is a known kind.
    pub fn try_new(
        title: Option<String>,
        value: Option<f64>,
        kind: Option<String>,
    ) -> ResultEngine<Self> {
        let title = require_text(title, "Title")?;
        let value = require_amount(value, "Value")?;
        let kind = require_text(kind, "Type")?;
        let kind = TransactionKind::try_from(kind.as_str())?;

        Ok(Self { title, value, kind })
    }
}

/// Replace every field of an existing transaction.
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateTransactionCmd {
    pub title: String,
    pub value: f64,
    pub kind: TransactionKind,
}

impl UpdateTransactionCmd {
    /// Checks `title`, `type` and `value` for presence, in this order, then
    /// that `type` is a known kind.
    pub fn try_new(
        title: Option<String>,
        value: Option<f64>,
        kind: Option<String>,
    ) -> ResultEngine<Self> {
        let title = require_text(title, "Title")?;
        let kind = require_text(kind, "Type")?;
        let value = require_amount(value, "Value")?;
        let kind = TransactionKind::try_from(kind.as_str())?;

        Ok(Self { title, value, kind })
    }
}

/// Optional user lookup filters. Empty values count as not given.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserFilter {
    pub name: Option<String>,
    pub email: Option<String>,
    /// Raw CPF as received; normalized with [`Cpf::parse`] when matching.
    pub cpf: Option<String>,
}

impl UserFilter {
    pub fn new(name: Option<String>, email: Option<String>, cpf: Option<String>) -> Self {
        Self {
            name: non_empty(name),
            email: non_empty(email),
            cpf: non_empty(cpf),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.cpf.is_none()
    }
}

/// Transaction list filter. A title filter wins over a type filter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransactionFilter {
    Title(String),
    /// Raw type tag; an unknown tag matches nothing.
    Kind(String),
}

impl TransactionFilter {
    pub fn new(title: Option<String>, kind: Option<String>) -> Option<Self> {
        non_empty(title)
            .map(Self::Title)
            .or_else(|| non_empty(kind).map(Self::Kind))
    }

    pub(crate) fn matches(&self, tx: &crate::Transaction) -> bool {
        match self {
            Self::Title(title) => tx.title == *title,
            Self::Kind(kind) => tx.kind.as_str() == kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_user_reports_first_missing_field() {
        let err = NewUserCmd::try_new(None, None, None, None).unwrap_err();
        assert_eq!(err, EngineError::MissingField("Name"));

        let err = NewUserCmd::try_new(Some("Ana".into()), None, None, Some(20)).unwrap_err();
        assert_eq!(err, EngineError::MissingField("CPF"));

        let err = NewUserCmd::try_new(Some("Ana".into()), Cpf::parse("1"), None, None).unwrap_err();
        assert_eq!(err, EngineError::MissingField("Email"));

        let err = NewUserCmd::try_new(
            Some("Ana".into()),
            Cpf::parse("1"),
            Some("ana@mail.com".into()),
            Some(0),
        )
        .unwrap_err();
        assert_eq!(err, EngineError::MissingField("Age"));
    }

    #[test]
    fn update_user_checks_age_before_email() {
        let err = UpdateUserCmd::try_new(Some("Ana".into()), None, None).unwrap_err();
        assert_eq!(err, EngineError::MissingField("Age"));
    }

    #[test]
    fn new_transaction_checks_presence_before_kind() {
        let err = NewTransactionCmd::try_new(Some("rent".into()), None, Some("bogus".into()))
            .unwrap_err();
        assert_eq!(err, EngineError::MissingField("Value"));

        let err = NewTransactionCmd::try_new(Some("rent".into()), Some(10.0), Some("bogus".into()))
            .unwrap_err();
        assert_eq!(err, EngineError::InvalidKind("bogus".to_string()));
    }

    #[test]
    fn update_transaction_checks_type_before_value() {
        let err = UpdateTransactionCmd::try_new(Some("rent".into()), None, None).unwrap_err();
        assert_eq!(err, EngineError::MissingField("Type"));
    }

    #[test]
    fn title_filter_wins_over_kind() {
        let filter = TransactionFilter::new(Some("rent".into()), Some("income".into()));
        assert_eq!(filter, Some(TransactionFilter::Title("rent".into())));

        let filter = TransactionFilter::new(Some(String::new()), Some("income".into()));
        assert_eq!(filter, Some(TransactionFilter::Kind("income".into())));

        assert_eq!(TransactionFilter::new(None, None), None);
    }

    #[test]
    fn user_filter_ignores_empty_values() {
        assert!(UserFilter::new(Some(String::new()), None, Some(String::new())).is_empty());
        assert!(!UserFilter::new(None, Some("a@b.c".into()), None).is_empty());
    }
}
