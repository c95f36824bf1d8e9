//! Mapping from engine types to API bodies.

use api_types::{
    transaction::{Balance, TransactionKind, TransactionView},
    user::{CpfValue, UserProfile, UserView},
};
use engine::{Cpf, Transaction, User};

fn map_kind(kind: engine::TransactionKind) -> TransactionKind {
    match kind {
        engine::TransactionKind::Income => TransactionKind::Income,
        engine::TransactionKind::Outcome => TransactionKind::Outcome,
    }
}

/// A numeric zero CPF counts as not filled.
pub(crate) fn cpf(value: Option<&CpfValue>) -> Option<Cpf> {
    match value? {
        CpfValue::Number(0) => None,
        value => Cpf::parse(&value.to_string()),
    }
}

pub(crate) fn transaction(tx: &Transaction) -> TransactionView {
    TransactionView {
        id: tx.id,
        title: tx.title.clone(),
        value: tx.value,
        kind: map_kind(tx.kind),
    }
}

pub(crate) fn transactions<'a>(txs: impl IntoIterator<Item = &'a Transaction>) -> Vec<TransactionView> {
    txs.into_iter().map(transaction).collect()
}

pub(crate) fn balance(balance: engine::Balance) -> Balance {
    Balance {
        incomes: balance.incomes,
        outcomes: balance.outcomes,
        credit: balance.credit,
    }
}

pub(crate) fn profile(user: &User) -> UserProfile {
    UserProfile {
        id: user.id,
        name: user.name.clone(),
        cpf: user.cpf.to_string(),
        email: user.email.clone(),
        age: user.age,
    }
}

pub(crate) fn users(users: &[User]) -> Vec<UserView> {
    users
        .iter()
        .map(|user| UserView {
            id: user.id,
            name: user.name.clone(),
            cpf: user.cpf.to_string(),
            email: user.email.clone(),
            age: user.age,
            transactions: transactions(&user.transactions),
        })
        .collect()
}
