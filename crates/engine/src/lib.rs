//! In-memory users & ledger engine.
//!
//! The [`Engine`] owns every [`User`] and, through them, every
//! [`Transaction`]. Nothing is persisted: the state lives as long as the
//! engine value. Callers needing shared access wrap the engine in a single
//! lock so each operation observes the effects of all previous ones.

use uuid::Uuid;

pub use balance::Balance;
pub use commands::{
    NewTransactionCmd, NewUserCmd, TransactionFilter, UpdateTransactionCmd, UpdateUserCmd,
    UserFilter,
};
pub use error::EngineError;
pub use transactions::{Transaction, TransactionKind};
pub use users::{Cpf, User};

mod balance;
mod commands;
mod error;
mod transactions;
mod users;
mod util;

type ResultEngine<T> = Result<T, EngineError>;

/// Outcome of [`Engine::search_users`].
#[derive(Debug, PartialEq)]
pub enum UserSearch<'a> {
    /// No user is registered at all.
    Empty,
    /// No filter was given.
    All(&'a [User]),
    /// Filters were given but none matched.
    NoMatch,
    Found(&'a User),
}

#[derive(Debug, Default)]
pub struct Engine {
    users: Vec<User>,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// All users in registration order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn user(&self, id: Uuid) -> ResultEngine<&User> {
        self.users
            .iter()
            .find(|user| user.id == id)
            .ok_or(EngineError::UserNotFound)
    }

    fn user_mut(&mut self, id: Uuid) -> ResultEngine<&mut User> {
        self.users
            .iter_mut()
            .find(|user| user.id == id)
            .ok_or(EngineError::UserNotFound)
    }

    /// Fails with [`EngineError::CpfTaken`] when `cpf` belongs to a registered
    /// user. An absent CPF always passes.
    pub fn ensure_cpf_available(&self, cpf: Option<&Cpf>) -> ResultEngine<()> {
        match cpf {
            Some(cpf) if self.users.iter().any(|user| user.cpf == *cpf) => {
                Err(EngineError::CpfTaken)
            }
            _ => Ok(()),
        }
    }

    /// Fails with [`EngineError::UserNotFound`] when no user has `id`.
    pub fn ensure_user_exists(&self, id: Uuid) -> ResultEngine<()> {
        self.user(id).map(|_| ())
    }

    /// Registers a user and returns its id.
    pub fn new_user(&mut self, cmd: NewUserCmd) -> ResultEngine<Uuid> {
        self.ensure_cpf_available(Some(&cmd.cpf))?;

        let user = User::new(cmd.name, cmd.cpf, cmd.email, cmd.age);
        let id = user.id;
        self.users.push(user);

        Ok(id)
    }

    /// Looks users up by `name`, then `email`, then `cpf`.
    ///
    /// Each filter is evaluated on its own and the first one that matches
    /// wins; filters are never combined.
    pub fn search_users(&self, filter: &UserFilter) -> UserSearch<'_> {
        if self.users.is_empty() {
            return UserSearch::Empty;
        }
        if filter.is_empty() {
            return UserSearch::All(&self.users);
        }

        let by_name = filter
            .name
            .as_deref()
            .and_then(|name| self.users.iter().find(|user| user.name == name));
        let by_email = || {
            filter
                .email
                .as_deref()
                .and_then(|email| self.users.iter().find(|user| user.email == email))
        };
        let by_cpf = || {
            filter
                .cpf
                .as_deref()
                .and_then(Cpf::parse)
                .and_then(|cpf| self.users.iter().find(|user| user.cpf == cpf))
        };

        by_name
            .or_else(by_email)
            .or_else(by_cpf)
            .map_or(UserSearch::NoMatch, UserSearch::Found)
    }

    /// Replaces name, email and age of a user.
    pub fn update_user(&mut self, id: Uuid, cmd: UpdateUserCmd) -> ResultEngine<()> {
        let user = self.user_mut(id)?;
        user.name = cmd.name;
        user.email = cmd.email;
        user.age = cmd.age;
        Ok(())
    }

    /// Removes a user together with its ledger and returns it.
    pub fn delete_user(&mut self, id: Uuid) -> ResultEngine<User> {
        let index = self
            .users
            .iter()
            .position(|user| user.id == id)
            .ok_or(EngineError::UserNotFound)?;
        Ok(self.users.remove(index))
    }

    /// Appends a transaction to the ledger of `user_id` and returns its id.
    pub fn new_transaction(&mut self, user_id: Uuid, cmd: NewTransactionCmd) -> ResultEngine<Uuid> {
        let user = self.user_mut(user_id)?;
        let tx = Transaction::new(cmd.title, cmd.value, cmd.kind);
        let id = tx.id;
        user.transactions.push(tx);
        Ok(id)
    }

    pub fn transaction(&self, user_id: Uuid, id: Uuid) -> ResultEngine<&Transaction> {
        self.user(user_id)?
            .transaction(id)
            .ok_or(EngineError::TransactionNotFound)
    }

    /// Transactions of `user_id` in insertion order, optionally filtered.
    pub fn transactions(
        &self,
        user_id: Uuid,
        filter: Option<&TransactionFilter>,
    ) -> ResultEngine<Vec<&Transaction>> {
        let user = self.user(user_id)?;
        Ok(user
            .transactions
            .iter()
            .filter(|tx| filter.is_none_or(|filter| filter.matches(tx)))
            .collect())
    }

    pub fn balance(&self, user_id: Uuid) -> ResultEngine<Balance> {
        Ok(Balance::of(&self.user(user_id)?.transactions))
    }

    pub fn update_transaction(
        &mut self,
        user_id: Uuid,
        id: Uuid,
        cmd: UpdateTransactionCmd,
    ) -> ResultEngine<()> {
        let tx = self
            .user_mut(user_id)?
            .transaction_mut(id)
            .ok_or(EngineError::TransactionNotFound)?;
        tx.title = cmd.title;
        tx.value = cmd.value;
        tx.kind = cmd.kind;
        Ok(())
    }

    /// Removes a transaction and returns it.
    pub fn delete_transaction(&mut self, user_id: Uuid, id: Uuid) -> ResultEngine<Transaction> {
        let user = self.user_mut(user_id)?;
        let index = user
            .transactions
            .iter()
            .position(|tx| tx.id == id)
            .ok_or(EngineError::TransactionNotFound)?;
        Ok(user.transactions.remove(index))
    }
}
