//! Fixed user table backing the mock login.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    User,
    Admin,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub email: String,
    pub role: UserRole,
}

/// A login-table row. Passwords are plaintext; this is not a credential store.
#[derive(Debug, Clone, Copy)]
pub struct Account {
    pub id: &'static str,
    pub email: &'static str,
    pub password: &'static str,
    pub role: UserRole,
}

impl Account {
    #[must_use]
    pub fn to_user(&self) -> User {
        User { id: self.id.to_owned(), email: self.email.to_owned(), role: self.role }
    }
}

pub const ACCOUNTS: [Account; 2] = [
    Account { id: "1", email: "user", password: "user", role: UserRole::User },
    Account { id: "2", email: "admin", password: "admin", role: UserRole::Admin },
];

/// Looks up the account matching both `email` and `password` exactly.
#[must_use]
pub fn authenticate(email: &str, password: &str) -> Option<User> {
    ACCOUNTS
        .iter()
        .find(|a| a.email == email && a.password == password)
        .map(Account::to_user)
}

/// Looks up the account matching both `id` and `email`.
#[must_use]
pub fn find_user(id: &str, email: &str) -> Option<User> {
    ACCOUNTS.iter().find(|a| a.id == id && a.email == email).map(Account::to_user)
}
