//! Account persistence behind the `UserStore` seam.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::{postgres::PgRow, PgPool, Row};
use tracing::Instrument;
use utoipa::ToSchema;
use uuid::Uuid;

/// Persisted account row. The `password` field holds the bcrypt hash,
/// never the raw credential.
#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: String,
    pub email: String,
    pub password: String,
    pub name: String,
}

/// Insert payload for a new account: normalized email, hashed password,
/// trimmed display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// Outcome when attempting to insert a new account.
#[derive(Debug)]
pub enum CreateOutcome {
    Created(Account),
    DuplicateEmail,
}

/// Persistence seam for the signup handler.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Look up an account by its normalized email.
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>>;

    /// Insert a new account. A unique violation on the email index is a
    /// business outcome, not an error.
    async fn create(&self, account: NewAccount) -> Result<CreateOutcome>;
}

/// Postgres-backed store over the shared connection pool.
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>> {
        let query = "SELECT id, email, password, name FROM accounts WHERE email = $1";
        let span = tracing::info_span!(
            "db.query",
            db.system = "postgresql",
            db.operation = "SELECT",
            db.statement = query
        );
        let row = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .instrument(span)
            .await
            .context("failed to lookup account by email")?;

        Ok(row.map(account_from_row))
    }

    async fn create(&self, account: NewAccount) -> Result<CreateOutcome> {
        let query = r"
            INSERT INTO accounts (email, password, name)
            VALUES ($1, $2, $3)
            RETURNING id, email, password, name
        ";
        let span = tracing::info_span!(
            "db.query",
            db.system = "postgresql",
            db.operation = "INSERT",
            db.statement = query
        );
        let row = sqlx::query(query)
            .bind(&account.email)
            .bind(&account.password)
            .bind(&account.name)
            .fetch_one(&self.pool)
            .instrument(span)
            .await;

        match row {
            Ok(row) => Ok(CreateOutcome::Created(account_from_row(row))),
            // The unique index on accounts.email resolves the concurrent
            // duplicate race lost by the pre-insert lookup.
            Err(err) if is_unique_violation(&err) => Ok(CreateOutcome::DuplicateEmail),
            Err(err) => Err(err).context("failed to insert account"),
        }
    }
}

fn account_from_row(row: PgRow) -> Account {
    let id: Uuid = row.get("id");
    Account {
        id: id.to_string(),
        email: row.get("email"),
        password: row.get("password"),
        name: row.get("name"),
    }
}

pub(super) fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().is_some_and(|code| code.as_ref() == "23505"),
        _ => false,
    }
}
