//! Store execution capability.
//!
//! Handlers receive the store as an injected trait object, so unit tests
//! can substitute a canned store and the query engine never touches a
//! process-wide connection.

use async_trait::async_trait;
use sqlx::{postgres::PgRow, FromRow, PgPool};
use tally_shared::{GroupSalesRow, TrendRow, UserSalesRow};

use crate::query::{BindValue, QueryPlan};

/// Executes report query plans against the relational store.
#[async_trait]
pub trait ReportStore: Send + Sync {
    async fn user_sales(&self, plan: &QueryPlan) -> Result<Vec<UserSalesRow>, sqlx::Error>;
    async fn group_sales(&self, plan: &QueryPlan) -> Result<Vec<GroupSalesRow>, sqlx::Error>;
    async fn sales_trends(&self, plan: &QueryPlan) -> Result<Vec<TrendRow>, sqlx::Error>;
}

/// Postgres-backed store.
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_all<T>(&self, plan: &QueryPlan) -> Result<Vec<T>, sqlx::Error>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        let mut query = sqlx::query_as::<_, T>(&plan.sql);
        for param in &plan.params {
            query = match param {
                BindValue::Date(date) => query.bind(*date),
                BindValue::Int(int) => query.bind(*int),
            };
        }

        query.fetch_all(&self.pool).await
    }
}

#[async_trait]
impl ReportStore for PgStore {
    async fn user_sales(&self, plan: &QueryPlan) -> Result<Vec<UserSalesRow>, sqlx::Error> {
        self.fetch_all(plan).await
    }

    async fn group_sales(&self, plan: &QueryPlan) -> Result<Vec<GroupSalesRow>, sqlx::Error> {
        self.fetch_all(plan).await
    }

    async fn sales_trends(&self, plan: &QueryPlan) -> Result<Vec<TrendRow>, sqlx::Error> {
        self.fetch_all(plan).await
    }
}
