// Test fixtures: a canned report store and row builders.

use async_trait::async_trait;
use axum::{routing::get, Router};
use rust_decimal::Decimal;
use std::sync::Arc;

use tally_shared::{GroupSalesRow, TrendRow, UserSalesRow};

use crate::query::QueryPlan;
use crate::store::ReportStore;
use crate::{handlers, AppState};

/// Canned store standing in for Postgres.
pub enum StubStore {
    Users(Vec<UserSalesRow>),
    Groups(Vec<GroupSalesRow>),
    Trends(Vec<TrendRow>),
    /// Fails every call, like a store that lost connectivity.
    Failing,
    /// Panics when reached; proves that validation short-circuits
    /// before any store interaction.
    Unreachable,
}

#[async_trait]
impl ReportStore for StubStore {
    async fn user_sales(&self, _plan: &QueryPlan) -> Result<Vec<UserSalesRow>, sqlx::Error> {
        match self {
            Self::Users(rows) => Ok(rows.clone()),
            Self::Failing => Err(sqlx::Error::PoolTimedOut),
            Self::Unreachable => panic!("store must not be reached"),
            _ => panic!("unexpected user_sales call"),
        }
    }

    async fn group_sales(&self, _plan: &QueryPlan) -> Result<Vec<GroupSalesRow>, sqlx::Error> {
        match self {
            Self::Groups(rows) => Ok(rows.clone()),
            Self::Failing => Err(sqlx::Error::PoolTimedOut),
            Self::Unreachable => panic!("store must not be reached"),
            _ => panic!("unexpected group_sales call"),
        }
    }

    async fn sales_trends(&self, _plan: &QueryPlan) -> Result<Vec<TrendRow>, sqlx::Error> {
        match self {
            Self::Trends(rows) => Ok(rows.clone()),
            Self::Failing => Err(sqlx::Error::PoolTimedOut),
            Self::Unreachable => panic!("store must not be reached"),
            _ => panic!("unexpected sales_trends call"),
        }
    }
}

/// Build the app router over a stub store, mirroring the production
/// route layout.
pub fn app(store: StubStore) -> Router {
    let state = Arc::new(AppState {
        store: Arc::new(store),
    });

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/sales", handlers::report_routes())
        .with_state(state)
}

pub fn user_row(user_id: i64, user_name: &str, period: &str, total_revenue: i64) -> UserSalesRow {
    UserSalesRow {
        user_id,
        user_name: user_name.to_string(),
        period: period.to_string(),
        num_sales: 2,
        total_revenue: Decimal::from(total_revenue),
        avg_revenue: Decimal::from(total_revenue / 2),
    }
}

pub fn group_row(group_id: i64, group_name: &str, period: &str, total_revenue: i64) -> GroupSalesRow {
    GroupSalesRow {
        group_id,
        group_name: group_name.to_string(),
        period: period.to_string(),
        num_sales: 2,
        total_revenue: Decimal::from(total_revenue),
        avg_revenue: Decimal::from(total_revenue / 2),
    }
}

pub fn trend_row(
    user_id: i64,
    user_name: &str,
    group: Option<(i64, &str)>,
    period: &str,
    total_revenue: i64,
) -> TrendRow {
    TrendRow {
        user_id,
        user_name: user_name.to_string(),
        group_id: group.map(|(id, _)| id),
        group_name: group.map(|(_, name)| name.to_string()),
        period: period.to_string(),
        num_sales: 2,
        total_revenue: Decimal::from(total_revenue),
        avg_revenue: Decimal::from(total_revenue / 2),
    }
}
