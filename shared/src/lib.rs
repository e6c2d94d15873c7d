use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One aggregated sales bucket for a single user and calendar month.
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSalesRow {
    pub user_id: i64,
    pub user_name: String,
    /// Month bucket formatted as YYYY-MM.
    pub period: String,
    pub num_sales: i64,
    pub total_revenue: Decimal,
    pub avg_revenue: Decimal,
}

/// One aggregated sales bucket for a single group and calendar month.
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupSalesRow {
    pub group_id: i64,
    pub group_name: String,
    pub period: String,
    pub num_sales: i64,
    pub total_revenue: Decimal,
    pub avg_revenue: Decimal,
}

/// One (user, month) bucket in a trend report. Group fields are null for
/// users that belong to no group.
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendRow {
    pub user_id: i64,
    pub user_name: String,
    pub group_id: Option<i64>,
    pub group_name: Option<String>,
    pub period: String,
    pub num_sales: i64,
    pub total_revenue: Decimal,
    pub avg_revenue: Decimal,
}

/// Error body returned for every non-200 response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
