//! Sales report endpoints.
//!
//! Both handlers follow the same flow: validate the raw parameters, resolve
//! the date range, select a query plan, run it through the injected store,
//! then map the rows (200), an empty result (404), or a fault (500).

use axum::{
    extract::{Query, State},
    response::Json,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use tally_shared::{GroupSalesRow, TrendRow, UserSalesRow};

use crate::error::{ApiResult, AppError};
use crate::period::{DateRange, Month};
use crate::query::{self, GroupBy, SortBy, SortOrder};
use crate::validation::{number, period, string};
use crate::AppState;

pub const NO_DATA_MESSAGE: &str = "No sales data found for the given parameters.";

pub fn report_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(sales_report))
        .route("/trends", get(sales_trends))
}

// ==================== GET /sales ====================

/// Raw, untrusted query parameters for `GET /sales`.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct SalesParams {
    pub date: Option<String>,
    pub month: Option<String>,
    pub year: Option<String>,
    pub group_by: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

/// Validated sales report request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalesRequest {
    pub month: Month,
    pub group_by: GroupBy,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
}

impl SalesRequest {
    /// Validate raw parameters: presence, then format, then enum
    /// membership. The first violation wins.
    pub fn validate(params: &SalesParams) -> ApiResult<Self> {
        let month = resolve_month_input(params)?;

        let group_by = match string::optional(&params.group_by) {
            None => GroupBy::User,
            Some(s) => GroupBy::from_param(s)
                .ok_or_else(|| AppError::validation("group_by must be one of: user, group"))?,
        };

        let sort_by = match string::optional(&params.sort_by) {
            None => SortBy::TotalRevenue,
            Some(s) => SortBy::from_param(s).ok_or_else(|| {
                AppError::validation("sort_by must be one of: total_revenue, avg_revenue")
            })?,
        };

        let sort_order = match string::optional(&params.sort_order) {
            None => SortOrder::Desc,
            Some(s) => SortOrder::from_param(s)
                .ok_or_else(|| AppError::validation("sort_order must be one of: asc, desc"))?,
        };

        Ok(Self {
            month,
            group_by,
            sort_by,
            sort_order,
        })
    }
}

/// The report month arrives either as `date=YYYY-MM` or as a `month` +
/// `year` pair; at most one shape is accepted per request.
fn resolve_month_input(params: &SalesParams) -> ApiResult<Month> {
    let date = string::optional(&params.date);
    let month = string::optional(&params.month);
    let year = string::optional(&params.year);

    match (date, month, year) {
        (None, None, None) => Err(AppError::validation(
            "Missing date parameters: provide date=YYYY-MM, or month and year",
        )),
        (Some(_), Some(_), _) | (Some(_), _, Some(_)) => Err(AppError::validation(
            "Provide either date or month and year, not both",
        )),
        (Some(date), None, None) => period::parse(date, "date"),
        (None, month, year) => {
            let month = month.ok_or_else(|| AppError::validation("month is required"))?;
            let year = year.ok_or_else(|| AppError::validation("year is required"))?;

            let month = number::month(month)?;
            let year = number::year(year)?;
            Month::new(year, month).ok_or_else(|| AppError::validation("year is out of range"))
        }
    }
}

/// 200 body for `GET /sales`: a bare JSON array whose row shape follows
/// the grouping dimension.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SalesReport {
    ByUser(Vec<UserSalesRow>),
    ByGroup(Vec<GroupSalesRow>),
}

async fn sales_report(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SalesParams>,
) -> ApiResult<Json<SalesReport>> {
    let request = SalesRequest::validate(&params)?;
    let range = DateRange::month(request.month);

    let report = match request.group_by {
        GroupBy::User => {
            let plan = query::user_sales(range, request.sort_by, request.sort_order);
            SalesReport::ByUser(state.store.user_sales(&plan).await?)
        }
        GroupBy::Group => {
            let plan = query::group_sales(range, request.sort_by, request.sort_order);
            SalesReport::ByGroup(state.store.group_sales(&plan).await?)
        }
    };

    let is_empty = match &report {
        SalesReport::ByUser(rows) => rows.is_empty(),
        SalesReport::ByGroup(rows) => rows.is_empty(),
    };
    if is_empty {
        return Err(AppError::not_found(NO_DATA_MESSAGE));
    }

    Ok(Json(report))
}

// ==================== GET /sales/trends ====================

/// Raw, untrusted query parameters for `GET /sales/trends`.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct TrendParams {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub user_id: Option<String>,
    pub group_id: Option<String>,
}

/// Validated trend report request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendRequest {
    pub from: Month,
    pub to: Month,
    pub user_id: Option<i64>,
    pub group_id: Option<i64>,
}

impl TrendRequest {
    pub fn validate(params: &TrendParams) -> ApiResult<Self> {
        let start = string::required(&params.start_date, "start_date")?;
        let end = string::required(&params.end_date, "end_date")?;

        let from = period::parse(&start, "start_date")?;
        let to = period::parse(&end, "end_date")?;

        let user_id = number::optional_int(&params.user_id, "user_id")?;
        let group_id = number::optional_int(&params.group_id, "group_id")?;

        Ok(Self {
            from,
            to,
            user_id,
            group_id,
        })
    }
}

async fn sales_trends(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TrendParams>,
) -> ApiResult<Json<Vec<TrendRow>>> {
    let request = TrendRequest::validate(&params)?;
    let range = DateRange::spanning(request.from, request.to)?;

    let plan = query::trends(range, request.user_id, request.group_id);
    let rows = state.store.sales_trends(&plan).await?;

    if rows.is_empty() {
        return Err(AppError::not_found(NO_DATA_MESSAGE));
    }

    Ok(Json(rows))
}
