//! Report query planning.
//!
//! Grouping and sort choices select among a fixed set of SQL shapes. The
//! clause text for each choice comes from exhaustive lookup tables on
//! closed enums; data values (dates, ids) are always bound positionally
//! and never interpolated into the template.

use chrono::NaiveDate;

use crate::period::DateRange;

/// Grouping dimension for the sales report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupBy {
    User,
    Group,
}

impl GroupBy {
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "user" => Some(Self::User),
            "group" => Some(Self::Group),
            _ => None,
        }
    }
}

/// Sort column for the sales report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    TotalRevenue,
    AvgRevenue,
}

impl SortBy {
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "total_revenue" => Some(Self::TotalRevenue),
            "avg_revenue" => Some(Self::AvgRevenue),
            _ => None,
        }
    }

    fn as_sql(self) -> &'static str {
        match self {
            Self::TotalRevenue => "total_revenue",
            Self::AvgRevenue => "avg_revenue",
        }
    }
}

/// Sort direction for the sales report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }

    fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// A value bound to a query by position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindValue {
    Date(NaiveDate),
    Int(i64),
}

/// A SQL template plus its ordered positional parameters. The number of
/// placeholders in the template equals `params.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPlan {
    pub sql: String,
    pub params: Vec<BindValue>,
}

/// Builds WHERE predicates incrementally. Each placeholder index is derived
/// from the number of parameters already bound at append time, so optional
/// filters never need hand-computed positions.
#[derive(Debug, Default)]
pub struct FilterBuilder {
    conditions: Vec<String>,
    params: Vec<BindValue>,
}

impl FilterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a predicate; `{}` in `condition` is replaced with the next
    /// positional placeholder.
    pub fn push(&mut self, condition: &str, value: BindValue) {
        self.params.push(value);
        let placeholder = format!("${}", self.params.len());
        self.conditions.push(condition.replace("{}", &placeholder));
    }

    /// Add a predicate only when the filter value is present.
    pub fn push_optional(&mut self, condition: &str, value: Option<BindValue>) {
        if let Some(value) = value {
            self.push(condition, value);
        }
    }

    /// Get the WHERE clause (empty string if no conditions)
    pub fn where_clause(&self) -> String {
        if self.conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", self.conditions.join(" AND "))
        }
    }

    pub fn into_params(self) -> Vec<BindValue> {
        self.params
    }
}

const PERIOD_EXPR: &str = "date_trunc('month', s.sale_date)";

fn date_filters(range: DateRange) -> FilterBuilder {
    let mut filters = FilterBuilder::new();
    filters.push("s.sale_date >= {}", BindValue::Date(range.start));
    filters.push("s.sale_date < {}", BindValue::Date(range.end));
    filters
}

/// Per-user aggregation over one date range.
pub fn user_sales(range: DateRange, sort_by: SortBy, sort_order: SortOrder) -> QueryPlan {
    let filters = date_filters(range);

    let sql = format!(
        "SELECT u.id AS user_id, u.name AS user_name, \
         to_char({period}, 'YYYY-MM') AS period, \
         COUNT(s.id) AS num_sales, \
         SUM(s.amount) AS total_revenue, \
         AVG(s.amount) AS avg_revenue \
         FROM users u \
         JOIN sales s ON s.user_id = u.id \
         {where_clause} \
         GROUP BY u.id, u.name, {period} \
         ORDER BY {sort_column} {sort_direction}",
        period = PERIOD_EXPR,
        where_clause = filters.where_clause(),
        sort_column = sort_by.as_sql(),
        sort_direction = sort_order.as_sql(),
    );

    QueryPlan {
        sql,
        params: filters.into_params(),
    }
}

/// Per-group aggregation over one date range.
pub fn group_sales(range: DateRange, sort_by: SortBy, sort_order: SortOrder) -> QueryPlan {
    let filters = date_filters(range);

    let sql = format!(
        "SELECT g.id AS group_id, g.name AS group_name, \
         to_char({period}, 'YYYY-MM') AS period, \
         COUNT(s.id) AS num_sales, \
         SUM(s.amount) AS total_revenue, \
         AVG(s.amount) AS avg_revenue \
         FROM groups g \
         JOIN user_groups ug ON ug.group_id = g.id \
         JOIN users u ON u.id = ug.user_id \
         JOIN sales s ON s.user_id = u.id \
         {where_clause} \
         GROUP BY g.id, g.name, {period} \
         ORDER BY {sort_column} {sort_direction}",
        period = PERIOD_EXPR,
        where_clause = filters.where_clause(),
        sort_column = sort_by.as_sql(),
        sort_direction = sort_order.as_sql(),
    );

    QueryPlan {
        sql,
        params: filters.into_params(),
    }
}

/// Per-user monthly trend over a multi-month range, optionally restricted
/// to one user and/or one group. Users without a group still appear, with
/// null group fields.
pub fn trends(range: DateRange, user_id: Option<i64>, group_id: Option<i64>) -> QueryPlan {
    let mut filters = date_filters(range);
    filters.push_optional("u.id = {}", user_id.map(BindValue::Int));
    filters.push_optional("g.id = {}", group_id.map(BindValue::Int));

    let sql = format!(
        "SELECT u.id AS user_id, u.name AS user_name, \
         g.id AS group_id, g.name AS group_name, \
         to_char({period}, 'YYYY-MM') AS period, \
         COUNT(s.id) AS num_sales, \
         SUM(s.amount) AS total_revenue, \
         AVG(s.amount) AS avg_revenue \
         FROM sales s \
         JOIN users u ON u.id = s.user_id \
         LEFT JOIN user_groups ug ON ug.user_id = u.id \
         LEFT JOIN groups g ON g.id = ug.group_id \
         {where_clause} \
         GROUP BY u.id, u.name, g.id, g.name, {period} \
         ORDER BY period ASC",
        period = PERIOD_EXPR,
        where_clause = filters.where_clause(),
    );

    QueryPlan {
        sql,
        params: filters.into_params(),
    }
}
