//! Immutable query specification.
//!
//! A [`Query`] is a value, not store state: builder calls consume and return
//! it, and the terminal operations on [`super::Database`] take it as an
//! explicit argument. Two logical queries can therefore never leak
//! projection or filter state into each other, and there is nothing to
//! reset after a terminal call.

use crate::params::Page;

/// Specification of one logical query: target table, projected fields,
/// filter conditions, ordering and pagination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    table: String,
    fields: Vec<String>,
    conditions: Vec<String>,
    order: Option<String>,
    page: Option<Limit>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Limit {
    limit: u32,
    offset: u32,
}

impl Query {
    /// Starts a query against the named table. Existence is not checked
    /// here; it surfaces at execution.
    pub fn table(name: impl Into<String>) -> Self {
        Self {
            table: name.into(),
            fields: Vec::new(),
            conditions: Vec::new(),
            order: None,
            page: None,
        }
    }

    /// Replaces the projected field list. An empty list means all columns.
    /// Fields are raw select-list fragments, so aggregates like
    /// `SUM(amount)` are valid entries.
    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Appends one filter condition; chained conditions are ANDed.
    ///
    /// Blank conditions are discarded here, so a filter built from empty
    /// strings is exactly "unconditioned": it selects everything and it
    /// still trips the update/delete guard.
    pub fn filter(mut self, condition: impl Into<String>) -> Self {
        let condition = condition.into();
        let trimmed = condition.trim();
        if !trimmed.is_empty() {
            self.conditions.push(trimmed.to_string());
        }
        self
    }

    /// Appends several filter conditions, ANDed together.
    pub fn filters<I, S>(mut self, conditions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for condition in conditions {
            self = self.filter(condition);
        }
        self
    }

    /// Sets the ordering fragment (`ORDER BY <expr>`).
    pub fn order_by(mut self, expr: impl Into<String>) -> Self {
        self.order = Some(expr.into());
        self
    }

    /// Limits the result to `limit` records after skipping `offset`
    /// already-fetched ones.
    pub fn limit(mut self, limit: u32, offset: u32) -> Self {
        self.page = Some(Limit { limit, offset });
        self
    }

    /// Applies a [`Page`] as the LIMIT/OFFSET clause.
    pub fn page(self, page: Page) -> Self {
        self.limit(page.limit, page.offset)
    }

    /// The target table name.
    pub fn table_name(&self) -> &str {
        &self.table
    }

    /// Returns true if at least one non-blank condition is set.
    pub fn is_filtered(&self) -> bool {
        !self.conditions.is_empty()
    }

    pub(crate) fn projection(&self) -> String {
        if self.fields.is_empty() {
            "*".to_string()
        } else {
            self.fields.join(", ")
        }
    }

    /// The WHERE body; `1` when unconditioned so the rendered statement
    /// never carries a dangling WHERE.
    pub(crate) fn where_clause(&self) -> String {
        if self.conditions.is_empty() {
            "1".to_string()
        } else {
            self.conditions.join(" AND ")
        }
    }

    pub(crate) fn select_sql(&self) -> String {
        let mut sql = format!(
            "SELECT {} FROM {} WHERE {}",
            self.projection(),
            self.table,
            self.where_clause()
        );
        if let Some(order) = &self.order {
            sql.push_str(" ORDER BY ");
            sql.push_str(order);
        }
        if let Some(page) = &self.page {
            sql.push_str(&format!(" LIMIT {} OFFSET {}", page.limit, page.offset));
        }
        sql
    }
}
