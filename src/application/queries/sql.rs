use std::borrow::Cow;

use serde::Serialize;

/// Value bound to a `?` placeholder
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SqlParam {
    Integer(i64),
    Real(f64),
}

/// SQL text plus the parameters bound to its placeholders, in order
#[derive(Debug, Clone, PartialEq)]
pub struct SqlQuery {
    sql: Cow<'static, str>,
    params: Vec<SqlParam>,
}

impl SqlQuery {
    /// Parameterless query over static text (catalog entries)
    pub fn fixed(sql: &'static str) -> Self {
        Self {
            sql: Cow::Borrowed(sql),
            params: Vec::new(),
        }
    }

    pub fn with_params(sql: String, params: Vec<SqlParam>) -> Self {
        Self {
            sql: Cow::Owned(sql),
            params,
        }
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &[SqlParam] {
        &self.params
    }

    pub fn placeholder_count(&self) -> usize {
        self.sql.matches('?').count()
    }
}
