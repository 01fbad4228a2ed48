//! Typed filter builder.
//!
//! A [`Predicate`] is a sequence of literal SQL fragments and typed parameters.
//! A [`FilterSet`] collects predicates that are ANDed together into a `WHERE`
//! clause. Literal fragments are `&'static str`, so only compile-time SQL ever
//! reaches the statement text; every runtime value goes through `push_bind`.

use chrono::NaiveDate;
use sqlx::{Postgres, QueryBuilder};

use crate::domain::SeasonWindow;

/// A value bound as a statement parameter
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Int(i64),
    Text(String),
    Bool(bool),
    Date(NaiveDate),
}

impl From<i64> for SqlParam {
    fn from(v: i64) -> Self {
        SqlParam::Int(v)
    }
}

impl From<String> for SqlParam {
    fn from(v: String) -> Self {
        SqlParam::Text(v)
    }
}

impl From<&str> for SqlParam {
    fn from(v: &str) -> Self {
        SqlParam::Text(v.to_string())
    }
}

impl From<bool> for SqlParam {
    fn from(v: bool) -> Self {
        SqlParam::Bool(v)
    }
}

impl From<NaiveDate> for SqlParam {
    fn from(v: NaiveDate) -> Self {
        SqlParam::Date(v)
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Fragment {
    Sql(&'static str),
    Param(SqlParam),
}

/// One boolean condition
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Predicate {
    fragments: Vec<Fragment>,
}

impl Predicate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append literal SQL
    pub fn sql(mut self, sql: &'static str) -> Self {
        self.fragments.push(Fragment::Sql(sql));
        self
    }

    /// Append a bound parameter
    pub fn bind(mut self, value: impl Into<SqlParam>) -> Self {
        self.fragments.push(Fragment::Param(value.into()));
        self
    }

    /// `column = $n`
    pub fn eq(column: &'static str, value: impl Into<SqlParam>) -> Self {
        Self::new().sql(column).sql(" = ").bind(value)
    }

    /// `(left = $n OR right = $m)` with the same value bound to both sides
    pub fn either_eq(
        left: &'static str,
        right: &'static str,
        value: impl Into<SqlParam>,
    ) -> Self {
        let value = value.into();
        Self::new()
            .sql("(")
            .sql(left)
            .sql(" = ")
            .bind(value.clone())
            .sql(" OR ")
            .sql(right)
            .sql(" = ")
            .bind(value)
            .sql(")")
    }

    /// `column >= start AND column < end`
    pub fn within(column: &'static str, window: SeasonWindow) -> Self {
        Self::new()
            .sql(column)
            .sql(" >= ")
            .bind(window.start)
            .sql(" AND ")
            .sql(column)
            .sql(" < ")
            .bind(window.end)
    }

    pub fn params(&self) -> impl Iterator<Item = &SqlParam> {
        self.fragments.iter().filter_map(|f| match f {
            Fragment::Param(p) => Some(p),
            Fragment::Sql(_) => None,
        })
    }

    fn push_to(&self, qb: &mut QueryBuilder<'_, Postgres>) {
        for fragment in &self.fragments {
            match fragment {
                Fragment::Sql(sql) => {
                    qb.push(*sql);
                }
                Fragment::Param(param) => push_param(qb, param),
            }
        }
    }
}

/// Conjunction of independent predicates
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSet {
    predicates: Vec<Predicate>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an unconditional predicate
    pub fn and(&mut self, predicate: Predicate) -> &mut Self {
        self.predicates.push(predicate);
        self
    }

    /// Add a predicate only when the optional filter was supplied
    pub fn and_some<T>(
        &mut self,
        value: Option<T>,
        build: impl FnOnce(T) -> Predicate,
    ) -> &mut Self {
        if let Some(value) = value {
            self.predicates.push(build(value));
        }
        self
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn params(&self) -> impl Iterator<Item = &SqlParam> {
        self.predicates.iter().flat_map(Predicate::params)
    }

    /// Append ` WHERE p1 AND p2 ...`; appends nothing for an empty set
    pub fn push_where(&self, qb: &mut QueryBuilder<'_, Postgres>) {
        for (i, predicate) in self.predicates.iter().enumerate() {
            qb.push(if i == 0 { " WHERE " } else { " AND " });
            predicate.push_to(qb);
        }
    }
}

fn push_param(qb: &mut QueryBuilder<'_, Postgres>, param: &SqlParam) {
    match param {
        SqlParam::Int(v) => {
            qb.push_bind(*v);
        }
        SqlParam::Text(v) => {
            qb.push_bind(v.clone());
        }
        SqlParam::Bool(v) => {
            qb.push_bind(*v);
        }
        SqlParam::Date(v) => {
            qb.push_bind(*v);
        }
    }
}
