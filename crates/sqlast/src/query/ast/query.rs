//! The top-level query: WITH clause, body, ORDER BY, LIMIT and OFFSET.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::AstError,
    query::{
        ast::{common::Ident, expr::Expr, set_expr::SetExpr},
        renderer::Render,
    },
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    /// Common table expressions, in declaration order.
    pub ctes: Vec<Cte>,
    pub body: SetExpr,
    pub order_by: Vec<OrderByExpr>,
    pub limit: Option<Expr>,
    pub offset: Option<Expr>,
}

impl Query {
    pub fn new(body: impl Into<SetExpr>) -> Self {
        Self {
            ctes: Vec::new(),
            body: body.into(),
            order_by: Vec::new(),
            limit: None,
            offset: None,
        }
    }

    /// Hex md5 digest of the rendered SQL. Two trees that render to the same
    /// text share a fingerprint.
    pub fn fingerprint(&self) -> String {
        format!("{:x}", md5::compute(self.to_sql()))
    }

    pub fn to_json(&self) -> Result<String, AstError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decodes a tree produced by [`Query::to_json`]. Empty projections and
    /// empty object names are rejected here, not at render time.
    pub fn from_json(json: &str) -> Result<Self, AstError> {
        serde_json::from_str(json).map_err(|e| {
            debug!(error = %e, "rejected serialized query tree");
            AstError::Decode(e)
        })
    }
}

/// `alias AS (query)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cte {
    pub alias: Ident,
    pub query: Box<Query>,
}

impl Cte {
    pub fn new(alias: impl Into<Ident>, query: Query) -> Self {
        Self {
            alias: alias.into(),
            query: Box::new(query),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderDir {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderByExpr {
    pub expr: Expr,
    /// `None` leaves the direction to the engine's default.
    pub direction: Option<OrderDir>,
}
