//! Table factors: what a FROM clause or a JOIN names.

use serde::{Deserialize, Serialize};

use crate::query::ast::{
    common::{Ident, ObjectName},
    expr::Expr,
    query::Query,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TableFactor {
    /// A named table, optionally called like a table-valued function.
    /// e.g., `users AS u`, `generate_series(1, 10)`, `orders WITH (NOLOCK)`
    Table {
        name: ObjectName,
        alias: Option<Ident>,
        /// Call arguments; empty means the table is not called.
        args: Vec<Expr>,
        with_hints: Vec<Expr>,
    },

    /// A sub-query used as a relation. Rendered without parentheses of its
    /// own: wrap the body in `SetExpr::Query` to get `(SELECT ...) AS t`.
    Derived {
        subquery: Box<Query>,
        alias: Option<Ident>,
    },
}

impl TableFactor {
    pub fn table(name: impl Into<ObjectName>) -> Self {
        TableFactor::Table {
            name: name.into(),
            alias: None,
            args: Vec::new(),
            with_hints: Vec::new(),
        }
    }

    pub fn derived(subquery: Query) -> Self {
        TableFactor::Derived {
            subquery: Box::new(subquery),
            alias: None,
        }
    }

    pub fn with_alias(self, new_alias: impl Into<Ident>) -> Self {
        match self {
            TableFactor::Table {
                name,
                args,
                with_hints,
                ..
            } => TableFactor::Table {
                name,
                alias: Some(new_alias.into()),
                args,
                with_hints,
            },
            TableFactor::Derived { subquery, .. } => TableFactor::Derived {
                subquery,
                alias: Some(new_alias.into()),
            },
        }
    }

    pub fn alias(&self) -> Option<&Ident> {
        match self {
            TableFactor::Table { alias, .. } | TableFactor::Derived { alias, .. } => {
                alias.as_ref()
            }
        }
    }
}
