//! Defines the Abstract Syntax Tree (AST) for a SELECT clause.

use serde::{Deserialize, Serialize};

use crate::{
    error::AstError,
    query::ast::{
        common::{Ident, ObjectName},
        expr::Expr,
        join::Join,
        table::TableFactor,
    },
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Select {
    pub distinct: bool,

    /// The list of columns or expressions to be returned.
    /// e.g., `id`, `name AS n`, `users.*`
    pub projection: Projection,

    /// The primary relation and everything joined to it.
    pub from: Option<TableWithJoins>,

    /// The WHERE clause condition.
    pub selection: Option<Expr>,

    pub group_by: Vec<Expr>,

    /// The HAVING clause condition.
    pub having: Option<Expr>,
}

impl Select {
    pub fn new(projection: Projection) -> Self {
        Self {
            distinct: false,
            projection,
            from: None,
            selection: None,
            group_by: Vec::new(),
            having: None,
        }
    }
}

/// A base relation followed by the joins attached to it. Joins cannot exist
/// without the relation they attach to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableWithJoins {
    pub relation: TableFactor,
    pub joins: Vec<Join>,
}

impl From<TableFactor> for TableWithJoins {
    fn from(relation: TableFactor) -> Self {
        Self {
            relation,
            joins: Vec::new(),
        }
    }
}

/// One entry of the projection list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SelectItem {
    UnnamedExpr(Expr),
    ExprWithAlias { expr: Expr, alias: Ident },
    /// `schema.*`
    QualifiedWildcard(ObjectName),
    Wildcard,
}

impl SelectItem {
    pub fn aliased(expr: Expr, alias: impl Into<Ident>) -> Self {
        SelectItem::ExprWithAlias {
            expr,
            alias: alias.into(),
        }
    }
}

impl From<Expr> for SelectItem {
    fn from(expr: Expr) -> Self {
        SelectItem::UnnamedExpr(expr)
    }
}

/// The non-empty projection list of a SELECT.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<SelectItem>", into = "Vec<SelectItem>")]
pub struct Projection(Vec<SelectItem>);

impl Projection {
    pub fn new(items: Vec<SelectItem>) -> Result<Self, AstError> {
        if items.is_empty() {
            return Err(AstError::EmptyProjection);
        }
        Ok(Self(items))
    }

    pub fn items(&self) -> &[SelectItem] {
        &self.0
    }
}

impl From<SelectItem> for Projection {
    fn from(item: SelectItem) -> Self {
        Self(vec![item])
    }
}

impl TryFrom<Vec<SelectItem>> for Projection {
    type Error = AstError;

    fn try_from(items: Vec<SelectItem>) -> Result<Self, Self::Error> {
        Self::new(items)
    }
}

impl From<Projection> for Vec<SelectItem> {
    fn from(projection: Projection) -> Self {
        projection.0
    }
}
