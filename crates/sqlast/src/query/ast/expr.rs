//! Defines the AST for SQL expressions.
//!
//! The query layer only ever asks an expression to render itself; this is
//! the small vocabulary that fills WHERE, HAVING, GROUP BY, ORDER BY, LIMIT,
//! call-argument and hint positions.

use serde::{Deserialize, Serialize};

use crate::{
    error::AstError,
    query::ast::{
        common::{Ident, ObjectName},
        query::Query,
    },
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// A bare column or table name, e.g. `region`.
    Identifier(Ident),

    /// A dotted reference, e.g. `t1.id`.
    CompoundIdentifier(Vec<Ident>),

    /// `*`, as in `COUNT(*)` or `SELECT *`.
    Wildcard,

    /// A literal value, such as a string, number, boolean, or NULL.
    Value(Value),

    /// A function call, e.g. `SUM(amount)`.
    Function(FunctionCall),

    /// A binary operation, e.g. `a = b`. Not parenthesized on its own.
    BinaryOp(Box<BinaryOp>),

    /// `(expr)`
    Nested(Box<Expr>),

    /// `expr [NOT] IN (subquery)`
    InSubquery {
        expr: Box<Expr>,
        subquery: Box<Query>,
        negated: bool,
    },

    /// `[NOT] EXISTS (subquery)`
    Exists { subquery: Box<Query>, negated: bool },

    /// Pre-rendered SQL text, emitted as is.
    Literal(String),
}

impl Expr {
    pub fn compound<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Ident>,
    {
        Expr::CompoundIdentifier(parts.into_iter().map(Into::into).collect())
    }

    pub fn binary(left: Expr, op: BinaryOperator, right: Expr) -> Self {
        Expr::BinaryOp(Box::new(BinaryOp { left, op, right }))
    }

    pub fn function(name: impl Into<ObjectName>, args: Vec<Expr>) -> Self {
        Expr::Function(FunctionCall {
            name: name.into(),
            args,
        })
    }

    pub fn nested(expr: Expr) -> Self {
        Expr::Nested(Box::new(expr))
    }

    pub fn in_subquery(expr: Expr, subquery: Query) -> Self {
        Expr::InSubquery {
            expr: Box::new(expr),
            subquery: Box::new(subquery),
            negated: false,
        }
    }

    pub fn exists(subquery: Query, negated: bool) -> Self {
        Expr::Exists {
            subquery: Box::new(subquery),
            negated,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Long(i64),
    /// Must be finite: NaN and infinities have no SQL literal form. Build it
    /// with [`Value::double`] to have that checked.
    Double(f64),
    SingleQuotedString(String),
    Boolean(bool),
    Null,
}

impl Value {
    pub fn double(n: f64) -> Result<Self, AstError> {
        if !n.is_finite() {
            return Err(AstError::NonFiniteDouble(n));
        }
        Ok(Value::Double(n))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: ObjectName,
    pub args: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryOp {
    pub left: Expr,
    pub op: BinaryOperator,
    pub right: Expr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOperator {
    // Comparison
    Eq,    // =
    NotEq, // <>
    Lt,    // <
    LtEq,  // <=
    Gt,    // >
    GtEq,  // >=
    Like,
    NotLike,

    // Arithmetic
    Plus,
    Minus,
    Multiply,
    Divide,

    // Logical
    And,
    Or,
}

#[cfg(test)]
mod tests {
    use super::Value;
    use crate::error::AstError;

    #[test]
    fn test_double_rejects_non_finite() {
        for n in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(Value::double(n), Err(AstError::NonFiniteDouble(_))));
        }
        assert_eq!(Value::double(2.25).unwrap(), Value::Double(2.25));
    }
}
