//! Joins and the constraints attached to them.

use serde::{Deserialize, Serialize};

use crate::query::ast::{common::Ident, expr::Expr, table::TableFactor};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Join {
    /// The right-hand relation.
    pub relation: TableFactor,
    pub operator: JoinOperator,
}

/// Join kinds. Only the kinds that can take a constraint carry one, so a
/// constraint can never be attached to `CROSS JOIN` or to a comma join.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum JoinOperator {
    Inner(JoinConstraint),
    LeftOuter(JoinConstraint),
    RightOuter(JoinConstraint),
    FullOuter(JoinConstraint),
    /// Rendered as ` CROSS JOIN <relation>`, with a space before the
    /// relation. Output that glued the two together (`CROSS JOINt`) was not
    /// valid SQL.
    Cross,
    /// `FROM a, b`
    Implicit,
}

impl JoinOperator {
    pub fn constraint(&self) -> Option<&JoinConstraint> {
        match self {
            JoinOperator::Inner(c)
            | JoinOperator::LeftOuter(c)
            | JoinOperator::RightOuter(c)
            | JoinOperator::FullOuter(c) => Some(c),
            JoinOperator::Cross | JoinOperator::Implicit => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum JoinConstraint {
    On(Expr),
    Using(Vec<Ident>),
    Natural,
    None,
}

impl Join {
    pub fn new(operator: JoinOperator, relation: TableFactor) -> Self {
        Self { relation, operator }
    }
}
