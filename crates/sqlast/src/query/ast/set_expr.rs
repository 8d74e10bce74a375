//! Statement bodies: a select, a parenthesized query, or a set operation.

use serde::{Deserialize, Serialize};

use crate::query::ast::{query::Query, select::Select};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SetOperator {
    Union,
    Except,
    Intersect,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SetExpr {
    Select(Box<Select>),

    /// A full query nested as an operand; always rendered in parentheses.
    Query(Box<Query>),

    /// `left OP [ALL] right`. Adds no parentheses of its own: grouping is
    /// expressed by wrapping an operand in [`SetExpr::Query`].
    SetOperation {
        op: SetOperator,
        all: bool,
        left: Box<SetExpr>,
        right: Box<SetExpr>,
    },
}

impl SetExpr {
    pub fn set_operation(op: SetOperator, left: SetExpr, right: SetExpr, all: bool) -> Self {
        SetExpr::SetOperation {
            op,
            all,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn union(left: SetExpr, right: SetExpr, all: bool) -> Self {
        Self::set_operation(SetOperator::Union, left, right, all)
    }

    pub fn except(left: SetExpr, right: SetExpr, all: bool) -> Self {
        Self::set_operation(SetOperator::Except, left, right, all)
    }

    pub fn intersect(left: SetExpr, right: SetExpr, all: bool) -> Self {
        Self::set_operation(SetOperator::Intersect, left, right, all)
    }
}

impl From<Select> for SetExpr {
    fn from(select: Select) -> Self {
        SetExpr::Select(Box::new(select))
    }
}

impl From<Query> for SetExpr {
    fn from(query: Query) -> Self {
        SetExpr::Query(Box::new(query))
    }
}

#[cfg(test)]
mod tests {
    use super::{SetExpr, SetOperator};
    use crate::query::{
        ast::select::{Projection, Select, SelectItem},
        ident,
    };

    fn select(column: &str) -> SetExpr {
        Select::new(Projection::from(SelectItem::from(ident(column)))).into()
    }

    #[test]
    fn test_constructors_share_argument_order() {
        let general = SetExpr::set_operation(SetOperator::Union, select("a"), select("b"), true);
        assert_eq!(general, SetExpr::union(select("a"), select("b"), true));

        let SetExpr::SetOperation { left, all, .. } = general else {
            panic!("expected a set operation");
        };
        assert_eq!(*left, select("a"));
        assert!(all);
    }
}
