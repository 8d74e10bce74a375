//! Provides a type-safe, fluent builder for constructing `Select` ASTs.

// --- Typestate Marker Structs ---
// These zero-sized structs represent the state of the builder.
// JOIN is only reachable once a FROM relation exists.

use tracing::debug;

use crate::{
    error::AstError,
    query::ast::{
        expr::Expr,
        join::{Join, JoinOperator},
        select::{Projection, Select, SelectItem, TableWithJoins},
        table::TableFactor,
    },
};

/// The initial state of the builder before any clauses have been added.
#[derive(Debug, Default, Clone)]
pub struct InitialState;

/// The state after the `SELECT` clause has been added.
#[derive(Debug, Default, Clone)]
pub struct SelectState;

/// The state after the `FROM` clause has been added.
#[derive(Debug, Default, Clone)]
pub struct FromState;

/// States in which the projection is known and trailing clauses may follow.
pub trait Projected {}

impl Projected for SelectState {}
impl Projected for FromState {}

// --- The Main Builder ---

#[derive(Debug, Clone, Default)]
struct Parts {
    distinct: bool,
    projection: Vec<SelectItem>,
    from: Option<TableWithJoins>,
    selection: Option<Expr>,
    group_by: Vec<Expr>,
    having: Option<Expr>,
}

#[derive(Debug, Clone)]
pub struct SelectBuilder<State> {
    parts: Parts,
    state: State,
}

impl Default for SelectBuilder<InitialState> {
    fn default() -> Self {
        Self::new()
    }
}

/// Implementation for the initial state of the builder.
impl SelectBuilder<InitialState> {
    pub fn new() -> Self {
        Self {
            parts: Parts::default(),
            state: InitialState,
        }
    }

    /// Sets the projection list. This is the entry point for building a select.
    pub fn select(mut self, items: Vec<SelectItem>) -> SelectBuilder<SelectState> {
        self.parts.projection = items;
        SelectBuilder {
            parts: self.parts,
            state: SelectState,
        }
    }
}

impl SelectBuilder<SelectState> {
    /// Adds the `FROM` relation. Joins can be attached afterwards.
    pub fn from(mut self, relation: TableFactor) -> SelectBuilder<FromState> {
        self.parts.from = Some(TableWithJoins::from(relation));
        SelectBuilder {
            parts: self.parts,
            state: FromState,
        }
    }
}

impl SelectBuilder<FromState> {
    /// Appends a join to the `FROM` relation.
    pub fn join(mut self, operator: JoinOperator, relation: TableFactor) -> Self {
        if let Some(from) = self.parts.from.as_mut() {
            from.joins.push(Join::new(operator, relation));
        }
        self
    }
}

impl<State: Projected> SelectBuilder<State> {
    pub fn distinct(mut self) -> Self {
        self.parts.distinct = true;
        self
    }

    /// Adds a `WHERE` clause to the query.
    pub fn where_clause(mut self, condition: Expr) -> Self {
        self.parts.selection = Some(condition);
        self
    }

    pub fn group_by(mut self, exprs: Vec<Expr>) -> Self {
        self.parts.group_by.extend(exprs);
        self
    }

    /// Adds a `HAVING` clause to the query.
    pub fn having(mut self, condition: Expr) -> Self {
        self.parts.having = Some(condition);
        self
    }

    /// Finalizes the `Select`, rejecting an empty projection list.
    pub fn build(self) -> Result<Select, AstError> {
        let projection = Projection::new(self.parts.projection).inspect_err(|e| {
            debug!(error = %e, "rejected SELECT");
        })?;

        Ok(Select {
            distinct: self.parts.distinct,
            projection,
            from: self.parts.from,
            selection: self.parts.selection,
            group_by: self.parts.group_by,
            having: self.parts.having,
        })
    }
}
