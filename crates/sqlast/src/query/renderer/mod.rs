//! Defines the core rendering trait and context for converting AST to SQL.
//!
//! Rendering is a pure walk of the tree: nodes are only borrowed, and the
//! only state is the output buffer owned by the [`Renderer`].

use tracing::trace;

use crate::query::{
    ast::{
        common::{Ident, ObjectName},
        expr::Expr,
        join::Join,
        query::{Cte, OrderByExpr, Query},
        select::{Select, SelectItem, TableWithJoins},
        set_expr::SetExpr,
        table::TableFactor,
    },
    macros::impl_display,
};

pub mod common;
pub mod expr;
pub mod join;
pub mod query;
pub mod select;
pub mod set_expr;
pub mod table;

/// A trait for any AST node that can be rendered into a SQL string.
pub trait Render {
    fn render(&self, renderer: &mut Renderer);

    /// Renders this node on its own and returns the SQL text.
    fn to_sql(&self) -> String {
        let mut renderer = Renderer::new();
        self.render(&mut renderer);
        let sql = renderer.finish();
        trace!(bytes = sql.len(), "rendered SQL");
        sql
    }
}

/// Accumulates the SQL text while a tree is walked.
#[derive(Debug, Default)]
pub struct Renderer {
    pub sql: String,
}

impl Renderer {
    pub fn new() -> Self {
        Self { sql: String::new() }
    }

    /// Consumes the renderer and returns the final SQL string.
    pub fn finish(self) -> String {
        self.sql
    }

    /// Renders `items` separated by `, `.
    pub fn comma_separated<T: Render>(&mut self, items: &[T]) {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.sql.push_str(", ");
            }
            item.render(self);
        }
    }
}

impl_display!(
    Ident,
    ObjectName,
    Expr,
    TableFactor,
    Join,
    TableWithJoins,
    SelectItem,
    Select,
    SetExpr,
    OrderByExpr,
    Cte,
    Query
);
