//! Node types of the query tree.
//!
//! Nodes are plain data: every field is owned, nothing is shared, and no
//! node exposes a way to mutate itself once it has been attached to a parent.
//! Rendering lives in [`crate::query::renderer`].

pub mod common;
pub mod expr;
pub mod join;
pub mod query;
pub mod select;
pub mod set_expr;
pub mod table;
