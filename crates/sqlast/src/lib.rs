//! SQL query trees and their canonical single-line rendering.
//!
//! Trees are built programmatically (directly, through the builders in
//! [`query::builder`], or by a parser living elsewhere) and turned back into
//! SQL text with [`query::renderer::Render`].

pub mod error;
pub mod query;

pub use error::AstError;
