use crate::query::ast::{
    common::Ident,
    expr::{Expr, Value},
};

pub mod ast;
pub mod builder;
pub mod macros;
pub mod renderer;

pub fn ident(name: &str) -> Expr {
    Expr::Identifier(Ident::new(name))
}

pub fn value(val: Value) -> Expr {
    Expr::Value(val)
}
