pub mod query;
pub mod select;
