use crate::query::ast::{
    common::Ident,
    expr::Expr,
    query::{Cte, OrderByExpr, OrderDir, Query},
    set_expr::SetExpr,
};

/// Fluent construction of a [`Query`] around an existing body.
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    ast: Query,
}

impl QueryBuilder {
    pub fn new(body: impl Into<SetExpr>) -> Self {
        Self {
            ast: Query::new(body),
        }
    }

    /// Appends a common table expression to the `WITH` clause.
    pub fn with(mut self, alias: impl Into<Ident>, query: Query) -> Self {
        self.ast.ctes.push(Cte::new(alias, query));
        self
    }

    pub fn order_by(mut self, expr: Expr, direction: Option<OrderDir>) -> Self {
        self.ast.order_by.push(OrderByExpr { expr, direction });
        self
    }

    pub fn limit(mut self, limit: Expr) -> Self {
        self.ast.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: Expr) -> Self {
        self.ast.offset = Some(offset);
        self
    }

    pub fn build(self) -> Query {
        self.ast
    }
}

#[cfg(test)]
mod tests {
    use crate::query::{
        ast::{
            expr::Value,
            query::OrderDir,
            select::SelectItem,
            set_expr::SetExpr,
        },
        builder::{query::QueryBuilder, select::SelectBuilder},
        ident,
        renderer::Render,
        value,
    };

    fn select_all_from(table: &str) -> SetExpr {
        SelectBuilder::new()
            .select(vec![SelectItem::Wildcard])
            .from(crate::table!(table))
            .build()
            .unwrap()
            .into()
    }

    #[test]
    fn test_build_query_with_every_clause() {
        let query = QueryBuilder::new(select_all_from("recent"))
            .with("recent", QueryBuilder::new(select_all_from("events")).build())
            .order_by(ident("created_at"), Some(OrderDir::Desc))
            .order_by(ident("id"), None)
            .limit(value(Value::Long(50)))
            .offset(value(Value::Long(100)))
            .build();

        assert_eq!(query.ctes.len(), 1);
        assert_eq!(query.order_by[0].direction, Some(OrderDir::Desc));
        assert_eq!(
            query.to_sql(),
            "WITH recent AS (SELECT * FROM events) SELECT * FROM recent ORDER BY created_at DESC, id LIMIT 50 OFFSET 100"
        );
    }

    #[test]
    fn test_build_query_over_set_operation() {
        let body = SetExpr::union(select_all_from("a"), select_all_from("b"), true);
        let query = QueryBuilder::new(body).limit(value(Value::Long(5))).build();

        assert_eq!(
            query.to_sql(),
            "SELECT * FROM a UNION ALL SELECT * FROM b LIMIT 5"
        );
    }
}
