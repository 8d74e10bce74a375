use crate::query::{
    ast::table::TableFactor,
    renderer::{Render, Renderer},
};

impl Render for TableFactor {
    fn render(&self, r: &mut Renderer) {
        match self {
            TableFactor::Table {
                name,
                alias,
                args,
                with_hints,
            } => {
                // name/args, then alias, then hints
                name.render(r);
                if !args.is_empty() {
                    r.sql.push('(');
                    r.comma_separated(args);
                    r.sql.push(')');
                }
                if let Some(alias) = alias {
                    r.sql.push_str(" AS ");
                    alias.render(r);
                }
                if !with_hints.is_empty() {
                    r.sql.push_str(" WITH (");
                    r.comma_separated(with_hints);
                    r.sql.push(')');
                }
            }
            TableFactor::Derived { subquery, alias } => {
                // unwrapped; a caller needing `(...)` nests the query as SetExpr::Query
                subquery.render(r);
                if let Some(alias) = alias {
                    r.sql.push_str(" AS ");
                    alias.render(r);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::query::{
        ast::{
            common::Ident,
            expr::{Expr, Value},
            query::Query,
            select::{Projection, Select, SelectItem},
            set_expr::SetExpr,
            table::TableFactor,
        },
        renderer::Render,
        value,
    };

    #[test]
    fn test_render_plain_and_aliased_table() {
        assert_eq!(crate::table!("test_table").to_sql(), "test_table");
        assert_eq!(crate::table!("users", "u").to_sql(), "users AS u");
    }

    #[test]
    fn test_render_table_suffix_order() {
        let table = TableFactor::Table {
            name: crate::object_name!("dbo", "orders"),
            alias: Some(Ident::new("o")),
            args: vec![value(Value::Long(1)), value(Value::Long(10))],
            with_hints: vec![Expr::Literal("NOLOCK".to_string()), Expr::Literal("INDEX(ix_orders)".to_string())],
        };
        assert_eq!(
            table.to_sql(),
            "dbo.orders(1, 10) AS o WITH (NOLOCK, INDEX(ix_orders))"
        );
    }

    #[test]
    fn test_render_derived_table() {
        let mut inner = Select::new(Projection::from(SelectItem::Wildcard));
        inner.from = Some(crate::table!("orders").into());

        let derived = TableFactor::derived(Query::new(inner.clone())).with_alias("recent");
        assert_eq!(derived.to_sql(), "SELECT * FROM orders AS recent");
        assert_eq!(derived.alias(), Some(&Ident::new("recent")));

        let wrapped = Query::new(SetExpr::from(Query::new(inner)));
        let derived = TableFactor::derived(wrapped).with_alias("recent");
        assert_eq!(derived.to_sql(), "(SELECT * FROM orders) AS recent");
    }
}
