use crate::query::{
    ast::select::{Select, SelectItem, TableWithJoins},
    renderer::{Render, Renderer},
};

impl Render for Select {
    fn render(&self, r: &mut Renderer) {
        // 1. SELECT clause
        r.sql.push_str("SELECT ");
        if self.distinct {
            r.sql.push_str("DISTINCT ");
        }
        r.comma_separated(self.projection.items());

        // 2. FROM and JOIN
        if let Some(from) = &self.from {
            r.sql.push_str(" FROM ");
            from.render(r);
        }

        // 3. WHERE
        if let Some(selection) = &self.selection {
            r.sql.push_str(" WHERE ");
            selection.render(r);
        }

        // 4. GROUP BY
        if !self.group_by.is_empty() {
            r.sql.push_str(" GROUP BY ");
            r.comma_separated(&self.group_by);
        }

        // 5. HAVING
        if let Some(having) = &self.having {
            r.sql.push_str(" HAVING ");
            having.render(r);
        }
    }
}

impl Render for TableWithJoins {
    fn render(&self, r: &mut Renderer) {
        self.relation.render(r);
        // each join carries its own leading separator
        for join in &self.joins {
            join.render(r);
        }
    }
}

impl Render for SelectItem {
    fn render(&self, r: &mut Renderer) {
        match self {
            SelectItem::UnnamedExpr(expr) => expr.render(r),
            SelectItem::ExprWithAlias { expr, alias } => {
                expr.render(r);
                r.sql.push_str(" AS ");
                alias.render(r);
            }
            SelectItem::QualifiedWildcard(prefix) => {
                prefix.render(r);
                r.sql.push_str(".*");
            }
            SelectItem::Wildcard => r.sql.push('*'),
        }
    }
}
