use crate::query::{
    ast::query::{Cte, OrderByExpr, OrderDir, Query},
    renderer::{Render, Renderer},
};

impl Render for Query {
    fn render(&self, r: &mut Renderer) {
        // 1. WITH
        if !self.ctes.is_empty() {
            r.sql.push_str("WITH ");
            r.comma_separated(&self.ctes);
            r.sql.push(' ');
        }

        // 2. Body
        self.body.render(r);

        // 3. ORDER BY
        if !self.order_by.is_empty() {
            r.sql.push_str(" ORDER BY ");
            r.comma_separated(&self.order_by);
        }

        // 4. LIMIT
        if let Some(limit) = &self.limit {
            r.sql.push_str(" LIMIT ");
            limit.render(r);
        }

        // 5. OFFSET
        if let Some(offset) = &self.offset {
            r.sql.push_str(" OFFSET ");
            offset.render(r);
        }
    }
}

impl Render for Cte {
    fn render(&self, r: &mut Renderer) {
        self.alias.render(r);
        r.sql.push_str(" AS (");
        self.query.render(r);
        r.sql.push(')');
    }
}

impl Render for OrderByExpr {
    fn render(&self, r: &mut Renderer) {
        self.expr.render(r);
        if let Some(dir) = &self.direction {
            let dir_str = match dir {
                OrderDir::Asc => "ASC",
                OrderDir::Desc => "DESC",
            };
            r.sql.push(' ');
            r.sql.push_str(dir_str);
        }
    }
}
