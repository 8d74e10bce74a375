use crate::query::{
    ast::set_expr::{SetExpr, SetOperator},
    renderer::{Render, Renderer},
};

impl Render for SetExpr {
    fn render(&self, r: &mut Renderer) {
        match self {
            SetExpr::Select(select) => select.render(r),
            SetExpr::Query(query) => {
                r.sql.push('(');
                query.render(r);
                r.sql.push(')');
            }
            SetExpr::SetOperation {
                op,
                all,
                left,
                right,
            } => {
                left.render(r);
                r.sql.push(' ');
                op.render(r);
                if *all {
                    r.sql.push_str(" ALL");
                }
                r.sql.push(' ');
                right.render(r);
            }
        }
    }
}

impl Render for SetOperator {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str(match self {
            SetOperator::Union => "UNION",
            SetOperator::Except => "EXCEPT",
            SetOperator::Intersect => "INTERSECT",
        });
    }
}
