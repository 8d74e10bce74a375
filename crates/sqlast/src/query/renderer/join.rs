use crate::query::{
    ast::join::{Join, JoinConstraint, JoinOperator},
    renderer::{Render, Renderer},
};

impl Render for Join {
    fn render(&self, r: &mut Renderer) {
        let (keyword, constraint) = match &self.operator {
            JoinOperator::Inner(c) => ("JOIN ", c),
            JoinOperator::LeftOuter(c) => ("LEFT JOIN ", c),
            JoinOperator::RightOuter(c) => ("RIGHT JOIN ", c),
            JoinOperator::FullOuter(c) => ("FULL JOIN ", c),
            JoinOperator::Cross => {
                r.sql.push_str(" CROSS JOIN ");
                self.relation.render(r);
                return;
            }
            JoinOperator::Implicit => {
                r.sql.push_str(", ");
                self.relation.render(r);
                return;
            }
        };

        r.sql.push(' ');
        if matches!(constraint, JoinConstraint::Natural) {
            r.sql.push_str("NATURAL ");
        }
        r.sql.push_str(keyword);
        self.relation.render(r);
        constraint.render(r);
    }
}

/// Renders the part that follows the joined relation.
impl Render for JoinConstraint {
    fn render(&self, r: &mut Renderer) {
        match self {
            JoinConstraint::On(predicate) => {
                r.sql.push_str(" ON ");
                predicate.render(r);
            }
            JoinConstraint::Using(columns) => {
                r.sql.push_str(" USING(");
                r.comma_separated(columns);
                r.sql.push(')');
            }
            JoinConstraint::Natural | JoinConstraint::None => {}
        }
    }
}
