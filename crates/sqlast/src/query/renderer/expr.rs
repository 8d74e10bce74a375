use crate::query::{
    ast::expr::{BinaryOp, BinaryOperator, Expr, FunctionCall, Value},
    renderer::{Render, Renderer},
};

impl Render for Expr {
    fn render(&self, r: &mut Renderer) {
        match self {
            Expr::Identifier(ident) => ident.render(r),
            Expr::CompoundIdentifier(idents) => {
                for (i, ident) in idents.iter().enumerate() {
                    if i > 0 {
                        r.sql.push('.');
                    }
                    ident.render(r);
                }
            }
            Expr::Wildcard => r.sql.push('*'),
            Expr::Value(val) => val.render(r),
            Expr::Function(func) => func.render(r),
            Expr::BinaryOp(op) => op.render(r),
            Expr::Nested(inner) => {
                r.sql.push('(');
                inner.render(r);
                r.sql.push(')');
            }
            Expr::InSubquery {
                expr,
                subquery,
                negated,
            } => {
                expr.render(r);
                r.sql.push_str(if *negated { " NOT IN (" } else { " IN (" });
                subquery.render(r);
                r.sql.push(')');
            }
            Expr::Exists { subquery, negated } => {
                if *negated {
                    r.sql.push_str("NOT ");
                }
                r.sql.push_str("EXISTS (");
                subquery.render(r);
                r.sql.push(')');
            }
            Expr::Literal(text) => r.sql.push_str(text),
        }
    }
}

impl Render for Value {
    fn render(&self, r: &mut Renderer) {
        match self {
            Value::Long(n) => r.sql.push_str(&n.to_string()),
            Value::Double(n) => r.sql.push_str(&n.to_string()),
            Value::SingleQuotedString(s) => {
                r.sql.push('\'');
                r.sql.push_str(&s.replace('\'', "''"));
                r.sql.push('\'');
            }
            Value::Boolean(true) => r.sql.push_str("TRUE"),
            Value::Boolean(false) => r.sql.push_str("FALSE"),
            Value::Null => r.sql.push_str("NULL"),
        }
    }
}

impl Render for BinaryOp {
    fn render(&self, r: &mut Renderer) {
        self.left.render(r);

        let op_str = match self.op {
            BinaryOperator::Eq => " = ",
            BinaryOperator::NotEq => " <> ",
            BinaryOperator::Lt => " < ",
            BinaryOperator::LtEq => " <= ",
            BinaryOperator::Gt => " > ",
            BinaryOperator::GtEq => " >= ",
            BinaryOperator::Like => " LIKE ",
            BinaryOperator::NotLike => " NOT LIKE ",
            BinaryOperator::Plus => " + ",
            BinaryOperator::Minus => " - ",
            BinaryOperator::Multiply => " * ",
            BinaryOperator::Divide => " / ",
            BinaryOperator::And => " AND ",
            BinaryOperator::Or => " OR ",
        };
        r.sql.push_str(op_str);

        self.right.render(r);
    }
}

impl Render for FunctionCall {
    fn render(&self, r: &mut Renderer) {
        self.name.render(r);
        r.sql.push('(');
        r.comma_separated(&self.args);
        r.sql.push(')');
    }
}
