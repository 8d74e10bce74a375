/// Builds an [`Expr::Identifier`](crate::query::ast::expr::Expr::Identifier),
/// or an `Expr::CompoundIdentifier` when given more than one segment.
#[macro_export]
macro_rules! ident {
    ($name:expr) => {
        $crate::query::ast::expr::Expr::Identifier($crate::query::ast::common::Ident::new($name))
    };
    ($qualifier:expr, $($name:expr),+) => {
        $crate::query::ast::expr::Expr::CompoundIdentifier(vec![
            $crate::query::ast::common::Ident::new($qualifier),
            $($crate::query::ast::common::Ident::new($name)),+
        ])
    };
}

#[macro_export]
macro_rules! object_name {
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $crate::query::ast::common::ObjectName::from(
            $crate::query::ast::common::Ident::new($first)
        )$(.child($rest))*
    };
}

/// A named table factor, optionally aliased: `table!("users")`,
/// `table!("users", "u")`.
#[macro_export]
macro_rules! table {
    ($name:expr) => {
        $crate::query::ast::table::TableFactor::table($crate::object_name!($name))
    };
    ($name:expr, $alias:expr) => {
        $crate::query::ast::table::TableFactor::table($crate::object_name!($name))
            .with_alias($alias)
    };
}

macro_rules! impl_display {
    ($($node:ty),+ $(,)?) => {
        $(
            impl std::fmt::Display for $node {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(&$crate::query::renderer::Render::to_sql(self))
                }
            }
        )+
    };
}

pub(crate) use impl_display;
