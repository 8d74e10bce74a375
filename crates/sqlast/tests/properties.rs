use proptest::prelude::*;
use sqlast::query::{
    ast::{
        common::{Ident, ObjectName},
        query::Query,
        select::{Projection, Select, SelectItem},
        set_expr::SetExpr,
    },
    ident,
    renderer::Render,
};

fn name_segment() -> impl Strategy<Value = String> {
    "[a-z_][a-z0-9_]{0,12}"
}

fn select_from(column: &str, table: &str) -> SetExpr {
    let mut select = Select::new(Projection::from(SelectItem::from(ident(column))));
    select.from = Some(sqlast::table!(table).into());
    select.into()
}

proptest! {
    #[test]
    fn object_name_is_dot_joined(parts in prop::collection::vec(name_segment(), 1..5)) {
        let name = ObjectName::new(parts.iter().map(|p| Ident::new(p.as_str())).collect()).unwrap();
        prop_assert_eq!(name.to_sql(), parts.join("."));
    }

    #[test]
    fn union_without_all_has_single_space(
        left in name_segment(),
        right in name_segment(),
    ) {
        let right_sql = select_from("id", &right).to_sql();
        let expr = SetExpr::union(select_from("id", &left), select_from("id", &right), false);
        let sql = expr.to_sql();

        prop_assert!(!sql.contains("ALL"));
        let expected_tail = format!(" UNION {right_sql}");
        prop_assert!(sql.ends_with(&expected_tail));
    }

    #[test]
    fn bare_query_renders_exactly_its_body(column in name_segment(), table in name_segment()) {
        let body = select_from(&column, &table);
        let query = Query::new(body.clone());
        prop_assert_eq!(query.to_sql(), body.to_sql());
    }

    #[test]
    fn rendering_is_idempotent(column in name_segment(), table in name_segment(), all in any::<bool>()) {
        let query = Query::new(SetExpr::except(
            select_from(&column, &table),
            select_from(&column, &table),
            all,
        ));
        prop_assert_eq!(query.to_sql(), query.to_sql());
    }
}
