use crate::query::{
    ast::condition::Condition,
    renderer::{Render, Renderer},
};

impl Render for Condition {
    fn render(&self, r: &mut Renderer) {
        match self {
            Condition::Binary(op) => op.render(r),
            Condition::Between { expr, low, high } => {
                expr.render(r);
                r.sql.push_str(" between ");
                low.render(r);
                r.sql.push_str(" and ");
                high.render(r);
            }
            Condition::InList {
                expr,
                list,
                negated,
            } => {
                expr.render(r);
                r.sql.push_str(if *negated { " not in (" } else { " in (" });
                for (i, item) in list.iter().enumerate() {
                    if i > 0 {
                        r.sql.push(',');
                    }
                    item.render(r);
                }
                r.sql.push(')');
            }
            Condition::IsNull { expr, negated } => {
                expr.render(r);
                r.sql
                    .push_str(if *negated { " is not null" } else { " is null" });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::query::{
        ast::condition::Condition,
        call, column,
        dialect::SqlServer,
        literal, param,
        renderer::{Render, Renderer},
    };
    use model::core::value::Value;

    fn render(condition: &Condition) -> (String, usize) {
        let dialect = SqlServer;
        let mut renderer = Renderer::new(&dialect);
        condition.render(&mut renderer);
        let (sql, params) = renderer.finish();
        (sql, params.len())
    }

    #[test]
    fn test_render_between() {
        let condition = Condition::Between {
            expr: column("price"),
            low: param("@price1", Value::Int(1)),
            high: param("@price2", Value::Int(9)),
        };
        assert_eq!(render(&condition), ("price between @price1 and @price2".into(), 2));
    }

    #[test]
    fn test_render_in_list_without_spaces() {
        let condition = Condition::InList {
            expr: call("lower", vec![column("code")]),
            list: vec![literal("'a'"), literal("'b'")],
            negated: true,
        };
        assert_eq!(render(&condition), ("lower(code) not in ('a','b')".into(), 0));
    }

    #[test]
    fn test_render_is_null() {
        let condition = Condition::IsNull {
            expr: column("note"),
            negated: false,
        };
        assert_eq!(render(&condition), ("note is null".into(), 0));
    }
}
