use crate::query::{
    ast::expr::{BinaryOp, BinaryOperator, Expr, FunctionCall},
    renderer::{Render, Renderer},
};

impl Render for Expr {
    fn render(&self, r: &mut Renderer) {
        match self {
            Expr::Column(expression) => r.sql.push_str(expression),
            Expr::Param { name, value } => r.add_param(name, value.clone()),
            Expr::Literal(text) => r.sql.push_str(text),
            Expr::FunctionCall(func) => func.render(r),
        }
    }
}

impl Render for FunctionCall {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str(&self.name);
        r.sql.push('(');
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                r.sql.push_str(", ");
            }
            arg.render(r);
        }
        r.sql.push(')');
    }
}

impl Render for BinaryOp {
    fn render(&self, r: &mut Renderer) {
        self.left.render(r);

        let op_str = match self.op {
            BinaryOperator::Eq => " = ",
            BinaryOperator::NotEq => " <> ",
            BinaryOperator::Gt => " > ",
            BinaryOperator::GtEq => " >= ",
            BinaryOperator::Lt => " < ",
            BinaryOperator::LtEq => " <= ",
            BinaryOperator::Like => " like ",
            BinaryOperator::NotLike => " not like ",
        };
        r.sql.push_str(op_str);

        self.right.render(r);
    }
}

#[cfg(test)]
mod tests {
    use crate::query::{
        ast::expr::{BinaryOp, BinaryOperator},
        call, column, dialect::SqlServer, literal, param,
        renderer::{Render, Renderer},
    };
    use model::core::value::Value;

    #[test]
    fn test_render_function_call_args() {
        let expr = call("coalesce", vec![column("age"), literal("0")]);

        let dialect = SqlServer;
        let mut renderer = Renderer::new(&dialect);
        expr.render(&mut renderer);
        let (sql, params) = renderer.finish();

        assert_eq!(sql, "coalesce(age, 0)");
        assert!(params.is_empty());
    }

    #[test]
    fn test_render_binary_op_records_param() {
        let op = BinaryOp {
            left: column("qty"),
            op: BinaryOperator::GtEq,
            right: param("@qty1", Value::Int(5)),
        };

        let dialect = SqlServer;
        let mut renderer = Renderer::new(&dialect);
        op.render(&mut renderer);
        let (sql, params) = renderer.finish();

        assert_eq!(sql, "qty >= @qty1");
        assert_eq!(params.len(), 1);
        assert_eq!(params[0].name, "@qty1");
        assert_eq!(params[0].value, Value::Int(5));
    }
}
