use crate::{
    filter::{column::FilterColumn, error::FilterError, param::SqlParam},
    query::{
        ast::{condition::Condition, expr::BinaryOperator},
        builder::condition::{ConditionBuilder, LikePattern},
        dialect::Dialect,
        param,
        renderer::{Render, Renderer},
    },
};
use model::core::{comparison::ComparisonMode, error::ValueError, value::Value};
use tracing::debug;

/// A rendered SQL fragment together with the parameters it binds.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    pub sql: String,
    pub params: Vec<SqlParam>,
}

/// Builds the SQL fragment filtering `column` with `mode`.
///
/// Returns `Ok(None)` while the filter is not actionable: `value1` is null
/// or an empty list, or `Between` is missing `value2`. `IsNull` and
/// `IsNotNull` ignore both values and always produce a fragment.
///
/// `In`/`NotIn` inline the list items into the fragment and bind nothing;
/// every other mode binds `value1` (and `value2` for `Between`) under the
/// column's parameter prefix suffixed with `1` and `2`.
pub fn build_predicate(
    column: &FilterColumn,
    mode: ComparisonMode,
    value1: &Value,
    value2: &Value,
    dialect: &dyn Dialect,
) -> Result<Option<Predicate>, FilterError> {
    if !mode.is_valid_for(column.kind, column.null_sensitive) {
        return Err(FilterError::IncompatibleMode {
            column: column.expression.clone(),
            mode,
            kind: column.kind,
        });
    }
    check_shape(column, value1)?;
    check_shape(column, value2)?;

    let builder = condition_builder(column, dialect);

    if mode.is_null_check() {
        let condition = builder.null_check(mode == ComparisonMode::IsNotNull);
        return Ok(Some(render(&condition, dialect)));
    }

    if value1.is_null()
        || value1.is_empty_list()
        || (mode.needs_second_operand() && value2.is_null())
    {
        debug!(
            "Filter on '{}' ({}) is not actionable yet",
            column.expression, mode
        );
        return Ok(None);
    }

    let prefix = dialect.param_prefix(&column.expression);
    let p1 = || param(&dialect.placeholder(&prefix, 1), value1.clone());

    let condition = match mode {
        ComparisonMode::Equal => builder.compare(BinaryOperator::Eq, p1()),
        ComparisonMode::NotEqual => builder.compare(BinaryOperator::NotEq, p1()),
        ComparisonMode::Greater => builder.compare(BinaryOperator::Gt, p1()),
        ComparisonMode::GreaterEqual => builder.compare(BinaryOperator::GtEq, p1()),
        ComparisonMode::Less => builder.compare(BinaryOperator::Lt, p1()),
        ComparisonMode::LessEqual => builder.compare(BinaryOperator::LtEq, p1()),
        ComparisonMode::Between => builder.between(
            p1(),
            param(&dialect.placeholder(&prefix, 2), value2.clone()),
        ),
        ComparisonMode::Contains => builder.like(false, LikePattern::Contains, p1()),
        ComparisonMode::NotContains => builder.like(true, LikePattern::Contains, p1()),
        ComparisonMode::Like => builder.like(false, LikePattern::Exact, p1()),
        ComparisonMode::NotLike => builder.like(true, LikePattern::Exact, p1()),
        ComparisonMode::StartsWith => builder.like(false, LikePattern::StartsWith, p1()),
        ComparisonMode::EndsWith => builder.like(false, LikePattern::EndsWith, p1()),
        ComparisonMode::In | ComparisonMode::NotIn => {
            let items = value1.as_list().unwrap_or_default();
            builder.in_list(mode == ComparisonMode::NotIn, items)
        }
        ComparisonMode::IsNull | ComparisonMode::IsNotNull => {
            builder.null_check(mode == ComparisonMode::IsNotNull)
        }
    };

    let predicate = render(&condition, dialect);
    debug!(
        "Built filter on '{}': {} ({} params)",
        column.expression,
        predicate.sql,
        predicate.params.len()
    );
    Ok(Some(predicate))
}

fn condition_builder(column: &FilterColumn, dialect: &dyn Dialect) -> ConditionBuilder {
    let mut builder =
        ConditionBuilder::new(&column.expression).delimiter(column.kind.string_delimiter());
    if !column.null_sensitive {
        builder = builder.coalesce(column.kind.null_default());
    }
    if column.folds_case() {
        builder = builder.case_fold(dialect.fold_bound_parameters());
    }
    builder
}

fn render(condition: &Condition, dialect: &dyn Dialect) -> Predicate {
    let mut renderer = Renderer::new(dialect);
    condition.render(&mut renderer);
    let (sql, params) = renderer.finish();
    Predicate { sql, params }
}

/// List kinds take lists of scalars, scalar kinds take scalars. Null fits both.
fn check_shape(column: &FilterColumn, value: &Value) -> Result<(), FilterError> {
    check_finite(value)?;

    let mismatch = |expected: &str, found: &str| FilterError::TypeMismatch {
        column: column.expression.clone(),
        expected: expected.to_string(),
        found: found.to_string(),
    };

    match value {
        Value::Null => Ok(()),
        Value::List(items) if column.kind.is_list() => {
            match items.iter().find(|item| item.is_list()) {
                Some(nested) => Err(mismatch("a list of scalars", nested.type_name())),
                None => Ok(()),
            }
        }
        other if column.kind.is_list() => Err(mismatch("a list", other.type_name())),
        Value::List(_) => Err(mismatch("a scalar", "list")),
        _ => Ok(()),
    }
}

/// `NaN` and infinities have no SQL literal.
fn check_finite(value: &Value) -> Result<(), FilterError> {
    match value {
        Value::Float(v) if !v.is_finite() => Err(ValueError::InvalidNumber(v.to_string()).into()),
        Value::List(items) => items.iter().try_for_each(check_finite),
        _ => Ok(()),
    }
}
