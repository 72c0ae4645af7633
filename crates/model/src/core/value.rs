use crate::core::{error::ValueError, utils::escape_sql_string, value_kind::ValueKind};
use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::{fmt, str::FromStr};

/// A filter operand: null, a scalar, or an ordered list of scalars.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Boolean(bool),
    Int(i64),
    Float(f64),
    Decimal(BigDecimal),
    String(String),
    Date(NaiveDate),
    Timestamp(NaiveDateTime),
    List(Vec<Value>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    pub fn is_empty_list(&self) -> bool {
        matches!(self, Value::List(items) if items.is_empty())
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::Decimal(_) => "decimal",
            Value::String(_) => "string",
            Value::Date(_) => "date",
            Value::Timestamp(_) => "timestamp",
            Value::List(_) => "list",
        }
    }

    /// Raw text of a scalar as it appears between the delimiters of an
    /// inlined `in (...)` list. Embedded single quotes are doubled.
    pub fn to_literal(&self) -> String {
        match self {
            Value::Null => "null".to_string(),
            Value::Boolean(v) => String::from(if *v { "1" } else { "0" }),
            Value::Int(v) => v.to_string(),
            Value::Float(v) => v.to_string(),
            Value::Decimal(v) => v.to_string(),
            Value::String(v) => escape_sql_string(v),
            Value::Date(v) => v.format("%Y-%m-%d").to_string(),
            Value::Timestamp(v) => v.format("%Y-%m-%d %H:%M:%S%.f").to_string(),
            Value::List(items) => items
                .iter()
                .map(Value::to_literal)
                .collect::<Vec<_>>()
                .join(","),
        }
    }

    /// Coerces a JSON value into a typed value for a column of `kind`.
    ///
    /// List kinds accept a JSON array or a comma separated string; every
    /// element is coerced with the list's element kind.
    pub fn from_json(json: &serde_json::Value, kind: ValueKind) -> Result<Value, ValueError> {
        use serde_json::Value as Json;

        if json.is_null() {
            return Ok(Value::Null);
        }

        if kind.is_list() {
            let element_kind = kind.element_kind();
            return match json {
                Json::Array(items) => items
                    .iter()
                    .map(|item| Value::from_json(item, element_kind))
                    .collect::<Result<Vec<_>, _>>()
                    .map(Value::List),
                Json::String(s) => s
                    .split(',')
                    .map(str::trim)
                    .filter(|item| !item.is_empty())
                    .map(|item| Value::from_json(&Json::String(item.to_string()), element_kind))
                    .collect::<Result<Vec<_>, _>>()
                    .map(Value::List),
                other => Err(mismatch(kind, other)),
            };
        }

        match (kind, json) {
            (ValueKind::Boolean, Json::Bool(b)) => Ok(Value::Boolean(*b)),
            (ValueKind::Boolean, Json::Number(n)) => match n.as_i64() {
                Some(i) => Ok(Value::Boolean(i != 0)),
                None => Err(ValueError::InvalidBoolean(n.to_string())),
            },
            (ValueKind::Boolean, Json::String(s)) => parse_bool(s),

            (ValueKind::Number, Json::Number(n)) => match n.as_i64() {
                Some(i) => Ok(Value::Int(i)),
                None => n
                    .as_f64()
                    .map(Value::Float)
                    .ok_or_else(|| ValueError::InvalidNumber(n.to_string())),
            },
            (ValueKind::Number, Json::String(s)) => parse_number(s),

            (ValueKind::Date, Json::String(s)) => parse_date(s),

            (ValueKind::Text, Json::String(s)) => Ok(Value::String(s.clone())),
            (ValueKind::Text, Json::Number(n)) => Ok(Value::String(n.to_string())),
            (ValueKind::Text, Json::Bool(b)) => Ok(Value::String(b.to_string())),

            (kind, other) => Err(mismatch(kind, other)),
        }
    }
}

fn mismatch(kind: ValueKind, json: &serde_json::Value) -> ValueError {
    let found = match json {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    };
    ValueError::Mismatch {
        kind,
        found: found.to_string(),
    }
}

fn parse_bool(raw: &str) -> Result<Value, ValueError> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" => Ok(Value::Boolean(true)),
        "false" | "0" => Ok(Value::Boolean(false)),
        _ => Err(ValueError::InvalidBoolean(raw.to_string())),
    }
}

fn parse_number(raw: &str) -> Result<Value, ValueError> {
    let raw = raw.trim();
    if let Ok(i) = raw.parse::<i64>() {
        return Ok(Value::Int(i));
    }
    BigDecimal::from_str(raw)
        .map(Value::Decimal)
        .map_err(|_| ValueError::InvalidNumber(raw.to_string()))
}

fn parse_date(raw: &str) -> Result<Value, ValueError> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(Value::Date(date));
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S"))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f"))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .map(|dt| dt.naive_utc())
                .ok()
        })
        .map(Value::Timestamp)
        .ok_or_else(|| ValueError::InvalidDate(raw.to_string()))
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<BigDecimal> for Value {
    fn from(v: BigDecimal) -> Self {
        Value::Decimal(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Date(v)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(v: NaiveDateTime) -> Self {
        Value::Timestamp(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Boolean(v) => write!(f, "{v}"),
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Decimal(v) => write!(f, "{v}"),
            Value::String(v) => write!(f, "'{}'", escape_sql_string(v)),
            Value::Date(v) => write!(f, "'{v}'"),
            Value::Timestamp(v) => write!(f, "'{v}'"),
            Value::List(items) => {
                let rendered = items
                    .iter()
                    .map(|item| item.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "[{rendered}]")
            }
        }
    }
}
