use crate::error::CliError;
use planner::filter::set::WhereClause;

pub fn render_json(clause: &WhereClause) -> Result<String, CliError> {
    serde_json::to_string_pretty(clause).map_err(CliError::JsonSerialize)
}

pub fn render_table(clause: &WhereClause) -> String {
    let mut out = format!("WHERE {}\n", clause.sql);
    if !clause.params.is_empty() {
        out.push_str("-----------------------------\n");
        for param in &clause.params {
            out.push_str(&format!("{:<24} {}\n", param.name, param.value));
        }
    }
    out
}

pub async fn emit(content: String, output: Option<String>) -> Result<(), CliError> {
    match output {
        Some(path) => tokio::fs::write(path, content).await?,
        None => print!("{content}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::core::value::Value;
    use planner::filter::param::SqlParam;

    #[test]
    fn test_render_table() {
        let clause = WhereClause {
            sql: "coalesce(age, 0) = @age1".into(),
            params: vec![SqlParam::new("@age1", Value::Int(30))],
        };

        let table = render_table(&clause);
        assert!(table.starts_with("WHERE coalesce(age, 0) = @age1\n"));
        assert!(table.contains("@age1"));
        assert!(table.trim_end().ends_with("30"));
    }

    #[test]
    fn test_render_json() {
        let clause = WhereClause {
            sql: "1=1".into(),
            params: vec![],
        };
        let json: serde_json::Value = serde_json::from_str(&render_json(&clause).unwrap()).unwrap();
        assert_eq!(json["sql"], "1=1");
        assert_eq!(json["params"], serde_json::json!([]));
    }
}
