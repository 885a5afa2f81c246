use serde_json::Value;

/// Values that mean "no data" in the spreadsheet exports
const MISSING_TOKENS: [&str; 3] = ["", "#DIV/0!", "N/A"];

pub fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => MISSING_TOKENS.contains(&s.trim()),
        _ => false,
    }
}

/// Integer or `default` when missing, an error token, or unparseable
pub fn safe_int(value: Option<&Value>, default: i64) -> i64 {
    if is_missing(value) {
        return default;
    }
    match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
            .unwrap_or(default),
        Some(Value::String(s)) => s.trim().parse::<i64>().unwrap_or(default),
        Some(Value::Bool(b)) => i64::from(*b),
        _ => default,
    }
}

/// Float or `default` when missing, an error token, or unparseable
pub fn safe_float(value: Option<&Value>, default: f64) -> f64 {
    if is_missing(value) {
        return default;
    }
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(Value::Bool(b)) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    };
    parsed.filter(|f| f.is_finite()).unwrap_or(default)
}

/// Text or `default`; non-text scalars are rendered
pub fn safe_text(value: Option<&Value>, default: &str) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_tokens_take_the_default() {
        assert_eq!(safe_float(Some(&json!("#DIV/0!")), 99.0), 99.0);
        assert_eq!(safe_float(Some(&json!("N/A")), 0.0), 0.0);
        assert_eq!(safe_int(Some(&json!("")), 99), 99);
        assert_eq!(safe_int(Some(&Value::Null), 0), 0);
        assert_eq!(safe_int(None, 7), 7);
    }

    #[test]
    fn test_numbers_and_numeric_text() {
        assert_eq!(safe_int(Some(&json!(12)), 0), 12);
        assert_eq!(safe_int(Some(&json!(12.9)), 0), 12);
        assert_eq!(safe_int(Some(&json!(" 4 ")), 0), 4);
        assert_eq!(safe_int(Some(&json!("4.5")), 0), 0);
        assert_eq!(safe_float(Some(&json!("0.625")), 0.0), 0.625);
        assert_eq!(safe_float(Some(&json!(3)), 0.0), 3.0);
        assert_eq!(safe_float(Some(&json!("abc")), 99.0), 99.0);
    }

    #[test]
    fn test_text_default() {
        assert_eq!(safe_text(Some(&json!("Smith")), "Unknown Player"), "Smith");
        assert_eq!(safe_text(None, "Unknown Player"), "Unknown Player");
        assert_eq!(safe_text(Some(&Value::Null), ""), "");
    }
}
