use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A primitive field value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl Value {
    /// Coerce to display text. Whole numbers print without a fraction.
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    /// Default ordering: numbers numerically, booleans `false < true`,
    /// anything else (including mixed types) by its text.
    pub fn compare(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a.total_cmp(b),
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (a, b) => a.to_text().cmp(&b.to_text()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n.into())
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(n.into())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Number(n as f64)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_print_like_the_dashboard_expects() {
        assert_eq!(Value::from(45).to_text(), "45");
        assert_eq!(Value::from(4.8).to_text(), "4.8");
        assert_eq!(Value::from(true).to_text(), "true");
    }

    #[test]
    fn untagged_json_keeps_primitive_kinds() {
        let values: Vec<Value> = serde_json::from_str(r#"["In Stock", 45, 4.8, false]"#).unwrap();
        assert_eq!(
            values,
            vec![
                Value::from("In Stock"),
                Value::Number(45.0),
                Value::Number(4.8),
                Value::Bool(false),
            ]
        );
    }

    #[test]
    fn mixed_types_compare_as_text() {
        assert_eq!(Value::from(5).compare(&Value::from(30)), Ordering::Less);
        assert_eq!(Value::from("5").compare(&Value::from("30")), Ordering::Greater);
        assert_eq!(Value::from(100).compare(&Value::from("20")), Ordering::Less);
        assert_eq!(Value::from(false).compare(&Value::from(true)), Ordering::Less);
    }
}
