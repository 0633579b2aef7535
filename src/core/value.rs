//! Values stored under snapshot keys.

use super::ability::Ability;
use serde::Serialize;
use std::fmt;

/// A single value held by a [`Snapshot`](super::Snapshot).
///
/// Resource keys such as `soil` hold numbers, the reserved `name` key holds
/// text, and attached capabilities hold an [`Ability`].
#[derive(Clone, Debug, Serialize)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    Text(String),
    Ability(Ability),
}

impl Value {
    /// The numeric payload, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The text payload, if this is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The ability payload, if this is an ability.
    pub fn as_ability(&self) -> Option<&Ability> {
        match self {
            Self::Ability(a) => Some(a),
            _ => None,
        }
    }

    /// Short type name used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Text(_) => "text",
            Self::Ability(_) => "ability",
        }
    }
}

/// Numbers compare with `==` except that `NaN` equals `NaN`, so a snapshot
/// holding a `NaN` resource still equals its own copy.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Ability(a), Self::Ability(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
            Self::Ability(a) => write!(f, "<ability: {}>", a.recipe().action),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Ability> for Value {
    fn from(a: Ability) -> Self {
        Self::Ability(a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_match_variant() {
        let n = Value::from(5);
        assert_eq!(n.as_number(), Some(5.0));
        assert_eq!(n.as_text(), None);
        assert_eq!(n.kind(), "number");

        let t = Value::from("Phil");
        assert_eq!(t.as_text(), Some("Phil"));
        assert_eq!(t.as_number(), None);
        assert!(t.as_ability().is_none());
    }

    #[test]
    fn nan_numbers_are_equal() {
        assert_eq!(Value::from(f64::NAN), Value::from(f64::NAN));
        assert_eq!(Value::from(0.0), Value::from(-0.0));
        assert_ne!(Value::from(f64::NAN), Value::from(1.0));
        assert_ne!(Value::from(1), Value::from("1"));
    }

    #[test]
    fn display_is_plain() {
        assert_eq!(Value::from(2.5).to_string(), "2.5");
        assert_eq!(Value::from("Lucas").to_string(), "Lucas");
    }

    #[test]
    fn serializes_untagged() {
        assert_eq!(serde_json::to_string(&Value::from(10)).unwrap(), "10.0");
        assert_eq!(
            serde_json::to_string(&Value::from("Phil")).unwrap(),
            "\"Phil\""
        );
    }
}
