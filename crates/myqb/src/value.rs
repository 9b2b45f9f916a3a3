//! Scalar values and the driver type hint derived from them.

use serde::{Serialize, Serializer};

/// A scalar value that can be bound to a placeholder.
///
/// The set of variants is closed: every value reaching the bind table is one of
/// these, and [`TypeHint::of`] maps each of them without inspecting anything at
/// run time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// SQL `NULL`
    Null,
    /// Boolean value
    Bool(bool),
    /// Signed integer
    Int(i64),
    /// Floating point number
    Float(f64),
    /// Text value
    String(String),
}

impl Value {
    /// Returns `true` if this value is `NULL`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The driver type hint for this value.
    pub fn type_hint(&self) -> TypeHint {
        TypeHint::of(self)
    }
}

/// How a bound value is handed to a prepared-statement driver.
///
/// Numbers (integer and floating point) bind as integers; everything else,
/// including booleans and `NULL`, binds as a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeHint {
    Integer,
    String,
}

impl TypeHint {
    /// Infer the hint for a value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Int(_) | Value::Float(_) => TypeHint::Integer,
            Value::Null | Value::Bool(_) | Value::String(_) => TypeHint::String,
        }
    }

    /// The PDO parameter constant (`PARAM_INT = 1`, `PARAM_STR = 2`).
    pub const fn driver_code(self) -> u8 {
        match self {
            TypeHint::Integer => 1,
            TypeHint::String => 2,
        }
    }
}

impl Serialize for TypeHint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.driver_code())
    }
}

/// Alias for [`TypeHint::of`].
pub fn infer_type(value: &Value) -> TypeHint {
    TypeHint::of(value)
}

macro_rules! impl_from_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::Int(i64::from(v))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
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

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::String(v.clone())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hint_table() {
        let cases = [
            (Value::Null, TypeHint::String),
            (Value::from(1), TypeHint::Integer),
            (Value::from("string"), TypeHint::String),
            (Value::from(true), TypeHint::String),
            (Value::from(1.1), TypeHint::Integer),
        ];
        for (value, expected) in cases {
            assert_eq!(infer_type(&value), expected, "value: {value:?}");
        }
    }

    #[test]
    fn driver_codes_match_pdo() {
        assert_eq!(TypeHint::Integer.driver_code(), 1);
        assert_eq!(TypeHint::String.driver_code(), 2);
    }

    #[test]
    fn option_none_is_null() {
        let v: Value = Option::<i32>::None.into();
        assert!(v.is_null());
        let v: Value = Some("x").into();
        assert_eq!(v, Value::String("x".into()));
    }

    #[test]
    fn serializes_untagged() {
        let json = serde_json::to_string(&vec![
            Value::Null,
            Value::Int(3),
            Value::String("a".into()),
        ])
        .unwrap();
        assert_eq!(json, r#"[null,3,"a"]"#);
        assert_eq!(serde_json::to_string(&TypeHint::String).unwrap(), "2");
    }
}
