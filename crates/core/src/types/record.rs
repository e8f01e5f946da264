//! Records with named fields and numeric coercion

use indexmap::IndexMap;
use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// A value whose fields can be looked up by name
pub trait Record {
    type Field;

    /// The field called `name`, if present
    fn field(&self, name: &str) -> Option<&Self::Field>;
}

impl<K, V, S> Record for HashMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    S: BuildHasher,
{
    type Field = V;

    fn field(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}

impl<K, V> Record for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
{
    type Field = V;

    fn field(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}

impl<K, V, S> Record for IndexMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    S: BuildHasher,
{
    type Field = V;

    fn field(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}

impl Record for serde_json::Map<String, serde_json::Value> {
    type Field = serde_json::Value;

    fn field(&self, name: &str) -> Option<&serde_json::Value> {
        self.get(name)
    }
}

impl Record for serde_json::Value {
    type Field = serde_json::Value;

    fn field(&self, name: &str) -> Option<&serde_json::Value> {
        self.get(name)
    }
}

/// Numeric coercion used to compare sort keys.
///
/// Values without a sensible numeric reading coerce to `NaN` instead of
/// failing.
pub trait AsNumber {
    fn to_number(&self) -> f64;
}

macro_rules! impl_as_number {
    ($($ty:ty),* $(,)?) => {
        $(
            impl AsNumber for $ty {
                fn to_number(&self) -> f64 {
                    *self as f64
                }
            }
        )*
    };
}

impl_as_number!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl AsNumber for bool {
    fn to_number(&self) -> f64 {
        if *self {
            1.0
        } else {
            0.0
        }
    }
}

impl AsNumber for str {
    fn to_number(&self) -> f64 {
        self.trim().parse().unwrap_or(f64::NAN)
    }
}

impl AsNumber for String {
    fn to_number(&self) -> f64 {
        self.as_str().to_number()
    }
}

impl<T: AsNumber> AsNumber for Option<T> {
    fn to_number(&self) -> f64 {
        self.as_ref().map_or(f64::NAN, AsNumber::to_number)
    }
}

impl<T: AsNumber + ?Sized> AsNumber for &T {
    fn to_number(&self) -> f64 {
        (**self).to_number()
    }
}

impl AsNumber for serde_json::Value {
    fn to_number(&self) -> f64 {
        use serde_json::Value;
        match self {
            Value::Null => 0.0,
            Value::Bool(flag) => flag.to_number(),
            Value::Number(number) => number.as_f64().unwrap_or(f64::NAN),
            Value::String(text) => text.to_number(),
            Value::Array(_) | Value::Object(_) => f64::NAN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_map_records() {
        let mut person = HashMap::new();
        person.insert("name".to_string(), "curly");
        assert_eq!(person.field("name"), Some(&"curly"));
        assert_eq!(person.field("age"), None);
    }

    #[test]
    fn test_json_records() {
        let person = json!({"name": "moe", "age": 40});
        assert_eq!(person.field("age"), Some(&json!(40)));
        assert_eq!(json!([1, 2]).field("age"), None);
    }

    #[test]
    fn test_numeric_coercion() {
        assert_eq!(3u8.to_number(), 3.0);
        assert_eq!(true.to_number(), 1.0);
        assert_eq!(" 2.5 ".to_number(), 2.5);
        assert!("abc".to_number().is_nan());
        assert!(None::<i32>.to_number().is_nan());
        assert_eq!(json!(null).to_number(), 0.0);
        assert!(json!({"a": 1}).to_number().is_nan());
    }

    #[test]
    fn test_json_values_coerce_through_trait() {
        let age = json!(40);
        let coerced: f64 = age.to_number();
        assert_eq!(coerced, 40.0);
        assert_eq!(json!("7").to_number(), 7.0);
        assert_eq!(json!(true).to_number(), 1.0);
    }

    #[test]
    fn test_wide_integers() {
        assert_eq!(5i128.to_number(), 5.0);
        assert_eq!(u128::from(9u8).to_number(), 9.0);
    }
}
