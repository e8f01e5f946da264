//! Sorting by a numeric key

use crate::transformation::map;
use underbar_core::{AsNumber, Record};
use underbar_utils::tracing::combinator_span;

/// Produces the numeric key an element is sorted by
pub trait SortCriterion<T> {
    fn key(&self, element: &T) -> f64;
}

impl<T, F> SortCriterion<T> for F
where
    F: Fn(&T) -> f64,
{
    fn key(&self, element: &T) -> f64 {
        self(element)
    }
}

/// Sort records by the named field, coerced with [`AsNumber`].
///
/// Records missing the field get a `NaN` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Property<'a>(pub &'a str);

impl<T> SortCriterion<T> for Property<'_>
where
    T: Record,
    T::Field: AsNumber,
{
    fn key(&self, element: &T) -> f64 {
        element
            .field(self.0)
            .map_or(f64::NAN, |field| field.to_number())
    }
}

/// Sort `sequence` in place by ascending key and return it.
///
/// The sort is stable and computes each key once. `NaN` keys do not panic:
/// they are placed with [`f64::total_cmp`], which puts positive `NaN` after
/// every number, so the order among them is not meaningful.
///
/// ```
/// use underbar_collections::{sort_by, Property};
/// use serde_json::json;
///
/// let mut people = vec![json!({"name": "curly", "age": 50}), json!({"name": "moe", "age": 30})];
/// sort_by(&mut people, Property("age"));
/// assert_eq!(people[0]["name"], "moe");
///
/// let mut words = vec!["ccc", "a", "bb"];
/// sort_by(&mut words, |w: &&str| w.len() as f64);
/// assert_eq!(words, vec!["a", "bb", "ccc"]);
/// ```
pub fn sort_by<T, C>(sequence: &mut Vec<T>, criterion: C) -> &mut Vec<T>
where
    C: SortCriterion<T>,
{
    let span = combinator_span("sort_by", sequence.len());
    let _guard = span.enter();

    let keys = map(sequence.as_slice(), |element, _, _| criterion.key(element));
    let mut keyed: Vec<(f64, T)> = keys.into_iter().zip(sequence.drain(..)).collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
    sequence.extend(keyed.into_iter().map(|(_, element)| element));
    sequence
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn test_sort_by_function() {
        let mut numbers = vec![3, 1, 2];
        sort_by(&mut numbers, |n: &i32| *n as f64);
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_sort_by_negated_key_reverses() {
        let mut numbers = vec![3, 1, 2];
        let sorted = sort_by(&mut numbers, |n: &i32| -(*n as f64));
        assert_eq!(*sorted, vec![3, 2, 1]);
    }

    #[test]
    fn test_sort_by_property_of_maps() {
        let person = |name: &str, age: u32| {
            let mut record = HashMap::new();
            record.insert("name".to_string(), name.len() as u32);
            record.insert("age".to_string(), age);
            record
        };
        let mut people = vec![person("moe", 40), person("larry", 30), person("curly", 50)];
        sort_by(&mut people, Property("age"));
        let ages: Vec<u32> = people.iter().map(|p| p["age"]).collect();
        assert_eq!(ages, vec![30, 40, 50]);
    }

    #[test]
    fn test_sort_is_stable() {
        let mut pairs = vec![json!({"k": 1, "id": "a"}), json!({"k": 0, "id": "b"}), json!({"k": 1, "id": "c"})];
        sort_by(&mut pairs, Property("k"));
        let ids: Vec<&str> = pairs.iter().filter_map(|p| p["id"].as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_non_numeric_keys_do_not_panic() {
        let mut items = vec![json!({"v": "x"}), json!({"v": 2}), json!({}), json!({"v": 1})];
        sort_by(&mut items, Property("v"));
        assert_eq!(items.len(), 4);
        assert_eq!(items[0], json!({"v": 1}));
        assert_eq!(items[1], json!({"v": 2}));
    }
}
