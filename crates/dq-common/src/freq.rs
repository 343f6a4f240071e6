//! Value-frequency counting shared by profiling and mode imputation.

use std::collections::HashMap;

/// Counts occurrences of each value, ordered by descending count with ties
/// broken by first encounter.
pub fn frequency_table<I, S>(values: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for value in values {
        let value = value.as_ref();
        match index.get(value) {
            Some(&pos) => counts[pos].1 += 1,
            None => {
                index.insert(value.to_string(), counts.len());
                counts.push((value.to_string(), 1));
            }
        }
    }
    // Stable sort keeps encounter order within equal counts.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Most frequent value, or `None` when there are no values at all.
pub fn mode_value<I, S>(values: I) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    frequency_table(values).into_iter().next().map(|(v, _)| v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_by_count_then_first_encounter() {
        let table = frequency_table(["b", "a", "a", "c", "b"]);
        assert_eq!(
            table,
            vec![
                ("b".to_string(), 2),
                ("a".to_string(), 2),
                ("c".to_string(), 1),
            ]
        );
    }

    #[test]
    fn mode_of_empty_input_is_none() {
        assert_eq!(mode_value(Vec::<&str>::new()), None);
        assert_eq!(mode_value(["x", "y", "x"]), Some("x".to_string()));
    }
}
