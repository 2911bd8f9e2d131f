//! Split/merge between a stored string array and its form representation.
//!
//! Profile and product forms present array fields as a block of
//! vocabulary checkboxes plus free-text "Lainnya" rows. On load the
//! stored array is partitioned into those two groups; on save they are
//! merged back into one deduplicated array.

use std::collections::HashSet;

use super::rows::RowList;

/// Form-side state of one reconciled array field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSelection {
    /// Checked vocabulary values.
    pub selected: HashSet<String>,
    /// Free-text rows.
    pub custom: RowList,
}

impl FieldSelection {
    pub fn empty() -> Self {
        Self {
            selected: HashSet::new(),
            custom: RowList::seeded(),
        }
    }

    /// Partition stored values: case-sensitive exact vocabulary matches
    /// become checkbox selections, everything else becomes a custom row.
    /// Splitting the result of [`FieldSelection::merge`] yields the same
    /// partition again.
    pub fn split(values: &[String], vocabulary: &[&str]) -> Self {
        let mut selected = HashSet::new();
        let mut custom_values = Vec::new();
        for value in values {
            if vocabulary.contains(&value.as_str()) {
                selected.insert(value.clone());
            } else if !value.trim().is_empty() {
                custom_values.push(value.clone());
            }
        }
        Self {
            selected,
            custom: RowList::from_values(custom_values),
        }
    }

    pub fn is_selected(&self, value: &str) -> bool {
        self.selected.contains(value)
    }

    pub fn toggle(&mut self, value: &str, checked: bool) {
        if checked {
            self.selected.insert(value.to_string());
        } else {
            self.selected.remove(value);
        }
    }

    /// Merge back into the canonical array: vocabulary values first, in
    /// vocabulary order, then non-empty custom rows in insertion order.
    /// A custom row whose trimmed value is itself a vocabulary value is
    /// dropped so a hand-typed duplicate cannot appear twice.
    pub fn merge(&self, vocabulary: &[&str]) -> Vec<String> {
        let mut merged: Vec<String> = vocabulary
            .iter()
            .filter(|v| self.selected.contains(**v))
            .map(|v| v.to_string())
            .collect();
        let mut seen: HashSet<String> = merged.iter().cloned().collect();
        for value in self.custom.non_empty_values() {
            if vocabulary.contains(&value.as_str()) {
                continue;
            }
            if seen.insert(value.clone()) {
                merged.push(value);
            }
        }
        merged
    }

    /// True when the user picked or typed at least one value.
    pub fn has_any(&self) -> bool {
        !self.selected.is_empty() || self.custom.has_content()
    }
}

/// Share of satisfied required-field predicates, as a rounded percentage.
/// An empty check list counts as complete.
pub fn completion_percent(checks: &[bool]) -> u8 {
    if checks.is_empty() {
        return 100;
    }
    let done = checks.iter().filter(|check| **check).count();
    ((done * 100) as f64 / checks.len() as f64).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    const VOCAB: &[&str] = &["Makanan Olahan", "Kerajinan"];

    fn values(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn split_partitions_vocabulary_and_custom() {
        let state = FieldSelection::split(&values(&["Makanan Olahan", "Keripik Unik"]), VOCAB);
        assert!(state.is_selected("Makanan Olahan"));
        assert_eq!(state.selected.len(), 1);
        // one custom value plus the trailing empty affordance row
        assert_eq!(state.custom.rows().len(), 2);
        assert_eq!(state.custom.rows()[0].value, "Keripik Unik");
        assert!(state.custom.rows()[1].value.is_empty());
    }

    #[test]
    fn no_value_lands_in_both_partitions() {
        let state = FieldSelection::split(
            &values(&["Kerajinan", "Kerajinan Bambu", "Makanan Olahan"]),
            VOCAB,
        );
        for row in state.custom.rows() {
            assert!(!state.selected.contains(&row.value));
        }
    }

    #[test]
    fn merge_orders_vocabulary_first_then_custom() {
        let state = FieldSelection::split(&values(&["Keripik Unik", "Makanan Olahan"]), VOCAB);
        assert_eq!(
            state.merge(VOCAB),
            vec!["Makanan Olahan".to_string(), "Keripik Unik".to_string()]
        );
    }

    #[test]
    fn merge_drops_custom_duplicate_of_vocabulary_value() {
        let mut state = FieldSelection::split(&values(&["Makanan Olahan"]), VOCAB);
        let row_id = state.custom.rows()[0].id;
        state.custom.update_row(row_id, "Makanan Olahan".into());
        assert_eq!(state.merge(VOCAB), vec!["Makanan Olahan".to_string()]);
    }

    #[test]
    fn split_merge_round_trip_preserves_value_set() {
        let original = values(&["Makanan Olahan", "Keripik Unik", "Kerajinan"]);
        let merged = FieldSelection::split(&original, VOCAB).merge(VOCAB);

        let original_set: HashSet<_> = original.iter().cloned().collect();
        let merged_set: HashSet<_> = merged.iter().cloned().collect();
        assert_eq!(original_set, merged_set);

        // and the second round trip is a fixed point
        let again = FieldSelection::split(&merged, VOCAB).merge(VOCAB);
        assert_eq!(merged, again);
    }

    #[test]
    fn resplitting_a_merge_yields_the_same_partition() {
        let first = FieldSelection::split(&values(&["Kopi Luwak", "Kerajinan"]), VOCAB);
        let second = FieldSelection::split(&first.merge(VOCAB), VOCAB);
        assert_eq!(first.selected, second.selected);
        assert_eq!(
            first.custom.non_empty_values(),
            second.custom.non_empty_values()
        );
    }

    #[test]
    fn completion_rounds_and_handles_extremes() {
        assert_eq!(completion_percent(&[]), 100);
        assert_eq!(completion_percent(&[true, true, false]), 67);
        assert_eq!(completion_percent(&[false, false]), 0);
        assert_eq!(completion_percent(&[true, true]), 100);
    }

    #[test]
    fn completion_is_monotonic_in_satisfied_checks() {
        let mut checks = vec![false; 7];
        let mut previous = completion_percent(&checks);
        for index in 0..checks.len() {
            checks[index] = true;
            let next = completion_percent(&checks);
            assert!(next > previous || next == 100);
            previous = next;
        }
        assert_eq!(previous, 100);
    }
}
