//! Dynamic free-text row lists ("Lainnya" sections of profile forms).
//!
//! Invariant: a list never has zero rows. Removing the last row clears it
//! instead, so the section always offers at least one input.

use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomRow {
    pub id: Uuid,
    pub value: String,
}

impl CustomRow {
    fn empty() -> Self {
        Self {
            id: Uuid::new_v4(),
            value: String::new(),
        }
    }

    fn with_value(value: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowList {
    rows: Vec<CustomRow>,
}

impl RowList {
    /// A list with a single empty row.
    pub fn seeded() -> Self {
        Self {
            rows: vec![CustomRow::empty()],
        }
    }

    /// Build from stored values, plus one trailing empty row for input.
    /// With no values this is the same as [`RowList::seeded`].
    pub fn from_values(values: Vec<String>) -> Self {
        let mut rows: Vec<CustomRow> = values
            .into_iter()
            .filter(|v| !v.trim().is_empty())
            .map(CustomRow::with_value)
            .collect();
        rows.push(CustomRow::empty());
        Self { rows }
    }

    pub fn rows(&self) -> &[CustomRow] {
        &self.rows
    }

    pub fn add_row(&mut self) {
        self.rows.push(CustomRow::empty());
    }

    /// Remove the row with the given id. The last remaining row is
    /// cleared rather than removed.
    pub fn remove_row(&mut self, id: Uuid) {
        if self.rows.len() == 1 {
            if self.rows[0].id == id {
                self.rows[0].value.clear();
            }
            return;
        }
        self.rows.retain(|row| row.id != id);
    }

    pub fn update_row(&mut self, id: Uuid, value: String) {
        if let Some(row) = self.rows.iter_mut().find(|row| row.id == id) {
            row.value = value;
        }
    }

    /// Trimmed, non-empty values in insertion order.
    pub fn non_empty_values(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| row.value.trim())
            .filter(|v| !v.is_empty())
            .map(|v| v.to_string())
            .collect()
    }

    pub fn has_content(&self) -> bool {
        self.rows.iter().any(|row| !row.value.trim().is_empty())
    }
}

impl Default for RowList {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_list_has_one_empty_row() {
        let list = RowList::seeded();
        assert_eq!(list.rows().len(), 1);
        assert!(list.rows()[0].value.is_empty());
    }

    #[test]
    fn from_values_appends_trailing_empty_row() {
        let list = RowList::from_values(vec!["Keripik Unik".into(), "  ".into()]);
        assert_eq!(list.rows().len(), 2);
        assert_eq!(list.rows()[0].value, "Keripik Unik");
        assert!(list.rows()[1].value.is_empty());
    }

    #[test]
    fn remove_keeps_a_floor_of_one_row() {
        let mut list = RowList::seeded();
        list.update_row(list.rows()[0].id, "Sambal".into());
        list.remove_row(list.rows()[0].id);
        assert_eq!(list.rows().len(), 1);
        assert!(list.rows()[0].value.is_empty());
    }

    #[test]
    fn remove_drops_row_when_others_remain() {
        let mut list = RowList::from_values(vec!["A".into(), "B".into()]);
        let first_id = list.rows()[0].id;
        list.remove_row(first_id);
        assert_eq!(list.non_empty_values(), vec!["B".to_string()]);
    }

    #[test]
    fn non_empty_values_trim_and_skip_blanks() {
        let mut list = RowList::seeded();
        list.update_row(list.rows()[0].id, "  Gula Aren  ".into());
        list.add_row();
        assert_eq!(list.non_empty_values(), vec!["Gula Aren".to_string()]);
    }
}
