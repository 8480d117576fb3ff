//! Recipe Composition Form Model
//!
//! Explicit form state for the recipe builder. Input handlers write
//! into this model and rendering reads back from it, so collecting a
//! submission never touches the DOM.

use crate::models::{RecipeItemPayload, RecipePayload};

/// Validate a new ingredient name: trimmed and non-empty, or `None`.
/// Rejection happens here, before any network call.
pub fn normalize_ingredient_name(input: &str) -> Option<String> {
    let name = input.trim();
    (!name.is_empty()).then(|| name.to_string())
}

/// One select + grams pair in the composition form. Field values are
/// the raw widget text; coercion happens in [`RecipeForm::collect`].
#[derive(Clone, Debug, PartialEq)]
pub struct ItemRow {
    /// Stable key for keyed list rendering
    pub key: u32,
    pub ingredient_id: String,
    pub grams: String,
}

/// Full state of the recipe builder form.
#[derive(Clone, Debug, PartialEq)]
pub struct RecipeForm {
    pub name: String,
    pub notes: String,
    pub rows: Vec<ItemRow>,
    next_key: u32,
}

impl RecipeForm {
    /// A fresh form starts with exactly one empty row.
    pub fn new() -> Self {
        let mut form = Self {
            name: String::new(),
            notes: String::new(),
            rows: Vec::new(),
            next_key: 0,
        };
        form.add_row("", "");
        form
    }

    /// Append one row, optionally pre-filled.
    pub fn add_row(&mut self, ingredient_id: &str, grams: &str) {
        self.next_key += 1;
        self.rows.push(ItemRow {
            key: self.next_key,
            ingredient_id: ingredient_id.to_string(),
            grams: grams.to_string(),
        });
    }

    pub fn set_ingredient(&mut self, key: u32, value: &str) {
        if let Some(row) = self.rows.iter_mut().find(|row| row.key == key) {
            row.ingredient_id = value.to_string();
        }
    }

    pub fn set_grams(&mut self, key: u32, value: &str) {
        if let Some(row) = self.rows.iter_mut().find(|row| row.key == key) {
            row.grams = value.to_string();
        }
    }

    pub fn ingredient_for(&self, key: u32) -> String {
        self.rows
            .iter()
            .find(|row| row.key == key)
            .map(|row| row.ingredient_id.clone())
            .unwrap_or_default()
    }

    pub fn grams_for(&self, key: u32) -> String {
        self.rows
            .iter()
            .find(|row| row.key == key)
            .map(|row| row.grams.clone())
            .unwrap_or_default()
    }

    /// Coerce every row to numbers and keep only complete ones:
    /// ingredient selected and a positive ratio. Incomplete rows are
    /// dropped silently, order of the survivors is preserved.
    pub fn collect(&self) -> Vec<RecipeItemPayload> {
        self.rows
            .iter()
            .filter_map(|row| {
                // Negative ids fail to parse and coerce to 0, dropped below
                let ingredient_id = row.ingredient_id.trim().parse::<u32>().unwrap_or(0);
                let grams_per_kg = row.grams.trim().parse::<f64>().unwrap_or(0.0);
                (ingredient_id > 0 && grams_per_kg > 0.0).then_some(RecipeItemPayload {
                    ingredient_id,
                    grams_per_kg,
                })
            })
            .collect()
    }

    /// Build the submission body. Name and notes are trimmed; anything
    /// further is the collaborator's call.
    pub fn payload(&self) -> RecipePayload {
        RecipePayload {
            name: self.name.trim().to_string(),
            notes: self.notes.trim().to_string(),
            items: self.collect(),
        }
    }

    /// Back to a single empty row after a successful save.
    pub fn reset(&mut self) {
        self.name.clear();
        self.notes.clear();
        self.rows.clear();
        self.add_row("", "");
    }
}

impl Default for RecipeForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_with_rows(rows: &[(&str, &str)]) -> RecipeForm {
        let mut form = RecipeForm::new();
        form.rows.clear();
        for (id, grams) in rows {
            form.add_row(id, grams);
        }
        form
    }

    #[test]
    fn new_form_has_one_empty_row() {
        let form = RecipeForm::new();
        assert_eq!(form.rows.len(), 1);
        assert_eq!(form.rows[0].ingredient_id, "");
        assert_eq!(form.rows[0].grams, "");
        assert!(form.collect().is_empty());
    }

    #[test]
    fn collect_drops_invalid_rows_and_keeps_order() {
        let form = form_with_rows(&[("0", "5"), ("3", "10"), ("2", "-1")]);
        let items = form.collect();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].ingredient_id, 3);
        assert_eq!(items[0].grams_per_kg, 10.0);
    }

    #[test]
    fn collect_preserves_order_of_valid_rows() {
        let form = form_with_rows(&[("5", "100"), ("", "40"), ("2", "250"), ("1", "0")]);
        let items = form.collect();
        let ids: Vec<u32> = items.iter().map(|item| item.ingredient_id).collect();
        assert_eq!(ids, vec![5, 2]);
    }

    #[test]
    fn collect_coerces_unparseable_text_to_zero() {
        let form = form_with_rows(&[("abc", "10"), ("3", "mucho"), ("-2", "10"), ("3", "10")]);
        assert_eq!(form.collect().len(), 1);
    }

    #[test]
    fn ingredient_names_are_trimmed_and_blank_ones_rejected() {
        assert_eq!(
            normalize_ingredient_name("  Leche entera "),
            Some("Leche entera".to_string())
        );
        assert_eq!(normalize_ingredient_name(""), None);
        assert_eq!(normalize_ingredient_name("   \t"), None);
    }

    #[test]
    fn set_ingredient_and_grams_target_the_keyed_row() {
        let mut form = RecipeForm::new();
        form.add_row("", "");
        let second = form.rows[1].key;
        form.set_ingredient(second, "7");
        form.set_grams(second, "125.5");
        assert_eq!(form.rows[0].ingredient_id, "");
        assert_eq!(form.ingredient_for(second), "7");
        assert_eq!(form.grams_for(second), "125.5");
        // Unknown key is a no-op
        form.set_grams(9999, "1");
        assert_eq!(form.grams_for(second), "125.5");
    }

    #[test]
    fn payload_trims_name_and_notes() {
        let mut form = form_with_rows(&[("2", "80")]);
        form.name = "  Stracciatella  ".to_string();
        form.notes = " base \n".to_string();
        let payload = form.payload();
        assert_eq!(payload.name, "Stracciatella");
        assert_eq!(payload.notes, "base");
        assert_eq!(payload.items.len(), 1);
    }

    #[test]
    fn reset_leaves_exactly_one_empty_row_with_fresh_key() {
        let mut form = form_with_rows(&[("1", "50"), ("2", "60")]);
        form.name = "Vainilla".to_string();
        let old_keys: Vec<u32> = form.rows.iter().map(|row| row.key).collect();
        form.reset();
        assert_eq!(form.rows.len(), 1);
        assert!(form.name.is_empty() && form.notes.is_empty());
        assert_eq!(form.rows[0].ingredient_id, "");
        assert!(!old_keys.contains(&form.rows[0].key));
    }
}
