//! Frontend Models
//!
//! Data structures matching the collaborator's JSON payloads.

use serde::{Deserialize, Serialize};

/// Ingredient as returned by GET /api/ingredients.
///
/// `present_in` lists the names of recipes using this ingredient; the
/// create response omits it, so it defaults to empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub present_in: Vec<String>,
}

/// Recipe as returned by GET /api/recipes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub notes: String,
}

/// One ingredient line of a recipe submission: ratio in grams per
/// kilogram of finished product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeItemPayload {
    pub ingredient_id: u32,
    pub grams_per_kg: f64,
}

/// Body of POST /api/recipes. Items are submitted atomically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipePayload {
    pub name: String,
    pub notes: String,
    pub items: Vec<RecipeItemPayload>,
}

/// One row of a calculation result: quantity already scaled to the
/// requested batch mass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRow {
    pub ingredient: String,
    pub grams: f64,
}

/// Response of GET /api/recipes/{id}/calculate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResponse {
    #[serde(default)]
    pub recipe: String,
    #[serde(default)]
    pub kg: f64,
    pub result: Vec<CalculationRow>,
}

/// Shape of collaborator error payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ingredient_without_present_in_defaults_empty() {
        let ingredient: Ingredient =
            serde_json::from_str(r#"{"id": 4, "name": "Sacarosa"}"#).unwrap();
        assert_eq!(ingredient.id, 4);
        assert!(ingredient.present_in.is_empty());
    }

    #[test]
    fn calculation_response_decodes_scaled_rows() {
        // 500 g/kg scaled to a 2 kg batch comes back as 1000 g
        let json = r#"{"recipe": "Base", "kg": 2.0,
                       "result": [{"ingredient": "Flour", "grams": 1000.0}]}"#;
        let response: CalculationResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.result.len(), 1);
        assert_eq!(response.result[0].ingredient, "Flour");
        assert_eq!(response.result[0].grams, 1000.0);
    }

    #[test]
    fn recipe_payload_serializes_item_fields() {
        let payload = RecipePayload {
            name: "Stracciatella".to_string(),
            notes: String::new(),
            items: vec![RecipeItemPayload { ingredient_id: 3, grams_per_kg: 333.0 }],
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert!(json.contains(r#""ingredient_id":3"#));
        assert!(json.contains(r#""grams_per_kg":333.0"#));
    }
}
