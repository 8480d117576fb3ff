//! REST Bindings
//!
//! Frontend bindings to the collaborator's JSON API, built on the
//! browser Fetch API. Every function returns `Result<T, String>` where
//! the error string is ready to show to the user: the collaborator's
//! `error` field when present, a per-operation fallback otherwise.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::{CalculationResponse, ErrorBody, Ingredient, Recipe, RecipePayload};

const MSG_LOAD_RECIPES: &str = "No se pudieron cargar las recetas";
const MSG_SAVE_RECIPE: &str = "Error al guardar receta";
const MSG_LOAD_INGREDIENTS: &str = "No se pudieron cargar los ingredientes";
const MSG_CREATE_INGREDIENT: &str = "No se pudo crear ingrediente";
const MSG_DELETE_INGREDIENT: &str = "No se pudo borrar el ingrediente";
const MSG_CALCULATE: &str = "No se pudo calcular la receta";

/// Catalog sort order accepted by GET /api/ingredients.
///
/// The collaborator accepts exactly `asc` and `desc`; anything else is
/// treated as ascending, so UI values never pass through unvalidated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IngredientOrder {
    #[default]
    NameAsc,
    NameDesc,
}

impl IngredientOrder {
    pub fn query_key(self) -> &'static str {
        match self {
            IngredientOrder::NameAsc => "asc",
            IngredientOrder::NameDesc => "desc",
        }
    }

    pub fn from_key(key: &str) -> Self {
        match key {
            "desc" => IngredientOrder::NameDesc,
            _ => IngredientOrder::NameAsc,
        }
    }
}

// ========================
// Request Argument Structs
// ========================

#[derive(Serialize)]
struct CreateIngredientArgs<'a> {
    name: &'a str,
}

// ========================
// API Functions
// ========================

pub async fn list_recipes() -> Result<Vec<Recipe>, String> {
    let response = send("GET", "/api/recipes", None, MSG_LOAD_RECIPES).await?;
    decode(response, MSG_LOAD_RECIPES).await
}

pub async fn create_recipe(payload: &RecipePayload) -> Result<Recipe, String> {
    let body = serde_json::to_string(payload).map_err(|e| e.to_string())?;
    let response = send("POST", "/api/recipes", Some(body), MSG_SAVE_RECIPE).await?;
    decode(response, MSG_SAVE_RECIPE).await
}

pub async fn list_ingredients(order: IngredientOrder) -> Result<Vec<Ingredient>, String> {
    let url = format!("/api/ingredients?order={}", order.query_key());
    let response = send("GET", &url, None, MSG_LOAD_INGREDIENTS).await?;
    decode(response, MSG_LOAD_INGREDIENTS).await
}

pub async fn create_ingredient(name: &str) -> Result<Ingredient, String> {
    let body =
        serde_json::to_string(&CreateIngredientArgs { name }).map_err(|e| e.to_string())?;
    let response = send("POST", "/api/ingredients", Some(body), MSG_CREATE_INGREDIENT).await?;
    decode(response, MSG_CREATE_INGREDIENT).await
}

pub async fn delete_ingredient(id: u32) -> Result<(), String> {
    let url = format!("/api/ingredients/{id}");
    // 204 on success, no body to decode
    send("DELETE", &url, None, MSG_DELETE_INGREDIENT).await?;
    Ok(())
}

pub async fn calculate(recipe_id: u32, kg: f64) -> Result<CalculationResponse, String> {
    let url = format!("/api/recipes/{recipe_id}/calculate?kg={kg}");
    let response = send("GET", &url, None, MSG_CALCULATE).await?;
    decode(response, MSG_CALCULATE).await
}

// ========================
// Fetch Plumbing
// ========================

/// Issue one request. Transport failures and non-2xx statuses both come
/// back as `Err` with a user-facing message.
async fn send(
    method: &str,
    url: &str,
    body: Option<String>,
    fallback: &str,
) -> Result<Response, String> {
    let opts = RequestInit::new();
    opts.set_method(method);
    if let Some(json) = &body {
        opts.set_body(&JsValue::from_str(json));
    }

    let request =
        Request::new_with_str_and_init(url, &opts).map_err(|_| fallback.to_string())?;
    if body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|_| fallback.to_string())?;
    }

    let window = web_sys::window().ok_or_else(|| fallback.to_string())?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|_| fallback.to_string())?;
    let response: Response = response.dyn_into().map_err(|_| fallback.to_string())?;

    if response.ok() {
        Ok(response)
    } else {
        Err(error_message(&response, fallback).await)
    }
}

async fn decode<T: DeserializeOwned>(response: Response, fallback: &str) -> Result<T, String> {
    let promise = response.json().map_err(|_| fallback.to_string())?;
    let value = JsFuture::from(promise).await.map_err(|_| fallback.to_string())?;
    serde_wasm_bindgen::from_value(value).map_err(|_| fallback.to_string())
}

async fn error_message(response: &Response, fallback: &str) -> String {
    let body = match response.json() {
        Ok(promise) => JsFuture::from(promise)
            .await
            .ok()
            .and_then(|value| serde_wasm_bindgen::from_value::<ErrorBody>(value).ok()),
        Err(_) => None,
    };
    message_from_body(body, fallback)
}

/// Resolve the user-facing message for a failed request: the
/// collaborator's `error` field when present and non-blank, the
/// operation's fallback otherwise.
pub fn message_from_body(body: Option<ErrorBody>, fallback: &str) -> String {
    body.and_then(|b| b.error)
        .filter(|msg| !msg.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collaborator_error_wins_over_fallback() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"error": "No se puede borrar: está usado en una receta."}"#)
                .unwrap();
        assert_eq!(
            message_from_body(Some(body), MSG_DELETE_INGREDIENT),
            "No se puede borrar: está usado en una receta."
        );
    }

    #[test]
    fn missing_or_blank_error_falls_back() {
        assert_eq!(message_from_body(None, MSG_CALCULATE), MSG_CALCULATE);

        let empty: ErrorBody = serde_json::from_str(r#"{"error": "  "}"#).unwrap();
        assert_eq!(message_from_body(Some(empty), MSG_CALCULATE), MSG_CALCULATE);

        let absent: ErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(
            message_from_body(Some(absent), MSG_SAVE_RECIPE),
            MSG_SAVE_RECIPE
        );
    }

    #[test]
    fn order_keys_round_trip_and_reject_unknown_values() {
        assert_eq!(IngredientOrder::NameAsc.query_key(), "asc");
        assert_eq!(IngredientOrder::NameDesc.query_key(), "desc");
        assert_eq!(IngredientOrder::from_key("desc"), IngredientOrder::NameDesc);
        assert_eq!(IngredientOrder::from_key("asc"), IngredientOrder::NameAsc);
        // Unknown UI values never reach the query string verbatim
        assert_eq!(
            IngredientOrder::from_key("name; DROP TABLE"),
            IngredientOrder::NameAsc
        );
        assert_eq!(IngredientOrder::default(), IngredientOrder::NameAsc);
    }
}
