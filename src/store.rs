//! Application State Store
//!
//! Last-fetched recipe and ingredient lists, held with
//! `reactive_stores` for fine-grained reactivity. Selection widgets
//! derive their options from here, so a catalog refresh rebuilds every
//! ingredient select automatically.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Ingredient, Recipe};

/// Shared lists reflecting the most recent successful fetch.
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Recipes for the calculator selector
    pub recipes: Vec<Recipe>,
    /// Ingredient catalog, in the order the collaborator returned it
    pub ingredients: Vec<Ingredient>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Replace the recipe list with a fresh fetch
pub fn store_set_recipes(store: &AppStore, recipes: Vec<Recipe>) {
    *store.recipes().write() = recipes;
}

/// Replace the ingredient catalog with a fresh fetch
pub fn store_set_ingredients(store: &AppStore, ingredients: Vec<Ingredient>) {
    *store.ingredients().write() = ingredients;
}
