//! UI Components
//!
//! Reusable Leptos components.

mod calculator;
mod delete_confirm_button;
mod ingredient_catalog;
mod recipe_form;
mod status_bar;
mod tab_bar;

pub use calculator::Calculator;
pub use delete_confirm_button::DeleteConfirmButton;
pub use ingredient_catalog::IngredientCatalog;
pub use recipe_form::RecipeForm;
pub use status_bar::StatusBar;
pub use tab_bar::TabBar;
