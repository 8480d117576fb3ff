//! Recetario Frontend App
//!
//! Main application component: provides store and context, keeps both
//! lists synchronized with the collaborator and lays out the two tab
//! panels.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{Calculator, IngredientCatalog, RecipeForm, StatusBar, TabBar};
use crate::context::{AppContext, Tab};
use crate::store::{store_set_ingredients, store_set_recipes, AppState};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let ctx = AppContext::new();
    provide_context(ctx);

    // Load recipes on mount and whenever a save bumps the trigger
    Effect::new(move |_| {
        let _ = ctx.recipes_trigger.get();
        spawn_local(async move {
            match api::list_recipes().await {
                Ok(loaded) => {
                    web_sys::console::log_1(
                        &format!("[App] {} recetas cargadas", loaded.len()).into(),
                    );
                    store_set_recipes(&store, loaded);
                }
                Err(msg) => ctx.error(msg),
            }
        });
    });

    // The catalog follows both its reload trigger and the order selector
    Effect::new(move |_| {
        let _ = ctx.ingredients_trigger.get();
        let order = ctx.ingredient_order.get();
        spawn_local(async move {
            match api::list_ingredients(order).await {
                Ok(loaded) => {
                    web_sys::console::log_1(
                        &format!("[App] {} ingredientes cargados", loaded.len()).into(),
                    );
                    store_set_ingredients(&store, loaded);
                }
                Err(msg) => ctx.error(msg),
            }
        });
    });

    view! {
        <div class="app-shell">
            <header class="app-header">
                <h1>"Recetario"</h1>
                <TabBar />
            </header>

            <StatusBar />

            <main>
                <section class=move || Tab::Recipes.panel_class(ctx.active_tab.get())>
                    <RecipeForm />
                    <Calculator />
                </section>

                <section class=move || Tab::Ingredients.panel_class(ctx.active_tab.get())>
                    <IngredientCatalog />
                </section>
            </main>
        </div>
    }
}
