//! Calculator Component
//!
//! Scales a stored recipe to a target batch mass via the collaborator
//! and renders the returned (ingredient, grams) rows in order.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::models::CalculationRow;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Calculator() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (selected_recipe, set_selected_recipe) = signal(String::new());
    let (kg, set_kg) = signal(String::from("1"));
    let (rows, set_rows) = signal(Vec::<CalculationRow>::new());
    let (calculating, set_calculating) = signal(false);

    let calculate = move |_| {
        if calculating.get() {
            return;
        }
        // No recipe selected: nothing to do
        let Ok(recipe_id) = selected_recipe.get().parse::<u32>() else {
            return;
        };
        // The collaborator validates the batch mass and reports kg <= 0
        let kg_value = kg.get().trim().parse::<f64>().unwrap_or(0.0);

        set_calculating.set(true);
        spawn_local(async move {
            match api::calculate(recipe_id, kg_value).await {
                Ok(data) => {
                    ctx.clear_notice();
                    set_rows.set(data.result);
                }
                Err(msg) => {
                    web_sys::console::error_1(&format!("[Calculator] {}", msg).into());
                    ctx.error(msg);
                }
            }
            set_calculating.set(false);
        });
    };

    view! {
        <div class="calculator">
            <h2>"Elaborar"</h2>

            <div class="calculator-controls">
                <select
                    class="recipe-select"
                    prop:value=move || selected_recipe.get()
                    on:change=move |ev| set_selected_recipe.set(event_target_value(&ev))
                >
                    <option value="">"Selecciona receta"</option>
                    <For
                        each=move || store.recipes().get()
                        key=|recipe| recipe.id
                        children=move |recipe| {
                            view! {
                                <option value=recipe.id.to_string()>{recipe.name.clone()}</option>
                            }
                        }
                    />
                </select>
                <input
                    type="number"
                    min="0.1"
                    step="0.1"
                    placeholder="kg"
                    prop:value=move || kg.get()
                    on:input=move |ev| set_kg.set(event_target_value(&ev))
                />
                <button on:click=calculate prop:disabled=move || calculating.get()>
                    "Calcular"
                </button>
            </div>

            <table class="calculation-table">
                <thead>
                    <tr>
                        <th>"Ingrediente"</th>
                        <th>"Gramos"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || rows.get()
                        key=|row| row.ingredient.clone()
                        children=move |row| {
                            view! {
                                <tr>
                                    <td>{row.ingredient.clone()}</td>
                                    <td>{row.grams}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
