//! Recipe Form Component
//!
//! Composition form for new recipes: name, notes and one ingredient
//! select + grams input per row. The form model is the source of
//! truth; widgets only mirror it.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::form::RecipeForm as FormModel;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn RecipeForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let form = RwSignal::new(FormModel::new());
    let (saving, set_saving) = signal(false);

    let save_recipe = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get() {
            return;
        }
        let payload = form.with(|f| f.payload());

        set_saving.set(true);
        spawn_local(async move {
            match api::create_recipe(&payload).await {
                Ok(saved) => {
                    web_sys::console::log_1(
                        &format!("[RecipeForm] Receta #{} guardada", saved.id).into(),
                    );
                    form.update(|f| f.reset());
                    ctx.reload_recipes();
                    // Presence-in-recipes annotations may have changed
                    ctx.reload_ingredients();
                    ctx.success("Receta guardada correctamente");
                }
                Err(msg) => ctx.error(msg),
            }
            set_saving.set(false);
        });
    };

    view! {
        <form class="recipe-form" on:submit=save_recipe>
            <h2>"Nueva receta"</h2>

            <input
                type="text"
                placeholder="Nombre de la receta"
                prop:value=move || form.with(|f| f.name.clone())
                on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
            />
            <textarea
                placeholder="Notas"
                prop:value=move || form.with(|f| f.notes.clone())
                on:input=move |ev| form.update(|f| f.notes = event_target_value(&ev))
            ></textarea>

            <div class="ingredient-rows">
                <For
                    each=move || form.with(|f| f.rows.clone())
                    key=|row| row.key
                    children=move |row| {
                        let key = row.key;
                        view! {
                            <div class="ingredient-row">
                                <select
                                    class="ingredient-select"
                                    prop:value=move || form.with(|f| f.ingredient_for(key))
                                    on:change=move |ev| {
                                        form.update(|f| f.set_ingredient(key, &event_target_value(&ev)))
                                    }
                                >
                                    <option value="">"Selecciona ingrediente"</option>
                                    <For
                                        each=move || store.ingredients().get()
                                        key=|ingredient| ingredient.id
                                        children=move |ingredient| {
                                            view! {
                                                <option value=ingredient.id.to_string()>
                                                    {ingredient.name.clone()}
                                                </option>
                                            }
                                        }
                                    />
                                </select>
                                <input
                                    type="number"
                                    min="0.1"
                                    step="0.1"
                                    placeholder="g por 1kg"
                                    prop:value=move || form.with(|f| f.grams_for(key))
                                    on:input=move |ev| {
                                        form.update(|f| f.set_grams(key, &event_target_value(&ev)))
                                    }
                                />
                            </div>
                        }
                    }
                />
            </div>

            <div class="recipe-form-actions">
                <button type="button" on:click=move |_| form.update(|f| f.add_row("", ""))>
                    "Añadir ingrediente"
                </button>
                <button type="submit" prop:disabled=move || saving.get()>
                    "Guardar receta"
                </button>
            </div>
        </form>
    }
}
