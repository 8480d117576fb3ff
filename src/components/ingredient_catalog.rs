//! Ingredient Catalog Component
//!
//! Catalog table with order selector, creation form and per-row
//! delete. One row per ingredient, in the order the collaborator
//! returned them.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, IngredientOrder};
use crate::components::DeleteConfirmButton;
use crate::context::AppContext;
use crate::form::normalize_ingredient_name;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn IngredientCatalog() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (new_name, set_new_name) = signal(String::new());
    let (creating, set_creating) = signal(false);
    let (deleting, set_deleting) = signal(false);

    let create_ingredient = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if creating.get() {
            return;
        }
        let Some(name) = normalize_ingredient_name(&new_name.get()) else {
            ctx.error("Escribe un nombre de ingrediente");
            return;
        };

        set_creating.set(true);
        spawn_local(async move {
            match api::create_ingredient(&name).await {
                Ok(created) => {
                    web_sys::console::log_1(
                        &format!("[Catalog] Ingrediente #{} creado", created.id).into(),
                    );
                    set_new_name.set(String::new());
                    ctx.clear_notice();
                    ctx.reload_ingredients();
                }
                Err(msg) => ctx.error(msg),
            }
            set_creating.set(false);
        });
    };

    let on_order_change = move |ev: web_sys::Event| {
        // The order signal feeds the catalog effect, so this refreshes
        ctx.ingredient_order
            .set(IngredientOrder::from_key(&event_target_value(&ev)));
    };

    view! {
        <div class="ingredient-catalog">
            <div class="catalog-toolbar">
                <form class="ingredient-add-form" on:submit=create_ingredient>
                    <input
                        type="text"
                        placeholder="Nuevo ingrediente"
                        prop:value=move || new_name.get()
                        on:input=move |ev| set_new_name.set(event_target_value(&ev))
                    />
                    <button type="submit" prop:disabled=move || creating.get()>
                        "Añadir"
                    </button>
                </form>

                <select class="order-select" on:change=on_order_change>
                    <option
                        value="asc"
                        selected=move || ctx.ingredient_order.get() == IngredientOrder::NameAsc
                    >
                        "Nombre A-Z"
                    </option>
                    <option
                        value="desc"
                        selected=move || ctx.ingredient_order.get() == IngredientOrder::NameDesc
                    >
                        "Nombre Z-A"
                    </option>
                </select>
            </div>

            <table class="ingredient-table">
                <thead>
                    <tr>
                        <th>"Ingrediente"</th>
                        <th>"Presente en"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || store.ingredients().get()
                        key=|ingredient| ingredient.id
                        children=move |ingredient| {
                            let id = ingredient.id;
                            let present_in = if ingredient.present_in.is_empty() {
                                "-".to_string()
                            } else {
                                ingredient.present_in.join(", ")
                            };

                            let delete_ingredient = Callback::new(move |_: ()| {
                                if deleting.get() {
                                    return;
                                }
                                set_deleting.set(true);
                                spawn_local(async move {
                                    match api::delete_ingredient(id).await {
                                        Ok(()) => {
                                            ctx.clear_notice();
                                            ctx.reload_ingredients();
                                        }
                                        Err(msg) => {
                                            web_sys::console::error_1(
                                                &format!("[Catalog] Borrado #{} rechazado: {}", id, msg)
                                                    .into(),
                                            );
                                            ctx.error(msg);
                                        }
                                    }
                                    set_deleting.set(false);
                                });
                            });

                            view! {
                                <tr data-ingredient=id.to_string()>
                                    <td>{ingredient.name.clone()}</td>
                                    <td>{present_in}</td>
                                    <td>
                                        <DeleteConfirmButton
                                            button_class="danger"
                                            on_confirm=delete_ingredient
                                        />
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
