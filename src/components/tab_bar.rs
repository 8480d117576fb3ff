//! Tab Bar Component
//!
//! Pill navigation between the two views. Exactly one pill and one
//! panel are active at any time; activation is idempotent.

use leptos::prelude::*;

use crate::context::{AppContext, Tab};

#[component]
pub fn TabBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <nav class="tab-bar">
            {Tab::ALL
                .into_iter()
                .map(|tab| {
                    view! {
                        <button
                            class=move || tab.pill_class(ctx.active_tab.get())
                            on:click=move |_| ctx.active_tab.set(tab)
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
