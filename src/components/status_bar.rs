//! Status Bar Component
//!
//! Renders the current notice (error or success) with a dismiss
//! button. Replaces the original blocking alerts with an inline bar.

use leptos::prelude::*;

use crate::context::{AppContext, NoticeKind};

#[component]
pub fn StatusBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        {move || {
            ctx.notice
                .get()
                .map(|notice| {
                    let class = match notice.kind {
                        NoticeKind::Error => "status-bar error",
                        NoticeKind::Success => "status-bar success",
                    };
                    view! {
                        <div class=class role="alert">
                            <span class="status-text">{notice.text}</span>
                            <button class="status-dismiss" on:click=move |_| ctx.clear_notice()>
                                "×"
                            </button>
                        </div>
                    }
                })
        }}
    }
}
