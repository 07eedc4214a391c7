use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::{use_auth, AuthState};

#[component]
pub fn TopHeader() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let (auth_state, set_auth_state) = use_auth();

    let user_label = move || {
        auth_state
            .get()
            .user
            .map(|user| format!("{} · {}", user.name, user.company_name))
            .unwrap_or_default()
    };

    let logout = move |_| {
        spawn_local(async move {
            // Session cookies are cleared server-side; local state just
            // falls back to the login screen.
            let _ = crate::system::auth::api::logout().await;
            set_auth_state.set(AuthState::default());
        });
    };

    view! {
        <header class="top-header">
            <div class="top-header__left">
                <button
                    class="top-header__toggle"
                    title="Toggle sidebar"
                    on:click=move |_| tabs_store.toggle_left()
                >
                    {icon("menu")}
                </button>
                <span class="top-header__brand">"Fleet Console"</span>
            </div>
            <div class="top-header__right">
                <span class="top-header__user">{user_label}</span>
                <button class="top-header__logout" title="Sign out" on:click=logout>
                    {icon("log-out")}
                </button>
            </div>
        </header>
    }
}
