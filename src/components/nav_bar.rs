//! Navigation Bar Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::{AppContext, Route};

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let user_name = move || {
        ctx.current_user
            .get()
            .map(|user| user.shown_name())
            .unwrap_or_default()
    };

    view! {
        <nav class="nav-bar">
            <span class="nav-logo" on:click=move |_| ctx.navigate(Route::Browse)>
                "ClothShare"
            </span>
            <div class="nav-links">
                <button on:click=move |_| ctx.navigate(Route::Browse)>"Browse"</button>
                <Show when=move || ctx.is_authenticated()>
                    <button on:click=move |_| ctx.navigate(Route::Post)>"Share an Item"</button>
                    <button on:click=move |_| ctx.navigate(Route::MyItems)>"My Items"</button>
                    <button on:click=move |_| ctx.navigate(Route::Profile(None))>
                        {user_name}
                    </button>
                    <button on:click=move |_| {
                        spawn_local(async move { ctx.logout().await });
                    }>
                        "Log Out"
                    </button>
                </Show>
                <Show when=move || !ctx.is_authenticated() && !ctx.auth_loading.get()>
                    <button on:click=move |_| ctx.navigate(Route::Login)>"Log In"</button>
                    <button class="primary" on:click=move |_| ctx.navigate(Route::SignUp)>
                        "Sign Up"
                    </button>
                </Show>
            </div>
        </nav>
    }
}
