//! Application Root
//!
//! Wires up the shared context, restores the session once on startup and
//! switches pages on the route signal.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{
    BrowsePage, ItemDetailPage, LoginPage, MyItemsPage, NavBar, PostPage, PostSuccessView,
    ProfilePage, SignUpPage,
};
use crate::context::{AppContext, Route};
use crate::models::User;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let route = signal(Route::Browse);
    let current_user = signal(Option::<User>::None);
    let auth_loading = signal(true);

    let ctx = AppContext::new(route, current_user, auth_loading);
    provide_context(ctx);
    provide_context(Store::new(AppState::default()));

    // One-time session restore
    Effect::new(move |_| {
        spawn_local(async move {
            ctx.check_auth().await;
        });
    });

    view! {
        <div class="app">
            <NavBar />
            <main>
                {move || match ctx.route.get() {
                    Route::Browse => view! { <BrowsePage /> }.into_any(),
                    Route::ItemDetail(id) => view! { <ItemDetailPage item_id=id /> }.into_any(),
                    Route::Post => view! { <PostPage /> }.into_any(),
                    Route::PostSuccess => view! { <PostSuccessView /> }.into_any(),
                    Route::Login => view! { <LoginPage /> }.into_any(),
                    Route::SignUp => view! { <SignUpPage /> }.into_any(),
                    Route::Profile(user_id) => view! { <ProfilePage user_id=user_id /> }.into_any(),
                    Route::MyItems => view! { <MyItemsPage /> }.into_any(),
                }}
            </main>
        </div>
    }
}
