//! My Items Page Component
//!
//! The signed-in user's own listings, with claim-status toggles and delete.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::browse::FetchState;
use crate::context::{AppContext, Route};
use crate::models::{Item, UpdateItemData};

#[component]
pub fn MyItemsPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    if !ctx.is_authenticated() {
        return view! {
            <div class="auth-required">
                <p>"Log in to manage your listings."</p>
                <button on:click=move |_| ctx.navigate(Route::Login)>"Log In"</button>
            </div>
        }
        .into_any();
    }

    let (items, set_items) = signal(Vec::<Item>::new());
    let (fetch_state, set_fetch_state) = signal(FetchState::Loading);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::get_my_items().await {
                Ok(fetched) => {
                    set_items.set(fetched);
                    set_fetch_state.set(FetchState::Ready);
                }
                Err(err) => set_fetch_state.set(FetchState::Error(err.to_string())),
            }
        });
    });

    let set_status = move |id: String, status: &'static str| {
        spawn_local(async move {
            let data = UpdateItemData {
                status: Some(status.to_string()),
                ..Default::default()
            };
            match api::update_item(&id, &data).await {
                Ok(updated) => set_items.update(|all| {
                    if let Some(slot) = all.iter_mut().find(|item| item.id == updated.id) {
                        *slot = updated;
                    }
                }),
                Err(err) => web_sys::console::warn_1(
                    &format!("[MY_ITEMS] status update failed: {err}").into(),
                ),
            }
        });
    };

    let remove = move |id: String| {
        let confirmed = web_sys::window()
            .and_then(|win| win.confirm_with_message("Delete this listing?").ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete_item(&id).await {
                Ok(()) => set_items.update(|all| all.retain(|item| item.id != id)),
                Err(err) => web_sys::console::warn_1(
                    &format!("[MY_ITEMS] delete failed: {err}").into(),
                ),
            }
        });
    };

    view! {
        <div class="my-items-page">
            <div class="page-header">
                <h1>"My Items"</h1>
                <button class="primary" on:click=move |_| ctx.navigate(Route::Post)>
                    "Share an Item"
                </button>
            </div>

            {move || match fetch_state.get() {
                FetchState::Loading => view! {
                    <div class="loading-state">"Loading your items..."</div>
                }.into_any(),
                FetchState::Error(message) => view! {
                    <div class="error-state">
                        <p>"Failed to load your items: " {message}</p>
                    </div>
                }.into_any(),
                FetchState::Ready => view! {
                    {move || items.get().is_empty().then(|| view! {
                        <div class="empty-state">
                            <p>"You haven't shared anything yet."</p>
                        </div>
                    })}

                    <For
                        each=move || items.get()
                        key=|item| (item.id.clone(), item.status.clone())
                        children=move |item| {
                            let claimed = item.status == "claimed";
                            let detail_id = item.id.clone();
                            let status_id = item.id.clone();
                            let delete_id = item.id.clone();
                            let image = item
                                .images
                                .first()
                                .cloned()
                                .unwrap_or_else(|| "/placeholder.svg".to_string());
                            view! {
                                <div class="my-item-row">
                                    <img src=image alt=item.title.clone() />
                                    <div
                                        class="my-item-summary"
                                        on:click=move |_| {
                                            ctx.navigate(Route::ItemDetail(detail_id.clone()));
                                        }
                                    >
                                        <h3>{item.title.clone()}</h3>
                                        <span class=if claimed { "badge claimed" } else { "badge" }>
                                            {if claimed { "Claimed" } else { "Available" }}
                                        </span>
                                        <p class="listing-meta">
                                            {format!(
                                                "{} views | {} interested",
                                                item.views, item.interested_count
                                            )}
                                        </p>
                                    </div>
                                    <div class="my-item-actions">
                                        <button on:click=move |_| {
                                            let next = if claimed { "available" } else { "claimed" };
                                            set_status(status_id.clone(), next);
                                        }>
                                            {if claimed { "Mark Available" } else { "Mark Claimed" }}
                                        </button>
                                        <button
                                            class="danger"
                                            on:click=move |_| remove(delete_id.clone())
                                        >
                                            "Delete"
                                        </button>
                                    </div>
                                </div>
                            }
                        }
                    />
                }.into_any(),
            }}
        </div>
    }
    .into_any()
}
