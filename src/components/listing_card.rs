//! Listing Card Component
//!
//! One listing in the browse grid: image, badges, pickup spot, owner link
//! and the local-only heart toggle.

use leptos::prelude::*;

use crate::context::{AppContext, Route};
use crate::models::Item;
use crate::store::{store_is_favorite, store_toggle_favorite, use_app_store};

#[component]
pub fn ListingCard(item: Item) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = use_app_store();

    let id = item.id.clone();
    let detail_id = item.id.clone();
    let owner_id = item.user.id.clone();
    let owner_name = item
        .user
        .display_name
        .clone()
        .unwrap_or_else(|| "Anonymous".to_string());
    let image = item
        .images
        .first()
        .cloned()
        .unwrap_or_else(|| "/placeholder.svg".to_string());

    let is_favorite = {
        let id = id.clone();
        move || store_is_favorite(&store, &id)
    };

    view! {
        <div
            class="listing-card"
            on:click=move |_| ctx.navigate(Route::ItemDetail(detail_id.clone()))
        >
            <div class="listing-image">
                <img src=image alt=item.title.clone() />
                <button
                    class=move || if is_favorite() { "heart-btn active" } else { "heart-btn" }
                    on:click=move |ev| {
                        ev.stop_propagation();
                        store_toggle_favorite(&store, &id);
                    }
                >
                    "\u{2665}"
                </button>
            </div>
            <div class="listing-body">
                <div class="listing-title-row">
                    <h3>{item.title.clone()}</h3>
                    <span class="badge">{item.size.clone()}</span>
                </div>
                <p class="listing-description">{item.description.clone()}</p>
                <div class="listing-badges">
                    <span class="badge outline">{item.condition.clone()}</span>
                    <span class="badge outline">{item.category.clone()}</span>
                </div>
                <div class="listing-meta">
                    <span class="pickup-location">{item.pickup_location.clone()}</span>
                    <span
                        class="owner-link"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            ctx.navigate(Route::Profile(Some(owner_id.clone())));
                        }
                    >
                        {owner_name}
                    </span>
                </div>
            </div>
        </div>
    }
}
