//! Item Detail Page Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::browse::FetchState;
use crate::context::{AppContext, Route};
use crate::models::Item;
use crate::store::{store_is_favorite, store_toggle_favorite, use_app_store};

fn is_owner(ctx: &AppContext, owner_id: &str) -> bool {
    ctx.current_user
        .get()
        .map(|user| user.id == owner_id)
        .unwrap_or(false)
}

#[component]
pub fn ItemDetailPage(item_id: String) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = use_app_store();

    let (item, set_item) = signal(Option::<Item>::None);
    let (fetch_state, set_fetch_state) = signal(FetchState::Loading);
    let (selected_image, set_selected_image) = signal(0usize);

    let fetch_id = item_id.clone();
    Effect::new(move |_| {
        let id = fetch_id.clone();
        spawn_local(async move {
            match api::get_item(&id).await {
                Ok(fetched) => {
                    set_item.set(Some(fetched));
                    set_fetch_state.set(FetchState::Ready);
                }
                Err(err) => set_fetch_state.set(FetchState::Error(err.to_string())),
            }
        });
    });

    let heart_id = item_id.clone();
    let is_favorite = move || store_is_favorite(&store, &heart_id);
    let toggle_id = item_id.clone();

    view! {
        <div class="item-detail-page">
            <button class="back-link" on:click=move |_| ctx.navigate(Route::Browse)>
                "< Back to Browse"
            </button>

            {move || match fetch_state.get() {
                FetchState::Loading => view! {
                    <div class="loading-state">"Loading item..."</div>
                }.into_any(),
                FetchState::Error(message) => view! {
                    <div class="error-state">
                        <p>"Failed to load item: " {message}</p>
                    </div>
                }.into_any(),
                FetchState::Ready => {
                    let Some(item) = item.get() else {
                        return view! { <div class="error-state">"Item not found"</div> }.into_any();
                    };
                    let images = if item.images.is_empty() {
                        vec!["/placeholder.svg".to_string()]
                    } else {
                        item.images.clone()
                    };
                    let thumbnails = images.clone();
                    let main_image = {
                        let images = images.clone();
                        move || {
                            let index = selected_image.get().min(images.len() - 1);
                            images[index].clone()
                        }
                    };
                    let owner_id = item.user.id.clone();
                    let owner_name = item
                        .user
                        .display_name
                        .clone()
                        .unwrap_or_else(|| "Anonymous".to_string());
                    let toggle_id = toggle_id.clone();
                    let is_favorite = is_favorite.clone();

                    view! {
                        <div class="item-detail">
                            <div class="detail-gallery">
                                <img class="main-image" src=main_image alt=item.title.clone() />
                                <div class="thumbnail-row">
                                    {thumbnails.into_iter().enumerate().map(|(index, src)| view! {
                                        <img
                                            class=move || if selected_image.get() == index {
                                                "thumbnail active"
                                            } else {
                                                "thumbnail"
                                            }
                                            src=src
                                            on:click=move |_| set_selected_image.set(index)
                                        />
                                    }).collect_view()}
                                </div>
                            </div>

                            <div class="detail-body">
                                <div class="detail-title-row">
                                    <h1>{item.title.clone()}</h1>
                                    <button
                                        class=move || if is_favorite() { "heart-btn active" } else { "heart-btn" }
                                        on:click=move |_| store_toggle_favorite(&store, &toggle_id)
                                    >
                                        "\u{2665}"
                                    </button>
                                </div>

                                {item.brand.clone().map(|brand| view! {
                                    <p class="detail-brand">{brand}</p>
                                })}

                                <div class="listing-badges">
                                    <span class="badge">{item.size.clone()}</span>
                                    <span class="badge outline">{item.condition.clone()}</span>
                                    <span class="badge outline">{item.category.clone()}</span>
                                    {(item.status == "claimed").then(|| view! {
                                        <span class="badge claimed">"Claimed"</span>
                                    })}
                                </div>

                                <p class="detail-description">{item.description.clone()}</p>

                                {item.color.clone().map(|color| view! {
                                    <p>"Color: " {color}</p>
                                })}

                                {(item.measurement_chest.is_some()
                                    || item.measurement_length.is_some()
                                    || item.measurement_sleeves.is_some())
                                    .then(|| view! {
                                        <div class="measurements">
                                            <h3>"Measurements"</h3>
                                            {item.measurement_chest.clone().map(|m| view! {
                                                <p>"Chest: " {m}</p>
                                            })}
                                            {item.measurement_length.clone().map(|m| view! {
                                                <p>"Length: " {m}</p>
                                            })}
                                            {item.measurement_sleeves.clone().map(|m| view! {
                                                <p>"Sleeves: " {m}</p>
                                            })}
                                        </div>
                                    })}

                                <div class="pickup-info">
                                    <h3>"Pickup"</h3>
                                    <p>{item.pickup_location.clone()}</p>
                                    {item.pickup_instructions.clone().map(|text| view! {
                                        <p class="pickup-instructions">{text}</p>
                                    })}
                                    {(!item.availability.is_empty()).then(|| view! {
                                        <ul class="availability-list">
                                            {item.availability.iter().map(|slot| view! {
                                                <li>{slot.clone()}</li>
                                            }).collect_view()}
                                        </ul>
                                    })}
                                </div>

                                <div class="detail-owner">
                                    <span
                                        class="owner-link"
                                        on:click=move |_| {
                                            ctx.navigate(Route::Profile(Some(owner_id.clone())));
                                        }
                                    >
                                        "Shared by " {owner_name}
                                    </span>
                                </div>

                                <p class="detail-meta">
                                    {format!("{} views | {} interested", item.views, item.interested_count)}
                                </p>

                                {is_owner(&ctx, &item.user_id).then(|| {
                                    let delete_id = item.id.clone();
                                    view! {
                                        <button
                                            class="danger"
                                            on:click=move |_| {
                                                let id = delete_id.clone();
                                                let confirmed = web_sys::window()
                                                    .and_then(|win| {
                                                        win.confirm_with_message("Delete this listing?").ok()
                                                    })
                                                    .unwrap_or(false);
                                                if !confirmed {
                                                    return;
                                                }
                                                spawn_local(async move {
                                                    match api::delete_item(&id).await {
                                                        Ok(()) => ctx.navigate(Route::MyItems),
                                                        Err(err) => web_sys::console::warn_1(
                                                            &format!("[ITEM] delete failed: {err}").into(),
                                                        ),
                                                    }
                                                });
                                            }
                                        >
                                            "Delete Listing"
                                        </button>
                                    }
                                })}
                            </div>
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}
