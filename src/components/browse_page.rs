//! Browse Page Component
//!
//! The listing browse pipeline: one collection fetch, local filters over the
//! fetched set, and an incrementally revealed grid (button + scroll sentinel).

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::api;
use crate::browse::{apply_filters, FetchState, FilterState, PaginationWindow, SortOrder};
use crate::components::{ListingCard, LoadMoreSentinel};
use crate::context::{AppContext, Route};
use crate::models::{Item, ItemFilters};

const CATEGORY_OPTIONS: &[(&str, &str)] = &[
    ("jackets", "Jackets"),
    ("dresses", "Dresses"),
    ("shoes", "Shoes"),
    ("sweaters", "Sweaters"),
    ("accessories", "Accessories"),
    ("tops", "Tops"),
    ("bottoms", "Bottoms"),
    ("activewear", "Activewear"),
];

const SIZE_OPTIONS: &[(&str, &str)] = &[
    ("xs", "XS"),
    ("s", "S"),
    ("m", "M"),
    ("l", "L"),
    ("xl", "XL"),
    ("7", "7"),
    ("8", "8"),
    ("9", "9"),
    ("10", "10"),
    ("30", "30"),
    ("32", "32"),
    ("one size", "One Size"),
];

const CONDITION_OPTIONS: &[(&str, &str)] = &[
    ("like new", "Like New"),
    ("excellent", "Excellent"),
    ("very good", "Very Good"),
    ("good", "Good"),
];

/// Small pause before revealing the next page so the spinner is visible
const LOAD_MORE_DELAY_MS: i32 = 400;

#[component]
pub fn BrowsePage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let (all_listings, set_all_listings) = signal(Vec::<Item>::new());
    let (fetch_state, set_fetch_state) = signal(FetchState::Loading);
    let (filters, set_filters) = signal(FilterState::default());
    let (window, set_window) = signal(PaginationWindow::new());

    // One collection fetch per page visit
    Effect::new(move |_| {
        spawn_local(async move {
            match api::get_items(&ItemFilters::default()).await {
                Ok(items) => {
                    web_sys::console::log_1(
                        &format!("[BROWSE] Loaded {} listings", items.len()).into(),
                    );
                    set_all_listings.set(items);
                    set_fetch_state.set(FetchState::Ready);
                }
                Err(err) => set_fetch_state.set(FetchState::Error(err.to_string())),
            }
        });
    });

    // Filtered subset, recomputed whenever the set or any filter changes
    let filtered = Memo::new(move |_| apply_filters(&all_listings.get(), &filters.get()));

    // Any filter change rewinds the window to the first page
    Effect::new(move |_| {
        let _ = filters.get();
        set_window.update(|w| w.reset());
    });

    let visible = Memo::new(move |_| {
        let filtered = filtered.get();
        let count = window.get().visible_count(filtered.len());
        filtered.iter().take(count).cloned().collect::<Vec<_>>()
    });

    let has_more = move || window.get().has_more(filtered.get().len());
    let is_loading_more = move || window.get().is_loading_more();

    let load_more = move || {
        let len = filtered.get_untracked().len();
        let mut started = false;
        set_window.update(|w| started = w.start_load_more(len));
        if !started {
            return;
        }
        let cb = Closure::<dyn FnMut()>::new(move || {
            let len = filtered.get_untracked().len();
            set_window.update(|w| w.complete_load_more(len));
        });
        if let Some(win) = web_sys::window() {
            let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
                cb.as_ref().unchecked_ref(),
                LOAD_MORE_DELAY_MS,
            );
        }
        cb.forget();
    };

    let sentinel_active =
        Signal::derive(move || has_more() && !is_loading_more());

    view! {
        <div class="browse-page">
            <div class="page-header">
                <h1>"Browse Clothes"</h1>
                <p>"Discover clothes shared by your community"</p>
            </div>

            <div class="filter-bar">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search for clothes, brands, or styles..."
                    prop:value=move || filters.get().search
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        set_filters.update(|f| f.search = value);
                    }
                />
                <select on:change=move |ev| {
                    let value = event_target_value(&ev);
                    set_filters.update(|f| f.category = value);
                }>
                    <option value="all">"All Categories"</option>
                    {CATEGORY_OPTIONS.iter().map(|(value, label)| view! {
                        <option value=*value>{*label}</option>
                    }).collect_view()}
                </select>
                <select on:change=move |ev| {
                    let value = event_target_value(&ev);
                    set_filters.update(|f| f.size = value);
                }>
                    <option value="all">"All Sizes"</option>
                    {SIZE_OPTIONS.iter().map(|(value, label)| view! {
                        <option value=*value>{*label}</option>
                    }).collect_view()}
                </select>
                <select on:change=move |ev| {
                    let value = event_target_value(&ev);
                    set_filters.update(|f| f.condition = value);
                }>
                    <option value="all">"Any Condition"</option>
                    {CONDITION_OPTIONS.iter().map(|(value, label)| view! {
                        <option value=*value>{*label}</option>
                    }).collect_view()}
                </select>
                <select on:change=move |ev| {
                    let sort = match event_target_value(&ev).as_str() {
                        "distance" => SortOrder::Closest,
                        "condition" => SortOrder::BestCondition,
                        _ => SortOrder::Newest,
                    };
                    set_filters.update(|f| f.sort = sort);
                }>
                    <option value="newest">"Newest First"</option>
                    <option value="distance">"Closest First"</option>
                    <option value="condition">"Best Condition"</option>
                </select>
            </div>

            <p class="results-count">
                {move || match fetch_state.get() {
                    FetchState::Loading => "Loading...".to_string(),
                    _ => format!(
                        "Showing {} of {} items",
                        visible.get().len(),
                        filtered.get().len()
                    ),
                }}
            </p>

            {move || match fetch_state.get() {
                FetchState::Loading => view! {
                    <div class="loading-state">"Loading listings..."</div>
                }.into_any(),
                FetchState::Error(message) => view! {
                    <div class="error-state">
                        <p>"Failed to load listings: " {message}</p>
                    </div>
                }.into_any(),
                FetchState::Ready => view! {
                    <div class="listing-grid">
                        <For
                            each=move || visible.get()
                            key=|item| item.id.clone()
                            children=move |item| view! { <ListingCard item=item /> }
                        />
                    </div>

                    {move || (visible.get().is_empty()).then(|| view! {
                        <div class="empty-state">
                            <p>
                                {if filters.get().is_default() {
                                    "No listings found. Be the first to share!"
                                } else {
                                    "No items match your search. Try adjusting your filters."
                                }}
                            </p>
                            <button on:click=move |_| ctx.navigate(Route::Post)>
                                "Post an Item"
                            </button>
                        </div>
                    })}

                    {move || has_more().then(|| view! {
                        <div class="load-more-row">
                            <button
                                disabled=is_loading_more
                                on:click=move |_| load_more()
                            >
                                {move || if is_loading_more() { "Loading..." } else { "Load More Items" }}
                            </button>
                        </div>
                    })}

                    <LoadMoreSentinel
                        on_visible=Callback::new(move |_| load_more())
                        active=sentinel_active
                    />
                }.into_any(),
            }}
        </div>
    }
}
