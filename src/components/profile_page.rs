//! Profile Page Component
//!
//! Shows a user's profile, stats and reviews. The signed-in user gets an
//! inline edit form; visitors get a "leave a review" form instead.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::browse::FetchState;
use crate::context::{AppContext, Route};
use crate::models::{CreateReviewData, Review, UpdateProfileData, User, UserStats};

const REVIEWS_PER_PAGE: u32 = 5;

#[component]
pub fn ProfilePage(user_id: Option<String>) -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    // None means "my profile"; resolve it against the session
    let target_id = match user_id {
        Some(id) => id,
        None => match ctx.current_user.get_untracked() {
            Some(user) => user.id,
            None => {
                return view! {
                    <div class="auth-required">
                        <p>"Log in to see your profile."</p>
                        <button on:click=move |_| ctx.navigate(Route::Login)>"Log In"</button>
                    </div>
                }
                .into_any();
            }
        },
    };

    let is_own_profile = ctx
        .current_user
        .get_untracked()
        .map(|user| user.id == target_id)
        .unwrap_or(false);

    let (profile, set_profile) = signal(Option::<User>::None);
    let (stats, set_stats) = signal(UserStats::default());
    let (fetch_state, set_fetch_state) = signal(FetchState::Loading);
    let (reviews, set_reviews) = signal(Vec::<Review>::new());
    let (review_page, set_review_page) = signal(1u32);
    let (review_pages_total, set_review_pages_total) = signal(1u32);

    let fetch_id = target_id.clone();
    Effect::new(move |_| {
        let id = fetch_id.clone();
        spawn_local(async move {
            match api::get_user(&id).await {
                Ok(user) => {
                    set_profile.set(Some(user));
                    set_fetch_state.set(FetchState::Ready);
                }
                Err(err) => {
                    set_fetch_state.set(FetchState::Error(err.to_string()));
                    return;
                }
            }
            if let Ok(fetched) = api::get_user_stats(&id).await {
                set_stats.set(fetched);
            }
            match api::get_user_reviews(&id, 1, REVIEWS_PER_PAGE).await {
                Ok(page) => {
                    set_reviews.set(page.reviews);
                    set_review_pages_total.set(page.total_pages.max(1));
                }
                Err(err) => {
                    web_sys::console::warn_1(
                        &format!("[PROFILE] reviews fetch failed: {err}").into(),
                    );
                }
            }
        });
    });

    // StoredValue keeps the handler Copy so the view can reuse it
    let more_reviews_id = StoredValue::new(target_id.clone());
    let load_more_reviews = move || {
        let id = more_reviews_id.get_value();
        let next = review_page.get_untracked() + 1;
        spawn_local(async move {
            match api::get_user_reviews(&id, next, REVIEWS_PER_PAGE).await {
                Ok(page) => {
                    set_reviews.update(|all| all.extend(page.reviews));
                    set_review_page.set(next);
                    set_review_pages_total.set(page.total_pages.max(1));
                }
                Err(err) => {
                    web_sys::console::warn_1(
                        &format!("[PROFILE] reviews fetch failed: {err}").into(),
                    );
                }
            }
        });
    };

    let review_target_id = target_id.clone();
    let can_review = move || ctx.is_authenticated() && !is_own_profile;
    let my_id = move || ctx.current_user.get().map(|user| user.id).unwrap_or_default();

    view! {
        <div class="profile-page">
            {move || match fetch_state.get() {
                FetchState::Loading => view! {
                    <div class="loading-state">"Loading profile..."</div>
                }.into_any(),
                FetchState::Error(message) => view! {
                    <div class="error-state">
                        <p>"Failed to load profile: " {message}</p>
                    </div>
                }.into_any(),
                FetchState::Ready => {
                    let Some(user) = profile.get() else {
                        return view! { <div class="error-state">"Profile not found"</div> }.into_any();
                    };
                    view! {
                        <div class="profile-header">
                            <img
                                class="avatar"
                                src=user.avatar.clone().unwrap_or_else(|| "/placeholder-avatar.svg".to_string())
                                alt=user.shown_name()
                            />
                            <div class="profile-identity">
                                <h1>{user.shown_name()}</h1>
                                {user.location.clone().map(|location| view! {
                                    <p class="profile-location">{location}</p>
                                })}
                                {user.bio.clone().map(|bio| view! {
                                    <p class="profile-bio">{bio}</p>
                                })}
                                {(!user.badges.is_empty()).then(|| view! {
                                    <div class="profile-badges">
                                        {user.badges.iter().map(|badge| view! {
                                            <span class="badge">{badge.clone()}</span>
                                        }).collect_view()}
                                    </div>
                                })}
                            </div>
                        </div>

                        <div class="profile-stats">
                            <div class="stat">
                                <span class="stat-value">{move || stats.get().items_shared_count}</span>
                                <span class="stat-label">"Items Shared"</span>
                            </div>
                            <div class="stat">
                                <span class="stat-value">{move || stats.get().items_claimed_count}</span>
                                <span class="stat-label">"Items Claimed"</span>
                            </div>
                            <div class="stat">
                                <span class="stat-value">
                                    {move || stats.get().average_rating
                                        .map(|r| format!("{r:.1}"))
                                        .unwrap_or_else(|| "-".to_string())}
                                </span>
                                <span class="stat-label">
                                    {move || format!("Rating ({} reviews)", stats.get().review_count)}
                                </span>
                            </div>
                        </div>
                    }.into_any()
                }
            }}

            {is_own_profile.then(|| view! {
                <ProfileEditForm profile=profile />
            })}

            <div class="profile-reviews">
                <h2>"Reviews"</h2>

                {move || can_review().then(|| view! {
                    <ReviewForm
                        reviewed_user_id=review_target_id.clone()
                        on_created=Callback::new(move |review: Review| {
                            set_reviews.update(|all| all.insert(0, review));
                        })
                    />
                })}

                {move || reviews.get().is_empty().then(|| view! {
                    <p class="empty-state">"No reviews yet."</p>
                })}

                <For
                    each=move || reviews.get()
                    key=|review| review.id.clone()
                    children=move |review| {
                        let mine = review.reviewer_id == my_id();
                        view! {
                            <ReviewCard
                                review=review
                                mine=mine
                                on_updated=Callback::new(move |updated: Review| {
                                    set_reviews.update(|all| {
                                        if let Some(slot) = all.iter_mut().find(|r| r.id == updated.id) {
                                            *slot = updated;
                                        }
                                    });
                                })
                                on_deleted=Callback::new(move |id: String| {
                                    set_reviews.update(|all| all.retain(|r| r.id != id));
                                })
                            />
                        }
                    }
                />

                {move || (review_page.get() < review_pages_total.get()).then(|| view! {
                    <button class="load-more" on:click=move |_| load_more_reviews()>
                        "More Reviews"
                    </button>
                })}
            </div>
        </div>
    }
    .into_any()
}

/// Inline editor for the signed-in user's own profile
#[component]
fn ProfileEditForm(profile: ReadSignal<Option<User>>) -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let (editing, set_editing) = signal(false);
    let (display_name, set_display_name) = signal(String::new());
    let (bio, set_bio) = signal(String::new());
    let (location, set_location) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (saving, set_saving) = signal(false);

    let open = move |_: web_sys::MouseEvent| {
        if let Some(user) = profile.get_untracked() {
            set_display_name.set(user.display_name.unwrap_or_default());
            set_bio.set(user.bio.unwrap_or_default());
            set_location.set(user.location.unwrap_or_default());
            set_phone.set(user.phone.unwrap_or_default());
        }
        set_error.set(None);
        set_editing.set(true);
    };

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        set_saving.set(true);
        set_error.set(None);
        let data = UpdateProfileData {
            display_name: non_empty(&display_name.get_untracked()),
            bio: non_empty(&bio.get_untracked()),
            location: non_empty(&location.get_untracked()),
            phone: non_empty(&phone.get_untracked()),
            ..Default::default()
        };
        spawn_local(async move {
            match api::update_profile(&data).await {
                Ok(user) => {
                    ctx.set_user(user);
                    set_editing.set(false);
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="profile-edit">
            <Show
                when=move || editing.get()
                fallback=move || view! {
                    <button on:click=open>"Edit Profile"</button>
                }
            >
                <form on:submit=save>
                    {move || error.get().map(|message| view! {
                        <div class="form-error">{message}</div>
                    })}
                    <label>
                        "Display Name"
                        <input
                            type="text"
                            prop:value=display_name
                            on:input=move |ev| set_display_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Bio"
                        <textarea
                            prop:value=bio
                            on:input=move |ev| set_bio.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <label>
                        "Location"
                        <input
                            type="text"
                            prop:value=location
                            on:input=move |ev| set_location.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Phone"
                        <input
                            type="tel"
                            prop:value=phone
                            on:input=move |ev| set_phone.set(event_target_value(&ev))
                        />
                    </label>
                    <div class="form-actions">
                        <button type="button" on:click=move |_| set_editing.set(false)>
                            "Cancel"
                        </button>
                        <button type="submit" disabled=saving>
                            {move || if saving.get() { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </form>
            </Show>
        </div>
    }
}

/// One review row; its author can edit or delete it in place
#[component]
fn ReviewCard(
    review: Review,
    mine: bool,
    on_updated: Callback<Review>,
    on_deleted: Callback<String>,
) -> impl IntoView {
    let (rating, set_rating) = signal(review.rating);
    let (comment, set_comment) = signal(review.comment.clone());
    let (editing, set_editing) = signal(false);
    let (draft_rating, set_draft_rating) = signal(review.rating);
    let (draft_comment, set_draft_comment) = signal(review.comment.clone());
    let (saving, set_saving) = signal(false);

    let review_id = StoredValue::new(review.id.clone());
    let reviewer_name = review
        .reviewer
        .display_name
        .clone()
        .unwrap_or_else(|| "Anonymous".to_string());

    let open_edit = move |_: web_sys::MouseEvent| {
        set_draft_rating.set(rating.get_untracked());
        set_draft_comment.set(comment.get_untracked());
        set_editing.set(true);
    };

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() || draft_comment.get_untracked().trim().is_empty() {
            return;
        }
        set_saving.set(true);
        spawn_local(async move {
            let id = review_id.get_value();
            let text = draft_comment.get_untracked().trim().to_string();
            match api::update_review(&id, draft_rating.get_untracked(), &text).await {
                Ok(updated) => {
                    set_rating.set(updated.rating);
                    set_comment.set(updated.comment.clone());
                    set_editing.set(false);
                    on_updated.run(updated);
                }
                Err(err) => web_sys::console::warn_1(
                    &format!("[PROFILE] update review failed: {err}").into(),
                ),
            }
            set_saving.set(false);
        });
    };

    let delete = move |_: web_sys::MouseEvent| {
        spawn_local(async move {
            let id = review_id.get_value();
            match api::delete_review(&id).await {
                Ok(()) => on_deleted.run(id),
                Err(err) => web_sys::console::warn_1(
                    &format!("[PROFILE] delete review failed: {err}").into(),
                ),
            }
        });
    };

    view! {
        <div class="review-card">
            <Show
                when=move || editing.get()
                fallback=move || view! {
                    <div class="review-header">
                        <span class="review-stars">
                            {move || "\u{2605}".repeat(rating.get() as usize)}
                        </span>
                        <span class="reviewer-name">{reviewer_name.clone()}</span>
                        {mine.then(|| view! {
                            <button class="review-edit" on:click=open_edit>"Edit"</button>
                            <button class="review-delete" on:click=delete>"Delete"</button>
                        })}
                    </div>
                    <p class="review-comment">{move || comment.get()}</p>
                }
            >
                <form class="review-form" on:submit=save>
                    <select on:change=move |ev| {
                        if let Ok(value) = event_target_value(&ev).parse::<u8>() {
                            set_draft_rating.set(value.clamp(1, 5));
                        }
                    }>
                        {(1..=5u8).rev().map(|value| view! {
                            <option value=value.to_string() selected=move || draft_rating.get() == value>
                                {"\u{2605}".repeat(value as usize)}
                            </option>
                        }).collect_view()}
                    </select>
                    <textarea
                        prop:value=draft_comment
                        on:input=move |ev| set_draft_comment.set(event_target_value(&ev))
                    ></textarea>
                    <div class="form-actions">
                        <button type="button" on:click=move |_| set_editing.set(false)>
                            "Cancel"
                        </button>
                        <button type="submit" disabled=saving>
                            {move || if saving.get() { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </form>
            </Show>
        </div>
    }
}

/// Star-rating + comment form for reviewing another user
#[component]
fn ReviewForm(reviewed_user_id: String, on_created: Callback<Review>) -> impl IntoView {
    let (rating, set_rating) = signal(5u8);
    let (comment, set_comment) = signal(String::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (submitting, set_submitting) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() || comment.get_untracked().trim().is_empty() {
            return;
        }
        set_submitting.set(true);
        set_error.set(None);
        let data = CreateReviewData {
            rating: rating.get_untracked(),
            comment: comment.get_untracked().trim().to_string(),
            reviewed_user_id: reviewed_user_id.clone(),
            item_id: None,
        };
        spawn_local(async move {
            match api::create_review(&data).await {
                Ok(review) => {
                    set_comment.set(String::new());
                    on_created.run(review);
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form class="review-form" on:submit=submit>
            {move || error.get().map(|message| view! {
                <div class="form-error">{message}</div>
            })}
            <label>
                "Rating"
                <select on:change=move |ev| {
                    if let Ok(value) = event_target_value(&ev).parse::<u8>() {
                        set_rating.set(value.clamp(1, 5));
                    }
                }>
                    {(1..=5u8).rev().map(|value| view! {
                        <option value=value.to_string() selected=move || rating.get() == value>
                            {"\u{2605}".repeat(value as usize)}
                        </option>
                    }).collect_view()}
                </select>
            </label>
            <label>
                "Comment"
                <textarea
                    placeholder="How was your exchange?"
                    prop:value=comment
                    on:input=move |ev| set_comment.set(event_target_value(&ev))
                ></textarea>
            </label>
            <button type="submit" disabled=submitting>
                {move || if submitting.get() { "Posting..." } else { "Post Review" }}
            </button>
        </form>
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
