//! Post Item Page Component
//!
//! Four-step wizard for sharing an item. Step gating lives in the `wizard`
//! module; this component only wires the form signals to it.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::{AppContext, Route};
use crate::wizard::{can_advance_to, step_is_complete, PostForm, STEPS};

const CATEGORY_CHOICES: &[&str] = &[
    "Jackets", "Dresses", "Shoes", "Sweaters", "Accessories", "Tops", "Bottoms", "Activewear",
];

const SIZE_CHOICES: &[&str] = &[
    "XS", "S", "M", "L", "XL", "7", "8", "9", "10", "30", "32", "One Size",
];

const CONDITION_CHOICES: &[&str] = &["Like New", "Excellent", "Very Good", "Good"];

const AVAILABILITY_CHOICES: &[&str] = &[
    "Weekday mornings",
    "Weekday afternoons",
    "Weekday evenings",
    "Weekend mornings",
    "Weekend afternoons",
    "Weekend evenings",
];

/// Stand-in gallery; the backend stores image paths as-is
const PHOTO_CHOICES: &[&str] = &[
    "/classic-denim-jacket.png",
    "/floral-dress.png",
    "/white-sneakers.png",
    "/cozy-knit-sweater.png",
    "/leather-crossbody-bag.png",
    "/woman-red-coat.png",
];

#[component]
pub fn PostPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let form = RwSignal::new(PostForm::default());
    let (step, set_step) = signal(1usize);
    let (error, set_error) = signal(Option::<String>::None);
    let (submitting, set_submitting) = signal(false);

    let go_to = move |target: usize| {
        if can_advance_to(&form.get_untracked(), target) {
            set_step.set(target);
        }
    };

    let submit = move || {
        if submitting.get_untracked() || !step_is_complete(&form.get_untracked(), 4) {
            return;
        }
        set_error.set(None);
        set_submitting.set(true);
        let data = form.get_untracked().to_create_item();
        spawn_local(async move {
            match api::create_item(&data).await {
                Ok(item) => {
                    web_sys::console::log_1(&format!("[POST] published {}", item.id).into());
                    ctx.navigate(Route::PostSuccess);
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_submitting.set(false);
        });
    };

    let toggle_photo = move |photo: &str| {
        let photo = photo.to_string();
        form.update(|f| {
            if let Some(pos) = f.photos.iter().position(|p| *p == photo) {
                f.photos.remove(pos);
            } else {
                f.photos.push(photo);
            }
        });
    };

    let toggle_availability = move |slot: &str| {
        let slot = slot.to_string();
        form.update(|f| {
            if let Some(pos) = f.availability.iter().position(|a| *a == slot) {
                f.availability.remove(pos);
            } else {
                f.availability.push(slot);
            }
        });
    };

    view! {
        <div class="post-page">
            <h1>"Share an Item"</h1>

            <div class="wizard-steps">
                {STEPS.iter().enumerate().map(|(index, (title, subtitle))| {
                    let target = index + 1;
                    view! {
                        <button
                            class=move || if step.get() == target { "wizard-step active" } else { "wizard-step" }
                            disabled=move || !can_advance_to(&form.get(), target)
                            on:click=move |_| go_to(target)
                        >
                            <span class="step-title">{*title}</span>
                            <span class="step-subtitle">{*subtitle}</span>
                        </button>
                    }
                }).collect_view()}
            </div>

            {move || error.get().map(|message| view! {
                <div class="form-error">{message}</div>
            })}

            {move || match step.get() {
                1 => view! {
                    <div class="wizard-panel">
                        <label>
                            "Title"
                            <input
                                type="text"
                                placeholder="e.g. Vintage Denim Jacket"
                                prop:value=move || form.get().title
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|f| f.title = value);
                                }
                            />
                        </label>
                        <label>
                            "Brand (optional)"
                            <input
                                type="text"
                                prop:value=move || form.get().brand
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|f| f.brand = value);
                                }
                            />
                        </label>
                        <label>
                            "Description"
                            <textarea
                                prop:value=move || form.get().description
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|f| f.description = value);
                                }
                            ></textarea>
                        </label>
                        <label>
                            "Category"
                            <select on:change=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.category = value);
                            }>
                                <option value="">"Select a category"</option>
                                {CATEGORY_CHOICES.iter().map(|c| view! {
                                    <option value=*c selected=move || form.get().category == *c>{*c}</option>
                                }).collect_view()}
                            </select>
                        </label>
                        <label>
                            "Size"
                            <select on:change=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.size = value);
                            }>
                                <option value="">"Select a size"</option>
                                {SIZE_CHOICES.iter().map(|s| view! {
                                    <option value=*s selected=move || form.get().size == *s>{*s}</option>
                                }).collect_view()}
                            </select>
                        </label>
                        <label>
                            "Condition"
                            <select on:change=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.condition = value);
                            }>
                                <option value="">"Select condition"</option>
                                {CONDITION_CHOICES.iter().map(|c| view! {
                                    <option value=*c selected=move || form.get().condition == *c>{*c}</option>
                                }).collect_view()}
                            </select>
                        </label>
                        <label>
                            "Color (optional)"
                            <input
                                type="text"
                                prop:value=move || form.get().color
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|f| f.color = value);
                                }
                            />
                        </label>
                        <div class="wizard-nav">
                            <button
                                disabled=move || !step_is_complete(&form.get(), 1)
                                on:click=move |_| go_to(2)
                            >
                                "Next: Photos"
                            </button>
                        </div>
                    </div>
                }.into_any(),
                2 => view! {
                    <div class="wizard-panel">
                        <p>"Pick at least one photo"</p>
                        <div class="photo-grid">
                            {PHOTO_CHOICES.iter().map(|photo| {
                                let path = *photo;
                                view! {
                                    <button
                                        class=move || {
                                            if form.get().photos.iter().any(|p| p == path) {
                                                "photo-choice selected"
                                            } else {
                                                "photo-choice"
                                            }
                                        }
                                        on:click=move |_| toggle_photo(path)
                                    >
                                        <img src=path alt="Item photo" />
                                    </button>
                                }
                            }).collect_view()}
                        </div>
                        <div class="wizard-nav">
                            <button on:click=move |_| set_step.set(1)>"Back"</button>
                            <button
                                disabled=move || !step_is_complete(&form.get(), 2)
                                on:click=move |_| go_to(3)
                            >
                                "Next: Pickup Info"
                            </button>
                        </div>
                    </div>
                }.into_any(),
                3 => view! {
                    <div class="wizard-panel">
                        <label>
                            "Pickup Location"
                            <input
                                type="text"
                                placeholder="e.g. Downtown, Mission District"
                                prop:value=move || form.get().pickup_location
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|f| f.pickup_location = value);
                                }
                            />
                        </label>
                        <label>
                            "Pickup Instructions (optional)"
                            <textarea
                                prop:value=move || form.get().pickup_instructions
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|f| f.pickup_instructions = value);
                                }
                            ></textarea>
                        </label>
                        <fieldset>
                            <legend>"Availability"</legend>
                            {AVAILABILITY_CHOICES.iter().map(|slot| {
                                let name = *slot;
                                view! {
                                    <label class="checkbox-row">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || form.get().availability.iter().any(|a| a == name)
                                            on:change=move |_| toggle_availability(name)
                                        />
                                        {name}
                                    </label>
                                }
                            }).collect_view()}
                        </fieldset>
                        <div class="wizard-nav">
                            <button on:click=move |_| set_step.set(2)>"Back"</button>
                            <button
                                disabled=move || !step_is_complete(&form.get(), 3)
                                on:click=move |_| go_to(4)
                            >
                                "Next: Review"
                            </button>
                        </div>
                    </div>
                }.into_any(),
                _ => view! {
                    <div class="wizard-panel">
                        <h2>{move || form.get().title}</h2>
                        <p>{move || form.get().description}</p>
                        <div class="listing-badges">
                            <span class="badge">{move || form.get().size}</span>
                            <span class="badge outline">{move || form.get().condition}</span>
                            <span class="badge outline">{move || form.get().category}</span>
                        </div>
                        <p>{move || format!("{} photo(s)", form.get().photos.len())}</p>
                        <p>{move || format!("Pickup: {}", form.get().pickup_location)}</p>
                        <div class="wizard-nav">
                            <button on:click=move |_| set_step.set(3)>"Back"</button>
                            <button
                                class="primary"
                                disabled=move || submitting.get() || !step_is_complete(&form.get(), 4)
                                on:click=move |_| submit()
                            >
                                {move || if submitting.get() { "Publishing..." } else { "Publish Listing" }}
                            </button>
                        </div>
                    </div>
                }.into_any(),
            }}
        </div>
    }
}

#[component]
pub fn PostSuccessView() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    view! {
        <div class="post-success">
            <h1>"Your item is live!"</h1>
            <p>"Neighbors can now find it on the browse page."</p>
            <div class="wizard-nav">
                <button on:click=move |_| ctx.navigate(Route::Browse)>"Back to Browse"</button>
                <button class="primary" on:click=move |_| ctx.navigate(Route::Post)>
                    "Share Another Item"
                </button>
            </div>
        </div>
    }
}
