//! Sign-Up Page Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::{AppContext, Route};
use crate::models::SignUpData;

#[component]
pub fn SignUpPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let (display_name, set_display_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        if password.get_untracked() != confirm.get_untracked() {
            set_error.set(Some("Passwords do not match".to_string()));
            return;
        }
        if password.get_untracked().len() < 8 {
            set_error.set(Some("Password must be at least 8 characters".to_string()));
            return;
        }
        set_error.set(None);
        set_submitting.set(true);
        let name = display_name.get_untracked().trim().to_string();
        let data = SignUpData {
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
            display_name: (!name.is_empty()).then_some(name),
        };
        spawn_local(async move {
            if let Err(err) = ctx.sign_up(data).await {
                set_error.set(Some(err.to_string()));
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <h1>"Join ClothShare"</h1>
            <p>"Share clothes with your community"</p>

            {move || error.get().map(|message| view! {
                <div class="form-error">{message}</div>
            })}

            <form on:submit=on_submit>
                <label>
                    "Display Name"
                    <input
                        type="text"
                        prop:value=display_name
                        on:input=move |ev| set_display_name.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Email"
                    <input
                        type="email"
                        required
                        prop:value=email
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        required
                        prop:value=password
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Confirm Password"
                    <input
                        type="password"
                        required
                        prop:value=confirm
                        on:input=move |ev| set_confirm.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit" disabled=submitting>
                    {move || if submitting.get() { "Creating account..." } else { "Sign Up" }}
                </button>
            </form>

            <p class="auth-switch">
                "Already have an account? "
                <span on:click=move |_| ctx.navigate(Route::Login)>"Log in"</span>
            </p>
        </div>
    }
}
