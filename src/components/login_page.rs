//! Login Page Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::{AppContext, Route};
use crate::models::LoginData;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        set_error.set(None);
        set_submitting.set(true);
        let data = LoginData {
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        spawn_local(async move {
            if let Err(err) = ctx.login(data).await {
                set_error.set(Some(err.to_string()));
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <h1>"Welcome Back"</h1>
            <p>"Log in to keep sharing"</p>

            {move || error.get().map(|message| view! {
                <div class="form-error">{message}</div>
            })}

            <form on:submit=on_submit>
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
                <button type="submit" disabled=submitting>
                    {move || if submitting.get() { "Logging in..." } else { "Log In" }}
                </button>
            </form>

            <p class="auth-switch">
                "New here? "
                <span on:click=move |_| ctx.navigate(Route::SignUp)>"Create an account"</span>
            </p>
        </div>
    }
}
