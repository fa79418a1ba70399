//! Application Context
//!
//! Shared state provided via Leptos Context API: the current route and the
//! authenticated session. Every token/user mutation flows through the
//! methods here; pages only read derived state.

use leptos::prelude::*;

use crate::api;
use crate::error::ApiError;
use crate::models::{LoginData, SignUpData, User};

/// Client-side views, switched by signal (no URL router)
#[derive(Clone, Debug, PartialEq)]
pub enum Route {
    Browse,
    ItemDetail(String),
    Post,
    PostSuccess,
    Login,
    SignUp,
    /// `None` means the signed-in user's own profile
    Profile(Option<String>),
    MyItems,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current view - read
    pub route: ReadSignal<Route>,
    set_route: WriteSignal<Route>,
    /// Signed-in user, if any - read
    pub current_user: ReadSignal<Option<User>>,
    set_current_user: WriteSignal<Option<User>>,
    /// True until the initial session restore finishes - read
    pub auth_loading: ReadSignal<bool>,
    set_auth_loading: WriteSignal<bool>,
}

impl AppContext {
    pub fn new(
        route: (ReadSignal<Route>, WriteSignal<Route>),
        current_user: (ReadSignal<Option<User>>, WriteSignal<Option<User>>),
        auth_loading: (ReadSignal<bool>, WriteSignal<bool>),
    ) -> Self {
        Self {
            route: route.0,
            set_route: route.1,
            current_user: current_user.0,
            set_current_user: current_user.1,
            auth_loading: auth_loading.0,
            set_auth_loading: auth_loading.1,
        }
    }

    /// Switch the visible page
    pub fn navigate(&self, route: Route) {
        self.set_route.set(route);
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.get().is_some()
    }

    /// Replace the cached profile after a server-side edit
    pub fn set_user(&self, user: User) {
        self.set_current_user.set(Some(user));
    }

    /// Restore the session on startup: token present -> fetch /auth/me
    pub async fn check_auth(self) {
        if !api::client().has_session() {
            self.set_auth_loading.set(false);
            return;
        }
        match api::get_current_user().await {
            Ok(user) => self.set_current_user.set(Some(user)),
            Err(err) => {
                web_sys::console::warn_1(&format!("[AUTH] session restore failed: {err}").into());
                api::client().clear_session();
                self.set_current_user.set(None);
            }
        }
        self.set_auth_loading.set(false);
    }

    pub async fn login(self, data: LoginData) -> Result<(), ApiError> {
        let response = api::login(&data).await?;
        api::client().store_session(&response.access_token, &response.refresh_token);
        self.set_current_user.set(Some(response.user));
        self.navigate(Route::Browse);
        Ok(())
    }

    pub async fn sign_up(self, data: SignUpData) -> Result<(), ApiError> {
        let response = api::sign_up(&data).await?;
        api::client().store_session(&response.access_token, &response.refresh_token);
        self.set_current_user.set(Some(response.user));
        self.navigate(Route::Browse);
        Ok(())
    }

    /// Best-effort server logout; local state is always cleared
    pub async fn logout(self) {
        if let Err(err) = api::logout().await {
            web_sys::console::warn_1(&format!("[AUTH] logout error: {err}").into());
        }
        api::client().clear_session();
        self.set_current_user.set(None);
        self.navigate(Route::Login);
    }
}
