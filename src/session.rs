//! Session Token Storage
//!
//! The access/refresh token pair lives in browser localStorage under fixed
//! keys and is only ever touched through this module. The trait seam lets
//! native tests swap in an in-memory store.

pub const ACCESS_TOKEN_KEY: &str = "accessToken";
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";

/// Durable storage for the session token pair
pub trait TokenStore {
    fn access_token(&self) -> Option<String>;
    fn refresh_token(&self) -> Option<String>;
    /// Store a fresh pair (login / signup)
    fn store_pair(&self, access: &str, refresh: &str);
    /// Replace only the access token (refresh exchange)
    fn set_access_token(&self, access: &str);
    /// Drop both tokens (logout / irrecoverable refresh failure)
    fn clear(&self);
}

/// Browser-backed store over `window.localStorage`
#[derive(Clone, Copy, Default)]
pub struct LocalStorageTokens;

impl LocalStorageTokens {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    fn get(key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

impl TokenStore for LocalStorageTokens {
    fn access_token(&self) -> Option<String> {
        Self::get(ACCESS_TOKEN_KEY)
    }

    fn refresh_token(&self) -> Option<String> {
        Self::get(REFRESH_TOKEN_KEY)
    }

    fn store_pair(&self, access: &str, refresh: &str) {
        Self::set(ACCESS_TOKEN_KEY, access);
        Self::set(REFRESH_TOKEN_KEY, refresh);
    }

    fn set_access_token(&self, access: &str) {
        Self::set(ACCESS_TOKEN_KEY, access);
    }

    fn clear(&self) {
        Self::remove(ACCESS_TOKEN_KEY);
        Self::remove(REFRESH_TOKEN_KEY);
    }
}

/// In-memory store for native tests
#[cfg(test)]
pub struct MemoryTokens {
    pair: std::cell::RefCell<(Option<String>, Option<String>)>,
}

#[cfg(test)]
impl MemoryTokens {
    pub fn new(access: Option<&str>, refresh: Option<&str>) -> Self {
        Self {
            pair: std::cell::RefCell::new((
                access.map(str::to_string),
                refresh.map(str::to_string),
            )),
        }
    }
}

#[cfg(test)]
impl TokenStore for MemoryTokens {
    fn access_token(&self) -> Option<String> {
        self.pair.borrow().0.clone()
    }

    fn refresh_token(&self) -> Option<String> {
        self.pair.borrow().1.clone()
    }

    fn store_pair(&self, access: &str, refresh: &str) {
        *self.pair.borrow_mut() = (Some(access.to_string()), Some(refresh.to_string()));
    }

    fn set_access_token(&self, access: &str) {
        self.pair.borrow_mut().0 = Some(access.to_string());
    }

    fn clear(&self) {
        *self.pair.borrow_mut() = (None, None);
    }
}
