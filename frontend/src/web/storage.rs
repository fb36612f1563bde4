//! 会话 token 的 LocalStorage 持久化

use gloo_storage::{LocalStorage, Storage};
use rentals_shared::SESSION_TOKEN_KEY;
use rentals_shared::session::TokenStore;

/// 浏览器 LocalStorage 介质
///
/// 存储不可用（隐私模式、配额耗尽）时只记录日志，会话仍在内存中生效。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserTokenStore;

impl TokenStore for BrowserTokenStore {
    fn load(&self) -> Option<String> {
        LocalStorage::get::<String>(SESSION_TOKEN_KEY).ok()
    }

    fn save(&self, token: &str) {
        if let Err(e) = LocalStorage::set(SESSION_TOKEN_KEY, token) {
            log_warn!("[Auth] 无法持久化 token: {}", e);
        }
    }

    fn clear(&self) {
        LocalStorage::delete(SESSION_TOKEN_KEY);
    }
}
