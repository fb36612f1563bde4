//! 会话存储
//!
//! 单一的 bearer token：登录时写入并持久化，登出时同时清除内存与持久化副本。
//! 持久化介质通过 `TokenStore` 注入（浏览器中为 LocalStorage）。

/// token 持久化介质
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session<S> {
    store: S,
    token: Option<String>,
}

impl<S: TokenStore> Session<S> {
    /// 从持久化介质恢复会话（刷新页面后仍保持登录）
    pub fn restore(store: S) -> Self {
        let token = store.load().filter(|t| !t.trim().is_empty());
        Self { store, token }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// `Authorization` 头的值
    pub fn bearer(&self) -> Option<String> {
        self.token.as_deref().map(bearer_header)
    }

    pub fn login(&mut self, token: impl Into<String>) {
        let token = token.into();
        self.store.save(&token);
        self.token = Some(token);
    }

    pub fn logout(&mut self) {
        self.store.clear();
        self.token = None;
    }
}

pub fn bearer_header(token: &str) -> String {
    format!("Bearer {}", token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// 内存介质，clone 后共享同一份数据，便于断言持久化结果
    #[derive(Clone, Default)]
    struct MemoryStore(Rc<RefCell<Option<String>>>);

    impl TokenStore for MemoryStore {
        fn load(&self) -> Option<String> {
            self.0.borrow().clone()
        }

        fn save(&self, token: &str) {
            *self.0.borrow_mut() = Some(token.to_string());
        }

        fn clear(&self) {
            *self.0.borrow_mut() = None;
        }
    }

    #[test]
    fn test_login_persists_and_publishes() {
        let store = MemoryStore::default();
        let mut session = Session::restore(store.clone());
        assert!(!session.is_authenticated());

        session.login("abc.def");
        assert_eq!(session.token(), Some("abc.def"));
        assert_eq!(store.load().as_deref(), Some("abc.def"));
        assert_eq!(session.bearer().as_deref(), Some("Bearer abc.def"));
    }

    #[test]
    fn test_restore_survives_reload() {
        let store = MemoryStore::default();
        Session::restore(store.clone()).login("persisted");

        let reloaded = Session::restore(store);
        assert_eq!(reloaded.token(), Some("persisted"));
    }

    #[test]
    fn test_logout_clears_both_copies() {
        let store = MemoryStore::default();
        let mut session = Session::restore(store.clone());
        session.login("t");
        session.logout();
        assert_eq!(session.token(), None);
        assert_eq!(store.load(), None);
        assert_eq!(session.bearer(), None);
    }

    #[test]
    fn test_blank_persisted_token_is_ignored() {
        let store = MemoryStore::default();
        store.save("  ");
        assert!(!Session::restore(store).is_authenticated());
    }
}
