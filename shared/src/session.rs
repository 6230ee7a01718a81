//! 会话状态机
//!
//! 令牌只有两个写入口：`begin`（登录成功）与 `end`（登出）。
//! 持久化存储只在 `restore` 时读取一次。

use crate::TOKEN_STORAGE_KEY;
#[cfg(test)]
use std::{cell::RefCell, collections::HashMap, rc::Rc};

/// 持久化键值存储能力（浏览器中为 LocalStorage）
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> bool;
    fn remove(&self, key: &str) -> bool;
}

/// 内存存储，克隆后共享同一份数据
#[cfg(test)]
#[derive(Clone, Default, Debug)]
pub(crate) struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

#[cfg(test)]
impl MemoryStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> bool {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        true
    }

    fn remove(&self, key: &str) -> bool {
        self.entries.borrow_mut().remove(key);
        true
    }
}

/// 会话
#[derive(Clone, Debug)]
pub struct Session<S> {
    store: S,
    token: Option<String>,
}

fn non_empty(token: Option<String>) -> Option<String> {
    token.filter(|t| !t.trim().is_empty())
}

impl<S: SessionStore> Session<S> {
    /// 从存储恢复会话（唯一的读取路径）
    pub fn restore(store: S) -> Self {
        let token = non_empty(store.get(TOKEN_STORAGE_KEY));
        if token.is_some() {
            log::info!("[Auth] Restored session from storage.");
        }
        Self { store, token }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// 登录成功后写入令牌，空令牌被拒绝并保持原状态
    pub fn begin(&mut self, token: &str) -> bool {
        if token.trim().is_empty() {
            return false;
        }
        if !self.store.set(TOKEN_STORAGE_KEY, token) {
            log::warn!("[Auth] Token could not be persisted; session lasts until reload.");
        }
        self.token = Some(token.to_string());
        true
    }

    /// 清除内存与持久化令牌，不会失败
    pub fn end(&mut self) {
        self.token = None;
        if !self.store.remove(TOKEN_STORAGE_KEY) {
            log::warn!("[Auth] Stored token could not be removed.");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restore_without_stored_token_is_unauthenticated() {
        let session = Session::restore(MemoryStore::new());
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);
    }

    #[test]
    fn restore_ignores_blank_token() {
        let store = MemoryStore::new();
        store.set(TOKEN_STORAGE_KEY, "  ");
        assert!(!Session::restore(store).is_authenticated());
    }

    #[test]
    fn restore_picks_up_persisted_token() {
        let store = MemoryStore::new();
        store.set(TOKEN_STORAGE_KEY, "persisted");
        let session = Session::restore(store);
        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("persisted"));
    }

    #[test]
    fn begin_and_end_mirror_into_store() {
        let store = MemoryStore::new();
        let mut session = Session::restore(store.clone());

        assert!(session.begin("jwt"));
        assert!(session.is_authenticated());
        assert_eq!(store.get(TOKEN_STORAGE_KEY).as_deref(), Some("jwt"));

        session.end();
        assert!(!session.is_authenticated());
        assert_eq!(store.get(TOKEN_STORAGE_KEY), None);

        // 重复登出无副作用
        session.end();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn begin_rejects_empty_token_and_keeps_state() {
        let store = MemoryStore::new();
        let mut session = Session::restore(store.clone());
        assert!(session.begin("first"));

        assert!(!session.begin(""));
        assert_eq!(session.token(), Some("first"));
        assert_eq!(store.get(TOKEN_STORAGE_KEY).as_deref(), Some("first"));
    }
}
