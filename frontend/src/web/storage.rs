//! LocalStorage 封装模块
//!
//! 使用 `web_sys::Storage` 实现共享层的 `SessionStore`。

use taxfy_shared::session::SessionStore;

/// 浏览器 LocalStorage
///
/// 无状态，每次操作时获取 `window.localStorage`。
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl SessionStore for LocalStorage {
    /// 键不存在或存储不可用时返回 `None`
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> bool {
        Self::storage()
            .and_then(|s| s.set_item(key, value).ok())
            .is_some()
    }

    fn remove(&self, key: &str) -> bool {
        Self::storage()
            .and_then(|s| s.remove_item(key).ok())
            .is_some()
    }
}
