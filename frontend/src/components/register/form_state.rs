//! 表单状态管理模块
//!
//! 将零散的 signal 整合为 `FormState` 结构体，负责：
//! - 数据的持有
//! - 数据的重置
//! - 数据到请求对象的转换

use leptos::prelude::*;
use taxfy_shared::NewAccount;

/// 注册表单状态
///
/// 使用 `RwSignal` 因为它实现了 `Copy` trait，非常适合在闭包间传递。
#[derive(Clone, Copy)]
pub struct FormState {
    pub first_name: RwSignal<String>,
    pub last_name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl FormState {
    /// 创建新的表单状态，所有字段为空
    pub fn new() -> Self {
        Self {
            first_name: RwSignal::new(String::new()),
            last_name: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            password: RwSignal::new(String::new()),
        }
    }

    /// 重置表单到初始状态
    pub fn reset(&self) {
        self.first_name.set(String::new());
        self.last_name.set(String::new());
        self.email.set(String::new());
        self.password.set(String::new());
    }

    /// 将表单状态转换为注册请求（不订阅信号）
    pub fn to_account(&self) -> NewAccount {
        NewAccount {
            first_name: self.first_name.get_untracked(),
            last_name: self.last_name.get_untracked(),
            email: self.email.get_untracked(),
            password: self.password.get_untracked(),
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}
