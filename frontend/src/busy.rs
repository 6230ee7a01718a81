//! 加载状态守卫
//!
//! 异步任务开始时置位，守卫离开作用域时复位，
//! 无论任务从哪个分支返回，加载状态都会被清除。

use leptos::prelude::*;

/// 离开作用域时把信号写回初始值
pub struct ResetOnDrop<T: Send + Sync + 'static> {
    signal: WriteSignal<T>,
    reset: Option<T>,
}

impl<T: Send + Sync + 'static> ResetOnDrop<T> {
    /// 立即写入 `active`，在 drop 时写回 `reset`
    pub fn new(signal: WriteSignal<T>, active: T, reset: T) -> Self {
        signal.set(active);
        Self {
            signal,
            reset: Some(reset),
        }
    }
}

impl<T: Send + Sync + 'static> Drop for ResetOnDrop<T> {
    fn drop(&mut self) {
        if let Some(reset) = self.reset.take() {
            // 页面已卸载时信号已被回收，忽略即可
            let _ = self.signal.try_set(reset);
        }
    }
}

/// 布尔加载标记的快捷写法
pub fn busy(flag: WriteSignal<bool>) -> ResetOnDrop<bool> {
    ResetOnDrop::new(flag, true, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 模拟保存流程：空输入提前返回，非数字走 `?` 错误分支
    fn save(flag: WriteSignal<bool>, seen: ReadSignal<bool>, input: &str) -> Result<i32, String> {
        let _busy = busy(flag);
        assert!(seen.get_untracked(), "flag must be set while the task runs");

        if input.is_empty() {
            return Err("vazio".into());
        }
        let year = input.parse::<i32>().map_err(|e| e.to_string())?;
        Ok(year)
    }

    #[test]
    fn flag_is_cleared_on_every_exit_path() {
        let owner = Owner::new();
        owner.with(|| {
            let (is_saving, set_is_saving) = signal(false);

            assert_eq!(save(set_is_saving, is_saving, "2023"), Ok(2023));
            assert!(!is_saving.get_untracked());

            assert!(save(set_is_saving, is_saving, "").is_err());
            assert!(!is_saving.get_untracked());

            assert!(save(set_is_saving, is_saving, "dois mil").is_err());
            assert!(!is_saving.get_untracked());
        });
    }

    #[test]
    fn guard_holds_value_until_dropped() {
        let owner = Owner::new();
        owner.with(|| {
            let (submitting, set_submitting) = signal(Option::<String>::None);

            let guard = ResetOnDrop::new(set_submitting, Some("42".to_string()), None);
            assert_eq!(submitting.get_untracked().as_deref(), Some("42"));

            drop(guard);
            assert_eq!(submitting.get_untracked(), None);
        });
    }

    #[test]
    fn drop_after_signal_disposed_is_silent() {
        let owner = Owner::new();
        owner.with(|| {
            let (_, set_is_loading) = signal(false);
            let guard = busy(set_is_loading);

            set_is_loading.dispose();
            drop(guard);
        });
    }
}
