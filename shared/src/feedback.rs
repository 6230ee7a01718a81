//! 反馈弹窗状态
//!
//! 单实例、一次只显示一条。关闭入口（Escape、点击遮罩、确认按钮）
//! 都走同一个 `dismiss`，暂存的后续动作只会被交出一次。

/// 弹窗样式，只影响图标与颜色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    #[default]
    Info,
    Warning,
    Success,
}

/// 触发关闭的来源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissTrigger {
    Escape,
    Backdrop,
    Acknowledge,
}

impl DismissTrigger {
    /// 键盘事件是否应关闭弹窗
    pub fn from_key(key: &str) -> Option<Self> {
        (key == "Escape" || key == "Esc").then_some(Self::Escape)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackState<A> {
    open: bool,
    variant: Variant,
    title: Option<String>,
    message: String,
    on_close: Option<A>,
}

impl<A> Default for FeedbackState<A> {
    fn default() -> Self {
        Self {
            open: false,
            variant: Variant::Info,
            title: None,
            message: String::new(),
            on_close: None,
        }
    }
}

impl<A> FeedbackState<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 显示弹窗，直接覆盖当前内容（后写者胜）
    pub fn show(
        &mut self,
        variant: Variant,
        title: Option<String>,
        message: impl Into<String>,
        on_close: Option<A>,
    ) {
        self.open = true;
        self.variant = variant;
        self.title = title;
        self.message = message.into();
        self.on_close = on_close;
    }

    /// 关闭弹窗并交出暂存的后续动作；已关闭时无效果
    pub fn dismiss(&mut self, trigger: DismissTrigger) -> Option<A> {
        if !self.open {
            return None;
        }
        log::debug!("[Feedback] dismissed via {:?}", trigger);
        self.open = false;
        self.on_close.take()
    }

    /// 关闭弹窗并丢弃后续动作
    pub fn hide(&mut self) {
        self.open = false;
        self.on_close = None;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let state = FeedbackState::<u8>::new();
        assert!(!state.is_open());
        assert_eq!(state.variant(), Variant::Info);
    }

    #[test]
    fn every_trigger_closes_and_yields_action_once() {
        for trigger in [
            DismissTrigger::Escape,
            DismissTrigger::Backdrop,
            DismissTrigger::Acknowledge,
        ] {
            let mut state = FeedbackState::new();
            state.show(Variant::Success, Some("Ok".into()), "feito", Some(7u8));

            assert_eq!(state.dismiss(trigger), Some(7));
            assert!(!state.is_open());

            // 重复触发无额外效果
            assert_eq!(state.dismiss(DismissTrigger::Acknowledge), None);
            assert_eq!(state.dismiss(DismissTrigger::Escape), None);
        }
    }

    #[test]
    fn show_replaces_current_content() {
        let mut state = FeedbackState::new();
        state.show(Variant::Warning, None, "primeiro", Some(1u8));
        state.show(Variant::Info, Some("B".into()), "segundo", None);

        assert_eq!(state.message(), "segundo");
        assert_eq!(state.title(), Some("B"));
        assert_eq!(state.dismiss(DismissTrigger::Acknowledge), None);
    }

    #[test]
    fn hide_drops_the_follow_up() {
        let mut state = FeedbackState::new();
        state.show(Variant::Warning, None, "x", Some(1u8));
        state.hide();
        assert!(!state.is_open());
        assert_eq!(state.dismiss(DismissTrigger::Acknowledge), None);
    }

    #[test]
    fn only_escape_key_dismisses() {
        assert_eq!(DismissTrigger::from_key("Escape"), Some(DismissTrigger::Escape));
        assert_eq!(DismissTrigger::from_key("Enter"), None);
    }
}
