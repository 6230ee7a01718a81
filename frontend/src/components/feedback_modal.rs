//! 反馈弹窗组件
//!
//! 全局只有一个实例，状态存放在 `Feedback` 句柄持有的单个信号里。
//! 页面只负责 `show_outcome`，关闭后的跳转或重新登录由本组件执行。

use crate::auth::{logout, use_auth};
use crate::components::icons::{AlertTriangle, CheckCircle, Info};
use crate::web::router::use_router;
use leptos::ev;
use leptos::prelude::*;
use taxfy_shared::feedback::{DismissTrigger, FeedbackState, Variant};
use taxfy_shared::outcome::{FollowUp, Outcome};

/// 弹窗句柄
#[derive(Clone, Copy)]
pub struct Feedback {
    state: RwSignal<FeedbackState<FollowUp>>,
}

impl Feedback {
    fn new() -> Self {
        Self {
            state: RwSignal::new(FeedbackState::new()),
        }
    }

    /// 显示弹窗，覆盖当前内容
    pub fn show(
        &self,
        variant: Variant,
        title: Option<String>,
        message: impl Into<String>,
        on_close: Option<FollowUp>,
    ) {
        let message = message.into();
        self.state
            .update(|s| s.show(variant, title, message, on_close));
    }

    pub fn show_outcome(&self, outcome: Outcome) {
        self.show(
            outcome.variant,
            Some(outcome.title),
            outcome.message,
            outcome.follow_up,
        );
    }

    /// 关闭但不执行后续动作
    pub fn hide(&self) {
        self.state.update(|s| s.hide());
    }

    /// 关闭并取出后续动作，重复调用返回 `None`
    pub fn dismiss(&self, trigger: DismissTrigger) -> Option<FollowUp> {
        self.state.try_update(|s| s.dismiss(trigger)).flatten()
    }

    fn is_open(&self) -> bool {
        self.state.with(|s| s.is_open())
    }
}

pub fn provide_feedback() -> Feedback {
    let feedback = Feedback::new();
    provide_context(feedback);
    feedback
}

pub fn use_feedback() -> Feedback {
    use_context::<Feedback>().expect("Feedback should be provided")
}

/// 根据样式选择图标与颜色
fn variant_icon(variant: Variant) -> AnyView {
    match variant {
        Variant::Info => view! {
            <div class="p-3 rounded-full bg-info/15 text-info">
                <Info attr:class="h-7 w-7" />
            </div>
        }
        .into_any(),
        Variant::Warning => view! {
            <div class="p-3 rounded-full bg-warning/15 text-warning">
                <AlertTriangle attr:class="h-7 w-7" />
            </div>
        }
        .into_any(),
        Variant::Success => view! {
            <div class="p-3 rounded-full bg-success/15 text-success">
                <CheckCircle attr:class="h-7 w-7" />
            </div>
        }
        .into_any(),
    }
}

fn button_class(variant: Variant) -> &'static str {
    match variant {
        Variant::Info => "btn btn-info w-full",
        Variant::Warning => "btn btn-warning w-full",
        Variant::Success => "btn btn-success w-full",
    }
}

#[component]
pub fn FeedbackModal() -> impl IntoView {
    let feedback = use_feedback();
    let router = use_router();
    let auth = use_auth();

    // 三个关闭入口共用同一路径
    let close = move |trigger: DismissTrigger| match feedback.dismiss(trigger) {
        Some(FollowUp::Navigate(route)) => router.navigate_to(route),
        Some(FollowUp::Relogin) => logout(&auth),
        None => {}
    };

    let handle = window_event_listener(ev::keydown, move |ev| {
        if !feedback.state.with_untracked(|s| s.is_open()) {
            return;
        }
        if let Some(trigger) = DismissTrigger::from_key(&ev.key()) {
            close(trigger);
        }
    });
    on_cleanup(move || handle.remove());

    let variant = move || feedback.state.with(|s| s.variant());

    view! {
        <Show when=move || feedback.is_open()>
            <div class="fixed inset-0 z-50 flex items-center justify-center p-4">
                <div
                    class="absolute inset-0 bg-black/40"
                    on:click=move |_| close(DismissTrigger::Backdrop)
                ></div>
                <div
                    role="dialog"
                    aria-modal="true"
                    class="relative card w-full max-w-sm bg-base-100 shadow-2xl"
                >
                    <div class="card-body items-center text-center gap-3">
                        {move || variant_icon(variant())}
                        {move || {
                            feedback
                                .state
                                .with(|s| s.title().map(str::to_string))
                                .map(|title| view! { <h3 class="text-lg font-bold">{title}</h3> })
                        }}
                        <p class="text-base-content/80">
                            {move || feedback.state.with(|s| s.message().to_string())}
                        </p>
                        <div class="card-actions w-full mt-2">
                            <button
                                class=move || button_class(variant())
                                on:click=move |_| close(DismissTrigger::Acknowledge)
                            >
                                "Ok"
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}
