//! 认证模块
//!
//! 管理用户会话，与路由系统解耦。
//! 路由服务通过注入的认证信号来检查认证状态。

use crate::web::{FetchClient, LocalStorage};
use leptos::prelude::*;
use taxfy_shared::api::ApiClient;
use taxfy_shared::config::ApiConfig;
use taxfy_shared::outcome::Outcome;
use taxfy_shared::session::Session;
use taxfy_shared::workflow;

/// 认证状态
#[derive(Clone, Debug)]
pub struct AuthState {
    /// 会话（令牌的唯一持有者）
    pub session: Session<LocalStorage>,
}

/// 认证上下文
///
/// 只读信号对外暴露，写入只能经过 `login` / `logout`。
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// 认证状态（只读）
    pub state: ReadSignal<AuthState>,
    set_state: WriteSignal<AuthState>,
    config: StoredValue<ApiConfig>,
}

impl AuthContext {
    /// 创建认证上下文，并从 LocalStorage 恢复会话（唯一的读取）
    pub fn new(config: ApiConfig) -> Self {
        let (state, set_state) = signal(AuthState {
            session: Session::restore(LocalStorage),
        });
        Self {
            state,
            set_state,
            config: StoredValue::new(config),
        }
    }

    /// 获取认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.session.is_authenticated()))
    }

    /// 以当前令牌构造 API 客户端
    ///
    /// 不订阅信号，适合在事件回调与异步任务开始前调用。
    pub fn api(&self) -> ApiClient<FetchClient> {
        let token = self
            .state
            .with_untracked(|s| s.session.token().map(str::to_string));
        ApiClient::new(self.config.get_value(), FetchClient).with_token(token)
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 登录并保存会话
///
/// 成功后认证状态翻转一次，跳转由路由服务的认证监听完成。
/// 失败时会话保持不变，返回要展示的结果，调用方据此结束加载状态。
pub async fn login(ctx: &AuthContext, email: String, password: String) -> Result<(), Outcome> {
    let api = ctx.api();
    let token = workflow::login(&api, &email, &password).await?;

    let mut started = Ok(());
    ctx.set_state.update(|state| {
        started = workflow::start_session(&mut state.session, &token);
    });

    if started.is_ok() {
        log::info!("[Auth] Logged in.");
    }
    started
}

/// 注销并清除状态
///
/// 导航将由路由服务的认证状态监听自动处理。
pub fn logout(ctx: &AuthContext) {
    ctx.set_state.update(|state| state.session.end());
    log::info!("[Auth] Logged out.");
}
