//! Taxfy 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `taxfy_shared::route`: 路由定义与守卫（领域模型）
//! - `web::router`: 路由服务（核心引擎）
//! - `auth`: 会话状态管理
//! - `components`: UI 组件层

mod auth;
mod busy;
mod components {
    pub mod create_declaration;
    pub mod dashboard;
    mod declaration;
    pub mod edit_declaration;
    pub mod feedback_modal;
    pub mod history;
    mod icons;
    mod layout;
    pub mod login;
    pub mod register;
    pub mod submit_declaration;
}

use crate::auth::AuthContext;
use crate::components::create_declaration::CreateDeclarationPage;
use crate::components::dashboard::DashboardPage;
use crate::components::edit_declaration::EditDeclarationPage;
use crate::components::feedback_modal::{FeedbackModal, provide_feedback};
use crate::components::history::HistoryPage;
use crate::components::login::LoginPage;
use crate::components::register::RegisterPage;
use crate::components::submit_declaration::SubmitDeclarationPage;

use leptos::prelude::*;
use taxfy_shared::config::ApiConfig;
use taxfy_shared::route::AppRoute;

// 原生 Web API 封装模块
// 此模块提供对浏览器原生 API 的轻量级封装，替代 gloo-* 系列 crate，
// 以减小 WASM 二进制体积。
pub(crate) mod web {
    mod http;
    pub mod router;
    mod storage;

    pub use http::FetchClient;
    pub use storage::LocalStorage;
}

use web::router::{Link, Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
        AppRoute::CreateDeclaration => view! { <CreateDeclarationPage /> }.into_any(),
        AppRoute::SubmitDeclaration => view! { <SubmitDeclarationPage /> }.into_any(),
        AppRoute::EditDeclaration(id) => view! { <EditDeclarationPage id=id /> }.into_any(),
        AppRoute::History => view! { <HistoryPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex flex-col items-center justify-center min-h-screen bg-base-200 gap-4">
                <h1 class="text-6xl font-bold text-error">"404"</h1>
                <p class="text-xl">"Página não encontrada"</p>
                <Link to=AppRoute::Dashboard class="btn btn-primary">
                    "Voltar"
                </Link>
            </div>
        }
        .into_any(),
    }
}

/// 配置无效时的静态错误页，不挂载应用
#[component]
pub fn ConfigErrorPage(message: String) -> impl IntoView {
    view! {
        <div class="flex items-center justify-center min-h-screen bg-base-200 p-4">
            <div role="alert" class="alert alert-error max-w-lg">
                <span>{message}</span>
            </div>
        </div>
    }
}

#[component]
pub fn App(config: ApiConfig) -> impl IntoView {
    // 1. 创建认证上下文（从 LocalStorage 恢复会话）
    let auth_ctx = AuthContext::new(config);
    provide_context(auth_ctx);

    // 2. 全局反馈弹窗
    provide_feedback();

    // 3. 获取认证状态信号，用于注入路由服务（解耦！）
    let is_authenticated = auth_ctx.is_authenticated_signal();

    view! {
        // 4. 路由器组件：注入认证信号实现守卫
        <Router is_authenticated=is_authenticated>
            <RouterOutlet matcher=route_matcher />
            <FeedbackModal />
        </Router>
    }
}
