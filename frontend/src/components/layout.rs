//! 页面布局
//!
//! - `DefaultLayout`: 登录/注册等公开页面，内容居中
//! - `ProtectedLayout`: 受保护页面，带导航栏与退出按钮

use crate::auth::{logout, use_auth};
use crate::components::feedback_modal::use_feedback;
use crate::components::icons::LogOut;
use crate::web::router::Link;
use leptos::prelude::*;
use taxfy_shared::route::AppRoute;

#[component]
pub fn DefaultLayout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-base-200 flex flex-col items-center justify-center p-4">
            {children()}
        </div>
    }
}

/// 受保护布局
///
/// 路由服务已经拦截了未认证访问，这里再用 `Show` 兜底，
/// 会话结束的那一刻内容立即消失，不等重定向。
#[component]
pub fn ProtectedLayout(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let is_authenticated = auth.is_authenticated_signal();

    view! {
        <Show when=move || is_authenticated.get()>
            <div class="min-h-screen bg-base-200">
                <nav class="navbar bg-base-100 shadow-md">
                    <div class="max-w-4xl w-full mx-auto px-4 flex justify-between items-center">
                        <Link to=AppRoute::Dashboard class="text-xl font-bold text-primary">
                            "Taxfy Dashboard"
                        </Link>
                        <LogoutButton />
                    </div>
                </nav>

                <main class="max-w-4xl mx-auto p-4 mt-4">{children()}</main>
            </div>
        </Show>
    }
}

#[component]
fn LogoutButton() -> impl IntoView {
    let auth = use_auth();
    let feedback = use_feedback();

    let on_logout = move |_| {
        feedback.hide();
        logout(&auth);
    };

    view! {
        <button on:click=on_logout class="btn btn-error btn-sm gap-2">
            <LogOut attr:class="h-4 w-4" />
            "Sair"
        </button>
    }
}
