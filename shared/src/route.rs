//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由、其属性以及守卫决策。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 登录页面 (默认路由)
    #[default]
    Login,
    /// 注册页面
    Register,
    /// 控制面板 (需要认证)
    Dashboard,
    /// 新建申报
    CreateDeclaration,
    /// 提交申报
    SubmitDeclaration,
    /// 编辑申报，未指定 id 时显示引导
    EditDeclaration(Option<String>),
    /// 申报历史
    History,
    /// 页面未找到
    NotFound,
}

const EDIT_PREFIX: &str = "/declaracoes/editar";

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        let path = match path.trim_end_matches('/') {
            "" => "/",
            p => p,
        };

        match path {
            "/" | "/login" => Self::Login,
            "/register" => Self::Register,
            "/dashboard" => Self::Dashboard,
            "/declaracoes/criar" => Self::CreateDeclaration,
            "/declaracoes/enviar" => Self::SubmitDeclaration,
            "/declaracoes/historico" => Self::History,
            EDIT_PREFIX => Self::EditDeclaration(None),
            _ => match path.strip_prefix(EDIT_PREFIX).and_then(|r| r.strip_prefix('/')) {
                Some(id) if !id.is_empty() && !id.contains('/') => {
                    Self::EditDeclaration(Some(id.to_string()))
                }
                _ => Self::NotFound,
            },
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> String {
        match self {
            Self::Login => "/login".to_string(),
            Self::Register => "/register".to_string(),
            Self::Dashboard => "/dashboard".to_string(),
            Self::CreateDeclaration => "/declaracoes/criar".to_string(),
            Self::SubmitDeclaration => "/declaracoes/enviar".to_string(),
            Self::EditDeclaration(None) => EDIT_PREFIX.to_string(),
            Self::EditDeclaration(Some(id)) => format!("{}/{}", EDIT_PREFIX, id),
            Self::History => "/declaracoes/historico".to_string(),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// **核心守卫逻辑：定义该路由是否需要认证**
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Self::Dashboard
                | Self::CreateDeclaration
                | Self::SubmitDeclaration
                | Self::EditDeclaration(_)
                | Self::History
        )
    }

    /// 定义已认证用户是否应该离开此路由（登录与注册页）
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login | Self::Register)
    }

    /// 获取认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// 获取认证成功时的重定向目标
    pub fn auth_success_redirect() -> Self {
        Self::Dashboard
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

/// 守卫决策
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// 允许渲染目标路由
    Allow(AppRoute),
    /// 替换为另一路由（不渲染原目标）
    Redirect(AppRoute),
}

/// 根据认证状态决定目标路由能否渲染
pub fn guard(target: AppRoute, is_authenticated: bool) -> GuardDecision {
    if target.requires_auth() && !is_authenticated {
        return GuardDecision::Redirect(AppRoute::auth_failure_redirect());
    }
    if target.should_redirect_when_authenticated() && is_authenticated {
        return GuardDecision::Redirect(AppRoute::auth_success_redirect());
    }
    GuardDecision::Allow(target)
}
