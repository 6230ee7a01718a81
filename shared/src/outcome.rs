//! 请求结果分类
//!
//! 所有页面共用同一张 状态码 -> (消息, 样式, 后续动作) 映射表。

use crate::error::ApiError;
use crate::feedback::{FeedbackState, Variant};
use crate::route::AppRoute;

pub const MSG_UNAUTHORIZED: &str = "Não autorizado. Faça login novamente.";

/// 弹窗关闭后执行的动作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FollowUp {
    Navigate(AppRoute),
    /// 结束会话并回到登录页
    Relogin,
}

/// 一次操作的用户可见结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub variant: Variant,
    pub title: String,
    pub message: String,
    pub follow_up: Option<FollowUp>,
}

impl Outcome {
    pub fn success(title: &str, message: impl Into<String>) -> Self {
        Self {
            variant: Variant::Success,
            title: title.to_string(),
            message: message.into(),
            follow_up: None,
        }
    }

    pub fn warning(title: &str, message: impl Into<String>) -> Self {
        Self {
            variant: Variant::Warning,
            title: title.to_string(),
            message: message.into(),
            follow_up: None,
        }
    }

    pub fn then(mut self, follow_up: FollowUp) -> Self {
        self.follow_up = Some(follow_up);
        self
    }

    pub fn is_success(&self) -> bool {
        self.variant == Variant::Success
    }
}

impl FeedbackState<FollowUp> {
    pub fn show_outcome(&mut self, outcome: Outcome) {
        self.show(
            outcome.variant,
            Some(outcome.title),
            outcome.message,
            outcome.follow_up,
        );
    }
}

/// 发起请求的操作，决定失败时的措辞
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Login,
    Register,
    CreateDeclaration,
    LoadHistory,
    LoadSubmittable,
    LoadDeclaration,
    UpdateDeclaration,
    SubmitDeclaration,
}

impl Operation {
    fn failure_title(&self) -> &'static str {
        match self {
            Operation::Login => "Falha no login",
            Operation::Register => "Falha no cadastro",
            Operation::SubmitDeclaration => "Falha no envio",
            _ => "Falha",
        }
    }

    fn fallback_message(&self) -> &'static str {
        match self {
            Operation::Login => "Falha ao tentar fazer login.",
            Operation::Register => "Erro ao realizar cadastro.",
            Operation::CreateDeclaration => "Erro ao criar declaração.",
            Operation::LoadHistory => "Erro ao carregar histórico.",
            Operation::LoadSubmittable => "Erro ao carregar declarações.",
            Operation::LoadDeclaration => "Erro ao carregar declaração.",
            Operation::UpdateDeclaration => "Erro ao atualizar declaração.",
            Operation::SubmitDeclaration => "Erro ao enviar declaração.",
        }
    }

    /// 服务端有响应但没给出消息时的措辞（无响应时用 `fallback_message`）
    fn status_fallback_message(&self) -> &'static str {
        match self {
            Operation::CreateDeclaration => "Erro no servidor.",
            _ => self.fallback_message(),
        }
    }

    fn conflict_message(&self) -> Option<&'static str> {
        match self {
            Operation::Register => Some("E-mail já cadastrado."),
            Operation::CreateDeclaration => Some("Já existe uma declaração para esse ano."),
            Operation::UpdateDeclaration => Some("Já existe outra declaração com esse ano."),
            Operation::SubmitDeclaration => Some("Conflito ao enviar declaração."),
            _ => None,
        }
    }

    /// 401 时是否需要重新登录（登录本身的 401 只是凭据错误）
    fn relogin_on_unauthorized(&self) -> bool {
        !matches!(self, Operation::Login | Operation::Register)
    }
}

/// 将请求错误映射为用户可见结果
pub fn classify(err: &ApiError, op: Operation) -> Outcome {
    let title = op.failure_title();

    match (err.status(), op) {
        (Some(401), Operation::Login) => Outcome::warning(title, "Credenciais inválidas."),
        (Some(404), Operation::Login) => Outcome::warning(title, "E-mail não encontrado."),
        (Some(401), _) => {
            let outcome = Outcome::warning(title, MSG_UNAUTHORIZED);
            if op.relogin_on_unauthorized() {
                outcome.then(FollowUp::Relogin)
            } else {
                outcome
            }
        }
        (Some(409), _) if op.conflict_message().is_some() => {
            Outcome::warning(title, op.conflict_message().unwrap_or_default())
        }
        (Some(_), _) => Outcome::warning(
            title,
            err.server_message().unwrap_or(op.status_fallback_message()),
        ),
        (None, _) => Outcome::warning(title, op.fallback_message()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(code: u16) -> ApiError {
        ApiError::Status {
            status: code,
            message: None,
        }
    }

    const DECLARATION_OPS: [Operation; 6] = [
        Operation::CreateDeclaration,
        Operation::LoadHistory,
        Operation::LoadSubmittable,
        Operation::LoadDeclaration,
        Operation::UpdateDeclaration,
        Operation::SubmitDeclaration,
    ];

    #[test]
    fn unauthorized_on_declaration_endpoints_stages_relogin() {
        for op in DECLARATION_OPS {
            let outcome = classify(&status(401), op);
            assert_eq!(outcome.variant, Variant::Warning);
            assert_eq!(outcome.message, MSG_UNAUTHORIZED);
            assert_eq!(outcome.follow_up, Some(FollowUp::Relogin), "{op:?}");
        }
    }

    #[test]
    fn conflict_on_create_and_update_mentions_the_year() {
        for op in [Operation::CreateDeclaration, Operation::UpdateDeclaration] {
            let conflict = classify(&status(409), op);
            let generic = classify(&status(500), op);
            assert_ne!(conflict.message, generic.message);
            assert!(conflict.message.contains("ano"));
            assert_eq!(conflict.variant, Variant::Warning);
            assert_eq!(conflict.follow_up, None);
        }
    }

    #[test]
    fn other_statuses_prefer_server_message() {
        let err = ApiError::Status {
            status: 500,
            message: Some("Serviço indisponível".into()),
        };
        assert_eq!(
            classify(&err, Operation::LoadHistory).message,
            "Serviço indisponível"
        );
        assert_eq!(
            classify(&status(500), Operation::LoadHistory).message,
            "Erro ao carregar histórico."
        );
    }

    #[test]
    fn network_errors_use_fallback() {
        let outcome = classify(
            &ApiError::Network("offline".into()),
            Operation::SubmitDeclaration,
        );
        assert_eq!(outcome.title, "Falha no envio");
        assert_eq!(outcome.message, "Erro ao enviar declaração.");
        assert_eq!(outcome.follow_up, None);
    }

    #[test]
    fn login_failures_do_not_relogin() {
        let outcome = classify(&status(401), Operation::Login);
        assert_eq!(outcome.message, "Credenciais inválidas.");
        assert_eq!(outcome.follow_up, None);
        assert_eq!(
            classify(&status(404), Operation::Login).message,
            "E-mail não encontrado."
        );
    }

    #[test]
    fn create_distinguishes_server_errors_from_network_errors() {
        assert_eq!(
            classify(&status(500), Operation::CreateDeclaration).message,
            "Erro no servidor."
        );
        assert_eq!(
            classify(
                &ApiError::Network("offline".into()),
                Operation::CreateDeclaration
            )
            .message,
            "Erro ao criar declaração."
        );
    }

    #[test]
    fn conflict_without_specific_wording_falls_back() {
        assert_eq!(
            classify(&status(409), Operation::LoadHistory).message,
            "Erro ao carregar histórico."
        );
    }

    #[test]
    fn show_outcome_stages_follow_up() {
        let mut state = FeedbackState::new();
        state.show_outcome(classify(&status(401), Operation::CreateDeclaration));
        assert!(state.is_open());
        assert_eq!(state.title(), Some("Falha"));
        assert_eq!(
            state.dismiss(crate::feedback::DismissTrigger::Backdrop),
            Some(FollowUp::Relogin)
        );
    }
}
