//! 页面流程
//!
//! 每个函数对应页面上的一次交互：校验 -> 请求 -> 分类 -> `Outcome`。
//! 失败永远以 `Outcome` 返回，不向上传播；加载标记由页面负责。

use crate::api::ApiClient;
use crate::http::HttpClient;
use crate::outcome::{FollowUp, Operation, Outcome, classify};
use crate::route::AppRoute;
use crate::session::{Session, SessionStore};
use crate::validation::parse_year;
use crate::{Declaration, NewAccount, STATUS_SUBMITTED};
use email_address::EmailAddress;


// =========================================================
// 认证
// =========================================================

/// 登录：成功返回令牌，失败返回要显示的结果
pub async fn login<C: HttpClient>(
    api: &ApiClient<C>,
    email: &str,
    password: &str,
) -> Result<String, Outcome> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(Outcome::warning(
            "Falha no login",
            "Preencha e-mail e senha.",
        ));
    }

    match api.authenticate(email.trim(), password).await {
        Ok(auth) if !auth.token.trim().is_empty() => Ok(auth.token),
        Ok(_) => {
            log::warn!("[Auth] Server answered without a token.");
            Err(Outcome::warning(
                "Falha no login",
                "Falha ao tentar fazer login.",
            ))
        }
        Err(e) => Err(classify(&e, Operation::Login)),
    }
}

/// 用登录得到的令牌开启会话；被拒绝时会话保持原状
pub fn start_session<S: SessionStore>(session: &mut Session<S>, token: &str) -> Result<(), Outcome> {
    if session.begin(token) {
        Ok(())
    } else {
        Err(Outcome::warning(
            "Falha no login",
            "Falha ao tentar fazer login.",
        ))
    }
}

/// 注册前的本地校验
pub fn validate_account(account: &NewAccount) -> Result<(), Outcome> {
    let missing = [
        &account.first_name,
        &account.last_name,
        &account.email,
        &account.password,
    ]
    .iter()
    .any(|f| f.trim().is_empty());

    if missing {
        return Err(Outcome::warning(
            "Dados incompletos",
            "Preencha todos os campos.",
        ));
    }

    if EmailAddress::parse_with_options(account.email.trim(), Default::default()).is_err() {
        return Err(Outcome::warning("E-mail inválido", "Informe um e-mail válido."));
    }

    Ok(())
}

pub async fn register<C: HttpClient>(api: &ApiClient<C>, account: &NewAccount) -> Outcome {
    let account = NewAccount {
        first_name: account.first_name.trim().to_string(),
        last_name: account.last_name.trim().to_string(),
        email: account.email.trim().to_string(),
        password: account.password.clone(),
    };

    match api.register(&account).await {
        Ok(()) => Outcome::success("Cadastro realizado", "Cadastro realizado com sucesso.")
            .then(FollowUp::Navigate(AppRoute::Login)),
        Err(e) => classify(&e, Operation::Register),
    }
}

// =========================================================
// 申报
// =========================================================

/// 校验年份输入，失败时返回 "Ano inválido" 提示
pub fn check_year(input: &str, current_year: i32, op: Operation) -> Result<i32, Outcome> {
    parse_year(input, current_year).map_err(|e| {
        log::debug!("[Declaration] rejected year input: {}", e);
        let message = match op {
            Operation::CreateDeclaration => "Informe um ano válido (ex: 2024).",
            _ => "Informe um ano válido.",
        };
        Outcome::warning("Ano inválido", message)
    })
}

pub async fn create_declaration<C: HttpClient>(api: &ApiClient<C>, year: i32) -> Outcome {
    match api.create_declaration(year).await {
        Ok(received) if received.status == 201 => {
            log::info!("[Declaration] created {} for {}", received.data.id, year);
            Outcome::success("Declaração criada", "Declaração criada com sucesso.")
                .then(FollowUp::Navigate(AppRoute::EditDeclaration(None)))
        }
        Ok(received) => {
            log::warn!("[Declaration] unexpected create status {}", received.status);
            Outcome::warning("Erro", "Resposta inesperada do servidor.")
        }
        Err(e) => classify(&e, Operation::CreateDeclaration),
    }
}

/// 加载申报历史；`op` 区分历史页与提交页的措辞
pub async fn load_history<C: HttpClient>(
    api: &ApiClient<C>,
    op: Operation,
) -> Result<Vec<Declaration>, Outcome> {
    api.declaration_history()
        .await
        .map_err(|e| classify(&e, op))
}

pub async fn load_declaration<C: HttpClient>(
    api: &ApiClient<C>,
    id: &str,
) -> Result<Declaration, Outcome> {
    api.get_declaration(id)
        .await
        .map_err(|e| classify(&e, Operation::LoadDeclaration))
}

pub async fn update_declaration<C: HttpClient>(
    api: &ApiClient<C>,
    id: &str,
    year: i32,
) -> Outcome {
    match api.update_declaration(id, year).await {
        Ok(()) => Outcome::success("Atualizado", "Declaração atualizada com sucesso.")
            .then(FollowUp::Navigate(AppRoute::EditDeclaration(None))),
        Err(e) => classify(&e, Operation::UpdateDeclaration),
    }
}

/// 提交成功后的新状态与提示
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submitted {
    pub status: String,
    pub outcome: Outcome,
}

pub async fn submit_declaration<C: HttpClient>(
    api: &ApiClient<C>,
    id: &str,
) -> Result<Submitted, Outcome> {
    let receipt = api
        .submit_declaration(id)
        .await
        .map_err(|e| classify(&e, Operation::SubmitDeclaration))?;

    let status = receipt
        .status
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| STATUS_SUBMITTED.to_string());

    let outcome = Outcome::success(
        "Envio realizado",
        format!("Declaração enviada com sucesso ({}).", status),
    );
    Ok(Submitted { status, outcome })
}
