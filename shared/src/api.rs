use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::http::{HttpClient, HttpRequest};
use crate::protocol::{
    ApiRequest, CreateDeclarationRequest, GetDeclarationRequest, ListHistoryRequest,
    SubmitDeclarationRequest, UpdateDeclarationRequest,
};
use crate::{
    AuthToken, CONTENT_TYPE_JSON, Credentials, Declaration, HEADER_AUTHORIZATION,
    HEADER_CONTENT_TYPE, NewAccount, SubmitReceipt,
};

/// 带状态码的成功响应
#[derive(Debug, Clone, PartialEq)]
pub struct Received<T> {
    pub status: u16,
    pub data: T,
}

/// 远程 API 客户端
///
/// 令牌只通过 `with_token` 注入，客户端本身不读取存储。
/// 携带非空令牌时，每个请求都会附加 `Authorization: Bearer <token>`。
#[derive(Clone, Debug)]
pub struct ApiClient<C> {
    config: ApiConfig,
    http: C,
    token: Option<String>,
}

impl<C: HttpClient> ApiClient<C> {
    pub fn new(config: ApiConfig, http: C) -> Self {
        Self {
            config,
            http,
            token: None,
        }
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.trim().is_empty());
        self
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    #[cfg(test)]
    pub(crate) fn http(&self) -> &C {
        &self.http
    }

    fn build<R: ApiRequest>(&self, req: &R) -> ApiResult<HttpRequest> {
        let mut http_req = HttpRequest::new(&self.config.url(&req.path()), R::METHOD);

        if let Some(token) = &self.token {
            http_req = http_req.with_header(HEADER_AUTHORIZATION, &format!("Bearer {}", token));
        }

        if R::HAS_BODY {
            let body = serde_json::to_string(req).map_err(|e| ApiError::Build(e.to_string()))?;
            http_req = http_req
                .with_header(HEADER_CONTENT_TYPE, CONTENT_TYPE_JSON)
                .with_body(body);
        }

        Ok(http_req)
    }

    /// 发送请求并保留成功状态码
    pub async fn send_with_status<R: ApiRequest>(&self, req: &R) -> ApiResult<Received<R::Response>> {
        let http_req = self.build(req)?;
        log::debug!("[Api] {} {}", R::METHOD.as_str(), req.path());

        let res = self.http.send(http_req).await.map_err(|e| {
            log::warn!("[Api] {} {} failed: {}", R::METHOD.as_str(), req.path(), e);
            e
        })?;

        if !res.ok() {
            log::warn!(
                "[Api] {} {} -> {}",
                R::METHOD.as_str(),
                req.path(),
                res.status
            );
            return Err(ApiError::from_status(res.status, &res.body));
        }

        // 2xx 空响应体按 null 处理，具体解析交给请求类型
        let body = if res.body.trim().is_empty() {
            "null"
        } else {
            res.body.as_str()
        };
        let data = R::decode_response(body).map_err(|e| ApiError::Decode(e.to_string()))?;

        Ok(Received {
            status: res.status,
            data,
        })
    }

    pub async fn send<R: ApiRequest>(&self, req: &R) -> ApiResult<R::Response> {
        self.send_with_status(req).await.map(|r| r.data)
    }

    // =========================================================
    // 端点封装
    // =========================================================

    /// 用邮箱与密码换取令牌
    pub async fn authenticate(&self, email: &str, password: &str) -> ApiResult<AuthToken> {
        let credentials = Credentials {
            username: email.to_string(),
            password: password.to_string(),
        };
        self.send(&credentials).await
    }

    pub async fn register(&self, account: &NewAccount) -> ApiResult<()> {
        self.send(account).await
    }

    pub async fn create_declaration(&self, year: i32) -> ApiResult<Received<Declaration>> {
        self.send_with_status(&CreateDeclarationRequest { year }).await
    }

    pub async fn declaration_history(&self) -> ApiResult<Vec<Declaration>> {
        self.send(&ListHistoryRequest)
            .await
            .map(Option::unwrap_or_default)
    }

    pub async fn get_declaration(&self, id: &str) -> ApiResult<Declaration> {
        self.send(&GetDeclarationRequest { id: id.to_string() })
            .await
    }

    pub async fn update_declaration(&self, id: &str, year: i32) -> ApiResult<()> {
        self.send(&UpdateDeclarationRequest {
            id: id.to_string(),
            year,
        })
        .await
    }

    pub async fn submit_declaration(&self, id: &str) -> ApiResult<SubmitReceipt> {
        self.send(&SubmitDeclarationRequest { id: id.to_string() })
            .await
    }
}
