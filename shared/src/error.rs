//! 错误类型
//!
//! - `ApiError`: 请求构建、网络、HTTP 状态与响应解析失败
//! - `ConfigError`: 启动配置缺失或无效（致命）

use serde::Deserialize;
use thiserror::Error;

// =========================================================
// 请求错误
// =========================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// 请求构建失败（序列化、Header 设置等）
    #[error("请求构建失败: {0}")]
    Build(String),

    /// 网络请求失败，未收到响应
    #[error("网络错误: {0}")]
    Network(String),

    /// 服务端返回非 2xx 状态
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("<no message>"))]
    Status {
        status: u16,
        /// 响应体中的 `message` 字段（如果有）
        message: Option<String>,
    },

    /// 2xx 响应体无法解析
    #[error("响应解析失败: {0}")]
    Decode(String),
}

impl ApiError {
    /// 从非 2xx 响应构造错误，尝试提取响应体中的 `message`
    pub fn from_status(status: u16, body: &str) -> Self {
        #[derive(Deserialize)]
        struct ErrorBody {
            message: Option<String>,
        }

        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty());

        ApiError::Status { status, message }
    }

    /// HTTP 状态码（网络类错误没有状态码）
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// 服务端提供的错误消息
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

// =========================================================
// 配置错误
// =========================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} não está definida no ambiente de build")]
    Missing(&'static str),

    #[error("{var} não é uma URL http(s) válida: {value}")]
    Invalid { var: &'static str, value: String },
}
