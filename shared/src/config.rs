//! 启动配置
//!
//! API 基础地址是唯一的必需配置，缺失或无效时应用不会启动。

use crate::error::ConfigError;
use url::Url;

/// 提供 API 基础地址的环境变量（构建期读取）
pub const API_BASE_URL_VAR: &str = "TAXFY_API_BASE_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// 从原始值构造配置
    ///
    /// 去除首尾空白与末尾的 `/`，并要求是带主机名的 http(s) 绝对地址。
    pub fn from_value(raw: Option<&str>) -> Result<Self, ConfigError> {
        let value = raw
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing(API_BASE_URL_VAR))?;

        let valid = Url::parse(value)
            .ok()
            .filter(|u| matches!(u.scheme(), "http" | "https") && u.host_str().is_some())
            .is_some();
        if !valid {
            return Err(ConfigError::Invalid {
                var: API_BASE_URL_VAR,
                value: value.to_string(),
            });
        }

        Ok(Self {
            base_url: value.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 拼接完整请求地址
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_blank_value_is_fatal() {
        assert_eq!(
            ApiConfig::from_value(None),
            Err(ConfigError::Missing(API_BASE_URL_VAR))
        );
        assert_eq!(
            ApiConfig::from_value(Some("   ")),
            Err(ConfigError::Missing(API_BASE_URL_VAR))
        );
    }

    #[test]
    fn rejects_non_http_urls() {
        assert!(matches!(
            ApiConfig::from_value(Some("localhost:8080")),
            Err(ConfigError::Invalid { .. })
        ));
        assert!(matches!(
            ApiConfig::from_value(Some("ftp://files.taxfy.com")),
            Err(ConfigError::Invalid { .. })
        ));
    }

    #[test]
    fn trims_trailing_slash_and_joins_paths() {
        let config = ApiConfig::from_value(Some("http://localhost:8080/api/")).unwrap();
        assert_eq!(config.base_url(), "http://localhost:8080/api");
        assert_eq!(config.url("/declarations"), "http://localhost:8080/api/declarations");
        assert_eq!(config.url("auth"), "http://localhost:8080/api/auth");
    }
}
