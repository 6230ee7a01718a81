//! Taxfy 共享层
//!
//! 不依赖 DOM 的纯 Rust 逻辑，前端通过注入适配器（HTTP、存储）来使用：
//! - `protocol` / `api`: 远程 API 的请求定义与客户端
//! - `session`: 会话令牌状态机
//! - `feedback` / `outcome`: 反馈弹窗状态与错误分类
//! - `route`: 路由表与守卫
//! - `validation`: 申报年份校验
//! - `workflow`: 各页面的 请求 -> 分类 -> 反馈 流程

use serde::{Deserialize, Serialize};

pub mod api;
pub mod config;
pub mod error;
pub mod feedback;
pub mod http;
pub mod outcome;
pub mod protocol;
pub mod route;
mod serde_helper;
pub mod session;
pub mod validation;
pub mod workflow;

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// 会话令牌在持久化存储中的键
pub const TOKEN_STORAGE_KEY: &str = "jwt_token";
pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_TYPE_JSON: &str = "application/json";
/// 服务端未返回状态时使用的提交状态
pub const STATUS_SUBMITTED: &str = "submitted";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 申报记录
///
/// `id` 与 `status` 由服务端分配，客户端只持有展示副本。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    #[serde(deserialize_with = "serde_helper::string_or_number")]
    pub id: String,
    pub year: i32,
    /// 服务端可能省略或返回 null，此时为空串
    #[serde(default, deserialize_with = "serde_helper::null_as_default")]
    pub status: String,
}

impl Declaration {
    /// 用于展示的状态，空状态显示为 `-`
    pub fn status_label(&self) -> &str {
        if self.status.is_empty() { "-" } else { &self.status }
    }

    /// 在列表中更新指定申报的状态，返回是否找到该条目
    pub fn apply_status(list: &mut [Declaration], id: &str, status: &str) -> bool {
        match list.iter_mut().find(|d| d.id == id) {
            Some(entry) => {
                entry.status = status.to_string();
                true
            }
            None => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthToken {
    pub token: String,
}

/// 注册表单提交的数据
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitReceipt {
    #[serde(default)]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declaration_accepts_numeric_and_string_ids() {
        let numeric: Declaration =
            serde_json::from_str(r#"{"id": 42, "year": 2023, "status": "DRAFT"}"#).unwrap();
        assert_eq!(numeric.id, "42");

        let text: Declaration = serde_json::from_str(
            r#"{"id": "abc", "year": 2023, "status": "SUBMITTED", "deliveryDate": null}"#,
        )
        .unwrap();
        assert_eq!(text.id, "abc");
        assert_eq!(text.status, "SUBMITTED");
    }

    #[test]
    fn declaration_status_tolerates_null_and_absence() {
        let list: Vec<Declaration> = serde_json::from_str(
            r#"[{"id": 1, "year": 2023, "status": null}, {"id": 2, "year": 2022}]"#,
        )
        .unwrap();
        assert_eq!(list.len(), 2);
        assert!(list.iter().all(|d| d.status.is_empty()));
        assert_eq!(list[0].status_label(), "-");
    }

    #[test]
    fn new_account_uses_camel_case_on_the_wire() {
        let account = NewAccount {
            first_name: "Ana".into(),
            last_name: "Souza".into(),
            email: "ana@taxfy.com".into(),
            password: "segredo".into(),
        };
        let value = serde_json::to_value(&account).unwrap();
        assert_eq!(value["firstName"], "Ana");
        assert_eq!(value["lastName"], "Souza");
    }

    #[test]
    fn apply_status_only_touches_matching_entry() {
        let mut list = vec![
            Declaration {
                id: "41".into(),
                year: 2022,
                status: "DRAFT".into(),
            },
            Declaration {
                id: "42".into(),
                year: 2023,
                status: "DRAFT".into(),
            },
        ];

        assert!(Declaration::apply_status(&mut list, "42", "submitted"));
        assert_eq!(list[0].status, "DRAFT");
        assert_eq!(list[1].status, "submitted");
        assert!(!Declaration::apply_status(&mut list, "99", "submitted"));
    }
}
