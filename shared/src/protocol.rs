use crate::{AuthToken, Credentials, Declaration, NewAccount, SubmitReceipt};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
        }
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
///
/// The serialised request value is the JSON body; path parameters are `#[serde(skip)]`.
pub trait ApiRequest: Serialize {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// Whether the request carries a JSON body.
    const HAS_BODY: bool = true;

    /// The URL path, relative to the API base URL.
    fn path(&self) -> String;

    /// Parses a 2xx body. An empty body arrives as `"null"`.
    fn decode_response(body: &str) -> serde_json::Result<Self::Response> {
        serde_json::from_str(body)
    }
}

// =========================================================
// Request Definitions
// =========================================================

/// Exchange credentials for a bearer token
impl ApiRequest for Credentials {
    type Response = AuthToken;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/auth".to_string()
    }
}

/// Create an account. Any 2xx body is accepted.
impl ApiRequest for NewAccount {
    type Response = ();
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/register".to_string()
    }

    fn decode_response(_body: &str) -> serde_json::Result<()> {
        Ok(())
    }
}

/// Create a declaration for a year
#[derive(Debug, Clone, Serialize)]
pub struct CreateDeclarationRequest {
    pub year: i32,
}

impl ApiRequest for CreateDeclarationRequest {
    type Response = Declaration;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/declarations".to_string()
    }
}

/// List the declaration history of the authenticated user
#[derive(Debug, Serialize)]
pub struct ListHistoryRequest;

impl ApiRequest for ListHistoryRequest {
    type Response = Option<Vec<Declaration>>;
    const METHOD: HttpMethod = HttpMethod::Get;
    const HAS_BODY: bool = false;

    fn path(&self) -> String {
        "/declarations/history".to_string()
    }
}

/// Fetch one declaration
#[derive(Debug, Serialize)]
pub struct GetDeclarationRequest {
    #[serde(skip)]
    pub id: String,
}

impl ApiRequest for GetDeclarationRequest {
    type Response = Declaration;
    const METHOD: HttpMethod = HttpMethod::Get;
    const HAS_BODY: bool = false;

    fn path(&self) -> String {
        format!("/declarations/{}", self.id)
    }
}

/// Change the year of a declaration. Any 2xx body is accepted.
#[derive(Debug, Serialize)]
pub struct UpdateDeclarationRequest {
    #[serde(skip)]
    pub id: String,
    pub year: i32,
}

impl ApiRequest for UpdateDeclarationRequest {
    type Response = ();
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> String {
        format!("/declarations/{}", self.id)
    }

    fn decode_response(_body: &str) -> serde_json::Result<()> {
        Ok(())
    }
}

/// Transition a declaration to submitted.
///
/// The reply may carry the new status; anything else (empty, text, other JSON)
/// yields an empty receipt.
#[derive(Debug, Serialize)]
pub struct SubmitDeclarationRequest {
    #[serde(skip)]
    pub id: String,
}

impl ApiRequest for SubmitDeclarationRequest {
    type Response = SubmitReceipt;
    const METHOD: HttpMethod = HttpMethod::Post;
    const HAS_BODY: bool = false;

    fn path(&self) -> String {
        format!("/declarations/{}/submit", self.id)
    }

    fn decode_response(body: &str) -> serde_json::Result<SubmitReceipt> {
        Ok(serde_json::from_str::<Option<SubmitReceipt>>(body)
            .ok()
            .flatten()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_parameters_stay_out_of_the_body() {
        let req = UpdateDeclarationRequest {
            id: "7".into(),
            year: 2022,
        };
        assert_eq!(req.path(), "/declarations/7");
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({ "year": 2022 })
        );
    }

    #[test]
    fn submit_path_targets_the_declaration() {
        let req = SubmitDeclarationRequest { id: "42".into() };
        assert_eq!(req.path(), "/declarations/42/submit");
        assert_eq!(SubmitDeclarationRequest::METHOD, HttpMethod::Post);
    }

    #[test]
    fn body_agnostic_endpoints_accept_plain_text() {
        assert!(NewAccount::decode_response("Usuário criado").is_ok());
        assert!(UpdateDeclarationRequest::decode_response("OK").is_ok());
        assert_eq!(
            SubmitDeclarationRequest::decode_response("Enviada").unwrap(),
            SubmitReceipt::default()
        );
        assert_eq!(
            SubmitDeclarationRequest::decode_response(r#"{"status":"submitted"}"#)
                .unwrap()
                .status
                .as_deref(),
            Some("submitted")
        );
    }

    #[test]
    fn typed_endpoints_still_reject_malformed_bodies() {
        assert!(GetDeclarationRequest::decode_response("<html>").is_err());
        assert!(Credentials::decode_response("OK").is_err());
    }
}
