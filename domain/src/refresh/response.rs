//! Refresh endpoint payload.
//!
//! The listing endpoint answers an asynchronous request with:
//!
//! ```json
//! { "success": true,  "html": { "content": "…", "sidebar_main": "…" } }
//! { "success": false, "error_message": "…" }
//! ```
//!
//! Any other shape is malformed and is handled like a transport failure.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Raw JSON body returned by the refresh endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<RefreshHtml>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

/// Rendered fragments carried by a successful response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshHtml {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sidebar_main: Option<String>,
}

impl RefreshResponse {
    pub fn success(html: RefreshHtml) -> Self {
        Self {
            success: true,
            html: Some(html),
            error_message: None,
        }
    }

    pub fn failure(error_message: Option<String>) -> Self {
        Self {
            success: false,
            html: None,
            error_message,
        }
    }

    /// Parse and validate a response body.
    pub fn from_json(body: &str) -> Result<RefreshResult, DomainError> {
        let response: RefreshResponse = serde_json::from_str(body)
            .map_err(|e| DomainError::MalformedResponse(e.to_string()))?;
        response.into_result()
    }

    /// Validate the shape. `success: true` requires an `html` object.
    pub fn into_result(self) -> Result<RefreshResult, DomainError> {
        if self.success {
            let html = self.html.ok_or_else(|| {
                DomainError::MalformedResponse("successful response without html".to_string())
            })?;
            Ok(RefreshResult {
                success: true,
                content: non_empty(html.content),
                sidebar: non_empty(html.sidebar_main),
                error_message: None,
            })
        } else {
            Ok(RefreshResult {
                success: false,
                content: None,
                sidebar: None,
                error_message: non_empty(self.error_message),
            })
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Validated outcome of an asynchronous fetch. Consumed immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshResult {
    pub success: bool,
    /// Main listing fragment; `None` leaves the region untouched
    pub content: Option<String>,
    /// Sidebar fragment; `None` leaves the region untouched
    pub sidebar: Option<String>,
    pub error_message: Option<String>,
}

impl RefreshResult {
    pub fn has_updates(&self) -> bool {
        self.content.is_some() || self.sidebar.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_with_both_regions() {
        let result = RefreshResponse::from_json(
            r#"{"success":true,"html":{"content":"<ol></ol>","sidebar_main":"<div></div>"}}"#,
        )
        .unwrap();
        assert!(result.success);
        assert_eq!(result.content.as_deref(), Some("<ol></ol>"));
        assert_eq!(result.sidebar.as_deref(), Some("<div></div>"));
    }

    #[test]
    fn test_success_with_empty_regions() {
        let result =
            RefreshResponse::from_json(r#"{"success":true,"html":{"content":""}}"#).unwrap();
        assert!(result.success);
        assert!(!result.has_updates());
    }

    #[test]
    fn test_failure_with_message() {
        let result =
            RefreshResponse::from_json(r#"{"success":false,"error_message":"No products"}"#)
                .unwrap();
        assert!(!result.success);
        assert_eq!(result.error_message.as_deref(), Some("No products"));
    }

    #[test]
    fn test_success_without_html_is_malformed() {
        let err = RefreshResponse::from_json(r#"{"success":true}"#).unwrap_err();
        assert!(matches!(err, DomainError::MalformedResponse(_)));
    }

    #[test]
    fn test_non_json_is_malformed() {
        let err = RefreshResponse::from_json("<html>oops</html>").unwrap_err();
        assert!(matches!(err, DomainError::MalformedResponse(_)));
    }

    #[test]
    fn test_missing_success_flag_is_malformed() {
        assert!(RefreshResponse::from_json(r#"{"html":{}}"#).is_err());
    }
}
