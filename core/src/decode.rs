//! Response interpretation shared by every endpoint.
//!
//! A 200 body must match the expected shape or the call fails. Any other
//! status is a soft failure: the error body is logged when it parses and the
//! caller gets `None` either way.

use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::ErrorShape;

const STATUS_OK: u16 = 200;

/// Decode `response` into `T`, or `None` when the API reported a failure.
///
/// A literal `null` success body also yields `None`.
pub fn decode<T: DeserializeOwned>(
    request: &HttpRequest,
    response: &HttpResponse,
) -> Result<Option<T>, ApiError> {
    if response.status == STATUS_OK {
        return serde_json::from_str::<Option<T>>(&response.body).map_err(|source| {
            ApiError::Decode {
                endpoint: request.action,
                url: request.url.clone(),
                source,
            }
        });
    }

    match serde_json::from_str::<ErrorShape>(&response.body) {
        Ok(remote) => error!(
            endpoint = %request.action,
            url = %request.url,
            status = response.status,
            code = remote.code,
            remote_message = %remote.message,
            "Error by {} at endpoint {}: code {}: {}",
            request.action,
            request.url,
            remote.code,
            remote.message
        ),
        // Unreadable error bodies are indistinguishable from "not found" for
        // the caller; keep a trace of them below the default level.
        Err(e) => debug!(
            endpoint = %request.action,
            url = %request.url,
            status = response.status,
            error = %e,
            "Unparseable error body"
        ),
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use crate::types::{Category, Update};

    fn request(action: Action) -> HttpRequest {
        HttpRequest {
            action,
            url: format!("http://localhost:3000/index.php?action={action}"),
        }
    }

    #[test]
    fn success_decodes_single_record() {
        let response = HttpResponse::new(
            200,
            r#"{"id":"7","resource_id":"2","title":"v2","message":"notes"}"#,
        );
        let update: Option<Update> =
            decode(&request(Action::GetResourceUpdate), &response).unwrap();
        let update = update.unwrap();
        assert_eq!(update.id, 7);
        assert_eq!(update.resource_id, 2);
    }

    #[test]
    fn success_decodes_sequence() {
        let response = HttpResponse::new(
            200,
            r#"[{"id":1,"title":"Bungee"},{"id":"2","title":"Spigot"}]"#,
        );
        let categories: Option<Vec<Category>> =
            decode(&request(Action::ListResourceCategories), &response).unwrap();
        let categories = categories.unwrap();
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[1].title, "Spigot");
    }

    #[test]
    fn success_null_body_is_none() {
        let response = HttpResponse::new(200, "null");
        let result: Option<Category> = decode(&request(Action::GetResource), &response).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn success_malformed_body_is_fatal() {
        let response = HttpResponse::new(200, r#"{"id":"x"}"#);
        let err = decode::<Category>(&request(Action::GetResource), &response).unwrap_err();
        match err {
            ApiError::Decode { endpoint, url, .. } => {
                assert_eq!(endpoint, Action::GetResource);
                assert!(url.contains("action=getResource"));
            }
            other => panic!("expected Decode, got {other:?}"),
        }
    }

    #[test]
    fn success_empty_body_is_fatal() {
        let response = HttpResponse::new(200, "");
        assert!(decode::<Category>(&request(Action::GetResource), &response).is_err());
    }

    #[test]
    fn error_shape_yields_none() {
        let response = HttpResponse::new(404, r#"{"code":404,"message":"Not Found"}"#);
        let result: Option<Category> = decode(&request(Action::GetResource), &response).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn unparseable_error_body_yields_none() {
        for body in ["", "<html>bad gateway</html>", "{\"code\":\"x\"}"] {
            let response = HttpResponse::new(502, body);
            let result: Option<Vec<Category>> =
                decode(&request(Action::ListResourceCategories), &response).unwrap();
            assert!(result.is_none(), "body {body:?}");
        }
    }

    #[test]
    fn non_200_success_codes_are_soft_failures() {
        let response = HttpResponse::new(204, r#"{"id":1,"title":"c"}"#);
        let result: Option<Category> = decode(&request(Action::GetResource), &response).unwrap();
        assert!(result.is_none());
    }
}
