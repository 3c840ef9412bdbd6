use poem::Request;
use poem_openapi::SecurityScheme;
use poem_openapi::auth::ApiKey;

use business::domain::shared::value_objects::SessionId;

/// Client session identifier sent in the `X-Session-Id` header.
///
/// Scopes history and scan state only; it is not authentication.
#[derive(SecurityScheme)]
#[oai(
    ty = "api_key",
    key_name = "X-Session-Id",
    key_in = "header",
    checker = "session_checker"
)]
pub struct SessionHeader(pub SessionId);

async fn session_checker(_req: &Request, api_key: ApiKey) -> Option<SessionId> {
    match SessionId::parse(&api_key.key) {
        Ok(id) => Some(id),
        Err(e) => {
            tracing::warn!("Rejected session header: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(value: &str) -> ApiKey {
        ApiKey {
            key: value.to_string(),
        }
    }

    #[tokio::test]
    async fn should_accept_non_blank_session_id() {
        let req = Request::default();

        let session = session_checker(&req, key(" tab-42 ")).await;

        assert_eq!(session, Some(SessionId::new("tab-42")));
    }

    #[tokio::test]
    async fn should_reject_blank_session_id() {
        let req = Request::default();
        assert!(session_checker(&req, key("  ")).await.is_none());
    }
}
