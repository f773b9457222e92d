use super::Transport;
use crate::auth::CredentialProvider;
use crate::error::{DrugaiError, Result};
use serde::{Deserialize, Serialize};

pub const CHECKOUT_PATH: &str = "/checkout";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutRequest<'a> {
    pub email: &'a str,
}

/// Where to send the user after asking the checkout endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "url", rename_all = "snake_case")]
pub enum CheckoutOutcome {
    /// Already subscribed: back to the dashboard.
    Redirect(String),
    /// New subscriber: a hosted checkout session.
    Checkout(String),
}

impl CheckoutOutcome {
    pub fn url(&self) -> &str {
        match self {
            CheckoutOutcome::Redirect(url) | CheckoutOutcome::Checkout(url) => url,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CheckoutReply {
    redirect_url: Option<String>,
    url: Option<String>,
}

/// Starts (or short-circuits) a subscription checkout for `email`.
pub fn start_checkout<T, C>(transport: &T, credentials: &C, email: &str) -> Result<CheckoutOutcome>
where
    T: Transport + ?Sized,
    C: CredentialProvider + ?Sized,
{
    let email = email.trim();
    if email.is_empty() {
        return Err(DrugaiError::Api(
            "An email address is required to start checkout".into(),
        ));
    }
    if !credentials.is_authenticated() {
        return Err(DrugaiError::Unauthenticated);
    }
    let token = credentials.credential()?;
    let body = serde_json::to_value(CheckoutRequest { email })?;
    let reply = transport.post_json(CHECKOUT_PATH, &token, &body)?;

    if !reply.is_success() {
        tracing::warn!(status = reply.status, "checkout failed");
        return Err(DrugaiError::Http {
            status: reply.status,
            body: reply.body,
        });
    }

    let parsed: CheckoutReply = serde_json::from_str(&reply.body)
        .map_err(|e| DrugaiError::InvalidResponse(format!("checkout reply: {}", e)))?;
    match (parsed.redirect_url, parsed.url) {
        (Some(url), _) => Ok(CheckoutOutcome::Redirect(url)),
        (None, Some(url)) => Ok(CheckoutOutcome::Checkout(url)),
        (None, None) => Err(DrugaiError::InvalidResponse(
            "checkout reply carried neither redirectUrl nor url".into(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::StaticCredentials;
    use crate::service::memory::CannedTransport;
    use serde_json::json;

    #[test]
    fn existing_subscriber_is_redirected() {
        let transport = CannedTransport::new()
            .with_reply(200, r#"{"redirectUrl":"https://drugai.example/dashboard"}"#);
        let creds = StaticCredentials::signed_in("jwt");

        let outcome = start_checkout(&transport, &creds, "a@b.co").unwrap();
        assert_eq!(
            outcome,
            CheckoutOutcome::Redirect("https://drugai.example/dashboard".into())
        );
        assert_eq!(transport.requests()[0].path, "/checkout");
        assert_eq!(transport.requests()[0].body, json!({"email": "a@b.co"}));
    }

    #[test]
    fn new_subscriber_gets_checkout_url() {
        let transport =
            CannedTransport::new().with_reply(200, r#"{"url":"https://pay.example/s/123"}"#);
        let creds = StaticCredentials::signed_in("jwt");

        let outcome = start_checkout(&transport, &creds, "a@b.co").unwrap();
        assert_eq!(outcome.url(), "https://pay.example/s/123");
        assert!(matches!(outcome, CheckoutOutcome::Checkout(_)));
    }

    #[test]
    fn empty_reply_is_invalid() {
        let transport = CannedTransport::new().with_reply(200, "{}");
        let creds = StaticCredentials::signed_in("jwt");
        assert!(matches!(
            start_checkout(&transport, &creds, "a@b.co"),
            Err(DrugaiError::InvalidResponse(_))
        ));
    }

    #[test]
    fn missing_email_sends_nothing() {
        let transport = CannedTransport::new();
        let creds = StaticCredentials::signed_in("jwt");
        assert!(matches!(
            start_checkout(&transport, &creds, "   "),
            Err(DrugaiError::Api(_))
        ));
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn server_error_is_surfaced() {
        let transport =
            CannedTransport::new().with_reply(400, r#"{"error":"Missing user email"}"#);
        let creds = StaticCredentials::signed_in("jwt");
        match start_checkout(&transport, &creds, "a@b.co") {
            Err(DrugaiError::Http { status, body }) => {
                assert_eq!(status, 400);
                assert!(body.contains("Missing user email"));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn signed_out_is_rejected() {
        let transport = CannedTransport::new();
        let creds = StaticCredentials::signed_out();
        assert!(matches!(
            start_checkout(&transport, &creds, "a@b.co"),
            Err(DrugaiError::Unauthenticated)
        ));
    }
}
