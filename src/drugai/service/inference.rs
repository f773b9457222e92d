use super::{Reply, Transport};
use crate::auth::CredentialProvider;
use crate::error::{DrugaiError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const INVOKE_PATH: &str = "/invoke";

/// Status the inference endpoint uses for an exhausted monthly quota.
pub const QUOTA_EXCEEDED_STATUS: u16 = 402;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InferenceRequest<'a> {
    pub prompt: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferenceResponse {
    pub result: String,
    /// Requests used so far this month, including this one.
    pub usage: u64,
}

impl fmt::Display for InferenceResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Result: {}\nUsed this month: {}", self.result, self.usage)
    }
}

/// Sends `prompt` to the inference endpoint.
///
/// Nothing is sent when no one is signed in. A `402` reply becomes
/// [`DrugaiError::QuotaExceeded`]; any other non-success reply becomes
/// [`DrugaiError::Http`] carrying the body as-is.
pub fn invoke<T, C>(transport: &T, credentials: &C, prompt: &str) -> Result<InferenceResponse>
where
    T: Transport + ?Sized,
    C: CredentialProvider + ?Sized,
{
    if !credentials.is_authenticated() {
        return Err(DrugaiError::Unauthenticated);
    }
    let token = credentials.credential()?;
    let body = serde_json::to_value(InferenceRequest { prompt })?;
    let reply = transport.post_json(INVOKE_PATH, &token, &body)?;
    interpret(reply)
}

fn interpret(reply: Reply) -> Result<InferenceResponse> {
    if reply.status == QUOTA_EXCEEDED_STATUS {
        tracing::warn!("inference quota exceeded");
        return Err(DrugaiError::QuotaExceeded);
    }
    if !reply.is_success() {
        tracing::warn!(status = reply.status, "inference failed");
        return Err(DrugaiError::Http {
            status: reply.status,
            body: reply.body,
        });
    }
    serde_json::from_str(&reply.body)
        .map_err(|e| DrugaiError::InvalidResponse(format!("inference reply: {}", e)))
}
