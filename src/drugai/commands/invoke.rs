use crate::auth::CredentialProvider;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{DrugaiError, Result};
use crate::pricing::plan;
use crate::service::guard::InFlight;
use crate::service::inference;
use crate::service::Transport;

pub fn run<T, C>(
    transport: &T,
    credentials: &C,
    guard: &InFlight,
    prompt: &str,
) -> Result<CmdResult>
where
    T: Transport + ?Sized,
    C: CredentialProvider + ?Sized,
{
    let _ticket = guard.try_begin()?;
    match inference::invoke(transport, credentials, prompt) {
        Ok(response) => Ok(CmdResult::default().with_inference(response)),
        Err(DrugaiError::QuotaExceeded) => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::warning(
                "You have used all predictions included in your plan this month.",
            ));
            result.add_message(CmdMessage::info(upgrade_hint()));
            Ok(result)
        }
        Err(e) => Err(e),
    }
}

fn upgrade_hint() -> String {
    match plan("Pro") {
        Some(pro) => format!(
            "Upgrade to {} (${}/mo, {} predictions per month): run `drugai subscribe`",
            pro.name, pro.monthly_price_usd, pro.predictions_per_month
        ),
        None => "Upgrade your plan: run `drugai subscribe`".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::StaticCredentials;
    use crate::commands::MessageLevel;
    use crate::service::memory::CannedTransport;

    #[test]
    fn success_carries_the_response() {
        let transport =
            CannedTransport::new().with_reply(200, r#"{"result":"Echo: hi","usage":1}"#);
        let creds = StaticCredentials::signed_in("jwt");
        let guard = InFlight::new();

        let result = run(&transport, &creds, &guard, "hi").unwrap();
        assert_eq!(result.inference.unwrap().usage, 1);
        assert!(!guard.is_busy());
    }

    #[test]
    fn quota_becomes_call_to_action() {
        let transport = CannedTransport::new().with_reply(402, "{}");
        let creds = StaticCredentials::signed_in("jwt");
        let guard = InFlight::new();

        let result = run(&transport, &creds, &guard, "hi").unwrap();
        assert!(result.inference.is_none());
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert!(result.messages[1].content.contains("drugai subscribe"));
        assert!(result.messages[1].content.contains("$29/mo"));
    }

    #[test]
    fn busy_guard_sends_nothing() {
        let transport = CannedTransport::new();
        let creds = StaticCredentials::signed_in("jwt");
        let guard = InFlight::new();
        let _held = guard.try_begin().unwrap();

        assert!(matches!(
            run(&transport, &creds, &guard, "hi"),
            Err(DrugaiError::Busy)
        ));
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn guard_released_after_failure() {
        let transport = CannedTransport::new().with_reply(500, "boom");
        let creds = StaticCredentials::signed_in("jwt");
        let guard = InFlight::new();

        assert!(run(&transport, &creds, &guard, "hi").is_err());
        assert!(!guard.is_busy());
    }
}
