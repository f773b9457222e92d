use crate::auth::{CredentialProvider, TOKEN_ENV};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::pricing::{subscribe_action, SubscribeAction};
use crate::service::checkout::{start_checkout, CheckoutOutcome};
use crate::service::guard::InFlight;
use crate::service::Transport;

pub fn run<T, C>(
    transport: &T,
    credentials: &C,
    guard: &InFlight,
    email: Option<&str>,
) -> Result<CmdResult>
where
    T: Transport + ?Sized,
    C: CredentialProvider + ?Sized,
{
    let mut result = CmdResult::default();

    match subscribe_action(credentials.is_authenticated()) {
        SubscribeAction::SignIn { redirect_url } => {
            result.add_message(CmdMessage::warning(format!(
                "Sign in to subscribe, then continue at {}",
                redirect_url
            )));
            result.add_message(CmdMessage::info(format!(
                "Set {} to your session token and run `drugai subscribe` again",
                TOKEN_ENV
            )));
            Ok(result)
        }
        SubscribeAction::StartCheckout => {
            let _ticket = guard.try_begin()?;
            let outcome = start_checkout(transport, credentials, email.unwrap_or(""))?;
            let message = match &outcome {
                CheckoutOutcome::Redirect(url) => {
                    format!("You already have a subscription. Dashboard: {}", url)
                }
                CheckoutOutcome::Checkout(url) => format!("Continue to checkout: {}", url),
            };
            result.add_message(CmdMessage::success(message));
            Ok(result.with_checkout(outcome))
        }
    }
}
