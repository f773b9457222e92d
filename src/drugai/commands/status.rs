use crate::auth::{CredentialProvider, TOKEN_ENV};
use crate::commands::{CmdMessage, CmdResult};
use crate::config::DrugaiConfig;
use crate::error::Result;

pub fn run<C>(credentials: &C, config: &DrugaiConfig) -> Result<CmdResult>
where
    C: CredentialProvider + ?Sized,
{
    let mut result = CmdResult::default();

    if credentials.is_authenticated() {
        result.add_message(CmdMessage::success("Signed in"));
    } else {
        result.add_message(CmdMessage::warning(format!(
            "Signed out (set {} to sign in)",
            TOKEN_ENV
        )));
    }

    match &config.api_url {
        Some(url) => result.add_message(CmdMessage::info(format!("API URL: {}", url))),
        None => result.add_message(CmdMessage::warning(
            "API URL not configured (run `drugai config api-url <url>`)",
        )),
    }

    Ok(result)
}
