use crate::commands::CmdResult;
use crate::error::Result;
use crate::pricing::plans;

pub fn run() -> Result<CmdResult> {
    Ok(CmdResult::default().with_plans(plans().to_vec()))
}
