use crate::catalog::Catalog;
use crate::commands::CmdResult;
use crate::error::Result;

pub fn run(catalog: &Catalog) -> Result<CmdResult> {
    Ok(CmdResult::default().with_tags(catalog.tag_universe()))
}
