use crate::commands::{CmdMessage, CmdResult};
use crate::config::DrugaiConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = DrugaiConfig::load(config_dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = DrugaiConfig::load(config_dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Ok(val) => result.add_message(CmdMessage::info(val)),
                Err(e) => result.add_message(CmdMessage::error(e.to_string())),
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = DrugaiConfig::load(config_dir)?;
            if let Err(e) = config.set(&key, &value) {
                let mut res = CmdResult::default();
                res.add_message(CmdMessage::error(e.to_string()));
                return Ok(res);
            }
            config.save(config_dir)?;
            let display_val = config.get(&key).unwrap_or_else(|_| value.clone());
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;

    #[test]
    fn set_then_show() {
        let dir = tempfile::tempdir().unwrap();
        let res = run(
            dir.path(),
            ConfigAction::Set("default-sort".into(), "likes".into()),
        )
        .unwrap();
        assert_eq!(res.messages[0].content, "default-sort set to Most likes");

        let res = run(dir.path(), ConfigAction::ShowKey("default-sort".into())).unwrap();
        assert_eq!(res.messages[0].content, "Most likes");
    }

    #[test]
    fn show_all_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let res = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(res.config, Some(DrugaiConfig::default()));
    }

    #[test]
    fn bad_key_is_reported_not_saved() {
        let dir = tempfile::tempdir().unwrap();
        let res = run(dir.path(), ConfigAction::Set("colour".into(), "red".into())).unwrap();
        assert_eq!(res.messages[0].level, MessageLevel::Error);
        assert!(!dir.path().join("config.json").exists());
    }
}
