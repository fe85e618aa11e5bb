use crate::commands::{CmdMessage, CmdResult, RecordsPaths};
use crate::config::RecordsConfig;
use crate::error::{RecordsError, Result};

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &RecordsPaths, action: ConfigAction) -> Result<CmdResult> {
    let mut config = RecordsConfig::load(&paths.config_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {}
        ConfigAction::ShowKey(key) => {
            if config.get(&key).is_none() {
                return Err(RecordsError::Config(format!("Unknown config key: {}", key)));
            }
        }
        ConfigAction::Set(key, value) => {
            config.set(&key, &value)?;
            config.save(&paths.config_dir)?;
            result.add_message(CmdMessage::success(format!("{} set to {}", key, value)));
        }
    }

    Ok(result.with_config(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_persists_value() {
        let dir = tempfile::tempdir().unwrap();
        let paths = RecordsPaths {
            config_dir: dir.path().to_path_buf(),
        };

        run(&paths, ConfigAction::Set("page-size".into(), "5".into())).unwrap();
        let shown = run(&paths, ConfigAction::ShowAll).unwrap();

        assert_eq!(shown.config.unwrap().page_size, 5);
    }

    #[test]
    fn unknown_key_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let paths = RecordsPaths {
            config_dir: dir.path().to_path_buf(),
        };

        assert!(run(&paths, ConfigAction::ShowKey("nope".into())).is_err());
        assert!(run(&paths, ConfigAction::Set("nope".into(), "1".into())).is_err());
    }
}
