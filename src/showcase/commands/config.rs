use crate::commands::{CmdMessage, CmdResult, ShowcasePaths};
use crate::config::ShowcaseConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &ShowcasePaths, action: ConfigAction) -> Result<CmdResult> {
    let mut config = ShowcaseConfig::load(&paths.config_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {
            result = result.with_config(config);
        }
        ConfigAction::ShowKey(key) => {
            let value = config.get(&key)?;
            result.add_message(CmdMessage::info(format!("{} = {}", key, value)));
        }
        ConfigAction::Set(key, value) => {
            config.set(&key, &value)?;
            config.save(&paths.config_dir)?;
            let shown = config.get(&key)?;
            result.add_message(CmdMessage::success(format!("Set {} = {}", key, shown)));
            result = result.with_config(config);
        }
    }

    Ok(result)
}
