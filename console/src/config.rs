use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::tictactoe::GameMode;
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "tictactoe_console_config.yaml";

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager(
    path_override: Option<&str>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    match path_override {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(&get_config_path()),
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub default_mode: GameMode,
    #[serde(default = "default_show_move_list")]
    pub show_move_list: bool,
    pub log_prefix: String,
}

fn default_show_move_list() -> bool {
    true
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if self.log_prefix.trim().is_empty() {
            return Err("log_prefix must not be empty".to_string());
        }
        if self.log_prefix.contains(['[', ']']) {
            return Err("log_prefix must not contain brackets".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_mode: GameMode::default(),
            show_move_list: default_show_move_list(),
            log_prefix: "Console".to_string(),
        }
    }
}
