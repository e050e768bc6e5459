use serde::{Deserialize, Serialize};

use crate::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use crate::engine::{Difficulty, Mark};

const CONFIG_FILE: &str = "tictactoe_config.yaml";

pub fn get_config_manager()
-> ConfigManager<FileContentConfigProvider, GameSettings, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(CONFIG_FILE)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameSettings {
    pub difficulty: Difficulty,
    /// Which side the human controls. X always moves first, so giving
    /// the human O means the computer opens the game.
    pub human_mark: Mark,
    /// Fixed RNG seed for the session; `None` draws a random one.
    pub seed: Option<u64>,
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        if self.human_mark == Mark::Empty {
            return Err("human_mark must be X or O".to_string());
        }
        Ok(())
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Easy,
            human_mark: Mark::X,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigContentProvider;

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_config_{}.yaml", random_number));
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_default_settings_are_valid() {
        assert!(GameSettings::default().validate().is_ok());
    }

    #[test]
    fn test_empty_human_mark_is_rejected() {
        let settings = GameSettings {
            human_mark: Mark::Empty,
            ..GameSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_missing_config_file_yields_defaults() {
        let manager: ConfigManager<FileContentConfigProvider, GameSettings> =
            ConfigManager::from_yaml_file(&get_temp_file_path());
        assert_eq!(manager.get_config().unwrap(), GameSettings::default());
    }

    #[test]
    fn test_config_round_trip_through_file() {
        let path = get_temp_file_path();
        let settings = GameSettings {
            difficulty: Difficulty::Hard,
            human_mark: Mark::O,
            seed: Some(1234),
        };

        let manager: ConfigManager<FileContentConfigProvider, GameSettings> =
            ConfigManager::from_yaml_file(&path);
        manager.set_config(&settings).unwrap();

        // A fresh manager must read the same settings back from disk.
        let reloaded: ConfigManager<FileContentConfigProvider, GameSettings> =
            ConfigManager::from_yaml_file(&path);
        assert_eq!(reloaded.get_config().unwrap(), settings);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_invalid_settings_are_not_saved() {
        let path = get_temp_file_path();
        let settings = GameSettings {
            human_mark: Mark::Empty,
            ..GameSettings::default()
        };

        let manager: ConfigManager<FileContentConfigProvider, GameSettings> =
            ConfigManager::from_yaml_file(&path);
        assert!(manager.set_config(&settings).is_err());

        let provider = FileContentConfigProvider::new(path);
        assert_eq!(provider.get_config_content().unwrap(), None);
    }
}
