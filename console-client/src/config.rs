use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_engine::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use tictactoe_engine::games::tictactoe::FirstPlayerMode;

pub const CONFIG_FILE: &str = "tictactoe_console_config.yaml";

pub fn get_config_manager(
    path: &Path,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub first_player: FirstPlayerMode,
    pub marks: MarksConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.marks.validate()
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct MarksConfig {
    pub human: char,
    pub computer: char,
    pub empty: char,
}

impl Validate for MarksConfig {
    fn validate(&self) -> Result<(), String> {
        for (name, mark) in [("human", self.human), ("computer", self.computer), ("empty", self.empty)] {
            if mark.is_whitespace() {
                return Err(format!("{} mark must not be whitespace", name));
            }
            if mark.is_ascii_digit() {
                return Err(format!("{} mark must not be a digit", name));
            }
        }
        if self.human == self.computer || self.human == self.empty || self.computer == self.empty {
            return Err("human, computer and empty marks must differ".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            first_player: FirstPlayerMode::Human,
            marks: MarksConfig {
                human: 'O',
                computer: 'X',
                empty: '.',
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::config::{ConfigContentProvider, ConfigError, ConfigSerializer};

    fn get_temp_file_path() -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_console_config_{}.yaml", random_number));
        path
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();

        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: Config = serializer.deserialize(&serialized).unwrap();

        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_through_manager() {
        let config = Config {
            first_player: FirstPlayerMode::Random,
            marks: MarksConfig { human: 'H', computer: 'C', empty: '_' },
        };
        let file_path = get_temp_file_path();
        let manager = get_config_manager(&file_path);

        manager.set_config(&config).unwrap();
        assert_eq!(manager.get_config().unwrap(), config);

        let reloaded = get_config_manager(&file_path);
        assert_eq!(reloaded.get_config().unwrap(), config);

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager = get_config_manager(Path::new("this_file_does_not_exist.yaml"));
        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_first_player_is_written_lowercase() {
        let config = Config { first_player: FirstPlayerMode::Computer, ..Config::default() };
        let serialized = YamlConfigSerializer::new().serialize(&config).unwrap();
        assert!(serialized.contains("first_player: computer"));
    }

    #[test]
    fn test_duplicate_marks_cant_be_read() {
        let invalid_config_content = r#"
            first_player: human
            marks:
              human: X
              computer: X
              empty: "."
        "#;

        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(file_path.clone());
        content_provider.set_config_content(invalid_config_content).unwrap();

        let manager = get_config_manager(&file_path);
        assert!(matches!(manager.get_config(), Err(ConfigError::Invalid(_))));

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_whitespace_and_digit_marks_are_invalid() {
        let mut config = Config::default();
        config.marks.empty = ' ';
        assert!(config.validate().is_err());

        config.marks.empty = '5';
        assert!(config.validate().is_err());
    }
}
