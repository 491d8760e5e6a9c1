use anyhow::Result;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Deserialize, Default)]
pub struct Config {
    pub data_dir: Option<PathBuf>,
    pub daily_goal: Option<u32>,
    pub dark_mode: Option<bool>,
}

impl Config {
    pub fn daily_goal(&self) -> u32 {
        self.daily_goal.unwrap_or(3)
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode.unwrap_or(true)
    }
}

pub fn load_config() -> Result<Config> {
    let config_path = dirs::config_dir()
        .map(|d| d.join("grindstone").join("config.toml"))
        .unwrap_or_else(|| PathBuf::from("~/.config/grindstone/config.toml"));

    if !config_path.exists() {
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(&config_path)?;
    parse_config(&content)
}

pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = basic_toml::from_str(content)?;
    Ok(config)
}

pub fn resolve_data_dir(cli_dir: Option<&PathBuf>, config: &Config) -> Result<PathBuf> {
    let env_dir = std::env::var("GRINDSTONE_DATA").ok();
    pick_data_dir(cli_dir, env_dir.as_deref(), config)
}

fn pick_data_dir(cli_dir: Option<&PathBuf>, env_dir: Option<&str>, config: &Config) -> Result<PathBuf> {
    // 1. CLI flag
    if let Some(dir) = cli_dir {
        return Ok(dir.clone());
    }

    // 2. GRINDSTONE_DATA env, ignored when empty
    if let Some(env_dir) = env_dir.filter(|s| !s.is_empty()) {
        return Ok(PathBuf::from(env_dir));
    }

    // 3. Config file
    if let Some(ref dir) = config.data_dir {
        return Ok(dir.clone());
    }

    // 4. Platform data directory
    dirs::data_dir()
        .map(|d| d.join("grindstone"))
        .ok_or_else(|| anyhow::anyhow!("no data directory for this platform"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.daily_goal(), 3);
        assert!(config.dark_mode());
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn test_parse_empty_toml() {
        let config = parse_config("").unwrap();
        assert_eq!(config.daily_goal(), 3);
    }

    #[test]
    fn test_parse_full_toml() {
        let toml = r#"
data_dir = "/home/user/.grind"
daily_goal = 5
dark_mode = false
"#;
        let config = parse_config(toml).unwrap();
        assert_eq!(config.data_dir, Some(PathBuf::from("/home/user/.grind")));
        assert_eq!(config.daily_goal(), 5);
        assert!(!config.dark_mode());
    }

    #[test]
    fn test_parse_invalid_toml() {
        assert!(parse_config("daily_goal = \"lots\"").is_err());
    }

    #[test]
    fn test_resolve_data_dir_cli_flag_wins() {
        let config = Config {
            data_dir: Some(PathBuf::from("/from/config")),
            ..Config::default()
        };
        let dir = pick_data_dir(Some(&PathBuf::from("/from/flag")), Some("/from/env"), &config).unwrap();
        assert_eq!(dir, PathBuf::from("/from/flag"));
    }

    #[test]
    fn test_resolve_data_dir_env_beats_config() {
        let config = Config {
            data_dir: Some(PathBuf::from("/from/config")),
            ..Config::default()
        };
        let dir = pick_data_dir(None, Some("/from/env"), &config).unwrap();
        assert_eq!(dir, PathBuf::from("/from/env"));
    }

    #[test]
    fn test_resolve_data_dir_empty_env_falls_through() {
        let config = Config {
            data_dir: Some(PathBuf::from("/from/config")),
            ..Config::default()
        };
        let dir = pick_data_dir(None, Some(""), &config).unwrap();
        assert_eq!(dir, PathBuf::from("/from/config"));

        let dir = pick_data_dir(None, None, &config).unwrap();
        assert_eq!(dir, PathBuf::from("/from/config"));
    }

    #[test]
    fn test_resolve_data_dir_platform_default() {
        let Ok(dir) = pick_data_dir(None, Some(""), &Config::default()) else {
            return;
        };
        assert!(dir.ends_with("grindstone"));
        assert_ne!(dir, PathBuf::from(""));
    }
}
