#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::collections::HashMap;

use clap::ArgMatches;
use strum::EnumIter;
use strum::IntoEnumIterator;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, EnumIter, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ConfigKey {
    LogFile,
    LogLevel,
    Placeholder,
    Title,
}

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone)]
pub struct Config {
    values: HashMap<ConfigKey, String>,
}

impl Config {
    pub fn get(&self, key: ConfigKey) -> String {
        if let Some(val) = self.values.get(&key) {
            return val.to_string();
        }

        return "".to_string();
    }

    pub fn set(&mut self, key: ConfigKey, value: &str) {
        self.values.insert(key, value.to_string());
    }

    pub fn default(key: ConfigKey) -> String {
        let res = match key {
            ConfigKey::LogFile => "/var/log/golang/todo_tui.log",
            ConfigKey::LogLevel => "info",
            ConfigKey::Placeholder => "group name ....",
            ConfigKey::Title => "group",
        };

        return res.to_string();
    }

    /// Environment variable read by the CLI when the flag is absent.
    pub fn env_var(key: ConfigKey) -> String {
        return format!(
            "GROUP_TERM_{}",
            key.to_string().to_uppercase().replace('-', "_")
        );
    }

    pub fn defaults() -> Config {
        let mut config = Config {
            values: HashMap::new(),
        };
        for key in ConfigKey::iter() {
            config.set(key, &Config::default(key));
        }

        return config;
    }

    /// Defaults, overridden by whatever clap resolved from flags or the environment.
    pub fn load(matches: &ArgMatches) -> Config {
        let mut config = Config::defaults();
        for key in ConfigKey::iter() {
            if let Ok(Some(val)) = matches.try_get_one::<String>(&key.to_string()) {
                if val.is_empty() {
                    continue;
                }
                config.set(key, val);
            }
        }

        return config;
    }
}
