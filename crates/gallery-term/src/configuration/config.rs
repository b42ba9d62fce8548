#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::path;
use std::str::FromStr;

use anyhow::anyhow;
use anyhow::bail;
use anyhow::Result;
use clap::ArgMatches;
use clap::Command;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;
use tokio::fs;

static CONFIG: Lazy<DashMap<String, String>> = Lazy::new(DashMap::new);

#[derive(Clone, Copy, Debug, Eq, PartialEq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ConfigKey {
    ApiUrl,
    ConfigFile,
    LogFile,
    LogLevel,
    MaxRetries,
    RequestTimeout,
    RetryDelay,
    WebsiteUrl,
}

impl ConfigKey {
    /// Keys that must hold a non-negative integer.
    pub fn is_integer(&self) -> bool {
        return matches!(
            self,
            ConfigKey::MaxRetries | ConfigKey::RequestTimeout | ConfigKey::RetryDelay
        );
    }
}

fn app_dir(base: Option<path::PathBuf>) -> path::PathBuf {
    return base
        .unwrap_or_else(|| path::PathBuf::from("."))
        .join("gallery");
}

pub struct Config {}

impl Config {
    pub fn get(key: ConfigKey) -> String {
        if let Some(val) = CONFIG.get(&key.to_string()) {
            return val.to_string();
        }

        return "".to_string();
    }

    pub fn get_parsed<T: FromStr>(key: ConfigKey) -> Result<T>
    where
        T::Err: std::fmt::Display,
    {
        let val = Config::get(key);
        return val
            .parse::<T>()
            .map_err(|err| anyhow!("Invalid value for '{key}': {val} ({err})"));
    }

    pub fn set(key: ConfigKey, value: &str) {
        CONFIG.insert(key.to_string(), value.to_string());
    }

    pub fn default(key: ConfigKey) -> String {
        let config_path = app_dir(dirs::config_dir()).join("config.toml");
        let log_path = app_dir(dirs::cache_dir()).join("gallery.log");

        let res = match key {
            ConfigKey::ApiUrl => gallery_client::DEFAULT_API_URL.to_string(),
            ConfigKey::WebsiteUrl => gallery_client::DEFAULT_WEBSITE_URL.to_string(),
            ConfigKey::LogLevel => "info".to_string(),
            ConfigKey::MaxRetries => "5".to_string(),
            ConfigKey::RequestTimeout => "0".to_string(),
            ConfigKey::RetryDelay => "0".to_string(),

            // Special
            ConfigKey::ConfigFile => config_path.to_string_lossy().to_string(),
            ConfigKey::LogFile => log_path.to_string_lossy().to_string(),
        };

        return res;
    }

    fn validate() -> Result<()> {
        for key in ConfigKey::iter().filter(|key| key.is_integer()) {
            let val = Config::get(key);
            if val.parse::<u64>().is_err() {
                bail!(format!(
                    "Invalid value for '{key}': {val}\nExpected a non-negative integer"
                ));
            }
        }

        return Ok(());
    }

    pub async fn load(cmd: Command, clap_arg_matches: Vec<&ArgMatches>) -> Result<()> {
        for key in ConfigKey::iter() {
            Config::set(key, &Config::default(key))
        }

        let mut config_file = Config::default(ConfigKey::ConfigFile);
        for matches in clap_arg_matches.as_slice() {
            if let Ok(Some(arg_config_file)) =
                matches.try_get_one::<String>(&ConfigKey::ConfigFile.to_string())
            {
                config_file = arg_config_file.to_string();
            }
        }
        Config::set(ConfigKey::ConfigFile, &config_file);

        let config_path = path::PathBuf::from(config_file);
        if config_path.exists() {
            let toml_str = fs::read_to_string(config_path).await?;
            let doc = toml_str.parse::<toml_edit::Document>()?;

            for key in ConfigKey::iter() {
                if key == ConfigKey::ConfigFile {
                    continue;
                }

                if let Some(val) = doc.get(&key.to_string()) {
                    // Use clap value parsers to do validation.
                    let mut possible_values = vec![];
                    if let Some(arg) = cmd
                        .get_arguments()
                        .find(|e| return e.get_long() == Some(key.to_string().as_str()))
                    {
                        if !arg.get_possible_values().is_empty() {
                            possible_values = arg
                                .get_possible_values()
                                .iter()
                                .map(|e| return e.get_name().to_string())
                                .collect::<Vec<String>>();
                        }
                    }

                    if let Some(val_int) = val.as_integer() {
                        Config::set(key, &val_int.to_string());
                    } else if let Some(val_str) = val.as_str() {
                        if val_str.is_empty() {
                            continue;
                        }
                        if !possible_values.is_empty()
                            && !possible_values.contains(&val_str.to_string())
                        {
                            bail!(format!("config.toml has an invalid value for key '{key}': {val_str}\nPossible values are: {}", possible_values.join(", ")));
                        }
                        Config::set(key, val_str);
                    }
                }
            }
        }

        for key in ConfigKey::iter() {
            if key == ConfigKey::ConfigFile {
                continue;
            }
            for matches in clap_arg_matches.as_slice() {
                if let Ok(Some(val)) = matches.try_get_one::<String>(&key.to_string()) {
                    if val.is_empty() {
                        continue;
                    }
                    Config::set(key, val)
                }
            }
        }

        Config::validate()?;

        tracing::debug!(
            api_url = Config::get(ConfigKey::ApiUrl),
            website_url = Config::get(ConfigKey::WebsiteUrl),
            max_retries = Config::get(ConfigKey::MaxRetries),
            "config"
        );

        return Ok(());
    }

    pub fn serialize_default(cmd: Command) -> String {
        let toml_str = ConfigKey::iter()
            .filter_map(|key| {
                if key == ConfigKey::ConfigFile {
                    return None;
                }

                let arg = cmd
                    .get_arguments()
                    .find(|e| return e.get_long() == Some(key.to_string().as_str()))?;

                let mut description = arg.get_help()?.to_string();

                description = description
                    .split("[default:")
                    .next()
                    .unwrap_or_default()
                    .trim()
                    .to_string();

                if !arg.get_possible_values().is_empty() {
                    let possible_values = arg
                        .get_possible_values()
                        .iter()
                        .map(|e| return e.get_name())
                        .collect::<Vec<_>>()
                        .join(", ");
                    description = format!("{description} [possible values: {}]", possible_values);
                }

                let mut val = Config::default(key);
                if val.is_empty() {
                    val = format!("# {key} = \"\"");
                } else if val.parse::<i32>().is_ok() {
                    val = format!("{key} = {val}");
                } else {
                    val = format!("{key} = \"{val}\"");
                }

                return Some(format!("# {description}\n{val}"));
            })
            .collect::<Vec<String>>()
            .join("\n\n");

        return toml_str;
    }
}
