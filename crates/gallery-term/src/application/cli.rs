use std::io;
use std::path;

use anyhow::bail;
use anyhow::Result;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::Command;
use clap_complete::generate;
use clap_complete::Generator;
use clap_complete::Shell;
use tokio::fs;

use crate::configuration::Config;
use crate::configuration::ConfigKey;

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

fn config_arg(key: ConfigKey, env: &str, help: &str) -> Arg {
    let mut help = help.to_string();
    let default = Config::default(key);
    if !default.is_empty() {
        help = format!("{help} [default: {default}]");
    }

    return Arg::new(key.to_string())
        .long(key.to_string())
        .env(env.to_string())
        .num_args(1)
        .help(help);
}

fn arg_api_url() -> Arg {
    return config_arg(
        ConfigKey::ApiUrl,
        "GALLERY_API_URL",
        "Base URL of the artworks API.",
    );
}

fn arg_website_url() -> Arg {
    return config_arg(
        ConfigKey::WebsiteUrl,
        "GALLERY_WEBSITE_URL",
        "Base URL used for image and artwork page links.",
    );
}

fn arg_max_retries() -> Arg {
    return config_arg(
        ConfigKey::MaxRetries,
        "GALLERY_MAX_RETRIES",
        "Retries allowed when a fetched page has no artwork left after applying bans.",
    );
}

fn arg_retry_delay() -> Arg {
    return config_arg(
        ConfigKey::RetryDelay,
        "GALLERY_RETRY_DELAY",
        "Milliseconds to wait between retries.",
    );
}

fn arg_request_timeout() -> Arg {
    return config_arg(
        ConfigKey::RequestTimeout,
        "GALLERY_REQUEST_TIMEOUT",
        "Per request timeout in milliseconds, 0 disables it.",
    );
}

fn arg_log_level() -> Arg {
    return config_arg(ConfigKey::LogLevel, "GALLERY_LOG_LEVEL", "Log level.")
        .value_parser(["trace", "debug", "info", "warn", "error"]);
}

fn arg_log_file() -> Arg {
    return config_arg(
        ConfigKey::LogFile,
        "GALLERY_LOG_FILE",
        "Path of the log file.",
    );
}

fn arg_config_file() -> Arg {
    return config_arg(
        ConfigKey::ConfigFile,
        "GALLERY_CONFIG_FILE",
        "Path to configuration file.",
    )
    .short('c');
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions")
        .arg(
            Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for")
                .action(ArgAction::Set)
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options")
        .arg_required_else_help(true)
        .subcommand(Command::new("create").about("Saves the default config file to the configuration file path. This command will fail if the file exists already."))
        .subcommand(Command::new("default").about("Outputs the default configuration file to stdout"))
        .subcommand(Command::new("path").about("Returns the default path for the configuration file"));
}

pub fn build() -> Command {
    let about = format!(
        "{}\n\nBrowse random artworks from the Art Institute of Chicago. Ban artists, origins, or mediums you don't want to see.",
        env!("CARGO_PKG_DESCRIPTION")
    );

    return Command::new("gallery")
        .about(about)
        .version(env!("CARGO_PKG_VERSION"))
        .arg_required_else_help(false)
        .subcommand(subcommand_completions())
        .subcommand(subcommand_config())
        .arg(arg_api_url())
        .arg(arg_website_url())
        .arg(arg_max_retries())
        .arg(arg_retry_delay())
        .arg(arg_request_timeout())
        .arg(arg_log_level())
        .arg(arg_log_file())
        .arg(arg_config_file());
}

async fn create_config_file() -> Result<()> {
    let config_file = Config::default(ConfigKey::ConfigFile);
    let config_path = path::PathBuf::from(&config_file);
    if config_path.exists() {
        bail!(format!("Config file already exists at {config_file}"));
    }

    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent).await?;
    }
    fs::write(&config_path, Config::serialize_default(build())).await?;
    println!("Created default config file at {config_file}");

    return Ok(());
}

/// Returns true when the gallery UI should start.
pub async fn parse() -> Result<bool> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("completions", subcmd_matches)) => {
            if let Some(completions) = subcmd_matches.get_one::<Shell>("shell").copied() {
                let mut app = build();
                print_completions(completions, &mut app);
            }
        }
        Some(("config", subcmd_matches)) => match subcmd_matches.subcommand() {
            Some(("create", _)) => {
                create_config_file().await?;
            }
            Some(("default", _)) => {
                println!("{}", Config::serialize_default(build()));
            }
            Some(("path", _)) => {
                println!("{}", Config::default(ConfigKey::ConfigFile));
            }
            _ => {
                subcommand_config().print_long_help()?;
            }
        },
        _ => {
            Config::load(build(), vec![&matches]).await?;
            return Ok(true);
        }
    }

    return Ok(false);
}
