use anyhow::Context;
use clap::Parser;
use hitstand_drivers::{parse_config_from_file, server, Config};

const DEFAULT_CONFIG_PATH: &str = "~/.hitstand.yml";
const DEFAULT_CONFIG_FILE: &str = ".hitstand.yml";

#[derive(Debug, Parser)]
#[command(author, about, long_about = None)]
struct CommandLineArgs {
    /// The path of the config file
    #[arg(short, long, default_value_t = String::from(DEFAULT_CONFIG_PATH))]
    config: String,

    /// Overrides the host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Overrides the port to listen on
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,
}

/// Without `--config`, a missing `~/.hitstand.yml` means the defaults. An
/// explicitly given file must exist.
fn load_config(path: &str) -> anyhow::Result<Config> {
    if path != DEFAULT_CONFIG_PATH {
        return parse_config_from_file(path);
    }
    let home_dir = home::home_dir().context("cannot find home directory")?;
    let config_file_path = home_dir.join(DEFAULT_CONFIG_FILE);
    if !config_file_path.exists() {
        log::info!("no config file at {}, using defaults", config_file_path.display());
        return Ok(Config::default());
    }
    if config_file_path.is_dir() {
        anyhow::bail!("{} should be a file rather than a directory", config_file_path.display());
    }
    let config_file_path = config_file_path
        .to_str()
        .context("config file path is not valid UTF-8")?;
    parse_config_from_file(config_file_path)
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = CommandLineArgs::parse();
    let mut config = load_config(&args.config)?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    log::debug!("{:#?}", config);

    server::run(&config.server).await?;
    Ok(())
}
