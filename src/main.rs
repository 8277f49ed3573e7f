use std::path::PathBuf;
use std::process::exit;
use std::sync::Arc;

use clap::Parser;
use tracing::{error, info, subscriber};
use tracing_log::LogTracer;
use tracing_subscriber::filter::EnvFilter;

use dbms_console::cli::DbmsCli;
use dbms_console::config::schema::{load_config, validate_config, DEFAULT_CONFIG_FILE};
use dbms_console::rest::HttpRestClient;
use dbms_console::utils::run_one_off_command;

#[derive(Debug, Parser)]
#[clap(
    name = "dbms-console",
    about = "Manage databases, tables and rows over the DBMS REST API",
    version
)]
struct Args {
    #[clap(short, long, default_value = DEFAULT_CONFIG_FILE)]
    config_path: PathBuf,

    #[clap(long, help = "REST API base URL, overrides rest.base_url from the config")]
    base_url: Option<String>,

    #[clap(long, help = "Run commands separated by ';' and exit")]
    one_off: Option<String>,

    #[clap(long, help = "Emit log lines as JSON")]
    json_logs: bool,
}

fn prepare_tracing(json_logs: bool) {
    // Redirect all `log`'s events to our subscriber, to collect the ones from our deps too
    LogTracer::init().expect("Failed to set logger");

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let sub = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);

    if json_logs {
        subscriber::set_global_default(sub.json().finish())
    } else {
        subscriber::set_global_default(sub.finish())
    }
    .expect("Unable to set global tracing subscriber");
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    prepare_tracing(args.json_logs);

    let mut config = match load_config(&args.config_path, None) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed loading the config from {:?}: {e}", args.config_path);
            exit(1);
        }
    };

    if let Some(base_url) = args.base_url {
        config.rest.base_url = base_url;
        config = match validate_config(config) {
            Ok(config) => config,
            Err(e) => {
                error!("{e}");
                exit(1);
            }
        };
    }

    let client = match HttpRestClient::try_new(&config.rest) {
        Ok(client) => client,
        Err(e) => {
            error!("{e}");
            exit(1);
        }
    };
    info!("Using the DBMS REST API at {}", client.base_url());

    let mut cli = DbmsCli::new(Arc::new(client), config.cli.history_file.clone());

    let result = match args.one_off {
        Some(commands) => run_one_off_command(&mut cli, &commands, std::io::stdout()).await,
        None => cli.repl_loop().await,
    };

    if let Err(e) = result {
        error!("{e}");
        exit(1);
    }
}
