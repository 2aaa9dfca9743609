use anyhow::Result;
use clap::{App as Cli, Arg};
use log::LevelFilter;
use task_assistant::app::App;
use task_assistant::config::Config;
use task_assistant::error::AppError;
use task_assistant::logger::{CustomLogger, LogBuffer};

fn main() -> Result<()> {
    let matches = Cli::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Directory holding config.yml")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("url")
                .short("u")
                .long("url")
                .value_name("BASE_URL")
                .help("Backend base URL, overrides the configuration file")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("debug")
                .short("d")
                .long("debug")
                .help("Show debug lines in the log pane"),
        )
        .get_matches();

    let logs = LogBuffer::default();
    let level = if matches.is_present("debug") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    CustomLogger::new(level, logs.clone())
        .init()
        .map_err(|e| AppError::Logger(e.to_string()))?;

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;
    if let Some(url) = matches.value_of("url") {
        config.base_url = url.to_owned();
    }

    App::start(config, logs)
}
