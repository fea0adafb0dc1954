// src/main.rs
use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use notion_viewer::config::Command;
use notion_viewer::formatting::table::RenderConfig;
use notion_viewer::{
    build_gateway, extract_database_id, server, AppState, CommandLineInput, NotionId,
    RecordFilter, SearchScope, Viewer, ViewerConfig,
};
use std::fs;
use std::net::SocketAddr;

/// Sets up logging configuration.
///
/// The console gets warnings (info for the server, debug when verbose) on
/// stderr so table output on stdout stays clean. The file always gets debug.
fn setup_logging(verbose: bool, serving: bool) -> anyhow::Result<()> {
    let log_level = match (verbose, serving) {
        (true, _) => LevelFilter::Debug,
        (false, true) => LevelFilter::Info,
        (false, false) => LevelFilter::Warn,
    };

    let log_file_path = std::env::temp_dir().join("notion_viewer.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose || serving {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let console_appender = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] {t} - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(log_level)))
                .build("console", Box::new(console_appender)),
        )
        .appender(Appender::builder().build("file", Box::new(file_appender)))
        .build(
            Root::builder()
                .appender("console")
                .appender("file")
                .build(LevelFilter::Debug),
        )?;

    log4rs::init_config(config)?;
    log::debug!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

async fn run_server(host: &str, port: u16, mock: bool) -> anyhow::Result<()> {
    let config = ViewerConfig::resolve(mock)?;
    let state = AppState::new(build_gateway(&config)?);
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .with_context(|| format!("invalid listen address {}:{}", host, port))?;

    server::serve(addr, state).await?;
    Ok(())
}

async fn run_table(
    target: &str,
    search: String,
    property: &str,
    icons: bool,
    mock: bool,
) -> anyhow::Result<()> {
    let config = ViewerConfig::resolve(mock)?;
    let id = NotionId::parse(target)
        .with_context(|| format!("'{}' is not a Notion database URL or ID", target))?;

    let scope: SearchScope = property.parse()?;
    let filter = RecordFilter::new(search, scope);
    let render = RenderConfig {
        show_kind_icons: icons,
        ..RenderConfig::default()
    };

    let viewer = Viewer::new(build_gateway(&config)?);
    let output = viewer.show(&id, &filter, render).await?;
    print!("{}", output);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose, matches!(cli.command, Command::Serve { .. }))?;

    match cli.command {
        Command::Serve { host, port, mock } => run_server(&host, port, mock).await,
        Command::Table {
            target,
            search,
            property,
            icons,
            mock,
        } => run_table(&target, search, &property, icons, mock).await,
        Command::ExtractId { url } => {
            println!("{}", extract_database_id(&url)?);
            Ok(())
        }
    }
}
