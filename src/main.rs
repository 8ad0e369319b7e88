use anyhow::Result;
use clap::Parser;
use enroll::{cli::Cli, ui::terminal_guard::install_panic_hook, util, App, Config};
use std::fs::{self, OpenOptions};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    util::init_data_dir(cli.data_dir.clone());

    // Initialize logging to file (~/.enroll/logs/enroll.log)
    fs::create_dir_all(util::logs_dir())?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(util::log_file_path())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(log_file)
        .with_ansi(false) // Disable ANSI colors in log file
        .init();

    let config = match &cli.config {
        Some(path) => Config::load_or_default(path),
        None => Config::load(),
    };
    let config = cli.apply(config);

    install_panic_hook();

    let mut app = App::new(config);
    app.run().await
}
