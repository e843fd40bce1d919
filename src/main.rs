mod adapters;
mod app;
mod cli;
mod core;
mod global_constants;
mod presentation;

use std::process::ExitCode;

use clap::Parser;

use crate::global_constants::LOG_TAG_MAIN;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::init();

    log::info!("{} Starting {}", LOG_TAG_MAIN, global_constants::APPLICATION_NAME);

    let cli = cli::Cli::parse();
    let json = cli.json;

    let outcome = match app::FormatterApp::build(cli.json) {
        Ok(app) => app.run(cli).await,
        Err(error) => Err(error),
    };

    match outcome {
        Ok(exit_code) => exit_code,
        Err(error) => {
            log::error!("{} {:#}", LOG_TAG_MAIN, error);
            match presentation::result_output::render_app_error(json, &error) {
                Ok(rendered) if json => println!("{}", rendered),
                Ok(rendered) => eprintln!("{}", rendered),
                Err(_) => eprintln!("error: {:#}", error),
            }
            ExitCode::FAILURE
        }
    }
}
