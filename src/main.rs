use std::{
    env,
    io::{self, IsTerminal},
    path::PathBuf,
    process,
};

use log::error;

mod api;
mod commands;
mod config;
mod core;
mod error;
mod shell;
#[cfg(test)]
mod testing;
mod utils;

use api::RiotClient;
use config::{Config, CONFIG_ENV};
use crate::core::reader::ScriptReader;
use error::ShellError;
use shell::{Shell, ShellContext};

fn main() -> process::ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    match try_main() {
        Ok(()) => process::ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            process::ExitCode::FAILURE
        }
    }
}

fn try_main() -> Result<(), ShellError> {
    let config_path = env::var_os(CONFIG_ENV).map(PathBuf::from);
    let config = Config::load(config_path.as_deref())?;
    if !config.color {
        colored::control::set_override(false);
    }

    shell::install_panic_hook();
    let client = RiotClient::new(&config);
    let mut shell = Shell::new(ShellContext::stdout(config), Box::new(client));

    if io::stdin().is_terminal() {
        shell.run()
    } else {
        shell.run_with(ScriptReader::new(io::stdin().lock()))
    }
}
