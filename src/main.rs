//! main.rs
//! Entry point for lsr

pub(crate) mod app;
pub(crate) mod config;
pub(crate) mod core;
pub(crate) mod utils;

use crate::config::Config;
use crate::utils::cli::{CliAction, handle_args};

use std::process::ExitCode;

fn main() -> ExitCode {
    let request = match handle_args() {
        CliAction::Run(request) => request,
        CliAction::Exit => return ExitCode::SUCCESS,
    };

    let config = Config::load();
    app::run(&request, &config)
}
