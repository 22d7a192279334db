#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

mod api;
mod cli;
mod core;
mod prelude;
mod quantity;
mod store;

use std::{env, path::PathBuf, process::ExitCode};

use clap::{Parser, crate_version};

use crate::{cli::Args, core::pipeline::Stage, prelude::*};

fn main() -> ExitCode {
    tracing_subscriber::fmt().without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    match try_main() {
        Ok(()) => {
            info!("done!");
            ExitCode::SUCCESS
        }
        Err(error) => {
            error!("{error:#}");
            Stage::of(&error).map_or(ExitCode::FAILURE, |stage| ExitCode::from(stage.exit_code()))
        }
    }
}

fn try_main() -> Result {
    load_environment()?;
    Args::parse().command.run()
}

/// Load the file from `ENV_FILE`, or `.env` if it exists.
fn load_environment() -> Result {
    if let Some(path) = env::var_os("ENV_FILE").map(PathBuf::from) {
        dotenvy::from_path(&path)
            .with_context(|| format!("failed to load the environment from `{}`", path.display()))?;
    } else {
        let _ = dotenvy::dotenv();
    }
    Ok(())
}
