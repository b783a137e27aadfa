//! Command implementations for the trip processor CLI
//!
//! This module contains the command execution logic, logging setup and
//! run reporting shared across commands.

pub mod load;
pub mod shared;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Run the command selected on the command line
pub fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Commands::Load(load_args)) => {
            load::run_load(load_args)?;
            Ok(())
        }
        // main prints help before dispatching when no subcommand was given
        None => Ok(()),
    }
}
