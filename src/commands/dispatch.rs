//! Command dispatch logic for pathviz

use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use pathviz_core::error::Result;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    match &cli.command {
        Commands::Path {
            file,
            source,
            target,
        } => commands::path::execute(cli, file, source, target, start),

        Commands::Trace {
            file,
            source,
            target,
        } => commands::trace::execute(cli, file, source, target, start),

        Commands::Random {
            nodes,
            density,
            max_weight,
            seed,
            output,
        } => commands::random::execute(
            cli,
            *nodes,
            *density,
            *max_weight,
            *seed,
            output.as_deref(),
            start,
        ),

        Commands::Show { file } => commands::show::execute(cli, file, start),
    }
}
