//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Reads its input (arguments, a file, or stdin)
//! 2. Calls into `core` or `molecule` for the actual decision
//! 3. Formats and displays output as text or JSON
//!
//! Handlers hold no policy of their own.

mod classify;
mod completion;
mod config_cmd;
mod edges;
mod gate;
mod input;
mod ordinal;
mod sort;
mod steps;

// Re-export command functions for testing and direct invocation
pub use classify::classify;
pub use completion::completion;
pub use config_cmd::{get as config_get, list as config_list, set as config_set};
pub use edges::edges;
pub use gate::gate;
pub use ordinal::ordinal;
pub use sort::sort;
pub use steps::steps;

use crate::cli::args::{Command, ConfigAction};
use crate::cli::Context;
use anyhow::Result;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Classify { types } => classify::classify(ctx, &types),
        Command::Edges { file } => edges::edges(ctx, file.as_deref()),
        Command::Ordinal { ids } => ordinal::ordinal(ctx, &ids),
        Command::Sort { ids, check } => sort::sort(ctx, ids, check),
        Command::Steps { file } => steps::steps(ctx, file.as_deref()),
        Command::Gate {
            file,
            next,
            hide_done,
        } => gate::gate(ctx, file.as_deref(), next, hide_done),
        Command::Config { action } => match action {
            ConfigAction::Get { key } => config_cmd::get(ctx, &key),
            ConfigAction::Set { key, value, global } => {
                config_cmd::set(ctx, &key, &value, global)
            }
            ConfigAction::List => config_cmd::list(ctx),
        },
        Command::Completion { shell } => completion::completion(shell),
    }
}
