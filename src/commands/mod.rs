use crate::api::PromptPad;
use crate::cli::Cmd;

pub mod copy;
pub mod delete;
pub mod edit;
pub mod list;
pub mod new;
pub mod search;
pub mod show;

/// Dispatches the parsed command to the appropriate handler.
pub fn dispatch(command: Cmd, pad: &mut PromptPad) -> Result<(), String> {
    match command {
        Cmd::List => list::run(pad),
        Cmd::New => new::run(pad),
        Cmd::Show { id } => show::run(pad, &id),
        Cmd::Edit { id } => edit::run(pad, &id),
        Cmd::Delete { id } => delete::run(pad, &id),
        Cmd::Search { query } => search::run(pad, &query),
        Cmd::Copy { id } => copy::run(pad, &id),
    }
}
