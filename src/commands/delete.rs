use crate::api::PromptPad;
use console::style;

/// Delete a prompt. Deleting an id that does not exist is a no-op.
pub fn run(pad: &mut PromptPad, id: &str) -> Result<(), String> {
    if pad.delete(id).map_err(|e| e.to_string())? {
        println!("{} prompt {} deleted", style("•").green().bold(), id);
    } else {
        println!("{} no prompt with ID {}", style("•").yellow(), id);
    }
    Ok(())
}
