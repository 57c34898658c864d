use crate::api::PromptPad;
use crate::core::text;
use console::style;
use copypasta::{ClipboardContext, ClipboardProvider};

/// Copy a prompt's plain-text content to the clipboard.
pub fn run(pad: &PromptPad, id: &str) -> Result<(), String> {
    let prompt = pad
        .get(id)
        .ok_or_else(|| format!("No prompt with ID {}", id))?;

    let mut clipboard = ClipboardContext::new().map_err(|e| format!("Clipboard error: {}", e))?;
    clipboard
        .set_contents(text::plain_text(&prompt.content))
        .map_err(|e| format!("Clipboard set error: {}", e))?;

    println!("{} copied to clipboard", style("•").green().bold());
    Ok(())
}
