use crate::api::PromptPad;
use console::style;

/// Display a prompt.
pub fn run(pad: &PromptPad, id: &str) -> Result<(), String> {
    let prompt = pad
        .get(id)
        .ok_or_else(|| format!("No prompt with ID {}", id))?;

    println!("{} {}", style("Title:").green().bold(), prompt.title);
    println!("{}", style("Content:").green().bold());
    println!("{}", prompt.content);
    Ok(())
}
