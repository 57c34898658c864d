use crate::api::PromptPad;
use console::style;
use dialoguer::{theme::ColorfulTheme, Editor, Input};

/// Create a new prompt.
pub fn run(pad: &mut PromptPad) -> Result<(), String> {
    let theme = ColorfulTheme::default();

    let title: String = Input::with_theme(&theme)
        .with_prompt("Title")
        .interact_text()
        .map_err(|e| format!("Title error: {}", e))?;

    let content = Editor::new()
        .edit("Enter your prompt content here.")
        .map_err(|e| format!("Editor error: {}", e))?
        .unwrap_or_default();

    // No selection means save creates rather than updates.
    pad.select(None).map_err(|e| e.to_string())?;
    let outcome = pad.save(&title, &content).map_err(|e| e.to_string())?;

    println!(
        "{} Prompt saved with ID {} and title '{}'",
        style("•").green().bold(),
        style(outcome.id()).yellow(),
        title.trim()
    );
    Ok(())
}
