use crate::api::PromptPad;
use console::style;
use dialoguer::{theme::ColorfulTheme, Editor, Input};

/// Edit an existing prompt's title and content.
pub fn run(pad: &mut PromptPad, id: &str) -> Result<(), String> {
    pad.select(Some(id)).map_err(|e| e.to_string())?;
    let current = pad
        .selected()
        .cloned()
        .ok_or_else(|| format!("No prompt with ID '{}'", id))?;

    let theme = ColorfulTheme::default();

    let title: String = Input::with_theme(&theme)
        .with_prompt("Title")
        .with_initial_text(&current.title)
        .interact_text()
        .map_err(|e| format!("Title error: {}", e))?;

    let content = Editor::new()
        .edit(&current.content)
        .map_err(|e| format!("Editor error: {}", e))?
        .unwrap_or_else(|| current.content.clone());

    if title == current.title && content == current.content {
        println!("{}", style("No changes detected. Nothing to save.").yellow());
        return Ok(());
    }

    pad.save(&title, &content).map_err(|e| e.to_string())?;
    println!(
        "{} Prompt '{}' updated successfully.",
        style("✔").green().bold(),
        id
    );
    Ok(())
}
