use crate::api::PromptPad;
use crate::core::text;
use console::style;

/// List every saved prompt, most recently updated first.
pub fn run(pad: &PromptPad) -> Result<(), String> {
    let prompts = pad.list_ordered();

    if prompts.is_empty() {
        println!("{}", style("No prompts found").yellow());
        return Ok(());
    }

    println!("{}", style("Saved prompts:").green().bold());
    for prompt in prompts {
        println!(
            "  {} {} - {}",
            style("•").green(),
            style(&prompt.id).yellow(),
            prompt.title
        );
        println!("      {}", style(text::snippet(&prompt.content)).dim());
    }
    Ok(())
}
