use crate::api::PromptPad;
use crate::core::text;
use console::style;

/// Search prompts by title, case-insensitively.
pub fn run(pad: &PromptPad, query: &str) -> Result<(), String> {
    let hits = pad.search(query);

    if hits.is_empty() {
        println!("{}", style("No match").yellow());
        return Ok(());
    }

    println!("{}", style("Matches:").green().bold());
    for prompt in hits {
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
