use clap::Parser;
use prompt_pad::api::PromptPad;
use prompt_pad::cli::Cli;
use prompt_pad::commands;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("• {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();

    let (mut pad, _outcome) = match cli.store {
        Some(path) => PromptPad::open(path),
        None => PromptPad::init().map_err(|e| e.to_string())?,
    };

    commands::dispatch(cli.command, &mut pad)
}
