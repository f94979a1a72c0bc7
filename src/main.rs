use anyhow::Result;
use clap::Parser;

use mygpt::cli::commands::{bench, chat, models};
use mygpt::cli::{Args, Command};
use mygpt::client::OllamaClient;
use mygpt::config::{ConfigManager, ResolveOptions, ResolvedConfig, resolve_config};
use mygpt::logging;
use mygpt::ui::Style;

#[tokio::main]
async fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {e:#}", Style::error("Error:"));
            std::process::exit(exitcode::CONFIG);
        }
    };

    let code = match run(args.command, config).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {e:#}", Style::error("Error:"));
            exitcode::SOFTWARE
        }
    };
    std::process::exit(code);
}

async fn run(command: Option<Command>, config: ResolvedConfig) -> Result<exitcode::ExitCode> {
    match command {
        Some(Command::Models) => {
            let client = OllamaClient::new(config.endpoint);
            models::list_models(&client).await?;
        }
        Some(Command::Bench { .. }) => {
            if !bench::run_bench(&config).await {
                return Ok(exitcode::UNAVAILABLE);
            }
        }
        None => chat::run_chat(config).await?,
    }

    Ok(exitcode::OK)
}

fn load_config(args: &Args) -> Result<ResolvedConfig> {
    let manager = ConfigManager::new()?;
    let file_config = manager.load_or_default()?;

    let mut options = ResolveOptions {
        model: args.model.clone(),
        style: args.style,
        endpoint: args.endpoint.clone(),
        ..ResolveOptions::default()
    };
    if let Some(Command::Bench {
        prompt,
        iterations,
        output,
    }) = &args.command
    {
        options.prompt.clone_from(prompt);
        options.iterations = iterations.map(|n| n as usize);
        options.output.clone_from(output);
    }

    resolve_config(&options, &file_config)
}
