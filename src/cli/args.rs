use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::ui::GlyphStyle;

#[derive(Parser, Debug)]
#[command(name = "mygpt")]
#[command(about = "MyGPT - Ollama Terminal Chat")]
#[command(version)]
pub struct Args {
    /// Ollama model to use
    #[arg(short = 'm', long, global = true)]
    pub model: Option<String>,

    /// Spinner style
    #[arg(short = 's', long, value_enum, global = true)]
    pub style: Option<GlyphStyle>,

    /// Ollama server URL
    #[arg(short = 'e', long, global = true)]
    pub endpoint: Option<String>,

    /// Enable debug logging on stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a speed test against the model and exit
    Bench {
        /// Prompt sent on every iteration
        #[arg(short = 'p', long)]
        prompt: Option<String>,

        /// Number of iterations
        #[arg(short = 'n', long, value_parser = clap::value_parser!(u64).range(1..))]
        iterations: Option<u64>,

        /// Where to write the chart
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },
    /// List installed Ollama models
    Models,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_starts_chat() {
        let args = Args::try_parse_from(["mygpt"]).unwrap();
        assert!(args.command.is_none());
        assert!(args.model.is_none());
        assert!(args.style.is_none());
        assert!(!args.verbose);
    }

    #[test]
    fn test_model_and_style_flags() {
        let args = Args::try_parse_from(["mygpt", "-m", "phi3", "-s", "braille"]).unwrap();
        assert_eq!(args.model.as_deref(), Some("phi3"));
        assert_eq!(args.style, Some(GlyphStyle::Braille));
    }

    #[test]
    fn test_unknown_style_rejected() {
        assert!(Args::try_parse_from(["mygpt", "--style", "sparkles"]).is_err());
    }

    #[test]
    fn test_bench_subcommand_with_global_flags() {
        let args =
            Args::try_parse_from(["mygpt", "bench", "-n", "3", "--model", "phi3", "-o", "x.svg"])
                .unwrap();
        assert_eq!(args.model.as_deref(), Some("phi3"));
        match args.command {
            Some(Command::Bench {
                iterations, output, ..
            }) => {
                assert_eq!(iterations, Some(3));
                assert_eq!(output, Some(PathBuf::from("x.svg")));
            }
            other => panic!("expected bench, got {other:?}"),
        }
    }

    #[test]
    fn test_bench_rejects_zero_iterations() {
        assert!(Args::try_parse_from(["mygpt", "bench", "--iterations", "0"]).is_err());
    }
}
