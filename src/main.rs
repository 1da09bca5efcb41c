use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;

use quiz_worker::commands::{self, Action};
use quiz_worker::config::Config;
use quiz_worker::input;
use quiz_worker::llm::CompletionClient;
use quiz_worker::logging;

#[derive(Parser, Debug)]
#[command(
    name = "quiz-worker",
    version,
    about = "Generate quizzes and score feedback as JSON.",
    long_about = "Reads a JSON request on stdin and writes one JSON object to stdout. \
                  Uses the OpenAI API when OPENAI_API_KEY is set and falls back to \
                  deterministic placeholder content otherwise."
)]
struct Cli {
    /// What to generate
    #[arg(value_enum, value_name = "ACTION", default_value = "generate_quiz")]
    action: Action,

    /// Extra arguments after the action are accepted and ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    _rest: Vec<String>,
}

#[tokio::main]
async fn main() {
    logging::init();

    if let Err(err) = run_cli().await {
        eprintln!("{:?}", err);
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::from_env();
    config.log_summary();
    let client = CompletionClient::from_config(&config);

    let payload = input::read_payload(io::stdin().lock());
    let output = commands::dispatch(cli.action, &client, &payload).await?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .context("Failed to write response to stdout")?;
    stdout.flush().context("Failed to flush stdout")?;
    Ok(())
}
