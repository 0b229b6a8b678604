//! Interactive CLI for the scry pipeline.
//!
//! Answers a single query given on the command line, or runs an interactive
//! prompt loop when invoked with no arguments. Tracing goes to stderr so
//! stdout carries only the ranked sources and the answer.

use anyhow::Context;
use scry::{Config, KeyPool, Pipeline};
use std::io::Write;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().context("loading configuration from environment")?;
    let keys = Arc::new(KeyPool::new(config.llm_keys.clone()).context("building key pool")?);
    let pipeline = Pipeline::new(config, keys).context("building pipeline")?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        run_query(&pipeline, &args.join(" ")).await;
        return Ok(());
    }

    interactive_loop(&pipeline).await
}

async fn interactive_loop(pipeline: &Pipeline) -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    loop {
        print!("scry> ");
        std::io::stdout().flush().context("flushing prompt")?;

        let mut line = String::new();
        let read = stdin.read_line(&mut line).context("reading query")?;
        if read == 0 {
            // EOF
            println!();
            return Ok(());
        }

        let query = line.trim();
        if query.is_empty() {
            continue;
        }
        if query == "exit" || query == "quit" {
            return Ok(());
        }

        run_query(pipeline, query).await;
    }
}

async fn run_query(pipeline: &Pipeline, query: &str) {
    let answer = pipeline.answer(query).await;

    if answer.sources.is_empty() {
        println!("No relevant sources found.");
    } else {
        println!("Sources:");
        for source in &answer.sources {
            println!("- {} ({})", source.title, source.url);
            println!("  {}", source.summary);
        }
    }

    println!();
    println!("{}", answer.text);
}
