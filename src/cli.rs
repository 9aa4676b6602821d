//! One-shot `generate` command: runs the pipeline once from the terminal

use anyhow::{bail, Context};
use log::info;
use std::path::PathBuf;

use crate::generator::Generator;

pub const USAGE: &str = "Usage:
  neuroui [serve]                          Start the web UI
  neuroui generate <prompt...> [--out FILE] Generate one component and print its source
  neuroui --help                           Show this message

Environment:
  GEMINI_API_KEY            API key for the generation endpoint
  NEUROUI_MODEL             Model id (default gemini-2.5-flash)
  NEUROUI_LLM_URL           Endpoint base URL
  NEUROUI_LLM_TIMEOUT_SECS  Upstream timeout in seconds (default 120)
  SERVER_HOST, SERVER_PORT  Listen address (default 127.0.0.1:8080)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateArgs {
    pub prompt: String,
    pub out: Option<PathBuf>,
}

pub fn parse_generate_args(args: &[String]) -> anyhow::Result<GenerateArgs> {
    let mut words = Vec::new();
    let mut out = None;
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--out" | "-o" => {
                let path = iter.next().context("--out requires a file path")?;
                out = Some(PathBuf::from(path));
            }
            _ => words.push(arg.as_str()),
        }
    }

    Ok(GenerateArgs {
        prompt: words.join(" "),
        out,
    })
}

/// Returns the export text that was written.
pub async fn run_generate(generator: &Generator, args: &GenerateArgs) -> anyhow::Result<String> {
    let mounted = match generator.generate(&args.prompt).await {
        Ok(mounted) => mounted,
        Err(e) => bail!("{}", e.banner()),
    };
    let source = mounted.component.export_text();

    match &args.out {
        Some(path) => {
            tokio::fs::write(path, &source)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(
                "Wrote '{}' to {}",
                mounted.component.name,
                path.display()
            );
        }
        None => println!("{}", source),
    }

    Ok(source)
}
