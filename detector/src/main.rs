use std::fs::{File, create_dir_all};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Parser;
use reqwest::Client;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing_subscriber::EnvFilter;

use detector::Mode;
use detector::analysis::AnalysisOrchestrator;
use detector::backends::gemini::DEFAULT_MODEL;
use detector::backends::gemini_backends;
use detector::generation::GenerationOrchestrator;
use detector::types::{SimilarityReport, SourceText};
use detector::utilities::flag;

#[derive(Parser, Debug)]
#[command(version, about = "Generate AI variants for a question and check a submission against them")]
struct Args {
    /// The programming question the submission answers
    #[arg(long)]
    question: String,
    /// Language of the submission, e.g. "python"
    #[arg(long)]
    language: String,
    /// Path to the submitted source file
    #[arg(long)]
    submission: PathBuf,
    /// Use canned variants and local line matching instead of calling Gemini.
    /// `MOCK_MODE=1` or `MOCK_MODE=true` does the same.
    #[arg(long)]
    mock: bool,
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,
    #[arg(long, env = "GEMINI_MODEL", default_value = DEFAULT_MODEL)]
    model: String,
    #[arg(long, env = "GEMINI_BASE_URL")]
    base_url: Option<String>,
    #[arg(long, default_value_t = 120)]
    timeout_secs: u64,
    /// Write the JSON report here instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct Output {
    generated_codes: BTreeMap<String, String>,
    similarity_report: SimilarityReport,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new("detector=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mode = resolve_mode(&args)?;

    let code = std::fs::read_to_string(&args.submission)
        .with_context(|| format!("reading {}", args.submission.display()))?;
    let submission = SourceText::new(code, args.language.as_str());

    let variants = GenerationOrchestrator::new(mode.clone())
        .generate(&args.question, &args.language)
        .await
        .context("generating variants")?;
    let report = AnalysisOrchestrator::new(mode)
        .analyze(&submission, &args.question, &variants, &args.language)
        .await
        .context("analyzing submission")?;

    let out = Output {
        generated_codes: variants.codes(false),
        similarity_report: report,
    };
    match &args.out {
        Some(path) => {
            save_json(&out, path)?;
            eprintln!("Saved report to {}", path.display());
        }
        None => println!("{}", serde_json::to_string_pretty(&out)?),
    }
    Ok(())
}

fn mock_requested(flag_set: bool, env_value: Option<&str>) -> bool {
    flag_set || env_value.is_some_and(flag::is_enabled)
}

fn resolve_mode(args: &Args) -> Result<Mode> {
    if mock_requested(args.mock, std::env::var("MOCK_MODE").ok().as_deref()) {
        return Ok(Mode::Mock);
    }
    let Some(api_key) = args.api_key.as_deref().filter(|k| !k.is_empty()) else {
        bail!("GEMINI_API_KEY (or --api-key) is required unless --mock is set");
    };
    let client = Client::builder()
        .timeout(Duration::from_secs(args.timeout_secs))
        .build()
        .context("building HTTP client")?;
    Ok(Mode::Live(gemini_backends(
        client,
        api_key,
        &args.model,
        args.base_url.as_deref(),
    )))
}

fn save_json(out: &Output, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent).with_context(|| format!("creating dir {}", parent.display()))?;
        }
    }
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    serde_json::to_writer_pretty(file, out).context("writing JSON")
}
