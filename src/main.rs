//! # chatmirror CLI
//!
//! Command-line interface for the chatmirror library.

use std::fs;
use std::path::Path;
use std::process;
use std::time::Instant;

use chrono::Utc;
use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use chatmirror::analysis::{ConversationAnalysis, analysis_request, load_completion};
use chatmirror::cli::Args;
use chatmirror::config::AnalysisConfig;
use chatmirror::core::ConversationStats;
use chatmirror::core::output::{export_filename, to_session_json, to_transcript};
use chatmirror::format::{OutputFormat, to_format_string, write_to_format};
use chatmirror::ingest::{ParsedChat, ingest_file};
use chatmirror::persona::persona_prompt;
use chatmirror::session::NewSession;
use chatmirror::Result;

fn main() {
    let args = <Args as ClapParser>::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {e}");
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .init();
}

fn run(args: &Args) -> Result<()> {
    let start = Instant::now();

    let chat = ingest_file(&args.input, args.platform.platform(), &args.ingest_config())?;
    let parse_time = start.elapsed();

    let format = resolve_format(args)?;
    match &args.output {
        Some(path) => write_to_format(&chat.messages, path, format)?,
        None => print!("{}", to_format_string(&chat.messages, format)?),
    }

    let analysis_config = AnalysisConfig::default();
    if let Some(path) = &args.analysis_prompt {
        let request = analysis_request(&chat.messages, &analysis_config);
        fs::write(path, serde_json::to_string_pretty(&request)?)?;
        tracing::info!(path = %path.display(), "wrote analysis request");
    }

    let analysis = args.analysis_response.as_deref().and_then(read_analysis);

    if let Some(path) = &args.persona_prompt {
        fs::write(path, persona_prompt(analysis.as_ref()))?;
    }

    let filename = args.input.file_name().and_then(|n| n.to_str());
    let session = NewSession::new(filename, chat.platform, chat.len(), analysis);

    if let Some(path) = &args.export {
        write_export(path, &session, &chat)?;
    }

    print_summary(args, &chat, &session, format, parse_time.as_secs_f64());
    Ok(())
}

/// An unusable analysis response leaves the session without insights.
fn read_analysis(path: &Path) -> Option<ConversationAnalysis> {
    match load_completion(path) {
        Ok(analysis) => Some(analysis),
        Err(e) => {
            tracing::warn!(error = %e, "continuing without analysis");
            None
        }
    }
}

fn resolve_format(args: &Args) -> Result<OutputFormat> {
    if let Some(format) = args.format {
        return Ok(format.into());
    }
    match &args.output {
        Some(path) => OutputFormat::from_path(path),
        None => Ok(OutputFormat::default()),
    }
}

fn write_export(path: &Path, session: &NewSession, chat: &ParsedChat) -> Result<()> {
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    let body = if is_json {
        to_session_json(session, &chat.messages)?
    } else {
        to_transcript(session, &chat.messages, Utc::now())
    };

    fs::write(path, body)?;
    tracing::info!(
        path = %path.display(),
        suggested = %export_filename(session, if is_json { "json" } else { "txt" }),
        "exported session"
    );
    Ok(())
}

fn print_summary(
    args: &Args,
    chat: &ParsedChat,
    session: &NewSession,
    format: OutputFormat,
    seconds: f64,
) {
    let stats = ConversationStats::from_messages(&chat.messages);

    eprintln!("📦 chatmirror v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    eprintln!("📂 Input:     {}", args.input.display());
    eprintln!("📖 Platform:  {}", chat.platform);
    if let Some(output) = &args.output {
        eprintln!("💾 Output:    {} ({format})", output.display());
    }
    eprintln!("💬 Messages:  {} ({:.2}s)", stats.total, seconds);
    eprintln!("👥 Senders:   {}", stats.unique_senders);
    for entry in &stats.top_senders {
        eprintln!("   {:>6}  {}", entry.messages, entry.sender);
    }
    if session.analysis_complete {
        eprintln!("🧠 Analysis:  loaded");
    }
}
