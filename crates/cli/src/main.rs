use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use serde_json::json;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use sticks::Verdict;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod source;

#[derive(Parser)]
#[command(name = "sticks")]
#[command(about = "Check whether sticks close into a polygon and report its area")]
struct Cmd {
    /// Log to stderr: -v for info, -vv for debug
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    action: Option<Action>,
}

#[derive(Subcommand)]
enum Action {
    /// Read sticks and print the verdict (default when no subcommand is given)
    Check(CheckArgs),
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args, Debug, Default)]
struct CheckArgs {
    /// Stick file; `.csv` selects the x1,y1,x2,y2 column reader. Defaults to stdin.
    #[arg(long)]
    input: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
    /// Also write the JSON verdict here, with a provenance sidecar
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
enum Format {
    #[default]
    Text,
    Json,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    init_logging(cmd.verbose);
    match cmd.action {
        None => check(CheckArgs::default()),
        Some(Action::Check(args)) => check(args),
        Some(Action::Report) => report(),
    }
}

/// stdout carries only the verdict; logs go to stderr.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn check(args: CheckArgs) -> Result<()> {
    let set = source::read_sticks(args.input.as_deref())?;
    let verdict = sticks::analyze(&set);
    tracing::info!(
        sticks = set.len(),
        distinct = set.tally().distinct(),
        closed = verdict.is_closed(),
        area = ?verdict.area(),
        "verdict"
    );

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", render(verdict, args.format)?)?;
    stdout.flush()?;

    if let Some(out) = &args.out {
        let params = json!({
            "input": args.input.as_ref().map(|p| p.to_string_lossy().into_owned()),
            "format": format!("{:?}", args.format).to_lowercase(),
            "sticks": set.len(),
        });
        write_artifact(out, verdict, params)?;
    }
    Ok(())
}

fn render(verdict: Verdict, format: Format) -> Result<String> {
    Ok(match format {
        Format::Text => verdict.to_string(),
        Format::Json => serde_json::to_string(&verdict)?,
    })
}

fn write_artifact(out: &Path, verdict: Verdict, params: serde_json::Value) -> Result<PathBuf> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(out, serde_json::to_vec_pretty(&verdict)?)
        .with_context(|| format!("writing {}", out.display()))?;
    let sidecar = provenance::write_sidecar(out, params)?;
    tracing::info!(out = %out.display(), sidecar = %sidecar.display(), "wrote verdict");
    Ok(sidecar)
}

fn report() -> Result<()> {
    let doc = provenance::Provenance::new(json!({}));
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
