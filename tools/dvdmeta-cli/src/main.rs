//! dvdmeta
//!
//! Summarizes `lsdvd -Ox` reports and finds episode-length tracks or
//! chapters in them. Accepts a single report or a directory of reports.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use dvdmeta_core::{Decoder, Disc, DurationWindow};
use tracing::{Level, debug, info, warn};

mod ffmpeg;
mod json;
mod report;
mod sources;

/// CLI arguments
#[derive(Parser, Debug)]
#[command(name = "dvdmeta")]
#[command(about = "Summarize lsdvd XML reports and find episode-length content")]
#[command(version)]
struct Cli {
    /// lsdvd XML report, or a directory containing *.xml reports
    source: PathBuf,

    /// Show detailed info for the longest track
    #[arg(long)]
    detailed: bool,

    /// Find tracks/chapters around this duration, in minutes (e.g. 40)
    #[arg(long, value_name = "MINUTES")]
    episodes: Option<f64>,

    /// Tolerance in minutes for episode duration matching
    #[arg(
        long,
        value_name = "MINUTES",
        env = "DVDMETA_TOLERANCE",
        default_value_t = 5.0
    )]
    tolerance: f64,

    /// Print only FFmpeg commands that extract the matching tracks
    #[arg(long, requires = "episodes")]
    ffmpeg: bool,

    /// Also print FFmpeg commands for matching chapters
    #[arg(long, requires = "ffmpeg")]
    with_chapters: bool,

    /// Prefix for FFmpeg output files [default: <report stem>_episodes]
    #[arg(long, requires = "ffmpeg")]
    output_prefix: Option<String>,

    /// Emit one JSON object per report instead of text
    #[arg(long, conflicts_with = "ffmpeg")]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// What to do with each decoded report.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Mode {
    Summary { detailed: bool },
    Episodes(DurationWindow),
    Ffmpeg { window: DurationWindow, chapters: bool },
}

impl Cli {
    fn mode(&self) -> Mode {
        match self.episodes.filter(|minutes| *minutes > 0.0) {
            None => Mode::Summary {
                detailed: self.detailed,
            },
            Some(target) => {
                let window = DurationWindow::from_minutes(target, self.tolerance);
                if self.ffmpeg {
                    Mode::Ffmpeg {
                        window,
                        chapters: self.with_chapters,
                    }
                } else {
                    Mode::Episodes(window)
                }
            }
        }
    }
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn render_text(cli: &Cli, mode: Mode, path: &Path, disc: &Disc) -> Result<String> {
    use std::fmt::Write as _;

    let name = file_name(path);
    let mut out = String::new();

    match mode {
        Mode::Summary { detailed } => {
            report::write_summary(&mut out, &name, disc)?;
            if detailed {
                match disc.longest_track() {
                    Some(track) => report::write_track_details(&mut out, track)?,
                    None => debug!(
                        file = %name,
                        declared = disc.longest_track,
                        "declared longest track is out of range"
                    ),
                }
            }
        }
        Mode::Episodes(window) => {
            let matches = disc.find_content_in_window(&window);
            report::write_episodes(&mut out, &name, &window, &matches)?;
        }
        Mode::Ffmpeg { window, chapters } => {
            let dvd_path = ffmpeg::dvd_path(&disc.device);
            let prefix = cli
                .output_prefix
                .clone()
                .unwrap_or_else(|| ffmpeg::default_output_prefix(path));
            for content in disc.find_content_in_window(&window) {
                if chapters || content.chapter().is_none() {
                    writeln!(out, "{}", ffmpeg::command(&content, dvd_path, &prefix))?;
                }
            }
        }
    }

    Ok(out)
}

fn render_json(mode: Mode, path: &Path, disc: &Disc) -> Result<String> {
    let name = file_name(path);
    let line = match mode {
        Mode::Summary { .. } => serde_json::to_string(&json::DiscOutput::new(&name, disc))?,
        Mode::Episodes(window) | Mode::Ffmpeg { window, .. } => {
            let matches = disc.find_content_in_window(&window);
            serde_json::to_string(&json::EpisodesOutput::new(&name, window, &matches))?
        }
    };
    Ok(line + "\n")
}

/// Decodes and renders every report under `cli.source` into `out`.
///
/// A report that fails to decode is reported in its place and the batch
/// carries on. Returns the number of such failures.
///
/// # Errors
///
/// Fails when the source cannot be read, holds no XML files, or `out`
/// cannot be written.
fn run(cli: &Cli, out: &mut impl io::Write) -> Result<usize> {
    let mode = cli.mode();
    debug!(?mode, source = %cli.source.display(), "starting");

    let reports = sources::collect_reports(&cli.source)?;
    if reports.is_empty() {
        bail!("No XML files found in {}", cli.source.display());
    }

    let decoder = Decoder::new().context("Failed to build lsdvd decoder")?;

    if !cli.json && !matches!(mode, Mode::Ffmpeg { .. }) {
        writeln!(out, "Found {} XML files to process", reports.len())?;
    }

    let mut failed = 0usize;
    for path in &reports {
        let disc = match decoder.decode_file(path) {
            Ok(disc) => disc,
            Err(err) => {
                failed += 1;
                debug!(file = %path.display(), error = %err, "skipping report");
                if cli.json {
                    let name = file_name(path);
                    let line = serde_json::to_string(&json::ErrorOutput {
                        file: &name,
                        error: err.to_string(),
                    })?;
                    writeln!(out, "{line}")?;
                } else {
                    writeln!(out, "Error parsing {}: {err}", path.display())?;
                }
                continue;
            }
        };

        let output = if cli.json {
            render_json(mode, path, &disc)?
        } else {
            render_text(cli, mode, path, &disc)?
        };
        out.write_all(output.as_bytes())?;
    }

    if failed > 0 {
        warn!(failed, total = reports.len(), "some reports could not be decoded");
    } else {
        info!(total = reports.len(), "processed all reports");
    }

    Ok(failed)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    run(&cli, &mut io::stdout().lock())?;
    Ok(())
}
