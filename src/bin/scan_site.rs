//! Scans a rendered site directory and prints its references as JSON.
//!
//! Logs go to stderr (`RUST_LOG` controls the level), the JSON report to
//! stdout or `--output`.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use site_refs::{scan_site, ScanOptions};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "scan_site", version, about = "Classify the asset and link references of a rendered site")]
struct Cli {
    /// Rendered site directory
    site_dir: PathBuf,

    /// JSON file with scan options
    #[arg(long)]
    config: Option<PathBuf>,

    /// Drop inline SVG data URIs
    #[arg(long)]
    ignore_inline_svg: bool,

    /// Drop references containing `mailto:`
    #[arg(long)]
    ignore_mailto: bool,

    /// Drop references containing `cloudcannon:`
    #[arg(long)]
    ignore_cc_editor_links: bool,

    /// Scan inline scripts and .js files for known site paths
    #[arg(long)]
    scan_js: bool,

    /// Worker threads (defaults to one per CPU)
    #[arg(long)]
    threads: Option<usize>,

    /// Write the report here instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Indent the JSON report
    #[arg(long)]
    pretty: bool,
}

impl Cli {
    fn scan_options(&self) -> Result<ScanOptions> {
        let from_file = match &self.config {
            Some(path) => ScanOptions::from_json_file(path)
                .with_context(|| format!("load config {}", path.display()))?,
            None => ScanOptions::default(),
        };
        let from_flags = ScanOptions {
            ignore_inline_svg: self.ignore_inline_svg,
            ignore_mailto: self.ignore_mailto,
            ignore_cc_editor_links: self.ignore_cc_editor_links,
            scan_js: self.scan_js,
        };
        Ok(from_file.merge(from_flags))
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads.max(1))
            .build_global()
            .context("configure worker pool")?;
    }

    let options = cli.scan_options()?;
    info!(site_dir = %cli.site_dir.display(), ?options, "starting scan");

    let result = scan_site(&cli.site_dir, &options)
        .with_context(|| format!("scan {}", cli.site_dir.display()))?;

    let mut out: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    if cli.pretty {
        serde_json::to_writer_pretty(&mut out, &result).context("write report")?;
    } else {
        serde_json::to_writer(&mut out, &result).context("write report")?;
    }
    writeln!(out).context("write report")?;
    out.flush().context("flush report")?;

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
