//! # zeve-export
//!
//! Pre-renders the landing page to static HTML.
//!
//! ```bash
//! zeve-export                       # writes dist/index.html
//! zeve-export --out-dir public      # writes public/index.html
//! zeve-export --stdout > page.html
//! ```

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use zeve_landing::export::{DEFAULT_FILE_NAME, ExportOptions, export_site};
use zeve_landing::render_page;

#[derive(Parser, Debug)]
#[command(name = "zeve-export")]
#[command(about = "Pre-render the Zeve Veylsn landing page to static HTML")]
#[command(version)]
struct ExportArgs {
    /// Directory the page is written to
    #[arg(short, long, default_value = "dist")]
    out_dir: PathBuf,

    /// File name inside the output directory
    #[arg(long, default_value = DEFAULT_FILE_NAME)]
    file_name: String,

    /// Print the page to stdout instead of writing a file
    #[arg(long, default_value = "false")]
    stdout: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = ExportArgs::parse();

    // stderr only; stdout may carry the page
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    info!("Starting zeve-export v{}", env!("CARGO_PKG_VERSION"));

    if args.stdout {
        let html = render_page();
        std::io::stdout()
            .lock()
            .write_all(html.as_bytes())
            .context("failed to write page to stdout")?;
        return Ok(());
    }

    let options = ExportOptions::new(&args.out_dir).with_file_name(args.file_name);
    let summary = export_site(&options)
        .with_context(|| format!("export to {} failed", args.out_dir.display()))?;

    info!("Wrote {} ({} bytes)", summary.path.display(), summary.bytes);
    Ok(())
}
