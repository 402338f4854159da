use std::path::PathBuf;

use clap::Parser;
use flowerdesk_tools::icons::{copy_pwa_icons, DEFAULT_OUT_DIR, DEFAULT_SOURCE};

/// Copy the app icon to every PWA icon file name.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Source PNG.
    #[arg(long, default_value = DEFAULT_SOURCE)]
    source: PathBuf,

    /// Directory the copies are written to.
    #[arg(long, default_value = DEFAULT_OUT_DIR)]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    flowerdesk_tools::init_tracing();
    let args = Args::parse();

    let written = copy_pwa_icons(&args.source, &args.out_dir)?;
    tracing::info!(count = written.len(), out_dir = %args.out_dir.display(), "PWA icons ready");
    Ok(())
}
