use clap::Parser;
use imgpress::{optimize, output};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "imgpress")]
#[command(about = "Batch image optimizer: mirror a source tree into resized WebP")]
#[command(long_about = "\
Batch image optimizer: mirror a source tree into resized WebP

Walks SOURCE recursively. Every image with a png/jpg/jpeg/webp extension is
resized to fit within 1080x1350 (never upscaled) and re-encoded as lossy
WebP at the same relative path under TARGET:

  source/               target/
  ├── a.jpg         →   ├── a.webp
  └── nested/           └── nested/
      └── b.png     →       └── b.webp

Outputs that are already newer than their source are skipped, so re-running
over an unchanged tree does no work. A file that fails to convert is logged
and counted; it never aborts the run. Source files are never modified.")]
#[command(version)]
struct Cli {
    /// Directory containing the source images
    source: PathBuf,

    /// Directory that receives the optimized tree (created as needed)
    target: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    output::print_run_header(&cli.source, &cli.target);
    let summary = optimize::optimize(&cli.source, &cli.target)?;
    output::print_summary(&summary);

    Ok(())
}
