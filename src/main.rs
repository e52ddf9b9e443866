use clap::Parser;
use result_crop::batch::{self, BatchOptions};
use result_crop::output;
use std::path::{Path, PathBuf};

/// Screenshots are read from here, relative to the working directory.
const INPUT_DIR: &str = "input";
/// Cropped PNGs are written here, relative to the working directory.
const OUTPUT_DIR: &str = "output";

/// Package version, tagged with the commit it was built from when known.
fn version_string() -> &'static str {
    match option_env!("RESULT_CROP_COMMIT") {
        Some(commit) if !commit.is_empty() => {
            // Leaked once at startup
            Box::leak(format!("{} ({commit})", env!("CARGO_PKG_VERSION")).into_boxed_str())
        }
        _ => env!("CARGO_PKG_VERSION"),
    }
}

#[derive(Parser)]
#[command(name = "result-crop")]
#[command(about = "Crop game result screenshots to the result panel")]
#[command(long_about = "\
Crop game result screenshots to the result panel

Every file directly inside ./input is decoded, classified by aspect ratio
against 16:9, cropped to the result panel and written to ./output as
<name>.png.

  16:9 (within 0.01)   panel measured directly
  wider than 16:9      surplus width on the right is ignored
  taller than 16:9     panel is assumed vertically centered

The first file that fails aborts the run unless --keep-going is given.")]
#[command(version = version_string())]
struct Cli {
    /// Create ./output if it does not exist
    #[arg(long)]
    create_output: bool,

    /// Skip files that fail to decode or crop instead of aborting
    #[arg(long)]
    keep_going: bool,

    /// Write a JSON manifest of the run to this file
    #[arg(long)]
    manifest: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let options = BatchOptions {
        create_output: cli.create_output,
        keep_going: cli.keep_going,
    };

    let (tx, rx) = std::sync::mpsc::channel();
    let printer = std::thread::spawn(move || {
        for event in rx {
            for line in output::format_batch_event(&event) {
                println!("{}", line);
            }
        }
    });
    let result = batch::run(Path::new(INPUT_DIR), Path::new(OUTPUT_DIR), options, Some(tx));
    // The sender is dropped inside `run`, so the printer drains and exits.
    printer
        .join()
        .map_err(|_| "progress printer thread panicked")?;
    let manifest = result?;

    if let Some(path) = &cli.manifest {
        batch::write_manifest(&manifest, path)?;
    }
    output::print_summary(&manifest);

    Ok(())
}
