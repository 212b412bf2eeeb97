use anyhow::{Context, Result};
use clap::Parser;
use img_resize::cli::{Args, Commands};
use img_resize::constants::{BUILD_COMMIT, BUILD_DATE, BUILT_BY};
use img_resize::{logger, resolve_inputs, run_batch, ImageCrateCodec, ResizeRequest, RunMode};
use tracing::debug;

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(Commands::Version) = args.command {
        print_version();
        return Ok(());
    }

    logger::init(args.verbose);

    let request = ResizeRequest::from_args(&args)?;
    debug!("Resize request: {:?}", request);

    let inputs = resolve_inputs(&args.inputs, request.batch)?;
    debug!("Resolved {} file(s) as {:?}", inputs.files.len(), inputs.mode);

    let mode = inputs.mode;
    let summary = run_batch(
        inputs.files,
        request.workers,
        &request,
        &ImageCrateCodec,
        mode,
    )?;

    if mode == RunMode::Single {
        if let Some((path, error)) = summary.failures.into_iter().next() {
            return Err(error).with_context(|| format!("Failed to resize {}", path.display()));
        }
    }

    Ok(())
}

fn print_version() {
    println!("img-resize {}", env!("CARGO_PKG_VERSION"));
    println!("  commit: {}", BUILD_COMMIT.unwrap_or("none"));
    println!("  built at: {}", BUILD_DATE.unwrap_or("unknown"));
    println!("  built by: {}", BUILT_BY.unwrap_or("unknown"));
}
