use anyhow::{Context, Result};
use clap::Parser;

use rastly::prelude::*;

#[derive(Parser)]
struct Args {
    /// Path to the OBJ mesh to render
    mesh: String,

    /// Write the rendered PNG to this file
    #[arg(long, default_value = "render.png")]
    output: String,

    /// Output image width in pixels
    #[arg(long, default_value_t = 512)]
    width: u32,

    /// Output image height in pixels
    #[arg(long, default_value_t = 512)]
    height: u32,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
    let args = Args::parse();

    // An unreadable or unparsable mesh still produces a successful run,
    // it just has nothing to draw.
    let mut mesh = match Mesh::from_obj(&args.mesh) {
        Ok(mesh) => mesh,
        Err(err) => {
            log::warn!("{}", err);
            Mesh::default()
        }
    };
    mesh.center_and_scale();

    if mesh.is_empty() {
        log::warn!("Model is empty!");
        return Ok(());
    }

    let viewport = Viewport::new(args.width, args.height);
    let mut buffer = FrameBuffer::new(args.width, args.height);
    Rasterizer::default().render(&mesh, &viewport, &mut buffer);

    buffer
        .into_image()
        .save(&args.output)
        .with_context(|| format!("cannot write {}", args.output))?;
    log::info!("Wrote {}", args.output);

    Ok(())
}
