use std::path::PathBuf;

use clap::Parser;
use sphere_caster::{
    application::{Application, OutputSettings},
    output::ColorMapping,
    Projection, RenderSettings, Resolution, Scene,
};

#[derive(Debug, Parser)]
#[command(about = "Ray cast the demo sphere scene to an image file")]
struct Opt {
    /// `.png` writes PNG, anything else uncompressed TGA.
    #[arg(short, long, default_value = "sphere.tga")]
    output: PathBuf,
    #[arg(long, default_value_t = 600)]
    width: u32,
    #[arg(long, default_value_t = 600)]
    height: u32,
    #[arg(long, default_value_t = 16.0)]
    depth: f32,
    /// Rescale by the brightest channel instead of clamping at 1.0.
    #[arg(long)]
    scale_color: bool,
    /// Orient rays towards the camera's look-at target.
    #[arg(long)]
    look_at: bool,
    #[arg(long, default_value = "info")]
    log_level: tracing::Level,
}

fn run(opts: Opt) -> anyhow::Result<()> {
    anyhow::ensure!(
        opts.width > 0 && opts.height > 0,
        "resolution must be positive, got {}x{}",
        opts.width,
        opts.height
    );

    let settings = RenderSettings {
        resolution: Resolution::new(opts.width, opts.height),
        depth: opts.depth,
        projection: if opts.look_at {
            Projection::LookAt
        } else {
            Projection::Axis
        },
        ..RenderSettings::default()
    };
    let output = OutputSettings {
        path: opts.output,
        mapping: if opts.scale_color {
            ColorMapping::Scale
        } else {
            ColorMapping::Clamp
        },
    };

    let mut application = Application::new(Scene::demo(), settings, &output)?;
    application.run()?;
    Ok(())
}

fn main() {
    let opts = Opt::parse();
    tracing_subscriber::fmt().with_max_level(opts.log_level).init();

    if let Err(e) = run(opts) {
        tracing::error!("{:?}", e);
        std::process::exit(1);
    }
}
