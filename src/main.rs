use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use boxtracer::{cornell, loader, Command, Raytracer, ReflectionPolicy, RenderSettings, Scene};

#[derive(Parser, Debug)]
#[command(version, about = "Render a triangle scene with shadows and mirror bounces")]
struct Args {
    /// JSON render settings; missing fields use the built-in defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Wavefront OBJ to render instead of the built-in Cornell box
    #[arg(long)]
    obj: Option<PathBuf>,

    /// Viewport width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Viewport height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Reflective bounces after the primary hit
    #[arg(long)]
    max_depth: Option<u32>,

    /// Output PNG path
    #[arg(short, long, default_value = "render.png")]
    output: PathBuf,

    /// Input steps applied before rendering, e.g. `yaw-right` or `light-up`
    #[arg(long = "command", value_name = "NAME")]
    commands: Vec<String>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut settings = match &args.config {
        Some(path) => RenderSettings::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => RenderSettings::default(),
    };
    if let Some(width) = args.width {
        settings.width = width;
    }
    if let Some(height) = args.height {
        settings.height = height;
    }
    if let Some(depth) = args.max_depth {
        settings.max_depth = depth;
    }

    let triangles = match &args.obj {
        Some(path) => {
            loader::load_obj(path).with_context(|| format!("loading {}", path.display()))?
        }
        None => cornell::test_model(),
    };
    info!("constructing scene, shape_count: {} ...", triangles.len());

    let mut scene = Scene::new(triangles, settings.camera(), settings.light());
    if settings.reflections == ReflectionPolicy::Disabled {
        scene.disable_reflections();
    }

    for name in &args.commands {
        let cmd: Command = name.parse()?;
        scene.apply(cmd);
    }

    let raytracer = Raytracer::new(settings.max_depth);
    let start = Instant::now();
    let frame = raytracer.render(&scene);
    info!("Render time: {} ms.", start.elapsed().as_millis());

    frame
        .save(&args.output)
        .with_context(|| format!("writing {}", args.output.display()))?;
    info!("saved {}", args.output.display());

    Ok(())
}
