use anyhow::{ensure, Context, Result};
use clap::Parser;
use log::LevelFilter;

use lumen_core::{demo_scene, load_scene, scene_to_json, Scene};
use lumen_renderer::{render, save_image, Background, Camera, Color, RenderConfig};

mod cli;

use cli::{Args, BackgroundArg};

fn init_logger(level: LevelFilter) {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

fn render_config(args: &Args) -> RenderConfig {
    let background = match args.background {
        BackgroundArg::Starfield => Background::Starfield,
        BackgroundArg::Black => Background::Solid(Color::ZERO),
    };

    RenderConfig {
        max_depth: args.depth,
        background,
        seed: args.seed,
    }
}

fn build_scene(args: &Args) -> Result<Scene> {
    match &args.scene {
        Some(path) => load_scene(path)
            .with_context(|| format!("Failed to load scene {}", path.display())),
        None => {
            log::info!("No scene given, using the built-in demo scene");
            Ok(demo_scene())
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.log_level.into());

    log::info!("Starting Lumen");

    ensure!(
        args.width > 0 && args.height > 0,
        "Image size must be positive, got {}x{}",
        args.width,
        args.height
    );

    let scene = build_scene(&args)?;

    if let Some(path) = &args.export_scene {
        let json = scene_to_json(&scene).context("Failed to serialize scene")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write scene to {}", path.display()))?;
        log::info!("Wrote scene description to {}", path.display());
    }

    let camera = Camera::new(args.width, args.height);
    let config = render_config(&args);
    let mut rng = config.rng();

    let image = render(&camera, &scene, &config, &mut rng);

    save_image(&image, &args.output)
        .with_context(|| format!("Failed to save image to {}", args.output.display()))?;

    Ok(())
}
