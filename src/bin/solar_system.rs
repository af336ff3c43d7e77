//! Render the solar system scene and save its last frame
//!
//! Usage: solar-system [config.json]

use log::error;
use log::info;

use abuffer::Config;
use abuffer::DepthBuffer;
use abuffer::Error;
use abuffer::PixelBuffer;
use abuffer::SolarSystem;

fn run() -> Result<(), Error> {
    let config = match std::env::args().nth(1) {
        Some(path) => {
            info!("Loading config from {}", path);
            Config::from_file(path)?
        }
        None => Config::default(),
    };
    let sink = PixelBuffer::new(config.width, config.height);
    let mut buf = DepthBuffer::new(&config, sink);
    let mut scene = SolarSystem::new(&config, &mut buf)?;

    for _ in 0 .. config.scene.frames {
        scene.step(&mut buf);
    }
    info!("Rendered {} frames, {} asteroids, {} active pixels",
          scene.frame(), scene.asteroids().len(), buf.active_pixels());

    buf.into_sink().to_file(&config.scene.output)?;
    info!("Wrote {}", config.scene.output.display());
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    info!("Starting solar-system...");
    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}
