//! Spinning globe sample entry point

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use winit::event_loop::{ControlFlow, EventLoop};

use globe_core::SphereParams;
use globe_renderer::RenderSettings;

mod app;

use app::App;

/// Command line options
#[derive(Debug, Parser)]
#[command(name = "globe", version, about = "Spinning textured globe")]
struct Args {
    /// Sphere radius
    #[arg(long, default_value_t = globe_core::constants::DEFAULT_RADIUS)]
    radius: f32,

    /// Subdivisions around the equator
    #[arg(long, default_value_t = globe_core::constants::DEFAULT_SLICES)]
    slices: u32,

    /// Subdivisions from pole to pole
    #[arg(long, default_value_t = globe_core::constants::DEFAULT_STACKS)]
    stacks: u32,

    /// Animation cycle length in seconds
    #[arg(long)]
    cycle: Option<f32>,

    /// Full rotations per animation cycle
    #[arg(long)]
    turns: Option<f32>,

    /// Image file to wrap around the sphere (checkerboard if omitted)
    #[arg(long)]
    texture: Option<PathBuf>,

    /// RON settings file
    #[arg(long)]
    settings: Option<PathBuf>,
}

impl Args {
    /// Load render settings, apply command line overrides, and validate
    fn load_settings(&self) -> Result<RenderSettings> {
        let mut settings = match &self.settings {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read settings file {}", path.display()))?;
                ron::from_str(&text)
                    .with_context(|| format!("failed to parse settings file {}", path.display()))?
            }
            None => RenderSettings::default(),
        };

        if let Some(cycle) = self.cycle {
            settings.animation.cycle_seconds = cycle;
        }
        if let Some(turns) = self.turns {
            settings.animation.turns_per_cycle = turns;
        }

        settings.validate().context("invalid render settings")?;
        Ok(settings)
    }
}

fn main() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "globe_app=info,globe_renderer=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(error) = run() {
        tracing::error!("{:#}", error);
        rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Error)
            .set_title("Globe")
            .set_description(format!("{error:#}"))
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let params = SphereParams::new(args.radius, args.slices, args.stacks)
        .context("invalid sphere parameters")?;
    let settings = args.load_settings()?;

    tracing::info!(
        "Starting globe (radius {}, {}x{} subdivisions)",
        params.radius,
        params.slices,
        params.stacks
    );

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(params, settings, args.texture.clone());
    event_loop
        .run_app(&mut app)
        .context("event loop terminated abnormally")?;
    app.into_result()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["globe"]);
        assert_eq!(args.radius, 1.0);
        assert_eq!(args.slices, 64);
        assert_eq!(args.stacks, 32);
        assert!(args.texture.is_none());

        let settings = args.load_settings().unwrap();
        assert_eq!(settings, RenderSettings::default());
    }

    #[test]
    fn test_cli_overrides_settings_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "(animation: (cycle_seconds: 8.0, turns_per_cycle: 1.0))"
        )
        .unwrap();

        let args = Args::parse_from([
            "globe",
            "--settings",
            file.path().to_str().unwrap(),
            "--cycle",
            "2.0",
        ]);
        let settings = args.load_settings().unwrap();

        assert_eq!(settings.animation.cycle_seconds, 2.0);
        assert_eq!(settings.animation.turns_per_cycle, 1.0);
        assert_eq!(settings.camera.near, 1.0);
    }

    #[test]
    fn test_missing_settings_file_is_an_error() {
        let args = Args::parse_from(["globe", "--settings", "/no/such/file.ron"]);
        assert!(args.load_settings().is_err());
    }

    #[test]
    fn test_rejects_bad_subdivisions() {
        let args = Args::parse_from(["globe", "--slices", "2"]);
        assert!(SphereParams::new(args.radius, args.slices, args.stacks).is_err());
    }

    #[test]
    fn test_rejects_zero_cycle() {
        let args = Args::parse_from(["globe", "--cycle", "0"]);
        assert!(args.load_settings().is_err());
    }

    #[test]
    fn test_rejects_inverted_clip_planes_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "(camera: (eye: (0.0, 0.0, 5.0), fov: 0.5, near: 2.0, far: 1.0))"
        )
        .unwrap();

        let args = Args::parse_from(["globe", "--settings", file.path().to_str().unwrap()]);
        assert!(args.load_settings().is_err());
    }
}
