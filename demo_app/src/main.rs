//! Spinning cube demo
//!
//! Builds a display (optionally from a TOML or RON config given as the first
//! argument), adds an orbiting cube, a floor and a sun, then drives
//! `Display::animate` from a fixed-rate host loop on the headless renderer.

use o3_display::config::ConfigError;
use o3_display::foundation::logging;
use o3_display::prelude::*;
use std::time::Duration;
use thiserror::Error;

const FRAMES: u64 = 120;
const FRAME_TIME: Duration = Duration::from_millis(16);
const ORBIT_RADIUS: f32 = 2.0;

#[derive(Error, Debug)]
enum AppError {
    #[error("display error: {0}")]
    Display(#[from] DisplayError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

struct SpinningCubeApp {
    display: Display,
    timer: Timer,
}

impl SpinningCubeApp {
    fn new(config_path: Option<&str>) -> Result<Self, AppError> {
        let config = match config_path {
            Some(path) => {
                log::info!("Loading display config from {}", path);
                DisplayConfig::load_from_file(path)?
            }
            None => DisplayConfig {
                name: "spinning_cube".to_string(),
                width: 800.0,
                height: 600.0,
                shadows: true,
                ..DisplayConfig::default()
            },
        };

        let display = DisplayBuilder::from_config(config).build()?;
        Ok(Self { display, timer: Timer::new() })
    }

    fn initialize(&mut self) -> Result<(), AppError> {
        log::info!("Initializing spinning cube demo...");
        let display = &mut self.display;

        display.mat_params("paint", &MaterialParams::new().with("color", "#cc3322").with("shininess", 60))?;
        display.mat_params(
            "ground",
            &MaterialParams::new().with("color", "#556655").with("kind", "lambert").with("shadow", true),
        )?;

        let cube = display
            .ro(RenderObjectBuilder::named_new("cube")
                .geometry(Geometry::cuboid(1.0, 1.0, 1.0))
                .cast_shadow(true))?
            .key();
        let floor = display
            .ro(RenderObjectBuilder::named_new("floor")
                .geometry(Geometry::plane(10.0, 10.0))
                .at(Vec3::new(0.0, -1.0, 0.0))
                .update_on_animate(false))?
            .key();

        if let Some(key) = cube {
            display.assign_material(key, "paint")?;
            if let Some(object) = display.object_mut(key) {
                object.on_animate(|event| {
                    if let o3_display::object::ObjectEvent::Animate { t, node } = event {
                        #[allow(clippy::cast_possible_truncation)]
                        let angle = (*t / 1000.0) as f32;
                        node.borrow_mut().position = Vec3::new(angle.cos(), 0.0, angle.sin()) * ORBIT_RADIUS;
                    }
                    Ok(())
                });
            }
        }
        if let Some(key) = floor {
            display.assign_material(key, "ground")?;
        }

        display
            .light("sun", Some("sun"))?
            .at(Vec3::new(5.0, 10.0, 5.0))
            .configure_shadow(&ShadowConfig { cheight: Some(8.0), ..ShadowConfig::default() });
        display.light("ambient", None)?.rgb(0.2, 0.2, 0.25);

        display
            .camera(None)?
            .position = Vec3::new(0.0, 3.0, 8.0);

        display.on(DisplayEventKind::Resized, |event| {
            if let DisplayEvent::Resized { width, height, .. } = event {
                log::info!("Display resized to {}x{}", width, height);
            }
            Ok(())
        });

        log::info!(
            "Display '{}' ready: {} objects, scenes {:?}, materials {:?}",
            display.name(),
            display.objects().len(),
            display.scenes(),
            display.mats(None).iter().map(|m| m.name()).collect::<Vec<_>>()
        );
        Ok(())
    }

    fn run(&mut self) -> Result<(), AppError> {
        for frame in 0..FRAMES {
            self.timer.update();
            self.display.animate(self.timer.elapsed_ms())?;

            if frame == FRAMES / 2 {
                self.display.set_size(1024, 768)?;
            }
            if frame % 30 == 0 {
                log::debug!("Frame {} (dt {:.4}s)", frame, self.timer.delta_time());
            }
            std::thread::sleep(FRAME_TIME);
        }

        log::info!(
            "Rendered {} frames at {:.1} fps",
            self.timer.frame_count(),
            self.timer.average_fps()
        );
        Ok(())
    }

    fn shutdown(self) -> Result<(), AppError> {
        log::info!("Shutting down spinning cube demo");
        self.display.destroy()?;
        Ok(())
    }
}

fn main() {
    logging::init();

    let config_path = std::env::args().nth(1);
    let result = SpinningCubeApp::new(config_path.as_deref()).and_then(|mut app| {
        app.initialize()?;
        app.run()?;
        app.shutdown()
    });

    if let Err(e) = result {
        log::error!("Demo failed: {}", e);
        std::process::exit(1);
    }
}
