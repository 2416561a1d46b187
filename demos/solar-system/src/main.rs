//! Headless demo run: builds the solar system, ticks the frame driver
//! at ~60 Hz for a fixed number of frames, and logs what each frame
//! would hand to a renderer. A graphical host would implement
//! `TextureSource` and `Renderer` against a real graphics API instead.

mod bodies;

use std::thread;
use std::time::Duration;

use anyhow::Context;
use helio_engine::{
    BodyRegistry, Clock, DrawList, FrameDriver, InputState, OrbitCamera, Renderer, Starfield,
    SystemClock, TextureBindings, TextureDesc, TextureHandle, TextureManifest, TextureSource,
};

/// Hands out sequential handles without touching any image file.
struct StubTextures {
    next: u32,
}

impl TextureSource for StubTextures {
    fn load(&mut self, name: &str, desc: &TextureDesc) -> TextureHandle {
        self.next += 1;
        log::debug!("texture {} <- {} ({:?})", self.next, name, desc.path);
        TextureHandle(self.next)
    }
}

/// Logs a frame summary once a second instead of drawing.
struct LogRenderer {
    frames: u64,
}

impl Renderer for LogRenderer {
    fn submit(&mut self, frame: &DrawList) {
        if self.frames % 60 == 0 {
            log::info!(
                "frame {}: {} body commands, {} stars, {} trails",
                self.frames,
                frame.bodies.len(),
                frame.stars.len(),
                frame.trails.len()
            );
        }
        self.frames += 1;
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let frames: u64 = match std::env::args().nth(1) {
        Some(arg) => arg.parse().context("frame count must be an integer")?,
        None => 600,
    };

    let manifest = TextureManifest::from_json(include_str!("../assets/textures.json"))
        .context("parsing texture manifest")?;
    let registry = BodyRegistry::new(bodies::solar_system())?;
    let starfield_config = bodies::starfield_config();
    let starfield = Starfield::generate(starfield_config.clone(), 2025)?;
    let bindings = TextureBindings::resolve(
        &registry,
        &starfield_config,
        &manifest,
        &mut StubTextures { next: 0 },
    )?;
    let camera = OrbitCamera::new(bodies::camera_config())?;

    let mut driver = FrameDriver::new(registry, camera, starfield, bindings);
    let mut input = InputState::new();
    let mut renderer = LogRenderer { frames: 0 };
    let clock = SystemClock::new();

    for _ in 0..frames {
        if driver.quit_requested() {
            break;
        }
        let frame = driver.tick(clock.elapsed_seconds(), &mut input);
        renderer.submit(frame);
        thread::sleep(Duration::from_millis(16));
    }

    log::info!(
        "done after {} frames, {:.1}s simulated",
        renderer.frames,
        clock.elapsed_seconds()
    );
    Ok(())
}
