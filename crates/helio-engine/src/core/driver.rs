use glam::Mat4;

use crate::assets::bindings::TextureBindings;
use crate::core::clock::FrameTimer;
use crate::core::registry::BodyRegistry;
use crate::input::state::{InputEvent, InputState};
use crate::renderer::camera::OrbitCamera;
use crate::renderer::command::{
    DrawCommand, DrawList, MeshRef, RenderPass, StarInstance, TrailCommand,
};
use crate::scene::compose::{compose_body, orbital_frame};
use crate::scene::starfield::Starfield;
use crate::scene::trail::{orbit_trail, DEFAULT_TRAIL_SEGMENTS};

/// Owns the entire mutable simulation context and runs one simulation
/// step plus one composition pass per invocation from the host event
/// loop. No state lives outside this struct.
pub struct FrameDriver {
    registry: BodyRegistry,
    camera: OrbitCamera,
    starfield: Starfield,
    textures: TextureBindings,
    /// Static orbit rings, computed once at startup.
    trails: Vec<TrailCommand>,
    timer: FrameTimer,
    paused: bool,
    quit_requested: bool,
    frame: DrawList,
}

impl FrameDriver {
    pub fn new(
        registry: BodyRegistry,
        camera: OrbitCamera,
        starfield: Starfield,
        textures: TextureBindings,
    ) -> Self {
        // Trails only make sense for root bodies: a satellite's ring
        // would have to move with its parent and is not a static trail.
        let trails: Vec<TrailCommand> = registry
            .ids()
            .filter(|&id| registry.parent(id).is_none())
            .filter_map(|id| orbit_trail(registry.def(id), DEFAULT_TRAIL_SEGMENTS))
            .collect();
        log::info!(
            "frame driver ready: {} bodies, {} trails, {} stars",
            registry.len(),
            trails.len(),
            starfield.stars().len()
        );
        Self {
            registry,
            camera,
            starfield,
            textures,
            trails,
            timer: FrameTimer::new(),
            paused: false,
            quit_requested: false,
            frame: DrawList::new(),
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Set once a `Quit` event arrives; the host event loop polls this.
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn registry(&self) -> &BodyRegistry {
        &self.registry
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    /// One tick: consume edge events, advance state, compose the frame.
    ///
    /// `now_seconds` comes from the host's monotonic clock. Pausing
    /// zeroes the dt fed to body angles only — the camera keeps
    /// responding to held controls, and star twinkle runs on the global
    /// elapsed time.
    pub fn tick(&mut self, now_seconds: f64, input: &mut InputState) -> &DrawList {
        let dt = self.timer.delta(now_seconds);

        for event in input.drain_events() {
            match event {
                InputEvent::PauseToggle => {
                    self.paused = !self.paused;
                    log::debug!("simulation {}", if self.paused { "paused" } else { "resumed" });
                }
                InputEvent::CameraReset => self.camera.reset(),
                InputEvent::Quit => self.quit_requested = true,
            }
        }

        let sim_dt = if self.paused { 0.0 } else { dt };
        self.registry.advance(sim_dt);
        self.camera.update(input, dt);

        self.compose_frame();
        &self.frame
    }

    fn compose_frame(&mut self) {
        self.frame.clear();
        self.frame.view = self.camera.view_matrix().into();

        // Backdrop first: always behind everything, depth test off.
        if let Some(backdrop) = &self.starfield.config().backdrop {
            self.frame.bodies.push(DrawCommand {
                transform: Mat4::IDENTITY.into(),
                mesh: MeshRef::SkySphere {
                    radius: backdrop.radius,
                },
                texture: Some(self.textures.get(&backdrop.texture)),
                pass: RenderPass::Background,
                lit: false,
                color: [1.0, 1.0, 1.0, 1.0],
            });
        }

        let t = self.timer.elapsed_seconds();
        for star in self.starfield.stars() {
            self.frame.stars.push(StarInstance {
                pos: star.position.to_array(),
                brightness: self.starfield.brightness(star, t),
                size_class: star.size_class.as_f32(),
            });
        }

        self.frame.trails.extend(self.trails.iter().cloned());

        for id in self.registry.ids() {
            let parent_frame = match self.registry.parent(id) {
                Some(parent) => {
                    orbital_frame(self.registry.def(parent), self.registry.state(parent))
                }
                None => Mat4::IDENTITY,
            };
            compose_body(
                self.registry.def(id),
                self.registry.state(id),
                parent_frame,
                &self.textures,
                &mut self.frame.bodies,
            );
        }
    }
}
