use glam::Vec3;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::core::angle::TAU;
use crate::core::error::ConfigError;

/// Optional photographic sky backdrop behind the stars: an inward-facing
/// textured sphere drawn first with depth testing disabled.
#[derive(Debug, Clone)]
pub struct BackdropDef {
    pub texture: String,
    pub radius: f32,
}

#[derive(Debug, Clone)]
pub struct StarfieldConfig {
    pub count: usize,
    /// Radius of the sphere all stars sit on.
    pub radius: f32,
    pub twinkle_speed_min: f32,
    pub twinkle_speed_max: f32,
    pub min_brightness: f32,
    pub max_brightness: f32,
    /// Base-size range; sizes only bucket stars into draw classes.
    pub base_size_min: f32,
    pub base_size_max: f32,
    pub backdrop: Option<BackdropDef>,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            count: 2500,
            radius: 2000.0,
            twinkle_speed_min: 0.5,
            twinkle_speed_max: 3.0,
            min_brightness: 0.25,
            max_brightness: 1.0,
            base_size_min: 1.0,
            base_size_max: 2.5,
            backdrop: None,
        }
    }
}

impl StarfieldConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::EmptyStarfield);
        }
        if !(self.radius > 0.0) {
            return Err(ConfigError::NonPositive {
                what: "starfield radius",
                value: self.radius,
            });
        }
        let ranges = [
            ("twinkle speed", self.twinkle_speed_min, self.twinkle_speed_max),
            ("brightness", self.min_brightness, self.max_brightness),
            ("base size", self.base_size_min, self.base_size_max),
        ];
        for (what, min, max) in ranges {
            if !(min.is_finite() && max.is_finite() && min < max) {
                return Err(ConfigError::InvalidRange { what, min, max });
            }
        }
        if let Some(backdrop) = &self.backdrop {
            if !(backdrop.radius > 0.0) {
                return Err(ConfigError::NonPositive {
                    what: "backdrop radius",
                    value: backdrop.radius,
                });
            }
        }
        Ok(())
    }
}

/// Draw-size bucket — a visual depth cue, nothing physical.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeClass {
    Small,
    Medium,
    Large,
}

impl SizeClass {
    /// Buckets within the default 1.0..2.5 base-size range.
    fn from_base_size(size: f32) -> Self {
        if size < 1.5 {
            SizeClass::Small
        } else if size < 2.0 {
            SizeClass::Medium
        } else {
            SizeClass::Large
        }
    }

    pub fn as_f32(self) -> f32 {
        match self {
            SizeClass::Small => 0.0,
            SizeClass::Medium => 1.0,
            SizeClass::Large => 2.0,
        }
    }
}

/// One star: immutable after generation.
#[derive(Debug, Clone, Copy)]
pub struct Star {
    pub position: Vec3,
    pub phase: f32,
    pub twinkle_speed: f32,
    pub base_size: f32,
    pub size_class: SizeClass,
}

/// Procedurally generated starfield. Points are uniform on the sphere;
/// brightness runs on global wall-clock time so twinkling continues
/// while the simulation is paused.
pub struct Starfield {
    config: StarfieldConfig,
    stars: Vec<Star>,
}

impl Starfield {
    /// Generate `config.count` stars from an explicit seed, so a given
    /// seed always reproduces the same sky.
    pub fn generate(config: StarfieldConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = StdRng::seed_from_u64(seed);
        let mut stars = Vec::with_capacity(config.count);
        for _ in 0..config.count {
            // Marsaglia (1972): sample the unit disk by rejection, then
            // map to the sphere. Avoids the polar clustering of naive
            // spherical-coordinate sampling.
            let (u, v, s) = loop {
                let u = rng.gen_range(-1.0f32..1.0);
                let v = rng.gen_range(-1.0f32..1.0);
                let s = u * u + v * v;
                if s < 1.0 {
                    break (u, v, s);
                }
            };
            let f = 2.0 * (1.0 - s).sqrt();
            let position = Vec3::new(u * f, v * f, 1.0 - 2.0 * s) * config.radius;

            let base_size = rng.gen_range(config.base_size_min..config.base_size_max);
            stars.push(Star {
                position,
                phase: rng.gen_range(0.0..TAU),
                twinkle_speed: rng.gen_range(config.twinkle_speed_min..config.twinkle_speed_max),
                base_size,
                size_class: SizeClass::from_base_size(base_size),
            });
        }
        log::info!("generated {} stars on radius {}", stars.len(), config.radius);
        Ok(Self { config, stars })
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn config(&self) -> &StarfieldConfig {
        &self.config
    }

    /// Sinusoidal twinkle, bounded by the configured brightness range.
    /// `t` is global elapsed time in seconds, never the simulation time.
    pub fn brightness(&self, star: &Star, t: f64) -> f32 {
        let phase = star.twinkle_speed as f64 * t + star.phase as f64;
        let osc = 0.5 + 0.5 * phase.sin();
        self.config.min_brightness
            + (self.config.max_brightness - self.config.min_brightness) * osc as f32
    }
}
