use glam::Vec3;

use crate::core::angle;
use crate::core::error::ConfigError;

/// Index of a body in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(pub u32);

/// Axial-tilt threshold below which the tilt rotation is skipped.
/// Avoids a degenerate rotation when the tilt axis is meaningless at
/// (near-)zero tilt.
pub const TILT_EPSILON: f32 = 1e-3;

/// An additive, untextured halo drawn around an emissive body.
#[derive(Debug, Clone, Copy)]
pub struct GlowLayer {
    /// Halo radius as a multiple of the body's sphere radius.
    pub scale: f32,
    /// RGBA tint; alpha controls halo strength.
    pub color: [f32; 4],
}

/// Translucent outer shell with its own spin rate (cloud layer).
#[derive(Debug, Clone)]
pub struct ShellDef {
    pub texture: String,
    /// Shell radius as a multiple of the surface radius; must exceed 1
    /// so the shell never z-fights the surface.
    pub radius_scale: f32,
    /// Independent spin, decoupled from the surface spin.
    pub spin_speed_rad_s: f32,
    pub alpha: f32,
}

/// Coplanar annulus in the body's equatorial (tilted, non-spinning) frame.
#[derive(Debug, Clone)]
pub struct RingDef {
    pub texture: String,
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub alpha: f32,
}

/// Closed variant over how a body becomes draw layers.
#[derive(Debug, Clone)]
pub enum RenderStrategy {
    /// One textured sphere. `emissive` bodies ignore scene lighting and
    /// may carry additive glow halos (the Sun).
    SingleLayer { emissive: bool, glow: Vec<GlowLayer> },
    /// Lit surface + additive emissive overlay at the identical
    /// transform + translucent shell at a strictly larger radius (Earth).
    LayeredAtmosphere {
        night_texture: String,
        shell: ShellDef,
    },
    /// Spinning sphere + ring that receives only placement and axial
    /// tilt, never the self-spin (Saturn).
    Ringed { ring: RingDef },
}

impl Default for RenderStrategy {
    fn default() -> Self {
        RenderStrategy::SingleLayer {
            emissive: false,
            glow: Vec::new(),
        }
    }
}

/// Colour/alpha for a body's static orbit trail.
#[derive(Debug, Clone, Copy)]
pub struct TrailStyle {
    pub color: [f32; 3],
    pub alpha: f32,
}

/// Configuration record for one celestial body. Validated once at
/// registry construction, immutable afterward.
#[derive(Debug, Clone)]
pub struct BodyDef {
    pub name: String,
    /// Logical surface texture name, resolved through the manifest.
    pub texture: String,
    /// Sphere radius (units arbitrary but consistent).
    pub radius: f32,
    /// Distance from the parent (or origin). Zero for the central body.
    pub orbit_radius: f32,
    /// Tilt of the orbital plane vs. the reference plane.
    pub inclination_rad: f32,
    /// Rotation of the orbital plane around the reference normal.
    pub ascending_node_rad: f32,
    pub orbit_speed_rad_s: f32,
    pub axial_tilt_rad: f32,
    /// Axis for the axial tilt, typically perpendicular to local forward.
    pub axial_tilt_axis: Vec3,
    /// Signed; negative means retrograde spin (Venus, Uranus).
    pub spin_speed_rad_s: f32,
    /// Satellite relation: orbital parameters become relative to the
    /// parent's orbital-position frame.
    pub parent: Option<String>,
    /// Cancel the apparent spin induced by the orbital sweep so the same
    /// face keeps its orientation relative to the parent.
    pub tidal_lock: bool,
    pub strategy: RenderStrategy,
    pub trail: Option<TrailStyle>,
}

impl BodyDef {
    pub fn new(name: impl Into<String>, texture: impl Into<String>, radius: f32) -> Self {
        Self {
            name: name.into(),
            texture: texture.into(),
            radius,
            orbit_radius: 0.0,
            inclination_rad: 0.0,
            ascending_node_rad: 0.0,
            orbit_speed_rad_s: 0.0,
            axial_tilt_rad: 0.0,
            axial_tilt_axis: Vec3::Z,
            spin_speed_rad_s: 0.0,
            parent: None,
            tidal_lock: false,
            strategy: RenderStrategy::default(),
            trail: None,
        }
    }

    pub fn with_orbit(mut self, radius: f32, speed_rad_s: f32) -> Self {
        self.orbit_radius = radius;
        self.orbit_speed_rad_s = speed_rad_s;
        self
    }

    /// Orbital-plane orientation: inclination and ascending node.
    pub fn with_plane(mut self, inclination_rad: f32, ascending_node_rad: f32) -> Self {
        self.inclination_rad = inclination_rad;
        self.ascending_node_rad = ascending_node_rad;
        self
    }

    pub fn with_spin(mut self, speed_rad_s: f32) -> Self {
        self.spin_speed_rad_s = speed_rad_s;
        self
    }

    pub fn with_tilt(mut self, tilt_rad: f32, axis: Vec3) -> Self {
        self.axial_tilt_rad = tilt_rad;
        self.axial_tilt_axis = axis;
        self
    }

    pub fn with_parent(mut self, parent: impl Into<String>, tidal_lock: bool) -> Self {
        self.parent = Some(parent.into());
        self.tidal_lock = tidal_lock;
        self
    }

    pub fn with_strategy(mut self, strategy: RenderStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_trail(mut self, color: [f32; 3], alpha: f32) -> Self {
        self.trail = Some(TrailStyle { color, alpha });
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let name = || self.name.clone();
        let finite = |value: f32, param: &'static str| {
            if value.is_finite() {
                Ok(())
            } else {
                Err(ConfigError::NonFinite {
                    name: name(),
                    param,
                })
            }
        };
        finite(self.radius, "radius")?;
        finite(self.orbit_radius, "orbit_radius")?;
        finite(self.inclination_rad, "inclination_rad")?;
        finite(self.ascending_node_rad, "ascending_node_rad")?;
        finite(self.orbit_speed_rad_s, "orbit_speed_rad_s")?;
        finite(self.axial_tilt_rad, "axial_tilt_rad")?;
        finite(self.spin_speed_rad_s, "spin_speed_rad_s")?;

        if self.radius <= 0.0 {
            return Err(ConfigError::NonPositiveRadius {
                name: name(),
                value: self.radius,
            });
        }
        if self.orbit_radius < 0.0 {
            return Err(ConfigError::NegativeOrbitRadius {
                name: name(),
                value: self.orbit_radius,
            });
        }
        if self.axial_tilt_rad.abs() > TILT_EPSILON && self.axial_tilt_axis.length_squared() == 0.0
        {
            return Err(ConfigError::ZeroTiltAxis { name: name() });
        }

        match &self.strategy {
            RenderStrategy::SingleLayer { .. } => {}
            RenderStrategy::LayeredAtmosphere { shell, .. } => {
                if !(shell.radius_scale > 1.0) {
                    return Err(ConfigError::ShellNotLarger {
                        name: name(),
                        value: shell.radius_scale,
                    });
                }
            }
            RenderStrategy::Ringed { ring } => {
                if !(ring.inner_radius > 0.0 && ring.inner_radius < ring.outer_radius) {
                    return Err(ConfigError::InvalidRing {
                        name: name(),
                        inner: ring.inner_radius,
                        outer: ring.outer_radius,
                    });
                }
            }
        }
        Ok(())
    }

    /// All logical texture names this body references.
    pub fn texture_refs(&self) -> Vec<&str> {
        let mut refs = vec![self.texture.as_str()];
        match &self.strategy {
            RenderStrategy::SingleLayer { .. } => {}
            RenderStrategy::LayeredAtmosphere {
                night_texture,
                shell,
            } => {
                refs.push(night_texture);
                refs.push(&shell.texture);
            }
            RenderStrategy::Ringed { ring } => refs.push(&ring.texture),
        }
        refs
    }
}

/// Per-body mutable state: the only fields that change after startup,
/// advanced exactly once per frame-driver tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyState {
    pub orbit_angle: f32,
    pub spin_angle: f32,
    /// Shell spin for layered-atmosphere bodies; unused otherwise.
    pub shell_angle: f32,
}

/// Static table of body definitions plus their angle state.
#[derive(Debug)]
pub struct BodyRegistry {
    defs: Vec<BodyDef>,
    states: Vec<BodyState>,
    parents: Vec<Option<BodyId>>,
}

impl BodyRegistry {
    /// Validate and build the registry. Any malformed definition is a
    /// registry defect and rejects construction.
    pub fn new(defs: Vec<BodyDef>) -> Result<Self, ConfigError> {
        for (i, def) in defs.iter().enumerate() {
            def.validate()?;
            if defs[..i].iter().any(|d| d.name == def.name) {
                return Err(ConfigError::DuplicateName(def.name.clone()));
            }
        }

        let mut parents = Vec::with_capacity(defs.len());
        for def in &defs {
            let parent = match &def.parent {
                None => None,
                Some(parent_name) => {
                    let idx = defs.iter().position(|d| &d.name == parent_name).ok_or_else(
                        || ConfigError::UnknownParent {
                            body: def.name.clone(),
                            parent: parent_name.clone(),
                        },
                    )?;
                    // One level of nesting only: a parent is never itself
                    // a satellite.
                    if defs[idx].parent.is_some() {
                        return Err(ConfigError::NestedSatellite {
                            body: def.name.clone(),
                            parent: parent_name.clone(),
                        });
                    }
                    Some(BodyId(idx as u32))
                }
            };
            parents.push(parent);
        }

        let states = vec![BodyState::default(); defs.len()];
        log::info!("body registry validated: {} bodies", defs.len());
        Ok(Self {
            defs,
            states,
            parents,
        })
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = BodyId> {
        (0..self.defs.len() as u32).map(BodyId)
    }

    pub fn def(&self, id: BodyId) -> &BodyDef {
        &self.defs[id.0 as usize]
    }

    pub fn state(&self, id: BodyId) -> &BodyState {
        &self.states[id.0 as usize]
    }

    pub fn parent(&self, id: BodyId) -> Option<BodyId> {
        self.parents[id.0 as usize]
    }

    pub fn find(&self, name: &str) -> Option<BodyId> {
        self.defs
            .iter()
            .position(|d| d.name == name)
            .map(|i| BodyId(i as u32))
    }

    /// Advance every body's angles by `dt` seconds. The driver passes
    /// `dt = 0` while paused, freezing celestial motion.
    pub fn advance(&mut self, dt: f32) {
        for (def, state) in self.defs.iter().zip(self.states.iter_mut()) {
            state.orbit_angle = angle::advance(state.orbit_angle, def.orbit_speed_rad_s, dt);
            state.spin_angle = angle::advance(state.spin_angle, def.spin_speed_rad_s, dt);
            if let RenderStrategy::LayeredAtmosphere { shell, .. } = &def.strategy {
                state.shell_angle = angle::advance(state.shell_angle, shell.spin_speed_rad_s, dt);
            }
        }
    }

    /// Every logical texture name referenced by any body.
    pub fn texture_refs(&self) -> Vec<&str> {
        let mut refs: Vec<&str> = self.defs.iter().flat_map(|d| d.texture_refs()).collect();
        refs.sort_unstable();
        refs.dedup();
        refs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::TAU;

    fn planet(name: &str) -> BodyDef {
        BodyDef::new(name, "tex", 1.0).with_orbit(10.0, TAU / 30.0)
    }

    #[test]
    fn builds_and_advances() {
        let mut reg =
            BodyRegistry::new(vec![planet("a").with_spin(TAU / 5.0), planet("b")]).unwrap();
        reg.advance(1.0);
        let a = reg.find("a").unwrap();
        let state = reg.state(a);
        assert!(state.orbit_angle > 0.0);
        assert!(state.spin_angle > 0.0);
    }

    #[test]
    fn rejects_negative_orbit_radius() {
        let err = BodyRegistry::new(vec![planet("a").with_orbit(-5.0, 0.0)]).unwrap_err();
        assert!(matches!(err, ConfigError::NegativeOrbitRadius { .. }));
    }

    #[test]
    fn rejects_duplicate_names() {
        let err = BodyRegistry::new(vec![planet("a"), planet("a")]).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateName(_)));
    }

    #[test]
    fn rejects_unknown_parent() {
        let err =
            BodyRegistry::new(vec![planet("moon").with_parent("earth", true)]).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownParent { .. }));
    }

    #[test]
    fn rejects_nested_satellite() {
        let err = BodyRegistry::new(vec![
            planet("earth"),
            planet("moon").with_parent("earth", true),
            planet("pebble").with_parent("moon", false),
        ])
        .unwrap_err();
        assert!(matches!(err, ConfigError::NestedSatellite { .. }));
    }

    #[test]
    fn rejects_shell_not_larger_than_surface() {
        let def = planet("earth").with_strategy(RenderStrategy::LayeredAtmosphere {
            night_texture: "night".into(),
            shell: ShellDef {
                texture: "clouds".into(),
                radius_scale: 0.9,
                spin_speed_rad_s: 1.0,
                alpha: 0.75,
            },
        });
        let err = BodyRegistry::new(vec![def]).unwrap_err();
        assert!(matches!(err, ConfigError::ShellNotLarger { .. }));
    }

    #[test]
    fn rejects_inverted_ring() {
        let def = planet("saturn").with_strategy(RenderStrategy::Ringed {
            ring: RingDef {
                texture: "ring".into(),
                inner_radius: 12.0,
                outer_radius: 7.5,
                alpha: 0.85,
            },
        });
        let err = BodyRegistry::new(vec![def]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRing { .. }));
    }

    #[test]
    fn rejects_tilt_with_zero_axis() {
        let def = planet("p").with_tilt(0.4, glam::Vec3::ZERO);
        let err = BodyRegistry::new(vec![def]).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroTiltAxis { .. }));
    }

    #[test]
    fn shell_angle_advances_independently() {
        let earth = planet("earth")
            .with_spin(TAU / 3.0)
            .with_strategy(RenderStrategy::LayeredAtmosphere {
                night_texture: "night".into(),
                shell: ShellDef {
                    texture: "clouds".into(),
                    radius_scale: 1.015,
                    spin_speed_rad_s: TAU / 4.5,
                    alpha: 0.75,
                },
            });
        let mut reg = BodyRegistry::new(vec![earth]).unwrap();
        reg.advance(1.0);
        let state = reg.state(BodyId(0));
        assert!((state.spin_angle - TAU / 3.0).abs() < 1e-5);
        assert!((state.shell_angle - TAU / 4.5).abs() < 1e-5);
        assert!(state.spin_angle != state.shell_angle);
    }

    #[test]
    fn texture_refs_deduplicated() {
        let reg = BodyRegistry::new(vec![
            BodyDef::new("a", "shared", 1.0),
            BodyDef::new("b", "shared", 1.0),
        ])
        .unwrap();
        assert_eq!(reg.texture_refs(), vec!["shared"]);
    }
}
