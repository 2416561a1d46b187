//! Body catalog: every celestial body, plus camera and starfield
//! settings. Radii and distances are aesthetic, not to scale; orbital
//! inclinations and ascending nodes are the real J2000 values so each
//! orbit sits at its true angle to the ecliptic.

use std::f32::consts::TAU;

use glam::Vec3;
use helio_engine::{
    BackdropDef, BodyDef, CameraConfig, GlowLayer, RenderStrategy, RingDef, ShellDef,
    StarfieldConfig,
};

const ORBIT_ALPHA: f32 = 0.15;

/// Milky Way backdrop sits behind the star sphere.
const SKY_SPHERE_RADIUS: f32 = 2500.0;

fn deg(d: f32) -> f32 {
    d.to_radians()
}

pub fn solar_system() -> Vec<BodyDef> {
    vec![
        BodyDef::new("sun", "sun", 14.0)
            .with_spin(TAU / 25.0)
            .with_strategy(RenderStrategy::SingleLayer {
                emissive: true,
                glow: vec![
                    GlowLayer {
                        scale: 1.12,
                        color: [1.0, 0.85, 0.4, 0.12],
                    },
                    GlowLayer {
                        scale: 1.28,
                        color: [1.0, 0.7, 0.2, 0.06],
                    },
                    GlowLayer {
                        scale: 1.50,
                        color: [0.9, 0.5, 0.15, 0.03],
                    },
                ],
            }),
        BodyDef::new("mercury", "mercury", 1.5)
            .with_orbit(30.0, TAU / 12.0)
            .with_plane(deg(7.005), deg(48.331))
            .with_spin(TAU / 20.0)
            .with_trail([0.7, 0.7, 0.7], ORBIT_ALPHA),
        // Venus rotates retrograde.
        BodyDef::new("venus", "venus", 3.0)
            .with_orbit(50.0, TAU / 20.0)
            .with_plane(deg(3.395), deg(76.680))
            .with_spin(-TAU / 35.0)
            .with_trail([0.9, 0.7, 0.4], ORBIT_ALPHA),
        BodyDef::new("earth", "earth", 3.2)
            .with_orbit(72.0, TAU / 30.0)
            .with_spin(TAU / 3.0)
            .with_tilt(deg(23.44), Vec3::Z)
            .with_strategy(RenderStrategy::LayeredAtmosphere {
                night_texture: "earth_night".into(),
                shell: ShellDef {
                    texture: "earth_clouds".into(),
                    radius_scale: 1.015,
                    spin_speed_rad_s: TAU / 4.5,
                    alpha: 0.75,
                },
            })
            .with_trail([0.3, 0.5, 0.9], ORBIT_ALPHA),
        // Moon orbit plane is inclined to the ecliptic; the node is the
        // mean value (it precesses in reality).
        BodyDef::new("moon", "moon", 0.9)
            .with_orbit(6.5, TAU / 5.0)
            .with_plane(deg(5.145), deg(125.08))
            .with_parent("earth", true),
        BodyDef::new("mars", "mars", 2.2)
            .with_orbit(95.0, TAU / 45.0)
            .with_plane(deg(1.848), deg(49.558))
            .with_spin(TAU / 3.1)
            .with_tilt(deg(25.19), Vec3::Z)
            .with_trail([0.9, 0.4, 0.3], ORBIT_ALPHA),
        BodyDef::new("jupiter", "jupiter", 7.0)
            .with_orbit(135.0, TAU / 80.0)
            .with_plane(deg(1.303), deg(100.464))
            .with_spin(TAU / 1.5)
            .with_trail([0.8, 0.7, 0.5], ORBIT_ALPHA),
        BodyDef::new("saturn", "saturn", 6.0)
            .with_orbit(175.0, TAU / 120.0)
            .with_plane(deg(2.489), deg(113.665))
            .with_spin(TAU / 1.7)
            .with_tilt(deg(26.73), Vec3::Z)
            .with_strategy(RenderStrategy::Ringed {
                ring: RingDef {
                    texture: "saturn_ring".into(),
                    inner_radius: 7.5,
                    outer_radius: 12.0,
                    alpha: 0.85,
                },
            })
            .with_trail([0.8, 0.8, 0.5], ORBIT_ALPHA),
        // Uranus is sideways and spins retrograde.
        BodyDef::new("uranus", "uranus", 4.0)
            .with_orbit(215.0, TAU / 170.0)
            .with_plane(deg(0.773), deg(74.006))
            .with_spin(-TAU / 2.8)
            .with_tilt(deg(97.77), Vec3::Z)
            .with_trail([0.5, 0.8, 0.9], ORBIT_ALPHA),
        BodyDef::new("neptune", "neptune", 3.8)
            .with_orbit(250.0, TAU / 220.0)
            .with_plane(deg(1.770), deg(131.784))
            .with_spin(TAU / 2.5)
            .with_tilt(deg(28.32), Vec3::Z)
            .with_trail([0.3, 0.4, 0.9], ORBIT_ALPHA),
    ]
}

pub fn camera_config() -> CameraConfig {
    CameraConfig {
        default_yaw: 0.0,
        default_pitch: 0.35,
        default_dist: 280.0,
        yaw_speed: 2.0,
        pitch_speed: 1.5,
        zoom_speed: 80.0,
        min_dist: 50.0,
        max_dist: 800.0,
    }
}

pub fn starfield_config() -> StarfieldConfig {
    StarfieldConfig {
        backdrop: Some(BackdropDef {
            texture: "milky_way".into(),
            radius: SKY_SPHERE_RADIUS,
        }),
        ..StarfieldConfig::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use helio_engine::{BodyRegistry, OrbitCamera, Starfield, TextureManifest};

    #[test]
    fn catalog_builds_a_valid_registry() {
        let registry = BodyRegistry::new(solar_system()).unwrap();
        assert_eq!(registry.len(), 10);
        let moon = registry.find("moon").unwrap();
        let earth = registry.find("earth").unwrap();
        assert_eq!(registry.parent(moon), Some(earth));
        assert!(registry.def(moon).tidal_lock);
    }

    #[test]
    fn manifest_covers_every_referenced_texture() {
        let manifest =
            TextureManifest::from_json(include_str!("../assets/textures.json")).unwrap();
        let registry = BodyRegistry::new(solar_system()).unwrap();
        for name in registry.texture_refs() {
            assert!(manifest.get(name).is_some(), "missing texture {name:?}");
        }
        assert!(manifest.get("milky_way").is_some());
    }

    #[test]
    fn camera_and_starfield_settings_validate() {
        assert!(OrbitCamera::new(camera_config()).is_ok());
        assert!(Starfield::generate(starfield_config(), 0).is_ok());
    }

    #[test]
    fn venus_and_uranus_spin_retrograde() {
        let registry = BodyRegistry::new(solar_system()).unwrap();
        for name in ["venus", "uranus"] {
            let id = registry.find(name).unwrap();
            assert!(registry.def(id).spin_speed_rad_s < 0.0, "{name}");
        }
    }

    #[test]
    fn inner_planets_orbit_faster() {
        let defs = solar_system();
        let planets: Vec<&BodyDef> = defs
            .iter()
            .filter(|d| d.parent.is_none() && d.orbit_radius > 0.0)
            .collect();
        for pair in planets.windows(2) {
            assert!(pair[0].orbit_radius < pair[1].orbit_radius);
            assert!(pair[0].orbit_speed_rad_s > pair[1].orbit_speed_rad_s);
        }
    }
}
