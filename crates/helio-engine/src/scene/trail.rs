use glam::Vec3;

use crate::core::angle::TAU;
use crate::core::registry::BodyDef;
use crate::renderer::command::TrailCommand;
use crate::scene::compose::plane_matrix;

/// Segment count matching the source material's orbit rings.
pub const DEFAULT_TRAIL_SEGMENTS: usize = 180;

/// Build the static orbit ring for a body: a closed polyline of evenly
/// spaced points on the orbit circle, carried into the inclined orbital
/// plane by the ascending-node and inclination rotations only. The orbit
/// angle never appears — the trail does not move with the body.
///
/// Returns `None` for bodies without a trail style or without an orbit.
pub fn orbit_trail(def: &BodyDef, segments: usize) -> Option<TrailCommand> {
    let style = def.trail?;
    if def.orbit_radius <= 0.0 || segments < 3 {
        return None;
    }
    let plane = plane_matrix(def);
    let points = (0..segments)
        .map(|i| {
            let theta = TAU * i as f32 / segments as f32;
            let p = plane.transform_point3(Vec3::new(
                def.orbit_radius * theta.cos(),
                0.0,
                def.orbit_radius * theta.sin(),
            ));
            [p.x, p.y, p.z]
        })
        .collect();
    Some(TrailCommand {
        points,
        color: [style.color[0], style.color[1], style.color[2], style.alpha],
        closed: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mercury() -> BodyDef {
        BodyDef::new("mercury", "tex", 1.5)
            .with_orbit(30.0, 1.0)
            .with_plane(0.1223, 0.8435)
            .with_trail([0.7, 0.7, 0.7], 0.15)
    }

    #[test]
    fn trail_points_stay_on_orbit_radius() {
        let trail = orbit_trail(&mercury(), DEFAULT_TRAIL_SEGMENTS).unwrap();
        assert_eq!(trail.points.len(), DEFAULT_TRAIL_SEGMENTS);
        assert!(trail.closed);
        for p in &trail.points {
            let r = Vec3::from_array(*p).length();
            assert!((r - 30.0).abs() < 1e-3, "trail point at radius {r}");
        }
    }

    #[test]
    fn inclined_trail_leaves_the_reference_plane() {
        let trail = orbit_trail(&mercury(), 64).unwrap();
        let max_y = trail
            .points
            .iter()
            .map(|p| p[1].abs())
            .fold(0.0f32, f32::max);
        assert!(max_y > 1.0, "expected tilted ring, max |y| = {max_y}");
    }

    #[test]
    fn flat_trail_stays_in_plane() {
        let def = BodyDef::new("earth", "tex", 3.2)
            .with_orbit(72.0, 1.0)
            .with_trail([0.3, 0.5, 0.9], 0.15);
        let trail = orbit_trail(&def, 64).unwrap();
        for p in &trail.points {
            assert!(p[1].abs() < 1e-4);
        }
    }

    #[test]
    fn no_trail_without_style_or_orbit() {
        let no_style = BodyDef::new("a", "tex", 1.0).with_orbit(10.0, 1.0);
        assert!(orbit_trail(&no_style, 64).is_none());

        let no_orbit = BodyDef::new("sun", "tex", 14.0).with_trail([1.0, 1.0, 1.0], 0.2);
        assert!(orbit_trail(&no_orbit, 64).is_none());
    }
}
