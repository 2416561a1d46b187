//! Transform composition: (body parameters, current angles) → world
//! transform and draw layers. Pure functions — no state lives here.
//!
//! World axes: Y is the reference normal ("up"), X the reference forward.
//! The chain, outer to inner: ascending node about Y, inclination about
//! X, orbit angle about Y, translation outward along X, axial tilt about
//! the body's tilt axis, self-spin about local Y.

use glam::{Mat4, Vec3};

use crate::assets::bindings::TextureBindings;
use crate::core::registry::{BodyDef, BodyState, RenderStrategy, TILT_EPSILON};
use crate::renderer::command::{DrawCommand, MeshRef, RenderPass};

/// Steps 1–2: the orbital-plane orientation. Shared with the orbit-trail
/// generator, which must never include the orbit angle itself.
pub fn plane_matrix(def: &BodyDef) -> Mat4 {
    Mat4::from_rotation_y(def.ascending_node_rad) * Mat4::from_rotation_x(def.inclination_rad)
}

/// Steps 1–3: the body's orbital-position frame. Satellites attach here —
/// the parent's tilt and spin are deliberately absent. `orbit_radius = 0`
/// makes the translation a no-op and `inclination = 0` an identity
/// rotation; both fall out of the generic math.
pub fn orbital_frame(def: &BodyDef, state: &BodyState) -> Mat4 {
    plane_matrix(def)
        * Mat4::from_rotation_y(state.orbit_angle)
        * Mat4::from_translation(Vec3::new(def.orbit_radius, 0.0, 0.0))
}

/// Step 4, skipped below the epsilon where the tilt axis is meaningless.
fn tilt_matrix(def: &BodyDef) -> Mat4 {
    if def.axial_tilt_rad.abs() > TILT_EPSILON {
        Mat4::from_axis_angle(def.axial_tilt_axis.normalize(), def.axial_tilt_rad)
    } else {
        Mat4::IDENTITY
    }
}

/// Full chain for the spinning surface, including the tidal-lock
/// correction that cancels the orbital sweep.
pub fn body_transform(def: &BodyDef, state: &BodyState, parent_frame: Mat4) -> Mat4 {
    let mut m = parent_frame
        * orbital_frame(def, state)
        * tilt_matrix(def)
        * Mat4::from_rotation_y(state.spin_angle);
    if def.tidal_lock {
        m *= Mat4::from_rotation_y(-state.orbit_angle);
    }
    m
}

const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Emit the ordered draw layers for one body, dispatched on its render
/// strategy. `parent_frame` is the parent's orbital-position frame, or
/// identity for root bodies.
pub fn compose_body(
    def: &BodyDef,
    state: &BodyState,
    parent_frame: Mat4,
    textures: &TextureBindings,
    out: &mut Vec<DrawCommand>,
) {
    let placement = parent_frame * orbital_frame(def, state);
    let tilt = tilt_matrix(def);
    let surface = body_transform(def, state, parent_frame);
    let sphere = MeshRef::Sphere { radius: def.radius };

    match &def.strategy {
        RenderStrategy::SingleLayer { emissive, glow } => {
            out.push(DrawCommand {
                transform: surface.into(),
                mesh: sphere,
                texture: Some(textures.get(&def.texture)),
                pass: RenderPass::Opaque,
                lit: !emissive,
                color: WHITE,
            });
            for layer in glow {
                out.push(DrawCommand {
                    transform: placement.into(),
                    mesh: MeshRef::Sphere {
                        radius: def.radius * layer.scale,
                    },
                    texture: None,
                    pass: RenderPass::Additive,
                    lit: false,
                    color: layer.color,
                });
            }
        }
        RenderStrategy::LayeredAtmosphere {
            night_texture,
            shell,
        } => {
            out.push(DrawCommand {
                transform: surface.into(),
                mesh: sphere,
                texture: Some(textures.get(&def.texture)),
                pass: RenderPass::Opaque,
                lit: true,
                color: WHITE,
            });
            // Emissive overlay at the identical transform: lighting dims
            // the day side, so the additive layer reads only where dark.
            out.push(DrawCommand {
                transform: surface.into(),
                mesh: sphere,
                texture: Some(textures.get(night_texture)),
                pass: RenderPass::Additive,
                lit: false,
                color: WHITE,
            });
            // Shell spins on its own angle, decoupled from the surface.
            let shell_transform =
                placement * tilt * Mat4::from_rotation_y(state.shell_angle);
            out.push(DrawCommand {
                transform: shell_transform.into(),
                mesh: MeshRef::Sphere {
                    radius: def.radius * shell.radius_scale,
                },
                texture: Some(textures.get(&shell.texture)),
                pass: RenderPass::TranslucentNoDepthWrite,
                lit: true,
                color: [1.0, 1.0, 1.0, shell.alpha],
            });
        }
        RenderStrategy::Ringed { ring } => {
            out.push(DrawCommand {
                transform: surface.into(),
                mesh: sphere,
                texture: Some(textures.get(&def.texture)),
                pass: RenderPass::Opaque,
                lit: true,
                color: WHITE,
            });
            // Equatorial frame: placement + tilt, never the self-spin.
            out.push(DrawCommand {
                transform: (placement * tilt).into(),
                mesh: MeshRef::Ring {
                    inner: ring.inner_radius,
                    outer: ring.outer_radius,
                },
                texture: Some(textures.get(&ring.texture)),
                pass: RenderPass::TranslucentNoDepthWrite,
                lit: true,
                color: [1.0, 1.0, 1.0, ring.alpha],
            });
        }
    }
}
