use bytemuck::{Pod, Zeroable};
use glam::Mat4;

/// Opaque handle produced by the external resource loader. The engine
/// never looks inside; zero is the null/fallback handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextureHandle(pub u32);

/// Blend/depth tag for a draw command.
///
/// `Additive` and `TranslucentNoDepthWrite` are both expected to render
/// without depth writes so overlays never occlude bodies behind them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderPass {
    /// Drawn first with depth testing disabled (sky backdrop).
    Background,
    #[default]
    Opaque,
    /// Additive blend (emissive overlays, glow halos).
    Additive,
    /// Alpha blend without depth writes (cloud shells, rings).
    TranslucentNoDepthWrite,
}

/// Geometry reference; the renderer owns the actual meshes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeshRef {
    Sphere { radius: f32 },
    /// Flat annulus in the local XZ plane.
    Ring { inner: f32, outer: f32 },
    /// Inward-facing sphere enclosing the scene.
    SkySphere { radius: f32 },
}

/// GPU-side column-major 4x4 transform.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct TransformUniform {
    pub m: [[f32; 4]; 4],
}

impl From<Mat4> for TransformUniform {
    fn from(m: Mat4) -> Self {
        Self {
            m: m.to_cols_array_2d(),
        }
    }
}

/// One resolved draw: transform + geometry + texture + compositing tag.
#[derive(Debug, Clone)]
pub struct DrawCommand {
    pub transform: TransformUniform,
    pub mesh: MeshRef,
    /// `None` for untextured geometry (glow halos).
    pub texture: Option<TextureHandle>,
    pub pass: RenderPass,
    /// Whether scene lighting applies. Emissive layers set this false.
    pub lit: bool,
    /// RGBA tint multiplied into the texture/geometry colour.
    pub color: [f32; 4],
}

/// One twinkling star instance. 5 floats, tightly packed for upload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct StarInstance {
    pub pos: [f32; 3],
    pub brightness: f32,
    /// Size class as 0.0 / 1.0 / 2.0 — a bucketing hint, not physics.
    pub size_class: f32,
}

impl StarInstance {
    pub const FLOATS: usize = 5;
}

/// Closed polyline marking a body's orbit.
#[derive(Debug, Clone)]
pub struct TrailCommand {
    pub points: Vec<[f32; 3]>,
    pub color: [f32; 4],
    /// The renderer connects the last point back to the first.
    pub closed: bool,
}

/// Everything the external renderer needs for one frame, in draw order.
pub struct DrawList {
    /// Camera view matrix for the frame.
    pub view: TransformUniform,
    /// Body/backdrop draw commands, ordered back to front per body.
    pub bodies: Vec<DrawCommand>,
    pub stars: Vec<StarInstance>,
    pub trails: Vec<TrailCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self {
            view: TransformUniform::default(),
            bodies: Vec::with_capacity(64),
            stars: Vec::new(),
            trails: Vec::new(),
        }
    }

    pub fn clear(&mut self) {
        self.view = TransformUniform::default();
        self.bodies.clear();
        self.stars.clear();
        self.trails.clear();
    }
}

impl Default for DrawList {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_instance_is_5_floats() {
        assert_eq!(std::mem::size_of::<StarInstance>(), 20);
        assert_eq!(StarInstance::FLOATS, 5);
    }

    #[test]
    fn transform_uniform_round_trips_mat4() {
        let m = Mat4::from_rotation_y(1.0) * Mat4::from_translation(glam::Vec3::new(1.0, 2.0, 3.0));
        let u: TransformUniform = m.into();
        assert_eq!(Mat4::from_cols_array_2d(&u.m), m);
    }

    #[test]
    fn clear_resets_all_sets() {
        let mut list = DrawList::new();
        list.stars.push(StarInstance::default());
        list.trails.push(TrailCommand {
            points: vec![[0.0; 3]],
            color: [1.0; 4],
            closed: true,
        });
        list.clear();
        assert!(list.bodies.is_empty());
        assert!(list.stars.is_empty());
        assert!(list.trails.is_empty());
    }
}
