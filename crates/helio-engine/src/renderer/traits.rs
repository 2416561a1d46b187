use super::command::DrawList;

/// Consumer of per-frame draw lists — a windowed GPU backend in the real
/// application, a logging or recording double in tests. The engine is
/// agnostic to how the commands are rasterized.
pub trait Renderer {
    fn submit(&mut self, frame: &DrawList);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::command::{DrawCommand, MeshRef, RenderPass, TransformUniform};

    struct CountingRenderer {
        frames: usize,
        commands: usize,
    }

    impl Renderer for CountingRenderer {
        fn submit(&mut self, frame: &DrawList) {
            self.frames += 1;
            self.commands += frame.bodies.len();
        }
    }

    #[test]
    fn renderer_double_observes_frames() {
        let mut renderer = CountingRenderer {
            frames: 0,
            commands: 0,
        };
        let mut list = DrawList::new();
        list.bodies.push(DrawCommand {
            transform: TransformUniform::default(),
            mesh: MeshRef::Sphere { radius: 1.0 },
            texture: None,
            pass: RenderPass::Opaque,
            lit: true,
            color: [1.0; 4],
        });
        renderer.submit(&list);
        renderer.submit(&list);
        assert_eq!(renderer.frames, 2);
        assert_eq!(renderer.commands, 2);
    }
}
