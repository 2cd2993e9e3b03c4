//! Render collaborator seam. The demos are headless: the default sink
//! projects object origins through the camera and logs where they would
//! land on screen.

use corelib::scene::SceneContext;
use corelib::vec4;

/// Consumes scene state once per frame, after the animators ran.
pub trait RenderSink {
    fn frame(&mut self, frame: u32, scene: &SceneContext);
}

/// Logs NDC coordinates of every renderable, every `every` frames.
pub struct TraceSink {
    every: u32,
}

impl TraceSink {
    pub fn new(every: u32) -> Self {
        Self {
            every: every.max(1),
        }
    }
}

impl RenderSink for TraceSink {
    fn frame(&mut self, frame: u32, scene: &SceneContext) {
        if frame % self.every != 0 {
            return;
        }
        let pv = scene.camera.proj_view();
        for (transform, renderable) in scene.world.iter_renderables() {
            let clip = pv * transform.matrix() * vec4(0.0, 0.0, 0.0, 1.0);
            if clip.w.abs() < f32::EPSILON {
                continue;
            }
            let ndc = clip / clip.w;
            log::info!(
                "frame {frame}: {:?} at world {:?} ndc=({:.3}, {:.3}, {:.3})",
                renderable.mesh,
                transform.translation,
                ndc.x,
                ndc.y,
                ndc.z
            );
        }
    }
}

/// Discards every frame; used when only the final stats matter.
pub struct NullSink;

impl RenderSink for NullSink {
    fn frame(&mut self, _frame: u32, _scene: &SceneContext) {}
}
