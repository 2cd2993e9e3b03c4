//! Scene context: entity world, typed scene description records, errors.
//! One context object built at startup and handed to the frame loop and
//! input handlers; nothing in here is global.

use thiserror::Error;

use crate::Vec3;
use crate::camera::Camera;
use crate::seek::Seek;
use crate::transform::Transform;
use crate::wave::Wave;

/// Entity id (dense, index into component arrays).
pub type Entity = u32;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SceneError {
    #[error("entity {0} is not alive")]
    DeadEntity(Entity),
    #[error("entity {0} has no seek attached")]
    NoSeek(Entity),
}

/// Built-in mesh shapes the demos draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeshKind {
    Cube,
    Sphere,
}

/// Typed texture handle. Resolution (loading, sampling) is the render
/// collaborator's concern; the scene only names the texture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextureKey(pub &'static str);

/// Surface description with named fields instead of an open property bag.
#[derive(Clone, Debug, PartialEq)]
pub enum Material {
    Flat {
        color: [f32; 3],
    },
    /// Vertices pushed along their normals by a noise texture sample.
    NoiseDisplace {
        noise: TextureKey,
        tint: [f32; 3],
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Renderable {
    pub mesh: MeshKind,
    pub material: Material,
}

/// Exponential-squared fog.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FogExp2 {
    pub color: [f32; 3],
    pub density: f32,
}

/// Shadow-map frustum parameters for a directional light.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadowSettings {
    pub near: f32,
    pub far: f32,
    /// Half-width of the orthographic shadow frustum.
    pub extent: f32,
    pub map_size: u32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    pub color: [f32; 3],
    pub intensity: f32,
    pub position: Vec3,
    pub shadow: Option<ShadowSettings>,
}

/// Everything about a scene that is not an entity.
#[derive(Clone, Debug, PartialEq)]
pub struct Environment {
    pub background: [f32; 3],
    pub fog: Option<FogExp2>,
    pub light: Option<DirectionalLight>,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            background: [0.0, 0.0, 0.0],
            fog: None,
            light: None,
        }
    }
}

/// Very small entity world with dense parallel arrays.
/// No allocations per-frame; spawn may allocate to grow capacity.
#[derive(Default)]
pub struct World {
    transforms: Vec<Transform>,
    renderables: Vec<Option<Renderable>>,
    seeks: Vec<Option<Seek>>,
    waves: Vec<Option<Wave>>,
    alive: Vec<bool>,
    len: u32,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn entity with Transform and optional Renderable.
    pub fn spawn(&mut self, t: Transform, r: Option<Renderable>) -> Entity {
        let id = self.len;
        let idx = id as usize;
        self.len += 1;

        if idx >= self.transforms.len() {
            // grow all arrays equally
            let new_len = (idx + 1).next_power_of_two().max(8);
            self.transforms.resize(new_len, Transform::identity());
            self.renderables.resize(new_len, None);
            self.seeks.resize(new_len, None);
            self.waves.resize(new_len, None);
            self.alive.resize(new_len, false);
        }

        self.transforms[idx] = t;
        self.renderables[idx] = r;
        self.seeks[idx] = None;
        self.waves[idx] = None;
        self.alive[idx] = true;
        id
    }

    #[inline]
    pub fn is_alive(&self, e: Entity) -> bool {
        let i = e as usize;
        i < self.alive.len() && self.alive[i]
    }

    /// Mutable access to a transform (for animation).
    #[inline]
    pub fn transform_mut(&mut self, e: Entity) -> Option<&mut Transform> {
        let i = e as usize;
        if self.is_alive(e) {
            Some(&mut self.transforms[i])
        } else {
            None
        }
    }

    #[inline]
    pub fn transform(&self, e: Entity) -> Option<&Transform> {
        let i = e as usize;
        if self.is_alive(e) {
            Some(&self.transforms[i])
        } else {
            None
        }
    }

    pub fn attach_seek(&mut self, e: Entity, seek: Seek) -> Result<(), SceneError> {
        if !self.is_alive(e) {
            return Err(SceneError::DeadEntity(e));
        }
        self.seeks[e as usize] = Some(seek);
        Ok(())
    }

    pub fn attach_wave(&mut self, e: Entity, wave: Wave) -> Result<(), SceneError> {
        if !self.is_alive(e) {
            return Err(SceneError::DeadEntity(e));
        }
        self.waves[e as usize] = Some(wave);
        Ok(())
    }

    #[inline]
    pub fn seek_mut(&mut self, e: Entity) -> Option<&mut Seek> {
        let i = e as usize;
        if self.is_alive(e) {
            self.seeks[i].as_mut()
        } else {
            None
        }
    }

    /// Point an entity's seek at a new target.
    pub fn retarget(&mut self, e: Entity, target: Vec3) -> Result<(), SceneError> {
        if !self.is_alive(e) {
            return Err(SceneError::DeadEntity(e));
        }
        match self.seeks[e as usize].as_mut() {
            Some(seek) => {
                seek.set_target(target);
                Ok(())
            }
            None => Err(SceneError::NoSeek(e)),
        }
    }

    /// Iterate over (Transform, Renderable) pairs.
    pub fn iter_renderables(&self) -> impl Iterator<Item = (&Transform, &Renderable)> {
        // No alloc: walk the dense range, filter by alive + Some(Renderable)
        (0..self.len as usize).filter_map(move |i| {
            if self.alive.get(i).copied().unwrap_or(false) {
                if let Some(r) = self.renderables[i].as_ref() {
                    return Some((&self.transforms[i], r));
                }
            }
            None
        })
    }

    /// System: advance every seek against its entity's translation.
    pub fn system_seek(&mut self) {
        for i in 0..(self.len as usize) {
            if self.alive[i] {
                if let Some(seek) = self.seeks[i].as_mut() {
                    seek.step(&mut self.transforms[i].translation);
                }
            }
        }
    }

    /// System: apply every wave at elapsed time `t`.
    pub fn system_wave(&mut self, t: f32) {
        for i in 0..(self.len as usize) {
            if self.alive[i] {
                if let Some(wave) = self.waves[i] {
                    wave.apply(t, &mut self.transforms[i]);
                }
            }
        }
    }
}

/// The one context object: camera, environment, entities.
pub struct SceneContext {
    pub camera: Camera,
    pub environment: Environment,
    pub world: World,
}

impl SceneContext {
    pub fn new(camera: Camera, environment: Environment) -> Self {
        Self {
            camera,
            environment,
            world: World::new(),
        }
    }
}
