//! The three demo scenes. Each builder returns the scene context plus the
//! handle of the entity the demo animates.

use corelib::camera::Camera;
use corelib::scene::{
    DirectionalLight, Entity, Environment, FogExp2, Material, MeshKind, Renderable, SceneContext,
    ShadowSettings, TextureKey,
};
use corelib::seek::Seek;
use corelib::transform::Transform;
use corelib::wave::Wave;
use corelib::{Vec3, vec3};

const FOV_Y_DEG: f32 = 75.0;
const ASPECT: f32 = 16.0 / 9.0;
const Z_NEAR: f32 = 0.1;
const Z_FAR: f32 = 1000.0;

pub struct Demo {
    pub scene: SceneContext,
    pub animated: Entity,
}

pub fn build(kind: crate::DemoKind) -> Demo {
    match kind {
        crate::DemoKind::Building => building(),
        crate::DemoKind::Bounce => bounce(),
        crate::DemoKind::Sphere => sphere(),
    }
}

/// Green cube on a black background, camera far out on the z axis,
/// spring-damped toward whatever target the input hands it.
fn building() -> Demo {
    let camera = Camera::new_perspective(
        vec3(0.0, 0.0, 30.0),
        Vec3::ZERO,
        Vec3::Y,
        FOV_Y_DEG.to_radians(),
        Z_NEAR,
        Z_FAR,
        ASPECT,
    );
    let mut scene = SceneContext::new(camera, Environment::default());

    let cube = scene.world.spawn(
        Transform::identity(),
        Some(Renderable {
            mesh: MeshKind::Cube,
            material: Material::Flat {
                color: [0.0, 1.0, 0.0],
            },
        }),
    );
    scene
        .world
        .attach_seek(cube, Seek::default())
        .expect("just spawned");

    Demo {
        scene,
        animated: cube,
    }
}

/// Black cube bobbing on a sine wave, white background, camera at (5,5,5).
fn bounce() -> Demo {
    let camera = Camera::new_perspective(
        vec3(5.0, 5.0, 5.0),
        Vec3::ZERO,
        Vec3::Y,
        FOV_Y_DEG.to_radians(),
        Z_NEAR,
        Z_FAR,
        ASPECT,
    );
    let env = Environment {
        background: [1.0, 1.0, 1.0],
        ..Environment::default()
    };
    let mut scene = SceneContext::new(camera, env);

    let cube = scene.world.spawn(
        Transform::identity(),
        Some(Renderable {
            mesh: MeshKind::Cube,
            material: Material::Flat {
                color: [0.0, 0.0, 0.0],
            },
        }),
    );
    scene
        .world
        .attach_wave(cube, Wave::default())
        .expect("just spawned");

    Demo {
        scene,
        animated: cube,
    }
}

/// Noise-displaced sphere under a warm directional light with exponential
/// fog (density zero in the original, kept as configured).
fn sphere() -> Demo {
    let camera = Camera::new_perspective(
        vec3(5.0, 5.0, 5.0),
        Vec3::ZERO,
        Vec3::Y,
        FOV_Y_DEG.to_radians(),
        Z_NEAR,
        Z_FAR,
        ASPECT,
    );
    let env = Environment {
        background: [1.0, 1.0, 1.0],
        fog: Some(FogExp2 {
            color: [0.0, 0.0, 0.0],
            density: 0.0,
        }),
        light: Some(DirectionalLight {
            color: [0.941, 0.941, 0.941],
            intensity: 0.4,
            position: vec3(0.0, 10.0, 0.0),
            shadow: Some(ShadowSettings {
                near: 250.0,
                far: 400.0,
                extent: 100.0,
                map_size: 2048,
            }),
        }),
    };
    let mut scene = SceneContext::new(camera, env);

    let sphere = scene.world.spawn(
        Transform::identity(),
        Some(Renderable {
            mesh: MeshKind::Sphere,
            material: Material::NoiseDisplace {
                noise: TextureKey("noise"),
                tint: [1.0, 0.0, 0.0],
            },
        }),
    );
    scene
        .world
        .attach_wave(sphere, Wave::default())
        .expect("just spawned");

    Demo {
        scene,
        animated: sphere,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn building_scene_has_a_seeking_cube() {
        let mut demo = building();
        assert!(demo.scene.world.seek_mut(demo.animated).is_some());
        assert_eq!(demo.scene.world.iter_renderables().count(), 1);
    }

    #[test]
    fn sphere_scene_carries_light_and_fog() {
        let demo = sphere();
        let env = &demo.scene.environment;
        assert!(env.fog.is_some());
        let light = env.light.expect("lit scene");
        assert_eq!(light.intensity, 0.4);
        assert_eq!(light.shadow.expect("shadowed").map_size, 2048);
    }
}
