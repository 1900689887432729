//! JSON scene descriptions.
//!
//! This module is the file-facing side of scene construction: it parses a
//! JSON document into plain description types, validates the geometry, and
//! converts it into a [`Scene`].
//!
//! ```json
//! {
//!   "name": "two spheres",
//!   "objects": [
//!     { "shape": { "type": "room", "min": [-8, -8, -16], "max": [8, 8, 4] } },
//!     {
//!       "shape": { "type": "sphere", "center": [0, 0, -6], "radius": 1.5 },
//!       "material": { "color": [0.9, 0.2, 0.2], "specular_strength": 0.3 }
//!     }
//!   ],
//!   "lights": [
//!     { "position": [0, 6, -2], "color": [1, 1, 1], "intensity": 0.8 }
//!   ]
//! }
//! ```
//!
//! Omitted material fields take the values of [`Material::default`].

use std::path::Path;

use lumen_math::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::light::PointLight;
use crate::material::{Color, Material};
use crate::room::Room;
use crate::scene::Scene;
use crate::shape::Shape;
use crate::sphere::Sphere;

/// Errors that can occur while loading a scene description.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid geometry for object {index}: {reason}")]
    InvalidGeometry { index: usize, reason: String },

    #[error("Invalid light {index}: {reason}")]
    InvalidLight { index: usize, reason: String },
}

/// Result type for scene loading.
pub type SceneResult<T> = Result<T, SceneError>;

/// Serialized form of a whole scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    #[serde(default)]
    pub name: String,
    pub objects: Vec<ObjectDescription>,
    #[serde(default)]
    pub lights: Vec<LightDescription>,
}

/// One object: a shape and an optional material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectDescription {
    pub shape: ShapeDescription,
    #[serde(default)]
    pub material: MaterialDescription,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShapeDescription {
    Sphere { center: [f32; 3], radius: f32 },
    Room { min: [f32; 3], max: [f32; 3] },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialDescription {
    pub color: [f32; 3],
    pub specular_strength: f32,
    pub shininess: f32,
    pub transparency: f32,
    pub refractive_index: f32,
}

impl Default for MaterialDescription {
    fn default() -> Self {
        Material::default().into()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightDescription {
    pub position: [f32; 3],
    #[serde(default = "white")]
    pub color: [f32; 3],
    pub intensity: f32,
}

fn white() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

impl From<MaterialDescription> for Material {
    fn from(desc: MaterialDescription) -> Self {
        Material::new(Color::from_array(desc.color))
            .with_specular(desc.specular_strength)
            .with_shininess(desc.shininess)
            .with_transparency(desc.transparency, desc.refractive_index)
    }
}

impl From<Material> for MaterialDescription {
    fn from(mat: Material) -> Self {
        Self {
            color: mat.color.to_array(),
            specular_strength: mat.specular_strength,
            shininess: mat.shininess,
            transparency: mat.transparency,
            refractive_index: mat.refractive_index,
        }
    }
}

impl From<&Scene> for SceneDescription {
    fn from(scene: &Scene) -> Self {
        let objects = scene
            .objects
            .iter()
            .map(|object| ObjectDescription {
                shape: match object.shape {
                    Shape::Sphere(s) => ShapeDescription::Sphere {
                        center: s.center.to_array(),
                        radius: s.radius,
                    },
                    Shape::Room(r) => ShapeDescription::Room {
                        min: r.min.to_array(),
                        max: r.max.to_array(),
                    },
                },
                material: object.material.into(),
            })
            .collect();

        let lights = scene
            .lights
            .iter()
            .map(|light| LightDescription {
                position: light.position.to_array(),
                color: light.color.to_array(),
                intensity: light.intensity,
            })
            .collect();

        Self {
            name: scene.name.clone(),
            objects,
            lights,
        }
    }
}

impl ShapeDescription {
    fn to_shape(&self, index: usize) -> SceneResult<Shape> {
        let invalid = |reason: String| SceneError::InvalidGeometry { index, reason };

        match *self {
            ShapeDescription::Sphere { center, radius } => {
                if !(radius.is_finite() && radius > 0.0) {
                    return Err(invalid(format!("sphere radius must be positive, got {}", radius)));
                }
                Ok(Sphere::new(Vec3::from_array(center), radius).into())
            }
            ShapeDescription::Room { min, max } => {
                let (min, max) = (Vec3::from_array(min), Vec3::from_array(max));
                if !min.cmplt(max).all() {
                    return Err(invalid(format!(
                        "room min {:?} must be below max {:?} on every axis",
                        min, max
                    )));
                }
                Ok(Room::new(min, max).into())
            }
        }
    }
}

impl Scene {
    /// Build a scene from a parsed description, validating every entry.
    pub fn from_description(desc: &SceneDescription) -> SceneResult<Scene> {
        let mut scene = Scene::new(desc.name.clone());

        for (index, object) in desc.objects.iter().enumerate() {
            let shape = object.shape.to_shape(index)?;
            scene.add_object(shape, object.material.clone().into());
        }

        for (index, light) in desc.lights.iter().enumerate() {
            if !(light.intensity >= 0.0) {
                return Err(SceneError::InvalidLight {
                    index,
                    reason: format!("intensity must be non-negative, got {}", light.intensity),
                });
            }
            scene.add_light(PointLight::new(
                Vec3::from_array(light.position),
                Color::from_array(light.color),
                light.intensity,
            ));
        }

        if scene.lights.is_empty() {
            log::warn!("Scene '{}' has no lights; only reflections and background will show", scene.name);
        }

        Ok(scene)
    }
}

/// Parse a scene from JSON text.
pub fn load_scene_from_str(text: &str) -> SceneResult<Scene> {
    let desc: SceneDescription = serde_json::from_str(text)?;
    Scene::from_description(&desc)
}

/// Load a scene from a JSON file.
///
/// An unnamed scene takes the file stem as its name.
pub fn load_scene<P: AsRef<Path>>(path: P) -> SceneResult<Scene> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let mut desc: SceneDescription = serde_json::from_str(&text)?;

    if desc.name.is_empty() {
        if let Some(stem) = path.file_stem() {
            desc.name = stem.to_string_lossy().into_owned();
        }
    }

    let scene = Scene::from_description(&desc)?;
    log::info!(
        "Loaded scene '{}' from {}: {} objects, {} lights",
        scene.name,
        path.display(),
        scene.object_count(),
        scene.light_count()
    );
    Ok(scene)
}

/// Serialize a scene to pretty-printed JSON.
pub fn scene_to_json(scene: &Scene) -> SceneResult<String> {
    Ok(serde_json::to_string_pretty(&SceneDescription::from(scene))?)
}
