//! Lumen Core - Scene model for the Lumen ray tracer.
//!
//! This crate provides:
//!
//! - **Primitives**: `Sphere`, `Room`, closed over by the `Shape` enum
//! - **Scene types**: `Material`, `PointLight`, `SceneObject`, `Scene`
//! - **Nearest-hit query**: `Scene::nearest_hit`
//! - **Scene descriptions**: JSON loading and export
//!
//! # Example
//!
//! ```ignore
//! use lumen_core::load_scene;
//!
//! let scene = load_scene("scenes/two_spheres.json")?;
//! println!("Loaded {} objects, {} lights",
//!     scene.object_count(),
//!     scene.light_count());
//! ```

pub mod demo;
pub mod description;
pub mod light;
pub mod material;
pub mod room;
pub mod scene;
pub mod shape;
pub mod sphere;

// Re-export commonly used types
pub use demo::demo_scene;
pub use description::{
    load_scene, load_scene_from_str, scene_to_json, SceneDescription, SceneError, SceneResult,
};
pub use light::PointLight;
pub use material::{Color, Material};
pub use room::Room;
pub use scene::{Hit, Scene, SceneObject};
pub use shape::Shape;
pub use sphere::Sphere;
