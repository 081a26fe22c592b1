use nalgebra::{Point3, Vector3};

pub type P3 = Point3<f64>;
pub type V3 = Vector3<f64>;

pub mod camera;
pub mod config;
pub mod error;
pub mod example_scenes;
pub mod framebuffer;
pub mod manager;
pub mod material;
pub mod math;
pub mod object;
pub mod ray;
pub mod renderer;
pub mod rgb;
pub mod scene;
pub mod shape;
pub mod sink;

pub use error::{Error, Result};
pub use ray::Ray;
pub use rgb::RGB;
