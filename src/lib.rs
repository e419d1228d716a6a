pub mod camera;
pub mod cli;
pub mod controller;
pub mod demo;
pub mod frame;
pub mod math;

pub use camera::Camera;
pub use math::{Mat2, Mat4, Vec2, Vec3, Vec4};
