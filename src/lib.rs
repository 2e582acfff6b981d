//! Model of an object falling through air under weight and quadratic drag.
//!
//! Drag force is 0.5*C*rho*A*v^2; weight is m*g. The descent simulation
//! advances with a fixed 0.01 s timestep until the object reaches the
//! ground. See [`models::FallModel`] for the public surface.

pub mod config;
pub mod constants;
pub mod integrators;
pub mod models;
pub mod numerics;
pub mod physics;
