use crate::models::body::BodyProperties;

/// Adult in horizontal, belly-to-earth position.
pub struct Skydiver;

impl Skydiver {
    pub const MASS: f64 = 85.0; // kg
    pub const C_D: f64 = 1.0;
    pub const FRONTAL_AREA: f64 = 0.7; // m^2
}

impl BodyProperties for Skydiver {
    fn mass(&self) -> f64 {
        Self::MASS
    }

    fn drag_coefficient(&self) -> f64 {
        Self::C_D
    }

    fn reference_area(&self) -> f64 {
        Self::FRONTAL_AREA
    }
}

/// Solid steel ball, 10 cm radius.
pub struct SteelSphere;

impl SteelSphere {
    pub const MASS: f64 = 33.0; // kg
    pub const C_D: f64 = 0.47; // Smooth sphere
    pub const RADIUS: f64 = 0.1; // meters
}

impl BodyProperties for SteelSphere {
    fn mass(&self) -> f64 {
        Self::MASS
    }

    fn drag_coefficient(&self) -> f64 {
        Self::C_D
    }

    fn reference_area(&self) -> f64 {
        std::f64::consts::PI * Self::RADIUS.powi(2)
    }
}
