// Simulation
pub const TIME_STEP: f64 = 0.01; // Integration timestep (s)

// Defaults for optional model parameters
pub const DEFAULT_DRAG_COEFFICIENT: f64 = 1.0; // Human in horizontal position
pub const DEFAULT_AIR_DENSITY: f64 = 1.2; // Air at 1 atm and 20 C (kg/m^3)
pub const STANDARD_GRAVITY: f64 = 9.81; // Surface gravity (m/s^2)

// Parameter domain
pub const MAX_DRAG_COEFFICIENT: f64 = 2.0; // Exclusive upper bound for C
