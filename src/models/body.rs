/// Read-only view of a falling body as the drag and terminal-velocity
/// calculations need it.
pub trait BodyProperties {
    /// Mass in kg.
    fn mass(&self) -> f64;
    /// Dimensionless shape factor in the drag-force formula.
    fn drag_coefficient(&self) -> f64;
    /// Cross sectional area normal to the motion, in m^2.
    fn reference_area(&self) -> f64;
}
