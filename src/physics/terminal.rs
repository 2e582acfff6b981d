use crate::models::body::BodyProperties;

/// Velocity at which drag balances weight: sqrt(2*m*g / (rho*C*A)), in m/s.
///
/// Returns `None` when `air_density` is zero; without drag the body never
/// stops accelerating and no terminal velocity exists.
pub fn terminal_velocity<T: BodyProperties>(
    body: &T,
    air_density: f64,
    gravity: f64,
) -> Option<f64> {
    if air_density == 0.0 {
        return None;
    }
    let v_squared = (2.0 * body.mass() * gravity)
        / (air_density * body.drag_coefficient() * body.reference_area());
    Some(v_squared.sqrt())
}
