use crate::models::body::BodyProperties;

/// Magnitude of the quadratic drag force 0.5*C*rho*A*v^2, in N.
///
/// The force opposes the motion; callers apply the sign. A zero air
/// density models vacuum and yields zero drag at any speed.
pub fn drag_force<T: BodyProperties>(body: &T, air_density: f64, velocity: f64) -> f64 {
    0.5 * body.drag_coefficient() * air_density * body.reference_area() * velocity.powi(2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::bodies::{Skydiver, SteelSphere};
    use approx::assert_abs_diff_eq;
    use test_case::test_case;

    #[test_case(1.2, 0.0, 0.0; "no drag at rest")]
    #[test_case(0.0, 50.0, 0.0; "no drag in vacuum")]
    #[test_case(1.2, 10.0, 42.0; "skydiver at 10 m/s")]
    #[test_case(1.2, 20.0, 168.0; "quadruples when speed doubles")]
    fn skydiver_drag(air_density: f64, velocity: f64, expected: f64) {
        let result = drag_force(&Skydiver, air_density, velocity);
        assert_abs_diff_eq!(result, expected, epsilon = 1e-9);
    }

    #[test]
    fn uses_reference_area_of_the_body() {
        // Sphere of 10 cm radius: 0.5 * 0.47 * 1.2 * pi * 0.01 * 100
        let result = drag_force(&SteelSphere, 1.2, 10.0);
        let expected = 0.5 * 0.47 * 1.2 * std::f64::consts::PI * 0.01 * 100.0;
        assert_abs_diff_eq!(result, expected, epsilon = 1e-9);
    }
}
