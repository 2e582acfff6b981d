use crate::models::body::BodyProperties;
use crate::models::state::DescentState;
use crate::physics::drag::drag_force;

pub trait EquationsOfMotion {
    type State;

    fn acceleration(&self, state: &Self::State) -> f64;
}

/// Vertical dynamics of a falling body: constant weight opposed by
/// quadratic drag.
pub struct VerticalDynamics<'a, T: BodyProperties> {
    body: &'a T,
    air_density: f64,
    gravity: f64,
}

impl<'a, T: BodyProperties> VerticalDynamics<'a, T> {
    pub fn new(body: &'a T, air_density: f64, gravity: f64) -> Self {
        Self {
            body,
            air_density,
            gravity,
        }
    }
}

impl<'a, T: BodyProperties> EquationsOfMotion for VerticalDynamics<'a, T> {
    type State = DescentState;

    fn acceleration(&self, state: &DescentState) -> f64 {
        let drag = drag_force(self.body, self.air_density, state.velocity);
        self.gravity - drag / self.body.mass()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::bodies::Skydiver;
    use approx::assert_abs_diff_eq;

    #[test]
    fn acceleration_is_gravity_at_rest() {
        let dynamics = VerticalDynamics::new(&Skydiver, 1.2, 9.81);
        let state = DescentState::released_from(100.0);
        assert_abs_diff_eq!(dynamics.acceleration(&state), 9.81, epsilon = 1e-12);
    }

    #[test]
    fn acceleration_vanishes_at_terminal_velocity() {
        let dynamics = VerticalDynamics::new(&Skydiver, 1.2, 9.81);
        let v_term = ((2.0_f64 * 85.0 * 9.81) / (1.2 * 1.0 * 0.7)).sqrt();
        let state = DescentState {
            remaining_height: 100.0,
            velocity: v_term,
            elapsed: 0.0,
        };
        assert_abs_diff_eq!(dynamics.acceleration(&state), 0.0, epsilon = 1e-9);
    }
}
