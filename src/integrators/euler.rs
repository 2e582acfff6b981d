use crate::models::state::DescentState;
use crate::physics::dynamics::EquationsOfMotion;

/// Fixed-step semi-implicit Euler integrator for a descent.
pub struct FixedStepEuler<T: EquationsOfMotion> {
    eom: T,
    dt: f64,
}

impl<T: EquationsOfMotion<State = DescentState>> FixedStepEuler<T> {
    pub fn new(eom: T, dt: f64) -> Self {
        FixedStepEuler { eom, dt }
    }

    /// Advances the state by one timestep.
    ///
    /// Acceleration is evaluated at the incoming velocity, the velocity
    /// updates first, and the height update uses the updated velocity.
    pub fn step(&self, state: &DescentState) -> DescentState {
        let acceleration = self.eom.acceleration(state);
        let velocity = state.velocity + acceleration * self.dt;
        DescentState {
            remaining_height: state.remaining_height - velocity * self.dt,
            velocity,
            elapsed: state.elapsed + self.dt,
        }
    }
}
