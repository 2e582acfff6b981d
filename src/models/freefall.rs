use serde::Serialize;
use std::collections::BTreeMap;

use crate::constants::{
    DEFAULT_AIR_DENSITY, DEFAULT_DRAG_COEFFICIENT, MAX_DRAG_COEFFICIENT, STANDARD_GRAVITY,
    TIME_STEP,
};
use crate::integrators::euler::FixedStepEuler;
use crate::models::body::BodyProperties;
use crate::models::errors::{check_finite, check_positive, ParamError};
use crate::models::state::DescentState;
use crate::numerics::rounding::round2;
use crate::physics::dynamics::VerticalDynamics;
use crate::physics::terminal;

pub const LABEL_MASS: &str = "mass_kg";
pub const LABEL_AREA: &str = "area_m2";
pub const LABEL_DRAG_COEFFICIENT: &str = "drag_coefficient";
pub const LABEL_AIR_DENSITY: &str = "air_density_kg_m3";
pub const LABEL_GRAVITY: &str = "gravity_m_s2";

/// Snapshot of a model's five parameters in SI units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Properties {
    pub mass: f64,
    pub area: f64,
    pub drag_coefficient: f64,
    pub air_density: f64,
    pub gravity: f64,
}

impl Properties {
    /// The five values keyed by their documented labels.
    pub fn as_map(&self) -> BTreeMap<&'static str, f64> {
        BTreeMap::from([
            (LABEL_MASS, self.mass),
            (LABEL_AREA, self.area),
            (LABEL_DRAG_COEFFICIENT, self.drag_coefficient),
            (LABEL_AIR_DENSITY, self.air_density),
            (LABEL_GRAVITY, self.gravity),
        ])
    }
}

/// One step of a simulated descent, unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrajectorySample {
    pub elapsed_s: f64,
    pub velocity_m_s: f64,
    pub remaining_height_m: f64,
}

impl TrajectorySample {
    fn from_state(state: &DescentState) -> Self {
        TrajectorySample {
            elapsed_s: state.elapsed,
            velocity_m_s: state.velocity,
            remaining_height_m: state.remaining_height,
        }
    }
}

/// Model of an object in free fall through air.
///
/// Holds the five physical parameters and answers the derived queries:
/// terminal velocity in closed form, air time and landing speed through
/// the fixed-step descent simulation. Every parameter is validated on
/// construction and on every setter; a failed call leaves the model
/// unchanged.
#[derive(Debug, Clone)]
pub struct FallModel {
    mass: f64,
    area: f64,
    drag_coefficient: f64,
    air_density: f64,
    gravity: f64,
}

impl FallModel {
    /// Builds a model from mass (kg) and cross sectional area (m^2) with
    /// the default drag coefficient (1.0, a horizontal human), air
    /// density (1.2 kg/m^3, 1 atm at 20 C) and gravity (9.81 m/s^2).
    pub fn new(mass: f64, area: f64) -> Result<Self, ParamError> {
        Self::with_parameters(
            mass,
            area,
            DEFAULT_DRAG_COEFFICIENT,
            DEFAULT_AIR_DENSITY,
            STANDARD_GRAVITY,
        )
    }

    /// Builds a model from all five parameters.
    ///
    /// Finiteness of every argument is checked before any range check.
    /// Ranges: mass, area and gravity larger than 0, drag coefficient in
    /// (0, 2), air density non-negative (zero models vacuum).
    pub fn with_parameters(
        mass: f64,
        area: f64,
        drag_coefficient: f64,
        air_density: f64,
        gravity: f64,
    ) -> Result<Self, ParamError> {
        for (name, value) in [
            ("mass", mass),
            ("area", area),
            ("drag coefficient", drag_coefficient),
            ("air density", air_density),
            ("gravity", gravity),
        ] {
            check_finite(name, value)?;
        }
        for (name, value) in [
            ("mass", mass),
            ("area", area),
            ("drag coefficient", drag_coefficient),
            ("gravity", gravity),
        ] {
            check_positive(name, value)?;
        }
        if drag_coefficient >= MAX_DRAG_COEFFICIENT {
            return Err(ParamError::OutOfRange {
                name: "drag coefficient",
                value: drag_coefficient,
                expected: "less than 2",
            });
        }
        if air_density < 0.0 {
            return Err(ParamError::OutOfRange {
                name: "air density",
                value: air_density,
                expected: "non-negative",
            });
        }

        Ok(FallModel {
            mass,
            area,
            drag_coefficient,
            air_density,
            gravity,
        })
    }

    /// Builds a model from a preset body at default air density and
    /// gravity.
    pub fn from_body<T: BodyProperties>(body: &T) -> Result<Self, ParamError> {
        Self::with_parameters(
            body.mass(),
            body.reference_area(),
            body.drag_coefficient(),
            DEFAULT_AIR_DENSITY,
            STANDARD_GRAVITY,
        )
    }

    /// Sets the drag coefficient to a finite value in (0, 2).
    pub fn set_drag_coefficient(&mut self, drag_coefficient: f64) -> Result<(), ParamError> {
        check_finite("drag coefficient", drag_coefficient)?;
        if drag_coefficient <= 0.0 || drag_coefficient >= MAX_DRAG_COEFFICIENT {
            return Err(ParamError::OutOfRange {
                name: "drag coefficient",
                value: drag_coefficient,
                expected: "larger than 0 and less than 2",
            });
        }
        self.drag_coefficient = drag_coefficient;
        Ok(())
    }

    /// Sets the air density (kg/m^3) to a finite non-negative value.
    pub fn set_density(&mut self, air_density: f64) -> Result<(), ParamError> {
        check_finite("air density", air_density)?;
        if air_density < 0.0 {
            return Err(ParamError::OutOfRange {
                name: "air density",
                value: air_density,
                expected: "non-negative",
            });
        }
        self.air_density = air_density;
        Ok(())
    }

    /// Sets the gravitational acceleration (m/s^2) to a finite positive
    /// value.
    pub fn set_gravity(&mut self, gravity: f64) -> Result<(), ParamError> {
        check_finite("gravity", gravity)?;
        check_positive("gravity", gravity)?;
        self.gravity = gravity;
        Ok(())
    }

    /// Sets mass (kg) and cross sectional area (m^2) together. Both are
    /// validated before either is applied, so a rejected call changes
    /// neither.
    pub fn set_size(&mut self, mass: f64, area: f64) -> Result<(), ParamError> {
        check_finite("mass", mass)?;
        check_finite("area", area)?;
        check_positive("mass", mass)?;
        check_positive("area", area)?;
        self.mass = mass;
        self.area = area;
        Ok(())
    }

    /// Snapshot of the current parameter values.
    pub fn properties(&self) -> Properties {
        Properties {
            mass: self.mass,
            area: self.area,
            drag_coefficient: self.drag_coefficient,
            air_density: self.air_density,
            gravity: self.gravity,
        }
    }

    /// Terminal velocity in m/s, rounded to two decimals, or `None` in
    /// vacuum where no terminal velocity exists.
    pub fn terminal_velocity(&self) -> Option<f64> {
        terminal::terminal_velocity(self, self.air_density, self.gravity).map(round2)
    }

    /// Seconds until an object released from `height` meters hits the
    /// ground, rounded to two decimals.
    pub fn air_time(&self, height: f64) -> Result<f64, ParamError> {
        Self::check_height(height)?;
        Ok(round2(self.simulate_descent(height).elapsed))
    }

    /// Impact speed in m/s for a release from `height` meters, rounded
    /// to two decimals. Terminates at the same step as [`Self::air_time`]
    /// for the same height.
    pub fn landing_speed(&self, height: f64) -> Result<f64, ParamError> {
        Self::check_height(height)?;
        Ok(round2(self.simulate_descent(height).velocity))
    }

    /// Full per-step trajectory of a release from `height` meters,
    /// starting at the release state and ending with the terminating
    /// step. Values are unrounded.
    pub fn descent_profile(&self, height: f64) -> Result<Vec<TrajectorySample>, ParamError> {
        Self::check_height(height)?;
        let dynamics = VerticalDynamics::new(self, self.air_density, self.gravity);
        let integrator = FixedStepEuler::new(dynamics, TIME_STEP);

        let mut state = DescentState::released_from(height);
        let mut samples = vec![TrajectorySample::from_state(&state)];
        while !state.landed() {
            state = integrator.step(&state);
            samples.push(TrajectorySample::from_state(&state));
        }
        Ok(samples)
    }

    fn check_height(height: f64) -> Result<(), ParamError> {
        check_finite("height", height)?;
        check_positive("height", height)
    }

    // Runs the descent until the ground is reached. No iteration cap:
    // termination is the physical stopping condition only.
    fn simulate_descent(&self, height: f64) -> DescentState {
        let dynamics = VerticalDynamics::new(self, self.air_density, self.gravity);
        let integrator = FixedStepEuler::new(dynamics, TIME_STEP);

        let mut state = DescentState::released_from(height);
        while !state.landed() {
            state = integrator.step(&state);
        }
        state
    }
}

impl BodyProperties for FallModel {
    fn mass(&self) -> f64 {
        self.mass
    }

    fn drag_coefficient(&self) -> f64 {
        self.drag_coefficient
    }

    fn reference_area(&self) -> f64 {
        self.area
    }
}
