//! Builder: assemble a car step by step, with a director for the usual recipe

use crate::error::PatternError;
use std::fmt;

/// Product assembled by [`CarBuilder`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    pub wheels: u32,
    pub seats: u32,
    pub color: String,
}

impl Default for Car {
    fn default() -> Self {
        Self {
            wheels: 4,
            seats: 4,
            color: "Black".to_string(),
        }
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "This is a {} car with {} wheels and {} seats.",
            self.color, self.wheels, self.seats
        )
    }
}

impl Car {
    /// Start a builder from the default car
    pub fn builder() -> CarBuilder {
        CarBuilder::default()
    }
}

/// Consuming builder; unset parts keep the [`Car`] defaults
#[derive(Debug, Default)]
pub struct CarBuilder {
    car: Car,
}

impl CarBuilder {
    /// Set the wheel count
    pub fn wheels(mut self, wheels: u32) -> Self {
        self.car.wheels = wheels;
        self
    }

    /// Set the seat count
    pub fn seats(mut self, seats: u32) -> Self {
        self.car.seats = seats;
        self
    }

    /// Set the paint colour
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.car.color = color.into();
        self
    }

    /// Finish and return the car
    pub fn build(self) -> Car {
        self.car
    }
}

/// Knows the build steps for the standard car
pub struct CarBuilderDirector;

impl CarBuilderDirector {
    /// Eight-wheeled red car with four seats
    pub fn construct() -> Car {
        Car::builder().wheels(8).seats(4).color("Red").build()
    }
}

/// Describe the director's car
pub fn demo() -> Result<Vec<String>, PatternError> {
    Ok(vec![CarBuilderDirector::construct().to_string()])
}
