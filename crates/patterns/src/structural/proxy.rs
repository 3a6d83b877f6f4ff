//! Proxy: guard access to a car behind a driver age check

use crate::error::PatternError;

/// Drivers must be older than this to drive
pub const DRIVING_AGE_LIMIT: u32 = 16;

pub trait Car {
    fn drive(&self) -> String;
}

#[derive(Debug, Default)]
pub struct RealCar;

impl Car for RealCar {
    fn drive(&self) -> String {
        "Car has been driven!".to_string()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Driver {
    pub age: u32,
}

/// Same interface as the real car, with a precondition in front
#[derive(Debug)]
pub struct ProxyCar {
    car: RealCar,
    driver: Driver,
}

impl ProxyCar {
    pub fn new(driver: Driver) -> Self {
        Self { car: RealCar, driver }
    }
}

impl Car for ProxyCar {
    fn drive(&self) -> String {
        if self.driver.age <= DRIVING_AGE_LIMIT {
            "Sorry, the driver is too young to drive.".to_string()
        } else {
            self.car.drive()
        }
    }
}

pub fn demo() -> Result<Vec<String>, PatternError> {
    Ok([16, 25]
        .into_iter()
        .map(|age| ProxyCar::new(Driver { age }).drive())
        .collect())
}
