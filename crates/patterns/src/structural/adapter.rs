//! Adapter: expose devices with different charging ports through one interface

use crate::error::PatternError;

/// Target interface clients charge through
pub trait Rechargeable {
    fn recharge(&self) -> String;
}

/// Adaptee with a lightning port
#[derive(Debug, Default)]
pub struct IPhone;

impl IPhone {
    pub fn use_lightning(&self) -> String {
        "use lightning".to_string()
    }
}

/// Adaptee with a micro USB port
#[derive(Debug, Default)]
pub struct Android;

impl Android {
    pub fn use_micro_usb(&self) -> String {
        "use micro usb".to_string()
    }
}

#[derive(Debug, Default)]
pub struct LightningAdapter {
    phone: IPhone,
}

impl LightningAdapter {
    pub fn new(phone: IPhone) -> Self {
        Self { phone }
    }
}

impl Rechargeable for LightningAdapter {
    fn recharge(&self) -> String {
        self.phone.use_lightning()
    }
}

#[derive(Debug, Default)]
pub struct MicroUsbAdapter {
    phone: Android,
}

impl MicroUsbAdapter {
    pub fn new(phone: Android) -> Self {
        Self { phone }
    }
}

impl Rechargeable for MicroUsbAdapter {
    fn recharge(&self) -> String {
        self.phone.use_micro_usb()
    }
}

pub fn demo() -> Result<Vec<String>, PatternError> {
    let chargers: [Box<dyn Rechargeable>; 2] = [
        Box::new(LightningAdapter::new(IPhone)),
        Box::new(MicroUsbAdapter::new(Android)),
    ];
    Ok(chargers.iter().map(|charger| charger.recharge()).collect())
}
