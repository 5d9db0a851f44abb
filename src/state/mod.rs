//! Domain state types.

mod bicycle;
mod toast;

pub use bicycle::{BicycleRecord, BicycleType, UnknownBicycleType};
pub use toast::{Toast, ToastType};
