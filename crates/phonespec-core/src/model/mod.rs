pub mod device;
pub mod spec_value;
pub mod theme;

pub use device::{Brand, Device, DeviceId, DeviceRef};
pub use spec_value::{SpecGroup, SpecPath, SpecValue};
pub use theme::Theme;
