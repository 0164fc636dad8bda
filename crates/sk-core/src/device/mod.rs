//! Device domain models.

pub mod device;
pub mod draft;
pub mod sale;
pub mod status;

pub use device::{Accessories, CustomerDetails, Device, DeviceDetails, DEVICE_WIRE_KEYS};
pub use draft::{DeviceDraft, DevicePatch};
pub use sale::{PaymentMode, SaleDetails};
pub use status::{DeviceStatus, StatusFilter};
