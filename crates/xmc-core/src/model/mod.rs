// ── Domain model ──

pub mod device;

pub use device::{DeviceRecord, display_family, display_name};
