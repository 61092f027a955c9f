//! File inventory scanning: tree walk, extension maps, manifest detection.

pub mod patterns;
pub mod scanner;

pub use scanner::{InventoryScanner, ScanConfig};
