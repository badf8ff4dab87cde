//! Decoder for the MikroTik RouterBOARD "hard config" flash segment.
//!
//! The segment starts with the `"Hard"` magic number followed by a list of
//! tag records (see [crate::tag]) describing the board: MAC address, serial
//! number, hardware options, WLAN calibration data and so on. [HardConfig]
//! locates the known records once and renders them on demand.

mod consts;
mod decode;
mod render;

pub use consts::*;
pub use decode::*;
pub use render::*;
