//! Decoder for the MikroTik RouterBOARD "hard config" flash segment.
//!
//! The [HardConfig] type loads the segment, publishes its known records as
//! text attributes and recovers the board's WLAN calibration data, which
//! may be RLE-encoded, LZO-compressed, or both (see [wlan]).
//!
//! ```no_run
//! use rb_hardconfig::HardConfig;
//! use rb_hardconfig::hardconfig::PARTITION_NAME;
//! use rb_hardconfig::storage::DirStorage;
//!
//! let storage = DirStorage::new("/tmp/mtd");
//! let config = HardConfig::load(&storage, PARTITION_NAME).unwrap();
//! print!("{}", config.render_attribute("board_serial").unwrap());
//! let calibration = config.wlan_data().unwrap();
//! ```

pub mod hardconfig;
pub mod lzo;
pub mod rle;
pub mod storage;
pub mod tag;
pub mod wlan;

pub use hardconfig::{HardConfig, HardConfigError};
