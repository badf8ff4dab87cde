/// `"Hard"`, first word of every hard config segment.
pub const MAGIC_HARD: u32 = u32::from_le_bytes(*b"Hard");
pub const MAGIC_SIZE: usize = 4;

/// Name of the flash partition holding the hard config.
pub const PARTITION_NAME: &str = "hard_config";

pub const ID_FLASH_INFO: u16 = 0x03;
pub const ID_MAC_ADDRESS_PACK: u16 = 0x04;
pub const ID_BOARD_PRODUCT_CODE: u16 = 0x05;
pub const ID_BIOS_VERSION: u16 = 0x06;
pub const ID_SDRAM_TIMINGS: u16 = 0x08;
pub const ID_DEVICE_TIMINGS: u16 = 0x09;
pub const ID_SOFTWARE_ID: u16 = 0x0a;
pub const ID_SERIAL_NUMBER: u16 = 0x0b;
pub const ID_MEMORY_SIZE: u16 = 0x0d;
pub const ID_MAC_ADDRESS_COUNT: u16 = 0x0e;
pub const ID_HW_OPTIONS: u16 = 0x15;
pub const ID_WLAN_DATA: u16 = 0x16;
pub const ID_BOARD_IDENTIFIER: u16 = 0x17;
pub const ID_PRODUCT_NAME: u16 = 0x21;
pub const ID_DEFCONF: u16 = 0x26;
pub const ID_BOARD_REVISION: u16 = 0x27;

pub const HW_OPT_NO_UART: u32 = 1 << 0;
pub const HW_OPT_HAS_VOLTAGE: u32 = 1 << 1;
pub const HW_OPT_HAS_USB: u32 = 1 << 2;
pub const HW_OPT_HAS_ATTINY: u32 = 1 << 3;
pub const HW_OPT_PULSE_DUTY_CYCLE: u32 = 1 << 9;
pub const HW_OPT_NO_NAND: u32 = 1 << 14;
pub const HW_OPT_HAS_LCD: u32 = 1 << 15;
pub const HW_OPT_HAS_POE_OUT: u32 = 1 << 16;
pub const HW_OPT_HAS_USD: u32 = 1 << 17;
pub const HW_OPT_HAS_SIM: u32 = 1 << 18;
pub const HW_OPT_HAS_SFP: u32 = 1 << 20;
pub const HW_OPT_HAS_WIFI: u32 = 1 << 21;
pub const HW_OPT_HAS_TS_FOR_ADC: u32 = 1 << 22;
pub const HW_OPT_HAS_PLC: u32 = 1 << 29;
