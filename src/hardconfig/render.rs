use super::consts::*;
use encoding_rs::WINDOWS_1252;
use std::fmt::Write;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("invalid payload length {len} for {renderer:?} attribute")]
    InvalidPayload { renderer: Renderer, len: usize },
}

/// Text representation of a hard config record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Renderer {
    /// Hex dump, 16 bytes per line.
    RawHex,
    /// MAC address, stored as 8 bytes of which the last 2 are unused.
    Mac,
    /// NUL-terminated string.
    Text,
    /// List of 32-bit integers.
    U32s,
    /// 32-bit hardware option bitmask.
    HwOptions,
}

/// A record published as a named text attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribute {
    pub id: u16,
    pub name: &'static str,
    pub renderer: Renderer,
}

const fn attribute(id: u16, name: &'static str, renderer: Renderer) -> Attribute {
    Attribute { id, name, renderer }
}

pub static ATTRIBUTES: [Attribute; 14] = [
    attribute(ID_FLASH_INFO, "flash_info", Renderer::U32s),
    attribute(ID_MAC_ADDRESS_PACK, "mac_base", Renderer::Mac),
    attribute(ID_BOARD_PRODUCT_CODE, "board_product_code", Renderer::Text),
    attribute(ID_BIOS_VERSION, "booter_version", Renderer::Text),
    attribute(ID_SDRAM_TIMINGS, "sdram_timings", Renderer::RawHex),
    attribute(ID_DEVICE_TIMINGS, "device_timings", Renderer::RawHex),
    attribute(ID_SERIAL_NUMBER, "board_serial", Renderer::Text),
    attribute(ID_MEMORY_SIZE, "mem_size", Renderer::U32s),
    attribute(ID_MAC_ADDRESS_COUNT, "mac_count", Renderer::U32s),
    attribute(ID_HW_OPTIONS, "hw_options", Renderer::HwOptions),
    attribute(ID_BOARD_IDENTIFIER, "board_identifier", Renderer::Text),
    attribute(ID_PRODUCT_NAME, "product_name", Renderer::Text),
    attribute(ID_DEFCONF, "defconf", Renderer::Text),
    attribute(ID_BOARD_REVISION, "board_revision", Renderer::Text),
];

/// Known hardware option bits. Labels are padded with tabs so the values
/// line up.
const HW_OPTIONS: [(u32, &str); 13] = [
    (HW_OPT_NO_UART, "no UART\t\t"),
    (HW_OPT_HAS_VOLTAGE, "has Vreg\t"),
    (HW_OPT_HAS_USB, "has usb\t\t"),
    (HW_OPT_HAS_ATTINY, "has ATtiny\t"),
    (HW_OPT_NO_NAND, "no NAND\t\t"),
    (HW_OPT_HAS_LCD, "has LCD\t\t"),
    (HW_OPT_HAS_POE_OUT, "has POE out\t"),
    (HW_OPT_HAS_USD, "has MicroSD\t"),
    (HW_OPT_HAS_SIM, "has SIM\t\t"),
    (HW_OPT_HAS_SFP, "has SFP\t\t"),
    (HW_OPT_HAS_WIFI, "has WiFi\t"),
    (HW_OPT_HAS_TS_FOR_ADC, "has TS ADC\t"),
    (HW_OPT_HAS_PLC, "has PLC\t\t"),
];

impl Renderer {
    pub fn render(self, payload: &[u8]) -> Result<String, RenderError> {
        let invalid = || RenderError::InvalidPayload {
            renderer: self,
            len: payload.len(),
        };

        let mut out = String::new();
        match self {
            Renderer::RawHex => {
                for line in payload.chunks(16) {
                    let hex: Vec<String> = line.iter().map(|b| format!("{b:02x}")).collect();
                    writeln!(out, "{}", hex.join(" ")).unwrap();
                }
            }
            Renderer::Mac => {
                // network order, the trailing 2 bytes are padding
                let mac: &[u8; 8] = payload.try_into().map_err(|_| invalid())?;
                writeln!(
                    out,
                    "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
                    mac[0], mac[1], mac[2], mac[3], mac[4], mac[5]
                )
                .unwrap();
            }
            Renderer::Text => {
                let end = payload
                    .iter()
                    .position(|&b| b == 0)
                    .unwrap_or(payload.len());
                let (text, _) = WINDOWS_1252.decode_without_bom_handling(&payload[..end]);
                writeln!(out, "{text}").unwrap();
            }
            Renderer::U32s => {
                if payload.is_empty() || payload.len() % 4 != 0 {
                    return Err(invalid());
                }
                for word in payload.chunks_exact(4) {
                    let value = u32::from_le_bytes(word.try_into().unwrap());
                    writeln!(out, "{value:#010x}").unwrap();
                }
            }
            Renderer::HwOptions => {
                let value: [u8; 4] = payload.try_into().map_err(|_| invalid())?;
                let value = u32::from_le_bytes(value);
                writeln!(out, "raw\t\t: {value:#010x}\n").unwrap();
                for (bit, label) in HW_OPTIONS {
                    writeln!(out, "{label}: {}", value & bit != 0).unwrap();
                }
            }
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_debug_snapshot;

    #[test]
    fn rendering_works_for_mac() {
        let payload = [0x48, 0x8f, 0x5a, 0x01, 0x02, 0x03, 0x00, 0x00];
        assert_eq!(Renderer::Mac.render(&payload).unwrap(), "48:8f:5a:01:02:03\n");
    }

    #[test]
    fn rendering_fails_for_short_mac() {
        assert_debug_snapshot!(Renderer::Mac.render(&[0x48, 0x8f, 0x5a, 0x01, 0x02, 0x03]).unwrap_err(), @r###"
        InvalidPayload {
            renderer: Mac,
            len: 6,
        }
        "###);
    }

    #[test]
    fn rendering_works_for_text() {
        assert_eq!(Renderer::Text.render(b"RB951Ui-2HnD\0\0\0\0").unwrap(), "RB951Ui-2HnD\n");
        assert_eq!(Renderer::Text.render(b"r2").unwrap(), "r2\n");
    }

    #[test]
    fn rendering_decodes_non_ascii_text() {
        assert_eq!(Renderer::Text.render(b"caf\xe9\0").unwrap(), "café\n");
    }

    #[test]
    fn rendering_works_for_u32s() {
        let payload = [0x00, 0x00, 0x00, 0x04, 0x02, 0x00, 0x00, 0x00];
        assert_eq!(Renderer::U32s.render(&payload).unwrap(), "0x04000000\n0x00000002\n");
    }

    #[test]
    fn rendering_fails_for_unaligned_u32s() {
        assert_debug_snapshot!(Renderer::U32s.render(&[0x01, 0x00, 0x00]).unwrap_err(), @r###"
        InvalidPayload {
            renderer: U32s,
            len: 3,
        }
        "###);
        assert!(Renderer::U32s.render(&[]).is_err());
    }

    #[test]
    fn rendering_works_for_hw_options() {
        let value = HW_OPT_HAS_USB | HW_OPT_HAS_WIFI | HW_OPT_PULSE_DUTY_CYCLE;
        assert_eq!(
            Renderer::HwOptions.render(&value.to_le_bytes()).unwrap(),
            "raw\t\t: 0x00200204\n\n\
             no UART\t\t: false\n\
             has Vreg\t: false\n\
             has usb\t\t: true\n\
             has ATtiny\t: false\n\
             no NAND\t\t: false\n\
             has LCD\t\t: false\n\
             has POE out\t: false\n\
             has MicroSD\t: false\n\
             has SIM\t\t: false\n\
             has SFP\t\t: false\n\
             has WiFi\t: true\n\
             has TS ADC\t: false\n\
             has PLC\t\t: false\n"
        );
    }

    #[test]
    fn rendering_fails_for_long_hw_options() {
        assert!(Renderer::HwOptions.render(&[0; 8]).is_err());
    }

    #[test]
    fn rendering_works_for_raw_hex() {
        let payload: Vec<u8> = (0..18).collect();
        assert_eq!(
            Renderer::RawHex.render(&payload).unwrap(),
            "00 01 02 03 04 05 06 07 08 09 0a 0b 0c 0d 0e 0f\n10 11\n"
        );
    }

    #[test]
    fn software_id_is_not_published() {
        assert!(ATTRIBUTES.iter().all(|attr| attr.id != ID_SOFTWARE_ID));
        assert!(ATTRIBUTES.iter().any(|attr| attr.name == "sdram_timings"));
        assert!(ATTRIBUTES.iter().any(|attr| attr.name == "device_timings"));
    }

    #[test]
    fn attribute_names_are_unique() {
        for (i, a) in ATTRIBUTES.iter().enumerate() {
            assert!(ATTRIBUTES[i + 1..].iter().all(|b| a.name != b.name && a.id != b.id));
        }
    }
}
