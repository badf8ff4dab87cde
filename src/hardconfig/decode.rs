use super::consts::*;
use super::render::{ATTRIBUTES, Attribute, RenderError};
use crate::storage::Storage;
use crate::tag::{self, Tag};
use crate::wlan::{self, ART_SIZE, UnpackError};
use log::{debug, info, warn};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HardConfigError {
    #[error("failed to read {name} partition")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid magic number: {0:02x?}")]
    InvalidMagic([u8; 4]),
    #[error("unknown attribute {0:?}")]
    UnknownAttribute(String),
    #[error("tag {0:#04x} not present")]
    NotFound(u16),
    #[error("tag {id:#04x} payload at {offset} with length {len} exceeds the hard config")]
    OutOfBounds { id: u16, offset: usize, len: usize },
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Unpack(#[from] UnpackError),
}

/// A loaded hard config segment.
///
/// The segment is kept in memory as-is, records are only located at load
/// time and decoded on demand.
#[derive(Debug)]
pub struct HardConfig {
    data: Vec<u8>,
    /// Known records present in `data`, offsets relative to its start.
    records: BTreeMap<u16, Tag>,
}

impl HardConfig {
    /// Reads the partition `name` from `storage` and parses it.
    pub fn load<S: Storage + ?Sized>(storage: &S, name: &str) -> Result<Self, HardConfigError> {
        let data = storage
            .read_all(name)
            .map_err(|source| HardConfigError::Io {
                name: name.to_string(),
                source,
            })?;

        Self::from_bytes(data)
    }

    pub fn from_bytes(data: Vec<u8>) -> Result<Self, HardConfigError> {
        // images shorter than the magic are reported zero-padded
        let mut magic = [0; MAGIC_SIZE];
        let available = data.len().min(MAGIC_SIZE);
        magic[..available].copy_from_slice(&data[..available]);
        if u32::from_le_bytes(magic) != MAGIC_HARD {
            return Err(HardConfigError::InvalidMagic(magic));
        }

        let region = &data[MAGIC_SIZE..];
        let ids = ATTRIBUTES.iter().map(|attr| attr.id).chain([ID_WLAN_DATA]);

        let mut records = BTreeMap::new();
        for id in ids {
            let Ok(tag) = tag::find(region, id) else {
                continue;
            };
            if tag.len == 0 {
                debug!("tag {id:#04x} is empty");
                continue;
            }

            let tag = Tag {
                offset: tag.offset + MAGIC_SIZE,
                ..tag
            };
            if tag.payload(&data).is_none() {
                warn!(
                    "tag {id:#04x} length {} exceeds hard config of {} bytes",
                    tag.len,
                    data.len()
                );
            }
            records.insert(id, tag);
        }

        info!(
            "RouterBOARD hard config: {} bytes, {} known records",
            data.len(),
            records.len()
        );

        Ok(Self { data, records })
    }

    /// The raw segment, including the leading magic number.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Returns the location of a known record, if present.
    pub fn record(&self, id: u16) -> Option<Tag> {
        self.records.get(&id).copied()
    }

    /// Returns the payload of a known record.
    pub fn payload(&self, id: u16) -> Result<&[u8], HardConfigError> {
        let tag = self.record(id).ok_or(HardConfigError::NotFound(id))?;
        tag.payload(&self.data).ok_or(HardConfigError::OutOfBounds {
            id,
            offset: tag.offset,
            len: tag.len,
        })
    }

    /// Iterates over the text attributes whose record is present.
    pub fn attributes(&self) -> impl Iterator<Item = &'static Attribute> + '_ {
        ATTRIBUTES
            .iter()
            .filter(|attr| self.records.contains_key(&attr.id))
    }

    /// Renders the text attribute of record `id`.
    pub fn render(&self, id: u16) -> Result<String, HardConfigError> {
        let attr = ATTRIBUTES
            .iter()
            .find(|attr| attr.id == id)
            .ok_or_else(|| HardConfigError::UnknownAttribute(format!("{id:#04x}")))?;

        self.render_with(attr)
    }

    /// Renders a text attribute by name, e.g. `"board_serial"`.
    pub fn render_attribute(&self, name: &str) -> Result<String, HardConfigError> {
        let attr = ATTRIBUTES
            .iter()
            .find(|attr| attr.name == name)
            .ok_or_else(|| HardConfigError::UnknownAttribute(name.to_string()))?;

        self.render_with(attr)
    }

    fn render_with(&self, attr: &Attribute) -> Result<String, HardConfigError> {
        let payload = self.payload(attr.id)?;
        Ok(attr.renderer.render(payload)?)
    }

    pub fn has_wlan_data(&self) -> bool {
        self.records.contains_key(&ID_WLAN_DATA)
    }

    /// Decodes the WLAN calibration data.
    ///
    /// The data is decoded from scratch on every call: it is rarely needed,
    /// mostly once at boot, and not worth holding on to.
    pub fn wlan_data(&self) -> Result<Vec<u8>, HardConfigError> {
        let tag = self
            .record(ID_WLAN_DATA)
            .ok_or(HardConfigError::NotFound(ID_WLAN_DATA))?;

        Ok(wlan::unpack(&self.data, tag.offset, tag.len, ART_SIZE)?)
    }

    /// Reads decoded WLAN calibration data starting at `offset` into `buf`,
    /// returning the number of bytes read. Reads at or past the end of the
    /// data return 0.
    pub fn read_wlan_data(&self, offset: usize, buf: &mut [u8]) -> Result<usize, HardConfigError> {
        let data = self.wlan_data()?;

        let Some(rest) = data.get(offset..) else {
            return Ok(0);
        };
        let count = rest.len().min(buf.len());
        buf[..count].copy_from_slice(&rest[..count]);
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_debug_snapshot;

    fn make_hard_config(records: &[(u16, &[u8])]) -> Vec<u8> {
        let mut data = b"Hard".to_vec();
        data.extend_from_slice(&tag::encode(records));
        data
    }

    const WLAN_RLE: [u8; 5] = [0x04, 0xaa, 0xfe, 0x01, 0x02];

    fn sample() -> HardConfig {
        let data = make_hard_config(&[
            (ID_BOARD_PRODUCT_CODE, b"RB951Ui-2HnD\0"),
            (ID_MAC_ADDRESS_PACK, &[0x4c, 0x5e, 0x0c, 0x11, 0x22, 0x33, 0, 0]),
            (ID_MEMORY_SIZE, &0x0400_0000u32.to_le_bytes()),
            (ID_WLAN_DATA, &WLAN_RLE),
            (ID_SERIAL_NUMBER, b"4C1A0123ABCD\0"),
        ]);
        HardConfig::from_bytes(data).unwrap()
    }

    #[test]
    fn loading_fails_for_empty_file() {
        assert_debug_snapshot!(HardConfig::from_bytes(vec![]).unwrap_err(), @r###"
        InvalidMagic(
            [
                0,
                0,
                0,
                0,
            ],
        )
        "###);
    }

    #[test]
    fn loading_fails_for_truncated_magic() {
        assert!(matches!(
            HardConfig::from_bytes(b"Har".to_vec()),
            Err(HardConfigError::InvalidMagic([b'H', b'a', b'r', 0]))
        ));
    }

    #[test]
    fn loading_fails_for_invalid_magic() {
        let mut data = b"Soft".to_vec();
        data.extend_from_slice(&tag::encode(&[(ID_BOARD_PRODUCT_CODE, b"RB951\0")]));
        assert_debug_snapshot!(HardConfig::from_bytes(data).unwrap_err(), @r###"
        InvalidMagic(
            [
                83,
                111,
                102,
                116,
            ],
        )
        "###);
    }

    #[test]
    fn loading_fails_for_storage_error() {
        let storage = |_: &str| -> std::io::Result<Vec<u8>> {
            Err(std::io::Error::from(std::io::ErrorKind::NotFound))
        };
        let err = HardConfig::load(&storage, PARTITION_NAME).unwrap_err();
        assert!(matches!(err, HardConfigError::Io { ref name, .. } if name == "hard_config"));
    }

    #[test]
    fn loading_works_for_storage() {
        let data = make_hard_config(&[(ID_PRODUCT_NAME, b"hAP ac lite\0")]);
        let storage = move |name: &str| -> std::io::Result<Vec<u8>> {
            assert_eq!(name, PARTITION_NAME);
            Ok(data.clone())
        };
        let config = HardConfig::load(&storage, PARTITION_NAME).unwrap();
        assert_eq!(config.render(ID_PRODUCT_NAME).unwrap(), "hAP ac lite\n");
    }

    #[test]
    fn loading_locates_records_past_magic() {
        let config = sample();
        assert_debug_snapshot!(config.record(ID_BOARD_PRODUCT_CODE).unwrap(), @r###"
        Tag {
            id: 5,
            offset: 8,
            len: 13,
        }
        "###);
        assert_eq!(config.payload(ID_BOARD_PRODUCT_CODE).unwrap(), b"RB951Ui-2HnD\0");
    }

    #[test]
    fn listing_attributes_skips_absent_records() {
        let config = sample();
        let names: Vec<&str> = config.attributes().map(|attr| attr.name).collect();
        assert_eq!(names, vec!["mac_base", "board_product_code", "board_serial", "mem_size"]);
    }

    #[test]
    fn rendering_works_for_present_records() {
        let config = sample();
        assert_eq!(config.render(ID_MAC_ADDRESS_PACK).unwrap(), "4c:5e:0c:11:22:33\n");
        assert_eq!(config.render_attribute("board_serial").unwrap(), "4C1A0123ABCD\n");
        assert_eq!(config.render_attribute("mem_size").unwrap(), "0x04000000\n");
    }

    #[test]
    fn rendering_fails_for_absent_record() {
        let config = sample();
        assert_debug_snapshot!(config.render_attribute("hw_options").unwrap_err(), @r###"
        NotFound(
            21,
        )
        "###);
    }

    #[test]
    fn rendering_fails_for_unknown_attribute() {
        let config = sample();
        assert_debug_snapshot!(config.render_attribute("wlan_data").unwrap_err(), @r###"
        UnknownAttribute(
            "wlan_data",
        )
        "###);
    }

    #[test]
    fn rendering_fails_for_malformed_payload() {
        let data = make_hard_config(&[(ID_MAC_ADDRESS_PACK, &[0x4c, 0x5e, 0x0c])]);
        let config = HardConfig::from_bytes(data).unwrap();
        assert_debug_snapshot!(config.render(ID_MAC_ADDRESS_PACK).unwrap_err(), @r###"
        Render(
            InvalidPayload {
                renderer: Mac,
                len: 3,
            },
        )
        "###);
    }

    #[test]
    fn rendering_fails_for_truncated_record() {
        let mut data = b"Hard".to_vec();
        data.extend_from_slice(&0x0020_0021u32.to_le_bytes());
        data.extend_from_slice(b"hAP\0");
        let config = HardConfig::from_bytes(data).unwrap();
        assert_debug_snapshot!(config.render(ID_PRODUCT_NAME).unwrap_err(), @r###"
        OutOfBounds {
            id: 33,
            offset: 8,
            len: 32,
        }
        "###);
    }

    #[test]
    fn decoding_works_for_wlan_data() {
        let config = sample();
        assert!(config.has_wlan_data());
        assert_eq!(config.wlan_data().unwrap(), [0xaa, 0xaa, 0xaa, 0xaa, 0x01, 0x02]);
    }

    #[test]
    fn decoding_fails_for_empty_wlan_data() {
        let data = make_hard_config(&[(ID_WLAN_DATA, b""), (ID_PRODUCT_NAME, b"hAP\0")]);
        let config = HardConfig::from_bytes(data).unwrap();
        assert!(!config.has_wlan_data());
        assert_debug_snapshot!(config.wlan_data().unwrap_err(), @r###"
        NotFound(
            22,
        )
        "###);
        assert_eq!(config.render(ID_PRODUCT_NAME).unwrap(), "hAP\n");
    }

    #[test]
    fn decoding_fails_for_corrupt_wlan_data() {
        let data = make_hard_config(&[(ID_WLAN_DATA, &[0x7f])]);
        let config = HardConfig::from_bytes(data).unwrap();
        assert_debug_snapshot!(config.wlan_data().unwrap_err(), @r###"
        Unpack(
            Rle(
                TooShort(
                    1,
                ),
            ),
        )
        "###);
    }

    #[test]
    fn decoding_fails_for_oversized_lzor_wlan_data() {
        let mut record = b"LZOR".to_vec();
        record.resize(0xfffc, 0);
        let data = make_hard_config(&[(ID_WLAN_DATA, &record)]);
        let config = HardConfig::from_bytes(data).unwrap();
        assert_debug_snapshot!(config.wlan_data().unwrap_err(), @r###"
        Unpack(
            BufferTooLarge {
                len: 66908,
                capacity: 65536,
            },
        )
        "###);
    }

    #[test]
    fn reading_wlan_data_at_offsets() {
        let config = sample();
        let mut buf = [0u8; 4];
        assert_eq!(config.read_wlan_data(0, &mut buf).unwrap(), 4);
        assert_eq!(buf, [0xaa; 4]);
        assert_eq!(config.read_wlan_data(3, &mut buf).unwrap(), 3);
        assert_eq!(buf[..3], [0xaa, 0x01, 0x02]);
        assert_eq!(config.read_wlan_data(6, &mut buf).unwrap(), 0);
        assert_eq!(config.read_wlan_data(100, &mut buf).unwrap(), 0);
    }
}
