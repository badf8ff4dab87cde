//! RouterBOOT tag node scanner.
//!
//! A tag region is a flat list of records. Every record starts with a 32-bit
//! little-endian node holding the record id in its low half and the payload
//! length in its high half, followed by the payload itself. Records are
//! 32-bit aligned and the list ends at a null node or at the end of the
//! region, whichever comes first.

use thiserror::Error;

pub const NODE_SIZE: usize = 4;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagError {
    #[error("tag id 0 is reserved for the list terminator")]
    InvalidId,
    #[error("tag {0:#04x} not found")]
    NotFound(u16),
}

/// Location of a tag payload, relative to the start of the scanned region.
///
/// The length is reported as declared by the tag node and is not checked
/// against the region, see [Tag::payload].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag {
    pub id: u16,
    pub offset: usize,
    pub len: usize,
}

impl Tag {
    /// End of the payload, or `None` if it overflows.
    pub fn end(&self) -> Option<usize> {
        self.offset.checked_add(self.len)
    }

    /// Returns the payload bytes, or `None` if the declared length runs past
    /// the end of `region`.
    pub fn payload<'a>(&self, region: &'a [u8]) -> Option<&'a [u8]> {
        region.get(self.offset..self.end()?)
    }
}

/// Finds the first tag with the given id in `region`.
pub fn find(region: &[u8], id: u16) -> Result<Tag, TagError> {
    if id == 0 {
        return Err(TagError::InvalidId);
    }

    tags(region)
        .find(|tag| tag.id == id)
        .ok_or(TagError::NotFound(id))
}

/// Iterates over all tags of `region` in storage order.
pub fn tags(region: &[u8]) -> Tags<'_> {
    Tags { region, pos: 0 }
}

#[derive(Debug, Clone)]
pub struct Tags<'a> {
    region: &'a [u8],
    pos: usize,
}

impl Iterator for Tags<'_> {
    type Item = Tag;

    fn next(&mut self) -> Option<Tag> {
        let node_end = self.pos.checked_add(NODE_SIZE)?;
        let node = self.region.get(self.pos..node_end)?;
        let node = u32::from_le_bytes(node.try_into().unwrap());

        // null node terminates the list
        if node == 0 {
            self.pos = self.region.len();
            return None;
        }

        let id = (node & 0xffff) as u16;
        let len = (node >> 16) as usize;

        // a node with nothing behind it can't carry a payload
        if node_end >= self.region.len() {
            self.pos = self.region.len();
            return None;
        }

        // payload lengths are not necessarily aligned, the next node is
        self.pos = node_end + len.next_multiple_of(NODE_SIZE);

        Some(Tag {
            id,
            offset: node_end,
            len,
        })
    }
}

#[cfg(test)]
pub(crate) fn encode(records: &[(u16, &[u8])]) -> Vec<u8> {
    let mut data = Vec::new();
    for (id, payload) in records {
        let node = u32::from(*id) | ((payload.len() as u32) << 16);
        data.extend_from_slice(&node.to_le_bytes());
        data.extend_from_slice(payload);
        data.resize(data.len().next_multiple_of(NODE_SIZE), 0);
    }
    data
}
