// crates/geoip-core/src/builder/tree.rs

//! Binary search tree over address bits, serialized as fixed-size node records.

use crate::error::{GeoIpError, Result};
use crate::loader::DATA_SECTION_SEPARATOR_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Empty,
    Node(usize),
    /// Offset into the data section, and the prefix length that put it there.
    Data { offset: usize, prefix_len: u32 },
}

#[derive(Debug, Clone)]
pub(crate) struct SearchTree {
    nodes: Vec<[Slot; 2]>,
}

impl SearchTree {
    pub(crate) fn new() -> Self {
        SearchTree {
            nodes: vec![[Slot::Empty; 2]],
        }
    }

    pub(crate) fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Maps the first `prefix_len` bits of `key` (a `key_bits` wide address)
    /// to `offset`. More specific networks win; equal ones are replaced.
    pub(crate) fn insert(&mut self, key: u128, key_bits: u32, prefix_len: u32, offset: usize) {
        debug_assert!(prefix_len >= 1 && prefix_len <= key_bits);
        let data = Slot::Data { offset, prefix_len };
        let mut node = 0;

        for depth in 0..prefix_len {
            let bit = ((key >> (key_bits - 1 - depth)) & 1) as usize;
            let slot = self.nodes[node][bit];

            if depth + 1 == prefix_len {
                match slot {
                    Slot::Node(child) => self.fill(child, offset, prefix_len),
                    Slot::Data { prefix_len: old, .. } if old > prefix_len => {}
                    _ => self.nodes[node][bit] = data,
                }
                return;
            }

            node = match slot {
                Slot::Node(child) => child,
                Slot::Empty | Slot::Data { .. } => {
                    // A covering network is pushed down into both halves.
                    let child = self.nodes.len();
                    self.nodes.push([slot; 2]);
                    self.nodes[node][bit] = Slot::Node(child);
                    child
                }
            };
        }
    }

    /// Writes `offset` into every slot below `node` that holds nothing more specific.
    fn fill(&mut self, node: usize, offset: usize, prefix_len: u32) {
        let mut stack = vec![node];
        while let Some(n) = stack.pop() {
            for bit in 0..2 {
                match self.nodes[n][bit] {
                    Slot::Node(child) => stack.push(child),
                    Slot::Data { prefix_len: old, .. } if old > prefix_len => {}
                    _ => self.nodes[n][bit] = Slot::Data { offset, prefix_len },
                }
            }
        }
    }

    /// Serializes the tree for a data section of `data_len` bytes.
    pub(crate) fn to_bytes(&self, record_size: u16, data_len: usize) -> Result<Vec<u8>> {
        let node_count = self.nodes.len();
        let max_record = node_count + DATA_SECTION_SEPARATOR_SIZE + data_len;
        if max_record as u64 >= 1u64 << record_size {
            return Err(GeoIpError::Build(format!(
                "{node_count} nodes and {data_len} data bytes do not fit {record_size}-bit records"
            )));
        }

        let record = |slot: Slot| -> u32 {
            let value = match slot {
                Slot::Empty => node_count,
                Slot::Node(child) => child,
                Slot::Data { offset, .. } => node_count + DATA_SECTION_SEPARATOR_SIZE + offset,
            };
            value as u32
        };

        let mut out = Vec::with_capacity(node_count * record_size as usize / 4);
        for [left, right] in &self.nodes {
            let (l, r) = (record(*left), record(*right));
            match record_size {
                24 => {
                    out.extend_from_slice(&l.to_be_bytes()[1..]);
                    out.extend_from_slice(&r.to_be_bytes()[1..]);
                }
                28 => {
                    out.extend_from_slice(&l.to_be_bytes()[1..]);
                    out.push((((l >> 24) & 0x0F) << 4) as u8 | ((r >> 24) & 0x0F) as u8);
                    out.extend_from_slice(&r.to_be_bytes()[1..]);
                }
                32 => {
                    out.extend_from_slice(&l.to_be_bytes());
                    out.extend_from_slice(&r.to_be_bytes());
                }
                other => {
                    return Err(GeoIpError::Build(format!("unsupported record size {other}")));
                }
            }
        }
        Ok(out)
    }
}
