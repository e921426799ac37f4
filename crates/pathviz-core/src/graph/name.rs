//! Derived display names for nodes
//!
//! Names are a pure function of the node id ("A", "B", ..., "Z", "AA",
//! "AB", ...) and are never stored, so a name can never drift from the id
//! it labels.

use crate::graph::model::NodeId;

/// Spreadsheet-style name for a node id: 0 -> "A", 25 -> "Z", 26 -> "AA".
pub fn node_name(id: NodeId) -> String {
    let mut index = id.value() as i64;
    let mut name = String::new();
    loop {
        name.insert(0, (b'A' + (index % 26) as u8) as char);
        index = index / 26 - 1;
        if index < 0 {
            break;
        }
    }
    name
}

/// Resolve a user-supplied node reference: either a decimal id ("13") or a
/// derived name ("n", "AB", case-insensitive). Returns `None` for anything
/// else; existence in a particular graph is the caller's check.
pub fn parse_node_ref(text: &str) -> Option<NodeId> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if text.bytes().all(|b| b.is_ascii_digit()) {
        return text.parse::<u32>().ok().map(NodeId::new);
    }

    if text.bytes().all(|b| b.is_ascii_alphabetic()) {
        // Bijective base-26 decode of the uppercase name
        let mut value: u64 = 0;
        for b in text.to_ascii_uppercase().bytes() {
            value = value * 26 + u64::from(b - b'A') + 1;
            if value > u64::from(u32::MAX) {
                return None;
            }
        }
        return Some(NodeId::new((value - 1) as u32));
    }

    None
}
