use hex;
use tiny_keccak::Keccak;

pub fn keccak256(i: &[u8]) -> Vec<u8> {
    let mut o = vec![0u8; 32];
    Keccak::keccak256(i, &mut o);
    return o;
}

pub fn label_hash(label: &str) -> Vec<u8> {
    keccak256(label.as_bytes())
}

/// One derivation step: child node from parent node + label hash.
pub fn subnode(node: &[u8], label_hash: &[u8]) -> Vec<u8> {
    keccak256(&[node, label_hash].concat())
}

pub fn token_id_from_label(label_hash: &Vec<u8>) -> String {
    hex::encode(label_hash)
}

/// Recursive bottom-up hash of a dotted name. The empty name is the
/// 32-zero-byte root node.
pub fn namehash(name: &str) -> Vec<u8> {
    let mut node = vec![0u8; 32];
    if name.is_empty() {
        return node;
    }
    let mut labels: Vec<&str> = name.split(".").collect();
    labels.reverse();
    for label in labels.iter() {
        node = subnode(&node, &label_hash(label));
    }
    node
}

pub fn node_to_hex(node: &[u8]) -> String {
    hex::encode(node)
}
