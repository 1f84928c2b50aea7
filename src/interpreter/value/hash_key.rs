use crate::interpreter::value::core::Value;

/// The canonical key derived from a hashable value: the value's type tag
/// plus a 64-bit digest. Two values collide exactly when they are the same
/// hashable value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HashKey {
    /// Type tag of the source value.
    pub kind: &'static str,
    /// Integer: the bit pattern. Boolean: 1 or 0. String: FNV-1a over the
    /// bytes.
    pub digest: u64,
}

impl Value {
    /// Derives the hash key for this value, or `None` when the value is not
    /// hashable. Only integers, booleans and strings are hashable.
    pub fn hash_key(&self) -> Option<HashKey> {
        let digest = match self {
            Value::Integer(value) => *value as u64,
            Value::Boolean(value) => u64::from(*value),
            Value::Str(value) => fnv1a(value.as_bytes()),
            _ => return None,
        };

        Some(HashKey {
            kind: self.type_name(),
            digest,
        })
    }
}

/// 64-bit FNV-1a over a byte slice.
fn fnv1a(bytes: &[u8]) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    let mut hash = OFFSET_BASIS;
    for byte in bytes {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(PRIME);
    }
    hash
}
