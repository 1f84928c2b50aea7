/// The runtime value set and its textual inspector.
pub mod core;
/// Canonical hash keys for the values that may index a hash.
pub mod hash_key;

pub use self::core::{Builtin, Function, HashPair, Pointer, Value};
pub use self::hash_key::HashKey;
