use std::hash::BuildHasherDefault;
use indexmap::IndexMap;
use rustc_hash::FxHasher;

pub(crate) use rustc_hash::FxHashSet;


/// Use indexmap for fast lookups and rustc_hash for fast hashing
/// Insertion index doubles as a stable node id during a search
pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;
