//! Owned containers backing the aggregation engine
//!
//! - `Sequence<T>`: growable, bounds-checked ordered buffer
//! - `AssocMap<K, V>`: insertion-ordered map with get-or-insert-default access

mod assoc_map;
mod sequence;

pub use assoc_map::*;
pub use sequence::*;
