//! Trie encoding of ordered numeric values.
//!
//! Values are mapped onto the unsigned line with [`sortable`], written as
//! order-preserving terms at a chosen precision with [`prefix_coded`], and
//! expanded into one term per precision level with [`ladder`].

pub mod config;
pub mod ladder;
pub mod prefix_coded;
pub mod sortable;

pub use config::{DEFAULT_PRECISION_STEP, NumericConfig};
pub use ladder::{LadderIter, ladder, ladder_len, ladder_with_config, ladder_with_max_shift};
pub use prefix_coded::{PrefixCoded, decode, encode, must_encode};
pub use sortable::{from_sortable, to_sortable};
