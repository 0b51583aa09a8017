//! # Zero-Divisor Catalog
//!
//! Catalog the zero-divisor structure of the modular integer rings `Z_n`.
//!
//! For each `n >= 2` we compute two graphs on the nonzero elements of `Z_n`:
//!
//! - the *zero-divisor graph*, with an edge `x — y` whenever `x·y ≡ 0 (mod n)`
//! - the *exact zero-divisor graph*, with an edge `x — y` whenever both
//!   `ann(x) = ann(ann(y))` and `ann(y) = ann(ann(x))`
//!
//! where `ann(x) = { y : x·y ≡ 0 }` and `ann(S)` is the intersection of `ann(x)` over `x ∈ S`.
//!
//! Every connected component of the exact graph is then classified as a clique `K_p` or a
//! complete bipartite graph `K_{p,q}`, giving a canonical description such as `"4,(1,2),(2,8)"`.
//!
//! The computation is a pipeline of pure functions, one module per stage:
//!
//! ```text
//!   ring ─→ annihilator ─→ closure ─→ graph ─→ component ─→ catalog
//! ```
//!
//! # Example
//!
//! ```rust
//! use zero_divisor_catalog::prelude::*;
//!
//! let entry = compute_catalog_entry(10).unwrap();
//! assert_eq!(entry.description, "(1,4)");
//! assert_eq!(entry.components.as_slice(), &[Component::bipartite(1, 4)]);
//!
//! // Descriptions parse back to the same components
//! let parsed: ComponentList = entry.description.parse().unwrap();
//! assert_eq!(parsed, entry.components);
//! ```
//!
//! Batches of entries are computed in parallel with [`catalog::build_catalog`], and can be
//! searched with [`catalog::ComponentQuery`].

pub mod error;
pub mod ring;

pub mod annihilator;
pub mod closure;
pub mod graph;

pub mod component;
pub mod union_find;

pub mod catalog;
pub mod store;

pub mod prelude {
    //! The types and functions needed to compute and search catalog entries.
    pub use crate::catalog::{
        build_catalog, compute_catalog_entry, compute_catalog_entry_with, Catalog, CatalogEntry,
        CatalogOptions, ComponentQuery,
    };
    pub use crate::component::{Component, ComponentKind, ComponentList};
    pub use crate::error::{CatalogError, Result};
    pub use crate::graph::{Edge, Graph};
    pub use crate::ring::Ring;
    pub use crate::store::{CatalogStore, MemoryStore};
}
