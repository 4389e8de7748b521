//! DOM snapshots for elemsim.
//!
//! Loads a document captured through the Chrome DevTools Protocol
//! (`DOM.getDocument` with `depth: -1`) and exposes it as a
//! [`DomHost`](elemsim_protocols::DomHost).
//!
//! ## Snapshot format
//!
//! ```json
//! {
//!   "root": { "nodeId": 1, "backendNodeId": 1, "nodeType": 9, "nodeName": "#document",
//!             "children": [ ... ] },
//!   "layout": { "42": { "width": 800.0, "height": 20.0 } }
//! }
//! ```
//!
//! `root` is the `root` field of the `DOM.getDocument` result. `layout` is
//! optional and maps `backendNodeId` to the `width`/`height` reported by
//! `DOM.getBoxModel`. A bare node object without the `root` wrapper is also
//! accepted.

#![recursion_limit = "256"]

mod document;
mod error;
mod protocol;

pub use document::{NodeId, SnapshotDocument};
pub use error::SnapshotError;
pub use protocol::{node_type, DomNode, Snapshot};
