//! The node composition pipeline.
//!
//! Composition turns each simple node of a graph into a group of SVG
//! elements sized to its content:
//!
//! 1. the label is composed and measured,
//! 2. sub-elements are stacked below it,
//! 3. a decoration badge adds its height,
//! 4. size overrides replace the running size and padding is added,
//! 5. every part is offset inside the final box,
//! 6. the shape renderer draws around the box and its measured size is
//!    written back onto the node.
//!
//! The geometry of steps 1-5 lives in [`NodeLayout::compute`], a pure
//! function over part sizes. [`NodePipeline`] drives the whole pass against
//! a [`Scene`](crate::scene::Scene).

mod label;
mod layout;
mod pipeline;

pub use label::{Composed, LabelComposer, ListSubnodeComposer, SubnodeComposer, TextLabelComposer};
pub use layout::{LayoutInput, NodeLayout};
pub use pipeline::{NodePipeline, PassReport};
