//! Scene graph module.
//!
//! Manages the hierarchy and the components the animation runtime needs:
//! - Node: scene node (parent/child links, transform, bone marker)
//! - Transform: TRS component with matrix cache and dirty tracking
//! - Scene: container with node storage and the animator pool
//! - transform_system: decoupled hierarchy matrix update

pub mod node;
pub mod scene;
pub mod transform;
pub mod transform_system;

pub use node::Node;
pub use scene::Scene;
pub use transform::Transform;

use slotmap::new_key_type;

new_key_type! {
    /// Lightweight, generation-checked handle to a scene node. Non-owning:
    /// stale handles simply fail lookups.
    pub struct NodeHandle;
}
