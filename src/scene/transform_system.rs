//! Transform pass.
//!
//! Hierarchy matrix update for the scene graph, decoupled from `Scene` to
//! avoid borrow conflicts: it only needs the node storage and the root
//! list. Parents are always updated before their children, so a node's
//! world matrix is `parent_world * local`.

use glam::Affine3A;
use slotmap::SlotMap;

use crate::scene::NodeHandle;
use crate::scene::node::Node;

/// Updates world matrices for every node reachable from `roots`.
///
/// A node recomputes only when its own TRS changed (dirty check in
/// [`Transform::update_local_matrix`](crate::scene::Transform::update_local_matrix))
/// or an ancestor did.
pub fn update_world_transforms(nodes: &mut SlotMap<NodeHandle, Node>, roots: &[NodeHandle]) {
    for &root in roots {
        update_recursive(nodes, root, Affine3A::IDENTITY, false);
    }
}

fn update_recursive(
    nodes: &mut SlotMap<NodeHandle, Node>,
    handle: NodeHandle,
    parent_world: Affine3A,
    parent_changed: bool,
) {
    let (world, changed, children) = {
        let Some(node) = nodes.get_mut(handle) else {
            return;
        };

        let local_changed = node.transform.update_local_matrix();
        let changed = local_changed || parent_changed;
        if changed {
            let world = parent_world * node.transform.local_matrix;
            node.transform.set_world_matrix(world);
        }

        (node.transform.world_matrix, changed, node.children.clone())
    };

    for child in children {
        update_recursive(nodes, child, world, changed);
    }
}
