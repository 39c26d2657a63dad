use rustc_hash::FxHashMap;
use slotmap::{SecondaryMap, SlotMap};

use crate::animation::animator::Animator;
use crate::scene::NodeHandle;
use crate::scene::node::Node;
use crate::scene::transform_system;

/// Scene graph container.
///
/// Pure data layer: node storage, the root list, and per-node components.
/// The animation system borrows `nodes` and `animators` separately, which
/// is why both are public fields rather than hidden behind accessors.
#[derive(Default)]
pub struct Scene {
    pub nodes: SlotMap<NodeHandle, Node>,
    pub roots: Vec<NodeHandle>,

    // ==== Component pools ====
    pub animators: SecondaryMap<NodeHandle, Animator>,
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `node` as a scene root.
    pub fn add_root(&mut self, node: Node) -> NodeHandle {
        let handle = self.nodes.insert(node);
        self.roots.push(handle);
        handle
    }

    /// Inserts `node` and attaches it under `parent`, keeping both sides of
    /// the relation in sync.
    pub fn add_child(&mut self, parent: NodeHandle, node: Node) -> NodeHandle {
        let handle = self.nodes.insert(node);
        self.attach(parent, handle);
        handle
    }

    /// Links an existing node under `parent`.
    pub fn attach(&mut self, parent: NodeHandle, child: NodeHandle) {
        if let Some(child_node) = self.nodes.get_mut(child) {
            child_node.parent = Some(parent);
        }
        if let Some(parent_node) = self.nodes.get_mut(parent) {
            parent_node.children.push(child);
        }
    }

    #[must_use]
    pub fn get_node(&self, handle: NodeHandle) -> Option<&Node> {
        self.nodes.get(handle)
    }

    pub fn get_node_mut(&mut self, handle: NodeHandle) -> Option<&mut Node> {
        self.nodes.get_mut(handle)
    }

    /// Recursively scans the subtree under `root` for bone-marker nodes,
    /// producing the palette-index → node lookup an animator binds to.
    /// Runs once per model load.
    #[must_use]
    pub fn collect_bone_entities(&self, root: NodeHandle) -> FxHashMap<usize, NodeHandle> {
        let mut lookup = FxHashMap::default();
        self.collect_bones_recursive(root, &mut lookup);
        lookup
    }

    fn collect_bones_recursive(&self, handle: NodeHandle, lookup: &mut FxHashMap<usize, NodeHandle>) {
        let Some(node) = self.nodes.get(handle) else {
            return;
        };
        if let Some(index) = node.bone_index {
            lookup.insert(index, handle);
        }
        for &child in &node.children {
            self.collect_bones_recursive(child, lookup);
        }
    }

    /// Runs the transform pass over the whole graph.
    pub fn update_world_transforms(&mut self) {
        transform_system::update_world_transforms(&mut self.nodes, &self.roots);
    }
}
