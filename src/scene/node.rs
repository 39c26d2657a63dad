use crate::scene::NodeHandle;
use crate::scene::transform::Transform;
use glam::Affine3A;

/// A minimal scene node: hierarchy links, a transform, and the bone marker.
///
/// Nodes form a tree through parent/child handles. A node with
/// `bone_index = Some(n)` is the scene-side stand-in for palette bone `n`;
/// the animator's bone-entity scan picks these up once per model load and
/// the propagator writes the animated pose back into their transforms.
#[derive(Debug, Clone)]
pub struct Node {
    pub name: String,

    pub(crate) parent: Option<NodeHandle>,
    pub(crate) children: Vec<NodeHandle>,

    /// Transform component (hot data accessed every frame)
    pub transform: Transform,

    /// Marker: this node represents palette bone `n` of its model.
    pub bone_index: Option<usize>,
}

impl Node {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            parent: None,
            children: Vec::new(),
            transform: Transform::new(),
            bone_index: None,
        }
    }

    /// Creates a node carrying the bone marker for palette index `index`.
    #[must_use]
    pub fn bone(name: &str, index: usize) -> Self {
        let mut node = Self::new(name);
        node.bone_index = Some(index);
        node
    }

    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<NodeHandle> {
        self.parent
    }

    #[inline]
    #[must_use]
    pub fn children(&self) -> &[NodeHandle] {
        &self.children
    }

    /// Returns a reference to the world transformation matrix, updated by
    /// the transform pass each frame.
    #[inline]
    #[must_use]
    pub fn world_matrix(&self) -> &Affine3A {
        &self.transform.world_matrix
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new("")
    }
}
