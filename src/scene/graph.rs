use glam::{Affine3A, Quat, Vec3};

use super::{Transform, TransformId, TransformProvider};

#[derive(Debug, Clone)]
struct Node {
    transform: Transform,
    parent: Option<TransformId>,
}

/// Flat transform hierarchy. Parents are always created before their
/// children, so the parent chain cannot form a cycle.
#[derive(Debug, Clone, Default)]
pub struct SceneGraph {
    nodes: Vec<Node>,
}

impl SceneGraph {
    /// Create an empty scene graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a root transform.
    pub fn spawn(&mut self, transform: Transform) -> TransformId {
        self.push(transform, None)
    }

    /// Add a transform parented to `parent`. Returns `None` if the parent
    /// does not exist.
    pub fn spawn_child(
        &mut self,
        parent: TransformId,
        transform: Transform,
    ) -> Option<TransformId> {
        let _ = self.node(parent)?;
        Some(self.push(transform, Some(parent)))
    }

    fn push(
        &mut self,
        transform: Transform,
        parent: Option<TransformId>,
    ) -> TransformId {
        let id = TransformId(self.nodes.len() as u32);
        self.nodes.push(Node { transform, parent });
        id
    }

    fn node(&self, id: TransformId) -> Option<&Node> {
        self.nodes.get(id.0 as usize)
    }

    /// Local transform of `id`.
    #[must_use]
    pub fn transform(&self, id: TransformId) -> Option<&Transform> {
        self.node(id).map(|n| &n.transform)
    }

    /// Parent of `id`, if it has one.
    #[must_use]
    pub fn parent(&self, id: TransformId) -> Option<TransformId> {
        self.node(id)?.parent
    }

    /// Move a transform relative to its parent.
    pub fn set_translation(&mut self, id: TransformId, translation: Vec3) {
        if let Some(node) = self.nodes.get_mut(id.0 as usize) {
            node.transform.translation = translation;
        }
    }

    /// Local-to-world matrix, composed up the parent chain.
    #[must_use]
    pub fn world_affine(&self, id: TransformId) -> Option<Affine3A> {
        let mut node = self.node(id)?;
        let mut world = node.transform.to_affine();
        while let Some(parent) = node.parent {
            node = self.node(parent)?;
            world = node.transform.to_affine() * world;
        }
        Some(world)
    }

    /// Number of transforms in the graph.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph holds no transforms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl TransformProvider for SceneGraph {
    fn world_position(&self, id: TransformId) -> Option<Vec3> {
        self.world_affine(id)
            .map(|world| world.transform_point3(Vec3::ZERO))
    }

    fn local_rotation(&self, id: TransformId) -> Option<Quat> {
        self.transform(id).map(|t| t.rotation)
    }

    fn set_local_rotation(&mut self, id: TransformId, rotation: Quat) {
        if let Some(node) = self.nodes.get_mut(id.0 as usize) {
            node.transform.rotation = rotation;
        }
    }
}
