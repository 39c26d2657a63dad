use crate::assets::cache::SceneCache;
use crate::assets::import::AssetBackend;
use crate::errors::Result;
use crate::scene::scene::Scene;

/// Animation system.
///
/// Drives every entity carrying an [`Animator`](crate::animation::Animator)
/// once per fixed timestep, strictly before the render phase consumes the
/// skinning palettes. Uses the `std::mem::take` technique to avoid borrow
/// conflicts between the animator map and the node storage.
pub struct AnimationSystem;

impl AnimationSystem {
    /// Updates all animators: lazy first-use load, state-machine tick, then
    /// bone-transform propagation.
    ///
    /// Load failures are authoring-data errors and propagate as fatal.
    pub fn update(
        scene: &mut Scene,
        backend: &dyn AssetBackend,
        cache: &SceneCache,
        dt: f32,
    ) -> Result<()> {
        // Temporarily take the animators out to avoid borrow conflicts
        let mut animators = std::mem::take(&mut scene.animators);

        let mut result = Ok(());
        for (_handle, animator) in &mut animators {
            if let Err(err) = animator.ensure_loaded(backend, cache) {
                result = Err(err);
                break;
            }
            animator.update_state_machine(dt);
            animator.propagate(&mut scene.nodes);
        }

        // Return animators after update
        scene.animators = animators;
        result
    }
}
