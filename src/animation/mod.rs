pub mod animator;
pub mod channel;
pub mod clip;
pub mod propagate;
pub mod state_machine;
pub mod system;
pub mod tracks;
pub mod values;

pub use animator::Animator;
pub use channel::BoneChannel;
pub use clip::{AnimationClip, BoneOffset, HierarchyNode, SkinBoneMap};
pub use propagate::propagate_bone_transforms;
pub use state_machine::{Comparator, Condition, Operand, State, StateMachineDoc, Transition};
pub use system::AnimationSystem;
pub use tracks::KeyframeTrack;
pub use values::Interpolatable;

/// Clips are keyed by the GUID of the animation file they came from.
pub type ClipId = uuid::Uuid;

/// Fixed capacity of the skinning matrix palette uploaded to the GPU.
/// Unused slots always hold identity.
pub const MAX_BONES: usize = 100;
