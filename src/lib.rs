//! Marrow — skeletal animation runtime.
//!
//! An entity-level animation subsystem for a scene-graph engine: animation
//! clips imported from model files, a per-entity finite-state machine that
//! selects and switches clips over named integer variables, and a
//! hierarchical bone-transform pass producing both a GPU skinning palette
//! and per-node transforms for physics and gameplay to read.
//!
//! The renderer, physics, scripting, and the model importer itself are
//! collaborators behind narrow interfaces (see [`assets::AssetBackend`]);
//! this crate owns the data model and the per-tick algorithms.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::too_many_arguments)]

pub mod animation;
pub mod assets;
pub mod errors;
pub mod scene;

pub use animation::{
    AnimationClip, AnimationSystem, Animator, BoneChannel, ClipId, HierarchyNode, KeyframeTrack,
    MAX_BONES, SkinBoneMap, StateMachineDoc,
};
pub use assets::{AssetBackend, ImportedScene, SceneCache};
pub use errors::{MarrowError, Result};
pub use scene::{Node, NodeHandle, Scene, Transform};
