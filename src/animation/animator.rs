use glam::Mat4;
use rustc_hash::FxHashMap;
use slotmap::SlotMap;
use uuid::Uuid;

use crate::animation::clip::{AnimationClip, SkinBoneMap};
use crate::animation::propagate::propagate_bone_transforms;
use crate::animation::state_machine::{State, StateMachineDoc, Transition};
use crate::animation::{ClipId, MAX_BONES};
use crate::assets::cache::SceneCache;
use crate::assets::import::AssetBackend;
use crate::errors::{MarrowError, Result};
use crate::scene::node::Node;
use crate::scene::NodeHandle;

/// The per-entity animation component.
///
/// Owns the loaded clips of its state machine, the playback cursor, the
/// declarative state-machine data, and the skinning palette the renderer
/// consumes. Bone entities are referenced by handle only; the component
/// never owns them.
///
/// Clips and the state-machine document are loaded lazily on the first tick
/// ([`Animator::ensure_loaded`]), deferring file I/O out of construction.
pub struct Animator {
    /// GUID of the state-machine definition file.
    pub source_guid: Uuid,

    clips: FxHashMap<ClipId, AnimationClip>,
    active_clip: Option<ClipId>,

    /// Playback cursor in clip-local ticks, kept in `[0, duration_ticks)`.
    pub cursor_ticks: f32,
    /// How many times the active clip has wrapped since it was activated.
    pub times_completed: u32,

    palette: Vec<Mat4>,

    states: Vec<State>,
    transitions: Vec<Transition>,
    variable_names: Vec<String>,
    variable_values: Vec<i32>,
    current_state: Option<usize>,

    bone_entities: FxHashMap<usize, NodeHandle>,
    mesh_bones: SkinBoneMap,
    loaded: bool,
}

impl Animator {
    /// Creates an unloaded animator for the state machine behind
    /// `source_guid`, bound to the mesh's existing bone map.
    #[must_use]
    pub fn new(source_guid: Uuid, mesh_bones: SkinBoneMap) -> Self {
        Self {
            source_guid,
            clips: FxHashMap::default(),
            active_clip: None,
            cursor_ticks: 0.0,
            times_completed: 0,
            palette: vec![Mat4::IDENTITY; MAX_BONES],
            states: Vec::new(),
            transitions: Vec::new(),
            variable_names: Vec::new(),
            variable_values: Vec::new(),
            current_state: None,
            bone_entities: FxHashMap::default(),
            mesh_bones,
            loaded: false,
        }
    }

    /// Points palette indices at the scene nodes standing in for bones.
    /// Populated once per model load from the bone-marker scan.
    pub fn bind_bone_entities(&mut self, bone_entities: FxHashMap<usize, NodeHandle>) {
        self.bone_entities = bone_entities;
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Current state index, `None` until a non-empty machine is loaded.
    #[must_use]
    pub fn current_state(&self) -> Option<usize> {
        self.current_state
    }

    #[must_use]
    pub fn active_clip(&self) -> Option<&AnimationClip> {
        self.active_clip.and_then(|id| self.clips.get(&id))
    }

    /// The skinning matrix palette, always `MAX_BONES` entries with
    /// identity in unused slots.
    #[must_use]
    pub fn palette(&self) -> &[Mat4] {
        &self.palette
    }

    #[must_use]
    pub fn variable(&self, name: &str) -> Option<i32> {
        let index = self.variable_names.iter().position(|n| n == name)?;
        Some(self.variable_values[index])
    }

    // ========================================================================
    // Loading
    // ========================================================================

    /// Loads the state machine and its clips on first use.
    pub fn ensure_loaded(&mut self, backend: &dyn AssetBackend, cache: &SceneCache) -> Result<()> {
        if self.loaded {
            return Ok(());
        }
        let path = backend.resolve_path(self.source_guid)?;
        let doc = backend.load_state_machine(&path)?;
        self.load_state_machine(&doc, backend, cache)?;
        self.loaded = true;
        Ok(())
    }

    /// (Re)loads the machine from an already-parsed document: imports every
    /// state's clip through the shared cache, validates transitions and
    /// conditions, and activates state 0 (or nothing if `states` is empty).
    pub fn load_state_machine(
        &mut self,
        doc: &StateMachineDoc,
        backend: &dyn AssetBackend,
        cache: &SceneCache,
    ) -> Result<()> {
        self.variable_names = doc.variables.iter().map(|v| v.name.clone()).collect();
        self.variable_values = doc.variables.iter().map(|v| v.value).collect();
        let variable_count = self.variable_values.len();

        self.states.clear();
        self.clips.clear();
        for state in &doc.states {
            if !self.clips.contains_key(&state.guid) {
                let scene = cache.get_or_import(state.guid, backend)?;
                // States reference files by GUID only, so each state plays
                // the first clip of its file
                let clip = AnimationClip::from_import(&scene, 0, &mut self.mesh_bones)?;
                self.clips.insert(state.guid, clip);
            }
            self.states.push(State {
                clip: state.guid,
                play_once: state.play_once,
            });
        }

        let state_count = self.states.len();
        self.transitions = doc
            .transitions
            .iter()
            .map(|transition| {
                for &state in &[transition.input_state, transition.output_state] {
                    if state >= state_count {
                        return Err(MarrowError::StateOutOfBounds {
                            state,
                            count: state_count,
                        });
                    }
                }
                Ok(Transition {
                    from_state: transition.input_state,
                    to_state: transition.output_state,
                    conditions: transition
                        .conditions
                        .iter()
                        .map(|c| c.resolve(variable_count))
                        .collect::<Result<_>>()?,
                })
            })
            .collect::<Result<_>>()?;

        if self.states.is_empty() {
            self.current_state = None;
            self.active_clip = None;
        } else {
            self.current_state = Some(0);
            self.active_clip = Some(self.states[0].clip);
        }
        self.cursor_ticks = 0.0;
        self.times_completed = 0;
        Ok(())
    }

    // ========================================================================
    // Per-tick update
    // ========================================================================

    /// Advances the playback cursor and evaluates transitions. No-op while
    /// no clip is active.
    pub fn update_state_machine(&mut self, dt: f32) {
        let Some(current) = self.current_state else {
            return;
        };
        let Some(clip_id) = self.active_clip else {
            return;
        };
        let Some(clip) = self.clips.get(&clip_id) else {
            return;
        };

        // 1. Advance and wrap the cursor. A zero-duration clip never wraps
        // (keeps the modulo away from 0.0).
        if clip.duration_ticks > 0.0 {
            let advanced = self.cursor_ticks + clip.ticks_per_second * dt;
            if advanced >= clip.duration_ticks {
                self.times_completed = self.times_completed.saturating_add(1);
                self.cursor_ticks = advanced % clip.duration_ticks;
            } else {
                self.cursor_ticks = advanced;
            }
        }

        // 2. First transition out of the current state whose conditions all
        // hold is the only one considered this tick.
        for transition in &self.transitions {
            if transition.from_state != current {
                continue;
            }
            if !transition
                .conditions
                .iter()
                .all(|c| c.evaluate(&self.variable_values))
            {
                continue;
            }

            let target = &self.states[transition.to_state];
            if target.play_once && self.times_completed < 1 {
                // Play-once gate: wait for the active clip to finish before
                // entering the target. Expected steady-state, not an error.
                break;
            }

            self.active_clip = Some(target.clip);
            self.current_state = Some(transition.to_state);
            self.cursor_ticks = 0.0;
            self.times_completed = 0;
            break;
        }
    }

    /// Writes `value` into the named state-machine variable.
    ///
    /// Returns the variable's index, or `None` (with an error log) when the
    /// name is unknown — scripted callers must tolerate a missing variable.
    pub fn set_variable(&mut self, name: &str, value: i32) -> Option<usize> {
        match self.variable_names.iter().position(|n| n == name) {
            Some(index) => {
                self.variable_values[index] = value;
                Some(index)
            }
            None => {
                log::error!("animator has no state-machine variable named '{name}'");
                None
            }
        }
    }

    /// Evaluates the active clip at the current cursor: fills the skinning
    /// palette and writes decomposed transforms into bone entities.
    pub fn propagate(&mut self, nodes: &mut SlotMap<NodeHandle, Node>) {
        let Some(clip_id) = self.active_clip else {
            return;
        };
        let Some(clip) = self.clips.get(&clip_id) else {
            return;
        };
        propagate_bone_transforms(
            clip,
            self.cursor_ticks,
            &mut self.palette,
            &self.bone_entities,
            nodes,
        );
    }
}
