//! Animator state machine definition and condition evaluation.
//!
//! The declarative half lives in a structured document
//! ([`StateMachineDoc`]): a list of states (each naming the GUID of an
//! animation file and whether its clip plays once), transitions between
//! state indices guarded by conditions, and named integer variables the
//! conditions read. Gameplay code writes the variables; the engine
//! re-evaluates the transitions every tick.
//!
//! Document fields keep their authored spelling (`Guid`, `InputStateID`,
//! `Variable1Idx`, ...); the runtime types ([`State`], [`Transition`],
//! [`Condition`]) are the validated in-memory form.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::animation::ClipId;
use crate::errors::{MarrowError, Result};

/// Integer comparison operator of a transition condition.
///
/// The document spells these as the operator token itself; anything outside
/// this set fails deserialization, which makes an unknown operator a fatal
/// load error rather than a silently-ignored condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Comparator {
    #[serde(rename = "==")]
    Eq,
    #[serde(rename = "!=")]
    Ne,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "<=")]
    Le,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = ">=")]
    Ge,
}

impl Comparator {
    #[must_use]
    pub fn evaluate(self, lhs: i32, rhs: i32) -> bool {
        match self {
            Self::Eq => lhs == rhs,
            Self::Ne => lhs != rhs,
            Self::Lt => lhs < rhs,
            Self::Le => lhs <= rhs,
            Self::Gt => lhs > rhs,
            Self::Ge => lhs >= rhs,
        }
    }
}

/// One side of a condition: either a state-machine variable (by index into
/// the animator's variable table) or an integer literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Variable(usize),
    Literal(i32),
}

impl Operand {
    fn value(self, variables: &[i32]) -> i32 {
        match self {
            // Index validated at load time
            Self::Variable(index) => variables[index],
            Self::Literal(value) => value,
        }
    }
}

/// A single comparison; a transition fires only when all of its conditions
/// hold.
#[derive(Debug, Clone)]
pub struct Condition {
    pub lhs: Operand,
    pub op: Comparator,
    pub rhs: Operand,
}

impl Condition {
    #[must_use]
    pub fn evaluate(&self, variables: &[i32]) -> bool {
        self.op
            .evaluate(self.lhs.value(variables), self.rhs.value(variables))
    }
}

/// One state of the machine: which loaded clip it plays and whether the
/// clip must complete before transitions into play-once targets unlock.
#[derive(Debug, Clone)]
pub struct State {
    pub clip: ClipId,
    pub play_once: bool,
}

/// Directed edge between two state indices.
#[derive(Debug, Clone)]
pub struct Transition {
    pub from_state: usize,
    pub to_state: usize,
    pub conditions: Vec<Condition>,
}

// ============================================================================
// Document model
// ============================================================================

fn literal_sentinel() -> i32 {
    -1
}

/// Authored condition record. A negative variable index means the
/// corresponding literal field is used instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionDoc {
    #[serde(rename = "Variable1Idx", default = "literal_sentinel")]
    pub variable1_idx: i32,
    #[serde(rename = "Variable1", default)]
    pub variable1: i32,
    #[serde(rename = "Operator")]
    pub operator: Comparator,
    #[serde(rename = "Variable2Idx", default = "literal_sentinel")]
    pub variable2_idx: i32,
    #[serde(rename = "Variable2", default)]
    pub variable2: i32,
}

impl ConditionDoc {
    /// Validates operand indices against the variable table.
    pub fn resolve(&self, variable_count: usize) -> Result<Condition> {
        Ok(Condition {
            lhs: resolve_operand(self.variable1_idx, self.variable1, variable_count)?,
            op: self.operator,
            rhs: resolve_operand(self.variable2_idx, self.variable2, variable_count)?,
        })
    }
}

fn resolve_operand(idx: i32, literal: i32, variable_count: usize) -> Result<Operand> {
    if idx < 0 {
        return Ok(Operand::Literal(literal));
    }
    let index = idx as usize;
    if index >= variable_count {
        return Err(MarrowError::VariableOutOfBounds {
            index,
            count: variable_count,
        });
    }
    Ok(Operand::Variable(index))
}

/// Authored state record: the GUID of the animation file backing the state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateDoc {
    #[serde(rename = "Guid")]
    pub guid: Uuid,
    #[serde(rename = "PlayOnce", default)]
    pub play_once: bool,
}

/// Authored transition record between state indices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionDoc {
    #[serde(rename = "InputStateID")]
    pub input_state: usize,
    #[serde(rename = "OutputStateID")]
    pub output_state: usize,
    #[serde(rename = "Conditions", default)]
    pub conditions: Vec<ConditionDoc>,
}

/// Authored variable record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariableDoc {
    pub name: String,
    pub value: i32,
}

/// The state-machine definition document as authored on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StateMachineDoc {
    #[serde(default)]
    pub states: Vec<StateDoc>,
    #[serde(default)]
    pub transitions: Vec<TransitionDoc>,
    #[serde(default)]
    pub variables: Vec<VariableDoc>,
}

impl StateMachineDoc {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Loads and parses a definition file. This is what a filesystem-backed
    /// [`AssetBackend`](crate::assets::AssetBackend) delegates to.
    pub fn from_path(path: &std::path::Path) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
