//! Conversation stages.
//!
//! A session walks `INIT → CAPTURE_NAME → TRIAGE` and then settles into either
//! `HUMAN_ROUTE` or `SALES_MODE`. Nothing here is terminal: a session only
//! ends when it is deleted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::domain::foundation::StateMachine;

/// The discrete phase of a chat session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Stage {
    /// Fresh session; the next message gets the welcome text.
    #[default]
    Init,

    /// Waiting for the user's name.
    CaptureName,

    /// Choosing between human advice and the AI assistant.
    Triage,

    /// Pitching documents, with the completion gateway as backstop.
    SalesMode,

    /// Pointed at the free human-advice page.
    HumanRoute,

    /// Reserved. No rule enters it; a session found here gets the fallback
    /// greeting and restarts at `Init`.
    Done,
}

impl Stage {
    /// All stages in declaration order.
    pub const ALL: [Stage; 6] = [
        Stage::Init,
        Stage::CaptureName,
        Stage::Triage,
        Stage::SalesMode,
        Stage::HumanRoute,
        Stage::Done,
    ];

    /// Wire name (`"SALES_MODE"` etc).
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Init => "INIT",
            Stage::CaptureName => "CAPTURE_NAME",
            Stage::Triage => "TRIAGE",
            Stage::SalesMode => "SALES_MODE",
            Stage::HumanRoute => "HUMAN_ROUTE",
            Stage::Done => "DONE",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stage name outside the enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown conversation stage '{0}'")]
pub struct UnknownStage(pub String);

impl FromStr for Stage {
    type Err = UnknownStage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Stage::ALL
            .into_iter()
            .find(|stage| stage.as_str() == s)
            .ok_or_else(|| UnknownStage(s.to_string()))
    }
}

impl StateMachine for Stage {
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use Stage::*;
        match self {
            Init => vec![CaptureName],
            CaptureName => vec![Triage],
            Triage => vec![HumanRoute, SalesMode, Triage],
            HumanRoute => vec![SalesMode, HumanRoute],
            SalesMode => vec![SalesMode],
            Done => vec![Init],
        }
    }
}

/// The stage a caller declared, which may not be one we know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageInput {
    Known(Stage),
    Unrecognized(String),
}

impl StageInput {
    /// Parses a declared stage without failing.
    pub fn parse(raw: &str) -> Self {
        match raw.parse::<Stage>() {
            Ok(stage) => StageInput::Known(stage),
            Err(UnknownStage(raw)) => StageInput::Unrecognized(raw),
        }
    }

    /// The known stage, if any.
    pub fn known(&self) -> Option<Stage> {
        match self {
            StageInput::Known(stage) => Some(*stage),
            StageInput::Unrecognized(_) => None,
        }
    }
}

impl From<Stage> for StageInput {
    fn from(stage: Stage) -> Self {
        StageInput::Known(stage)
    }
}
