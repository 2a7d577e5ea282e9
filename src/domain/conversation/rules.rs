//! Stage transition rule tables.
//!
//! Each stage owns an ordered slice of [`Rule`]s. The flow walks the slice
//! and fires the first rule whose matcher accepts the message, so the order
//! of entries is the tie-breaker whenever keyword lists overlap. Every table
//! ends in an [`Matcher::Always`] rule, which makes selection total.

use super::classifier::{AI_KEYWORDS, HUMAN_KEYWORDS, SWITCH_TO_AI_KEYWORDS};
use super::stage::Stage;

/// What a rule checks the message for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    /// Matches unconditionally.
    Always,
    /// Matches if any keyword occurs (case-insensitive substring).
    Keywords(&'static [&'static str]),
    /// Matches if the message names a document in the catalog.
    Document,
}

/// Which reply template a fired rule produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reply {
    Welcome,
    NameCaptured,
    HumanAdvice,
    SalesIntro,
    TriageClarification,
    SwitchToSales,
    HumanFollowUp,
    DocumentPitch,
    GatewayCompletion,
    Fallback,
}

/// One row of a stage's transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub matcher: Matcher,
    pub next: Stage,
    pub reply: Reply,
}

impl Rule {
    const fn new(matcher: Matcher, next: Stage, reply: Reply) -> Self {
        Self {
            matcher,
            next,
            reply,
        }
    }
}

const INIT_RULES: &[Rule] = &[Rule::new(Matcher::Always, Stage::CaptureName, Reply::Welcome)];

// Blank input still advances; name extraction supplies the placeholder.
const CAPTURE_NAME_RULES: &[Rule] = &[Rule::new(
    Matcher::Always,
    Stage::Triage,
    Reply::NameCaptured,
)];

const TRIAGE_RULES: &[Rule] = &[
    Rule::new(
        Matcher::Keywords(HUMAN_KEYWORDS),
        Stage::HumanRoute,
        Reply::HumanAdvice,
    ),
    Rule::new(
        Matcher::Keywords(AI_KEYWORDS),
        Stage::SalesMode,
        Reply::SalesIntro,
    ),
    Rule::new(Matcher::Always, Stage::Triage, Reply::TriageClarification),
];

const HUMAN_ROUTE_RULES: &[Rule] = &[
    Rule::new(
        Matcher::Keywords(SWITCH_TO_AI_KEYWORDS),
        Stage::SalesMode,
        Reply::SwitchToSales,
    ),
    Rule::new(Matcher::Always, Stage::HumanRoute, Reply::HumanFollowUp),
];

const SALES_MODE_RULES: &[Rule] = &[
    Rule::new(Matcher::Document, Stage::SalesMode, Reply::DocumentPitch),
    Rule::new(Matcher::Always, Stage::SalesMode, Reply::GatewayCompletion),
];

/// Rules for stages without a table of their own, and for unrecognized
/// stage names.
pub const FALLBACK_RULES: &[Rule] = &[Rule::new(Matcher::Always, Stage::Init, Reply::Fallback)];

/// The ordered rule table for a stage.
pub fn rules_for(stage: Stage) -> &'static [Rule] {
    match stage {
        Stage::Init => INIT_RULES,
        Stage::CaptureName => CAPTURE_NAME_RULES,
        Stage::Triage => TRIAGE_RULES,
        Stage::HumanRoute => HUMAN_ROUTE_RULES,
        Stage::SalesMode => SALES_MODE_RULES,
        Stage::Done => FALLBACK_RULES,
    }
}
