use serde::Serialize;

/// How much metadata a streak record carries beyond the team name.
///
/// This is the only difference between the 2-match and 3-match report
/// variants; the evaluation pipeline itself is shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordMeta {
    /// Record the team name only.
    TeamOnly,
    /// Also record the kickoff label of the fixture that triggered the check.
    Kickoff,
}

/// The classified result of one historical fixture in a team's window.
#[derive(Debug, Clone, Serialize)]
pub struct MatchOutcome {
    pub fixture_id: u64,
    pub opponent: Option<String>,
    pub home_goals: Option<u32>,
    pub away_goals: Option<u32>,
    pub btts_no: bool,
}

/// A team's evaluated streak over its most recent finished fixtures.
#[derive(Debug, Clone, Serialize)]
pub struct TeamStreakRecord {
    pub team_id: u64,
    pub team_name: String,
    /// Most recent first; shorter than the window only when a failed
    /// fetch aborted the check.
    pub outcomes: Vec<MatchOutcome>,
    /// True only when every fixture in the window classified as BTTS=No.
    pub qualifies: bool,
    /// Kickoff label of today's fixture, captured under [`RecordMeta::Kickoff`].
    pub kickoff: Option<String>,
}
