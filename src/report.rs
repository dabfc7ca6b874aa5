use chrono::NaiveDateTime;

use crate::model::TeamStreakRecord;

pub(crate) const KICKOFF_WIRE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub(crate) const KICKOFF_LABEL_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Shown in place of a kickoff time that is absent or unparsable.
pub const KICKOFF_UNKNOWN: &str = "time unknown";

/// Render a wire timestamp as a short human-readable kickoff label.
pub fn format_kickoff(starting_at: Option<&str>) -> String {
    starting_at
        .and_then(|raw| {
            NaiveDateTime::parse_from_str(raw, KICKOFF_WIRE_FORMAT)
                .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
                .ok()
        })
        .map(|kickoff| kickoff.format(KICKOFF_LABEL_FORMAT).to_string())
        .unwrap_or_else(|| KICKOFF_UNKNOWN.to_string())
}

/// The message sent when today's fixtures could not be retrieved at all.
pub fn no_fixtures_message() -> &'static str {
    "⚠️ No fixtures found today or API error."
}

/// Build the notification text for the qualifying records of one run.
///
/// An empty input still produces an informational line; a run never ends
/// silent.
pub fn build_report(records: &[TeamStreakRecord], window: usize) -> String {
    if records.is_empty() {
        return format!(
            "ℹ️ No teams found today with {window} consecutive matches without BTTS."
        );
    }
    let mut message = format!("📊 *Teams with {window} consecutive matches WITHOUT BTTS:*\n\n");
    for record in records {
        match &record.kickoff {
            Some(kickoff) => {
                message.push_str(&format!("• {} 🕒 {}\n", record.team_name, kickoff));
            }
            None => message.push_str(&format!("• {}\n", record.team_name)),
        }
    }
    message
}
