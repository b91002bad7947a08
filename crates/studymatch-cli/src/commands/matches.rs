use std::io::Write;

use studymatch_core::{AppState, CoreError};

use super::{CommandResult, Output};

/// Show ranked study buddies for the saved profile.
pub fn run<W: Write>(state: &AppState, same_year_only: bool, out: &mut Output<W>) -> CommandResult {
    let profile = state.profile().ok_or(CoreError::RequiresProfile)?;
    if !profile.is_ready_for_matching() {
        let empty: [(); 0] = [];
        return out.message(
            "Add at least one course to your profile to find study buddies.",
            &empty,
        );
    }

    let results = state.find_matches(same_year_only)?;
    if out.is_json() {
        return out.json(&results);
    }

    if results.is_empty() {
        out.line("No matches found. Try adjusting your filters or adding more courses!")?;
        return Ok(());
    }

    out.line(format!("Found {} potential study buddies!", results.len()))?;
    for m in &results {
        let breakdown = m.score_breakdown();
        out.line(format!(
            "* {} (Class of '{}) - Match Score: {}",
            m.name, m.year, m.score
        ))?;
        out.line(format!("    Shared courses: {}", m.shared_courses.join(", ")))?;
        out.line(format!("    Study style: {}", m.style))?;
        out.line(format!("    Prefers: {}", m.spot))?;
        out.line(format!(
            "    Score: courses {} + style {} + spot {}",
            breakdown.courses, breakdown.style, breakdown.spot
        ))?;
    }
    Ok(())
}
