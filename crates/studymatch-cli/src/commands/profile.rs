//! Profile commands.

use std::io::Write;

use clap::Subcommand;
use studymatch_core::{AppState, Profile, ProfileDraft};

use super::{split_list, CommandResult, Output, NO_COURSES};

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Save your profile, replacing any previous one
    Save {
        /// Your name
        #[arg(long)]
        name: Option<String>,
        /// Class year (e.g. "27")
        #[arg(long)]
        year: Option<String>,
        /// Comma-separated courses (e.g. "CS1,MATH3"); may be empty
        #[arg(long)]
        courses: Option<String>,
        /// Study style (e.g. "quiet" or "talk")
        #[arg(long)]
        style: Option<String>,
        /// Favorite campus spot
        #[arg(long)]
        spot: Option<String>,
    },
    /// Show your saved profile
    Show,
    /// List the courses you can start a session for
    Courses,
}

pub fn run<W: Write>(action: ProfileAction, state: &mut AppState, out: &mut Output<W>) -> CommandResult {
    match action {
        ProfileAction::Save {
            name,
            year,
            courses,
            style,
            spot,
        } => {
            let draft = ProfileDraft {
                name,
                year,
                courses: courses.as_deref().map(split_list),
                style,
                spot,
            };
            let profile = state.save_profile_draft(draft)?;
            out.message("Profile saved!", &profile)?;
        }
        ProfileAction::Show => match state.profile() {
            Some(profile) if out.is_json() => out.json(profile)?,
            Some(profile) => describe(profile, out)?,
            None => out.message("No profile saved yet.", &serde_json::Value::Null)?,
        },
        ProfileAction::Courses => {
            let choices = state.course_choices()?;
            let text = if choices.is_empty() {
                NO_COURSES.to_string()
            } else {
                format!("Courses: {}", choices.join(", "))
            };
            out.message(text, &choices)?;
        }
    }
    Ok(())
}

fn describe<W: Write>(profile: &Profile, out: &mut Output<W>) -> std::io::Result<()> {
    let courses = profile.courses.iter().cloned().collect::<Vec<_>>().join(", ");
    out.line(format!("Name:    {}", profile.name))?;
    out.line(format!("Year:    {}", profile.year))?;
    out.line(format!(
        "Courses: {}",
        if courses.is_empty() { "(none)" } else { &courses }
    ))?;
    out.line(format!("Style:   {}", profile.style))?;
    out.line(format!("Spot:    {}", profile.spot))
}
