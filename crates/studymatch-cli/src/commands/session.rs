//! Study session commands.

use std::io::Write;

use clap::Subcommand;
use studymatch_core::{AppState, CoreError, JoinOutcome, SessionId, StudySession};

use super::{CommandResult, Output, NO_COURSES};

#[derive(Subcommand)]
pub enum SessionAction {
    /// List active sessions
    List,
    /// Start a new session hosted by you
    Create {
        /// Course to study
        #[arg(long)]
        course: String,
        /// Location
        #[arg(long)]
        spot: String,
        /// Time slot (e.g. "Today 2pm")
        #[arg(long)]
        time: String,
        /// Max group size including you, 2 to 8 (default from config)
        #[arg(long)]
        size: Option<u32>,
    },
    /// Join a session
    Join {
        /// Session ID
        id: SessionId,
    },
}

pub fn run<W: Write>(action: SessionAction, state: &mut AppState, out: &mut Output<W>) -> CommandResult {
    match action {
        SessionAction::List => list(state, out),
        SessionAction::Create {
            course,
            spot,
            time,
            size,
        } => {
            // Sessions can only be started for the courses on offer.
            let choices = state.course_choices()?;
            if !choices.contains(&course) {
                let message = if choices.is_empty() {
                    NO_COURSES.to_string()
                } else {
                    format!(
                        "'{course}' is not offered for your profile; choose from: {}",
                        choices.join(", ")
                    )
                };
                return Err(CoreError::InvalidInput {
                    field: "course".into(),
                    message,
                }
                .into());
            }

            let size = size.unwrap_or(state.defaults().max_group_size);
            let session = state.create_session(&course, &spot, &time, size)?;
            out.message(
                format!("Session #{} created for {}!", session.id, session.course),
                &session,
            )
        }
        SessionAction::Join { id } => {
            let outcome = state.join_session(id)?;
            let text = match &outcome {
                JoinOutcome::Joined(session) => format!(
                    "Joined session #{} ({} spots left)",
                    session.id, session.capacity_remaining
                ),
                JoinOutcome::AlreadyMember(session) => {
                    format!("You are already a member of session #{}", session.id)
                }
            };
            out.message(text, &outcome)
        }
    }
}

fn list<W: Write>(state: &AppState, out: &mut Output<W>) -> CommandResult {
    let sessions = state.list_sessions();
    if out.is_json() {
        return out.json(sessions);
    }

    if sessions.is_empty() {
        out.line("No active sessions right now. Start one with 'sessions create'.")?;
        return Ok(());
    }

    let me = state.profile().map(|p| p.name.as_str());
    for session in sessions {
        out.line(describe(session, me))?;
    }
    Ok(())
}

fn describe(session: &StudySession, me: Option<&str>) -> String {
    let marker = match me {
        Some(name) if session.is_member(name) => " [joined]",
        _ => "",
    };
    format!(
        "#{} {} hosted by {} | {}, {} | {} spots left | members: {}{}",
        session.id,
        session.course,
        session.host,
        session.spot,
        session.time,
        session.capacity_remaining,
        session.members.join(", "),
        marker
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use studymatch_core::{seed, Config, CourseChoicePolicy};

    #[test]
    fn describe_marks_own_sessions() {
        let session = &seed::default_sessions()[0];
        assert_eq!(
            describe(session, Some("Emma")),
            "#1 CS1 hosted by Emma | Berry Library, Today 7pm | 3 spots left | members: Emma [joined]"
        );
        assert!(!describe(session, Some("Noah")).contains("[joined]"));
        assert!(!describe(session, None).contains("[joined]"));
    }

    #[test]
    fn create_without_course_choices_asks_for_courses() {
        let mut config = Config::default();
        config.defaults.course_choices = CourseChoicePolicy::ProfileOnly;
        let mut state = AppState::new(config);
        let empty: [&str; 0] = [];
        state
            .save_profile("Kai", "26", empty, "quiet", "Sanborn")
            .unwrap();

        let mut out = Output::new(Vec::new(), false);
        let action = SessionAction::Create {
            course: "CS1".into(),
            spot: "Sanborn".into(),
            time: "Today 5pm".into(),
            size: None,
        };
        let err = run(action, &mut state, &mut out).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value for 'course': No courses available. Add courses to your profile first."
        );
        assert_eq!(state.list_sessions().len(), 2);
    }
}
