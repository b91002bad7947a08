//! Built-in fixtures: the default catalog, roster and opening sessions.
//!
//! A config file may replace any of these.

use crate::catalog::Catalog;
use crate::profile::{Profile, RosterEntry};
use crate::roster::Roster;
use crate::session::StudySession;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

/// Courses, campus spots, class years, time slots and study styles.
pub fn default_catalog() -> Catalog {
    Catalog {
        courses: strings(&["CS1", "MATH3", "BIO11", "CHEM5", "ECON1", "PSYC6", "ENGS21"]),
        spots: strings(&["Berry Library", "Novak Café", "Sanborn", "East Wheelock Lounge"]),
        years: strings(&["25", "26", "27", "28"]),
        time_slots: strings(&[
            "Today 2pm",
            "Today 5pm",
            "Today 7pm",
            "Tomorrow 10am",
            "Tomorrow 2pm",
            "Tomorrow 7pm",
        ]),
        styles: strings(&["quiet", "talk"]),
    }
}

pub fn default_roster_entries() -> Vec<RosterEntry> {
    vec![
        Profile::new("Emma", "27", ["CS1", "MATH3"], "quiet", "Berry Library"),
        Profile::new("Noah", "26", ["CS1", "ECON1"], "talk", "Novak Café"),
        Profile::new("Lily", "25", ["BIO11", "CHEM5"], "quiet", "Sanborn"),
        Profile::new("Maya", "26", ["MATH3", "PSYC6"], "quiet", "Berry Library"),
        Profile::new("Alex", "27", ["CS1", "ENGS21"], "talk", "Novak Café"),
        Profile::new("Sophie", "27", ["CS1", "BIO11"], "quiet", "Berry Library"),
    ]
}

pub fn default_roster() -> Roster {
    Roster::new(default_roster_entries())
}

/// Sessions open when the tool starts.
pub fn default_sessions() -> Vec<StudySession> {
    vec![
        StudySession {
            id: 1,
            course: "CS1".into(),
            host: "Emma".into(),
            spot: "Berry Library".into(),
            time: "Today 7pm".into(),
            capacity_remaining: 3,
            members: strings(&["Emma"]),
        },
        StudySession {
            id: 2,
            course: "MATH3".into(),
            host: "Maya".into(),
            spot: "Novak Café".into(),
            time: "Tomorrow 2pm".into(),
            capacity_remaining: 2,
            members: strings(&["Maya"]),
        },
    ]
}
