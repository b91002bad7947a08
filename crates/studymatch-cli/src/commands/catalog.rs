//! Catalog and roster listings.

use std::io::Write;

use studymatch_core::{Catalog, Roster, RosterEntry};

use super::{CommandResult, Output};

pub fn show_catalog<W: Write>(catalog: &Catalog, out: &mut Output<W>) -> CommandResult {
    if out.is_json() {
        return out.json(catalog);
    }

    out.line(format!("Courses:    {}", catalog.courses.join(", ")))?;
    out.line(format!("Spots:      {}", catalog.spots.join(", ")))?;
    out.line(format!("Years:      {}", catalog.years.join(", ")))?;
    out.line(format!("Time slots: {}", catalog.time_slots.join(", ")))?;
    out.line(format!("Styles:     {}", catalog.styles.join(", ")))?;
    Ok(())
}

/// Print the roster, or only the entry called `name`.
pub fn show_roster<W: Write>(roster: &Roster, name: Option<&str>, out: &mut Output<W>) -> CommandResult {
    if let Some(name) = name {
        return match roster.find(name) {
            Some(entry) if out.is_json() => out.json(entry),
            Some(entry) => Ok(out.line(describe(entry))?),
            None => out.message(
                format!("No one named {name} on the roster."),
                &serde_json::Value::Null,
            ),
        };
    }

    if out.is_json() {
        return out.json(roster);
    }

    if roster.is_empty() {
        out.line("The roster is empty.")?;
        return Ok(());
    }
    for entry in roster {
        out.line(describe(entry))?;
    }
    Ok(())
}

fn describe(entry: &RosterEntry) -> String {
    format!(
        "{} (Class of '{}) | {} | {} | {}",
        entry.name,
        entry.year,
        entry.courses.iter().cloned().collect::<Vec<_>>().join(", "),
        entry.style,
        entry.spot
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use studymatch_core::seed;

    fn render(name: Option<&str>, json: bool) -> String {
        let mut out = Output::new(Vec::new(), json);
        show_roster(&seed::default_roster(), name, &mut out).unwrap();
        String::from_utf8(out.into_inner()).unwrap()
    }

    #[test]
    fn roster_lists_everyone_in_order() {
        let text = render(None, false);
        assert_eq!(text.lines().count(), 6);
        assert!(text.starts_with("Emma (Class of '27) | CS1, MATH3 | quiet | Berry Library\n"));
    }

    #[test]
    fn roster_entry_by_name() {
        assert_eq!(
            render(Some("Lily"), false),
            "Lily (Class of '25) | BIO11, CHEM5 | quiet | Sanborn\n"
        );
        let entry: serde_json::Value = serde_json::from_str(&render(Some("Noah"), true)).unwrap();
        assert_eq!(entry["spot"], "Novak Café");
    }

    #[test]
    fn unknown_roster_name_is_not_an_error() {
        assert_eq!(render(Some("Nobody"), false), "No one named Nobody on the roster.\n");
        assert_eq!(render(Some("Nobody"), true).trim(), "null");
    }
}
