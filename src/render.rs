use strum::IntoEnumIterator;

use crate::config::AppConfig;
use crate::roster::{Field, FormMode, Roster};

pub fn render_form(roster: &Roster) -> String {
    let (heading, actions) = match roster.mode() {
        FormMode::Create => ("Add teacher".to_owned(), "submit (add)"),
        FormMode::Edit(id) => (format!("Update teacher #{id}"), "submit (update), cancel"),
    };

    let mut out = format!("{heading}\n");
    let draft = roster.draft();
    for field in Field::iter() {
        let label = format!("{}:", field.label());
        out.push_str(&format!("  {label:<18}{}\n", draft.get(field)));
    }
    out.push_str(&format!("Actions: {actions}\n"));
    out
}

pub fn render_list(roster: &Roster, config: &AppConfig) -> String {
    let mut out = format!(
        "Search by {}: {}\n",
        Field::SecondLastName.label().to_lowercase(),
        roster.search_term()
    );

    let visible = roster.visible_records();
    if visible.is_empty() {
        out.push_str(&format!("{}\n", config.empty_message.0));
    }
    for record in visible.iter() {
        out.push_str(&format!(
            "  #{:<4} {}  |  {}  |  {}\n",
            record.id,
            record.full_name(),
            record.subject,
            record.email
        ));
    }

    out.push_str(&format!("{} of {} teachers\n", visible.len(), roster.len()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster_with(names: &[(&str, &str, &str)]) -> Roster {
        let mut roster = Roster::new();
        for (first, last, second) in names {
            roster.set_field(Field::FirstName, *first);
            roster.set_field(Field::LastName, *last);
            roster.set_field(Field::SecondLastName, *second);
            roster.set_field(Field::Email, "t@school.test");
            roster.set_field(Field::Subject, "Biology");
            roster.submit();
        }
        roster
    }

    #[test]
    fn form_labels_follow_mode() {
        let mut roster = roster_with(&[("Ana", "Ruiz", "Garcia")]);
        let form = render_form(&roster);
        assert!(form.starts_with("Add teacher\n"));
        assert!(form.contains("submit (add)"));
        assert!(!form.contains("cancel"));

        let id = roster.records()[0].id;
        roster.begin_edit(id).unwrap();
        let form = render_form(&roster);
        assert!(form.starts_with(&format!("Update teacher #{id}\n")));
        assert!(form.contains("Second last name: Garcia"));
        assert!(form.contains("submit (update), cancel"));
    }

    #[test]
    fn rows_show_full_name_subject_and_email() {
        let roster = roster_with(&[("Ana", "Ruiz", "Garcia"), ("Luis", "Perez", "Lopez")]);
        let list = render_list(&roster, &AppConfig::default());
        assert!(list.contains("Ana Ruiz Garcia  |  Biology  |  t@school.test"));
        assert!(list.contains("Luis Perez Lopez"));
        assert!(list.ends_with("2 of 2 teachers\n"));
    }

    #[test]
    fn empty_state_message_when_nothing_matches() {
        let mut roster = roster_with(&[("Ana", "Ruiz", "Garcia")]);
        roster.set_search_term("zz");
        let list = render_list(&roster, &AppConfig::default());
        assert!(list.contains("Search by second last name: zz"));
        assert!(list.contains("No teachers found."));
        assert!(list.ends_with("0 of 1 teachers\n"));

        let empty = render_list(&Roster::new(), &AppConfig::default());
        assert!(empty.contains("No teachers found."));
    }
}
