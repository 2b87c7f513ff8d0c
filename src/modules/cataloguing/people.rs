// People extraction from the author index and the participants field
//
// Participants arrive as `"Label: Last, First; Last, First. Label: ..."`.

use crate::models::record::{RawField, fields};
use crate::models::{Person, RawRecord, Role, RoleSet};

/// Lower-case label prefixes and the role they denote
const LABEL_PREFIXES: &[(&str, Role)] = &[
    ("illustr", Role::Illustrator),
    ("übersetz", Role::Translator),
    ("herausg", Role::Editor),
    ("mitarb", Role::Participant),
    ("sprecher", Role::Narrator),
    ("gelesen", Role::Narrator),
    ("regie", Role::Director),
    ("produ", Role::Producer),
    ("musik", Role::Composer),
    ("kompo", Role::Composer),
    ("darsteller", Role::Actor),
    ("mitwirk", Role::Actor),
];

fn entries(field: Option<&RawField>) -> Vec<&str> {
    match field {
        None => Vec::new(),
        Some(RawField::Single(s)) => vec![s.as_str()],
        Some(RawField::Multiple(list)) => list.iter().map(String::as_str).collect(),
    }
}

/// Role for a participant label; unknown labels count as participation
pub fn role_for_label(label: &str) -> Role {
    let label = label.trim().to_lowercase();
    LABEL_PREFIXES
        .iter()
        .find(|(prefix, _)| label.starts_with(prefix))
        .map(|(_, role)| *role)
        .unwrap_or(Role::Participant)
}

/// Authors first, then participants in the order the record lists them
pub fn extract_roles(record: &RawRecord) -> RoleSet {
    let mut roles = RoleSet::new();

    for entry in entries(record.get(fields::AUTHORS)) {
        for person in entry.split(';').filter_map(Person::parse) {
            roles.push(Role::Author, person);
        }
    }

    for entry in entries(record.get(fields::PARTICIPANTS)) {
        for group in entry.trim().trim_end_matches('.').split(". ") {
            let (role, names) = match group.split_once(':') {
                Some((label, names)) => (role_for_label(label), names),
                None => (Role::Participant, group),
            };
            for person in names.split(';').filter_map(Person::parse) {
                roles.push(role, person);
            }
        }
    }

    roles
}
