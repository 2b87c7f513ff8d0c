use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

use super::value::Value;

/// Default delimiter between people of the same role
pub const PEOPLE_DELIMITER: &str = "; ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
}

impl Person {
    pub fn new(first_name: &str, last_name: &str) -> Self {
        Self {
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
        }
    }

    /// Parse `"Last, First"` or `"First Last"`; a single word is a last name
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        if let Some((last, first)) = raw.split_once(',') {
            return Some(Self::new(first, last));
        }

        match raw.rsplit_once(' ') {
            Some((first, last)) => Some(Self::new(first, last)),
            None => Some(Self::new("", raw)),
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.first_name.is_empty(), self.last_name.is_empty()) {
            (true, _) => f.write_str(&self.last_name),
            (false, true) => f.write_str(&self.first_name),
            (false, false) => write!(f, "{} {}", self.first_name, self.last_name),
        }
    }
}

/// A function a person performed on a work
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Author,
    Illustrator,
    Translator,
    Editor,
    Participant,
    Narrator,
    Director,
    Producer,
    Composer,
    Actor,
}

impl Role {
    /// Roles every product schema carries
    pub const BASE: [Role; 5] = [
        Role::Author,
        Role::Illustrator,
        Role::Translator,
        Role::Editor,
        Role::Participant,
    ];

    /// Roles added by the media schema
    pub const MEDIA: [Role; 5] = [
        Role::Narrator,
        Role::Director,
        Role::Producer,
        Role::Composer,
        Role::Actor,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Role::Author => "author",
            Role::Illustrator => "illustrator",
            Role::Translator => "translator",
            Role::Editor => "editor",
            Role::Participant => "participant",
            Role::Narrator => "narrator",
            Role::Director => "director",
            Role::Producer => "producer",
            Role::Composer => "composer",
            Role::Actor => "actor",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Role::BASE
            .into_iter()
            .chain(Role::MEDIA)
            .find(|r| r.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Label used in the combined "all involved people" rendering
    pub fn label(self) -> &'static str {
        match self {
            Role::Author => "Autor",
            Role::Illustrator => "Illustration",
            Role::Translator => "Übersetzung",
            Role::Editor => "Herausgabe",
            Role::Participant => "Mitarbeit",
            Role::Narrator => "Sprecher",
            Role::Director => "Regie",
            Role::Producer => "Produktion",
            Role::Composer => "Musik",
            Role::Actor => "Darsteller",
        }
    }

    /// Canonical export key
    pub fn export_key(self) -> &'static str {
        match self {
            Role::Author => "AutorIn",
            Role::Illustrator => "IllustratorIn",
            Role::Translator => "ÜbersetzerIn",
            Role::Editor => "HerausgeberIn",
            Role::Participant => "MitarbeiterIn",
            Role::Narrator => "SprecherIn",
            Role::Director => "RegisseurIn",
            Role::Producer => "ProduzentIn",
            Role::Composer => "KomponistIn",
            Role::Actor => "SchauspielerIn",
        }
    }
}

/// People grouped by role, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleSet {
    entries: Vec<(Role, Vec<Person>)>,
}

impl RoleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a person to a role, creating the role on first use
    pub fn push(&mut self, role: Role, person: Person) {
        match self.entries.iter_mut().find(|(r, _)| *r == role) {
            Some((_, people)) => people.push(person),
            None => self.entries.push((role, vec![person])),
        }
    }

    /// Replace a role's people; the role keeps its position if already present
    pub fn set(&mut self, role: Role, people: Vec<Person>) {
        match self.entries.iter_mut().find(|(r, _)| *r == role) {
            Some((_, existing)) => *existing = people,
            None => self.entries.push((role, people)),
        }
    }

    pub fn people(&self, role: Role) -> &[Person] {
        self.entries
            .iter()
            .find(|(r, _)| *r == role)
            .map(|(_, people)| people.as_slice())
            .unwrap_or(&[])
    }

    pub fn is_vacant(&self, role: Role) -> bool {
        self.people(role).is_empty()
    }

    /// `"First Last"` strings for a role; empty when vacant
    pub fn get_role(&self, role: Role) -> Value {
        Value::from(
            self.people(role)
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>(),
        )
    }

    /// Single display string of everybody involved:
    /// `"<Label>: <people>"` groups joined by `". "`, author first.
    pub fn render(&self, delimiter: &str) -> String {
        let author = self
            .entries
            .iter()
            .filter(|(role, _)| *role == Role::Author);
        let others = self
            .entries
            .iter()
            .filter(|(role, _)| *role != Role::Author);

        author
            .chain(others)
            .filter(|(_, people)| !people.is_empty())
            .map(|(role, people)| {
                let names = people
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(delimiter);
                format!("{}: {}", role.label(), names)
            })
            .collect::<Vec<_>>()
            .join(". ")
    }

    /// The underlying role → people mapping, unchanged
    pub fn to_array(&self) -> &[(Role, Vec<Person>)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|(_, people)| people.is_empty())
    }
}

impl FromIterator<(Role, Vec<Person>)> for RoleSet {
    fn from_iter<I: IntoIterator<Item = (Role, Vec<Person>)>>(iter: I) -> Self {
        let mut set = RoleSet::new();
        for (role, people) in iter {
            for person in people {
                set.push(role, person);
            }
        }
        set
    }
}

impl Serialize for RoleSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (role, people) in &self.entries {
            map.serialize_entry(role.name(), people)?;
        }
        map.end()
    }
}
