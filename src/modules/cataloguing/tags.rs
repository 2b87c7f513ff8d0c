use serde::Serialize;

use crate::models::RawRecord;
use crate::models::record::{RawField, fields};

/// Index keywords treated as categories; everything else is a topic
const CATEGORIES: &[&str] = &[
    "Belletristik",
    "Roman",
    "Erzählung",
    "Bilderbuch",
    "Kinderbuch",
    "Jugendbuch",
    "Sachbuch",
    "Erstlesebuch",
    "Hörbuch",
    "Hörspiel",
    "Comic",
    "Lyrik",
    "Ratgeber",
    "Krimi",
    "Fantasy",
    "Spielfilm",
    "Dokumentarfilm",
    "Kalender",
    "Spiel",
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Tags {
    pub categories: Vec<String>,
    pub topics: Vec<String>,
}

impl Tags {
    pub fn from_record(record: &RawRecord) -> Self {
        let raw: Vec<&str> = match record.get(fields::KEYWORDS) {
            None => Vec::new(),
            Some(RawField::Single(s)) => vec![s.as_str()],
            Some(RawField::Multiple(list)) => list.iter().map(String::as_str).collect(),
        };

        let mut tags = Tags::default();
        let keywords = raw
            .into_iter()
            .flat_map(|entry| entry.split(';'))
            .map(str::trim)
            .filter(|k| !k.is_empty());

        for keyword in keywords {
            let bucket = if is_category(keyword) {
                &mut tags.categories
            } else {
                &mut tags.topics
            };
            if !bucket.iter().any(|k| k == keyword) {
                bucket.push(keyword.to_string());
            }
        }

        tags
    }
}

fn is_category(keyword: &str) -> bool {
    CATEGORIES.iter().any(|c| c.eq_ignore_ascii_case(keyword))
}
