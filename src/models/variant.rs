use serde::{Deserialize, Serialize};
use std::fmt;

/// Ancestor family of a variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Family {
    Book,
    Medium,
    Item,
}

/// Closed set of product categories, assigned once at classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    Hardcover,
    Softcover,
    Schoolbook,
    Ebook,
    /// Generic book, no specific form recognized
    Book,
    Audiobook,
    Sound,
    Music,
    Movie,
    /// Generic medium, no specific form recognized
    Medium,
    Calendar,
    Map,
    Nonbook,
    Toy,
    /// Generic item, also the fallback when nothing is recognized
    Item,
}

impl Variant {
    pub const ALL: [Variant; 15] = [
        Variant::Hardcover,
        Variant::Softcover,
        Variant::Schoolbook,
        Variant::Ebook,
        Variant::Book,
        Variant::Audiobook,
        Variant::Sound,
        Variant::Music,
        Variant::Movie,
        Variant::Medium,
        Variant::Calendar,
        Variant::Map,
        Variant::Nonbook,
        Variant::Toy,
        Variant::Item,
    ];

    pub fn family(self) -> Family {
        match self {
            Variant::Hardcover
            | Variant::Softcover
            | Variant::Schoolbook
            | Variant::Ebook
            | Variant::Book => Family::Book,
            Variant::Audiobook
            | Variant::Sound
            | Variant::Music
            | Variant::Movie
            | Variant::Medium => Family::Medium,
            Variant::Calendar | Variant::Map | Variant::Nonbook | Variant::Toy | Variant::Item => {
                Family::Item
            }
        }
    }

    /// Generic ancestor standing for the whole family
    pub fn generic(family: Family) -> Self {
        match family {
            Family::Book => Variant::Book,
            Family::Medium => Variant::Medium,
            Family::Item => Variant::Item,
        }
    }

    pub fn is_generic(self) -> bool {
        self == Variant::generic(self.family())
    }

    pub fn label(self) -> &'static str {
        match self {
            Variant::Hardcover => "Hardcover",
            Variant::Softcover => "Softcover",
            Variant::Schoolbook => "Schulbuch",
            Variant::Ebook => "ePublikation",
            Variant::Book => "Buch",
            Variant::Audiobook => "Hörbuch",
            Variant::Sound => "Tonträger",
            Variant::Music => "Musik",
            Variant::Movie => "Film",
            Variant::Medium => "Medium",
            Variant::Calendar => "Kalender",
            Variant::Map => "Landkarte",
            Variant::Nonbook => "Nonbook",
            Variant::Toy => "Spielzeug",
            Variant::Item => "Artikel",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_family_has_exactly_one_generic() {
        for family in [Family::Book, Family::Medium, Family::Item] {
            let generics: Vec<_> = Variant::ALL
                .into_iter()
                .filter(|v| v.family() == family && v.is_generic())
                .collect();
            assert_eq!(generics, vec![Variant::generic(family)]);
        }
    }

    #[test]
    fn specific_variants_map_to_family() {
        assert_eq!(Variant::Ebook.family(), Family::Book);
        assert_eq!(Variant::Movie.family(), Family::Medium);
        assert_eq!(Variant::Toy.family(), Family::Item);
    }
}
