// Classification of raw records into product variants
//
// An ordered rule list is evaluated top-down and the first match wins.
// Media rules come before book rules, so a record carrying both audio-like
// and book-like signals resolves to the media variant.

use crate::models::record::fields;
use crate::models::{Family, RawRecord, Variant};

/// Discriminator fields consulted by a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Signal {
    Segment,
    Binding,
}

struct Rule {
    signal: Signal,
    codes: &'static [&'static str],
    variant: Variant,
}

const fn rule(signal: Signal, codes: &'static [&'static str], variant: Variant) -> Rule {
    Rule {
        signal,
        codes,
        variant,
    }
}

static RULES: &[Rule] = &[
    // Media by trade segment
    rule(Signal::Segment, &["AC"], Variant::Audiobook),
    rule(Signal::Segment, &["AM"], Variant::Music),
    rule(Signal::Segment, &["AT"], Variant::Sound),
    rule(Signal::Segment, &["AV"], Variant::Movie),
    // Media by binding
    rule(Signal::Binding, &["DVD", "BLU"], Variant::Movie),
    rule(Signal::Binding, &["MP3"], Variant::Audiobook),
    rule(Signal::Binding, &["CD", "MC", "LP"], Variant::Sound),
    // E-books
    rule(Signal::Segment, &["EB"], Variant::Ebook),
    rule(Signal::Binding, &["EPUB", "PDF"], Variant::Ebook),
    // Non-book items
    rule(Signal::Segment, &["KA"], Variant::Calendar),
    rule(Signal::Binding, &["KAL"], Variant::Calendar),
    rule(Signal::Segment, &["LK"], Variant::Map),
    rule(Signal::Binding, &["KTE"], Variant::Map),
    rule(Signal::Segment, &["SP"], Variant::Toy),
    rule(Signal::Binding, &["SPL"], Variant::Toy),
    rule(Signal::Segment, &["NB"], Variant::Nonbook),
    // Books
    rule(Signal::Segment, &["SB"], Variant::Schoolbook),
    rule(Signal::Segment, &["HC"], Variant::Hardcover),
    rule(Signal::Segment, &["TB"], Variant::Softcover),
    rule(
        Signal::Binding,
        &["GEB", "LN", "PP", "HLN", "HLD"],
        Variant::Hardcover,
    ),
    rule(
        Signal::Binding,
        &["KT", "BRO", "TB", "SPIR"],
        Variant::Softcover,
    ),
];

/// Normalized discriminator values of one record
struct Signals {
    segment: Option<String>,
    binding: Option<String>,
    edition_form: Option<char>,
}

impl Signals {
    fn read(record: &RawRecord) -> Self {
        let normalize = |code: &str| record.text(code).map(str::to_uppercase);

        Self {
            segment: normalize(fields::SEGMENT),
            binding: normalize(fields::BINDING),
            edition_form: record
                .text(fields::PRODUCT_GROUP)
                .and_then(|group| group.chars().next())
                .filter(char::is_ascii_digit),
        }
    }

    fn get(&self, signal: Signal) -> Option<&str> {
        match signal {
            Signal::Segment => self.segment.as_deref(),
            Signal::Binding => self.binding.as_deref(),
        }
    }
}

/// Map a raw record to exactly one variant. Total and pure.
pub fn classify(record: &RawRecord) -> Variant {
    let signals = Signals::read(record);

    let variant = RULES
        .iter()
        .find(|rule| {
            signals
                .get(rule.signal)
                .is_some_and(|value| rule.codes.contains(&value))
        })
        .map(|rule| rule.variant)
        .unwrap_or_else(|| Variant::generic(fallback_family(&signals)));

    tracing::debug!(
        "Classified record (segment={:?}, binding={:?}, group={:?}) as {:?}",
        signals.segment,
        signals.binding,
        signals.edition_form,
        variant
    );

    variant
}

/// Nearest generic ancestor from the product group's edition form digit
fn fallback_family(signals: &Signals) -> Family {
    match signals.edition_form {
        Some('1'..='3') => Family::Book,
        Some('4' | '5') => Family::Medium,
        _ => Family::Item,
    }
}
