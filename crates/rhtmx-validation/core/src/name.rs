//! Personal name normalization

use crate::string::capitalize_words_except;

/// Lowercase particles kept uncapitalized inside personal names
/// (Spanish, English, French, Portuguese, Italian, German, Dutch)
pub const NAME_PARTICLES: &[&str] = &[
    "de", "del", "la", "las", "los", "y", "van", "von", "of", "and", "the", "du", "des", "le",
    "les", "et", "à", "au", "aux", "da", "do", "das", "dos", "e", "em", "ao", "aos", "na", "nos",
    "di", "della", "dei", "degli", "in", "al", "allo", "zu", "zum", "zur", "am", "im", "der",
    "die", "und", "bei", "den", "het", "en", "te", "op", "aan",
];

/// Capitalizes a personal name, keeping particles such as "de" or "van" lowercase
pub fn real_person_name(value: &str) -> String {
    capitalize_words_except(value, NAME_PARTICLES)
}
