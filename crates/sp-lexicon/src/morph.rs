//! Rule-based English inflection.
//!
//! Suffix rules for regular words. Irregular forms are handled by the
//! lookup tables in [`crate::TableLexicon`]; these functions are the
//! fallback when the tables miss.

use crate::pos::VerbForm;

fn ends_in_sibilant(word: &str) -> bool {
    word.ends_with('s')
        || word.ends_with('x')
        || word.ends_with('z')
        || word.ends_with("ch")
        || word.ends_with("sh")
}

fn ends_in_consonant_y(word: &str) -> bool {
    let mut chars = word.chars().rev();
    if chars.next() != Some('y') {
        return false;
    }
    match chars.next() {
        Some(c) => !"aeiou".contains(c),
        None => false,
    }
}

/// Pluralize a regular English noun.
pub fn pluralize(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }
    if ends_in_consonant_y(word) {
        format!("{}ies", &word[..word.len() - 1])
    } else if ends_in_sibilant(word) {
        format!("{word}es")
    } else {
        format!("{word}s")
    }
}

/// Singularize a regular English noun. Words that do not look plural are
/// returned unchanged.
pub fn singularize(word: &str) -> String {
    if let Some(stem) = word.strip_suffix("ies") {
        if !stem.is_empty() {
            return format!("{stem}y");
        }
    }
    if let Some(stem) = word.strip_suffix("es") {
        if ends_in_sibilant(stem) {
            return stem.to_string();
        }
    }
    if word.ends_with('s') && !word.ends_with("ss") && word.len() > 1 {
        return word[..word.len() - 1].to_string();
    }
    word.to_string()
}

/// Conjugate a regular English verb to the requested form.
pub fn conjugate(word: &str, form: VerbForm) -> String {
    if word.is_empty() {
        return String::new();
    }
    match form {
        VerbForm::Base | VerbForm::FirstSingular => word.to_string(),
        VerbForm::Past | VerbForm::PastParticiple => {
            if ends_in_consonant_y(word) {
                format!("{}ied", &word[..word.len() - 1])
            } else if word.ends_with('e') {
                format!("{word}d")
            } else {
                format!("{word}ed")
            }
        }
        VerbForm::PresentParticiple => {
            if word.ends_with('e') && !word.ends_with("ee") && word.len() > 1 {
                format!("{}ing", &word[..word.len() - 1])
            } else {
                format!("{word}ing")
            }
        }
        VerbForm::ThirdSingular => {
            if ends_in_consonant_y(word) {
                format!("{}ies", &word[..word.len() - 1])
            } else if ends_in_sibilant(word) {
                format!("{word}es")
            } else {
                format!("{word}s")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regular_plurals() {
        assert_eq!(pluralize("cat"), "cats");
        assert_eq!(pluralize("box"), "boxes");
        assert_eq!(pluralize("church"), "churches");
        assert_eq!(pluralize("baby"), "babies");
        assert_eq!(pluralize("day"), "days");
        assert_eq!(pluralize(""), "");
    }

    #[test]
    fn regular_singulars() {
        assert_eq!(singularize("cats"), "cat");
        assert_eq!(singularize("boxes"), "box");
        assert_eq!(singularize("babies"), "baby");
        assert_eq!(singularize("glass"), "glass");
        assert_eq!(singularize("cat"), "cat");
    }

    #[test]
    fn plural_singular_round_trip() {
        for word in ["cat", "box", "baby", "church", "day"] {
            assert_eq!(singularize(&pluralize(word)), word);
        }
    }

    #[test]
    fn regular_conjugation() {
        assert_eq!(conjugate("walk", VerbForm::Past), "walked");
        assert_eq!(conjugate("love", VerbForm::Past), "loved");
        assert_eq!(conjugate("carry", VerbForm::Past), "carried");
        assert_eq!(conjugate("walk", VerbForm::PresentParticiple), "walking");
        assert_eq!(conjugate("love", VerbForm::PresentParticiple), "loving");
        assert_eq!(conjugate("see", VerbForm::PresentParticiple), "seeing");
        assert_eq!(conjugate("walk", VerbForm::ThirdSingular), "walks");
        assert_eq!(conjugate("carry", VerbForm::ThirdSingular), "carries");
        assert_eq!(conjugate("pass", VerbForm::ThirdSingular), "passes");
        assert_eq!(conjugate("walk", VerbForm::Base), "walk");
        assert_eq!(conjugate("walk", VerbForm::FirstSingular), "walk");
    }
}
