//! Casing rules for categorical text.

/// Upper-case the first character of every space-separated word.
///
/// Splits on single spaces and rejoins with single spaces, so runs of spaces
/// survive unchanged. The rest of each word is left as is.
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for (idx, word) in value.split(' ').enumerate() {
        if idx > 0 {
            out.push(' ');
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

pub fn upper_case(value: &str) -> String {
    value.to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_cases_each_word() {
        assert_eq!(title_case("san marcos"), "San Marcos");
        assert_eq!(title_case("fireball"), "Fireball");
    }

    #[test]
    fn leaves_word_tails_alone() {
        assert_eq!(title_case("mcALLEN"), "McALLEN");
        assert_eq!(title_case("st. louis"), "St. Louis");
    }

    #[test]
    fn keeps_blank_and_repeated_spaces() {
        assert_eq!(title_case(""), "");
        assert_eq!(title_case("   "), "   ");
        assert_eq!(title_case("el  paso"), "El  Paso");
    }

    #[test]
    fn upper_cases_codes() {
        assert_eq!(upper_case("tx"), "TX");
        assert_eq!(upper_case("US"), "US");
    }
}
