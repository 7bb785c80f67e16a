pub mod remote;

/// Danish letters appended after Z, in keyboard order.
const DANISH_LETTERS: [char; 3] = ['Æ', 'Ø', 'Å'];

/// Highest digit tile on the numbers page.
const MAX_NUMBER: u32 = 10;

/// Letter tiles: A–Z followed by Æ, Ø, Å.
pub fn generate_alphabet() -> Vec<String> {
    ('A'..='Z')
        .chain(DANISH_LETTERS)
        .map(|letter| letter.to_string())
        .collect()
}

/// Number tiles: "0" through "10".
pub fn generate_numbers() -> Vec<String> {
    (0..=MAX_NUMBER).map(|n| n.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_has_latin_then_danish_letters() {
        let alphabet = generate_alphabet();
        assert_eq!(alphabet.len(), 29);
        assert_eq!(alphabet.first().map(String::as_str), Some("A"));
        assert_eq!(alphabet[25], "Z");
        assert_eq!(&alphabet[26..], ["Æ", "Ø", "Å"]);
    }

    #[test]
    fn test_alphabet_latin_part_is_ascending() {
        let alphabet = generate_alphabet();
        let latin: Vec<char> = alphabet[..26]
            .iter()
            .map(|l| l.chars().next().unwrap())
            .collect();
        assert!(latin.windows(2).all(|w| (w[0] as u32) + 1 == w[1] as u32));
    }

    #[test]
    fn test_alphabet_is_deterministic() {
        assert_eq!(generate_alphabet(), generate_alphabet());
    }

    #[test]
    fn test_numbers_zero_through_ten() {
        let numbers = generate_numbers();
        let expected: Vec<String> = [
            "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        assert_eq!(numbers, expected);
    }
}
