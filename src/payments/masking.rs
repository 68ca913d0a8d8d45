use lazy_static::lazy_static;
use regex::Regex;

pub const MASK_CHAR: &str = "*";

/// Number of trailing characters left readable.
const VISIBLE_TAIL: usize = 4;

/// Masks every ASCII digit outside the last four characters.
///
/// Values of four characters or fewer come back unchanged. Non-digit
/// characters in the masked part are kept as they are.
pub fn mask_account_number(raw: &str) -> String {
    lazy_static! {
        static ref DIGIT_RE: Regex = Regex::new(r"[0-9]").unwrap();
    }

    let len = raw.chars().count();
    if len <= VISIBLE_TAIL {
        return raw.to_string();
    }

    let split = raw
        .char_indices()
        .nth(len - VISIBLE_TAIL)
        .map(|(i, _)| i)
        .unwrap_or(raw.len());
    let (head, tail) = raw.split_at(split);
    format!("{}{}", DIGIT_RE.replace_all(head, MASK_CHAR), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_all_but_last_four_digits() {
        assert_eq!(mask_account_number("1234567890123"), "*********0123");
    }

    #[test]
    fn short_values_are_not_masked() {
        assert_eq!(mask_account_number("123"), "123");
        assert_eq!(mask_account_number("1234"), "1234");
        assert_eq!(mask_account_number(""), "");
    }

    #[test]
    fn five_characters_masks_only_the_first() {
        assert_eq!(mask_account_number("98765"), "*8765");
    }

    #[test]
    fn non_digits_pass_through() {
        assert_eq!(mask_account_number("ab12-3456-7890"), "ab**-****-7890");
        assert_eq!(mask_account_number("user@upi"), "user@upi");
    }

    #[test]
    fn tail_is_counted_in_characters() {
        assert_eq!(mask_account_number("12€€€€"), "**€€€€");
    }
}
