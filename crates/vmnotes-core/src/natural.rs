//! Case-insensitive, numeric-aware string ordering
//!
//! `"Debian 9" < "Debian 12"` and `"ubuntu" == "Ubuntu"`. Used to sort
//! pick-list rows by label.

use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

/// Compare two labels the way a person would sort them.
///
/// Leading and trailing whitespace is ignored, letters compare without regard
/// to case and runs of ASCII digits compare by numeric value.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = a.trim().chars().peekable();
    let mut right = b.trim().chars().peekable();

    loop {
        match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) if l.is_ascii_digit() && r.is_ascii_digit() => {
                let ln = take_number(&mut left);
                let rn = take_number(&mut right);
                match compare_digits(&ln, &rn) {
                    Ordering::Equal => {}
                    other => return other,
                }
            }
            (Some(l), Some(r)) => {
                let ord = l.to_lowercase().cmp(r.to_lowercase());
                if ord != Ordering::Equal {
                    return ord;
                }
                left.next();
                right.next();
            }
        }
    }
}

fn take_number(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut digits = String::new();
    while let Some(c) = chars.peek().copied() {
        if !c.is_ascii_digit() {
            break;
        }
        digits.push(c);
        chars.next();
    }
    digits
}

/// Compare digit strings of any length without overflowing
fn compare_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
