//! Full-width to half-width folding for Japanese input.

/// Offset between a full-width ASCII form and its half-width code point.
const FULLWIDTH_OFFSET: u32 = 0xFEE0;

/// Fold full-width Latin letters, digits, hyphens and the ideographic space
/// into their ASCII equivalents.
///
/// Everything else passes through untouched, so the function is total and
/// idempotent.
pub fn normalize_width(text: &str) -> String {
    text.chars().map(fold_char).collect()
}

fn fold_char(c: char) -> char {
    match c {
        'Ａ'..='Ｚ' | 'ａ'..='ｚ' | '０'..='９' => {
            char::from_u32(c as u32 - FULLWIDTH_OFFSET).unwrap_or(c)
        }
        // Full-width hyphen-minus and the mathematical minus sign
        '\u{FF0D}' | '\u{2212}' => '-',
        '\u{3000}' => ' ',
        _ => c,
    }
}
