//! Input masks for Brazilian phone numbers, CEP and CNPJ.
//!
//! Display formatting only: the functions strip everything that is not a
//! digit and re-apply the punctuation, so already-masked input passes
//! through unchanged. The validation layer still decides what is
//! acceptable.

/// `(XX) XXXXX-XXXX`, capped at 11 digits.
pub fn format_phone(value: &str) -> String {
    let digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
    match digits.len() {
        0 => String::new(),
        1..=2 => format!("({}", digits),
        3..=7 => format!("({}) {}", &digits[..2], &digits[2..]),
        8..=11 => {
            let line_end = digits.len().min(11);
            format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..line_end])
        }
        _ => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..11]),
    }
}

/// Company phone: landlines keep the 4-digit prefix (`(XX) XXXX-XXXX`),
/// 11-digit mobiles get the 5-digit one.
pub fn format_company_phone(value: &str) -> String {
    let digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
    match digits.len() {
        0 => String::new(),
        1..=2 => format!("({}", digits),
        3..=6 => format!("({}) {}", &digits[..2], &digits[2..]),
        7..=10 => format!("({}) {}-{}", &digits[..2], &digits[2..6], &digits[6..]),
        _ => {
            let end = digits.len().min(11);
            format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..end])
        }
    }
}

/// `XXXXX-XXX`, capped at 8 digits.
pub fn format_cep(value: &str) -> String {
    let digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() <= 5 {
        digits
    } else {
        let end = digits.len().min(8);
        format!("{}-{}", &digits[..5], &digits[5..end])
    }
}

/// `XX.XXX.XXX/XXXX-XX`, capped at 14 digits.
pub fn format_cnpj(value: &str) -> String {
    let digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
    match digits.len() {
        0..=2 => digits,
        3..=5 => format!("{}.{}", &digits[..2], &digits[2..]),
        6..=8 => format!("{}.{}.{}", &digits[..2], &digits[2..5], &digits[5..]),
        9..=12 => format!(
            "{}.{}.{}/{}",
            &digits[..2],
            &digits[2..5],
            &digits[5..8],
            &digits[8..]
        ),
        _ => {
            let end = digits.len().min(14);
            format!(
                "{}.{}.{}/{}-{}",
                &digits[..2],
                &digits[2..5],
                &digits[5..8],
                &digits[8..12],
                &digits[12..end]
            )
        }
    }
}
