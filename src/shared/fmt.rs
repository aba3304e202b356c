//! Print formatting for Brazilian amounts, documents and postal codes.

use rust_decimal::Decimal;

/// Format an amount the way it is printed on a boleto: two decimal places,
/// `.` as thousands separator and `,` as decimal separator (`1.234,56`).
pub fn format_amount(value: &Decimal) -> String {
    let rounded = value.round_dp(2);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut out = String::with_capacity(text.len() + int_part.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    out.push(',');
    out.push_str(frac_part);
    out
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// `000.000.000-00`
pub fn format_cpf(number: u64) -> String {
    let d = format!("{:011}", number);
    format!("{}.{}.{}-{}", &d[..3], &d[3..6], &d[6..9], &d[9..])
}

/// `00.000.000/0000-00`
pub fn format_cnpj(number: u64) -> String {
    let d = format!("{:014}", number);
    format!(
        "{}.{}.{}/{}-{}",
        &d[..2],
        &d[2..5],
        &d[5..8],
        &d[8..12],
        &d[12..]
    )
}

/// `00000-000`
pub fn format_cep(cep: u32) -> String {
    let d = format!("{:08}", cep);
    format!("{}-{}", &d[..5], &d[5..])
}
