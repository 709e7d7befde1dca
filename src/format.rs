//! 보고서/요약문용 숫자 서식.

/// 천 단위 구분 쉼표를 넣어 고정 소수 자리로 서식화한다. (`1234567.8` → `1,234,567.80`)
pub fn format_thousands(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return format!("{value}");
    }
    let raw = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (raw.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    // 반올림 결과가 0이면 부호를 붙이지 않는다
    let is_zero = raw.chars().all(|c| c == '0' || c == '.');
    let mut out = String::new();
    if value < 0.0 && !is_zero {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::format_thousands;

    #[test]
    fn groups_digits() {
        assert_eq!(format_thousands(1_234_567.891, 2), "1,234,567.89");
        assert_eq!(format_thousands(999.0, 0), "999");
        assert_eq!(format_thousands(1000.0, 0), "1,000");
        assert_eq!(format_thousands(-12_345.5, 1), "-12,345.5");
        assert_eq!(format_thousands(-0.001, 1), "0.0");
    }
}
