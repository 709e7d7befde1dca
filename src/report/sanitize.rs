/// 치환 표. 두 글자 조합(⚠️)은 단일 글자보다 먼저 와야 한다.
const REPLACEMENTS: [(&str, &str); 19] = [
    ("\u{26a0}\u{fe0f}", "[!]"),
    ("\u{2014}", "--"),
    ("\u{2013}", "-"),
    ("\u{2018}", "'"),
    ("\u{2019}", "'"),
    ("\u{201c}", "\""),
    ("\u{201d}", "\""),
    ("\u{2026}", "..."),
    ("\u{00b2}", "2"),
    ("\u{2082}", "2"),
    ("\u{2248}", "~"),
    ("\u{00b0}", " deg"),
    ("\u{2022}", "*"),
    ("\u{20ac}", "EUR"),
    ("\u{00a3}", "GBP"),
    ("\u{2705}", "[OK]"),
    ("\u{26a0}", "[!]"),
    ("\u{2757}", "[!]"),
    ("\u{20b9}", "Rs."),
];

/// 인코딩할 수 없는 글자를 대신하는 문자.
pub const PLACEHOLDER: char = '?';

/// 보고서 내장 폰트(기본 라틴)가 그릴 수 있도록 문자열을 7비트 ASCII로 바꾼다.
///
/// 알려진 인쇄용 기호는 대응 문자열로 치환하고, 남은 비ASCII 글자는 `?`로 바꾼다.
pub fn sanitize_text(text: &str) -> String {
    let mut out = text.to_string();
    for (from, to) in REPLACEMENTS {
        if out.contains(from) {
            out = out.replace(from, to);
        }
    }
    out.chars()
        .map(|c| if c.is_ascii() { c } else { PLACEHOLDER })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_typographic_symbols() {
        assert_eq!(sanitize_text("a — b – c"), "a -- b - c");
        assert_eq!(sanitize_text("“quoted” ‘x’…"), "\"quoted\" 'x'...");
        assert_eq!(sanitize_text("120.0°C"), "120.0 degC");
        assert_eq!(sanitize_text("CO₂ ≈ 5 m²"), "CO2 ~ 5 m2");
        assert_eq!(sanitize_text("€1 £2 ₹3"), "EUR1 GBP2 Rs.3");
    }

    #[test]
    fn warning_glyph_consumes_variation_selector() {
        assert_eq!(sanitize_text("⚠️ hot"), "[!] hot");
        assert_eq!(sanitize_text("⚠ hot ✅ ❗"), "[!] hot [OK] [!]");
    }

    #[test]
    fn unknown_characters_become_placeholder() {
        assert_eq!(sanitize_text("배가스 ok"), "??? ok");
        assert!(sanitize_text("é").chars().all(|c| c.is_ascii()));
    }
}
