// src/core/sanitize.rs

/// Integral floats print without the trailing `.0` a spreadsheet never shows.
pub fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

/// Case-insensitive containment. `to_lowercase` rather than ASCII folding
/// so accented labels (`Réputation`, `ÉLEVÉ`) compare correctly.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Column number (1-based) to letters: 1 → A, 27 → AA.
pub fn col_letter(mut col: u32) -> String {
    let mut out = Vec::new();
    while col > 0 {
        let rem = ((col - 1) % 26) as u8;
        out.push(b'A' + rem);
        col = (col - 1) / 26;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

/// Letters to column number (1-based). `None` for anything but ASCII letters.
pub fn col_index(letters: &str) -> Option<u32> {
    let letters = letters.trim();
    if letters.is_empty() { return None; }
    let mut n: u32 = 0;
    for ch in letters.chars() {
        if !ch.is_ascii_alphabetic() { return None; }
        let v = (ch.to_ascii_uppercase() as u8 - b'A' + 1) as u32;
        n = n.checked_mul(26)?.checked_add(v)?;
    }
    Some(n)
}

/// Parse an A1 reference like `E27` into (row, col).
pub fn parse_a1(s: &str) -> Option<(u32, u32)> {
    let s = s.trim();
    let split = s.find(|c: char| c.is_ascii_digit())?;
    let col = col_index(&s[..split])?;
    let row: u32 = s[split..].parse().ok()?;
    if row == 0 { return None; }
    Some((row, col))
}

/// Parse `A8:E27` into ((start_row, start_col), (end_row, end_col)).
pub fn parse_range(s: &str) -> Option<((u32, u32), (u32, u32))> {
    let (a, b) = s.split_once(':')?;
    Some((parse_a1(a)?, parse_a1(b)?))
}
