/// Maps a French postal code to its department code: the first two digits,
/// except Corsica where 20000..20199 is "2A" and 20200.. is "2B".
pub fn postal_code_to_department(postal_code: &str) -> Option<String> {
    let code = postal_code.trim();
    if code.len() < 2 || !code.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    if code.starts_with("20") {
        let n: u32 = code.parse().ok()?;
        return Some(if n < 20200 { "2A".to_string() } else { "2B".to_string() });
    }

    Some(code[..2].to_string())
}
