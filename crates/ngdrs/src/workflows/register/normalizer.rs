/// Strips invisible characters and collapses whitespace in a field name.
///
/// Case is preserved because detail keys are camelCase.
pub(crate) fn normalize_field_name(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}', '\u{00a0}'], " ");
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_invisible_characters_and_extra_spaces() {
        assert_eq!(normalize_field_name("\u{feff}FIR   Number "), "FIR Number");
        assert_eq!(normalize_field_name("fir\u{200b}No"), "fir No");
        assert_eq!(normalize_field_name("mloName"), "mloName");
    }
}
