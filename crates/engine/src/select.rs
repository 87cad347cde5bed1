use gridfill_dom::SelectOption;

/// Find the option a raw value selects. Six passes, strictest first; the
/// first pass that yields a hit wins and within a pass the first option in
/// document order wins.
///
/// Heterogeneous forms are inconsistent about whether the meaningful token
/// lives in the option value or its visible text, so exact passes try both
/// before anything fuzzy. Passes 5–6 are substring matches in either
/// direction and can land on an unintended option when the vocabulary is
/// ambiguous ("Paris" also matches "Paris Nord"); that trade is accepted —
/// the strict passes always take priority, so unambiguous inputs never reach
/// the fuzzy ones.
///
/// The needle for passes 3–6 is the raw value lower-cased then trimmed; the
/// option side in passes 5–6 is lower-cased but not trimmed.
pub fn match_option(options: &[SelectOption], raw: &str) -> Option<usize> {
    let needle = raw.to_lowercase();
    let needle = needle.trim();

    // 1. Exact match on value
    if let Some(i) = options.iter().position(|o| o.value == raw) {
        return Some(i);
    }

    // 2. Exact match on text
    if let Some(i) = options.iter().position(|o| o.text == raw) {
        return Some(i);
    }

    // 3. Case-insensitive trimmed match on value
    if let Some(i) = options.iter().position(|o| o.value.to_lowercase().trim() == needle) {
        return Some(i);
    }

    // 4. Case-insensitive trimmed match on text
    if let Some(i) = options.iter().position(|o| o.text.to_lowercase().trim() == needle) {
        return Some(i);
    }

    // 5. Substring match on text, either direction
    if let Some(i) = options.iter().position(|o| {
        let text = o.text.to_lowercase();
        text.contains(needle) || needle.contains(text.as_str())
    }) {
        return Some(i);
    }

    // 6. Substring match on value, either direction
    if let Some(i) = options.iter().position(|o| {
        let value = o.value.to_lowercase();
        value.contains(needle) || needle.contains(value.as_str())
    }) {
        return Some(i);
    }

    None
}
