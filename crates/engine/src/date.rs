use regex::Regex;

/// Rewrite `DD/MM/YYYY` (or `D/M/YYYY`, zero-padded) into ISO `YYYY-MM-DD`
/// for date inputs. Already-ISO strings and every other shape pass through
/// unchanged — the control decides what to do with what it gets, so this
/// never fails.
///
/// Shape-based on purpose: the rewrite rearranges digits without calendar
/// validation, so `31/02/2024` becomes `2024-02-31` exactly as entered.
pub fn convert_date_format(raw: &str) -> String {
    let padded = Regex::new(r"^(\d{2})/(\d{2})/(\d{4})$").unwrap();
    if let Some(c) = padded.captures(raw) {
        return format!("{}-{}-{}", &c[3], &c[2], &c[1]);
    }

    let short = Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{4})$").unwrap();
    if let Some(c) = short.captures(raw) {
        return format!("{}-{:0>2}-{:0>2}", &c[3], &c[2], &c[1]);
    }

    // ISO input falls through here untouched, like everything else.
    raw.to_string()
}
