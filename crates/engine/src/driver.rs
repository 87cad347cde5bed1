use gridfill_dom::FormPage;
use gridfill_protocol::{CustomFields, FieldMapping, FillResult, Record};

use crate::apply::apply_value;
use crate::error::FillError;

/// Fill a page from a record routed through a mapping, plus optional custom
/// overrides, and aggregate every per-target outcome.
///
/// Containment is the rule: a malformed or missing target records a failure
/// reason and the loop continues. Nothing in here aborts a fill pass.
pub fn fill(
    page: &mut FormPage,
    record: &Record,
    mapping: &FieldMapping,
    custom: Option<&CustomFields>,
) -> FillResult {
    let mut filled = Vec::new();
    let mut errors = Vec::new();

    for (label, spec) in mapping {
        // An absent or empty value means "leave the field alone", not
        // "fill with empty string".
        let Some(value) = record.get(label).filter(|v| !v.is_empty()) else {
            continue;
        };

        for target in spec.targets() {
            if target.trim().is_empty() {
                continue;
            }
            match fill_one(page, target, value) {
                Ok(()) => filled.push(format!("{label} → {target}")),
                Err(err) => errors.push(describe_failure(label, target, &err)),
            }
        }
    }

    if let Some(custom) = custom {
        for (target, value) in custom {
            if target.trim().is_empty() || value.is_empty() {
                continue;
            }
            match fill_one(page, target, value) {
                Ok(()) => filled.push(format!("custom:{target}")),
                Err(err) => errors.push(describe_custom_failure(target, &err)),
            }
        }
    }

    FillResult::from_parts(filled, errors)
}

fn fill_one(page: &mut FormPage, target: &str, value: &str) -> Result<(), FillError> {
    let resolved = page
        .resolve(target)
        .ok_or_else(|| FillError::TargetNotFound(target.to_string()))?;
    apply_value(page, &resolved, value)
}

fn describe_failure(label: &str, target: &str, err: &FillError) -> String {
    match err {
        // The reason already names the target.
        FillError::TargetNotFound(_) => err.to_string(),
        _ => format!("{label} → {target}: {err}"),
    }
}

fn describe_custom_failure(target: &str, err: &FillError) -> String {
    match err {
        FillError::TargetNotFound(_) => err.to_string(),
        _ => format!("custom:{target}: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridfill_dom::FormElement;
    use gridfill_protocol::TargetSpec;
    use std::collections::BTreeMap;

    fn record(pairs: &[(&str, &str)]) -> Record {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    fn mapping(pairs: &[(&str, TargetSpec)]) -> FieldMapping {
        pairs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
    }

    #[test]
    fn fan_out_with_one_missing_target() {
        let mut page = FormPage::new(vec![FormElement::text("x"), FormElement::text("z")]);
        let record = record(&[("A", "1"), ("B", "2")]);
        let mapping = mapping(&[
            ("A", TargetSpec::One("x".into())),
            ("B", TargetSpec::Many(vec!["y".into(), "z".into()])),
        ]);

        let result = fill(&mut page, &record, &mapping, None);

        assert!(result.success);
        assert_eq!(result.filled_count, 2);
        assert_eq!(result.filled, vec!["A → x", "B → z"]);
        let errors = result.errors.unwrap();
        assert_eq!(errors, vec!["input not found: y"]);
        assert_eq!(page.element(0).value, "1");
        assert_eq!(page.element(1).value, "2");
    }

    #[test]
    fn absent_and_empty_values_skip_the_label() {
        let mut page = FormPage::new(vec![FormElement::text("x"), FormElement::text("y")]);
        let record = record(&[("A", "")]);
        let mapping = mapping(&[
            ("A", TargetSpec::One("x".into())),
            ("B", TargetSpec::One("y".into())),
        ]);

        let result = fill(&mut page, &record, &mapping, None);

        assert!(!result.success);
        assert_eq!(result.filled_count, 0);
        // Skipped, not failed.
        assert_eq!(result.errors, None);
        assert_eq!(result.error, None);
    }

    #[test]
    fn blank_target_identifiers_are_skipped() {
        let mut page = FormPage::new(vec![FormElement::text("x")]);
        let record = record(&[("A", "1")]);
        let mapping = mapping(&[(
            "A",
            TargetSpec::Many(vec!["".into(), "   ".into(), "x".into()]),
        )]);

        let result = fill(&mut page, &record, &mapping, None);

        assert_eq!(result.filled_count, 1);
        assert_eq!(result.errors, None);
    }

    #[test]
    fn failure_on_one_target_never_blocks_siblings() {
        let mut page = FormPage::new(vec![
            FormElement::input_of("bad", "file"),
            FormElement::text("good"),
        ]);
        let record = record(&[("A", "1")]);
        let mapping = mapping(&[(
            "A",
            TargetSpec::Many(vec!["bad".into(), "good".into()]),
        )]);

        let result = fill(&mut page, &record, &mapping, None);

        assert_eq!(result.filled, vec!["A → good"]);
        assert_eq!(
            result.errors.unwrap(),
            vec!["A → bad: unsupported input type: input (file)"]
        );
    }

    #[test]
    fn custom_fields_merge_into_the_same_result() {
        let mut page = FormPage::new(vec![FormElement::text("x"), FormElement::hidden("token")]);
        let record = record(&[("A", "1")]);
        let mapping = mapping(&[("A", TargetSpec::One("x".into()))]);
        let custom: CustomFields = BTreeMap::from([
            ("token".to_string(), "abc".to_string()),
            ("ghost".to_string(), "1".to_string()),
        ]);

        let result = fill(&mut page, &record, &mapping, Some(&custom));

        assert!(result.success);
        assert_eq!(result.filled_count, 2);
        assert_eq!(result.filled, vec!["A → x", "custom:token"]);
        assert_eq!(result.errors.unwrap(), vec!["input not found: ghost"]);
        assert_eq!(page.element(1).value, "abc");
    }

    #[test]
    fn custom_fields_alone_can_carry_the_pass() {
        let mut page = FormPage::new(vec![FormElement::hidden("token")]);
        let custom: CustomFields = BTreeMap::from([("token".to_string(), "abc".to_string())]);

        let result = fill(&mut page, &Record::new(), &FieldMapping::new(), Some(&custom));

        assert!(result.success);
        assert_eq!(result.filled, vec!["custom:token"]);
    }

    #[test]
    fn display_error_truncates_to_first_three() {
        let mut page = FormPage::new(vec![]);
        let record = record(&[("A", "1")]);
        let mapping = mapping(&[(
            "A",
            TargetSpec::Many(vec!["a".into(), "b".into(), "c".into(), "d".into()]),
        )]);

        let result = fill(&mut page, &record, &mapping, None);

        assert_eq!(result.errors.as_ref().map(Vec::len), Some(4));
        assert_eq!(
            result.error.as_deref(),
            Some("input not found: a, input not found: b, input not found: c")
        );
    }

    #[test]
    fn repeat_fill_is_idempotent_on_stable_dom() {
        let mut page = FormPage::new(vec![FormElement::text("x"), FormElement::text("z")]);
        let record = record(&[("A", "1"), ("B", "2")]);
        let mapping = mapping(&[
            ("A", TargetSpec::One("x".into())),
            ("B", TargetSpec::Many(vec!["y".into(), "z".into()])),
        ]);

        let first = fill(&mut page, &record, &mapping, None);
        let second = fill(&mut page, &record, &mapping, None);

        assert_eq!(first.filled_count, second.filled_count);
        assert_eq!(first.filled, second.filled);
        assert_eq!(first.errors, second.errors);
    }
}
