use gridfill_dom::{EventKind, FormPage, ResolvedTarget, TargetCategory};

use crate::date::convert_date_format;
use crate::error::FillError;
use crate::select::match_option;

/// Values that check a checkbox. Anything else — including empty — unchecks.
const AFFIRMATIVE: &[&str] = &["o", "oui", "yes", "true", "1", "on", "checked"];

/// Apply one raw value to one resolved target, dispatching on its category.
///
/// After a mutating assignment the element gets the synthetic notification
/// sequence host frameworks listen for: `input`, `change`, `blur` for
/// free-text controls; `change`, `blur` for everything else (an `input`
/// event carries no meaning there).
pub fn apply_value(page: &mut FormPage, target: &ResolvedTarget, raw: &str) -> Result<(), FillError> {
    match target.category {
        TargetCategory::TextLike | TargetCategory::TextArea => {
            page.set_value(target.index, raw);
            dispatch_text_events(page, target.index);
            Ok(())
        }

        TargetCategory::Select => {
            let matched = match_option(&page.element(target.index).options, raw);
            match matched {
                Some(i) => {
                    // The select's value becomes the matched option's value,
                    // even when the match came from its visible text.
                    let value = page.element(target.index).options[i].value.clone();
                    page.set_value(target.index, &value);
                    dispatch_change_events(page, target.index);
                    Ok(())
                }
                None => Err(FillError::NoMatchingOption),
            }
        }

        TargetCategory::Checkbox => {
            let checked = AFFIRMATIVE.contains(&raw.to_lowercase().as_str());
            page.set_checked(target.index, checked);
            dispatch_change_events(page, target.index);
            Ok(())
        }

        TargetCategory::Radio => {
            // Full case-sensitive scan over the sibling set before any
            // case-insensitive fallback, so an exact hit late in document
            // order beats a case-folded hit earlier.
            let hit = target
                .radio_group
                .iter()
                .copied()
                .find(|&i| page.element(i).value == raw)
                .or_else(|| {
                    let lower = raw.to_lowercase();
                    target
                        .radio_group
                        .iter()
                        .copied()
                        .find(|&i| page.element(i).value.to_lowercase() == lower)
                });
            match hit {
                Some(i) => {
                    page.set_checked(i, true);
                    dispatch_change_events(page, i);
                    Ok(())
                }
                None => Err(FillError::NoMatchingRadio),
            }
        }

        TargetCategory::Date => {
            let converted = convert_date_format(raw);
            page.set_value(target.index, &converted);
            dispatch_change_events(page, target.index);
            Ok(())
        }

        TargetCategory::Hidden => {
            page.set_value(target.index, raw);
            dispatch_change_events(page, target.index);
            Ok(())
        }

        TargetCategory::Unsupported => {
            let element = page.element(target.index);
            Err(FillError::UnsupportedType {
                tag: element.tag.clone(),
                input_type: element.input_type.clone().unwrap_or_else(|| "text".into()),
            })
        }
    }
}

fn dispatch_text_events(page: &mut FormPage, index: usize) {
    page.dispatch(index, EventKind::Input);
    page.dispatch(index, EventKind::Change);
    page.dispatch(index, EventKind::Blur);
}

fn dispatch_change_events(page: &mut FormPage, index: usize) {
    page.dispatch(index, EventKind::Change);
    page.dispatch(index, EventKind::Blur);
}
