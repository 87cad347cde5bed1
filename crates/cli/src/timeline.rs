//! Scripted mutation timelines.
//!
//! A timeline stands in for a page that keeps rendering controls after the
//! initial fill: each step advances virtual time, adds controls to the page,
//! and reports the mutation batch to the session, exactly the calls a live
//! bridge would make. Useful for exercising the re-fill watcher end to end
//! without a browser.

use std::time::{Duration, Instant};

use serde::Deserialize;

use gridfill_dom::{AddedNode, FormElement, MutationBatch};
use gridfill_protocol::FillResult;
use gridfill_session::Session;

#[derive(Debug, Default, Deserialize)]
pub struct Timeline {
    pub steps: Vec<TimelineStep>,
}

#[derive(Debug, Deserialize)]
pub struct TimelineStep {
    /// Milliseconds after the initial fill.
    pub at_ms: u64,

    /// Controls that appear at this instant.
    #[serde(default)]
    pub add: Vec<FormElement>,

    /// Added-node summary reported to the watcher. When omitted, one node
    /// per added control.
    #[serde(default)]
    pub batch: Vec<AddedNode>,
}

/// Replay the timeline against a live session, firing deadlines in order,
/// and collect every re-fill the watcher releases.
pub fn replay(session: &mut Session, timeline: &Timeline, start: Instant) -> Vec<FillResult> {
    let mut refills = Vec::new();

    for step in &timeline.steps {
        let now = start + Duration::from_millis(step.at_ms);
        drain_until(session, now, &mut refills);

        let batch = if step.batch.is_empty() {
            MutationBatch::new(step.add.iter().map(|el| AddedNode::new(el.tag.clone())).collect())
        } else {
            MutationBatch::new(step.batch.clone())
        };
        for element in &step.add {
            session.page_mut().push_element(element.clone());
        }
        session.on_mutations(&batch, now);
    }

    // Run whatever is still scheduled to completion.
    while let Some(deadline) = session.next_deadline() {
        if let Some(result) = session.tick(deadline) {
            refills.push(result);
        }
    }
    refills
}

fn drain_until(session: &mut Session, upto: Instant, refills: &mut Vec<FillResult>) {
    while let Some(deadline) = session.next_deadline() {
        if deadline > upto {
            break;
        }
        if let Some(result) = session.tick(deadline) {
            refills.push(result);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridfill_config::WatcherSettings;
    use gridfill_dom::FormPage;
    use gridfill_protocol::{FillRequest, TargetSpec};
    use std::collections::BTreeMap;

    fn request() -> FillRequest {
        FillRequest {
            record: BTreeMap::from([
                ("A".to_string(), "1".to_string()),
                ("B".to_string(), "2".to_string()),
            ]),
            field_mapping: BTreeMap::from([
                ("A".to_string(), TargetSpec::One("a".to_string())),
                ("B".to_string(), TargetSpec::One("b".to_string())),
            ]),
            custom_overrides: None,
        }
    }

    #[test]
    fn late_control_gets_refilled_once() {
        let start = Instant::now();
        let mut session = Session::new(
            FormPage::new(vec![FormElement::text("a")]),
            WatcherSettings::default(),
        );
        session.handle_fill(request(), start);

        let timeline = Timeline {
            steps: vec![TimelineStep {
                at_ms: 500,
                add: vec![FormElement::text("b")],
                batch: vec![],
            }],
        };
        let refills = replay(&mut session, &timeline, start);

        assert_eq!(refills.len(), 1);
        assert_eq!(refills[0].filled_count, 2);
        assert_eq!(session.page().element(1).value, "2");
    }

    #[test]
    fn burst_steps_collapse_into_one_refill() {
        let start = Instant::now();
        let mut session = Session::new(
            FormPage::new(vec![FormElement::text("a"), FormElement::text("b")]),
            WatcherSettings::default(),
        );
        session.handle_fill(request(), start);

        let steps = (0..5)
            .map(|i| TimelineStep {
                at_ms: 100 + i * 50,
                add: vec![],
                batch: vec![AddedNode::new("input")],
            })
            .collect();
        let refills = replay(&mut session, &Timeline { steps }, start);

        assert_eq!(refills.len(), 1);
    }

    #[test]
    fn decoration_only_steps_trigger_nothing() {
        let start = Instant::now();
        let mut session = Session::new(
            FormPage::new(vec![FormElement::text("a")]),
            WatcherSettings::default(),
        );
        session.handle_fill(request(), start);

        let timeline = Timeline {
            steps: vec![TimelineStep {
                at_ms: 200,
                add: vec![],
                batch: vec![AddedNode::new("div")],
            }],
        };
        let refills = replay(&mut session, &timeline, start);
        assert!(refills.is_empty());
    }
}
