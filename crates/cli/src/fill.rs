//! `gridfill fill` / `gridfill targets` — drive the engine against a page
//! snapshot the way the bridge drives it against a live page.

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::time::Instant;

use serde::Serialize;

use gridfill_config::{MappingProfile, Settings};
use gridfill_dom::{FormPage, TargetCategory};
use gridfill_protocol::{FillRequest, FillResult};
use gridfill_session::Session;

use crate::error::{CliError, EXIT_NOTHING_FILLED, EXIT_SUCCESS};
use crate::record::load_record;
use crate::timeline::{replay, Timeline};

/// Everything one `fill` run produced. Without a timeline the report is just
/// the initial result, printed bare for bridge parity.
#[derive(Debug, Serialize)]
struct FillReport {
    initial: FillResult,
    refills: Vec<FillResult>,
}

pub fn cmd_fill(
    page_path: &Path,
    record_path: &Path,
    profile_path: &Path,
    timeline_path: Option<&Path>,
    pretty: bool,
) -> Result<u8, CliError> {
    let page: FormPage = serde_json::from_str(&read(page_path)?)
        .map_err(|e| CliError::parse(format!("{}: {e}", page_path.display())))?;
    log::debug!("page snapshot: {} control(s)", page.len());
    let record = load_record(&read(record_path)?)?;
    let profile = MappingProfile::from_toml(&read(profile_path)?)
        .map_err(|e| CliError::parse(format!("{}: {e}", profile_path.display())))?;

    let request = FillRequest {
        record,
        field_mapping: profile.mapping(),
        custom_overrides: profile.custom_fields(),
    };

    let mut session = Session::new(page, Settings::load().watcher);
    let start = Instant::now();
    let initial = session.handle_fill(request, start);

    let refills = match timeline_path {
        Some(path) => {
            let timeline: Timeline = serde_json::from_str(&read(path)?)
                .map_err(|e| CliError::parse(format!("{}: {e}", path.display())))?;
            replay(&mut session, &timeline, start)
        }
        None => Vec::new(),
    };

    let filled_something = initial.success || refills.iter().any(|r| r.success);

    if timeline_path.is_some() {
        print_json(&FillReport { initial, refills }, pretty)?;
    } else {
        print_json(&initial, pretty)?;
    }

    Ok(if filled_something { EXIT_SUCCESS } else { EXIT_NOTHING_FILLED })
}

pub fn cmd_targets(page_path: &Path) -> Result<u8, CliError> {
    let page: FormPage = serde_json::from_str(&read(page_path)?)
        .map_err(|e| CliError::parse(format!("{}: {e}", page_path.display())))?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    for element in &page.elements {
        writeln!(handle, "{}\t{}", element.name, TargetCategory::of(element))
            .map_err(|e| CliError::io(e.to_string()))?;
    }
    Ok(EXIT_SUCCESS)
}

fn read(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|e| CliError::io(format!("{}: {e}", path.display())))
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<(), CliError> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .map_err(|e| CliError::parse(e.to_string()))?;
    println!("{json}");
    Ok(())
}
