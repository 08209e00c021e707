use anyhow::Result;
use serde::Serialize;
use serde_json::Value;
use seventeentrack_api::types::TrackResponse;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug, PartialEq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Self {
        match s {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            "markdown" | "md" => OutputFormat::Markdown,
            _ => OutputFormat::Table,
        }
    }
}

/// One row per accepted or rejected number of a mutation call.
#[derive(Tabled, Serialize)]
struct OutcomeRow {
    #[tabled(rename = "Outcome")]
    #[serde(rename = "Outcome")]
    outcome: String,
    #[tabled(rename = "Number")]
    #[serde(rename = "Number")]
    number: String,
    #[tabled(rename = "Carrier")]
    #[serde(rename = "Carrier")]
    carrier: String,
    #[tabled(rename = "Detail")]
    #[serde(rename = "Detail")]
    detail: String,
}

#[derive(Tabled, Serialize)]
struct InfoRow {
    #[tabled(rename = "Number")]
    #[serde(rename = "Number")]
    number: String,
    #[tabled(rename = "Carrier")]
    #[serde(rename = "Carrier")]
    carrier: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
    #[tabled(rename = "Sub-status")]
    #[serde(rename = "Sub-status")]
    sub_status: String,
    #[tabled(rename = "Latest event")]
    #[serde(rename = "Latest event")]
    latest_event: String,
    #[tabled(rename = "Event time")]
    #[serde(rename = "Event time")]
    event_time: String,
}

// -- Row builders --

fn build_outcome_rows(resp: &TrackResponse) -> Vec<OutcomeRow> {
    let accepted = resp.data.accepted.iter().map(|item| OutcomeRow {
        outcome: "accepted".to_string(),
        number: text_at(item, "/number"),
        carrier: text_at(item, "/carrier"),
        detail: text_at(item, "/tag"),
    });
    let rejected = resp.data.rejected.iter().map(|item| OutcomeRow {
        outcome: "rejected".to_string(),
        number: item.number.clone(),
        carrier: item
            .carrier
            .as_ref()
            .map(|c| c.to_string())
            .unwrap_or_default(),
        detail: item.reason(),
    });
    let errors = resp.data.errors.iter().map(|err| OutcomeRow {
        outcome: "error".to_string(),
        number: String::new(),
        carrier: String::new(),
        detail: format!("{} ({})", err.message, err.code),
    });
    accepted.chain(rejected).chain(errors).collect()
}

fn build_info_rows(records: &[Value]) -> Vec<InfoRow> {
    records
        .iter()
        .map(|r| InfoRow {
            number: text_at(r, "/number"),
            carrier: text_at(r, "/carrier"),
            status: text_at(r, "/track_info/latest_status/status"),
            sub_status: text_at(r, "/track_info/latest_status/sub_status"),
            latest_event: text_at(r, "/track_info/latest_event/description"),
            event_time: text_at(r, "/track_info/latest_event/time_iso"),
        })
        .collect()
}

/// Renders a JSON scalar at `pointer` as plain text; missing or null is empty.
fn text_at(value: &Value, pointer: &str) -> String {
    match value.pointer(pointer) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

// -- Rendering --

fn print_rows<R: Tabled + Serialize>(rows: Vec<R>, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", Table::new(rows)),
        OutputFormat::Markdown => {
            let mut table = Table::new(rows);
            table.with(Style::markdown());
            println!("{}", table);
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            for row in rows {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        }
        OutputFormat::Json => print_json(&rows),
    }
    Ok(())
}

/// Prints the response of a register/stop/retrack/... call. JSON output is
/// the verbatim response; other formats summarise accepted and rejected.
pub fn print_outcome(resp: &Value, format: &OutputFormat) -> Result<()> {
    if *format == OutputFormat::Json {
        print_json(resp);
        return Ok(());
    }
    match TrackResponse::from_value(resp.clone()) {
        Ok(parsed) => print_rows(build_outcome_rows(&parsed), format),
        Err(e) => {
            tracing::warn!("Unexpected response shape ({}), printing raw JSON", e);
            print_json(resp);
            Ok(())
        }
    }
}

pub fn print_track_info(resp: &TrackResponse, format: &OutputFormat) -> Result<()> {
    if *format == OutputFormat::Json {
        print_json(&resp.data.accepted);
    } else {
        print_rows(build_info_rows(&resp.data.accepted), format)?;
    }
    for rejected in &resp.data.rejected {
        eprintln!("{}: {}", rejected.number, rejected.reason());
    }
    Ok(())
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}
