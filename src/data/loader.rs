use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::{Map, Value as JsonValue};

use super::error::{LoadError, SchemaError};
use super::model::{DisasterDataset, DisasterEvent};
use crate::config::DashboardConfig;

/// Columns every source must provide, in canonical order.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "date",
    "disaster_type",
    "response_time_hours",
    "casualties",
    "severity_index",
    "recovery_days",
];

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];
const DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the configured source table. Called once at startup; the caller
/// owns the result for the rest of the process.
pub fn load(config: &DashboardConfig) -> Result<DisasterDataset, LoadError> {
    load_file(&config.data_path)
}

/// Load a disaster table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row, one event per record
/// * `.json` – `[{ "date": "...", "disaster_type": "...", ... }, ...]`
pub fn load_file(path: &Path) -> Result<DisasterDataset, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let unavailable = |source| LoadError::DataSourceUnavailable {
        path: path.to_path_buf(),
        source,
    };

    log::debug!("loading {} as '{ext}'", path.display());

    let dataset = match ext.as_str() {
        "csv" => {
            let file = File::open(path).map_err(unavailable)?;
            from_csv_reader(BufReader::new(file))?
        }
        "json" => {
            let text = std::fs::read_to_string(path).map_err(unavailable)?;
            from_json_str(&text)?
        }
        other => return Err(SchemaError::UnsupportedFormat(other.to_string()).into()),
    };

    log::info!(
        "Loaded {} events ({} disaster types, years {:?}) from {}",
        dataset.len(),
        dataset.disaster_types().len(),
        dataset.year_bounds(),
        path.display()
    );
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Parse a delimited table with a header row. Every cell is also kept as
/// read, in header order, for the preview.
pub fn from_csv_reader<R: Read>(source: R) -> Result<DisasterDataset, SchemaError> {
    let mut reader = csv::Reader::from_reader(source);
    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| SchemaError::Malformed {
            row: None,
            message: e.to_string(),
        })?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut required_idx = [0usize; REQUIRED_COLUMNS.len()];
    for (slot, name) in required_idx.iter_mut().zip(REQUIRED_COLUMNS) {
        *slot = headers
            .iter()
            .position(|h| h == name)
            .ok_or(SchemaError::MissingColumn(name))?;
    }

    let mut events = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.map_err(|e| SchemaError::Malformed {
            row: Some(row_no),
            message: e.to_string(),
        })?;

        let cells: [&str; REQUIRED_COLUMNS.len()] =
            required_idx.map(|i| record.get(i).unwrap_or(""));
        let source_cells = record.iter().map(str::to_string).collect();

        events.push(parse_event(row_no, cells)?.with_source_cells(source_cells));
    }

    Ok(DisasterDataset::from_events(events, headers))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, `df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "date": "2020-03-14", "disaster_type": "Flood",
///     "response_time_hours": 12.5, "casualties": 3,
///     "severity_index": 4.2, "recovery_days": 40, "country": "Chile" },
///   ...
/// ]
/// ```
pub fn from_json_str(text: &str) -> Result<DisasterDataset, SchemaError> {
    let root: JsonValue = serde_json::from_str(text).map_err(|e| SchemaError::Malformed {
        row: None,
        message: e.to_string(),
    })?;

    let records = root.as_array().ok_or_else(|| SchemaError::Malformed {
        row: None,
        message: "expected top-level JSON array".to_string(),
    })?;

    let objects = records
        .iter()
        .enumerate()
        .map(|(i, rec)| {
            rec.as_object().ok_or_else(|| SchemaError::Malformed {
                row: Some(i),
                message: "record is not a JSON object".to_string(),
            })
        })
        .collect::<Result<Vec<&Map<String, JsonValue>>, _>>()?;

    // Union of keys in first-seen order; a key absent from one record reads
    // as a blank cell there.
    let mut columns: Vec<String> = Vec::new();
    for obj in &objects {
        for key in obj.keys() {
            if !columns.contains(key) {
                columns.push(key.clone());
            }
        }
    }
    if !objects.is_empty() {
        if let Some(name) = REQUIRED_COLUMNS
            .into_iter()
            .find(|name| !columns.iter().any(|c| c == name))
        {
            return Err(SchemaError::MissingColumn(name));
        }
    }

    let mut events = Vec::with_capacity(objects.len());

    for (row_no, obj) in objects.iter().enumerate() {
        let texts: [String; REQUIRED_COLUMNS.len()] =
            REQUIRED_COLUMNS.map(|name| obj.get(name).map(json_cell_text).unwrap_or_default());
        let cells: [&str; REQUIRED_COLUMNS.len()] = std::array::from_fn(|i| texts[i].as_str());

        let source_cells = columns
            .iter()
            .map(|col| obj.get(col).map(json_cell_text).unwrap_or_default())
            .collect();

        events.push(parse_event(row_no, cells)?.with_source_cells(source_cells));
    }

    Ok(DisasterDataset::from_events(events, columns))
}

fn json_cell_text(val: &JsonValue) -> String {
    match val {
        JsonValue::String(s) => s.clone(),
        JsonValue::Null => String::new(),
        other => other.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Cell parsing
// ---------------------------------------------------------------------------

/// `cells` follows the order of [`REQUIRED_COLUMNS`].
fn parse_event(
    row: usize,
    cells: [&str; REQUIRED_COLUMNS.len()],
) -> Result<DisasterEvent, SchemaError> {
    let [date, disaster_type, response, casualties, severity, recovery] = cells;

    let date = parse_date(date).ok_or_else(|| SchemaError::InvalidDate {
        row,
        value: date.to_string(),
    })?;

    let mut event = DisasterEvent::new(
        date,
        disaster_type.trim(),
        parse_float(row, "response_time_hours", response)?,
        0,
        parse_float(row, "severity_index", severity)?,
        parse_float(row, "recovery_days", recovery)?,
    );
    event.casualties = parse_count(row, "casualties", casualties)?;
    Ok(event)
}

/// Accepts plain dates, ISO date-times and RFC 3339 timestamps; the time
/// part is discarded.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
                .map(|dt| dt.date())
        })
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
}

/// A blank cell is a missing value and reads as `NaN`.
fn parse_float(row: usize, column: &'static str, s: &str) -> Result<f64, SchemaError> {
    let t = s.trim();
    if t.is_empty() {
        return Ok(f64::NAN);
    }
    t.parse::<f64>()
        .map_err(|_| SchemaError::InvalidNumber {
            row,
            column,
            value: s.to_string(),
        })
}

/// Non-negative integer; integral floats such as `12.0` are accepted and a
/// blank cell is `None`.
fn parse_count(row: usize, column: &'static str, s: &str) -> Result<Option<u64>, SchemaError> {
    let t = s.trim();
    if t.is_empty() {
        return Ok(None);
    }
    if let Ok(n) = t.parse::<u64>() {
        return Ok(Some(n));
    }
    match t.parse::<f64>() {
        Ok(f) if f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 => Ok(Some(f as u64)),
        _ => Err(SchemaError::InvalidNumber {
            row,
            column,
            value: s.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    const CSV: &str = "\
date,country,disaster_type,severity_index,casualties,response_time_hours,recovery_days
2019-04-02,Chile,Earthquake,7.5,120,6.5,210
2020-07-19,India,Flood,4.1,12,18.0,45
2020-11-03 08:30:00,Japan,Earthquake,5.0,3.0,2.25,30
";

    #[test]
    fn csv_parses_required_and_extra_columns() {
        let ds = from_csv_reader(CSV.as_bytes()).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(
            ds.columns(),
            [
                "date",
                "country",
                "disaster_type",
                "severity_index",
                "casualties",
                "response_time_hours",
                "recovery_days"
            ]
        );
        assert_eq!(ds.disaster_types(), ["Earthquake", "Flood"]);
        assert_eq!(ds.year_bounds(), Some((2019, 2020)));

        let first = &ds.events()[0];
        assert_eq!(first.year(), 2019);
        assert_eq!(first.casualties, Some(120));
        assert_eq!(first.response_time_hours, 6.5);
        assert_eq!(first.source_cells[1], "Chile");

        let third = &ds.events()[2];
        assert_eq!(third.date(), NaiveDate::from_ymd_opt(2020, 11, 3).unwrap());
        assert_eq!(third.casualties, Some(3));
        // Preview cells keep the source text.
        assert_eq!(third.source_cells[4], "3.0");
        assert_eq!(ds.events()[1].source_cells[5], "18.0");
    }

    #[test]
    fn missing_column_is_a_schema_error() {
        let csv = "date,disaster_type,casualties\n2020-01-01,Flood,1\n";
        let err = from_csv_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, SchemaError::MissingColumn("response_time_hours")));
    }

    #[test]
    fn unparsable_date_aborts_the_load() {
        let csv = "\
date,disaster_type,response_time_hours,casualties,severity_index,recovery_days
2020-01-01,Flood,1,1,1,1
yesterday,Flood,1,1,1,1
";
        let err = from_csv_reader(csv.as_bytes()).unwrap_err();
        match err {
            SchemaError::InvalidDate { row, value } => {
                assert_eq!(row, 1);
                assert_eq!(value, "yesterday");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn negative_or_fractional_casualties_are_rejected() {
        for bad in ["-1", "2.5", "many"] {
            let csv = format!(
                "date,disaster_type,response_time_hours,casualties,severity_index,recovery_days\n\
                 2020-01-01,Flood,1,{bad},1,1\n"
            );
            let err = from_csv_reader(csv.as_bytes()).unwrap_err();
            assert!(
                matches!(err, SchemaError::InvalidNumber { column: "casualties", .. }),
                "{bad}: {err}"
            );
        }
    }

    #[test]
    fn blank_numeric_cells_are_missing_values() {
        let csv = "\
date,disaster_type,response_time_hours,casualties,severity_index,recovery_days
2020-01-01,Flood,5,1,2.0,
2020-02-01,Storm,,,3.5,12
";
        let ds = from_csv_reader(csv.as_bytes()).unwrap();
        assert_eq!(ds.len(), 2);

        let first = &ds.events()[0];
        assert!(first.recovery_days.is_nan());
        assert_eq!(first.casualties, Some(1));
        assert_eq!(first.source_cells[5], "");

        let second = &ds.events()[1];
        assert!(second.response_time_hours.is_nan());
        assert_eq!(second.casualties, None);
        assert_eq!(second.recovery_days, 12.0);
    }

    #[test]
    fn non_blank_garbage_is_still_rejected() {
        let csv = "\
date,disaster_type,response_time_hours,casualties,severity_index,recovery_days
2020-01-01,Flood,5,1,2.0,soon
";
        let err = from_csv_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::InvalidNumber { row: 0, column: "recovery_days", .. }
        ));
    }

    #[test]
    fn ragged_record_is_malformed() {
        let csv = "\
date,disaster_type,response_time_hours,casualties,severity_index,recovery_days
2020-01-01,Flood,5,1,2.0,10
2020-01-02,Flood,5,1
";
        let err = from_csv_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, SchemaError::Malformed { row: Some(1), .. }), "{err}");
    }

    #[test]
    fn header_only_csv_is_an_empty_dataset() {
        let csv = "date,disaster_type,response_time_hours,casualties,severity_index,recovery_days\n";
        let ds = from_csv_reader(csv.as_bytes()).unwrap();
        assert!(ds.is_empty());
        assert_eq!(ds.year_bounds(), None);
    }

    #[test]
    fn json_records_load_like_csv() {
        let json = r#"[
            {"date": "2018-02-10", "disaster_type": "Wildfire", "response_time_hours": 3,
             "casualties": 0, "severity_index": 2.5, "recovery_days": 14, "country": "USA"},
            {"date": "2021-09-01T12:00:00", "disaster_type": "Hurricane", "response_time_hours": 9.5,
             "casualties": 41, "severity_index": 8.0, "recovery_days": 120, "country": null}
        ]"#;
        let ds = from_json_str(json).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.columns().len(), 7);
        assert_eq!(ds.columns()[6], "country");
        assert_eq!(ds.events()[0].source_cells[6], "USA");
        assert_eq!(ds.events()[1].source_cells[6], "");
        assert_eq!(ds.events()[1].year(), 2021);
        assert_eq!(ds.events()[1].casualties, Some(41));
    }

    #[test]
    fn json_record_missing_a_column_fails() {
        let json = r#"[{"date": "2018-02-10", "disaster_type": "Wildfire"}]"#;
        let err = from_json_str(json).unwrap_err();
        assert!(matches!(err, SchemaError::MissingColumn(_)));
    }

    #[test]
    fn json_columns_keep_source_order() {
        let json = r#"[
            {"zeta": "z", "date": "2019-05-05", "alpha": "a", "disaster_type": "Flood",
             "response_time_hours": 1, "casualties": 2, "severity_index": 3, "recovery_days": 4}
        ]"#;
        let ds = from_json_str(json).unwrap();
        assert_eq!(
            ds.columns(),
            [
                "zeta",
                "date",
                "alpha",
                "disaster_type",
                "response_time_hours",
                "casualties",
                "severity_index",
                "recovery_days"
            ]
        );
        assert_eq!(ds.events()[0].source_cells[..3], ["z", "2019-05-05", "a"]);
    }

    #[test]
    fn json_key_absent_from_one_record_is_blank() {
        let json = r#"[
            {"date": "2019-05-05", "disaster_type": "Flood", "response_time_hours": 1,
             "casualties": 2, "severity_index": 3, "recovery_days": 4},
            {"date": "2020-05-05", "disaster_type": "Storm", "response_time_hours": 1,
             "severity_index": 3, "recovery_days": 4}
        ]"#;
        let ds = from_json_str(json).unwrap();
        assert_eq!(ds.events()[1].casualties, None);
    }

    #[test]
    fn json_must_be_an_array_of_objects() {
        assert!(matches!(
            from_json_str(r#"{"date": "2018-02-10"}"#).unwrap_err(),
            SchemaError::Malformed { row: None, .. }
        ));
        assert!(matches!(
            from_json_str("[1, 2]").unwrap_err(),
            SchemaError::Malformed { row: Some(0), .. }
        ));
    }

    #[test]
    fn date_formats() {
        let expected = NaiveDate::from_ymd_opt(2022, 3, 7).unwrap();
        for s in [
            "2022-03-07",
            "2022/03/07",
            "03/07/2022",
            " 2022-03-07 ",
            "2022-03-07 23:59:59",
            "2022-03-07T01:02:03.250",
            "2022-03-07T10:00:00+02:00",
        ] {
            assert_eq!(parse_date(s), Some(expected), "{s}");
        }
        assert_eq!(parse_date("2022-13-01"), None);
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("2022-03-07").map(|d| d.year()), Some(2022));
    }

    #[test]
    fn missing_file_is_unavailable() {
        let err = load_file(Path::new("no/such/dir/disasters.csv")).unwrap_err();
        assert!(matches!(err, LoadError::DataSourceUnavailable { .. }));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = load_file(Path::new("disasters.xlsx")).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Schema(SchemaError::UnsupportedFormat(ref ext)) if ext == "xlsx"
        ));
    }
}
