use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde_json::Value as JsonValue;

use super::error::DatasetError;
use super::model::{LaunchDataset, LaunchRecord, Outcome};

pub const COL_LAUNCH_SITE: &str = "Launch Site";
pub const COL_PAYLOAD_MASS: &str = "Payload Mass (kg)";
pub const COL_BOOSTER_CATEGORY: &str = "Booster Version Category";
pub const COL_CLASS: &str = "class";

const REQUIRED_COLUMNS: [&str; 4] = [
    COL_LAUNCH_SITE,
    COL_PAYLOAD_MASS,
    COL_BOOSTER_CATEGORY,
    COL_CLASS,
];

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a launch dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row naming at least the four required columns
/// * `.json` – `[{ "Launch Site": "...", "Payload Mass (kg)": 500.0, ... }, ...]`
pub fn load_file(path: &Path) -> Result<LaunchDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let records = match ext.as_str() {
        "csv" => load_csv(path)?,
        "json" => load_json(path)?,
        other => bail!("Unsupported file extension: .{other}"),
    };

    if records.is_empty() {
        return Err(DatasetError::Empty.into());
    }
    Ok(LaunchDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<Vec<LaunchRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening CSV {}", path.display()))?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let column = |name: &'static str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| DatasetError::MissingColumn(name).into())
    };
    let site_idx = column(COL_LAUNCH_SITE)?;
    let payload_idx = column(COL_PAYLOAD_MASS)?;
    let booster_idx = column(COL_BOOSTER_CATEGORY)?;
    let class_idx = column(COL_CLASS)?;

    let mut records = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let row = i + 1;
        let record = result.with_context(|| format!("CSV row {row}"))?;
        let cell = |idx: usize| record.get(idx).unwrap_or("");

        let extra = headers
            .iter()
            .enumerate()
            .filter(|(idx, _)| ![site_idx, payload_idx, booster_idx, class_idx].contains(idx))
            .map(|(idx, name)| (name.clone(), cell(idx).to_string()))
            .collect();

        records.push(parse_record(
            row,
            RawCells {
                site: cell(site_idx),
                payload: cell(payload_idx),
                booster: cell(booster_idx),
                class: cell(class_idx),
            },
            extra,
        )?);
    }
    Ok(records)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON, the shape of `df.to_json(orient='records')`.
fn load_json(path: &Path) -> Result<Vec<LaunchRecord>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading JSON {}", path.display()))?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;
    let rows = root
        .as_array()
        .context("Expected top-level JSON array")?;

    let mut records = Vec::with_capacity(rows.len());
    for (i, value) in rows.iter().enumerate() {
        let row = i + 1;
        let obj = value
            .as_object()
            .ok_or(DatasetError::NotAnObject { row })?;

        let mut cells: BTreeMap<&str, String> = BTreeMap::new();
        for name in REQUIRED_COLUMNS {
            let v = obj.get(name).ok_or(DatasetError::MissingColumn(name))?;
            cells.insert(name, json_cell(v));
        }
        let extra = obj
            .iter()
            .filter(|(k, _)| !REQUIRED_COLUMNS.contains(&k.as_str()))
            .map(|(k, v)| (k.clone(), json_cell(v)))
            .collect();

        records.push(parse_record(
            row,
            RawCells {
                site: &cells[COL_LAUNCH_SITE],
                payload: &cells[COL_PAYLOAD_MASS],
                booster: &cells[COL_BOOSTER_CATEGORY],
                class: &cells[COL_CLASS],
            },
            extra,
        )?);
    }
    Ok(records)
}

fn json_cell(val: &JsonValue) -> String {
    match val {
        JsonValue::String(s) => s.trim().to_string(),
        JsonValue::Null => String::new(),
        other => other.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Cell parsing shared by both formats
// ---------------------------------------------------------------------------

struct RawCells<'a> {
    site: &'a str,
    payload: &'a str,
    booster: &'a str,
    class: &'a str,
}

fn parse_record(
    row: usize,
    cells: RawCells<'_>,
    extra: BTreeMap<String, String>,
) -> Result<LaunchRecord, DatasetError> {
    if cells.site.is_empty() {
        return Err(DatasetError::EmptySite { row });
    }
    Ok(LaunchRecord {
        launch_site: cells.site.to_string(),
        payload_mass_kg: parse_payload(row, cells.payload)?,
        booster_version_category: cells.booster.to_string(),
        outcome: parse_class(row, cells.class)?,
        extra,
    })
}

fn parse_payload(row: usize, s: &str) -> Result<Option<f64>, DatasetError> {
    if s.is_empty() {
        return Ok(None);
    }
    match s.parse::<f64>() {
        Ok(v) if v.is_nan() => Ok(None),
        Ok(v) if v.is_finite() => Ok(Some(v)),
        _ => Err(DatasetError::InvalidPayload {
            row,
            value: s.to_string(),
        }),
    }
}

/// Accepts `0`/`1` and their float spellings (`1.0`), as written by
/// dataframe exports.
fn parse_class(row: usize, s: &str) -> Result<Outcome, DatasetError> {
    let class = s
        .parse::<i64>()
        .ok()
        .or_else(|| {
            s.parse::<f64>()
                .ok()
                .filter(|f| f.fract() == 0.0)
                .map(|f| f as i64)
        });
    class
        .and_then(Outcome::from_class)
        .ok_or_else(|| DatasetError::InvalidClass {
            row,
            value: s.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(suffix)
            .tempfile()
            .expect("create temp file");
        file.write_all(contents.as_bytes()).expect("write temp file");
        file
    }

    fn dataset_error(err: &anyhow::Error) -> Option<&DatasetError> {
        err.downcast_ref::<DatasetError>()
    }

    const SAMPLE_CSV: &str = "\
,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
1,2,CCAFS LC-40,0,525.0,F9 v1.0  B0004,v1.0
2,6,VAFB SLC-4E,0,500.0,F9 v1.1  B1003,v1.1
3,7,KSC LC-39A,1,,F9 FT B1031.1,FT
4,8,KSC LC-39A,1,5300.0,F9 FT B1032.1,FT
5,9,CCAFS LC-40,1,9600.0,F9 B5 B1046.1,B5
";

    #[test]
    fn loads_csv_with_passthrough_columns() {
        let file = write_temp(".csv", SAMPLE_CSV);
        let ds = load_file(file.path()).expect("load csv");

        assert_eq!(ds.len(), 6);
        assert_eq!(ds.min_payload, 0.0);
        assert_eq!(ds.max_payload, 9600.0);

        let first = &ds.records[0];
        assert_eq!(first.launch_site, "CCAFS LC-40");
        assert_eq!(first.outcome, Outcome::Failure);
        assert_eq!(first.booster_version_category, "v1.0");
        assert_eq!(first.extra.get("Flight Number").map(String::as_str), Some("1"));
        assert_eq!(first.extra.get("Booster Version").map(String::as_str), Some("F9 v1.0  B0003"));
        assert!(!first.extra.contains_key(COL_CLASS));

        assert_eq!(ds.records[3].payload_mass_kg, None);
    }

    #[test]
    fn csv_catalog_orders_sites_by_count() {
        let file = write_temp(".csv", SAMPLE_CSV);
        let ds = load_file(file.path()).expect("load csv");
        let values: Vec<&str> = ds.catalog.options().iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["All Sites", "CCAFS LC-40", "KSC LC-39A", "VAFB SLC-4E"]);
    }

    #[test]
    fn rejects_missing_required_column() {
        let file = write_temp(".csv", "Launch Site,class,Payload Mass (kg)\nKSC,1,100\n");
        let err = load_file(file.path()).unwrap_err();
        assert_eq!(
            dataset_error(&err),
            Some(&DatasetError::MissingColumn(COL_BOOSTER_CATEGORY))
        );
    }

    #[test]
    fn rejects_class_outside_zero_and_one() {
        let file = write_temp(
            ".csv",
            "Launch Site,class,Payload Mass (kg),Booster Version Category\nKSC,1,100,FT\nKSC,2,200,FT\n",
        );
        let err = load_file(file.path()).unwrap_err();
        assert_eq!(
            dataset_error(&err),
            Some(&DatasetError::InvalidClass { row: 2, value: "2".into() })
        );
    }

    #[test]
    fn rejects_non_numeric_payload() {
        let file = write_temp(
            ".csv",
            "Launch Site,class,Payload Mass (kg),Booster Version Category\nKSC,1,heavy,FT\n",
        );
        let err = load_file(file.path()).unwrap_err();
        assert!(matches!(
            dataset_error(&err),
            Some(DatasetError::InvalidPayload { row: 1, .. })
        ));
    }

    #[test]
    fn rejects_infinite_payload() {
        let file = write_temp(
            ".csv",
            "Launch Site,class,Payload Mass (kg),Booster Version Category\nKSC,1,100,FT\nKSC,0,inf,FT\n",
        );
        let err = load_file(file.path()).unwrap_err();
        assert_eq!(
            dataset_error(&err),
            Some(&DatasetError::InvalidPayload { row: 2, value: "inf".into() })
        );
    }

    #[test]
    fn rejects_empty_site() {
        let file = write_temp(
            ".csv",
            "Launch Site,class,Payload Mass (kg),Booster Version Category\n,1,100,FT\n",
        );
        let err = load_file(file.path()).unwrap_err();
        assert_eq!(dataset_error(&err), Some(&DatasetError::EmptySite { row: 1 }));
    }

    #[test]
    fn rejects_header_only_file() {
        let file = write_temp(".csv", "Launch Site,class,Payload Mass (kg),Booster Version Category\n");
        let err = load_file(file.path()).unwrap_err();
        assert_eq!(dataset_error(&err), Some(&DatasetError::Empty));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        assert!(load_file(&dir.path().join("spacex_launch_dash.csv")).is_err());
    }

    #[test]
    fn unsupported_extension_is_an_error() {
        let file = write_temp(".parquet", "");
        let err = load_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Unsupported file extension"));
    }

    #[test]
    fn loads_json_records() {
        let file = write_temp(
            ".json",
            r#"[
                {"Launch Site": "KSC LC-39A", "class": 1, "Payload Mass (kg)": 2490.0,
                 "Booster Version Category": "FT", "Flight Number": 30},
                {"Launch Site": "VAFB SLC-4E", "class": 0.0, "Payload Mass (kg)": null,
                 "Booster Version Category": "v1.1"}
            ]"#,
        );
        let ds = load_file(file.path()).expect("load json");
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].outcome, Outcome::Success);
        assert_eq!(ds.records[0].payload_mass_kg, Some(2490.0));
        assert_eq!(ds.records[0].extra.get("Flight Number").map(String::as_str), Some("30"));
        assert_eq!(ds.records[1].outcome, Outcome::Failure);
        assert_eq!(ds.records[1].payload_mass_kg, None);
        assert_eq!((ds.min_payload, ds.max_payload), (2490.0, 2490.0));
    }

    #[test]
    fn json_row_missing_column_is_rejected() {
        let file = write_temp(".json", r#"[{"Launch Site": "KSC", "class": 1}]"#);
        let err = load_file(file.path()).unwrap_err();
        assert!(matches!(dataset_error(&err), Some(DatasetError::MissingColumn(_))));
    }
}
