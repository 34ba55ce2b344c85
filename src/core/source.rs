//! Sources that produce a full working set of property records.

use crate::core::dataset::DataOrigin;
use crate::core::property::{PropertyRecord, default_properties};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::borrow::Cow;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

#[async_trait]
pub trait PropertySource: Send + Sync {
    /// Short label used in notifications and logs.
    fn name(&self) -> String;

    /// How a working set loaded from this source is labelled.
    fn origin(&self, rows: usize) -> DataOrigin {
        DataOrigin::Upload {
            name: self.name(),
            rows,
        }
    }

    async fn load(&self) -> Result<Vec<PropertyRecord>>;
}

/// The built-in mock portfolio.
pub struct MockSource;

impl MockSource {
    pub fn records(&self) -> Vec<PropertyRecord> {
        default_properties()
    }
}

#[async_trait]
impl PropertySource for MockSource {
    fn name(&self) -> String {
        "built-in portfolio".to_string()
    }

    fn origin(&self, _rows: usize) -> DataOrigin {
        DataOrigin::Default
    }

    async fn load(&self) -> Result<Vec<PropertyRecord>> {
        Ok(self.records())
    }
}

/// A CSV file laid out as `address,value,rent` with a header row.
///
/// Columns are read by position and the header names are never checked.
/// Rows are not validated: unparseable numbers become NaN and missing
/// percentages stay absent.
pub struct CsvUpload {
    path: PathBuf,
}

impl CsvUpload {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl PropertySource for CsvUpload {
    fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    async fn load(&self) -> Result<Vec<PropertyRecord>> {
        let path = self.path.clone();
        debug!("Parsing upload {}", path.display());
        tokio::task::spawn_blocking(move || {
            let file = std::fs::File::open(&path)
                .with_context(|| format!("Failed to open upload: {}", path.display()))?;
            parse_records(file)
                .with_context(|| format!("Failed to parse upload: {}", path.display()))
        })
        .await
        .context("Upload parser task failed")?
    }
}

/// Parses CSV rows into records with ids 1..N, skipping the header and empty
/// lines. Whitespace-only lines are kept and come out as NaN rows. Fields
/// that are not valid UTF-8 are decoded lossily instead of failing the upload.
pub fn parse_records<R: Read>(reader: R) -> Result<Vec<PropertyRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for result in rdr.byte_records() {
        let row = result?;
        if row.len() == 1 && row[0].is_empty() {
            continue;
        }

        let id = records.len() as u32 + 1;
        records.push(PropertyRecord {
            id,
            address: field(&row, 0).into_owned(),
            value: parse_float(&field(&row, 1)),
            monthly_rent: parse_float(&field(&row, 2)),
            annual_appreciation_percent: None,
            operating_expense_percent: None,
        });
    }
    debug!("Parsed {} rows from upload", records.len());
    Ok(records)
}

fn field(row: &csv::ByteRecord, index: usize) -> Cow<'_, str> {
    row.get(index)
        .map_or(Cow::Borrowed(""), String::from_utf8_lossy)
}

/// Lenient float coercion: skips leading whitespace and reads the longest
/// numeric prefix (`"12abc"` is 12). Returns NaN when there is no number.
pub fn parse_float(input: &str) -> f64 {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        return if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - digits_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let fraction_start = end + 1;
        let mut fraction_end = fraction_start;
        while fraction_end < bytes.len() && bytes[fraction_end].is_ascii_digit() {
            fraction_end += 1;
        }
        mantissa_digits += fraction_end - fraction_start;
        end = fraction_end;
    }
    if mantissa_digits == 0 {
        return f64::NAN;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}
