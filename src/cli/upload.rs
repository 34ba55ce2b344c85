use super::ui;
use crate::core::dataset::{DataOrigin, Dataset};
use crate::core::source::{CsvUpload, PropertySource};
use anyhow::Result;
use std::path::Path;
use tracing::info;

/// Parses `path` and replaces the working set, returning the success notice.
///
/// Any file that parses is reported as a success, whatever its rows contain.
pub async fn upload(dataset: &mut Dataset, path: &Path) -> Result<String> {
    let source = CsvUpload::new(path);
    let pb = ui::new_spinner(&format!("Parsing {}...", source.name()));
    let result = dataset.load_from(&source).await;
    pb.finish_and_clear();

    let origin = result?;
    info!("Upload complete: {origin}");
    let (name, rows) = match origin {
        DataOrigin::Upload { name, rows } => (name, rows),
        DataOrigin::Default => (source.name(), dataset.len()),
    };
    Ok(ui::style_text(
        &format!("✔ Data uploaded successfully: {rows} properties loaded from {name}"),
        ui::StyleType::Success,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_upload_reports_success_for_malformed_rows() -> Result<()> {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile()?;
        writeln!(file, "address,value,rent")?;
        writeln!(file, "Bad Row,not-a-number,???")?;

        let mut dataset = Dataset::default();
        let notice = upload(&mut dataset, file.path()).await?;

        assert!(notice.contains("Data uploaded successfully"));
        assert!(notice.contains("1 properties"));
        let file_name = file.path().file_name().unwrap().to_string_lossy();
        assert!(notice.contains(file_name.as_ref()));
        assert!(dataset.records()[0].value.is_nan());
        Ok(())
    }
}
