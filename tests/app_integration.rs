use std::fs;
use tracing::info;

mod test_utils {
    use std::io::Write;

    pub fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write config file");
        file
    }

    pub fn write_upload(rows: &[&str]) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".csv")
            .tempfile()
            .expect("Failed to create temp file");
        writeln!(file, "address,value,rent").expect("Failed to write header");
        for row in rows {
            writeln!(file, "{row}").expect("Failed to write row");
        }
        file
    }
}

#[test_log::test(tokio::test)]
async fn test_full_app_flow_with_defaults() {
    let config_file = test_utils::write_config("currency_symbol: \"$\"\nforecast_years: 5\n");

    for command in [
        estatedash::AppCommand::Overview,
        estatedash::AppCommand::Properties,
        estatedash::AppCommand::Performance,
        estatedash::AppCommand::Dashboard,
    ] {
        let result =
            estatedash::run_command(command, Some(config_file.path().to_str().unwrap()), None)
                .await;
        assert!(
            result.is_ok(),
            "{command:?} failed with: {:?}",
            result.err()
        );
    }
}

#[test_log::test(tokio::test)]
async fn test_full_app_flow_with_upload() {
    let config_file = test_utils::write_config("forecast_years: 3\n");
    let upload = test_utils::write_upload(&["1 River Rd,210000,1400", "2 River Rd,oops,1500"]);
    info!(path = %upload.path().display(), "Running dashboard with upload");

    let result = estatedash::run_command(
        estatedash::AppCommand::Dashboard,
        Some(config_file.path().to_str().unwrap()),
        Some(upload.path()),
    )
    .await;
    assert!(
        result.is_ok(),
        "Dashboard with upload failed with: {:?}",
        result.err()
    );
}

#[test_log::test(tokio::test)]
async fn test_missing_upload_fails() {
    let config_file = test_utils::write_config("{}\n");
    let result = estatedash::run_command(
        estatedash::AppCommand::Overview,
        Some(config_file.path().to_str().unwrap()),
        Some(std::path::Path::new("/nonexistent/upload.csv")),
    )
    .await;
    assert!(result.is_err());
}

#[test_log::test(tokio::test)]
async fn test_invalid_config_fails() {
    let config_file = test_utils::write_config("forecast_years: [not, a, number]\n");
    let result = estatedash::run_command(
        estatedash::AppCommand::Overview,
        Some(config_file.path().to_str().unwrap()),
        None,
    )
    .await;
    let err = result.expect_err("Invalid config should fail");
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test_log::test(tokio::test)]
async fn test_upload_rows_replace_sample_data() -> anyhow::Result<()> {
    use estatedash::core::analytics::PortfolioMetrics;
    use estatedash::core::dataset::Dataset;

    let file = tempfile::Builder::new().suffix(".csv").tempfile()?;
    fs::write(
        file.path(),
        "address,value,rent\n\n77 Bay St,500000,2500\n78 Bay St,250000,1250\n\n",
    )?;

    let mut dataset = Dataset::default();
    estatedash::cli::upload::upload(&mut dataset, file.path()).await?;

    let ids: Vec<u32> = dataset.records().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2]);

    let metrics = PortfolioMetrics::from_records(dataset.records(), 5);
    assert_eq!(metrics.total_value, 750000.0);
    assert_eq!(metrics.total_monthly_rent, 3750.0);
    assert!((metrics.roi - 6.0).abs() < 1e-9);
    // Uploaded rows carry no expense data.
    assert!(metrics.total_forecast.is_nan());

    dataset.reset().await?;
    assert_eq!(
        dataset.records(),
        estatedash::core::property::default_properties().as_slice()
    );
    Ok(())
}
