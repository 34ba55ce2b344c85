//! Provides the aggregate figures shown on the dashboard.
use crate::core::forecast::{self, Projection};
use crate::core::property::PropertyRecord;
use tracing::debug;

/// A property together with the figures derived from it.
#[derive(Debug, Clone)]
pub struct PropertyMetrics {
    pub record: PropertyRecord,
    pub roi: f64,
    pub projection: Projection,
}

/// Portfolio-wide summary, rebuilt from the working set on every render.
///
/// Ratios are not guarded: an empty or zero-value portfolio reports a
/// NaN/Infinity ROI, which is displayed as-is.
#[derive(Debug, Clone)]
pub struct PortfolioMetrics {
    pub property_count: usize,
    pub total_value: f64,
    pub total_monthly_rent: f64,
    pub roi: f64,
    pub forecast_years: u32,
    pub total_forecast: f64,
    pub properties: Vec<PropertyMetrics>,
}

impl PortfolioMetrics {
    pub fn from_records(records: &[PropertyRecord], forecast_years: u32) -> Self {
        let properties: Vec<PropertyMetrics> = records
            .iter()
            .map(|record| PropertyMetrics {
                roi: record.roi(),
                projection: forecast::project(record, forecast_years),
                record: record.clone(),
            })
            .collect();

        let total_value: f64 = records.iter().map(|p| p.value).sum();
        let total_monthly_rent: f64 = records.iter().map(|p| p.monthly_rent).sum();
        let total_forecast: f64 = properties.iter().map(|p| p.projection.cash_flow).sum();
        let roi = (total_monthly_rent * 12.0 / total_value) * 100.0;

        debug!(
            count = records.len(),
            total_value, total_monthly_rent, roi, total_forecast, "Computed portfolio metrics"
        );

        Self {
            property_count: records.len(),
            total_value,
            total_monthly_rent,
            roi,
            forecast_years,
            total_forecast,
            properties,
        }
    }
}
