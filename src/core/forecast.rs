//! Multi-year cash flow projection for a single property.
use crate::core::property::PropertyRecord;
use tracing::debug;

pub const DEFAULT_FORECAST_YEARS: u32 = 5;

/// Result of projecting a property over a horizon.
///
/// `cash_flow` is the rounded cumulative net rent. `projected_value` is the
/// property value compounded by its appreciation rate and is reported on its
/// own; it does not contribute to `cash_flow`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub years: u32,
    pub cash_flow: f64,
    pub projected_value: f64,
}

/// Rounds half-way cases towards positive infinity, the way the dashboard
/// figures have always been rounded (2.5 -> 3, -2.5 -> -2).
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

pub fn project(property: &PropertyRecord, years: u32) -> Projection {
    let expenses = property.operating_expense_percent.unwrap_or(f64::NAN);
    let appreciation = property.annual_appreciation_percent.unwrap_or(f64::NAN);

    let mut total_cash = 0.0;
    let mut current_value = property.value;
    for _ in 0..years {
        let annual_rent = property.annual_rent();
        let annual_expenses = annual_rent * expenses / 100.0;
        total_cash += annual_rent - annual_expenses;
        current_value *= 1.0 + appreciation / 100.0;
    }

    let projection = Projection {
        years,
        cash_flow: round_half_up(total_cash),
        projected_value: current_value,
    };
    debug!(
        "Projected {} over {years}y: cash flow {}, value {}",
        property.address, projection.cash_flow, projection.projected_value
    );
    projection
}

/// Rounded sum of `years` annual net cash flows. Absent expense data yields NaN.
pub fn calculate_forecast(property: &PropertyRecord, years: u32) -> f64 {
    project(property, years).cash_flow
}
