use super::ui;
use crate::core::analytics::PortfolioMetrics;
use crate::core::config::AppConfig;
use crate::core::dataset::Dataset;
use comfy_table::Cell;

impl PortfolioMetrics {
    /// Renders the summary cards as a single-row table.
    pub fn display_overview(&self, currency_symbol: &str) -> String {
        let mut table = ui::new_styled_table();

        table.set_header(vec![
            ui::header_cell("Total Properties"),
            ui::header_cell("Total Value"),
            ui::header_cell("Monthly Rent"),
            ui::header_cell("ROI"),
            ui::header_cell(&format!("{}-Year Forecast", self.forecast_years)),
        ]);

        table.add_row(vec![
            Cell::new(self.property_count),
            ui::number_cell(
                self.total_value,
                ui::format_currency(currency_symbol, self.total_value),
            ),
            ui::number_cell(
                self.total_monthly_rent,
                ui::format_currency(currency_symbol, self.total_monthly_rent),
            ),
            ui::number_cell(self.roi, ui::format_percent(self.roi)),
            ui::format_amount_cell(self.total_forecast, |v| {
                ui::format_currency(currency_symbol, v)
            }),
        ]);

        format!(
            "{}\n\n{table}",
            ui::style_text("Overview", ui::StyleType::Title)
        )
    }
}

pub fn render(dataset: &Dataset, config: &AppConfig) -> String {
    PortfolioMetrics::from_records(dataset.records(), config.forecast_years)
        .display_overview(&config.currency_symbol)
}

pub fn run(dataset: &Dataset, config: &AppConfig) {
    println!("{}", render(dataset, config));
}
