use super::ui;
use crate::core::analytics::PortfolioMetrics;
use crate::core::config::AppConfig;
use crate::core::dataset::Dataset;
use crate::core::forecast::round_half_up;
use comfy_table::Cell;

impl PortfolioMetrics {
    /// Renders one row per property, in working-set order.
    pub fn display_properties(&self, currency_symbol: &str) -> String {
        let years = self.forecast_years;
        let mut table = ui::new_styled_table();

        table.set_header(vec![
            ui::header_cell("#"),
            ui::header_cell("Address"),
            ui::header_cell("Value"),
            ui::header_cell("Appreciation"),
            ui::header_cell("Rent"),
            ui::header_cell("Expenses"),
            ui::header_cell("ROI"),
            ui::header_cell(&format!("{years}-Year Forecast")),
            ui::header_cell(&format!("Value in {years}y")),
        ]);

        for property in &self.properties {
            let record = &property.record;
            table.add_row(vec![
                Cell::new(record.id),
                Cell::new(&record.address),
                ui::number_cell(
                    record.value,
                    ui::format_currency(currency_symbol, record.value),
                ),
                ui::format_optional_cell(record.annual_appreciation_percent, |a| {
                    format!("{}%", ui::format_amount(a))
                }),
                ui::number_cell(
                    record.monthly_rent,
                    format!(
                        "{}/month",
                        ui::format_currency(currency_symbol, record.monthly_rent)
                    ),
                ),
                ui::format_optional_cell(record.operating_expense_percent, |e| {
                    format!("{}%", ui::format_amount(e))
                }),
                ui::number_cell(property.roi, ui::format_percent(property.roi)),
                ui::format_amount_cell(property.projection.cash_flow, |v| {
                    ui::format_currency(currency_symbol, v)
                }),
                ui::number_cell(
                    property.projection.projected_value,
                    ui::format_currency(
                        currency_symbol,
                        round_half_up(property.projection.projected_value),
                    ),
                ),
            ]);
        }

        let mut output = format!(
            "{}\n\n",
            ui::style_text("Property Listings", ui::StyleType::Title)
        );
        if self.properties.is_empty() {
            output.push_str(&ui::style_text("No properties loaded", ui::StyleType::Subtle));
        } else {
            output.push_str(&table.to_string());
        }
        output
    }
}

pub fn render(dataset: &Dataset, config: &AppConfig) -> String {
    let metrics = PortfolioMetrics::from_records(dataset.records(), config.forecast_years);
    format!(
        "{}\n{}",
        metrics.display_properties(&config.currency_symbol),
        ui::style_text(
            &format!("Source: {}", dataset.origin()),
            ui::StyleType::Subtle
        )
    )
}

pub fn run(dataset: &Dataset, config: &AppConfig) {
    println!("{}", render(dataset, config));
}
