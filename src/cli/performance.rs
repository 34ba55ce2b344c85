use super::ui;
use crate::core::config::AppConfig;
use crate::core::performance::{MonthlyPerformance, performance_series};
use comfy_table::Cell;
use console::style;

const CHART_WIDTH: usize = 40;

fn bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 || !value.is_finite() {
        return String::new();
    }
    let len = ((value / max) * width as f64).round().clamp(0.0, width as f64) as usize;
    "█".repeat(len)
}

/// Horizontal two-series bar chart, one pair of bars per month.
pub fn render_chart(series: &[MonthlyPerformance]) -> String {
    let max = series
        .iter()
        .flat_map(|m| [m.revenue, m.expenses])
        .fold(0.0_f64, f64::max);

    let mut lines = Vec::with_capacity(series.len() * 2 + 1);
    for month in series {
        lines.push(format!(
            "{:<4}{} {}",
            month.month,
            style(bar(month.revenue, max, CHART_WIDTH)).blue(),
            ui::format_amount(month.revenue)
        ));
        lines.push(format!(
            "{:<4}{} {}",
            "",
            style(bar(month.expenses, max, CHART_WIDTH)).green(),
            ui::format_amount(month.expenses)
        ));
    }
    lines.push(format!(
        "    {} revenue   {} expenses",
        style("█").blue(),
        style("█").green()
    ));
    lines.join("\n")
}

pub fn render(config: &AppConfig) -> String {
    let series = performance_series();
    let symbol = &config.currency_symbol;
    let mut table = ui::new_styled_table();

    table.set_header(vec![
        ui::header_cell("Month"),
        ui::header_cell("Revenue"),
        ui::header_cell("Expenses"),
        ui::header_cell("Net"),
    ]);
    for month in series {
        table.add_row(vec![
            Cell::new(month.month),
            ui::number_cell(month.revenue, ui::format_currency(symbol, month.revenue)),
            ui::number_cell(month.expenses, ui::format_currency(symbol, month.expenses)),
            ui::format_amount_cell(month.net(), |v| ui::format_currency(symbol, v)),
        ]);
    }

    format!(
        "{}\n\n{table}\n\n{}",
        ui::style_text("Investment Performance", ui::StyleType::Title),
        render_chart(series)
    )
}

pub fn run(config: &AppConfig) {
    println!("{}", render(config));
}
