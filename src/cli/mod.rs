//! Terminal views over the working set

pub mod overview;
pub mod performance;
pub mod properties;
pub mod session;
pub mod setup;
pub mod ui;
pub mod upload;

use crate::core::config::AppConfig;
use crate::core::dataset::Dataset;

/// All three views, one after another.
pub fn render_dashboard(dataset: &Dataset, config: &AppConfig) -> String {
    [
        overview::render(dataset, config),
        properties::render(dataset, config),
        performance::render(config),
    ]
    .join(&ui::separator())
}
