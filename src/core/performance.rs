//! Fixed monthly performance series for the performance view.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyPerformance {
    pub month: &'static str,
    pub revenue: f64,
    pub expenses: f64,
}

impl MonthlyPerformance {
    pub fn net(&self) -> f64 {
        self.revenue - self.expenses
    }
}

const SERIES: [MonthlyPerformance; 5] = [
    MonthlyPerformance { month: "Jan", revenue: 5000.0, expenses: 3000.0 },
    MonthlyPerformance { month: "Feb", revenue: 5200.0, expenses: 3100.0 },
    MonthlyPerformance { month: "Mar", revenue: 5400.0, expenses: 3200.0 },
    MonthlyPerformance { month: "Apr", revenue: 5600.0, expenses: 3300.0 },
    MonthlyPerformance { month: "May", revenue: 5800.0, expenses: 3400.0 },
];

/// The series is independent of the working record set.
pub fn performance_series() -> &'static [MonthlyPerformance] {
    &SERIES
}
