//! Property records and the built-in mock portfolio

/// A single rental property in the working set.
///
/// Ids are positional: they are assigned 1..N by whichever source produced
/// the list. Numeric fields are not validated, so a zero or NaN `value`
/// surfaces as NaN/Infinity in the derived ratios.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyRecord {
    pub id: u32,
    pub address: String,
    pub value: f64,
    pub monthly_rent: f64,
    pub annual_appreciation_percent: Option<f64>,
    pub operating_expense_percent: Option<f64>,
}

impl PropertyRecord {
    pub fn annual_rent(&self) -> f64 {
        self.monthly_rent * 12.0
    }

    /// Annualized rent as a percentage of the property value.
    pub fn roi(&self) -> f64 {
        (self.annual_rent() / self.value) * 100.0
    }
}

fn mock(
    id: u32,
    address: &str,
    value: f64,
    monthly_rent: f64,
    appreciation: f64,
    expenses: f64,
) -> PropertyRecord {
    PropertyRecord {
        id,
        address: address.to_string(),
        value,
        monthly_rent,
        annual_appreciation_percent: Some(appreciation),
        operating_expense_percent: Some(expenses),
    }
}

/// The hardcoded portfolio shown before any upload and restored on reset.
pub fn default_properties() -> Vec<PropertyRecord> {
    vec![
        mock(1, "123 Main St", 250000.0, 1500.0, 3.0, 20.0),
        mock(2, "456 Elm St", 300000.0, 1800.0, 2.5, 18.0),
        mock(3, "789 Oak St", 280000.0, 1600.0, 2.8, 22.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_properties() {
        let properties = default_properties();
        assert_eq!(properties.len(), 3);
        let ids: Vec<u32> = properties.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(properties[1].address, "456 Elm St");
        assert_eq!(properties[1].annual_appreciation_percent, Some(2.5));
        assert_eq!(properties[2].operating_expense_percent, Some(22.0));
    }

    #[test]
    fn test_roi() {
        let property = &default_properties()[0];
        assert_eq!(property.annual_rent(), 18000.0);
        assert!((property.roi() - 7.2).abs() < 1e-9);
    }

    #[test]
    fn test_roi_zero_value_is_not_finite() {
        let mut property = default_properties()[0].clone();
        property.value = 0.0;
        assert!(property.roi().is_infinite());

        property.monthly_rent = 0.0;
        assert!(property.roi().is_nan());
    }
}
