//! Fan table rows
//!
//! The saved document stores the fan table as positional arrays rather than
//! objects, so a row is a tuple struct.

use fanlayout_core::{constants::defaults::EXAMPLE_FANS, FanModel};
use serde::{Deserialize, Serialize};

/// `[type, diameter (m), airflow (m³/s), listed]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FanRow(pub String, pub f64, pub f64, pub bool);

impl From<&FanRow> for FanModel {
    fn from(row: &FanRow) -> Self {
        FanModel::new(row.0.clone(), row.1, row.2, row.3)
    }
}

impl From<&FanModel> for FanRow {
    fn from(fan: &FanModel) -> Self {
        FanRow(
            fan.fan_type.clone(),
            fan.diameter,
            fan.airflow,
            fan.meets_certification,
        )
    }
}

/// The example rows the tool starts with
pub fn default_fan_table() -> Vec<FanRow> {
    EXAMPLE_FANS
        .iter()
        .map(|&(name, diameter, airflow, listed)| FanRow(name.to_string(), diameter, airflow, listed))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_is_a_json_array() {
        let row: FanRow = serde_json::from_str(r#"["ExampleC", 1.524, 3.765196, true]"#).unwrap();
        assert_eq!(row, FanRow("ExampleC".into(), 1.524, 3.765196, true));

        let fan = FanModel::from(&row);
        assert_eq!(fan.fan_type, "ExampleC");
        assert!(fan.meets_certification);
        assert_eq!(FanRow::from(&fan), row);
    }

    #[test]
    fn default_table_matches_core_catalog() {
        let table = default_fan_table();
        let catalog = fanlayout_core::example_catalog();
        assert_eq!(table.len(), 9);
        for (row, fan) in table.iter().zip(&catalog) {
            assert_eq!(&FanModel::from(row), fan);
        }
    }
}
