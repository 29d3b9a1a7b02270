use super::brackets::RESIDENT_BRACKETS;
use super::tax::{compute, TaxComputation, TaxError};
use pitax_derive::CsvSchema;
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Column description generated by `#[derive(CsvSchema)]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvField {
    pub name: &'static str,
    pub kind: &'static str,
    pub required: bool,
    pub description: &'static str,
}

/// One saved tax calculation, one row of the record file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, CsvSchema)]
pub struct TaxRecord {
    /// 12 digit identity card number of the taxpayer
    pub ic_number: String,
    /// Annual income
    #[serde(with = "rust_decimal::serde::str")]
    #[schemars(with = "f64")]
    pub income: Decimal,
    /// Total tax relief claimed
    #[serde(with = "rust_decimal::serde::str")]
    #[schemars(with = "f64")]
    pub tax_relief: Decimal,
    /// Tax payable on the resident scale, rounded to cents
    #[serde(with = "rust_decimal::serde::str")]
    #[schemars(with = "f64")]
    pub tax_payable: Decimal,
}

impl TaxRecord {
    /// Compute the tax for `income` and `tax_relief` and capture it as a record
    pub fn calculate(
        ic_number: impl Into<String>,
        income: Decimal,
        tax_relief: Decimal,
    ) -> Result<Self, TaxError> {
        let computation = compute(RESIDENT_BRACKETS, income, tax_relief)?;
        Ok(Self::from_computation(ic_number, &computation))
    }

    pub fn from_computation(ic_number: impl Into<String>, computation: &TaxComputation) -> Self {
        TaxRecord {
            ic_number: ic_number.into(),
            income: computation.income,
            tax_relief: computation.tax_relief,
            tax_payable: computation.tax_payable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn calculate_fills_tax_payable() {
        let record = TaxRecord::calculate("123456789012", dec!(25000), dec!(0)).unwrap();
        assert_eq!(record.ic_number, "123456789012");
        assert_eq!(record.tax_payable, dec!(300.00));
    }

    #[test]
    fn csv_header_matches_record_file() {
        assert_eq!(
            TaxRecord::csv_header(),
            &["ic_number", "income", "tax_relief", "tax_payable"]
        );
    }

    #[test]
    fn csv_schema_describes_columns() {
        let schema = TaxRecord::csv_schema();
        assert_eq!(schema.len(), 4);
        assert!(schema.iter().all(|f| f.required));
        assert_eq!(schema[0].kind, "text");
        assert_eq!(schema[1].kind, "number");
        assert_eq!(schema[3].description, "Tax payable on the resident scale, rounded to cents");
    }
}
