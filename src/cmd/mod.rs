pub mod brackets;
pub mod calculate;
pub mod records;
pub mod schema;
pub mod submit;
pub mod verify;

use crate::core::parse_amount;
use rust_decimal::Decimal;

/// Parse the income and relief arguments shared by several commands
fn read_amounts(income: &str, tax_relief: &str) -> anyhow::Result<(Decimal, Decimal)> {
    let income = parse_amount("income", income)?;
    let tax_relief = parse_amount("tax_relief", tax_relief)?;
    Ok((income, tax_relief))
}
