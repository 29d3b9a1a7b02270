//! Progressive income tax over an ordered bracket table.

use super::brackets::{Bracket, RESIDENT_BRACKETS};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::Serialize;
use std::str::FromStr;

/// Largest income or relief magnitude accepted from user input.
pub const MAX_AMOUNT: Decimal = dec!(1000000000000000);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TaxError {
    #[error("{field} must be a number, got '{value}'")]
    InvalidInput { field: &'static str, value: String },
    #[error("{field} must be between -{max} and {max}, got '{value}'", max = MAX_AMOUNT)]
    OutOfRange { field: &'static str, value: String },
    #[error("tax on income {income} with relief {tax_relief} overflows")]
    Overflow { income: Decimal, tax_relief: Decimal },
}

/// Parse a user supplied amount, e.g. `"52000"`, `" 1234.50 "` or `"1e5"`.
///
/// Amounts beyond [`MAX_AMOUNT`] are rejected so no accepted pair can
/// overflow the calculation.
pub fn parse_amount(field: &'static str, text: &str) -> Result<Decimal, TaxError> {
    let trimmed = text.trim();
    let parsed = if trimmed.contains(['e', 'E']) {
        Decimal::from_scientific(trimmed).ok()
    } else {
        Decimal::from_str(trimmed).ok()
    };
    match parsed {
        Some(amount) if amount.abs() <= MAX_AMOUNT => Ok(amount),
        Some(_) => Err(TaxError::OutOfRange {
            field,
            value: text.to_string(),
        }),
        // finite but too large for a Decimal, e.g. "1e30"
        None if trimmed.parse::<f64>().is_ok_and(f64::is_finite) => Err(TaxError::OutOfRange {
            field,
            value: text.to_string(),
        }),
        None => Err(TaxError::InvalidInput {
            field,
            value: text.to_string(),
        }),
    }
}

/// Round to cents, with midpoints rounded up (away from zero).
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Income less relief, floored at zero.
pub fn chargeable_income(income: Decimal, tax_relief: Decimal) -> Result<Decimal, TaxError> {
    income
        .checked_sub(tax_relief)
        .map(|chargeable| chargeable.max(Decimal::ZERO))
        .ok_or(TaxError::Overflow { income, tax_relief })
}

/// Tax payable on the resident scale, rounded to cents.
pub fn calculate_tax(income: Decimal, tax_relief: Decimal) -> Result<Decimal, TaxError> {
    calculate_tax_with(RESIDENT_BRACKETS, income, tax_relief)
}

pub fn calculate_tax_with(
    brackets: &[Bracket],
    income: Decimal,
    tax_relief: Decimal,
) -> Result<Decimal, TaxError> {
    Ok(compute(brackets, income, tax_relief)?.tax_payable)
}

/// Portion of chargeable income falling inside a single bracket
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BandCharge {
    pub lower: Decimal,
    pub upper: Option<Decimal>,
    pub rate: Decimal,
    /// Amount of chargeable income taxed in this bracket
    pub taxed: Decimal,
    /// Unrounded tax on `taxed`
    pub tax: Decimal,
}

/// Full result of a progressive calculation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxComputation {
    pub income: Decimal,
    pub tax_relief: Decimal,
    pub chargeable: Decimal,
    pub bands: Vec<BandCharge>,
    pub tax_payable: Decimal,
}

/// Walk the brackets in order, taxing only the slice of income inside each.
///
/// A bracket's upper limit is inclusive: income exactly on a boundary is
/// taxed wholly at the rates below it.
pub fn compute(
    brackets: &[Bracket],
    income: Decimal,
    tax_relief: Decimal,
) -> Result<TaxComputation, TaxError> {
    let overflow = || TaxError::Overflow { income, tax_relief };
    let chargeable = chargeable_income(income, tax_relief)?;
    let mut remaining = chargeable;
    let mut prev_limit = Decimal::ZERO;
    let mut total = Decimal::ZERO;
    let mut bands = Vec::new();

    for bracket in brackets {
        if remaining <= Decimal::ZERO {
            break;
        }
        let taxed = match bracket.width(prev_limit) {
            Some(width) => remaining.min(width),
            None => remaining,
        };
        let tax = taxed.checked_mul(bracket.rate).ok_or_else(overflow)?;
        log::debug!(
            "Bracket {}..{:?} @ {}: taxed {}, tax {}",
            prev_limit,
            bracket.upper_limit,
            bracket.rate,
            taxed,
            tax
        );
        bands.push(BandCharge {
            lower: prev_limit,
            upper: bracket.upper_limit,
            rate: bracket.rate,
            taxed,
            tax,
        });
        total = total.checked_add(tax).ok_or_else(overflow)?;
        remaining -= taxed;
        if let Some(limit) = bracket.upper_limit {
            prev_limit = limit;
        }
    }

    if remaining > Decimal::ZERO {
        log::warn!("Bracket table exhausted with {} untaxed", remaining);
    }

    Ok(TaxComputation {
        income,
        tax_relief,
        chargeable,
        bands,
        tax_payable: round_half_up(total),
    })
}
