use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// A marginal rate applying to chargeable income up to `upper_limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bracket {
    /// Cumulative upper limit of the bracket, `None` for the top bracket
    pub upper_limit: Option<Decimal>,
    /// Marginal rate as a fraction (0.03 = 3%)
    pub rate: Decimal,
}

impl Bracket {
    const fn capped(upper_limit: Decimal, rate: Decimal) -> Self {
        Bracket {
            upper_limit: Some(upper_limit),
            rate,
        }
    }

    const fn unbounded(rate: Decimal) -> Self {
        Bracket {
            upper_limit: None,
            rate,
        }
    }

    /// Width of the bracket given the previous limit, `None` when unbounded
    pub fn width(&self, prev_limit: Decimal) -> Option<Decimal> {
        self.upper_limit.map(|limit| limit - prev_limit)
    }
}

/// Resident individual scale.
pub const RESIDENT_BRACKETS: &[Bracket] = &[
    Bracket::capped(dec!(5000), dec!(0.00)),
    Bracket::capped(dec!(20000), dec!(0.01)),
    Bracket::capped(dec!(35000), dec!(0.03)),
    Bracket::capped(dec!(50000), dec!(0.06)),
    Bracket::capped(dec!(70000), dec!(0.11)),
    Bracket::capped(dec!(100000), dec!(0.19)),
    Bracket::capped(dec!(400000), dec!(0.25)),
    Bracket::capped(dec!(600000), dec!(0.26)),
    Bracket::capped(dec!(2000000), dec!(0.28)),
    Bracket::unbounded(dec!(0.30)),
];

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BracketError {
    #[error("bracket table is empty")]
    Empty,
    #[error("bracket limit {limit} does not exceed previous limit {prev}")]
    NotIncreasing { prev: Decimal, limit: Decimal },
    #[error("only the last bracket may be unbounded (bracket {0})")]
    UnboundedBeforeEnd(usize),
    #[error("last bracket must be unbounded")]
    BoundedEnd,
    #[error("rate {0} is outside 0..=1")]
    RateOutOfRange(Decimal),
}

/// Check that a table can be walked by the progressive calculation.
pub fn validate(brackets: &[Bracket]) -> Result<(), BracketError> {
    let (last, init) = brackets.split_last().ok_or(BracketError::Empty)?;

    let mut prev = Decimal::ZERO;
    for (index, bracket) in init.iter().enumerate() {
        let limit = bracket
            .upper_limit
            .ok_or(BracketError::UnboundedBeforeEnd(index))?;
        if limit <= prev {
            return Err(BracketError::NotIncreasing { prev, limit });
        }
        prev = limit;
    }
    if last.upper_limit.is_some() {
        return Err(BracketError::BoundedEnd);
    }

    match brackets
        .iter()
        .find(|b| b.rate < Decimal::ZERO || b.rate > Decimal::ONE)
    {
        Some(b) => Err(BracketError::RateOutOfRange(b.rate)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resident_table_is_valid() {
        assert_eq!(validate(RESIDENT_BRACKETS), Ok(()));
    }

    #[test]
    fn resident_table_rates_increase() {
        let rates: Vec<_> = RESIDENT_BRACKETS.iter().map(|b| b.rate).collect();
        assert!(rates.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(rates.first(), Some(&dec!(0)));
        assert_eq!(rates.last(), Some(&dec!(0.30)));
    }

    #[test]
    fn width_is_distance_from_previous_limit() {
        assert_eq!(RESIDENT_BRACKETS[1].width(dec!(5000)), Some(dec!(15000)));
        assert_eq!(RESIDENT_BRACKETS[9].width(dec!(2000000)), None);
    }

    #[test]
    fn empty_table_rejected() {
        assert_eq!(validate(&[]), Err(BracketError::Empty));
    }

    #[test]
    fn non_increasing_limits_rejected() {
        let table = [
            Bracket::capped(dec!(100), dec!(0)),
            Bracket::capped(dec!(100), dec!(0.1)),
            Bracket::unbounded(dec!(0.2)),
        ];
        assert_eq!(
            validate(&table),
            Err(BracketError::NotIncreasing {
                prev: dec!(100),
                limit: dec!(100)
            })
        );
    }

    #[test]
    fn bounded_top_bracket_rejected() {
        let table = [Bracket::capped(dec!(100), dec!(0.1))];
        assert_eq!(validate(&table), Err(BracketError::BoundedEnd));
    }

    #[test]
    fn unbounded_middle_bracket_rejected() {
        let table = [Bracket::unbounded(dec!(0.1)), Bracket::unbounded(dec!(0.2))];
        assert_eq!(validate(&table), Err(BracketError::UnboundedBeforeEnd(0)));
    }

    #[test]
    fn rate_above_one_rejected() {
        let table = [Bracket::unbounded(dec!(1.5))];
        assert_eq!(validate(&table), Err(BracketError::RateOutOfRange(dec!(1.5))));
    }
}
