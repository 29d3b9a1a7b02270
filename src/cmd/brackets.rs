//! Brackets command - print the resident tax scale

use crate::core::{Bracket, RESIDENT_BRACKETS};
use crate::utils::{format_limit, format_rate, format_rm};
use clap::Args;
use rust_decimal::Decimal;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct BracketsCommand {
    /// Output as JSON instead of formatted table
    #[arg(long)]
    json: bool,
}

#[derive(Tabled)]
struct BracketRow {
    #[tabled(rename = "Chargeable From")]
    from: String,
    #[tabled(rename = "To")]
    to: String,
    #[tabled(rename = "Rate")]
    rate: String,
    #[tabled(rename = "Max Tax In Bracket")]
    max_tax: String,
}

impl BracketsCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(RESIDENT_BRACKETS)?);
        } else {
            println!("{}", bracket_table(RESIDENT_BRACKETS));
        }
        Ok(())
    }
}

fn bracket_table(brackets: &[Bracket]) -> String {
    let mut prev_limit = Decimal::ZERO;
    let rows: Vec<_> = brackets
        .iter()
        .map(|bracket| {
            let row = BracketRow {
                from: format_rm(prev_limit),
                to: format_limit(bracket.upper_limit),
                rate: format_rate(bracket.rate),
                max_tax: bracket
                    .width(prev_limit)
                    .map_or_else(|| "-".to_string(), |w| format_rm(w * bracket.rate)),
            };
            if let Some(limit) = bracket.upper_limit {
                prev_limit = limit;
            }
            row
        })
        .collect();

    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lists_every_bracket() {
        let table = bracket_table(RESIDENT_BRACKETS);
        assert!(table.contains("RM5000.00"));
        assert!(table.contains("and above"));
        assert!(table.contains("30%"));
        // 15000 @ 1%
        assert!(table.contains("RM150.00"));
    }
}
