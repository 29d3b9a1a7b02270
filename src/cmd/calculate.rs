//! Calculate command - tax payable for an income and relief

use super::read_amounts;
use crate::core::{compute, TaxComputation, RESIDENT_BRACKETS};
use crate::utils::{format_limit, format_rate, format_rm};
use clap::Args;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct CalculateCommand {
    /// Annual income
    #[arg(short, long, allow_hyphen_values = true)]
    income: String,

    /// Total tax relief claimed
    #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
    relief: String,

    /// Show how much income falls in each bracket
    #[arg(short, long)]
    breakdown: bool,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

impl CalculateCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let (income, tax_relief) = read_amounts(&self.income, &self.relief)?;
        let computation = compute(RESIDENT_BRACKETS, income, tax_relief)?;
        log::info!(
            "Chargeable income {}, tax payable {}",
            computation.chargeable,
            computation.tax_payable
        );

        if self.json {
            println!("{}", serde_json::to_string_pretty(&computation)?);
        } else {
            print_computation(&computation, self.breakdown);
        }
        Ok(())
    }
}

#[derive(Tabled)]
struct BandRow {
    #[tabled(rename = "From")]
    from: String,
    #[tabled(rename = "To")]
    to: String,
    #[tabled(rename = "Rate")]
    rate: String,
    #[tabled(rename = "Taxed")]
    taxed: String,
    #[tabled(rename = "Tax")]
    tax: String,
}

pub(crate) fn print_computation(computation: &TaxComputation, breakdown: bool) {
    println!();
    println!(
        "  Income: {} | Relief: {}",
        format_rm(computation.income),
        format_rm(computation.tax_relief)
    );
    println!("  Chargeable income: {}", format_rm(computation.chargeable));

    if breakdown && !computation.bands.is_empty() {
        let rows: Vec<_> = computation
            .bands
            .iter()
            .map(|band| BandRow {
                from: format_rm(band.lower),
                to: format_limit(band.upper),
                rate: format_rate(band.rate),
                taxed: format_rm(band.taxed),
                tax: band.tax.normalize().to_string(),
            })
            .collect();
        let table = Table::new(rows)
            .with(Style::rounded())
            .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
            .to_string();
        println!();
        println!("{}", table);
    }

    println!();
    println!("  Tax payable: {}", format_rm(computation.tax_payable));
    println!();
}
