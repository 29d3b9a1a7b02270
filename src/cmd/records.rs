//! Records command - list saved tax records

use crate::core::TaxRecord;
use crate::store::RecordStore;
use crate::utils::{format_rm, write_csv};
use clap::Args;
use rust_decimal::Decimal;
use std::io;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct RecordsCommand {
    /// Only show records for this IC number
    #[arg(long)]
    ic: Option<String>,

    /// Output as CSV instead of formatted table
    #[arg(long, conflicts_with = "json")]
    csv: bool,

    /// Output as JSON instead of formatted table
    #[arg(long)]
    json: bool,
}

#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "#")]
    row_num: usize,
    #[tabled(rename = "IC Number")]
    ic_number: String,
    #[tabled(rename = "Income")]
    income: String,
    #[tabled(rename = "Relief")]
    tax_relief: String,
    #[tabled(rename = "Tax Payable")]
    tax_payable: String,
}

impl RecordsCommand {
    pub fn exec(&self, store: &RecordStore) -> anyhow::Result<()> {
        let found = match &self.ic {
            Some(ic) => store.find(ic)?,
            None => store.read_all()?,
        };
        let Some(records) = found else {
            println!("No data: {} does not exist", store.path().display());
            return Ok(());
        };

        if self.csv {
            write_csv(&records, io::stdout())
        } else if self.json {
            println!("{}", serde_json::to_string_pretty(&records)?);
            Ok(())
        } else {
            print_table(&records);
            Ok(())
        }
    }
}

fn print_table(records: &[TaxRecord]) {
    if records.is_empty() {
        println!("No records found");
        return;
    }

    let rows: Vec<_> = records
        .iter()
        .enumerate()
        .map(|(i, r)| RecordRow {
            row_num: i + 1,
            ic_number: r.ic_number.clone(),
            income: format_rm(r.income),
            tax_relief: format_rm(r.tax_relief),
            tax_payable: format_rm(r.tax_payable),
        })
        .collect();
    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
        .to_string();
    println!("{}", table);

    let total: Decimal = records.iter().map(|r| r.tax_payable).sum();
    println!("  {} record(s), total tax payable {}", records.len(), format_rm(total));
}
