//! Submit command - verify, calculate and save a tax record

use super::read_amounts;
use crate::cmd::calculate::print_computation;
use crate::core::{compute, verify_user, TaxRecord, RESIDENT_BRACKETS};
use crate::store::RecordStore;
use anyhow::Context;
use clap::Args;

#[derive(Args, Debug)]
pub struct SubmitCommand {
    /// 12 digit IC number
    #[arg(long)]
    ic: String,

    /// Last four digits of the IC number
    #[arg(short, long)]
    password: String,

    /// Annual income
    #[arg(short, long, allow_hyphen_values = true)]
    income: String,

    /// Total tax relief claimed
    #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
    relief: String,

    /// Print the saved record as JSON
    #[arg(long)]
    json: bool,
}

impl SubmitCommand {
    pub fn exec(&self, store: &RecordStore) -> anyhow::Result<()> {
        if !verify_user(&self.ic, &self.password) {
            anyhow::bail!("Invalid IC number or password, nothing saved.");
        }

        let (income, tax_relief) = read_amounts(&self.income, &self.relief)?;
        let computation = compute(RESIDENT_BRACKETS, income, tax_relief)?;
        let record = TaxRecord::from_computation(self.ic.as_str(), &computation);

        store
            .append(&record)
            .with_context(|| format!("saving record for {}", record.ic_number))?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&record)?);
        } else {
            print_computation(&computation, false);
            println!("  Saved to {}", store.path().display());
        }
        Ok(())
    }
}
