//! Verify command - check an IC number / password pair

use crate::core::verify_user;
use clap::Args;

#[derive(Args, Debug)]
pub struct VerifyCommand {
    /// 12 digit IC number
    #[arg(long)]
    ic: String,

    /// Last four digits of the IC number
    #[arg(short, long)]
    password: String,
}

impl VerifyCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        if verify_user(&self.ic, &self.password) {
            println!("\u{2713} Credentials valid.");
            Ok(())
        } else {
            println!("\u{2717} Invalid IC number or password.");
            std::process::exit(1);
        }
    }
}
