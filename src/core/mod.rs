pub mod brackets;
pub mod credentials;
pub mod record;
pub mod tax;

// Flat public surface for domain types and functions.
pub use brackets::{validate as validate_brackets, Bracket, BracketError, RESIDENT_BRACKETS};
pub use credentials::{is_ic_number, verify_user};
pub use record::{CsvField, TaxRecord};
pub use tax::{
    calculate_tax, calculate_tax_with, chargeable_income, compute, parse_amount, round_half_up,
    BandCharge, TaxComputation, TaxError, MAX_AMOUNT,
};
