//! Schema command - describe the record file format

use crate::core::TaxRecord;
use clap::Args;
use schemars::schema_for;

#[derive(Args, Debug)]
pub struct SchemaCommand {
    /// Output format: json-schema, csv-header or csv-fields
    #[arg(value_enum, default_value = "csv-fields")]
    format: SchemaFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SchemaFormat {
    /// JSON Schema for a single record
    JsonSchema,
    /// CSV header row with column names
    CsvHeader,
    /// CSV column descriptions
    CsvFields,
}

impl SchemaCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        match self.format {
            SchemaFormat::JsonSchema => {
                let schema = schema_for!(TaxRecord);
                println!("{}", serde_json::to_string_pretty(&schema)?);
            }
            SchemaFormat::CsvHeader => println!("{}", TaxRecord::csv_header().join(",")),
            SchemaFormat::CsvFields => {
                println!("Record File Format");
                println!("==================");
                println!();
                for field in TaxRecord::csv_schema() {
                    let req = if field.required { "required" } else { "optional" };
                    println!(
                        "{:12} {:6} ({:8})  {}",
                        field.name, field.kind, req, field.description
                    );
                }
                println!();
                println!("Amounts are plain decimals, tax_payable is rounded half-up to cents.");
            }
        }
        Ok(())
    }
}
