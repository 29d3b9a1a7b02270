use rust_decimal::Decimal;

pub fn write_csv<I, R, W>(records: I, writer: W) -> anyhow::Result<()>
where
    I: IntoIterator<Item = R>,
    R: serde::Serialize,
    W: std::io::Write,
{
    let mut wtr = csv::Writer::from_writer(writer);
    for record in records.into_iter() {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn format_rm(amount: Decimal) -> String {
    if amount < Decimal::ZERO {
        format!("-RM{:.2}", amount.abs())
    } else {
        format!("RM{:.2}", amount)
    }
}

pub fn format_rate(rate: Decimal) -> String {
    format!("{}%", (rate * Decimal::ONE_HUNDRED).normalize())
}

pub fn format_limit(limit: Option<Decimal>) -> String {
    limit.map_or_else(|| "and above".to_string(), format_rm)
}
