//! Delimited rendering of a scoring run, the shape consumed by the
//! invocation boundary: `company,year,<metric...>` with two-decimal
//! values and an empty cell for null metrics.

use std::io::Write;

use crate::store::types::FinalResult;

pub fn write_csv<W: Write>(
    writer: W,
    metric_names: &[String],
    results: &FinalResult,
) -> Result<(), csv::Error> {
    let mut out = csv::Writer::from_writer(writer);

    let mut header = vec!["company".to_string(), "year".to_string()];
    header.extend(metric_names.iter().cloned());
    out.write_record(&header)?;

    // FinalResult is a BTreeMap, so rows come out sorted by company, year.
    for (key, set) in results {
        let mut row = vec![key.company_id.clone(), key.year.to_string()];
        for name in metric_names {
            match set.get(name) {
                Some(value) => row.push(format!("{value:.2}")),
                None => row.push(String::new()),
            }
        }
        out.write_record(&row)?;
    }

    out.flush()?;
    Ok(())
}
