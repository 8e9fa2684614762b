use std::collections::BTreeMap;

use chrono::naive::NaiveDate;

use super::error::{Result,Error};
use super::table::{Table,DailyTable,TotalTable};


#[derive(Clone,Debug,PartialEq)]
pub struct LongRecord {
    pub region: String,
    pub date: NaiveDate,
    pub value: Option<f64>,
}

/// One pooled (region, date) observation of daily and cumulative cases.
#[derive(Clone,Debug,PartialEq)]
pub struct Observation {
    pub region: String,
    pub date: NaiveDate,
    pub daily: Option<f64>,
    pub total: Option<f64>,
}


/// Flattens a wide table into one record per cell, sorted by region and
/// then chronologically.
pub fn long_form(table: &Table) -> Vec<LongRecord> {
    let mut records : Vec<LongRecord> = table.columns().iter().flat_map(
	|(region,values)| table.dates().iter().zip(values).map(
	    move |(date,value)| LongRecord {
		region: region.clone(),
		date: *date,
		value: *value,
	    })
    ).collect();
    records.sort_by(|a,b| (&a.region, a.date).cmp(&(&b.region, b.date)));
    records
}


/// Joins the daily and total long forms on (region, date). Both sides
/// must cover the same keys.
pub fn join(daily: &[LongRecord], total: &[LongRecord]) -> Result<Vec<Observation>> {

    let mut totals : BTreeMap<(&str,NaiveDate),Option<f64>> = total.iter().map(
	|r| ((r.region.as_str(), r.date), r.value)
    ).collect();

    let mut observations = daily.iter().map(|r| {
	let total = totals.remove(&(r.region.as_str(), r.date)).ok_or_else(
	    || Error::Schema(format!("no total for {} on {}", r.region, r.date)))?;
	Ok(Observation {
	    region: r.region.clone(),
	    date: r.date,
	    daily: r.value,
	    total,
	})
    }).collect::<Result<Vec<_>>>()?;

    if let Some((region,date)) = totals.keys().next() {
	return Err(Error::Schema(format!("no daily value for {} on {}", region, date)));
    }

    observations.sort_by(|a,b| (&a.region, a.date).cmp(&(&b.region, b.date)));
    Ok(observations)

}


pub fn observations(daily: &DailyTable, total: &TotalTable) -> Result<Vec<Observation>> {
    join(&long_form(daily), &long_form(total))
}
