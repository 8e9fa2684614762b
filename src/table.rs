use std::collections::{BTreeMap,HashSet};

use chrono::naive::NaiveDate;
use log::info;

use super::error::{Result,Error};


pub type Column = Vec<Option<f64>>;
pub type DailyTable = Table;
pub type TotalTable = Table;

/// Date-indexed table with one column per region, in source column order.
#[derive(Clone,Debug,PartialEq)]
pub struct Table {
    dates: Vec<NaiveDate>,
    columns: Vec<(String,Column)>,
}

impl Table {

    pub fn new(dates: Vec<NaiveDate>, columns: Vec<(String,Column)>) -> Result<Self> {

	if let Some(w) = dates.windows(2).find(|w| w[0] >= w[1]) {
	    return Err(Error::Schema(format!(
		"dates not strictly increasing at {}", w[1])));
	}

	let mut seen = HashSet::new();
	for (region,values) in &columns {
	    if region.is_empty() {
		return Err(Error::Schema("empty region name".to_string()));
	    }
	    if !seen.insert(region.as_str()) {
		return Err(Error::Schema(format!("duplicate region {}", region)));
	    }
	    if values.len() != dates.len() {
		return Err(Error::Schema(format!(
		    "region {} has {} values for {} dates",
		    region, values.len(), dates.len())));
	    }
	}

	Ok(Self { dates, columns })

    }

    pub fn dates(&self) -> &[NaiveDate] {
	&self.dates
    }

    pub fn columns(&self) -> &[(String,Column)] {
	&self.columns
    }

    pub fn regions(&self) -> impl Iterator<Item = &str> {
	self.columns.iter().map(|(region,_)| region.as_str())
    }

    pub fn column(&self, region: &str) -> Option<&Column> {
	self.columns.iter().find(|(r,_)| r == region).map(|(_,values)| values)
    }

    pub fn len(&self) -> usize {
	self.dates.len()
    }

    /// Running sum per region. Missing daily values contribute zero, so
    /// the totals have no missing cells.
    pub fn cumulative(&self) -> TotalTable {

	let mut filled = 0;
	let columns = self.columns.iter().map(|(region,values)| {
	    let mut sum = 0.0;
	    (region.clone(), values.iter().map(|v| {
		match v {
		    Some(v) => sum += v,
		    None => filled += 1,
		}
		Some(sum)
	    }).collect())
	}).collect();

	if filled > 0 {
	    info!("Cumulative totals: {} missing daily values counted as zero", filled);
	}

	Self { dates: self.dates.clone(), columns }

    }

}


/// Daily and total tables side by side, under `<Region>_New` and
/// `<Region>_Total` column names.
#[derive(Clone,Debug)]
pub struct WideFrame {
    columns: BTreeMap<String,Column>,
}

impl WideFrame {

    pub fn join(daily: &DailyTable, total: &TotalTable) -> Result<Self> {

	if daily.dates != total.dates {
	    return Err(Error::Schema("daily and total tables have different dates".to_string()));
	}

	let mut columns = BTreeMap::new();
	for (region,values) in &daily.columns {
	    columns.insert(format!("{}_New", region), values.clone());
	}
	for (region,values) in &total.columns {
	    if daily.column(region).is_none() {
		return Err(Error::Schema(format!("region {} has totals but no daily values", region)));
	    }
	    columns.insert(format!("{}_Total", region), values.clone());
	}
	if columns.len() != 2 * daily.columns.len() {
	    return Err(Error::Schema("daily and total tables have different regions".to_string()));
	}

	Ok(Self { columns })

    }

    pub fn column(&self, name: &str) -> Option<&Column> {
	self.columns.get(name)
    }

    /// `(total, new)` pairs of a region, leaving out dates where either is missing.
    pub fn series(&self, region: &str) -> Option<Vec<(f64,f64)>> {
	let new = self.column(&format!("{}_New", region))?;
	let total = self.column(&format!("{}_Total", region))?;
	Some(total.iter().zip(new).filter_map(|(t,n)| Some(((*t)?, (*n)?))).collect())
    }

}
