use std::fs;
use std::path::Path;
use std::time::Duration;
use std::collections::BTreeMap;

use chrono::naive::NaiveDate;
use encoding_rs::UTF_8;
use log::{info,warn};

use super::config::Config;
use super::error::{Result,Error};
use super::table::{Table,Column,DailyTable};


/// Daily new cases per region, from the cache when it is recent enough
/// and still parses. Otherwise the table is downloaded again.
pub fn new_cases(config: &Config) -> Result<DailyTable> {

    let cache_file = config.cache_path.join("owid").join("new_cases.csv");

    if is_fresh(&cache_file, config.cache_ttl) {
	match fs::read_to_string(&cache_file).map_err(Error::from).and_then(|text| parse(&text)) {
	    Ok(table) => {
		info!("Using cached {}", cache_file.display());
		return Ok(table);
	    }
	    Err(err) => warn!("Ignoring cached {}: {}", cache_file.display(), err),
	}
    }

    let text = download(&config.source_url, config.request_timeout).map_err(
	|err| Error::SourceUnavailable(config.source_url.clone(), Box::new(err)))?;
    store(&cache_file, &text)

}


/// Parses downloaded text and caches it only once it parses.
fn store(cache_file: &Path, text: &str) -> Result<DailyTable> {
    let table = parse(text)?;
    if let Some(dir) = cache_file.parent() {
	fs::create_dir_all(dir)?;
    }
    fs::write(cache_file, text)?;
    Ok(table)
}


fn is_fresh(cache_file: &Path, ttl: Duration) -> bool {
    fs::metadata(cache_file).and_then(|m| m.modified()).ok()
	.and_then(|modified| modified.elapsed().ok())
	.map_or(false, |age| age < ttl)
}


fn download(url: &str, timeout: Duration) -> Result<String> {

    info!("Downloading {}...", url);

    let res = reqwest::blocking::Client::builder()
	.timeout(timeout)
	.build()?
	.get(url)
	.send()?;

    match res.status().as_u16() {
	200 => {
	    let bytes = res.bytes()?;
	    let (text, malformed) = UTF_8.decode_with_bom_removal(&bytes);
	    if malformed {
		warn!("Replaced malformed UTF-8 sequences in {}", url);
	    }
	    Ok(text.into_owned())
	}
	_ => Err(Error::HttpError(res.status())),
    }

}


/// Parses the wide `date,<region>,<region>,...` table. Empty cells are
/// missing; cells that are not finite numbers are counted, reported and
/// treated as missing.
pub fn parse(text: &str) -> Result<DailyTable> {

    let mut reader = csv::ReaderBuilder::new()
	.flexible(true)
	.from_reader(text.trim_start_matches('\u{feff}').as_bytes());

    let headers = reader.headers()?.clone();
    match headers.get(0).map(str::trim) {
	Some("date") => {}
	other => return Err(Error::Schema(format!(
	    "expected a date column first, found {:?}", other))),
    }

    let regions : Vec<String> = headers.iter().skip(1).map(|h| h.trim().to_string()).collect();
    if regions.is_empty() {
	return Err(Error::Schema("no region columns".to_string()));
    }

    let mut rows = BTreeMap::new();
    let mut invalid = 0;

    for record in reader.records() {

	let record = record?;
	let line = record.position().map_or(0, |p| p.line());

	if record.len() != headers.len() {
	    return Err(Error::Schema(format!(
		"line {}: {} fields, expected {}", line, record.len(), headers.len())));
	}

	let field = record.get(0).unwrap_or("").trim();
	let date = NaiveDate::parse_from_str(field, "%Y-%m-%d").map_err(
	    |err| Error::Schema(format!("line {}: bad date {:?}: {}", line, field, err)))?;

	let values : Column = record.iter().skip(1).map(|cell| {
	    let cell = cell.trim();
	    match cell.parse::<f64>() {
		_ if cell.is_empty() => None,
		Ok(v) if v.is_finite() => Some(v),
		_ => { invalid += 1; None }
	    }
	}).collect();

	if rows.insert(date, values).is_some() {
	    return Err(Error::Schema(format!("line {}: duplicate date {}", line, date)));
	}

    }

    if rows.is_empty() {
	return Err(Error::Schema("no rows".to_string()));
    }

    if invalid > 0 {
	warn!("Treated {} non-numeric cells as missing", invalid);
    }

    let dates : Vec<NaiveDate> = rows.keys().cloned().collect();
    let mut columns : Vec<(String,Column)> = regions.into_iter().map(
	|region| (region, Vec::with_capacity(dates.len()))
    ).collect();

    for (_,values) in rows {
	for ((_,column),value) in columns.iter_mut().zip(values) {
	    column.push(value);
	}
    }

    info!("Loaded {} regions over {} dates", columns.len(), dates.len());
    Table::new(dates, columns)

}
