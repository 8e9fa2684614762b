use std::{io,fs};
use std::fs::File;
use std::io::Write;
use std::path::{Path,PathBuf};

use log::warn;
use serde::Serialize;
use serde_json::json;
use unidecode::unidecode;

use super::config::{Config,Group};
use super::error::{Result,Error};
use super::table::WideFrame;
use super::trend::Prediction;


pub const TREND_LABEL : &str = "World Daily Trend";

#[derive(Serialize,Debug,PartialEq)]
#[serde(rename_all = "PascalCase")]
struct Point<'a> {
    region: &'a str,
    total: f64,
    new: f64,
}


/// Writes the log-log chart of new against total cases for one group,
/// returning the path of the written file.
pub fn trend_graph(config: &Config, group: &Group, frame: &WideFrame,
		   prediction: &Prediction) -> Result<PathBuf> {
    let path = config.graph_path.join(format!("{}.html", slug(&group.title)));
    graph(config, group, frame, prediction, &path)
	.map_err(|err| Error::Render(group.title.clone(), Box::new(err)))?;
    Ok(path)
}


fn escape_html(text: &str) -> String {
    text.chars().fold(String::with_capacity(text.len()), |mut out, c| {
	match c {
	    '&' => out.push_str("&amp;"),
	    '<' => out.push_str("&lt;"),
	    '>' => out.push_str("&gt;"),
	    '"' => out.push_str("&quot;"),
	    '\'' => out.push_str("&#39;"),
	    c => out.push(c),
	}
	out
    })
}


pub fn slug(title: &str) -> String {
    unidecode(title).to_lowercase().split_whitespace().collect::<Vec<_>>().join("-")
}


/// Chart points of the group's regions and the trend curve. Points
/// without a position on log axes are left out.
fn points<'a>(group: &'a Group, frame: &WideFrame,
	      prediction: &Prediction) -> (Vec<&'a str>, Vec<Point<'a>>) {

    let mut regions = Vec::new();
    let mut points = Vec::new();

    for region in &group.regions {
	match frame.series(region) {
	    None => warn!("{}: no data for {}", group.title, region),
	    Some(series) => {
		regions.push(region.as_str());
		points.extend(series.into_iter().map(
		    |(total,new)| Point { region: region.as_str(), total, new }));
	    }
	}
    }

    points.extend(prediction.points().iter().map(
	|p| Point { region: TREND_LABEL, total: p.level, new: p.predicted }));

    points.retain(|p| p.total.is_finite() && p.new.is_finite()
		  && p.total > 0.0 && p.new > 0.0);

    (regions, points)

}


fn graph(config: &Config, group: &Group, frame: &WideFrame,
	 prediction: &Prediction, path: &Path) -> Result<()> {

    let (regions, points) = points(group, frame, prediction);
    let title = &group.title;

    let mut domain : Vec<&str> = regions.clone();
    domain.push(TREND_LABEL);
    let mut range : Vec<&str> = regions.iter().map(|r| config.color(group, r)).collect();
    range.push(&config.trend_color);

    if let Some(dir) = path.parent() {
	fs::create_dir_all(dir)?;
    }
    let mut out = io::BufWriter::new(File::create(path)?);

    write!(out, "<!DOCTYPE html><html><head>")?;
    write!(out, "<meta charset=\"UTF-8\">")?;
    write!(out, "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">")?;
    write!(out, "<title>{}</title>", escape_html(title))?;
    write!(out, "<script src=\"https://cdn.jsdelivr.net/npm/vega@5\"></script>")?;
    write!(out, "<script src=\"https://cdn.jsdelivr.net/npm/vega-lite@4\"></script>")?;
    write!(out, "<script src=\"https://cdn.jsdelivr.net/npm/vega-embed\"></script>")?;
    write!(out, "</head>")?;
    write!(out, "<body>")?;
    write!(out, "<div id=\"vis\" style=\"overflow: hidden; position: absolute;top: 0; left: 0; right: 0; bottom: 0;\"></div>")?;
    write!(out, "<script type=\"text/javascript\">")?;
    write!(out, "var spec = ")?;

    serde_json::to_writer_pretty(out.by_ref(), &json!({
	"$schema": "https://vega.github.io/schema/vega-lite/v4.json",
	"height": "container",
	"width": "container",
	"title": title,
	"data": {
	    "values": points
	},
	"mark": {
	    "type": "line",
	    "point": false
	},
	"selection": {
	    "Highlight": {"bind":"legend","type":"multi","fields":["Region"]},
	    "Grid": {"bind":"scales","type":"interval"}
	},
	"encoding": {
	    "color": {
		"field": "Region",
		"type": "nominal",
		"sort": domain.clone(),
		"scale": {"domain": domain, "range": range},
		"legend": {"columns": 2}
	    },
	    "x": {
		"field": "Total",
		"title": "Total cases",
		"scale": {"type": "log"},
		"type": "quantitative"
	    },
	    "y": {
		"field": "New",
		"title": "New cases",
		"scale": {"type": "log"},
		"type": "quantitative"
	    },
	    "order": {"field": "Total", "type": "quantitative"},
	    "opacity": {"value": 0.2, "condition": {"value": 1, "selection": "Highlight"}},
	    "tooltip": [
		{"field": "Region", "type": "nominal"},
		{"field": "Total", "type": "quantitative", "format": ".0f"},
		{"field": "New", "type": "quantitative", "format": ".0f"}
	    ]
	}
    }))?;

    write!(out, ";vegaEmbed('#vis', spec,{{}}).then(function(result) {{")?;
    write!(out, "}}).catch(console.error);")?;
    write!(out, "</script>")?;
    write!(out, "</body></html>")?;
    out.flush()?;

    Ok(())

}


#[cfg(test)]
mod tests {

    use super::*;
    use chrono::naive::NaiveDate;
    use crate::table::Table;
    use crate::trend::TrendModel;

    fn frame() -> WideFrame {
	let dates = (1..=3).map(|d| NaiveDate::from_ymd_opt(2020, 3, d).unwrap()).collect();
	let daily = Table::new(dates, vec![
	    ("Norway".to_string(), vec![Some(1.0), Some(0.0), Some(3.0)]),
	    ("Sweden".to_string(), vec![Some(2.0), Some(5.0), None]),
	]).unwrap();
	WideFrame::join(&daily, &daily.cumulative()).unwrap()
    }

    fn prediction() -> Prediction {
	TrendModel { intercept: -5.0, slope: 0.1 }.predict_levels(&[1.0, 100.0, 1000.0])
    }

    #[test]
    fn slugs_are_ascii_and_dashed() {
	assert_eq!(slug("Nordic Countries"), "nordic-countries");
	assert_eq!(slug("Côte  d'Ivoire"), "cote-d'ivoire");
    }

    #[test]
    fn points_skip_missing_regions_and_unplottable_values() {
	let group = Group::new("Test", &["Norway", "Atlantis", "Sweden"]);
	let (regions, points) = points(&group, &frame(), &prediction());
	assert_eq!(regions, vec!["Norway", "Sweden"]);
	assert_eq!(points, vec![
	    Point { region: "Norway", total: 1.0, new: 1.0 },
	    Point { region: "Norway", total: 4.0, new: 3.0 },
	    Point { region: "Sweden", total: 2.0, new: 2.0 },
	    Point { region: "Sweden", total: 7.0, new: 5.0 },
	    Point { region: TREND_LABEL, total: 100.0, new: 5.0 },
	    Point { region: TREND_LABEL, total: 1000.0, new: 95.0 },
	]);
    }

    #[test]
    fn writes_chart_file() {
	let dir = tempfile::tempdir().unwrap();
	let config = Config { graph_path: dir.path().join("graphs"), ..Config::default() };
	let path = trend_graph(&config, &config.highlight, &frame(), &prediction()).unwrap();
	assert_eq!(path, dir.path().join("graphs/nordic-countries.html"));
	let html = fs::read_to_string(&path).unwrap();
	assert!(html.contains("<title>Nordic Countries</title>"));
	assert!(html.contains("\"log\""));
	assert!(!html.contains("\"darkmagenta\""));
	assert!(html.contains("\"red\""));
	assert!(html.contains("\"lime\""));
	assert!(html.contains(TREND_LABEL));
    }

    #[test]
    fn escapes_page_title() {
	let dir = tempfile::tempdir().unwrap();
	let config = Config { graph_path: dir.path().join("graphs"), ..Config::default() };
	let group = Group::new("R&D <test>", &["Norway"]);
	let path = trend_graph(&config, &group, &frame(), &prediction()).unwrap();
	let html = fs::read_to_string(&path).unwrap();
	assert!(html.contains("<title>R&amp;D &lt;test&gt;</title>"));
	assert_eq!(escape_html("\"Nordic\" 'Countries'"), "&quot;Nordic&quot; &#39;Countries&#39;");
    }

    #[test]
    fn unwritable_directory_is_a_render_error() {
	let dir = tempfile::tempdir().unwrap();
	let blocker = dir.path().join("graphs");
	fs::write(&blocker, "not a directory").unwrap();
	let config = Config { graph_path: blocker, ..Config::default() };
	let res = trend_graph(&config, &config.groups[0], &frame(), &prediction());
	assert!(matches!(res, Err(Error::Render(ref group, _)) if group == "Europe"));
    }

}
