use std::env;
use std::iter;
use std::path::PathBuf;
use std::time::Duration;
use std::collections::HashMap;

use super::regions;
use super::trend::DEFAULT_LEVELS;


pub const SOURCE_URL : &str = "https://raw.githubusercontent.com/owid/covid-19-data\
			       /master/public/data/ecdc/new_cases.csv";


/// A set of regions drawn on one chart. Colors given here take precedence
/// over the global color table.
#[derive(Clone,Debug)]
pub struct Group {
    pub title: String,
    pub regions: Vec<String>,
    pub colors: HashMap<String,String>,
}

impl Group {
    pub fn new(title: &str, regions: &[&str]) -> Self {
	Self {
	    title: title.to_string(),
	    regions: regions.iter().map(|r| r.to_string()).collect(),
	    colors: HashMap::new(),
	}
    }
}


#[derive(Clone,Debug)]
pub struct Config {
    pub source_url: String,
    pub cache_path: PathBuf,
    pub graph_path: PathBuf,
    pub cache_ttl: Duration,
    pub request_timeout: Duration,
    pub levels: Vec<f64>,
    pub trend_color: String,
    pub colors: HashMap<String,String>,
    pub highlight: Group,
    pub groups: Vec<Group>,
}

impl Default for Config {
    fn default() -> Self {
	Self {
	    source_url: SOURCE_URL.to_string(),
	    cache_path: PathBuf::from("cache"),
	    graph_path: PathBuf::from("graphs"),
	    cache_ttl: Duration::new(1800, 0),
	    request_timeout: Duration::new(60, 0),
	    levels: DEFAULT_LEVELS.to_vec(),
	    trend_color: regions::TREND_COLOR.to_string(),
	    colors: regions::COLORS.iter().map(
		|(region,color)| (region.to_string(), color.to_string())
	    ).collect(),
	    highlight: Group {
		title: regions::HIGHLIGHT_TITLE.to_string(),
		regions: regions::HIGHLIGHT.iter().map(|(r,_)| r.to_string()).collect(),
		colors: regions::HIGHLIGHT.iter().map(
		    |(r,c)| (r.to_string(), c.to_string())
		).collect(),
	    },
	    groups: regions::GROUPS.iter().map(
		|(title,regions)| Group::new(title, regions)
	    ).collect(),
	}
    }
}

impl Config {

    /// Defaults, with the source and output locations overridable through
    /// `COVID_TREND_URL`, `COVID_TREND_CACHE` and `COVID_TREND_GRAPHS`.
    pub fn from_env() -> Self {
	let mut config = Self::default();
	if let Ok(url) = env::var("COVID_TREND_URL") {
	    config.source_url = url;
	}
	if let Ok(path) = env::var("COVID_TREND_CACHE") {
	    config.cache_path = PathBuf::from(path);
	}
	if let Ok(path) = env::var("COVID_TREND_GRAPHS") {
	    config.graph_path = PathBuf::from(path);
	}
	config
    }

    /// The highlighted group first, then the region groups.
    pub fn all_groups(&self) -> impl Iterator<Item = &Group> {
	iter::once(&self.highlight).chain(self.groups.iter())
    }

    pub fn color<'a>(&'a self, group: &'a Group, region: &str) -> &'a str {
	group.colors.get(region)
	    .or_else(|| self.colors.get(region))
	    .map_or(regions::FALLBACK_COLOR, |c| c.as_str())
    }

}


#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn highlight_comes_first() {
	let config = Config::default();
	let titles : Vec<&str> = config.all_groups().map(|g| g.title.as_str()).collect();
	assert_eq!(titles.len(), 9);
	assert_eq!(titles[0], "Nordic Countries");
	assert_eq!(titles[1], "Europe");
	assert_eq!(titles[8], "Pacific Islands");
    }

    #[test]
    fn group_colors_override_global_colors() {
	let config = Config::default();
	assert_eq!(config.color(&config.highlight, "Norway"), "red");
	assert_eq!(config.color(&config.highlight, "World"), "darkmagenta");
	assert_eq!(config.color(&config.groups[0], "Norway"), config.colors["Norway"]);
	assert_eq!(config.color(&config.groups[0], "Atlantis"), "gray");
    }

    #[test]
    fn default_levels_are_powers_of_ten() {
	let config = Config::default();
	assert_eq!(config.levels.first(), Some(&1.0));
	assert_eq!(config.levels.last(), Some(&10_000_000.0));
	assert_eq!(config.levels.len(), 8);
    }

}
