mod config;
mod error;
mod graph;
mod owid;
mod regions;
mod reshape;
mod table;
mod trend;

use log::{info,error};

use config::Config;
use error::Result;
use table::WideFrame;


fn main() -> Result<()> {

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    run(&Config::from_env()).map_err(|err| {
	error!("{}", err);
	err
    })

}


fn run(config: &Config) -> Result<()> {

    let daily = owid::new_cases(config)?;
    let total = daily.cumulative();

    let observations = reshape::observations(&daily, &total)?;
    info!("Pooling {} observations ({} regions, {} dates)",
	  observations.len(), daily.regions().count(), daily.len());

    let fit = trend::fit(&observations)?;
    println!("{}", fit);

    let prediction = fit.model().predict_levels(&config.levels);
    println!("Global Trend Line Prediction:");
    println!("{}", prediction);

    let frame = WideFrame::join(&daily, &total)?;
    let (mut written, mut failed) = (0, 0);

    for group in config.all_groups() {
	match graph::trend_graph(config, group, &frame, &prediction) {
	    Ok(path) => {
		info!("Wrote {}", path.display());
		written += 1;
	    }
	    Err(err) => {
		error!("{}", err);
		failed += 1;
	    }
	}
    }

    info!("{} charts written, {} failed", written, failed);
    Ok(())

}
