use std::fmt;

use log::warn;
use statrs::distribution::{ContinuousCDF,FisherSnedecor,StudentsT};

use super::error::{Result,Error};
use super::reshape::Observation;


pub const DEFAULT_LEVELS : [f64; 8] = [1.0, 10.0, 100.0, 1_000.0, 10_000.0,
				       100_000.0, 1_000_000.0, 10_000_000.0];


#[derive(Clone,Copy,Debug,PartialEq)]
pub struct TrendModel {
    pub intercept: f64,
    pub slope: f64,
}

impl TrendModel {

    pub fn predict(&self, level: f64) -> f64 {
	self.intercept + self.slope * level
    }

    pub fn predict_levels(&self, levels: &[f64]) -> Prediction {
	Prediction(levels.iter().map(|level| PredictionPoint {
	    level: *level,
	    predicted: self.predict(*level),
	}).collect())
    }

}


#[derive(Clone,Copy,Debug,PartialEq)]
pub struct Coefficient {
    pub estimate: f64,
    pub std_error: f64,
    pub df: usize,
}

impl Coefficient {

    pub fn t_statistic(&self) -> f64 {
	self.estimate / self.std_error
    }

    /// Two-sided p-value of the t-test against zero.
    pub fn p_value(&self) -> f64 {
	let t = self.t_statistic();
	match students_t(self.df) {
	    _ if t.is_nan() => f64::NAN,
	    Some(_) if t.is_infinite() => 0.0,
	    Some(dist) => 2.0 * dist.cdf(-t.abs()),
	    None => f64::NAN,
	}
    }

    pub fn conf_int(&self, level: f64) -> (f64,f64) {
	match students_t(self.df) {
	    Some(dist) => {
		let half = dist.inverse_cdf(1.0 - (1.0 - level) / 2.0) * self.std_error;
		(self.estimate - half, self.estimate + half)
	    }
	    None => (f64::NAN, f64::NAN),
	}
    }

}

fn students_t(df: usize) -> Option<StudentsT> {
    match df {
	0 => None,
	df => StudentsT::new(0.0, 1.0, df as f64).ok(),
    }
}


/// Ordinary least squares fit of daily cases on total cases, with the
/// statistics needed for the console summary. Standard errors are NaN
/// when there are no residual degrees of freedom.
#[derive(Clone,Debug)]
pub struct TrendFit {
    pub intercept: Coefficient,
    pub slope: Coefficient,
    pub observations: usize,
    pub dropped: usize,
    pub residual_ss: f64,
    pub residual_df: usize,
    pub r_squared: f64,
}

impl TrendFit {

    pub fn model(&self) -> TrendModel {
	TrendModel {
	    intercept: self.intercept.estimate,
	    slope: self.slope.estimate,
	}
    }

    pub fn residual_std_error(&self) -> f64 {
	match self.residual_df {
	    0 => f64::NAN,
	    df => (self.residual_ss / df as f64).sqrt(),
	}
    }

    pub fn adj_r_squared(&self) -> f64 {
	match self.residual_df {
	    0 => f64::NAN,
	    df => 1.0 - (1.0 - self.r_squared) * (self.observations - 1) as f64 / df as f64,
	}
    }

    pub fn f_statistic(&self) -> f64 {
	match self.residual_df {
	    0 => f64::NAN,
	    df => {
		let explained = self.r_squared / (1.0 - self.r_squared);
		explained * df as f64
	    }
	}
    }

    /// Probability of the F-statistic under (1, df) degrees of freedom.
    pub fn f_p_value(&self) -> f64 {
	let f = self.f_statistic();
	match FisherSnedecor::new(1.0, self.residual_df as f64) {
	    _ if f.is_nan() => f64::NAN,
	    Ok(_) if f.is_infinite() => 0.0,
	    Ok(dist) => dist.sf(f),
	    Err(_) => f64::NAN,
	}
    }

}


/// Fits `daily = intercept + slope * total` over all pooled observations.
/// Rows with a missing or non-finite value on either side are left out.
pub fn fit(observations: &[Observation]) -> Result<TrendFit> {

    let points : Vec<(f64,f64)> = observations.iter().filter_map(
	|o| match (o.total, o.daily) {
	    (Some(x), Some(y)) if x.is_finite() && y.is_finite() => Some((x, y)),
	    _ => None,
	}
    ).collect();

    let dropped = observations.len() - points.len();
    if dropped > 0 {
	warn!("Trend fit: dropped {} of {} observations with missing values",
	      dropped, observations.len());
    }

    if points.len() < 2 {
	return Err(Error::SingularFit(format!(
	    "{} usable observations", points.len())));
    }

    let n = points.len() as f64;
    let mean_x = points.iter().map(|(x,_)| x).sum::<f64>() / n;
    let mean_y = points.iter().map(|(_,y)| y).sum::<f64>() / n;
    let max_x = points.iter().fold(0.0f64, |m,(x,_)| m.max(x.abs()));

    let (sxx, sxy, syy) = points.iter().fold((0.0, 0.0, 0.0), |(sxx,sxy,syy),(x,y)| {
	let (dx, dy) = (x - mean_x, y - mean_y);
	(sxx + dx * dx, sxy + dx * dy, syy + dy * dy)
    });

    // rounding noise of n identical values stays below this
    let tolerance = n * (4.0 * f64::EPSILON * max_x).powi(2);
    if !(sxx > tolerance) {
	return Err(Error::SingularFit(format!(
	    "total cases do not vary over {} observations", points.len())));
    }

    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;

    let residual_ss = points.iter().map(|(x,y)| (y - intercept - slope * x).powi(2)).sum::<f64>();
    let residual_df = points.len() - 2;
    let variance = match residual_df {
	0 => f64::NAN,
	df => residual_ss / df as f64,
    };

    Ok(TrendFit {
	intercept: Coefficient {
	    estimate: intercept,
	    std_error: (variance * (1.0 / n + mean_x * mean_x / sxx)).sqrt(),
	    df: residual_df,
	},
	slope: Coefficient {
	    estimate: slope,
	    std_error: (variance / sxx).sqrt(),
	    df: residual_df,
	},
	observations: points.len(),
	dropped,
	residual_ss,
	residual_df,
	r_squared: match syy > 0.0 {
	    true => 1.0 - residual_ss / syy,
	    false => f64::NAN,
	},
    })

}


impl fmt::Display for TrendFit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
	let rule = "=".repeat(72);
	writeln!(f, "{:^72}", "OLS Trend Fit: New Cases ~ Total Cases")?;
	writeln!(f, "{}", rule)?;
	writeln!(f, "{:<20}{:>12}    {:<18}{:>10}", "No. observations:", self.observations,
		 "R-squared:", format!("{:.4}", self.r_squared))?;
	writeln!(f, "{:<20}{:>12}    {:<18}{:>10}", "Dropped rows:", self.dropped,
		 "Adj. R-squared:", format!("{:.4}", self.adj_r_squared()))?;
	writeln!(f, "{:<20}{:>12}    {:<18}{:>10}", "Df residuals:", self.residual_df,
		 "F-statistic:", format!("{:.4e}", self.f_statistic()))?;
	writeln!(f, "{:<20}{:>12.4e}    {:<18}{:>10}", "Residual std. err.:", self.residual_std_error(),
		 "Prob (F-statistic):", format!("{:.4e}", self.f_p_value()))?;
	writeln!(f, "{}", rule)?;
	writeln!(f, "{:<8}{:>12}{:>12}{:>8}{:>8}{:>12}{:>12}", "", "coef", "std err", "t", "P>|t|",
		 "[0.025", "0.975]")?;
	writeln!(f, "{}", "-".repeat(72))?;
	for (name,coef) in &[("const", self.intercept), ("total", self.slope)] {
	    let (lower, upper) = coef.conf_int(0.95);
	    writeln!(f, "{:<8}{:>12.4e}{:>12.4e}{:>8.3}{:>8.3}{:>12.4e}{:>12.4e}", name, coef.estimate,
		     coef.std_error, coef.t_statistic(), coef.p_value(), lower, upper)?;
	}
	write!(f, "{}", rule)
    }
}


#[derive(Clone,Copy,Debug,PartialEq)]
pub struct PredictionPoint {
    pub level: f64,
    pub predicted: f64,
}

#[derive(Clone,Debug,PartialEq)]
pub struct Prediction(pub Vec<PredictionPoint>);

impl Prediction {
    pub fn points(&self) -> &[PredictionPoint] {
	&self.0
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
	write!(f, "{:>16}  {:>20}", "Total cases", "Daily trend")?;
	for point in &self.0 {
	    write!(f, "\n{:>16}  {:>20.3}", point.level, point.predicted)?;
	}
	Ok(())
    }
}


#[cfg(test)]
mod tests {

    use super::*;
    use approx::assert_relative_eq;
    use chrono::naive::NaiveDate;

    fn obs(points: &[(Option<f64>,Option<f64>)]) -> Vec<Observation> {
	points.iter().enumerate().map(|(i,(total,daily))| Observation {
	    region: "A".to_string(),
	    date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap() + chrono::Duration::days(i as i64),
	    daily: *daily,
	    total: *total,
	}).collect()
    }

    #[test]
    fn recovers_exact_line() {
	let data : Vec<_> = [0.0, 10.0, 250.0, 1000.0, 40000.0].iter()
	    .map(|x| (Some(*x), Some(5.0 + 0.1 * x))).collect();
	let fit = fit(&obs(&data)).unwrap();
	assert_relative_eq!(fit.intercept.estimate, 5.0, epsilon = 1e-9);
	assert_relative_eq!(fit.slope.estimate, 0.1, epsilon = 1e-12);
	assert_relative_eq!(fit.r_squared, 1.0, epsilon = 1e-12);
	assert_eq!(fit.residual_df, 3);
    }

    #[test]
    fn reports_standard_errors() {
	let data = [(Some(1.0), Some(2.0)), (Some(2.0), Some(4.0)), (Some(3.0), Some(5.0)),
		    (Some(4.0), Some(4.0)), (Some(5.0), Some(5.0))];
	let fit = fit(&obs(&data)).unwrap();
	assert_relative_eq!(fit.intercept.estimate, 2.2, epsilon = 1e-12);
	assert_relative_eq!(fit.slope.estimate, 0.6, epsilon = 1e-12);
	assert_relative_eq!(fit.residual_ss, 2.4, epsilon = 1e-12);
	assert_relative_eq!(fit.slope.std_error, 0.08f64.sqrt(), epsilon = 1e-12);
	assert_relative_eq!(fit.intercept.std_error, 0.88f64.sqrt(), epsilon = 1e-12);
	assert_relative_eq!(fit.slope.t_statistic(), 0.6 / 0.08f64.sqrt(), epsilon = 1e-9);
	assert_relative_eq!(fit.r_squared, 0.6, epsilon = 1e-12);
	assert_relative_eq!(fit.adj_r_squared(), 1.0 - 0.4 * 4.0 / 3.0, epsilon = 1e-12);
	assert_relative_eq!(fit.f_statistic(), 4.5, epsilon = 1e-9);
	assert_relative_eq!(fit.residual_std_error(), 0.8f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn reports_significance() {
	let data = [(Some(1.0), Some(2.0)), (Some(2.0), Some(4.0)), (Some(3.0), Some(5.0)),
		    (Some(4.0), Some(4.0)), (Some(5.0), Some(5.0))];
	let fit = fit(&obs(&data)).unwrap();
	assert_eq!(fit.slope.df, 3);
	assert_relative_eq!(fit.slope.p_value(), 0.124027062657, epsilon = 1e-8);
	assert_relative_eq!(fit.intercept.p_value(), 0.100743456085, epsilon = 1e-8);
	// one regressor: F = t^2
	assert_relative_eq!(fit.f_p_value(), fit.slope.p_value(), epsilon = 1e-8);
	let (lower, upper) = fit.slope.conf_int(0.95);
	assert_relative_eq!(lower, -0.300131745291, epsilon = 1e-6);
	assert_relative_eq!(upper, 1.500131745291, epsilon = 1e-6);
	let (lower, upper) = fit.intercept.conf_int(0.95);
	assert_relative_eq!(lower, -0.785399261019, epsilon = 1e-6);
	assert_relative_eq!(upper, 5.185399261019, epsilon = 1e-6);
    }

    #[test]
    fn constant_totals_are_singular() {
	let zeros = [(Some(0.0), Some(1.0)), (Some(0.0), Some(2.0)), (Some(0.0), Some(3.0))];
	assert!(matches!(fit(&obs(&zeros)), Err(Error::SingularFit(_))));
	let same = [(Some(0.1 + 0.2), Some(1.0)), (Some(0.3), Some(2.0)), (Some(0.3), Some(3.0))];
	assert!(matches!(fit(&obs(&same)), Err(Error::SingularFit(_))));
	assert!(matches!(fit(&[]), Err(Error::SingularFit(_))));
    }

    #[test]
    fn skips_missing_and_nan_rows() {
	let clean = [(Some(1.0), Some(2.0)), (Some(2.0), Some(4.0)), (Some(3.0), Some(5.0))];
	let mut dirty = clean.to_vec();
	dirty.insert(1, (None, Some(100.0)));
	dirty.push((Some(f64::NAN), Some(1.0)));
	dirty.push((Some(7.0), None));
	let (a, b) = (fit(&obs(&clean)).unwrap(), fit(&obs(&dirty)).unwrap());
	assert_eq!(b.dropped, 3);
	assert_eq!(b.observations, 3);
	assert_eq!(a.model(), b.model());
    }

    #[test]
    fn two_points_fit_without_errors() {
	let fit = fit(&obs(&[(Some(1.0), Some(1.0)), (Some(3.0), Some(2.0))])).unwrap();
	assert_relative_eq!(fit.slope.estimate, 0.5, epsilon = 1e-12);
	assert!(fit.slope.std_error.is_nan());
	assert!(fit.slope.p_value().is_nan());
	assert!(fit.slope.conf_int(0.95).0.is_nan());
	assert!(fit.f_p_value().is_nan());
    }

    #[test]
    fn predicts_levels_in_order() {
	let model = TrendModel { intercept: 3.5, slope: 0.25 };
	let prediction = model.predict_levels(&[1.0, 10.0, 100.0, 1000.0]);
	let (a, b) = (model.intercept, model.slope);
	assert_eq!(prediction.points().iter().map(|p| p.predicted).collect::<Vec<_>>(),
		   vec![a + b, a + 10.0 * b, a + 100.0 * b, a + 1000.0 * b]);
	assert_eq!(prediction.points().iter().map(|p| p.level).collect::<Vec<_>>(),
		   vec![1.0, 10.0, 100.0, 1000.0]);
    }

    #[test]
    fn prints_fit_summary() {
	let data = [(Some(1.0), Some(2.0)), (Some(2.0), Some(4.0)), (Some(3.0), Some(5.0))];
	let summary = fit(&obs(&data)).unwrap().to_string();
	assert!(summary.contains("No. observations:"));
	assert!(summary.lines().any(|l| l.starts_with("const")));
	assert!(summary.lines().any(|l| l.starts_with("total")));
	assert!(summary.contains("P>|t|"));
	assert!(summary.contains("Prob (F-statistic):"));
    }

    #[test]
    fn prints_prediction_table() {
	let model = TrendModel { intercept: 1.0, slope: 0.5 };
	let table = model.predict_levels(&DEFAULT_LEVELS[..2]).to_string();
	let lines : Vec<&str> = table.lines().collect();
	assert_eq!(lines.len(), 3);
	assert!(lines[0].contains("Total cases"));
	assert!(lines[2].trim_end().ends_with("6.000"));
    }

}
