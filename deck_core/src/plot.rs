//! # Coefficient Charts
//!
//! Results expose their influence lines as plain `(beam position, k)` point
//! lists. Rendering is left to the front end: anything that can draw a set of
//! named series implements [`CoefficientPlotter`].

use serde::{Deserialize, Serialize};

/// One named line of a coefficient chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoefficientSeries {
    /// Legend entry ("Concentrated", "Q1", ...)
    pub name: String,

    /// Points: (beam_eccentricity_m, coefficient)
    pub points: Vec<(f64, f64)>,
}

impl CoefficientSeries {
    /// Zip positions with values; extra entries on either side are ignored.
    pub fn new(name: &str, xs: &[f64], ys: &[f64]) -> Self {
        CoefficientSeries {
            name: name.to_string(),
            points: xs.iter().copied().zip(ys.iter().copied()).collect(),
        }
    }

    /// (min, max) of the coefficients, `None` for an empty series
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.points.iter().map(|&(_, k)| k).fold(None, |range, k| match range {
            None => Some((k, k)),
            Some((lo, hi)) => Some((lo.min(k), hi.max(k))),
        })
    }
}

/// A chart backend.
pub trait CoefficientPlotter {
    /// Backend-specific failure
    type Error;

    /// Draw all series on one chart
    fn plot(&mut self, title: &str, series: &[CoefficientSeries]) -> Result<(), Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::courbon;
    use crate::cross_section::CrossSection;
    use crate::loads::{TrafficLoadConfiguration, Vehicle};

    #[derive(Default)]
    struct RecordingPlotter {
        charts: Vec<(String, Vec<CoefficientSeries>)>,
    }

    impl CoefficientPlotter for RecordingPlotter {
        type Error = std::convert::Infallible;

        fn plot(&mut self, title: &str, series: &[CoefficientSeries]) -> Result<(), Self::Error> {
            self.charts.push((title.to_string(), series.to_vec()));
            Ok(())
        }
    }

    #[test]
    fn test_series_zip() {
        let s = CoefficientSeries::new("Q1", &[-2.5, 0.0, 2.5], &[0.6, 0.33]);
        assert_eq!(s.points, vec![(-2.5, 0.6), (0.0, 0.33)]);
        assert_eq!(s.value_range(), Some((0.33, 0.6)));
        assert_eq!(CoefficientSeries::new("empty", &[], &[]).value_range(), None);
    }

    #[test]
    fn test_plotter_receives_result_series() {
        let section = CrossSection::new(11.28, 3, 3.76);
        let vehicle = Vehicle::from_lists(3.5, vec![50.0, 50.0], vec![2.0])
            .unwrap()
            .with_distributed_load(9.0);
        let traffic = TrafficLoadConfiguration::new(vec![vehicle], vec![-3.5]).unwrap();
        let result = courbon::calculate(&section, &traffic).unwrap();

        let mut plotter = RecordingPlotter::default();
        plotter.plot("Courbon", &result.chart_series()).unwrap();

        assert_eq!(plotter.charts.len(), 1);
        let (title, series) = &plotter.charts[0];
        assert_eq!(title, "Courbon");
        assert_eq!(series.len(), 2);
        assert!(series.iter().all(|s| s.points.len() == 3));
    }
}
