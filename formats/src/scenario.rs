//! Scenario route files.
//!
//! A scenario is an HCL document naming the route (origin and destination
//! labels), an optional clock acceleration and the turns of the closed route
//! in flying order:
//!
//! ```hcl
//! version = 1
//!
//! origin      = "SNN"
//! destination = "SNN"
//! time_ratio  = 1.0
//!
//! waypoints = [
//!   {
//!     latitude  = 52.700
//!     longitude = -8.920
//!     altitude  = 1500.0
//!     speed     = 100.0
//!   },
//! ]
//! ```
//!
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::trace;

use navette_geo::{GeoError, Trajectory, Waypoint};

/// Current scenario file version
const SVERSION: usize = 1;

/// Everything that can go wrong loading a scenario file.
///
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("Can not read scenario: {0}")]
    Read(#[from] std::io::Error),
    #[error("Bad HCL: {0}")]
    Parse(#[from] hcl::Error),
    #[error("Bad scenario version {0}, expected {SVERSION}")]
    BadVersion(usize),
    #[error("Latitude {0} out of range")]
    BadLatitude(f64),
    #[error("Longitude {0} out of range")]
    BadLongitude(f64),
    #[error("Negative altitude {0}")]
    BadAltitude(f64),
    #[error("Speed {0} kt is not flyable")]
    BadSpeed(f64),
    #[error("Time ratio {0} must be positive")]
    BadTimeRatio(f64),
    #[error(transparent)]
    Geo(#[from] GeoError),
}

/// On-disk description of a closed route.
///
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Scenario {
    /// Version number for safety
    pub version: usize,
    /// Label of the route start
    pub origin: String,
    /// Label of the route end
    pub destination: String,
    /// Scenario clock acceleration, 1.0 is real time
    #[serde(default = "default_time_ratio")]
    pub time_ratio: f64,
    /// Turns of the closed route, in flying order
    pub waypoints: Vec<Waypoint>,
}

fn default_time_ratio() -> f64 {
    1.
}

impl Scenario {
    /// Read and validate the given scenario file.
    ///
    #[tracing::instrument]
    pub fn load(fname: &Path) -> Result<Self, ScenarioError> {
        trace!("Reading {:?}", fname);
        let content = fs::read_to_string(fname)?;
        content.parse()
    }

    /// Build the closed route the file describes.
    ///
    #[tracing::instrument(skip(self))]
    pub fn trajectory(&self) -> Result<Trajectory, ScenarioError> {
        Ok(Trajectory::new(
            self.waypoints.clone(),
            &self.origin,
            &self.destination,
        )?)
    }

    /// Range checks on everything the file declares.
    ///
    fn validate(self) -> Result<Self, ScenarioError> {
        if self.version != SVERSION {
            return Err(ScenarioError::BadVersion(self.version));
        }
        if self.time_ratio <= 0. {
            return Err(ScenarioError::BadTimeRatio(self.time_ratio));
        }
        for wp in &self.waypoints {
            if !(-90.0..=90.0).contains(&wp.latitude) {
                return Err(ScenarioError::BadLatitude(wp.latitude));
            }
            if !(-180.0..=180.0).contains(&wp.longitude) {
                return Err(ScenarioError::BadLongitude(wp.longitude));
            }
            if wp.altitude < 0. {
                return Err(ScenarioError::BadAltitude(wp.altitude));
            }
            if wp.speed <= 0. {
                return Err(ScenarioError::BadSpeed(wp.speed));
            }
        }
        Ok(self)
    }
}

impl FromStr for Scenario {
    type Err = ScenarioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let scenario: Scenario = hcl::from_str(s)?;
        scenario.validate()
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use rstest::rstest;

    use super::*;

    fn minimal(version: usize, latitude: f64, longitude: f64, altitude: f64, speed: f64) -> String {
        format!(
            r#"
version = {version}

origin      = "SNN"
destination = "EGLL"

waypoints = [
  {{
    latitude  = {latitude}
    longitude = {longitude}
    altitude  = {altitude}
    speed     = {speed}
  }},
  {{
    latitude  = 52.709
    longitude = -8.920
    altitude  = 1500.0
    speed     = 100.0
  }},
]
"#
        )
    }

    #[test]
    fn test_scenario_parse() {
        let s: Scenario = minimal(1, 52.700, -8.920, 1500.0, 100.0).parse().unwrap();
        assert_eq!("SNN", s.origin);
        assert_eq!("EGLL", s.destination);
        assert_eq!(2, s.waypoints.len());
        assert_eq!(1., s.time_ratio);
        assert_eq!(52.700, s.waypoints[0].latitude);
    }

    #[test]
    fn test_scenario_load_square() {
        let fname: PathBuf = ["testdata", "square.hcl"].iter().collect();
        let s = Scenario::load(&fname).unwrap();
        assert_eq!(4, s.waypoints.len());

        let t = s.trajectory().unwrap();
        assert_eq!(76, t.cycle_seconds());
        assert_eq!("SNN", t.origin());
    }

    #[test]
    fn test_scenario_load_missing_file() {
        let r = Scenario::load(Path::new("testdata/no-such.hcl"));
        assert!(matches!(r, Err(ScenarioError::Read(_))));
    }

    #[test]
    fn test_scenario_bad_version() {
        let r = minimal(9, 52.700, -8.920, 1500.0, 100.0).parse::<Scenario>();
        assert!(matches!(r, Err(ScenarioError::BadVersion(9))));
    }

    #[test]
    fn test_scenario_not_hcl() {
        let r = "<scenarioSetup/>".parse::<Scenario>();
        assert!(matches!(r, Err(ScenarioError::Parse(_))));
    }

    #[rstest]
    #[case(99.0)]
    #[case(-90.5)]
    fn test_scenario_bad_latitude(#[case] latitude: f64) {
        let r = minimal(1, latitude, -8.920, 1500.0, 100.0).parse::<Scenario>();
        assert!(matches!(r, Err(ScenarioError::BadLatitude(_))));
    }

    #[rstest]
    #[case(191.0)]
    #[case(-180.5)]
    fn test_scenario_bad_longitude(#[case] longitude: f64) {
        let r = minimal(1, 52.700, longitude, 1500.0, 100.0).parse::<Scenario>();
        assert!(matches!(r, Err(ScenarioError::BadLongitude(_))));
    }

    #[test]
    fn test_scenario_bad_altitude() {
        let r = minimal(1, 52.700, -8.920, -50.0, 100.0).parse::<Scenario>();
        assert!(matches!(r, Err(ScenarioError::BadAltitude(_))));
    }

    #[rstest]
    #[case(0.0)]
    #[case(-10.0)]
    fn test_scenario_bad_speed(#[case] speed: f64) {
        let r = minimal(1, 52.700, -8.920, 1500.0, speed).parse::<Scenario>();
        assert!(matches!(r, Err(ScenarioError::BadSpeed(_))));
    }

    #[test]
    fn test_scenario_time_ratio() {
        let text = minimal(1, 52.700, -8.920, 1500.0, 100.0) + "\ntime_ratio = 60.0\n";
        let s: Scenario = text.parse().unwrap();
        assert_eq!(60., s.time_ratio);

        let text = minimal(1, 52.700, -8.920, 1500.0, 100.0) + "\ntime_ratio = -2.0\n";
        let r = text.parse::<Scenario>();
        assert!(matches!(r, Err(ScenarioError::BadTimeRatio(_))));
    }
}
