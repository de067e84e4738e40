//! This is the module handling the `dist` sub-command.
//!
//! Without `-m`, every method is printed so the spherical approximations can be eyeballed
//! against the ellipsoidal reference.
//!

use eyre::{eyre, Result};
use strum::VariantNames;
use tracing::trace;

use navette_geo::DistanceMethod;

use crate::DistOpts;

/// Compute the distance between the two points, one line per method.
///
#[tracing::instrument]
pub fn print_distances(opts: &DistOpts) -> Result<()> {
    trace!("dist");

    let methods = match &opts.method {
        Some(name) => vec![name.parse::<DistanceMethod>().map_err(|_| {
            eyre!(
                "unknown method {}, expected one of {:?}",
                name,
                DistanceMethod::VARIANTS
            )
        })?],
        None => vec![
            DistanceMethod::LawOfCosines,
            DistanceMethod::Haversine,
            DistanceMethod::Vincenty,
        ],
    };

    for method in methods {
        let dist = method.distance_km(opts.lat1, opts.lon1, opts.lat2, opts.lon2)?;
        println!("{:>13}: {:.3} km", method.to_string(), dist);
    }
    Ok(())
}
