use serde_json::json;
use std::path::Path;
use tracing::debug;

use crate::cli::args::{Cli, Commands};
use crate::config::TransformerSettings;
use crate::error::Result;
use crate::models::{CrsId, GeoPoint};
use crate::transform::CoordinateTransformer;
use crate::utils::coordinates::{latdd_to_latdms, londd_to_londms, parse_coordinate};

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::ToDms {
            latitude,
            longitude,
        } => {
            let latitude = latitude.map(latdd_to_latdms).transpose()?;
            let longitude = longitude.map(londd_to_londms).transpose()?;

            if cli.json {
                println!(
                    "{}",
                    json!({ "latitude": latitude, "longitude": longitude })
                );
            } else {
                for value in [latitude, longitude].into_iter().flatten() {
                    println!("{}", value);
                }
            }
        }

        Commands::ToDd { coordinate } => {
            let decimal = parse_coordinate(&coordinate)?;

            if cli.json {
                println!("{}", json!({ "input": coordinate, "decimal": decimal }));
            } else {
                println!("{}", decimal);
            }
        }

        Commands::Transform {
            from,
            to,
            config,
            dms,
            x,
            y,
            z,
        } => {
            let settings = resolve_settings(from, to, config.as_deref())?;
            let transformer = CoordinateTransformer::from_settings(&settings)?;

            let (tx, ty, tz) = transformer.transform_point(x, y, z.unwrap_or(0.0))?;
            debug!(x, y, tx, ty, "transformed");

            if dms {
                let (lat, lon) = GeoPoint::from_xy(tx, ty).to_dms()?;
                if cli.json {
                    println!("{}", json!({ "longitude": lon, "latitude": lat, "z": tz }));
                } else {
                    println!("{}\t{}", lon, lat);
                }
            } else if cli.json {
                println!("{}", json!({ "x": tx, "y": ty, "z": tz }));
            } else {
                println!("{}\t{}\t{}", tx, ty, tz);
            }
        }
    }

    Ok(())
}

/// Explicit `--from/--to` win; anything missing comes from the settings
/// file and `COORDCONV_*` environment.
fn resolve_settings(
    from: Option<String>,
    to: Option<String>,
    config: Option<&Path>,
) -> Result<TransformerSettings> {
    let source = from.map(|s| s.parse::<CrsId>()).transpose()?;
    let target = to.map(|s| s.parse::<CrsId>()).transpose()?;

    match (source, target) {
        (Some(source), Some(target)) => Ok(TransformerSettings::new(source, target)),
        (source, target) => {
            let loaded = TransformerSettings::load(config)?;
            Ok(TransformerSettings::new(
                source.unwrap_or(loaded.source_crs),
                target.unwrap_or(loaded.target_crs),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_negative_coordinates() {
        let cli = Cli::try_parse_from([
            "coord-convert",
            "transform",
            "--from",
            "4326",
            "--to",
            "3857",
            "-57.6",
            "-35.5",
        ])
        .unwrap();

        match cli.command {
            Commands::Transform { x, y, z, .. } => {
                assert_eq!(x, -57.6);
                assert_eq!(y, -35.5);
                assert_eq!(z, None);
            }
            _ => panic!("expected transform command"),
        }
    }

    #[test]
    fn test_to_dms_requires_a_coordinate() {
        assert!(Cli::try_parse_from(["coord-convert", "to-dms"]).is_err());
        assert!(Cli::try_parse_from(["coord-convert", "to-dms", "--latitude", "-34.5"]).is_ok());
    }

    #[test]
    fn test_explicit_crs_skips_settings() {
        let settings =
            resolve_settings(Some("EPSG:5347".into()), Some("5340".into()), None).unwrap();
        assert_eq!(settings.source_crs, CrsId::Epsg(5347));
        assert_eq!(settings.target_crs, CrsId::Epsg(5340));
    }

    #[test]
    fn test_run_rejects_bad_latitude() {
        let cli = Cli::try_parse_from(["coord-convert", "to-dms", "--latitude", "95"]).unwrap();
        assert!(run(cli).is_err());
    }
}
