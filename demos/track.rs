//! Geoloc track demo: analyses a short recorded walk.
//!
//! Usage:
//! ```text
//! cargo run --example track
//! RUST_LOG=geoloc=trace cargo run --example track   # show simplification steps
//! ```

use geoloc::codec::{decode, encode};
use geoloc::operations::modification::Simplify;
use geoloc::operations::query::{ContainsLocation, LocationOnPath};
use geoloc::spherical::{compute_area, compute_heading, compute_length};
use geoloc::{GeoPoint, GeolocError, LocationReading};

/// A rectangular geofence around the walk.
const FENCE: [GeoPoint; 4] = [
    GeoPoint::new(31.2280, 121.4700),
    GeoPoint::new(31.2280, 121.4800),
    GeoPoint::new(31.2350, 121.4800),
    GeoPoint::new(31.2350, 121.4700),
];

fn main() -> Result<(), GeolocError> {
    // Default: WARN for everything, INFO for geoloc and this demo.
    // Override with RUST_LOG env var (e.g. RUST_LOG=geoloc=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("track=info".parse().unwrap_or_default())
        .add_directive("geoloc=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let track = sample_track();
    let points: Vec<GeoPoint> = track.iter().map(GeoPoint::from).collect();
    tracing::info!(
        fixes = track.len(),
        length_m = compute_length(&track),
        fence_area_m2 = compute_area(&FENCE),
        "loaded track"
    );

    for pair in points.windows(2).take(3) {
        let heading = compute_heading(&pair[0], &pair[1]);
        tracing::info!(from = %pair[0], to = %pair[1], heading, "leg");
    }

    let outside = track
        .iter()
        .filter(|reading| !ContainsLocation::new(reading.point, &FENCE).execute())
        .count();
    tracing::info!(outside, "fixes outside the geofence");

    let simplified = Simplify::new(&track, 5.0).execute()?;
    tracing::info!(kept = simplified.len(), of = track.len(), "simplified track");

    let probe = GeoPoint::new(31.2300, 121.4750);
    match LocationOnPath::on_path(probe, &simplified).tolerance(25.0).execute() {
        Some(segment) => tracing::info!(%probe, segment, "probe lies on the route"),
        None => tracing::info!(%probe, "probe is off the route"),
    }

    let encoded = encode(&simplified);
    let decoded = decode(&encoded)?;
    tracing::info!(%encoded, points = decoded.len(), "encoded route");
    Ok(())
}

/// A walk heading east then north-east, sampled once a second with jitter.
fn sample_track() -> Vec<LocationReading> {
    let start_ms = 1_700_000_000_000_i64;
    (0..60_i32)
        .map(|i| {
            let t = f64::from(i);
            let jitter = if i % 2 == 0 { 1.5e-6 } else { -1.5e-6 };
            let (lat, lng) = if i < 30 {
                (31.2300 + jitter, 121.4720 + t * 0.000_1)
            } else {
                (31.2300 + (t - 29.0) * 0.000_08 + jitter, 121.4749 + (t - 29.0) * 0.000_08)
            };
            LocationReading::new("gps", GeoPoint::new(lat, lng), start_ms + i64::from(i) * 1_000)
                .with_accuracy(4.0)
                .with_speed(9.5)
                .with_satellites(11)
                .rounded()
        })
        .collect()
}
