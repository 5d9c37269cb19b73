//! Walks a chunk and one system, printing what the generator produces
//!
//! Usage: RUST_LOG=debug cargo run -p forge --example explore [CHUNK] [ADDRESS]
//!
//! CHUNK defaults to `80_10_0`; ADDRESS, when given, is resolved and printed.

use forge::{BodyRecord, ChunkCoord, ForgeError, Member, SystemNode, Universe};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), ForgeError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let chunk: ChunkCoord = args.next().as_deref().unwrap_or("80_10_0").parse()?;
    let universe = Universe::milky_way();

    println!(
        "Chunk {}: {} bodies",
        chunk,
        universe.expected_body_count(&chunk)
    );
    println!(
        "{:<22} {:<8} {:<8} {:>10} {:>9} {:>4} {:>4} {:>5}",
        "seed", "name", "type", "mass", "temp", "cmp", "pl", "moons"
    );
    for body in universe.enumerate_chunk(&chunk).take(12) {
        let record = BodyRecord::from(&body);
        println!(
            "{:<22} {:<8} {:<8} {:>10.3} {:>9.0} {:>4} {:>4} {:>5}",
            record.seed,
            record.catalog_name,
            record.designation,
            record.mass,
            record.temperature,
            record.companion_count,
            record.planet_count,
            record.moon_count
        );
    }

    let Some(first) = universe.enumerate_chunk(&chunk).next() else {
        return Ok(());
    };
    let system = universe.system(first.seed)?;
    println!("\nSystem {}", first.seed);
    for node in system.walk() {
        let path = node.path().to_string();
        let label = if path.is_empty() { "A".to_string() } else { path };
        match node {
            SystemNode::Star(star) => println!(
                "  {:<8} {} {:.3} M☉",
                label,
                star.properties.designation(),
                star.properties.mass.to_solar_masses()
            ),
            SystemNode::Planet { planet, .. } => println!(
                "  {:<8} {} {:.2} M⊕ at {:.3} AU",
                label,
                planet.planet_type,
                planet.mass.to_earth_masses(),
                planet.semi_major_axis.to_au()
            ),
            SystemNode::Moon { moon, .. } => println!(
                "  {:<8} {} moon {:.4} M⊕",
                label,
                moon.composition,
                moon.mass.to_earth_masses()
            ),
        }
    }

    if let Some(text) = args.next() {
        match universe.resolve_str(&text) {
            Ok(resolved) => match resolved.member {
                Member::Star(star) => println!("\n{text}: {}", star.properties.designation()),
                Member::Planet(planet) => println!("\n{text}: {}", planet.planet_type),
                Member::Moon(moon) => println!("\n{text}: {} moon", moon.composition),
            },
            Err(err) if err.is_not_found() => println!("\n{text}: nothing there ({err})"),
            Err(err) => return Err(err),
        }
    }
    Ok(())
}
