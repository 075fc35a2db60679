//! Command-line front end: optimize the visiting order of a venue list.
//!
//! Without `--locations`, the built-in 24-round race calendar is used.

use clap::Parser;
use serde::Deserialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use u_tour::ga::GaConfig;
use u_tour::geo::LocationTable;
use u_tour::TourError;

/// Race calendar venues: (circuit, country, latitude°, longitude°).
const CALENDAR: [(&str, &str, f64, f64); 24] = [
    ("Sakhir", "Bahrain", 26.0325, 50.5106),
    ("Jeddah", "Saudi Arabia", 21.6319, 39.1044),
    ("Melbourne", "Australia", -37.8497, 144.9680),
    ("Suzuka", "Japan", 34.8431, 136.5407),
    ("Shanghai", "China", 31.3389, 121.2197),
    ("Miami", "United States", 25.9581, -80.2389),
    ("Imola", "Italy", 44.3439, 11.7167),
    ("Monte Carlo", "Monaco", 43.7347, 7.4206),
    ("Montreal", "Canada", 45.5000, -73.5228),
    ("Barcelona", "Spain", 41.5700, 2.2611),
    ("Spielberg", "Austria", 47.2197, 14.7647),
    ("Silverstone", "United Kingdom", 52.0786, -1.0169),
    ("Budapest", "Hungary", 47.5789, 19.2486),
    ("Spa", "Belgium", 50.4372, 5.9714),
    ("Zandvoort", "Netherlands", 52.3888, 4.5409),
    ("Monza", "Italy", 45.6156, 9.2811),
    ("Baku", "Azerbaijan", 40.3725, 49.8533),
    ("Marina Bay", "Singapore", 1.2914, 103.8640),
    ("Austin", "United States", 30.1328, -97.6411),
    ("Mexico City", "Mexico", 19.4042, -99.0907),
    ("Sao Paulo", "Brazil", -23.7036, -46.6997),
    ("Las Vegas", "United States", 36.1147, -115.1728),
    ("Lusail", "Qatar", 25.4900, 51.4542),
    ("Yas Marina", "United Arab Emirates", 24.4672, 54.6031),
];

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON array of {name, region, latitude, longitude} records in degrees
    #[arg(long)]
    locations: Option<PathBuf>,

    /// Chromosomes per generation
    #[arg(long, default_value_t = GaConfig::default().population_size)]
    population: usize,

    /// Number of generations
    #[arg(long, default_value_t = GaConfig::default().max_generations)]
    generations: usize,

    /// Mutation probability in the first generation
    #[arg(long, default_value_t = GaConfig::default().initial_mutation_rate)]
    mutation_rate: f64,

    /// Added to the mutation probability every generation
    #[arg(long, default_value_t = GaConfig::default().mutation_rate_increment)]
    mutation_increment: f64,

    /// Random seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct VenueRecord {
    name: String,
    #[serde(default)]
    region: String,
    latitude: f64,
    longitude: f64,
}

fn load_table(path: Option<&PathBuf>) -> Result<LocationTable, TourError> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            let records: Vec<VenueRecord> = serde_json::from_str(&text)?;
            LocationTable::from_degrees(
                records
                    .into_iter()
                    .map(|r| (r.name, r.region, r.latitude, r.longitude)),
            )
        }
        None => LocationTable::from_degrees(CALENDAR),
    }
}

fn main() -> Result<(), TourError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();

    let args = Args::parse();
    let table = load_table(args.locations.as_ref())?;

    let mut config = GaConfig::default()
        .with_population_size(args.population)
        .with_max_generations(args.generations)
        .with_initial_mutation_rate(args.mutation_rate)
        .with_mutation_rate_increment(args.mutation_increment);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let report = u_tour::optimize(&table, &config)?;
    println!("{report}");
    Ok(())
}
