mod report;
mod source;

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};
use meetspot_core::{AppConfig, Coordinate, VenueRecord, VenueStatus};
use meetspot_venues::{
    common_interests, find_nearest_venue, personalized_venues, place_types_for_interests,
    venue_status, MatchRequest,
};
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "meetspot")]
#[command(about = "Venue suggestions for two people meeting up")]
struct Cli {
    /// Seed the random source for reproducible output (overrides `MEETSPOT_SEED`)
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List the venue catalog, nearest first
    Catalog {
        /// Read venues from a places JSON dump instead of the configured catalog
        #[arg(long)]
        places: Option<PathBuf>,

        #[arg(long)]
        json: bool,
    },
    /// Rank venues for two interest profiles
    Match {
        /// Your interests, comma separated
        #[arg(long, value_delimiter = ',', required = true)]
        me: Vec<String>,

        /// Your connection's interests, comma separated
        #[arg(long, value_delimiter = ',', required = true)]
        them: Vec<String>,

        /// Maximum results (defaults to `MEETSPOT_MAX_RESULTS`)
        #[arg(long)]
        max: Option<usize>,

        /// Venue-local time as YYYY-MM-DDTHH:MM (defaults to now)
        #[arg(long, value_parser = source::parse_local_time)]
        at: Option<NaiveDateTime>,

        /// Read venues from a places JSON dump instead of the configured catalog
        #[arg(long)]
        places: Option<PathBuf>,

        #[arg(long)]
        json: bool,
    },
    /// Show whether a venue is open
    Status {
        venue_id: String,

        /// Venue-local time as YYYY-MM-DDTHH:MM (defaults to now)
        #[arg(long, value_parser = source::parse_local_time)]
        at: Option<NaiveDateTime>,

        #[arg(long)]
        places: Option<PathBuf>,

        #[arg(long)]
        json: bool,
    },
    /// Find the venue you are standing at
    Nearest {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        #[arg(long, allow_negative_numbers = true)]
        lng: f64,

        /// Search radius in meters (defaults to `MEETSPOT_NEAREST_MAX_M`)
        #[arg(long)]
        max_distance: Option<f64>,

        #[arg(long)]
        places: Option<PathBuf>,

        #[arg(long)]
        json: bool,
    },
    /// Provider place types searched for a set of interests
    PlaceTypes {
        /// Interests, comma separated
        #[arg(long, value_delimiter = ',', required = true)]
        interests: Vec<String>,

        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let config = meetspot_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("meetspot ready; run `meetspot --help` for commands");
        return Ok(());
    };

    tracing::debug!(env = %config.env, center = %config.center, "starting meetspot");
    let mut rng = source::build_rng(cli.seed, &config);

    match command {
        Commands::Catalog { places, json } => {
            let venues = source::load_venues(&config, places.as_deref(), &mut rng)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&venues)?);
            } else {
                print!("{}", report::render_catalog(&venues));
            }
        }
        Commands::Match {
            me,
            them,
            max,
            at,
            places,
            json,
        } => {
            let args = MatchArgs {
                me: &me,
                them: &them,
                max: max.unwrap_or(config.max_results),
                now: source::resolve_now(at),
                places: places.as_deref(),
                json,
            };
            run_match(&config, &args, &mut rng)?;
        }
        Commands::Status {
            venue_id,
            at,
            places,
            json,
        } => {
            let venues = source::load_venues(&config, places.as_deref(), &mut rng)?;
            let venue = venues
                .iter()
                .find(|v| v.id == venue_id)
                .ok_or_else(|| anyhow::anyhow!("venue '{venue_id}' not found"))?;
            let status = live_status(venue, source::resolve_now(at));
            if json {
                println!("{}", serde_json::to_string_pretty(&status)?);
            } else {
                print!("{}", report::render_status(venue, &status));
            }
        }
        Commands::Nearest {
            lat,
            lng,
            max_distance,
            places,
            json,
        } => {
            let max_distance_m = max_distance.unwrap_or(config.nearest_max_m);
            let venues = source::load_venues(&config, places.as_deref(), &mut rng)?;
            let nearest = find_nearest_venue(Coordinate::new(lat, lng), &venues, max_distance_m);
            if json {
                println!("{}", serde_json::to_string_pretty(&nearest)?);
            } else {
                print!("{}", report::render_nearest(nearest.as_ref(), max_distance_m));
            }
        }
        Commands::PlaceTypes { interests, json } => {
            let types = place_types_for_interests(&interests);
            if json {
                println!("{}", serde_json::to_string(&types)?);
            } else {
                println!("{}", types.join("\n"));
            }
        }
    }

    Ok(())
}

struct MatchArgs<'a> {
    me: &'a [String],
    them: &'a [String],
    max: usize,
    now: NaiveDateTime,
    places: Option<&'a Path>,
    json: bool,
}

fn run_match(config: &AppConfig, args: &MatchArgs<'_>, rng: &mut StdRng) -> anyhow::Result<()> {
    let venues = source::load_venues(config, args.places, rng)?;
    let request =
        MatchRequest::new(args.me, args.them, config.center, args.now).with_max_results(args.max);
    let results = personalized_venues(&request, &venues, rng);

    tracing::info!(
        candidates = venues.len(),
        returned = results.len(),
        at = %args.now,
        "matched venues"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    let shared = common_interests(args.me, args.them);
    let ranked: Vec<_> = results
        .into_iter()
        .map(|result| {
            let status = live_status(&result.venue, args.now);
            (result, status)
        })
        .collect();
    print!("{}", report::render_matches(&ranked, &shared));
    Ok(())
}

/// Status from structured hours, or from the source's open flag when a
/// venue has none.
fn live_status(venue: &VenueRecord, now: NaiveDateTime) -> VenueStatus {
    if venue.hours.is_none() && venue.open_now {
        return VenueStatus::open("Open now");
    }
    venue_status(venue, now)
}
