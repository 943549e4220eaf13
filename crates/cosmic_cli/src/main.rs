mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use cosmic_rs::{
    BirthData, CosmicConfig, Influence, Planet, Session, SymbolConfig, ZodiacSign, ascendant_for,
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cosmic", about = "Western + Ba Zi fusion astrology CLI")]
struct Cli {
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    /// JSON config file (remote engines, timeouts, symbol defaults)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full fusion profile for a birth date and time
    Profile {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Birth time (HH:MM)
        #[arg(long, default_value = "")]
        time: String,
        /// Birth place (not used in calculations)
        #[arg(long, default_value = "")]
        location: String,
    },
    /// Ten-body transit snapshot
    Transits {
        /// Date-time (YYYY-MM-DDThh:mm[:ss][Z]); now if omitted
        #[arg(long)]
        date: Option<String>,
    },
    /// Ba Zi year, month and day pillars
    Bazi {
        /// Date-time; now if omitted
        #[arg(long)]
        date: Option<String>,
    },
    /// Sun sign from the date-range table
    SunSign {
        /// Date-time; now if omitted
        #[arg(long)]
        date: Option<String>,
    },
    /// Approximate Moon sign and degree
    Moon {
        /// Date-time; now if omitted
        #[arg(long)]
        date: Option<String>,
    },
    /// Period-model planet position
    Planet {
        /// Mercury, Venus, Mars, Jupiter, Saturn, Uranus, Neptune or Pluto
        name: String,
        /// Date-time; now if omitted
        #[arg(long)]
        date: Option<String>,
    },
    /// Simulated ascendant from sun sign and hour
    Ascendant {
        /// Sun sign name
        #[arg(long)]
        sign: String,
        /// Hour of day (0-23)
        #[arg(long)]
        hour: u32,
    },
    /// Weighted symbol prompt for a birth profile
    SymbolPrompt {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Birth time (HH:MM)
        #[arg(long, default_value = "")]
        time: String,
        /// western, balanced or eastern (config default if omitted)
        #[arg(long)]
        influence: Option<String>,
        /// Ask for a transparent background
        #[arg(long, conflicts_with = "no_transparent")]
        transparent: bool,
        /// Ask for the cinematic background even if the config defaults to transparent
        #[arg(long)]
        no_transparent: bool,
        /// Print the remote symbol request payload instead of the prompt
        #[arg(long)]
        request: bool,
    },
    /// Print the effective configuration
    Config,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> CosmicConfig {
    CosmicConfig::resolve(path.map(PathBuf::as_path)).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}");
        std::process::exit(1);
    })
}

fn require_planet(name: &str) -> Planet {
    name.parse().unwrap_or_else(|e| {
        eprintln!("{e}");
        eprintln!("Valid: Mercury, Venus, Mars, Jupiter, Saturn, Uranus, Neptune, Pluto");
        std::process::exit(1);
    })
}

fn require_sign(name: &str) -> ZodiacSign {
    name.parse().unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

fn require_hour(hour: u32) -> u32 {
    if hour > 23 {
        eprintln!("Invalid hour: {hour} (0-23)");
        std::process::exit(1);
    }
    hour
}

fn require_influence(s: &str) -> Influence {
    s.parse().unwrap_or_else(|e: String| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

/// Explicit flags win over the configured default.
fn transparent_background(transparent: bool, no_transparent: bool, default: bool) -> bool {
    if transparent {
        true
    } else if no_transparent {
        false
    } else {
        default
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("Failed to serialize output: {e}");
            std::process::exit(1);
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing();
    tracing::debug!(config = ?cli.config, json = cli.json, "starting");

    let session = Session::new(load_config(cli.config.as_ref()));

    match cli.command {
        Commands::Profile {
            date,
            time,
            location,
        } => {
            let result = session.analyze(&BirthData::new(date, time, location));
            if cli.json {
                print_json(&result);
            } else {
                print!("{}", render::profile(&result));
            }
        }

        Commands::Transits { date } => {
            let fetch = match date.as_deref() {
                Some(d) => session.transits_for_str(d),
                None => session.current_transits(),
            };
            if cli.json {
                print_json(&fetch.snapshot);
            } else {
                print!("{}", render::transits(&fetch));
            }
        }

        Commands::Bazi { date } => {
            let chart = cosmic_rs::pillars(date.as_deref());
            if cli.json {
                print_json(&chart);
            } else {
                print!("{}", render::bazi(&chart));
            }
        }

        Commands::SunSign { date } => {
            let sign = cosmic_rs::sun_sign(date.as_deref());
            if cli.json {
                print_json(&sign);
            } else {
                println!("{} {} ({})", sign, sign.glyph(), sign.element());
            }
        }

        Commands::Moon { date } => {
            let pos = cosmic_rs::moon(date.as_deref());
            if cli.json {
                print_json(&pos);
            } else {
                println!("{}", render::sign_position("Moon", &pos));
            }
        }

        Commands::Planet { name, date } => {
            let planet = require_planet(&name);
            let pos = cosmic_rs::planet(date.as_deref(), planet);
            if cli.json {
                print_json(&pos);
            } else {
                println!("{}", render::planet(planet.name(), &pos));
            }
        }

        Commands::Ascendant { sign, hour } => {
            let asc = ascendant_for(require_sign(&sign), require_hour(hour));
            if cli.json {
                print_json(&asc);
            } else {
                println!("{asc}");
            }
        }

        Commands::SymbolPrompt {
            date,
            time,
            influence,
            transparent,
            no_transparent,
            request,
        } => {
            let result = session.analyze(&BirthData::new(date, time, ""));
            let defaults = session.config().symbol;
            let config = SymbolConfig::new(
                influence
                    .as_deref()
                    .map_or(defaults.influence, require_influence),
                transparent_background(
                    transparent,
                    no_transparent,
                    defaults.transparent_background,
                ),
            );
            if request {
                print_json(&session.symbol_request(&result, Some(config)));
            } else if cli.json {
                print_json(&session.symbol_prompt(&result, Some(config)));
            } else {
                println!("{}", session.symbol_prompt(&result, Some(config)));
            }
        }

        Commands::Config => match session.config().to_json_pretty() {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("Failed to serialize config: {e}");
                std::process::exit(1);
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["cosmic", "transits", "--date", "2024-06-01", "--json"]).unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Commands::Transits { date: Some(_) }));
    }

    #[test]
    fn profile_requires_date() {
        assert!(Cli::try_parse_from(["cosmic", "profile"]).is_err());
    }

    #[test]
    fn symbol_prompt_flags() {
        let cli = Cli::try_parse_from([
            "cosmic",
            "symbol-prompt",
            "--date",
            "1990-01-15",
            "--influence",
            "eastern",
            "--transparent",
        ])
        .unwrap();
        match cli.command {
            Commands::SymbolPrompt {
                influence,
                transparent,
                request,
                ..
            } => {
                assert_eq!(influence.as_deref(), Some("eastern"));
                assert!(transparent);
                assert!(!request);
            }
            _ => panic!("wrong subcommand"),
        }
    }

    #[test]
    fn no_transparent_overrides_config_default() {
        let cli = Cli::try_parse_from([
            "cosmic",
            "symbol-prompt",
            "--date",
            "1990-01-15",
            "--no-transparent",
        ])
        .unwrap();
        match cli.command {
            Commands::SymbolPrompt {
                transparent,
                no_transparent,
                ..
            } => {
                assert!(!transparent);
                assert!(no_transparent);
                assert!(!transparent_background(transparent, no_transparent, true));
            }
            _ => panic!("wrong subcommand"),
        }
    }

    #[test]
    fn background_flags_resolve_against_default() {
        assert!(transparent_background(false, false, true));
        assert!(!transparent_background(false, false, false));
        assert!(transparent_background(true, false, false));
        assert!(!transparent_background(false, true, true));
    }

    #[test]
    fn transparent_flags_conflict() {
        assert!(
            Cli::try_parse_from([
                "cosmic",
                "symbol-prompt",
                "--date",
                "1990-01-15",
                "--transparent",
                "--no-transparent",
            ])
            .is_err()
        );
    }
}
