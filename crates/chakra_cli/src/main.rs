use std::fmt::Display;
use std::path::PathBuf;

use chakra_base::{
    Classifier, Dms, NakshatraData, PadaData, RashiData, ReferenceData, ZodiacPosition,
    deg_to_dms, normalize_360,
};
use clap::{ArgAction, Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "chakra", about = "Sidereal zodiac classification CLI")]
struct Cli {
    /// JSON reference tables replacing the built-in ones
    #[arg(long, global = true)]
    reference: Option<PathBuf>,
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    /// Log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rashi from sidereal longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Nakshatra from sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Pada from sidereal longitude
    Pada {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Rashi, nakshatra and pada from sidereal longitude
    Classify {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Rashi, nakshatra and pada from tropical longitude + ayanamsha
    ClassifyTropical {
        /// Tropical ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
        /// Ayanamsha in degrees
        #[arg(long)]
        ayanamsha: f64,
    },
    /// Rashi by number (1-12)
    RashiInfo { number: u32 },
    /// Nakshatra by number (1-27)
    NakshatraInfo { number: u32 },
    /// Pada by nakshatra number (1-27) and pada number (1-4)
    PadaInfo { nakshatra: u32, pada: u32 },
    /// Convert degrees to DMS
    Dms {
        /// Angle in decimal degrees
        #[arg(allow_negative_numbers = true)]
        deg: f64,
    },
    /// Print the active reference tables
    Tables,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn or_exit<T, E: Display>(result: Result<T, E>, what: &str) -> T {
    result.unwrap_or_else(|e| {
        error!("{what}: {e}");
        std::process::exit(1);
    })
}

fn load_reference(path: Option<&PathBuf>) -> ReferenceData {
    match path {
        Some(p) => or_exit(ReferenceData::from_path(p), "Failed to load reference tables"),
        None => ReferenceData::standard(),
    }
}

fn emit<T: Serialize>(json: bool, value: &T, text: impl FnOnce(&T) -> String) {
    if json {
        println!("{}", or_exit(serde_json::to_string_pretty(value), "Failed to encode JSON"));
    } else {
        println!("{}", text(value));
    }
}

fn format_rashi(r: &RashiData) -> String {
    format!(
        "{} (#{}) - {:?} {:?}, lord {}, symbol {} [{:.4}, {:.4})",
        r.name,
        r.number,
        r.element,
        r.quality,
        r.lord.english_name(),
        r.symbol,
        r.start_longitude,
        r.end_longitude
    )
}

fn format_nakshatra(n: &NakshatraData) -> String {
    format!(
        "{} (#{}) - lord {}, deity {}, symbol {}, {:?}, {:?}, yoni {}, nadi {:?} [{:.4}, {:.4})",
        n.name,
        n.number,
        n.lord.english_name(),
        n.deity,
        n.symbol,
        n.gender,
        n.guna,
        n.yoni,
        n.nadi,
        n.start_longitude,
        n.end_longitude
    )
}

fn format_pada(p: &PadaData) -> String {
    format!(
        "{} - {} [{:.4}, {:.4})",
        p.name, p.description, p.start_longitude, p.end_longitude
    )
}

fn format_dms(deg: f64, d: &Dms) -> String {
    let sign = if deg < 0.0 { "-" } else { "" };
    format!("{sign}{} deg {} min {:.4} sec", d.degrees, d.minutes, d.seconds)
}

fn format_position(pos: &ZodiacPosition) -> String {
    let dms = pos.dms;
    format!(
        "Longitude: {:.4} deg\nRashi:     {} - {} deg {} min {:.1} sec ({:.4} deg in rashi)\nNakshatra: {}\nPada:      {}",
        pos.longitude,
        format_rashi(&pos.rashi),
        dms.degrees,
        dms.minutes,
        dms.seconds,
        pos.degrees_in_rashi,
        format_nakshatra(&pos.nakshatra),
        format_pada(&pos.pada)
    )
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    debug!(command = ?cli.command, "parsed command line");

    let reference = load_reference(cli.reference.as_ref());
    let classifier = Classifier::new(&reference);
    let json = cli.json;

    match cli.command {
        Commands::Rashi { lon } => {
            let r = or_exit(classifier.rashi_from_longitude(lon), "Rashi lookup failed");
            let dms = or_exit(
                deg_to_dms(normalize_360(lon) - r.start_longitude),
                "DMS conversion failed",
            );
            emit(json, &r, |r| {
                format!(
                    "{} - {} deg {} min {:.1} sec",
                    format_rashi(r),
                    dms.degrees,
                    dms.minutes,
                    dms.seconds
                )
            });
        }

        Commands::Nakshatra { lon } => {
            let n = or_exit(classifier.nakshatra_from_longitude(lon), "Nakshatra lookup failed");
            emit(json, &n, format_nakshatra);
        }

        Commands::Pada { lon } => {
            let p = or_exit(classifier.pada_from_longitude(lon), "Pada lookup failed");
            emit(json, &p, format_pada);
        }

        Commands::Classify { lon } => {
            let pos = or_exit(classifier.classify_longitude(lon), "Classification failed");
            emit(json, &pos, format_position);
        }

        Commands::ClassifyTropical { lon, ayanamsha } => {
            let pos = or_exit(
                classifier.classify_tropical(lon, ayanamsha),
                "Classification failed",
            );
            emit(json, &pos, format_position);
        }

        Commands::RashiInfo { number } => {
            let r = or_exit(classifier.rashi_from_number(number), "Rashi lookup failed");
            emit(json, &r, format_rashi);
        }

        Commands::NakshatraInfo { number } => {
            let n = or_exit(classifier.nakshatra_from_number(number), "Nakshatra lookup failed");
            emit(json, &n, format_nakshatra);
        }

        Commands::PadaInfo { nakshatra, pada } => {
            let p = or_exit(classifier.pada_from_number(nakshatra, pada), "Pada lookup failed");
            emit(json, &p, format_pada);
        }

        Commands::Dms { deg } => {
            let d = or_exit(deg_to_dms(deg), "DMS conversion failed");
            emit(json, &d, |d| format_dms(deg, d));
        }

        Commands::Tables => {
            emit(json, &reference, |reference| {
                let mut lines = Vec::with_capacity(12 + 27);
                for n in 1..=12 {
                    if let Ok(r) = classifier.rashi_from_number(n) {
                        lines.push(format_rashi(&r));
                    }
                }
                for n in 1..=27 {
                    if let Ok(nak) = classifier.nakshatra_from_number(n) {
                        lines.push(format_nakshatra(&nak));
                    }
                }
                debug!(
                    rashis = reference.rashis().len(),
                    nakshatras = reference.nakshatras().len(),
                    "printed tables"
                );
                lines.join("\n")
            });
        }
    }
}
