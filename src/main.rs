use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use map_centers::{
    ExportConfig, ExportFormat, MapCenter, MapCenterError, Preset, all_centers, export_centers,
    parse_point,
};

#[derive(Parser)]
#[command(name = "map-centers", about = "Named map center points for web maps")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the built-in map centers
    List,

    /// Print one map center
    Show {
        /// Preset name, e.g. middle-of-usa or southern-ontario
        preset: String,

        /// Output format
        #[arg(short, long, default_value = "lnglat")]
        format: ShowFormat,
    },

    /// Find the built-in center closest to a point
    Nearest {
        /// Point as "lon,lat", WKT or GeoJSON
        point: String,
    },

    /// Write all built-in centers to a file
    Export {
        /// Output file path
        output: String,

        /// File format
        #[arg(short, long, default_value = "csv")]
        format: FileFormat,

        /// Include Web Mercator coordinates
        #[arg(long)]
        mercator: bool,
    },
}

#[derive(Clone, ValueEnum)]
enum ShowFormat {
    Lnglat,
    Wkt,
    Geojson,
    Mercator,
}

#[derive(Clone, ValueEnum)]
enum FileFormat {
    Csv,
    Geojson,
}

fn main() -> Result<(), MapCenterError> {
    env_logger::Builder::from_default_env().init();
    let cli = Cli::parse();

    match cli.command {
        Commands::List => {
            for center in all_centers() {
                println!(
                    "{:<18} {},{}  {}",
                    center.name(),
                    center.longitude(),
                    center.latitude(),
                    center.description().unwrap_or_default()
                );
            }
        }

        Commands::Show { preset, format } => {
            let center = preset.parse::<Preset>()?.center();
            match format {
                ShowFormat::Lnglat => {
                    let [lng, lat] = center.to_lng_lat();
                    println!("[{}, {}]", lng, lat);
                }
                ShowFormat::Wkt => println!("{}", center.to_wkt()),
                ShowFormat::Geojson => {
                    let json = serde_json::to_string(&center.to_geojson())
                        .map_err(|e| MapCenterError::SerializationError(e.to_string()))?;
                    println!("{}", json);
                }
                ShowFormat::Mercator => {
                    let merc = center.to_web_mercator()?;
                    println!("{} {}", merc.x(), merc.y());
                }
            }
        }

        Commands::Nearest { point } => {
            let pt = parse_point(&point)?;
            let preset = Preset::nearest(&pt)?;
            let center = preset.center();
            let km = MapCenter::new("query", &pt)?.distance_to(&center) / 1000.0;
            println!("{} ({:.1} km)", center, km);
        }

        Commands::Export {
            output,
            format,
            mercator,
        } => {
            let format = match format {
                FileFormat::Csv => ExportFormat::Csv,
                FileFormat::Geojson => ExportFormat::GeoJson,
            };
            let config = ExportConfig::new().format(format).include_mercator(mercator);
            export_centers(&all_centers(), &output, &config)?;
            info!("wrote {}", output);
        }
    }

    Ok(())
}
