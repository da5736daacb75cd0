//! Skin Totem CLI
//!
//! Convert Minecraft skins into totem of undying textures and resource packs.

use clap::{Parser, Subcommand, ValueEnum};
use skin_totem::{build_pack, render_report, ArmModel, PackConfig, RegionMap, SkinImage};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "skin-totem")]
#[command(author, version, about = "Turn Minecraft skins into totem of undying textures", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a skin into a totem texture or resource pack
    Convert {
        /// Skin PNG (64x64 or legacy 64x32)
        #[arg(short, long)]
        skin: PathBuf,

        /// Output file path (extension added when missing)
        #[arg(short, long)]
        output: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "mcpack")]
        format: OutputFormat,

        /// Sample slim (Alex) arms
        #[arg(long)]
        slim: bool,

        /// JSON file with pack options
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Entity geometry to bundle as models/entity/totem.geo.json
        #[arg(short, long)]
        geometry: Option<PathBuf>,
    },

    /// Show how a skin maps onto the totem
    Info {
        /// Skin PNG (64x64 or legacy 64x32)
        #[arg(short, long)]
        skin: PathBuf,

        /// Sample slim (Alex) arms
        #[arg(long)]
        slim: bool,
    },

    /// Print the region table
    Regions {
        /// Show the slim (Alex) arm table
        #[arg(long)]
        slim: bool,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Bare 16x16 totem texture
    Png,
    /// Bedrock resource pack
    Mcpack,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            skin,
            output,
            format,
            slim,
            config,
            geometry,
        } => {
            convert(&skin, &output, format, slim, config.as_deref(), geometry.as_deref())?;
        }
        Commands::Info { skin, slim } => {
            show_skin_info(&skin, ArmModel::from_slim(slim))?;
        }
        Commands::Regions { slim } => {
            show_regions(RegionMap::for_model(ArmModel::from_slim(slim)));
        }
    }

    Ok(())
}

fn convert(
    skin_path: &Path,
    output_path: &Path,
    format: OutputFormat,
    slim: bool,
    config_path: Option<&Path>,
    geometry_path: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match config_path {
        Some(path) => {
            println!("Loading pack options from {:?}...", path);
            PackConfig::from_json(&fs::read_to_string(path)?)?
        }
        None => PackConfig::default(),
    };
    if slim {
        config = config.with_slim_arms(true);
    }
    if let Some(path) = geometry_path {
        config = config.with_entity_geometry(fs::read_to_string(path)?);
    }

    println!("Loading skin from {:?}...", skin_path);
    let skin_png = fs::read(skin_path)?;
    let pack = build_pack(&skin_png, &config)?;

    match format {
        OutputFormat::Png => {
            let png_path = with_default_extension(output_path, "png");
            fs::write(&png_path, &pack.totem_png)?;
            println!("Exported totem ({} bytes) to {:?}", pack.totem_png.len(), png_path);
        }
        OutputFormat::Mcpack => {
            let pack_path = if output_path.is_dir() {
                output_path.join(pack.file_name)
            } else {
                with_default_extension(output_path, "mcpack")
            };
            fs::write(&pack_path, &pack.archive)?;
            println!("Exported resource pack ({} bytes) to {:?}", pack.archive.len(), pack_path);
            println!("  Name: {}", pack.manifest.header.name);
            println!("  Pack UUID: {}", pack.manifest.header.uuid);
        }
    }

    Ok(())
}

fn show_skin_info(skin_path: &Path, model: ArmModel) -> Result<(), Box<dyn std::error::Error>> {
    println!("Loading skin from {:?}...", skin_path);
    let skin = SkinImage::from_png_bytes(&fs::read(skin_path)?)?;
    let (totem, report) = render_report(&skin, RegionMap::for_model(model));

    println!("\nSkin Info:");
    println!("  Size: {}x{} ({:?})", skin.width(), skin.height(), skin.format());
    println!("  Transparent pixels: {}", skin.has_transparency());
    println!("  Arm model: {:?}", model);
    println!("  Regions drawn: {}", report.drawn.len());
    if !report.skipped.is_empty() {
        println!("  Regions skipped: {}", report.skipped.join(", "));
    }

    let covered = totem.pixels().chunks(4).filter(|p| p[3] > 0).count();
    println!("  Totem pixels drawn: {}/{}", covered, totem.width() * totem.height());

    Ok(())
}

fn show_regions(map: RegionMap) {
    println!("{:<24} {:>16} {:>16}", "region", "skin", "totem");
    for region in map.iter() {
        println!(
            "{:<24} {:>16} {:>16}",
            region.name,
            format_rect(region.src),
            format_rect(region.dest)
        );
    }
}

fn format_rect(rect: skin_totem::Rect) -> String {
    format!("{},{} {}x{}", rect.x, rect.y, rect.width, rect.height)
}

fn with_default_extension(path: &Path, extension: &str) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(extension)
    }
}
