//! Relief CLI - convert images to relief scripts from the command line
//!
//! Provides subcommands for:
//! - `convert`: Turn an image into an OpenSCAD relief script
//! - `calibrate`: Write the 256-level calibration plate set
//! - `preset`: Save conversion settings as a reusable preset file

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use relief_format::{load_preset, save_preset, write_script, PresetMetadata, ScriptHeader};
use relief_ops::{convert_bytes, write_calibration_set, CalibrationSettings, GENERATOR};
use relief_types::Settings;

mod settings_args;

use settings_args::SettingsArgs;

#[derive(Parser, Debug)]
#[command(name = "relief")]
#[command(about = "Generate relief model scripts from images", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert an image into a relief script
    Convert(ConvertArgs),
    /// Write one calibration plate per intensity level
    Calibrate(CalibrateArgs),
    /// Write a settings preset file
    Preset(PresetArgs),
}

#[derive(Parser, Debug)]
struct ConvertArgs {
    /// Input image (PNG, JPEG, BMP, GIF, ...)
    #[arg(short, long)]
    input: PathBuf,

    /// Output script path
    #[arg(short, long, default_value = "output.scad")]
    output: PathBuf,

    /// Preset file to start from; flags override its values
    #[arg(long)]
    preset: Option<PathBuf>,

    #[command(flatten)]
    settings: SettingsArgs,
}

#[derive(Parser, Debug)]
struct CalibrateArgs {
    /// Output directory
    #[arg(short, long)]
    output: PathBuf,

    /// Deepest hole in mm; plates are twice as thick (default: 1)
    #[arg(long, default_value = "1")]
    base_height: f64,

    /// Hole radius in mm (default: 1)
    #[arg(long, default_value = "1")]
    cylinder_radius: f64,

    /// Plate edge length in mm (default: 20)
    #[arg(long, default_value = "20")]
    block_size: f64,
}

#[derive(Parser, Debug)]
struct PresetArgs {
    /// Output preset file
    #[arg(short, long)]
    output: PathBuf,

    /// Preset name
    #[arg(long, default_value = "Untitled")]
    name: String,

    #[command(flatten)]
    settings: SettingsArgs,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert(args) => run_convert(args),
        Commands::Calibrate(args) => run_calibrate(args),
        Commands::Preset(args) => run_preset(args),
    }
}

fn run_convert(args: ConvertArgs) -> Result<()> {
    let base = match &args.preset {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read preset {:?}", path))?;
            let (settings, meta) = load_preset(&json).context("Failed to load preset")?;
            println!("Using preset {:?}", meta.name);
            settings
        }
        None => Settings::default(),
    };
    let settings = args.settings.apply(base);

    let bytes = std::fs::read(&args.input)
        .with_context(|| format!("Failed to read image {:?}", args.input))?;
    let conversion = convert_bytes(&bytes, &settings).context("Conversion failed")?;

    let header = ScriptHeader::new(GENERATOR, Some(settings));
    let path = write_script(&args.output, &header, &conversion.script)
        .context("Failed to write script")?;

    println!("Grid:   {} x {}", conversion.cols, conversion.rows);
    println!("Shapes: {}", conversion.shape_count);
    println!("Wrote {:?}", path);
    Ok(())
}

fn run_calibrate(args: CalibrateArgs) -> Result<()> {
    let cal = CalibrationSettings {
        block_size: args.block_size,
        base_height: args.base_height,
        cylinder_radius: args.cylinder_radius,
    };
    let paths = write_calibration_set(&args.output, &cal)
        .context("Failed to write calibration set")?;
    println!("Wrote {} calibration scripts to {:?}", paths.len(), args.output);
    Ok(())
}

fn run_preset(args: PresetArgs) -> Result<()> {
    let settings = args.settings.apply(Settings::default());
    settings.validate().context("Invalid settings")?;
    let json = save_preset(&settings, &PresetMetadata::new(args.name))
        .context("Failed to serialize preset")?;
    std::fs::write(&args.output, json)
        .with_context(|| format!("Failed to write {:?}", args.output))?;
    println!("Wrote preset {:?}", args.output);
    Ok(())
}
