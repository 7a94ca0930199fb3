use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use color_boundary::{ColorFormat, ColorValue};
use colorcrush::assets::{AssetLoader, ConfigSource};
use colorcrush::models::AppConfig;
use colorcrush::services::{
    export_grid, format_event, parse_record, run_all, run_experiment, ColorDataLoader, ExperimentReport,
    SimulatedObserver, TargetRun,
};

#[derive(Parser)]
#[command(name = "colorcrush")]
#[command(about = "Colorcrush - perceptual color-boundary experiments")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a color between representations
    Convert {
        #[arg(allow_negative_numbers = true)]
        c1: f64,
        #[arg(allow_negative_numbers = true)]
        c2: f64,
        #[arg(allow_negative_numbers = true)]
        c3: f64,

        /// Source representation (e.g. srgb_0_255, display_p3_0_1, xyz, xyy)
        #[arg(short, long, default_value = "srgb_0_1")]
        from: ColorFormat,

        /// Target representation
        #[arg(short, long, default_value = "xyy")]
        to: ColorFormat,
    },
    /// Run the configured experiment with a simulated observer
    Run {
        /// Target index, target name, or sRGB hex color (default: all targets)
        #[arg(short, long)]
        target: Option<String>,

        /// Override the observer's discrimination threshold (xy distance)
        #[arg(long)]
        threshold: Option<f64>,

        /// Override the observer's threshold jitter
        #[arg(long)]
        noise: Option<f64>,

        /// Override the random seed
        #[arg(long)]
        seed: Option<u64>,

        /// Print a JSON report instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Export every target's candidate grid as CSV
    Export {
        /// Output CSV file path
        #[arg(short, long)]
        output: PathBuf,
    },
    /// List the configured target colors
    Targets,
    /// Load a color data file and print its colors in another representation
    Data {
        /// Data file (default: color_data_file from config)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Representation of the file's values (default: from config)
        #[arg(long)]
        format: Option<ColorFormat>,

        /// Representation to print
        #[arg(short, long, default_value = "xyy")]
        to: ColorFormat,
    },
    /// Decode a stored result record
    Decode {
        /// The record line (hex colors followed by axes)
        record: String,

        /// Number of directions the record holds
        #[arg(short, long, default_value_t = 8)]
        directions: usize,
    },
    /// Write the embedded config.yaml to disk for customization
    Init {
        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,

        /// List embedded assets without extracting
        #[arg(long)]
        list: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "colorcrush=warn,color_boundary=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    match cli.command {
        Some(Commands::Convert {
            c1,
            c2,
            c3,
            from,
            to,
        }) => {
            run_convert_command([c1, c2, c3], from, to);
            Ok(())
        }
        Some(Commands::Run {
            target,
            threshold,
            noise,
            seed,
            json,
        }) => run_experiment_command(target, threshold, noise, seed, json),
        Some(Commands::Export { output }) => run_export_command(&output),
        Some(Commands::Targets) => run_targets_command(),
        Some(Commands::Data { file, format, to }) => run_data_command(file, format, to),
        Some(Commands::Decode { record, directions }) => run_decode_command(&record, directions),
        Some(Commands::Init { force, list }) => run_init_command(force, list),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

fn load_config() -> AppConfig {
    AppConfig::load_from_assets(&AssetLoader::from_env())
}

fn run_convert_command(components: [f64; 3], from: ColorFormat, to: ColorFormat) {
    let value = ColorValue::new(components, from);
    let converted = value.convert(to);
    println!("{value}");
    println!("{converted}");
}

fn run_experiment_command(
    target: Option<String>,
    threshold: Option<f64>,
    noise: Option<f64>,
    seed: Option<u64>,
    json: bool,
) -> anyhow::Result<()> {
    let mut config = load_config();
    if let Some(t) = threshold {
        config.observer.threshold = t;
    }
    if let Some(n) = noise {
        config.observer.noise = n;
    }
    if let Some(s) = seed {
        config.random_seed = s;
    }
    let kind = config.experiment_kind()?;

    let runs = match target {
        Some(arg) => {
            let base = config.resolve_target(&arg)?;
            let mut observer = SimulatedObserver::new(base, config.observer, config.random_seed);
            let mut experiment = kind.begin(base);
            let encoding = run_experiment(experiment.as_mut(), &mut observer);
            vec![TargetRun {
                index: 0,
                name: arg,
                base,
                encoding,
            }]
        }
        None => run_all(&config)?,
    };

    for run in &runs {
        tracing::info!(target = %run.name, "{}", format_event(&run.encoding));
    }

    if json {
        let reports: Vec<ExperimentReport> = runs
            .iter()
            .map(|run| ExperimentReport::new(kind.name(), &run.name, run.base, &run.encoding))
            .collect();
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    println!(
        "{kind}, threshold {}, noise {}, seed {}\n",
        config.observer.threshold, config.observer.noise, config.random_seed
    );
    for run in &runs {
        let magnitudes: Vec<String> = run
            .encoding
            .magnitudes()
            .iter()
            .map(|m| format!("{m:.3}"))
            .collect();
        println!(
            "{:>2}  {:<20} #{}  {}",
            run.index,
            run.name,
            &run.base.to_hex_rgba()[..6],
            magnitudes.join(" ")
        );
    }

    Ok(())
}

fn run_export_command(output: &Path) -> anyhow::Result<()> {
    let config = load_config();
    let kind = config.experiment_kind()?;
    let targets = config.targets()?;

    let rows = export_grid(output, &targets, kind)?;
    println!(
        "Exported {rows} candidates for {} targets to {}",
        targets.len(),
        output.display()
    );
    Ok(())
}

fn run_targets_command() -> anyhow::Result<()> {
    let config = load_config();
    for (index, target) in config.target_colors.iter().enumerate() {
        let xyy = target.color()?.convert(ColorFormat::XyY);
        println!("{index:>2}  {:<20} {}  {xyy}", target.name, target.hex);
    }
    Ok(())
}

fn run_data_command(
    file: Option<PathBuf>,
    format: Option<ColorFormat>,
    to: ColorFormat,
) -> anyhow::Result<()> {
    let config = load_config();
    let format = match format {
        Some(f) => f,
        None => config.data_format()?,
    };
    let path = file.or_else(|| config.color_data_file.clone()).ok_or_else(|| {
        anyhow::anyhow!("No color data file given (use --file or set color_data_file)")
    })?;

    let loader = ColorDataLoader::new(path, &config.color_split_regex, format)?;
    let data = loader.load()?;
    println!(
        "{} colors from {} ({})",
        data.colors.len(),
        loader.path().display(),
        data.format
    );
    for color in &data.colors {
        println!("  {}", color.convert(to));
    }
    Ok(())
}

fn run_decode_command(record: &str, directions: usize) -> anyhow::Result<()> {
    let encoding = parse_record(record, directions)?;
    for (index, (color, magnitude)) in encoding
        .boundary_colors
        .iter()
        .zip(encoding.magnitudes())
        .enumerate()
    {
        println!("{index}  #{}  {magnitude:.4}", &color.to_hex_rgba()[..6]);
    }
    Ok(())
}

fn run_init_command(force: bool, list: bool) -> anyhow::Result<()> {
    if list {
        println!("Embedded assets:\n");
        for f in AssetLoader::list_embedded() {
            println!("  {f}");
        }
        return Ok(());
    }

    let loader = AssetLoader::from_env();
    let report = loader.init(force)?;

    for f in &report.written {
        println!("  + {f}");
    }
    if !report.skipped.is_empty() {
        println!("Skipped existing files (use --force to overwrite):");
        for f in &report.skipped {
            println!("  - {f}");
        }
    }

    Ok(())
}

fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let loader = AssetLoader::from_env();
    let config = AppConfig::load_from_assets(&loader);

    println!("Colorcrush v{VERSION}");
    println!("Perceptual color-boundary experiments\n");

    println!("Environment Variables:");
    println!(
        "  CONFIG_FILE = {}",
        loader
            .config_file()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(not set)".to_string())
    );

    let source = match loader.config_source() {
        ConfigSource::Embedded => "embedded".to_string(),
        ConfigSource::File(path) => path.display().to_string(),
        ConfigSource::Missing(_) => "embedded (file not found)".to_string(),
    };
    println!("\nConfiguration:");
    println!("  Source:     {source}");
    println!("  Experiment: {}", config.color_experiment_name);
    println!("  Targets:    {}", config.target_colors.len());
    println!("  Seed:       {}", config.random_seed);
    if let Some(ref path) = config.color_data_file {
        println!("  Color data: {} ({})", path.display(), config.color_data_format);
    }

    println!("\nCommands:");
    println!("  colorcrush convert   Convert a color between representations");
    println!("  colorcrush run       Run experiments with a simulated observer");
    println!("  colorcrush export    Export candidate grids as CSV");
    println!("  colorcrush targets   List target colors");
    println!("  colorcrush data      Load and convert a color data file");
    println!("  colorcrush decode    Decode a stored result record");
    println!("  colorcrush init      Write the default config.yaml");
    println!("\nRun 'colorcrush --help' for more details.");
}
