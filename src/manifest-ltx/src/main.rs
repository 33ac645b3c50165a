use std::path::PathBuf;

use clap::{Parser, Subcommand};
use manifest_ltx::config::{THRESHOLD_ENV_VAR, parse_threshold, threshold_from_env};
use manifest_ltx::logging::{DEFAULT_LOG_SETTINGS, setup_logging};
use manifest_ltx::{
    ContentItem, DEFAULT_PRIORITY, Error, FsPersister, HttpFetcher, ManifestManager, ManifestMetadata,
    ManifestOptions, TextPersister, load_text, parse, validate_and_correct,
};

#[derive(Parser)]
#[command(name = "manifest-ltx")]
#[command(about = "Generate, validate and parse llms.txt manifests from sitemaps", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an llms.txt from a sitemap
    Generate {
        /// Sitemap URL or local file path.
        #[arg(short, long)]
        sitemap: String,
        /// Title of the manifest.
        #[arg(short, long)]
        title: String,
        /// One-line description of the site.
        #[arg(short, long)]
        description: String,
        /// Minimum sitemap priority for core content [default: $LTX_PRIORITY_THRESHOLD or 0.5]
        #[arg(long, value_parser = validate_threshold)]
        threshold: Option<f64>,
        /// Optional-section link as "Title|URL". Repeatable.
        #[arg(long = "optional", value_parser = validate_item)]
        optional: Vec<ContentItem>,
        /// Run the generated text through validation + correction before output.
        #[arg(long)]
        validate: bool,
        /// Output file path for the generated llms.txt. Printed to stdout if absent.
        #[arg(short, long, value_parser = validate_output_file)]
        output: Option<PathBuf>,
    },

    /// Validate an existing llms.txt, correcting its title and description.
    Validate {
        /// llms.txt URL or local file path.
        #[arg(short, long)]
        file: String,
        /// Expected title.
        #[arg(short, long)]
        title: String,
        /// Expected description.
        #[arg(short, long)]
        description: String,
        /// Where to write the corrected llms.txt. Printed to stdout if absent.
        #[arg(short, long, value_parser = validate_output_file)]
        output: Option<PathBuf>,
    },

    /// Parse an llms.txt and print it as JSON.
    Parse {
        /// llms.txt URL or local file path.
        #[arg(short, long)]
        file: String,
    },
}

fn validate_threshold(s: &str) -> Result<f64, String> {
    parse_threshold(s).map_err(|e| e.to_string())
}

fn validate_item(s: &str) -> Result<ContentItem, String> {
    match s.split_once('|') {
        Some((title, url)) if !title.trim().is_empty() && !url.trim().is_empty() => {
            Ok(ContentItem::new(title.trim(), url.trim()))
        }
        _ => Err(format!("Expected \"Title|URL\", got: '{}'", s)),
    }
}

fn validate_output_file(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);

    if path.exists() && path.is_dir() {
        return Err(format!("Output path is a directory: {}", path.display()));
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        return Err(format!(
            "Output file parent directory does not exist: {}",
            parent.display()
        ));
    }

    Ok(path)
}

#[tokio::main]
async fn main() {
    // Load environment variables from .env file., if it exists
    dotenvy::dotenv().ok();
    setup_logging(DEFAULT_LOG_SETTINGS);

    let cli = Cli::parse();
    if let Err(e) = run(cli.command).await {
        eprintln!("ERROR: {e}");
        std::process::exit(1)
    }
}

async fn run(command: Commands) -> Result<(), Error> {
    match command {
        Commands::Generate {
            sitemap,
            title,
            description,
            threshold,
            optional,
            validate,
            output,
        } => {
            let threshold = match threshold {
                Some(t) => t,
                None => threshold_from_env(THRESHOLD_ENV_VAR, DEFAULT_PRIORITY)?,
            };
            let options = ManifestOptions::builder()
                .title(title)
                .description(description)
                .threshold(threshold)
                .optional_items(optional)
                .build();

            let mut manager = ManifestManager::with_defaults(&options)?;
            let text = manager.run(&sitemap, &options).await?;

            match output {
                Some(path) => {
                    let location = path.to_string_lossy();
                    if validate {
                        manager.save_validated(&location).await?;
                    } else {
                        manager.save(&location).await?;
                    }
                    println!("Wrote llms.txt: {}", path.display());
                }
                None if validate => print!("{}", manager.generate_validated()?),
                None => print!("{text}"),
            }
        }

        Commands::Validate {
            file,
            title,
            description,
            output,
        } => {
            let metadata = ManifestMetadata::new(&title, &description)?;
            let fetcher = HttpFetcher::new(ManifestOptions::default().request_timeout)?;
            let text = load_text(&fetcher, &file).await?;
            let corrected = validate_and_correct(&text, &metadata)?;

            match output {
                Some(path) => {
                    FsPersister.persist_text(&path.to_string_lossy(), &corrected).await?;
                    println!("Valid llms.txt written to: {}", path.display());
                }
                None => print!("{corrected}"),
            }
        }

        Commands::Parse { file } => {
            let fetcher = HttpFetcher::new(ManifestOptions::default().request_timeout)?;
            let text = load_text(&fetcher, &file).await?;
            let parsed = parse(&text)?;
            println!("{}", serde_json::to_string_pretty(&parsed)?);
        }
    }
    Ok(())
}
