use clap::{Parser, Subcommand};
use product_images::host::{NamespacedClassNames, StaticRuntime};
use product_images::normalize::normalize_content_order;
use product_images::{GalleryProps, ProductImages, config, output};
use std::path::{Path, PathBuf};

/// Shared flags for commands that render a props file.
#[derive(clap::Args, Clone)]
struct PropsArgs {
    /// Catalog props file (JSON)
    props: PathBuf,

    /// Directory containing gallery.toml
    #[arg(long, default_value = ".")]
    config: PathBuf,

    /// Class-name namespace used for the container handles
    #[arg(long, default_value = "product-images")]
    namespace: String,
}

#[derive(Parser)]
#[command(name = "product-images")]
#[command(about = "Compose product media into carousel slides")]
#[command(long_about = "\
Compose product media into carousel slides

Reads a catalog props file, drops images whose imageText matches a hidden
pattern, maps images and videos to slides, and orders them.

Props file (camelCase JSON, every key optional):

  {
    \"images\": [
      {\"imageUrls\": [\"https://cdn/1.jpg\"], \"imageText\": \"front\"},
      {\"imageUrl\": \"https://cdn/2.jpg\", \"thumbnailUrl\": \"https://cdn/2-t.jpg\"}
    ],
    \"videos\": [{\"videoUrl\": \"https://cdn/spin.mp4\"}],
    \"hiddenImages\": \"skuvariation\",
    \"contentOrder\": \"videos-first\"
  }

Settings resolution (later wins):
  stock defaults → gallery.toml → props file

Run 'product-images gen-config' to generate a documented gallery.toml.")]
#[command(version)]
struct Cli {
    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compose slides and print them
    Compose {
        #[command(flatten)]
        args: PropsArgs,

        /// Print the carousel payload as JSON instead of a listing
        #[arg(long)]
        json: bool,
    },
    /// Validate a props file without printing slides
    Check(PropsArgs),
    /// Print a stock gallery.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match cli.command {
        Command::Compose { args, json } => {
            let props = load_props(&args.props, &args.config)?;
            let payload = gallery(&args).render(&props)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                let order = normalize_content_order(props.content_order.as_deref())?;
                output::print_compose_output(&props, &payload, order);
            }
        }
        Command::Check(args) => {
            let props = load_props(&args.props, &args.config)?;
            let payload = gallery(&args).render(&props)?;
            println!(
                "{}",
                output::format_check_summary(&args.props, &props, &payload)
            );
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

fn gallery(args: &PropsArgs) -> ProductImages<NamespacedClassNames, StaticRuntime> {
    ProductImages::new(
        NamespacedClassNames::new(args.namespace.clone()),
        StaticRuntime::default(),
    )
}

/// Read the props file and layer it over `gallery.toml`.
fn load_props(path: &Path, config_dir: &Path) -> Result<GalleryProps, Box<dyn std::error::Error>> {
    let settings = config::load_config(config_dir)?;
    let content = std::fs::read_to_string(path)?;
    let props: serde_json::Value = serde_json::from_str(&content)?;
    log::debug!("loaded props from {}", path.display());
    Ok(config::resolve_props(settings, props)?)
}
