use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use rayon::prelude::*;
use tracing_subscriber::EnvFilter;

use logomock::{
    CartImageOpts, CartLine, CdnConfig, LogoSet, OverlayImageOpts, OverrideScope, OverrideStore,
    PagePlacementOverrides, Product, ProductImageOpts, ScopedOverrides, Shade,
};

#[derive(Parser, Debug)]
#[command(name = "logomock", version)]
struct Cli {
    /// CDN config JSON; defaults apply when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the mockup URL of a product image.
    Product(ProductArgs),
    /// Print the mockup URL of a cart row.
    Cart(CartArgs),
    /// Print the parsed identifier of a CDN URL as JSON.
    Parse(ParseArgs),
    /// Compile many product jobs, one URL per line in input order.
    Batch(BatchArgs),
}

#[derive(Parser, Debug)]
struct ProductArgs {
    /// Product JSON (with `placement_coordinates`).
    #[arg(long)]
    product: PathBuf,

    /// Logo set JSON.
    #[arg(long)]
    logos: PathBuf,

    /// Render width; omitted means absolute pixels of the product image.
    #[arg(long)]
    max_width: Option<u32>,

    /// Emit the "where logos go" preview boxes.
    #[arg(long, default_value_t = false)]
    overlay: bool,

    /// Color variant index used as the base (overlay mode).
    #[arg(long)]
    color_index: Option<usize>,

    /// Force the logo shade (`lighter` or `darker`).
    #[arg(long)]
    shade: Option<Shade>,

    /// Page-level placement overrides JSON keyed by product id.
    #[arg(long)]
    page_placements: Option<PathBuf>,

    /// Editing scope for `--overrides`.
    #[arg(long, requires = "overrides")]
    scope: Option<String>,

    /// Override mapping JSON: placement name -> "Back" | "Default" | bool.
    #[arg(long, requires = "scope")]
    overrides: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct CartArgs {
    /// Cart line snapshot JSON.
    #[arg(long)]
    line: PathBuf,

    /// Logo set JSON.
    #[arg(long)]
    logos: PathBuf,

    /// Render the larger hover preview instead of the thumbnail.
    #[arg(long, default_value_t = false)]
    hover: bool,

    /// Live product JSON used by the hover preview.
    #[arg(long, requires = "hover")]
    product: Option<PathBuf>,

    /// Render width override.
    #[arg(long)]
    max_width: Option<u32>,
}

#[derive(Parser, Debug)]
struct ParseArgs {
    url: String,
}

#[derive(Parser, Debug)]
struct BatchArgs {
    /// JSON array of jobs: `{ "product": .., "logos": .., "max_width"?, "overlay"?, "color_index"? }`.
    #[arg(long)]
    jobs: PathBuf,

    /// Compile jobs in parallel.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(serde::Deserialize, Debug)]
struct BatchJob {
    product: Product,
    logos: LogoSet,
    #[serde(default)]
    max_width: Option<u32>,
    #[serde(default)]
    overlay: bool,
    #[serde(default)]
    color_index: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = match &cli.config {
        Some(path) => CdnConfig::from_path(path)?,
        None => CdnConfig::default(),
    };
    match cli.cmd {
        Command::Product(args) => cmd_product(&cfg, args),
        Command::Cart(args) => cmd_cart(&cfg, args),
        Command::Parse(args) => cmd_parse(args),
        Command::Batch(args) => cmd_batch(&cfg, args),
    }
}

fn read(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("read '{}'", path.display()))
}

fn cmd_product(cfg: &CdnConfig, args: ProductArgs) -> anyhow::Result<()> {
    let product = Product::from_json_str(&read(&args.product)?)
        .with_context(|| format!("parse product '{}'", args.product.display()))?;
    let logos = LogoSet::from_json_str(&read(&args.logos)?)
        .with_context(|| format!("parse logos '{}'", args.logos.display()))?;
    let page = args
        .page_placements
        .as_deref()
        .map(|p| PagePlacementOverrides::from_json_str(&read(p)?).map_err(anyhow::Error::from))
        .transpose()?;

    let store = OverrideStore::new();
    let scope = match (&args.scope, &args.overrides) {
        (Some(token), Some(path)) => {
            let scope = OverrideScope::new(token.as_str())?;
            store.set_force_back_overrides_json(&scope, &product.id, &read(path)?)?;
            Some(scope)
        }
        _ => None,
    };
    let overrides = scope.as_ref().map(|s| ScopedOverrides::new(&store, s));

    let url = if args.overlay {
        let opts = OverlayImageOpts {
            max_width: args.max_width,
            color_index: args.color_index,
            shade_override: args.shade,
            overrides,
            page_placements: page.as_ref(),
        };
        logomock::product_overlay_image_url(cfg, &product, &logos, &opts)
    } else {
        let opts = ProductImageOpts {
            max_width: args.max_width,
            max_height: None,
            shade_override: args.shade,
            overrides,
            page_placements: page.as_ref(),
        };
        logomock::product_image_url(cfg, &product, &logos, &opts)
    };
    println!("{url}");
    Ok(())
}

fn cmd_cart(cfg: &CdnConfig, args: CartArgs) -> anyhow::Result<()> {
    let line = CartLine::from_json_str(&read(&args.line)?)
        .with_context(|| format!("parse cart line '{}'", args.line.display()))?;
    let logos = LogoSet::from_json_str(&read(&args.logos)?)
        .with_context(|| format!("parse logos '{}'", args.logos.display()))?;
    let opts = CartImageOpts {
        max_width: args.max_width,
        ..CartImageOpts::default()
    };

    let url = if args.hover {
        let live = args
            .product
            .as_deref()
            .map(|p| Product::from_json_str(&read(p)?).map_err(anyhow::Error::from))
            .transpose()?;
        logomock::cart_hover_url(cfg, &line, live.as_ref(), &logos, &opts)
    } else {
        logomock::cart_thumbnail_url(cfg, &line, &logos, &opts)
    };
    println!("{url}");
    Ok(())
}

fn cmd_parse(args: ParseArgs) -> anyhow::Result<()> {
    let ident = logomock::parse_asset_url(&args.url);
    println!("{}", serde_json::to_string_pretty(&ident)?);
    Ok(())
}

fn compile_job(cfg: &CdnConfig, job: &BatchJob) -> String {
    if job.overlay {
        let opts = OverlayImageOpts {
            max_width: job.max_width,
            color_index: job.color_index,
            ..OverlayImageOpts::default()
        };
        logomock::product_overlay_image_url(cfg, &job.product, &job.logos, &opts)
    } else {
        let opts = ProductImageOpts {
            max_width: job.max_width,
            ..ProductImageOpts::default()
        };
        logomock::product_image_url(cfg, &job.product, &job.logos, &opts)
    }
}

fn cmd_batch(cfg: &CdnConfig, args: BatchArgs) -> anyhow::Result<()> {
    let jobs: Vec<BatchJob> = serde_json::from_str(&read(&args.jobs)?)
        .with_context(|| format!("parse jobs '{}'", args.jobs.display()))?;

    let urls: Vec<String> = if args.parallel {
        let mut builder = rayon::ThreadPoolBuilder::new();
        if let Some(n) = args.threads {
            builder = builder.num_threads(n);
        }
        let pool = builder.build().context("build rayon pool")?;
        pool.install(|| jobs.par_iter().map(|j| compile_job(cfg, j)).collect())
    } else {
        jobs.iter().map(|j| compile_job(cfg, j)).collect()
    };

    tracing::debug!(jobs = urls.len(), parallel = args.parallel, "batch compiled");
    for url in urls {
        println!("{url}");
    }
    Ok(())
}
