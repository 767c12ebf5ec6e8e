use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mdsite::{BlockType, Config, classify_block, segment_blocks};

#[derive(Parser)]
#[command(name = "mdsite", version)]
#[command(about = "Build a static HTML site from Markdown files")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Copy static files and render every Markdown page
    Build(BuildArgs),
    /// Render one Markdown file to an HTML fragment
    Render {
        /// Input Markdown file
        input: PathBuf,

        /// Output HTML file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the type of every block in a Markdown file
    Inspect {
        /// Input Markdown file
        input: PathBuf,

        /// Only show blocks of this type (e.g. `heading`, `ordered_list`)
        #[arg(long)]
        only: Option<String>,
    },
}

#[derive(Args)]
struct BuildArgs {
    /// Config file
    #[arg(short, long, default_value = "mdsite.toml")]
    config: PathBuf,

    /// Directory of Markdown sources
    #[arg(long)]
    content: Option<PathBuf>,

    /// Directory of static assets
    #[arg(long = "static")]
    static_dir: Option<PathBuf>,

    /// Output directory
    #[arg(long)]
    public: Option<PathBuf>,

    /// Page template
    #[arg(long)]
    template: Option<PathBuf>,
}

impl BuildArgs {
    fn into_config(self) -> Config {
        let mut config = Config::load(&self.config);
        let site = &mut config.site;
        if let Some(content) = self.content {
            site.content = content;
        }
        if let Some(static_dir) = self.static_dir {
            site.static_dir = static_dir;
        }
        if let Some(public) = self.public {
            site.public = public;
        }
        if let Some(template) = self.template {
            site.template = template;
        }
        config
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Build(args) => build(args),
        Command::Render { input, output } => render(&input, output.as_deref()),
        Command::Inspect { input, only } => inspect(&input, only.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn build(args: BuildArgs) -> Result<(), String> {
    let config = args.into_config();
    let pages = mdsite::site::build_site(&config).map_err(|e| e.to_string())?;
    println!("Generated {} pages in {}", pages, config.site.public.display());
    Ok(())
}

fn render(input: &Path, output: Option<&Path>) -> Result<(), String> {
    let markdown = read_input(input)?;
    let html = mdsite::render_markdown_to_html(&markdown).map_err(|e| e.to_string())?;

    match output {
        Some(output) => {
            fs::write(output, html)
                .map_err(|e| format!("writing {}: {}", output.display(), e))?;
            println!("Created {}", output.display());
        }
        None => println!("{html}"),
    }
    Ok(())
}

fn inspect(input: &Path, only: Option<&str>) -> Result<(), String> {
    let filter = only
        .map(str::parse::<BlockType>)
        .transpose()
        .map_err(|e| e.to_string())?;
    let markdown = read_input(input)?;

    for (i, block) in segment_blocks(&markdown).into_iter().enumerate() {
        let block_type = classify_block(block);
        if filter.is_some_and(|wanted| !wanted.same_kind(block_type)) {
            continue;
        }
        let first_line = block.split('\n').next().unwrap_or_default();
        let label = block_type.to_string();
        println!("{i:>4}  {label:<16} {first_line}");
    }
    Ok(())
}

fn read_input(input: &Path) -> Result<String, String> {
    fs::read_to_string(input).map_err(|e| format!("reading {}: {}", input.display(), e))
}
