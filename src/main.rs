use clap::Parser;
use pagewright::config::{Options, RunConfig};
use pagewright::{output, site};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pagewright")]
#[command(version)]
#[command(about = "Static site generator for plain-text and Markdown files")]
#[command(long_about = "\
Static site generator for plain-text and Markdown files

Every .txt and .md file under the input becomes an HTML page in the output
directory. A directory input also gets an index.html linking every page.

Plain text:
  A first block followed by two blank lines becomes the page title.
  Blank-line separated blocks become paragraphs.

Markdown:
  An optional front matter block sets page metadata:

    ---
    title: A Study in Scarlet
    description: The first Holmes novel
    stylesheet: https://example.com/page.css
    hide_title: false
    ---
    Body text may use {{ title }} and other placeholders.

The output directory is deleted and rebuilt on every run.")]
struct Cli {
    /// Input file or directory
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output directory [default: ./dist]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Stylesheet URL linked from every page
    #[arg(short, long)]
    stylesheet: Option<String>,

    /// JSON config file; its input, output and stylesheet override the flags
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log each stage and written page
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = RunConfig::from_options(Options {
        input: cli.input,
        output: cli.output,
        stylesheet: cli.stylesheet,
        config: cli.config,
    })?;

    let mut builder = site::SiteBuilder::new(config);
    let report = builder.run()?;
    let config = builder.config();
    output::print_build_output(&report, &config.input, &config.output);

    Ok(())
}

/// `--verbose` forces `info`; otherwise `RUST_LOG`, defaulting to `warn`.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
