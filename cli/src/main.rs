//! divrep CLI - dividend analysis report tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use divrep::{
    render, sectionize_file, strip_citations, CitationStripper, JsonFormat, ReportBuilder,
    SectionList,
};

#[derive(Parser)]
#[command(name = "divrep")]
#[command(version)]
#[command(about = "Build dividend analysis reports in Markdown, text, and JSON", long_about = None)]
struct Cli {
    /// Input analysis file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output directory
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the full report in all formats (Markdown, text, JSON)
    Report {
        /// Input analysis file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Extra keyword marking matching panels as expanded
        #[arg(long, value_name = "KEYWORD")]
        expand: Vec<String>,

        /// Render blank panels instead of suppressing them
        #[arg(long)]
        keep_empty: bool,
    },

    /// Render the report as Markdown
    #[command(alias = "md")]
    Markdown {
        /// Input analysis file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Skip the report title block
        #[arg(long)]
        no_header: bool,

        /// Extra keyword marking matching panels as expanded
        #[arg(long, value_name = "KEYWORD")]
        expand: Vec<String>,
    },

    /// Render the report as plain text
    Text {
        /// Input analysis file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Render the report as JSON
    Json {
        /// Input analysis file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// List the sections detected in the analysis document
    Sections {
        /// Input analysis file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Strip citation annotations from the analysis document
    Strip {
        /// Input analysis file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show analysis document information
    Info {
        /// Input analysis file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Report {
            input,
            output,
            expand,
            keep_empty,
        }) => cmd_report(&input, output.as_deref(), &expand, keep_empty),
        Some(Commands::Markdown {
            input,
            output,
            no_header,
            expand,
        }) => cmd_markdown(&input, output.as_deref(), no_header, &expand),
        Some(Commands::Text { input, output }) => cmd_text(&input, output.as_deref()),
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => cmd_json(&input, output.as_deref(), compact),
        Some(Commands::Sections { input }) => cmd_sections(&input),
        Some(Commands::Strip { input, output }) => cmd_strip(&input, output.as_deref()),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: build the full report if input is provided
            if let Some(input) = cli.input {
                cmd_report(&input, cli.output.as_deref(), &[], false)
            } else {
                println!("{}", "Usage: divrep <FILE> [OUTPUT]".yellow());
                println!("       divrep --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn build_report_builder(expand: &[String], keep_empty: bool) -> ReportBuilder {
    let mut builder = ReportBuilder::new();
    for keyword in expand {
        builder = builder.with_expand_keyword(keyword.clone());
    }
    if keep_empty {
        builder = builder.keep_empty_panels();
    }
    builder
}

fn cmd_report(
    input: &Path,
    output: Option<&Path>,
    expand: &[String],
    keep_empty: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = output.map(|p| p.to_path_buf()).unwrap_or_else(|| {
        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        PathBuf::from(format!("{}_report", stem))
    });

    fs::create_dir_all(&output_dir)?;

    let pb = ProgressBar::new(4);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    // Build leniently: a missing analysis degrades to a placeholder panel
    pb.set_message("Loading analysis...");
    let builder = build_report_builder(expand, keep_empty);
    let (built, warning) = builder.from_file_lenient(input);
    if let Some(w) = warning {
        pb.suspend(|| eprintln!("{}: {}", "Warning".yellow().bold(), w));
    }
    pb.inc(1);

    pb.set_message("Generating Markdown...");
    let markdown = built.to_markdown()?;
    fs::write(output_dir.join("report.md"), &markdown)?;
    pb.inc(1);

    pb.set_message("Generating text...");
    let text = built.to_text()?;
    fs::write(output_dir.join("report.txt"), &text)?;
    pb.inc(1);

    pb.set_message("Generating JSON...");
    let json = built.to_json(JsonFormat::Pretty)?;
    fs::write(output_dir.join("report.json"), &json)?;
    pb.inc(1);

    pb.finish_with_message("Done!");

    println!("\n{}", "Output files:".green().bold());
    println!("  {} report.md", "├─".dimmed());
    println!("  {} report.txt", "├─".dimmed());
    println!("  {} report.json", "└─".dimmed());

    Ok(())
}

fn cmd_markdown(
    input: &Path,
    output: Option<&Path>,
    no_header: bool,
    expand: &[String],
) -> Result<(), Box<dyn std::error::Error>> {
    let mut builder = build_report_builder(expand, false);
    if no_header {
        builder = builder.without_header();
    }

    let markdown = builder.from_file(input)?.to_markdown()?;
    write_or_print(output, &markdown)
}

fn cmd_text(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let text = ReportBuilder::new().from_file(input)?.to_text()?;
    write_or_print(output, &text)
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = ReportBuilder::new().from_file(input)?.to_json(format)?;
    write_or_print(output, &json)
}

fn cmd_sections(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let sections = sectionize_file(input)?;
    let options = render::RenderOptions::default();

    println!("{}", "Sections".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    for section in &sections {
        let state = if section.is_blank() {
            "suppressed".dimmed()
        } else if options.is_expanded(&section.title) {
            "expanded".green()
        } else {
            "collapsed".normal()
        };
        println!(
            "{:<40} {:>6} chars  [{}]",
            section.title.bold(),
            section.body.chars().count(),
            state
        );
    }

    println!();
    println!(
        "{} sections, {} rendered",
        sections.len(),
        sections.non_blank_count()
    );

    Ok(())
}

fn cmd_strip(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let text = divrep::loader::load_analysis(input)?;
    let stripped = strip_citations(&text);
    write_or_print(output, &stripped)
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let text = divrep::loader::load_analysis(input)?;
    let citations = CitationStripper::new().count(&text);
    let sections: SectionList = divrep::sectionize_str(&text);

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Citations".bold(), citations);
    println!("{}: {}", "Sections".bold(), sections.len());
    println!("{}: {}", "Rendered sections".bold(), sections.non_blank_count());

    let words: usize = text.split_whitespace().count();
    println!("{}: {}", "Words".bold(), words);
    println!("{}: {}", "Characters".bold(), text.len());

    Ok(())
}

fn write_or_print(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "divrep".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Dividend analysis report tool");
    println!();
    println!("License: MIT");
}
