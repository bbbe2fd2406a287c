//! CLI Application logic
//!
//! Contains the command-line interface implementation.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use mathdok_build::{ErrorLogger, LatexRunner};
use mathdok_core::{find_template, instantiate, parse, StyleConfig};

#[derive(Parser)]
#[command(name = "mathdok")]
#[command(author, version, about = "Markup in, math worksheets out", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile problem markup to a LaTeX document
    Render {
        /// Input markup file
        input: PathBuf,

        /// Output .tex file (defaults to input with .tex extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Style configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Compile problem markup and run the LaTeX engine on the result
    Build {
        /// Input markup file
        input: PathBuf,

        /// Directory for the .tex, .pdf and engine byproducts
        #[arg(short, long, default_value = "build")]
        output_dir: PathBuf,

        /// Style configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// LaTeX engine binary
        #[arg(long, default_value = "pdflatex")]
        engine: String,
    },

    /// Work with built-in problem templates
    Template {
        #[command(subcommand)]
        command: TemplateCommands,
    },

    /// Inspect or initialize the style configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum TemplateCommands {
    /// List the built-in templates
    List,

    /// Instantiate a built-in template with slot values
    New {
        /// Template id (see `mathdok template list`)
        id: String,

        /// Slot value as name=value (repeatable)
        #[arg(short, long = "slot")]
        slot: Vec<String>,

        /// Output markup file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Write the default configuration to a TOML file
    Init {
        /// Destination path
        #[arg(default_value = "mathdok.toml")]
        path: PathBuf,
    },

    /// Print the effective configuration
    Show {
        /// Style configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

/// Run the CLI application
///
/// This is the main entry point for the command-line interface.
/// It parses arguments and dispatches to the appropriate command.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            input,
            output,
            config,
        } => {
            render_command(&input, output.as_deref(), config.as_deref())?;
        }
        Commands::Build {
            input,
            output_dir,
            config,
            engine,
        } => {
            build_command(&input, &output_dir, config.as_deref(), &engine)?;
        }
        Commands::Template { command } => match command {
            TemplateCommands::List => template_list_command(),
            TemplateCommands::New { id, slot, output } => {
                template_new_command(&id, &slot, output.as_deref())?;
            }
        },
        Commands::Config { command } => match command {
            ConfigCommands::Init { path } => config_init_command(&path)?,
            ConfigCommands::Show { config } => config_show_command(config.as_deref())?,
        },
    }

    Ok(())
}

/// Execute the render command
pub fn render_command(
    input: &Path,
    output: Option<&Path>,
    config_path: Option<&Path>,
) -> Result<()> {
    println!("mathdok v{}", mathdok_core::VERSION);
    println!("Rendering: {}", input.display());

    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }

    let config = load_config(config_path)?;

    let markup = fs::read_to_string(input)
        .with_context(|| format!("Failed to read input file: {}", input.display()))?;

    let latex = parse(&markup, &config)
        .with_context(|| format!("Failed to compile markup: {}", input.display()))?;

    let output_path = match output {
        Some(p) => p.to_path_buf(),
        None => input.with_extension("tex"),
    };
    fs::write(&output_path, &latex)
        .with_context(|| format!("Failed to write output file: {}", output_path.display()))?;

    println!();
    println!("Render complete!");
    println!("  Output: {}", output_path.display());
    println!("  Size: {} bytes", latex.len());

    Ok(())
}

/// Execute the build command (markup -> .tex -> engine -> pdf)
pub fn build_command(
    input: &Path,
    output_dir: &Path,
    config_path: Option<&Path>,
    engine: &str,
) -> Result<()> {
    println!("mathdok v{}", mathdok_core::VERSION);
    println!("Building: {}", input.display());

    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }

    let config = load_config(config_path)?;

    let markup = fs::read_to_string(input)
        .with_context(|| format!("Failed to read input file: {}", input.display()))?;

    let latex = parse(&markup, &config)
        .with_context(|| format!("Failed to compile markup: {}", input.display()))?;

    fs::create_dir_all(output_dir).with_context(|| {
        format!("Failed to create output directory: {}", output_dir.display())
    })?;

    let stem = input
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| "problem".into());
    let tex_path = output_dir.join(&stem).with_extension("tex");
    fs::write(&tex_path, &latex)
        .with_context(|| format!("Failed to write LaTeX file: {}", tex_path.display()))?;
    println!("  Created: {}", tex_path.display());

    println!("  Running {}...", engine);
    let runner = LatexRunner::new(output_dir).with_engine(engine);
    let outcome = runner
        .compile(&tex_path)
        .with_context(|| format!("Failed to run engine: {}", engine))?;

    if !outcome.success {
        let logger = ErrorLogger::new(".");
        let info = format!(
            "Source: {}\nReturn Code: {}",
            tex_path.display(),
            outcome
                .status
                .map(|c| c.to_string())
                .unwrap_or_else(|| "none".to_string())
        );
        let log_path = logger
            .log("LaTeX", &outcome.log, Some(&info))
            .context("Failed to write error log")?;
        anyhow::bail!(
            "LaTeX compilation failed.\n  Full engine output: {}",
            log_path.display()
        );
    }

    println!();
    println!("Build complete!");
    println!("  Output: {}", outcome.pdf_path.display());

    Ok(())
}

/// Execute the template list command
pub fn template_list_command() {
    println!("mathdok v{}", mathdok_core::VERSION);
    println!();
    for template in mathdok_core::builtin_templates() {
        println!("{}  -  {}", template.id, template.name);
        println!("    {}", template.description);
        for slot in &template.slots {
            let req = if slot.required { "required" } else { "optional" };
            println!("    slot: {} ({})", slot.id, req);
        }
        println!();
    }
}

/// Execute the template new command
pub fn template_new_command(id: &str, slots: &[String], output: Option<&Path>) -> Result<()> {
    let template =
        find_template(id).with_context(|| format!("Unknown template: {}", id))?;

    let mut values = HashMap::new();
    for pair in slots {
        let (name, value) = pair
            .split_once('=')
            .with_context(|| format!("Invalid slot value (expected name=value): {}", pair))?;
        values.insert(name.to_string(), value.to_string());
    }

    let markup = instantiate(template.id, &values)?;

    match output {
        Some(path) => {
            fs::write(path, &markup)
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            println!("Created: {}", path.display());
        }
        None => print!("{}", markup),
    }

    Ok(())
}

/// Execute the config init command
pub fn config_init_command(path: &Path) -> Result<()> {
    let config = StyleConfig::default();
    config
        .try_save(path)
        .with_context(|| format!("Failed to write config: {}", path.display()))?;
    println!("Created: {}", path.display());
    Ok(())
}

/// Execute the config show command
pub fn config_show_command(config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let text =
        toml::to_string_pretty(&config).context("Failed to serialize configuration")?;
    print!("{}", text);
    Ok(())
}

/// Load the style configuration, merging a file over the defaults.
///
/// An explicit `--config` path must exist; without one, `mathdok.toml`
/// in the current directory is merged in when present.
fn load_config(config_path: Option<&Path>) -> Result<StyleConfig> {
    let mut config = StyleConfig::default();
    match config_path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            config
                .try_load(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?;
        }
        None => {
            let candidate = Path::new("mathdok.toml");
            if candidate.exists() {
                config
                    .try_load(candidate)
                    .with_context(|| format!("Failed to load config: {}", candidate.display()))?;
            }
        }
    }
    Ok(config)
}
