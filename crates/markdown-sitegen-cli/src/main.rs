use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use markdown_sitegen_config::Config;
use markdown_sitegen_engine::{BuildReport, build_site, extract_title, markdown_to_html};
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(Parser)]
#[command(name = "markdown-sitegen")]
#[command(version, about = "Build a static HTML site from a tree of Markdown files")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Copy static assets and generate every page into the public directory
    Build {
        /// Config file (defaults to ./sitegen.toml)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Markdown content directory
        #[arg(long)]
        content: Option<PathBuf>,

        /// Static asset directory
        #[arg(long = "static")]
        static_dir: Option<PathBuf>,

        /// Output directory, wiped before each build
        #[arg(long)]
        public: Option<PathBuf>,

        /// HTML template file
        #[arg(long)]
        template: Option<PathBuf>,
    },
    /// Print the HTML fragment for one Markdown file
    Render { file: PathBuf },
    /// Print the title of one Markdown file
    Title { file: PathBuf },
    /// Write a config file with default settings
    Init {
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    match Cli::parse().command {
        Command::Build {
            config,
            content,
            static_dir,
            public,
            template,
        } => {
            let mut config = load_config(config)?;
            if let Some(content) = content {
                config.content_dir = content;
            }
            if let Some(static_dir) = static_dir {
                config.static_dir = static_dir;
            }
            if let Some(public) = public {
                config.public_dir = public;
            }
            if let Some(template) = template {
                config.template_path = template;
            }

            let report = build_site(&config)?;
            report_failures(&report)?;
        }
        Command::Render { file } => {
            let markdown = read_markdown(&file)?;
            let html = markdown_to_html(&markdown)
                .with_context(|| format!("Failed to render {}", file.display()))?;
            println!("{html}");
        }
        Command::Title { file } => {
            let markdown = read_markdown(&file)?;
            let title = extract_title(&markdown)
                .with_context(|| format!("Failed to find a title in {}", file.display()))?;
            println!("{title}");
        }
        Command::Init { config } => {
            let config_path = config.unwrap_or_else(Config::config_path);
            if config_path.exists() {
                bail!("Config file {} already exists", config_path.display());
            }
            Config::default().save_to_path(&config_path)?;
            log::info!("Wrote default config to {}", config_path.display());
        }
    }

    Ok(())
}

/// Loads the config file, falling back to defaults when there is none.
fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let config_path = path.unwrap_or_else(Config::config_path);
    log::info!("Config path: {}", config_path.display());

    match Config::load_from_path(&config_path)? {
        Some(config) => Ok(config),
        None => {
            log::info!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}

fn read_markdown(file: &Path) -> Result<String> {
    fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))
}

fn report_failures(report: &BuildReport) -> Result<()> {
    if report.is_success() {
        return Ok(());
    }
    for failure in &report.failed {
        eprintln!("Error: {}: {}", failure.page.source_path(), failure.error);
    }
    bail!(
        "{} of {} page(s) failed to generate",
        report.failed.len(),
        report.failed.len() + report.generated.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn build_flags_parse() {
        let cli = Cli::try_parse_from([
            "markdown-sitegen",
            "build",
            "--static",
            "assets",
            "--public",
            "docs",
        ])
        .unwrap();
        match cli.command {
            Command::Build {
                static_dir,
                public,
                content,
                ..
            } => {
                assert_eq!(static_dir, Some(PathBuf::from("assets")));
                assert_eq!(public, Some(PathBuf::from("docs")));
                assert_eq!(content, None);
            }
            _ => panic!("expected build"),
        }
    }

    #[test]
    fn render_requires_a_file() {
        assert!(Cli::try_parse_from(["markdown-sitegen", "render"]).is_err());
    }
}
