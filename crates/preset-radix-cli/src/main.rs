//! radix-css - generate Radix color CSS from class names.
//!
//! ```text
//! radix-css generate --config radix.yaml --input index.html
//! radix-css generate bg-blue-6 text-slate-a11
//! radix-css theme --config radix.yaml
//! radix-css scales
//! ```
//!
//! Logging goes to stderr through `env_logger`: `RUST_LOG=debug` or
//! `--verbose` shows which classes matched and which palette entries were
//! dropped.

mod generator;

use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::LevelFilter;
use preset_radix::colors::{radix, ColorSource, ColorTable, OVERLAY_SCALES};
use preset_radix::{PresetOptions, RadixPreset};

use crate::generator::Generator;

/// Generate CSS custom properties for Radix colors used in your markup.
#[derive(Parser)]
#[command(name = "radix-css")]
#[command(version, about)]
struct Cli {
    /// Log debug output (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the CSS for classes found in files, arguments or stdin
    Generate {
        #[command(flatten)]
        preset: PresetArgs,

        /// File to scan for classes (repeatable)
        #[arg(short, long = "input", value_name = "FILE")]
        inputs: Vec<PathBuf>,

        /// Class names to generate
        classes: Vec<String>,
    },
    /// Print the generated theme colors as JSON
    Theme {
        #[command(flatten)]
        preset: PresetArgs,
    },
    /// List the base scales and overlays of the color source
    Scales {
        /// Color table in JSON (defaults to the bundled Radix table)
        #[arg(short, long, value_name = "FILE")]
        source: Option<PathBuf>,
    },
}

#[derive(Args)]
struct PresetArgs {
    /// Preset options in YAML or JSON
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Color table in JSON (defaults to the bundled Radix table)
    #[arg(short, long, value_name = "FILE")]
    source: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Generate {
            preset,
            inputs,
            classes,
        } => {
            let texts = read_inputs(&inputs, &classes)?;
            let mut generator = Generator::new().preset(load_preset(&preset)?);
            let css = generator.generate(texts.iter().map(String::as_str));
            if !css.is_empty() {
                println!("{}", css);
            }
        }
        Command::Theme { preset } => {
            let generator = Generator::new().preset(load_preset(&preset)?);
            println!("{}", serde_json::to_string_pretty(generator.theme())?);
        }
        Command::Scales { source } => {
            for line in scale_listing(&*load_source(source.as_deref())?) {
                println!("{}", line);
            }
        }
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}

fn load_source(path: Option<&Path>) -> Result<Arc<dyn ColorSource + Send + Sync>> {
    let source: Arc<dyn ColorSource + Send + Sync> = match path {
        Some(path) => Arc::new(
            ColorTable::from_file(path)
                .with_context(|| format!("loading color source {}", path.display()))?,
        ),
        None => radix(),
    };
    Ok(source)
}

fn load_preset(args: &PresetArgs) -> Result<RadixPreset> {
    let options = match &args.config {
        Some(path) => PresetOptions::from_file(path)
            .with_context(|| format!("loading preset options {}", path.display()))?,
        None => PresetOptions::new(),
    };
    let source = load_source(args.source.as_deref())?;
    RadixPreset::with_source(&options, source).context("building the radix preset")
}

/// Reads every input file; falls back to stdin when neither files nor
/// classes are given.
fn read_inputs(inputs: &[PathBuf], classes: &[String]) -> Result<Vec<String>> {
    let mut texts = Vec::with_capacity(inputs.len() + 1);
    for path in inputs {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading input {}", path.display()))?;
        texts.push(text);
    }
    if !classes.is_empty() {
        texts.push(classes.join(" "));
    }
    if texts.is_empty() {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("reading stdin")?;
        texts.push(text);
    }
    Ok(texts)
}

fn scale_listing(source: &dyn ColorSource) -> Vec<String> {
    let mut lines: Vec<String> = source
        .base_scale_names()
        .into_iter()
        .map(str::to_string)
        .collect();
    lines.extend(
        OVERLAY_SCALES
            .iter()
            .filter(|scale| source.has_scale(scale))
            .map(|scale| format!("{} (overlay)", scale)),
    );
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_generate_args() {
        let cli = Cli::try_parse_from([
            "radix-css", "generate", "-c", "radix.yaml", "-i", "a.html", "-i", "b.html", "bg-blue-6",
        ])
        .unwrap();
        let Command::Generate { preset, inputs, classes } = cli.command else {
            panic!("Expected generate command");
        };
        assert_eq!(preset.config, Some(PathBuf::from("radix.yaml")));
        assert_eq!(inputs.len(), 2);
        assert_eq!(classes, ["bg-blue-6"]);
    }

    #[test]
    fn test_load_preset_reports_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("radix.yaml");
        std::fs::write(&path, "palette: {brand: blue}\nunknown: 1").unwrap();

        let args = PresetArgs {
            config: Some(path),
            source: None,
        };
        let err = load_preset(&args).unwrap_err();
        assert!(format!("{:#}", err).contains("unknown"));
        assert!(err.to_string().contains("loading preset options"));
    }

    #[test]
    fn test_load_custom_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("colors.json");
        std::fs::write(
            &path,
            r##"{ "sand": { "sand1": "#fdfdfc" }, "blackA": { "blackA1": "#0000000d" } }"##,
        )
        .unwrap();

        let source = load_source(Some(path.as_path())).unwrap();
        assert_eq!(scale_listing(&*source), ["sand", "blackA (overlay)"]);
    }

    #[test]
    fn test_read_inputs_from_files_and_classes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.html");
        std::fs::write(&path, "<b class=\"bg-blue-1\">").unwrap();

        let texts = read_inputs(&[path], &["text-blue-2".to_string()]).unwrap();
        assert_eq!(texts, ["<b class=\"bg-blue-1\">", "text-blue-2"]);
    }

    #[test]
    fn test_bundled_scale_listing() {
        let lines = scale_listing(&*radix());
        assert!(lines.contains(&"blue".to_string()));
        assert!(lines.contains(&"whiteA (overlay)".to_string()));
        assert!(!lines.iter().any(|line| line.contains("Dark")));
    }
}
