use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{self, Command};

use clap::{CommandFactory, Parser, ValueEnum};
use defaults_nix::{convert_str, sanitize_filename, ConvertOptions};

#[derive(Parser, Debug)]
#[command(
    name = "defaults2nix",
    version,
    about = "Convert macOS defaults into Nix attribute sets",
    after_help = "Examples:\n  defaults2nix com.apple.Safari\n  defaults2nix com.apple.Safari --out safari.nix\n  defaults2nix --all --out all-defaults.nix\n  defaults2nix --all --filter dates --out all-defaults.nix\n  defaults2nix --all --filter dates,state,uuids --out all-defaults.nix\n  defaults2nix --split --out ./configs/\n  sudo defaults2nix --all --out all-defaults.nix   # for system configs"
)]
struct Args {
    /// Preference domain to convert (e.g. com.apple.dock).
    #[arg(value_name = "domain", conflicts_with_all = ["all", "split"])]
    domain: Option<String>,

    /// Convert every domain from a single `defaults read`.
    #[arg(long, conflicts_with = "split")]
    all: bool,

    /// Write one Nix file per domain into the output directory.
    #[arg(long)]
    split: bool,

    /// Comma-separated values to filter out of the generated Nix.
    #[arg(long, value_enum, value_delimiter = ',', value_name = "kinds")]
    filter: Vec<FilterKind>,

    /// Output file, or output directory with --split.
    #[arg(short, long, value_name = "path")]
    out: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum FilterKind {
    Dates,
    State,
    Uuids,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    if !args.all && !args.split && args.domain.is_none() {
        Args::command().print_help()?;
        process::exit(1);
    }

    let out = validate_out(&args)?;
    ensure_macos()?;

    let options = convert_options(&args.filter);

    if args.split {
        let out_dir = out.expect("--split requires --out");
        run_split(&out_dir, &options)
    } else {
        // --all reads every domain at once; otherwise a single domain.
        let text = read_defaults(args.domain.as_deref())?;
        let nix = convert_str(&text, &options);
        write_result(out.as_deref(), &nix)
    }
}

fn convert_options(filters: &[FilterKind]) -> ConvertOptions {
    let mut options = ConvertOptions::new();
    for filter in filters {
        options = match filter {
            FilterKind::Dates => options.with_skip_dates(true),
            FilterKind::State => options.with_skip_ui_state(true),
            FilterKind::Uuids => options.with_skip_identifiers(true),
        };
    }
    options
}

/// Enforce the --out rules before touching the system: with --split it is
/// mandatory and must be (or become) a directory; otherwise it must not be
/// an existing directory.
fn validate_out(args: &Args) -> Result<Option<PathBuf>, Box<dyn Error>> {
    if args.split {
        let Some(out) = args.out.as_ref() else {
            return Err("--out is mandatory when --split is used".into());
        };
        match fs::metadata(out) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => {
                return Err(format!(
                    "--out path {} must be a directory when --split is used",
                    out.display()
                )
                .into());
            }
            Err(_) => fs::create_dir_all(out)
                .map_err(|err| format!("creating output directory {}: {err}", out.display()))?,
        }
        return Ok(args.out.clone());
    }

    if let Some(out) = args.out.as_ref() {
        if fs::metadata(out).map(|meta| meta.is_dir()).unwrap_or(false) {
            return Err(format!(
                "--out path {} must be a file when not using --split",
                out.display()
            )
            .into());
        }
    }
    Ok(args.out.clone())
}

fn ensure_macos() -> Result<(), Box<dyn Error>> {
    if cfg!(target_os = "macos") {
        Ok(())
    } else {
        Err(format!(
            "defaults2nix is designed for macOS only (requires the 'defaults' command); current platform: {}",
            std::env::consts::OS
        )
        .into())
    }
}

fn read_defaults(domain: Option<&str>) -> Result<String, Box<dyn Error>> {
    let mut cmd = Command::new("defaults");
    cmd.arg("read");
    if let Some(domain) = domain {
        cmd.arg(domain);
    }
    let output = cmd.output().map_err(|err| format!("running 'defaults read': {err}"))?;
    if !output.status.success() {
        return Err(format!(
            "'defaults read{}' failed: {}",
            domain.map(|d| format!(" {d}")).unwrap_or_default(),
            String::from_utf8_lossy(&output.stderr).trim()
        )
        .into());
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

fn write_result(out: Option<&Path>, nix: &str) -> Result<(), Box<dyn Error>> {
    match out {
        Some(path) => fs::write(path, nix)
            .map_err(|err| format!("writing to {}: {err}", path.display()).into()),
        None => {
            println!("{nix}");
            Ok(())
        }
    }
}

/// Convert every preference domain into its own file. Failures and empty
/// domains are reported, not fatal; the run only fails when nothing could
/// be written at all.
fn run_split(out_dir: &Path, options: &ConvertOptions) -> Result<(), Box<dyn Error>> {
    let output = Command::new("defaults")
        .arg("domains")
        .output()
        .map_err(|err| format!("running 'defaults domains': {err}"))?;
    if !output.status.success() {
        return Err(format!(
            "'defaults domains' failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        )
        .into());
    }

    let domains = String::from_utf8_lossy(&output.stdout).into_owned();
    let mut written = 0usize;
    let mut skipped = Vec::new();
    let mut failed = Vec::new();

    for domain in domains.split(", ") {
        let domain = domain.trim();
        if domain.is_empty() {
            continue;
        }

        let text = match read_defaults(Some(domain)) {
            Ok(text) => text,
            Err(_) => {
                failed.push(domain.to_string());
                continue;
            }
        };

        let nix = convert_str(&text, options);
        if nix.trim().is_empty() || nix.trim() == "{}" {
            skipped.push(domain.to_string());
            continue;
        }

        let path = out_dir.join(format!("{}.nix", sanitize_filename(domain)));
        if let Err(err) = fs::write(&path, &nix) {
            eprintln!("warning: failed to write {}: {err}", path.display());
            continue;
        }
        written += 1;
    }

    if written == 0 {
        if !failed.is_empty() {
            eprintln!("domains with errors: {}", failed.join(", "));
        }
        return Err("no domains could be processed successfully".into());
    }

    if !skipped.is_empty() {
        eprintln!(
            "info: skipped {} empty domains: {}",
            skipped.len(),
            skipped.join(", ")
        );
    }
    if !failed.is_empty() {
        eprintln!(
            "warning: failed to process {} domains: {}",
            failed.len(),
            failed.join(", ")
        );
    }
    eprintln!(
        "successfully processed {written} domains to {}",
        out_dir.display()
    );
    Ok(())
}
