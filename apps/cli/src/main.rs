use std::{path::PathBuf, process::ExitCode, time::Duration};

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use gallery_core::{CopyOutcome, GalleryController, NotificationService, SystemClipboard};
use serde::Serialize;
use shared::{config::load_settings, NoticeKind, TemplateCatalog};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "initmd", about = "Browse and copy init.md protocol templates")]
struct Args {
    /// TOML catalog to use instead of the built-in templates.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List templates in catalog order.
    List {
        #[arg(long)]
        json: bool,
    },
    /// Print a template's content verbatim.
    Show { id: String },
    /// Copy a template's content to the system clipboard.
    Copy {
        id: String,
        /// Keep the process (and its clipboard ownership) alive this many
        /// seconds after copying. X11/Wayland drop the text when the owner
        /// exits unless a clipboard manager takes it over.
        #[arg(long, default_value_t = DEFAULT_HOLD_SECS)]
        hold_secs: u64,
    },
}

#[cfg(target_os = "linux")]
const DEFAULT_HOLD_SECS: u64 = 15;
#[cfg(not(target_os = "linux"))]
const DEFAULT_HOLD_SECS: u64 = 0;

struct StderrNotifier;

impl NotificationService for StderrNotifier {
    fn notify(&self, kind: NoticeKind, message: &str) {
        match kind {
            NoticeKind::Success => eprintln!("✔ {message}"),
            NoticeKind::Failure => eprintln!("✖ {message}"),
        }
    }
}

#[derive(Debug, Serialize)]
struct TemplateSummary<'a> {
    index: usize,
    id: &'a str,
    title: &'a str,
    features: &'a [String],
}

fn summaries(catalog: &TemplateCatalog) -> Vec<TemplateSummary<'_>> {
    catalog
        .iter()
        .enumerate()
        .map(|(index, record)| TemplateSummary {
            index,
            id: record.id.as_str(),
            title: &record.title,
            features: &record.features,
        })
        .collect()
}

fn render_list(catalog: &TemplateCatalog) -> String {
    if catalog.is_empty() {
        return "no templates in catalog\n".to_string();
    }
    let width = catalog
        .iter()
        .map(|record| record.id.as_str().len())
        .max()
        .unwrap_or(0);
    summaries(catalog)
        .iter()
        .map(|s| format!("{:>2}  {:<width$}  {}\n", s.index, s.id, s.title))
        .collect()
}

fn load_catalog(flag: Option<PathBuf>, configured: Option<PathBuf>) -> Result<TemplateCatalog> {
    match flag.or(configured) {
        Some(path) => TemplateCatalog::load(&path)
            .with_context(|| format!("failed to load catalog '{}'", path.display())),
        None => Ok(TemplateCatalog::builtin()),
    }
}

async fn run(args: Args, configured_catalog: Option<PathBuf>) -> Result<()> {
    let catalog = load_catalog(args.catalog, configured_catalog)?;

    match args.command {
        Command::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&summaries(&catalog))?);
            } else {
                print!("{}", render_list(&catalog));
            }
        }
        Command::Show { id } => {
            let record = catalog
                .by_id(&id)
                .ok_or_else(|| anyhow!("unknown template '{id}'"))?;
            print!("{}", record.content);
            if !record.content.ends_with('\n') {
                println!();
            }
        }
        Command::Copy { id, hold_secs } => {
            let gallery = GalleryController::new(catalog, SystemClipboard::new(), StderrNotifier);
            match gallery.copy(&id).await {
                CopyOutcome::Copied => {
                    if hold_secs > 0 {
                        tracing::info!(hold_secs, "holding clipboard ownership");
                        eprintln!(
                            "keeping the clipboard for {hold_secs}s; paste now or press Ctrl-C"
                        );
                        tokio::time::sleep(Duration::from_secs(hold_secs)).await;
                    }
                }
                CopyOutcome::Failed => return Err(anyhow!("could not copy template '{id}'")),
                CopyOutcome::UnknownTemplate => return Err(anyhow!("unknown template '{id}'")),
            }
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    let settings = match load_settings() {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter)),
        )
        .init();

    match run(args, settings.catalog_path).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn lists_builtin_templates_in_order() {
        let listing = render_list(&TemplateCatalog::builtin());
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with(" 0  minimal"));
        assert!(lines[0].ends_with("Minimal Init Protocol"));
        assert!(lines[2].starts_with(" 2  dry-run"));
    }

    #[test]
    fn empty_catalog_lists_placeholder() {
        assert_eq!(
            render_list(&TemplateCatalog::empty()),
            "no templates in catalog\n"
        );
    }

    #[test]
    fn json_listing_carries_ids_and_features() {
        let catalog = TemplateCatalog::builtin();
        let value = serde_json::to_value(summaries(&catalog)).expect("json");
        assert_eq!(value[1]["id"], "server");
        assert_eq!(value[1]["features"][0], "Production-ready");
    }

    #[test]
    fn catalog_flag_beats_configured_path() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(
            file,
            "[[templates]]\nid = \"flagged\"\ntitle = \"Flagged\"\nsubtitle = \"\"\ndescription = \"\"\ncontent = \"x\""
        )
        .expect("write");

        let missing = PathBuf::from("/no/such/configured.toml");
        let catalog =
            load_catalog(Some(file.path().to_path_buf()), Some(missing.clone())).expect("catalog");
        assert_eq!(catalog.index_of("flagged"), Some(0));

        assert!(load_catalog(None, Some(missing)).is_err());
        assert_eq!(load_catalog(None, None).expect("builtin").len(), 3);
    }

    #[test]
    fn copy_holds_clipboard_by_default_on_linux() {
        let args = Args::parse_from(["initmd", "copy", "minimal"]);
        let Command::Copy { hold_secs, .. } = args.command else {
            panic!("expected copy command");
        };
        assert_eq!(hold_secs, DEFAULT_HOLD_SECS);
        if cfg!(target_os = "linux") {
            assert!(hold_secs > 0);
        }

        let args = Args::parse_from(["initmd", "copy", "minimal", "--hold-secs", "0"]);
        assert!(matches!(args.command, Command::Copy { hold_secs: 0, .. }));
    }

    #[tokio::test]
    async fn show_rejects_unknown_template() {
        let args = Args::parse_from(["initmd", "show", "nope"]);
        let err = run(args, None).await.expect_err("unknown id");
        assert!(err.to_string().contains("unknown template 'nope'"));
    }
}
