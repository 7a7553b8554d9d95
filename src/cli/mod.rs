// ============================================================
// Layer 1 - CLI / Presentation Layer
// ============================================================
// The only layer that prints. It loads the catalog once, hands
// it to the use cases, and renders their answers either as
// aligned text or as JSON (--json).
//
// If the tag document cannot be loaded, the command stops with
// a diagnostic instead of carrying on with an empty taxonomy.
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::{bail, Result};
use clap::Parser;
use serde::Serialize;

use crate::application::{
    browse_use_case::BrowseUseCase,
    catalog::Catalog,
    export_use_case::ExportUseCase,
};
use crate::domain::selection::{BrowseView, Dropdown};
use crate::domain::tag::NamedValue;
use commands::{Commands, LabelArgs, SourceArgs};

#[derive(Parser, Debug)]
#[command(
    name = "topin-tags",
    version,
    about = "Browse the section → topic → sub-topic question tag taxonomy."
)]
pub struct Cli {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let Cli { source, json, command } = self;

        let config = source.resolve()?;
        let source = config.source();
        tracing::debug!("Loading tag document from {}", source.describe());
        let Some(catalog) = Catalog::open(&*source)? else {
            bail!("No tag data available (see the error above); nothing to show.");
        };

        match command {
            Commands::Sections => emit(json, &catalog.sections(), |s| s.join("\n")),
            Commands::Topics(args) => {
                emit(json, &catalog.topics(&args.section), |t| render_named(t))
            }
            Commands::SubTopics(args) => emit(
                json,
                &catalog.sub_topics(&args.section, &args.topic),
                |t| render_named(t),
            ),
            Commands::Label(args) => run_label(&catalog, args, json),
            Commands::Browse(args) => {
                let view = BrowseUseCase::new(&catalog).browse(&args.into());
                emit(json, &view, render_view)
            }
            Commands::Tree => emit(json, catalog.index(), |index| {
                let mut out = Vec::new();
                for (section, topics) in index.iter() {
                    out.push(section.clone());
                    for (topic, subs) in topics {
                        out.push(format!("  {topic}"));
                        out.extend(subs.iter().map(|s| format!("    {s}")));
                    }
                }
                out.join("\n")
            }),
            Commands::Export(args) => {
                let written = ExportUseCase::new(&args.out).execute(&catalog)?;
                println!("Wrote {written} rows to {}", args.out.display());
                Ok(())
            }
        }
    }
}

fn run_label(catalog: &Catalog, args: LabelArgs, json: bool) -> Result<()> {
    let label = match &args.sub_topic {
        Some(sub) => catalog.sub_topic_label(&args.section, &args.topic, sub),
        None      => catalog.topic_label(&args.section, &args.topic),
    };

    let Some(label) = label else {
        let path = match &args.sub_topic {
            Some(sub) => format!("{} / {} / {sub}", args.section, args.topic),
            None      => format!("{} / {}", args.section, args.topic),
        };
        bail!("No label found for {path}");
    };
    emit(json, &label, |l| l.clone())
}

/// Print `value` as pretty JSON or through the text renderer.
fn emit<T: Serialize + ?Sized>(json: bool, value: &T, text: impl Fn(&T) -> String) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        let rendered = text(value);
        if !rendered.is_empty() {
            println!("{rendered}");
        }
    }
    Ok(())
}

fn render_named(items: &[NamedValue]) -> String {
    let width = items.iter().map(|i| i.value.chars().count()).max().unwrap_or(0);
    items
        .iter()
        .map(|i| format!("{:<width$}  {}", i.value, i.display()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_view(view: &BrowseView) -> String {
    [
        ("Section", &view.section),
        ("Topic", &view.topic),
        ("Sub-Topic", &view.sub_topic),
    ]
    .iter()
    .map(|(name, dropdown)| render_dropdown(name, dropdown))
    .collect::<Vec<_>>()
    .join("\n")
}

fn render_dropdown(name: &str, dropdown: &Dropdown) -> String {
    match &dropdown.chosen {
        Some(c) => format!(
            "{name:<10} {} ({}) [{} options]",
            c.display(),
            c.value,
            dropdown.options.len()
        ),
        None => format!("{name:<10} - [no options]"),
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_named_aligns_values() {
        let items = vec![
            NamedValue::new("a", Some("Alpha".into())),
            NamedValue::new("bbb", None),
        ];
        assert_eq!(render_named(&items), "a    Alpha\nbbb  bbb");
    }

    #[test]
    fn test_render_named_aligns_non_ascii() {
        let items = vec![
            NamedValue::new("é", Some("E acute".into())),
            NamedValue::new("ab", Some("Ab".into())),
        ];
        assert_eq!(render_named(&items), "é   E acute\nab  Ab");
    }

    #[test]
    fn test_render_dropdown() {
        let chosen = Dropdown {
            options: vec!["t1".into(), "t2".into()],
            chosen: Some(NamedValue::new("t2", Some("Topic Two".into()))),
        };
        assert_eq!(render_dropdown("Topic", &chosen), "Topic      Topic Two (t2) [2 options]");
        assert_eq!(render_dropdown("Topic", &Dropdown::default()), "Topic      - [no options]");
    }

    fn bundled_file() -> String {
        format!("{}/data/question_tags.json", env!("CARGO_MANIFEST_DIR"))
    }

    #[test]
    fn test_absent_source_fails() {
        // Bind then drop so nothing is listening on the port
        let port = std::net::TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();
        let url = format!("http://127.0.0.1:{port}/");
        let cli = Cli::try_parse_from(["topin-tags", "sections", "--url", url.as_str()]).unwrap();

        let err = cli.run().unwrap_err();
        assert!(err.to_string().contains("No tag data available"));
    }

    #[test]
    fn test_label_miss_fails() {
        let file = bundled_file();
        let cli = Cli::try_parse_from([
            "topin-tags", "label", "--section", "PYTHON", "--topic", "NOPE", "--source", "local", "--file", file.as_str(),
        ])
        .unwrap();

        let err = cli.run().unwrap_err();
        assert_eq!(err.to_string(), "No label found for PYTHON / NOPE");
    }

    #[test]
    fn test_label_hit_succeeds() {
        let file = bundled_file();
        let cli = Cli::try_parse_from([
            "topin-tags", "label", "--section", "PYTHON", "--topic", "LOOPS", "--sub-topic", "FOR_LOOP",
            "--source", "local", "--file", file.as_str(),
        ])
        .unwrap();
        assert!(cli.run().is_ok());
    }

    #[test]
    fn test_cli_parses_global_source_flags() {
        let cli = Cli::try_parse_from([
            "topin-tags", "topics", "--section", "S1", "--source", "local", "--file", "t.json", "--json",
        ])
        .unwrap();
        assert!(cli.json);
        assert_eq!(cli.source.source, Some(commands::SourceArg::Local));
        assert!(matches!(cli.command, Commands::Topics(ref a) if a.section == "S1"));
    }
}
