use bindscope_core::diagnostics::{CollectingSink, DiagnosticKind};
use bindscope_core::{BuilderConfig, ElementKind, Hierarchy, HierarchyBuilder};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tabled::{Table, Tabled, settings::Style};
use tracing::info;

pub struct BuildArgs {
    pub input: PathBuf,
    /// `Some(None)` dumps next to the input.
    pub dump: Option<Option<PathBuf>>,
    pub config: Option<PathBuf>,
    pub strict: bool,
}

#[derive(Tabled)]
struct KindRow {
    #[tabled(rename = "Kind")]
    kind: &'static str,
    #[tabled(rename = "Count")]
    count: usize,
}

pub fn run(args: BuildArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => BuilderConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => BuilderConfig::default(),
    };
    if args.strict {
        config = config.strict();
    }

    info!("Reading API description from {}...", args.input.display());
    let forest = bindscope_api::forest_from_json(&std::fs::read_to_string(&args.input)?)?;

    let sink = Arc::new(CollectingSink::echoing());
    let hierarchy = HierarchyBuilder::new(config)
        .with_sink(sink.clone())
        .build(&forest)?;

    println!("{}", Table::new(summarize(&hierarchy)).with(Style::rounded()));
    let warnings = sink.diagnostics().len();
    if warnings > 0 {
        println!(
            "{} warnings ({} unsupported elements, {} duplicate index entries, \
             {} repeated re-parentings)",
            warnings,
            sink.count_of(DiagnosticKind::UnsupportedElementKind),
            sink.count_of(DiagnosticKind::DuplicateIndexEntry),
            sink.count_of(DiagnosticKind::AlreadyReparented)
        );
    }

    if let Some(dump) = args.dump {
        let path = dump.unwrap_or_else(|| default_dump_path(&args.input));
        hierarchy.dump_to_file(&path)?;
        println!("Hierarchy dump written to {}", path.display());
    }
    Ok(())
}

/// `<input>.hierarchy`, next to the input file.
pub fn default_dump_path(input: &Path) -> PathBuf {
    let mut path = input.as_os_str().to_owned();
    path.push(".hierarchy");
    PathBuf::from(path)
}

fn summarize(hierarchy: &Hierarchy) -> Vec<KindRow> {
    ElementKind::ALL
        .iter()
        .map(|kind| KindRow {
            kind: kind.label(),
            count: hierarchy.count(*kind),
        })
        .filter(|row| row.count > 0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const API: &str = r#"[
        {
            "kind": "namespace",
            "name": "android.os",
            "children": [
                { "kind": "class", "name": "Process", "extends": "java.lang.Object" },
                { "kind": "interface", "name": "Process.OnUidImportanceListener" }
            ]
        }
    ]"#;

    #[test]
    fn test_default_dump_path() {
        assert_eq!(
            default_dump_path(Path::new("/tmp/api.json")),
            PathBuf::from("/tmp/api.json.hierarchy")
        );
    }

    #[test]
    fn test_build_writes_default_dump() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("api.json");
        std::fs::write(&input, API).unwrap();

        run(BuildArgs {
            input: input.clone(),
            dump: Some(None),
            config: None,
            strict: false,
        })
        .unwrap();

        let dump = std::fs::read_to_string(default_dump_path(&input)).unwrap();
        assert!(dump.starts_with(
            "Namespace: [native: android.os (android.os)] [managed: Android.OS (Android.OS)]"
        ));
        assert!(dump.contains("\t\tClass (invoker): [native: OnUidImportanceListenerInvoker"));
    }

    #[test]
    fn test_build_reads_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("api.json");
        let config = dir.path().join("config.json");
        let dump = dir.path().join("out.txt");
        std::fs::write(&input, API).unwrap();
        std::fs::write(&config, r#"{ "upper_case_two_letter_segments": false }"#).unwrap();

        run(BuildArgs {
            input,
            dump: Some(Some(dump.clone())),
            config: Some(config),
            strict: true,
        })
        .unwrap();

        let dump = std::fs::read_to_string(dump).unwrap();
        assert!(dump.contains("[managed: Android.Os (Android.Os)]"));
    }

    #[test]
    fn test_missing_input_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(BuildArgs {
            input: dir.path().join("missing.json"),
            dump: None,
            config: None,
            strict: false,
        });
        assert!(result.is_err());
    }
}
