//! Print an inspection table from a JSON snapshot of records
//!
//! Usage:
//!   inspector <textures|profiles> <records.json> [--sort <column>] [--desc] [--config <table.json>]
//!
//! Without `--sort` the rows keep the order of the snapshot (or the
//! initial sort of the configuration file, if it has one).

use anyhow::{anyhow, bail, Context, Result};
use inspector::{
    load_records, render_table, BuildProfileRecord, TableConfig, TableRecord, TableView,
    TextureRecord,
};
use log::info;
use serde::de::DeserializeOwned;
use std::env;
use std::path::PathBuf;

const USAGE: &str =
    "usage: inspector <textures|profiles> <records.json> [--sort <column>] [--desc] [--config <table.json>]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TableKind {
    Textures,
    Profiles,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Args {
    kind: TableKind,
    records: PathBuf,
    sort: Option<usize>,
    descending: bool,
    config: Option<PathBuf>,
}

impl Args {
    fn parse(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut args = args.into_iter();

        let kind = match args.next().as_deref() {
            Some("textures") => TableKind::Textures,
            Some("profiles") => TableKind::Profiles,
            Some(other) => bail!("unknown table '{}'\n{}", other, USAGE),
            None => bail!(USAGE),
        };
        let records = args
            .next()
            .map(PathBuf::from)
            .ok_or_else(|| anyhow!("missing records file\n{}", USAGE))?;

        let mut parsed = Self {
            kind,
            records,
            sort: None,
            descending: false,
            config: None,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--sort" => {
                    let column = args
                        .next()
                        .ok_or_else(|| anyhow!("--sort needs a column index"))?;
                    parsed.sort = Some(
                        column
                            .parse()
                            .with_context(|| format!("invalid column index '{}'", column))?,
                    );
                }
                "--desc" => parsed.descending = true,
                "--config" => {
                    let path = args
                        .next()
                        .ok_or_else(|| anyhow!("--config needs a file path"))?;
                    parsed.config = Some(PathBuf::from(path));
                }
                other => bail!("unexpected argument '{}'\n{}", other, USAGE),
            }
        }

        Ok(parsed)
    }
}

fn main() {
    env_logger::init();

    if let Err(e) = run(env::args().skip(1)) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(args: impl IntoIterator<Item = String>) -> Result<()> {
    let args = Args::parse(args)?;
    let table = match args.kind {
        TableKind::Textures => build_table::<TextureRecord>(&args)?,
        TableKind::Profiles => build_table::<BuildProfileRecord>(&args)?,
    };
    print!("{}", table);
    Ok(())
}

fn build_table<R>(args: &Args) -> Result<String>
where
    R: TableRecord + DeserializeOwned + Default,
{
    let config = match &args.config {
        Some(path) => TableConfig::load(path)?,
        None => TableConfig::for_record::<R>(),
    };

    let mut header = config.header_state();
    if let Some(column) = args.sort {
        if !header.set_sorting(column, !args.descending) {
            bail!(
                "column {} is out of range, the table has {} columns",
                column,
                header.column_count()
            );
        }
    }

    let records: Vec<R> = load_records(&args.records)?;
    let view = TableView::from_records(records, header).context("Failed to build the table")?;
    info!("Rendering {} rows", view.row_count());

    Ok(render_table(&view))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(raw: &[&str]) -> Result<Args> {
        Args::parse(raw.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_minimal() {
        let parsed = args(&["profiles", "profiles.json"]).unwrap();
        assert_eq!(
            parsed,
            Args {
                kind: TableKind::Profiles,
                records: PathBuf::from("profiles.json"),
                sort: None,
                descending: false,
                config: None,
            }
        );
    }

    #[test]
    fn test_parse_options() {
        let parsed = args(&[
            "textures", "t.json", "--sort", "2", "--desc", "--config", "cfg.json",
        ])
        .unwrap();

        assert_eq!(parsed.kind, TableKind::Textures);
        assert_eq!(parsed.sort, Some(2));
        assert!(parsed.descending);
        assert_eq!(parsed.config, Some(PathBuf::from("cfg.json")));
    }

    #[test]
    fn test_parse_errors() {
        assert!(args(&[]).is_err());
        assert!(args(&["meshes", "m.json"]).is_err());
        assert!(args(&["textures"]).is_err());
        assert!(args(&["textures", "t.json", "--sort"]).is_err());
        assert!(args(&["textures", "t.json", "--sort", "x"]).is_err());
        assert!(args(&["textures", "t.json", "--verbose"]).is_err());
    }

    #[test]
    fn test_build_table_from_snapshot() {
        let dir = tempfile::TempDir::new().unwrap();
        let records = dir.path().join("profiles.json");
        std::fs::write(
            &records,
            r#"[{"name": "Web - Independence", "scenes": ["Assets/Main.unity"]}, {"name": "Poki - Colorizer"}]"#,
        )
        .unwrap();

        let parsed = args(&["profiles", records.to_str().unwrap(), "--sort", "1"]).unwrap();
        let table = build_table::<BuildProfileRecord>(&parsed).unwrap();
        let lines: Vec<_> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Profile Name"));
        assert!(lines[0].contains("Platform ▲"));
        assert!(lines[2].starts_with("Poki - Colorizer"));
        assert!(lines[3].starts_with("Web - Independence"));
    }

    #[test]
    fn test_build_table_rejects_bad_sort_column() {
        let dir = tempfile::TempDir::new().unwrap();
        let records = dir.path().join("textures.json");
        std::fs::write(&records, "[]").unwrap();

        let parsed = args(&["textures", records.to_str().unwrap(), "--sort", "9"]).unwrap();
        let err = build_table::<TextureRecord>(&parsed).unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }
}
