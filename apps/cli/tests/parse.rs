//! Tests for CLI argument parsing.

use clap::Parser;
use gcore::{Language, catalog::DatasetId};
use geodash_cli::{Cli, Command};

#[test]
fn cli_parse_analyze_defaults() {
    let cli = Cli::parse_from(["geodash", "analyze", "GT"]);
    match cli.command {
        Command::Analyze(cmd) => {
            assert_eq!(cmd.country, "GT");
            assert_eq!(cmd.dataset, DatasetId::Population);
            assert_eq!(cmd.language, Language::En);
            assert!(cmd.org.is_none());
        }
        _ => panic!("expected Analyze command"),
    }
}

#[test]
fn cli_parse_analyze_options() {
    let cli = Cli::parse_from([
        "geodash",
        "analyze",
        "Colombia",
        "--dataset",
        "biodiversity_index",
        "--language",
        "es",
        "--org",
        "forest_trust",
    ]);
    match cli.command {
        Command::Analyze(cmd) => {
            assert_eq!(cmd.dataset, DatasetId::BiodiversityIndex);
            assert_eq!(cmd.language, Language::Es);
            assert_eq!(cmd.org.as_deref(), Some("forest_trust"));
        }
        _ => panic!("expected Analyze command"),
    }
}

#[test]
fn cli_parse_rejects_unknown_dataset() {
    assert!(Cli::try_parse_from(["geodash", "analyze", "GT", "-d", "rainfall"]).is_err());
}

#[test]
fn cli_parse_search() {
    let cli = Cli::parse_from(["geodash", "search", "¿Qué es la biodiversidad?", "-l", "es"]);
    match cli.command {
        Command::Search(cmd) => {
            assert_eq!(cmd.query, "¿Qué es la biodiversidad?");
            assert_eq!(cmd.language, Language::Es);
        }
        _ => panic!("expected Search command"),
    }
}

#[test]
fn cli_parse_global_flags() {
    let cli = Cli::parse_from([
        "geodash",
        "catalog",
        "--json",
        "--config",
        "geodash.toml",
        "--documents",
        "docs",
        "-vv",
    ]);
    assert_eq!(cli.verbose, 2);
    assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("geodash.toml")));
    assert_eq!(cli.documents.as_deref(), Some(std::path::Path::new("docs")));
    assert!(matches!(cli.command, Command::Catalog(ref c) if c.json));
}

#[test]
fn cli_parse_serve_bind() {
    let cli = Cli::parse_from(["geodash", "serve", "--bind", "127.0.0.1:8080"]);
    match cli.command {
        Command::Serve(cmd) => assert_eq!(cmd.bind_address(), "127.0.0.1:8080"),
        _ => panic!("expected Serve command"),
    }
}

#[test]
fn cli_parse_serve_port() {
    let cli = Cli::parse_from(["geodash", "serve", "--port", "9000"]);
    match cli.command {
        Command::Serve(cmd) => assert_eq!(cmd.bind_address(), "0.0.0.0:9000"),
        _ => panic!("expected Serve command"),
    }
}
