use std::path::Path;

use super::*;
use clap::Parser;

#[test]
fn list_defaults_match_initial_view() {
    let cli = Cli::try_parse_from(["wizardwebb", "list"]).expect("parse");
    match cli.command {
        Commands::List(args) => {
            assert_eq!(args.query, "");
            assert_eq!(args.category, "All");
            assert!(!args.hide_unlinked);
            assert!(!args.json);
        }
        _ => panic!("expected list command"),
    }
}

#[test]
fn list_parses_filters() {
    let cli = Cli::try_parse_from([
        "wizardwebb",
        "list",
        "--query",
        "osint",
        "--category",
        "Security & Privacy",
        "--hide-unlinked",
        "--json",
    ])
    .expect("parse");
    match cli.command {
        Commands::List(args) => {
            assert_eq!(args.query, "osint");
            assert_eq!(args.category, "Security & Privacy");
            assert!(args.hide_unlinked);
            assert!(args.json);
        }
        _ => panic!("expected list command"),
    }
}

#[test]
fn links_flag_is_global() {
    let cli = Cli::try_parse_from(["wizardwebb", "check", "--links", "/srv/links.yml"])
        .expect("parse");
    assert_eq!(cli.links.as_deref(), Some(Path::new("/srv/links.yml")));
    assert!(matches!(cli.command, Commands::Check));
}

#[test]
fn serve_overrides_are_optional() {
    let cli = Cli::try_parse_from(["wizardwebb", "serve", "--port", "9000"]).expect("parse");
    match cli.command {
        Commands::Serve(args) => {
            assert_eq!(args.port, Some(9000));
            assert_eq!(args.host, None);
        }
        _ => panic!("expected serve command"),
    }
}

#[test]
fn serve_rejects_out_of_range_port() {
    let parsed = Cli::try_parse_from(["wizardwebb", "serve", "--port", "70000"]);
    assert!(parsed.is_err());
}
