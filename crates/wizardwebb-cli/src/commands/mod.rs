use std::path::Path;

use anyhow::{Context, Result};

use wizardwebb_core::{AppConfig, Catalog, ViewState};

use crate::cli::{Commands, ListArgs, ServeArgs};

mod support;
mod web;


use self::support::{print_json, render_list_text, summarize_catalog};

pub(crate) fn run(links: Option<&Path>, command: Commands) -> Result<()> {
    let mut config = AppConfig::from_env();
    if let Some(path) = links {
        config.links_file = path.to_path_buf();
    }

    match command {
        Commands::Serve(args) => {
            apply_serve_overrides(&mut config, args);
            let catalog = load_catalog(&config)?;
            web::serve(&config, catalog)
        }
        Commands::List(args) => {
            let catalog = load_catalog(&config)?;
            let view = list_view_state(&args);
            let outcome = catalog.filter(&view);
            if args.json {
                print_json(&outcome.links)
            } else {
                print!("{}", render_list_text(&outcome));
                Ok(())
            }
        }
        Commands::Categories => {
            let catalog = load_catalog(&config)?;
            for label in catalog.chip_labels() {
                println!("{label}");
            }
            Ok(())
        }
        Commands::Check => {
            let catalog = load_catalog(&config)?;
            print_json(&summarize_catalog(&catalog))
        }
    }
}

fn load_catalog(config: &AppConfig) -> Result<Catalog> {
    Catalog::load(&config.links_file).with_context(|| {
        format!(
            "failed to load link catalog from {}",
            config.links_file.display()
        )
    })
}

fn apply_serve_overrides(config: &mut AppConfig, args: ServeArgs) {
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
}

fn list_view_state(args: &ListArgs) -> ViewState {
    ViewState {
        query: args.query.clone(),
        category: args.category.clone(),
        show_unlinked: !args.hide_unlinked,
    }
}
