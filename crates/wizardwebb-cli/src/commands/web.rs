use anyhow::Result;

use wizardwebb_core::{AppConfig, Catalog};

pub(super) fn serve(config: &AppConfig, catalog: Catalog) -> Result<()> {
    tracing::info!(
        links_file = %config.links_file.display(),
        bind = %config.bind_addr(),
        "starting web server"
    );
    wizardwebb_web::serve_web(config, catalog)
}
