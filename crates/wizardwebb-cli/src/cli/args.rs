use clap::Args;

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Bind address. Defaults to `$WIZARDWEBB_HOST`, then 127.0.0.1.
    #[arg(long)]
    pub host: Option<String>,
    /// Listen port. Defaults to `$PORT`, then 8000.
    #[arg(long)]
    pub port: Option<u16>,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Case-insensitive text matched against name, description, category and tags.
    #[arg(short, long, default_value = "", allow_hyphen_values = true)]
    pub query: String,
    /// Exact category; "All" disables the category filter.
    #[arg(short, long, default_value = "All")]
    pub category: String,
    /// Drop entries without a destination URL.
    #[arg(long, default_value_t = false)]
    pub hide_unlinked: bool,
    /// Print the matching entries as JSON.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}
