use serde::{Deserialize, Serialize};

use wizardwebb_core::LinkRecord;
use wizardwebb_core::view::{ChipView, ViewEvent, ViewState};

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub q: Option<String>,
    pub category: Option<String>,
    pub show_unlinked: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ViewRequest {
    #[serde(default)]
    pub state: ViewState,
    pub event: Option<ViewEvent>,
}

#[derive(Debug, Serialize)]
pub struct ViewResponse {
    pub state: ViewState,
    pub href: String,
    pub shown: usize,
    pub total: usize,
    pub count_label: String,
    pub toggle_label: &'static str,
    pub grid_html: String,
    pub chips: Vec<ChipView>,
}

#[derive(Debug, Serialize)]
pub struct LinksResponse<'a> {
    pub app: &'a str,
    pub count: usize,
    pub links: &'a [LinkRecord],
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub count: usize,
    pub loaded_at: String,
}
