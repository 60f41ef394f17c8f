use axum::{
    Json,
    extract::{Query, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{Html, IntoResponse, Response},
};

use wizardwebb_core::render::render_grid;
use wizardwebb_core::{Catalog, ViewState};

use crate::WebState;
use crate::dto::{
    CategoriesResponse, HealthResponse, LinksResponse, PageQuery, ViewRequest, ViewResponse,
};
use crate::error::wizard_error_response;
use crate::html::{INDEX_CSS, INDEX_JS, render_about_page, render_index_page};

pub async fn index(State(state): State<WebState>, Query(query): Query<PageQuery>) -> Response {
    let view = match ViewState::from_params(query.q, query.category, query.show_unlinked.as_deref())
    {
        Ok(view) => view,
        Err(err) => return wizard_error_response(err, "page.index"),
    };
    Html(render_index_page(&state.app_name, &state.catalog, &view)).into_response()
}

pub async fn about(State(state): State<WebState>) -> Html<String> {
    Html(render_about_page(&state.app_name))
}

pub async fn index_css() -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        INDEX_CSS,
    )
        .into_response()
}

pub async fn index_js() -> Response {
    (
        StatusCode::OK,
        [(
            header::CONTENT_TYPE,
            "application/javascript; charset=utf-8",
        )],
        INDEX_JS,
    )
        .into_response()
}

pub async fn list_links(State(state): State<WebState>, headers: HeaderMap) -> Response {
    let etag = format!("\"{}\"", state.catalog.etag());
    let Ok(etag_value) = HeaderValue::from_str(&etag) else {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    };
    if if_none_match(&headers, &etag) {
        return (StatusCode::NOT_MODIFIED, [(header::ETAG, etag_value)]).into_response();
    }

    let body = LinksResponse {
        app: &state.app_name,
        count: state.catalog.len(),
        links: state.catalog.links(),
    };
    (StatusCode::OK, [(header::ETAG, etag_value)], Json(body)).into_response()
}

pub async fn list_categories(State(state): State<WebState>) -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        categories: state.catalog.chip_labels(),
    })
}

pub async fn apply_view(
    State(state): State<WebState>,
    Json(request): Json<ViewRequest>,
) -> Json<ViewResponse> {
    let next = match request.event {
        Some(event) => {
            tracing::debug!(?event, "applying view event");
            request.state.apply(event)
        }
        None => request.state,
    };
    Json(view_response(&state.catalog, next))
}

pub async fn healthz(State(state): State<WebState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        count: state.catalog.len(),
        loaded_at: state.catalog.loaded_at().to_rfc3339(),
    })
}

pub(crate) fn view_response(catalog: &Catalog, view: ViewState) -> ViewResponse {
    let outcome = catalog.filter(&view);
    let chips = view.chips(&catalog.chip_labels());
    ViewResponse {
        href: view.to_href(),
        shown: outcome.shown(),
        total: outcome.total,
        count_label: outcome.count_label(),
        toggle_label: view.toggle_label(),
        grid_html: render_grid(&outcome),
        chips,
        state: view,
    }
}

fn if_none_match(headers: &HeaderMap, etag: &str) -> bool {
    headers
        .get(header::IF_NONE_MATCH)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|raw| {
            raw.split(',')
                .map(str::trim)
                .any(|candidate| candidate == etag || candidate == "*")
        })
}
