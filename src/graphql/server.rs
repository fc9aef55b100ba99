use std::net::SocketAddr;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::State,
    handler::Handler,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse},
    routing::get,
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::config::ServerSettings;

use super::schema::DiscographSchema;

#[derive(Clone)]
struct ServerState {
    schema: DiscographSchema,
    dev: bool,
}

/// Run the HTTP server until the process is stopped.
///
/// Routes: `POST /graphql` executes documents, `GET /graphql` serves the
/// GraphiQL playground, everything else falls through to the static file
/// directory and then to the HTML 404 page.
pub async fn run_server(schema: DiscographSchema, settings: ServerSettings) -> anyhow::Result<()> {
    let state = ServerState {
        schema,
        dev: settings.dev,
    };

    let static_files = ServeDir::new(&settings.static_dir)
        .not_found_service(handle_404.with_state(state.clone()));

    let app = Router::new()
        .route("/graphql", get(graphiql).post(graphql_handler))
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", settings.host, settings.port).parse()?;
    tracing::info!("GraphQL endpoint at http://{}/graphql", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn graphql_handler(
    State(state): State<ServerState>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    state.schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

async fn handle_404(State(state): State<ServerState>, uri: Uri) -> impl IntoResponse {
    tracing::debug!("404 for {}", uri);
    (
        StatusCode::NOT_FOUND,
        Html(render_error_page("Not Found", state.dev.then(|| uri.to_string()))),
    )
}

/// Minimal HTML error view. The detail line appears only in dev mode.
fn render_error_page(message: &str, detail: Option<String>) -> String {
    let detail = detail
        .map(|d| format!("<pre>{}</pre>", d))
        .unwrap_or_default();
    format!(
        "<!DOCTYPE html>\n<html>\n<head><title>Error</title></head>\n\
         <body>\n<h1>{}</h1>\n{}\n</body>\n</html>\n",
        message, detail
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_page_hides_detail_outside_dev() {
        let page = render_error_page("Not Found", None);
        assert!(page.contains("<h1>Not Found</h1>"));
        assert!(!page.contains("<pre>"));
    }

    #[test]
    fn error_page_shows_detail_in_dev() {
        let page = render_error_page("Not Found", Some("/missing".to_string()));
        assert!(page.contains("<pre>/missing</pre>"));
    }
}
