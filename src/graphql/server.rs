use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::State,
    response::{Html, IntoResponse},
    routing::{get, post},
};

use crate::config::ServerSettings;

use super::schema::LibrarySchema;

/// Build the HTTP router: `POST` executes requests, `GET` serves GraphiQL
/// when enabled.
pub fn router(schema: LibrarySchema, settings: &ServerSettings) -> Router {
    let route = if settings.graphiql {
        let endpoint = settings.path.clone();
        get(move || graphiql(endpoint.clone())).post(graphql_handler)
    } else {
        post(graphql_handler)
    };

    Router::new()
        .route(&settings.path, route)
        .with_state(schema)
}

async fn graphiql(endpoint: String) -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(&endpoint).finish())
}

async fn graphql_handler(
    State(schema): State<LibrarySchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let req = req.into_inner();
    tracing::debug!(operation = ?req.operation_name, "Executing GraphQL request");
    schema.execute(req).await.into()
}

pub async fn run_server(schema: LibrarySchema, settings: &ServerSettings) -> std::io::Result<()> {
    let app = router(schema, settings);
    let listener = tokio::net::TcpListener::bind(settings.bind_address()).await?;
    let address = listener.local_addr()?;

    tracing::info!(%address, path = %settings.path, "Server is running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphql::build_schema;
    use crate::storage::InMemoryRepository;

    async fn spawn(settings: ServerSettings) -> String {
        let schema = build_schema(InMemoryRepository::seeded());
        let app = router(schema, &settings);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        address.to_string()
    }

    async fn raw_request(address: &str, request: String) -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let mut stream = tokio::net::TcpStream::connect(address).await.unwrap();
        stream.write_all(request.as_bytes()).await.unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();
        response
    }

    #[tokio::test]
    async fn test_post_executes_query() {
        let address = spawn(ServerSettings::default()).await;
        let body = r#"{"query":"{ book(id: 5) { name author { name } } }"}"#;
        let request = format!(
            "POST /graphql HTTP/1.1\r\nHost: {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            address,
            body.len(),
            body
        );

        let response = raw_request(&address, request).await;
        assert!(response.starts_with("HTTP/1.1 200"));
        assert!(response.contains(r#""name":"The Two Towers""#));
        assert!(response.contains(r#""name":"J. R. R. Tolkien""#));
    }

    #[tokio::test]
    async fn test_get_serves_graphiql() {
        let address = spawn(ServerSettings::default()).await;
        let request = format!(
            "GET /graphql HTTP/1.1\r\nHost: {}\r\nConnection: close\r\n\r\n",
            address
        );

        let response = raw_request(&address, request).await;
        assert!(response.starts_with("HTTP/1.1 200"));
        assert!(response.to_lowercase().contains("graphiql"));
    }

    #[tokio::test]
    async fn test_graphiql_disabled() {
        let settings = ServerSettings {
            graphiql: false,
            ..ServerSettings::default()
        };
        let address = spawn(settings).await;
        let request = format!(
            "GET /graphql HTTP/1.1\r\nHost: {}\r\nConnection: close\r\n\r\n",
            address
        );

        let response = raw_request(&address, request).await;
        assert!(response.starts_with("HTTP/1.1 405"));
    }
}
