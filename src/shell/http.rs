use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header::CONTENT_TYPE},
    response::Html,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::shell::graphql::AppSchema;
use crate::shell::module::GraphQLOptions;

pub fn router(
    options: &GraphQLOptions,
    schema: AppSchema,
    cors_origin: Option<HeaderValue>,
) -> Router {
    let route = if options.playground {
        let page = GraphiQLSource::build().endpoint(&options.endpoint).finish();
        get(move || async move { Html(page) }).post(graphql)
    } else {
        post(graphql)
    };

    let mut app = Router::new()
        .route(&options.endpoint, route)
        .layer(Extension(schema));

    if let Some(origin) = cors_origin {
        app = app.layer(
            CorsLayer::new()
                .allow_origin(origin)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([CONTENT_TYPE]),
        );
    }

    app.layer(TraceLayer::new_for_http())
}

async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}
