//! Blog API demo serving access-gated representations.
//!
//! Usage:
//!   cargo run --example blog_api -- --port 8080
//!
//! Then:
//!   curl localhost:8080/posts      # all posts; private author emails are absent
//!   curl localhost:8080/posts/1    # one post, bare object shape

use std::sync::Arc;

use anyhow::Result;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use clap::Parser;
use refract_axum::respond;
use refract_model::{Guarded, Instance, Node};
use refract_registry::{AccessCheck, Registry, RegistryBuilder, RegistryError, Representation};
use refract_render::ResponseBuilder;
use serde_json::json;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "blog-api")]
#[command(about = "Demo blog API with access-gated author emails")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone)]
struct AppState {
    registry: Arc<Registry>,
    posts: Arc<Vec<Instance>>,
}

fn build_registry() -> Result<Registry, RegistryError> {
    let mut builder = RegistryBuilder::new();
    builder
        .representation(
            "post",
            None,
            Representation::new("default", |post: &Instance| {
                Node::object([
                    ("id", post.field("/id")),
                    ("title", post.field("/title")),
                    ("body", post.field("/body")),
                    ("author", Node::instance("user", post.data["author"].clone())),
                ])
            }),
        )?
        .representation(
            "user",
            None,
            Representation::new("default", |user: &Instance| {
                Node::object([
                    ("name", user.field("/name")),
                    (
                        "email",
                        Guarded::suppress("user", None, "see_email", user.field("/email")),
                    ),
                ])
            }),
        )?
        .access_check(
            "user",
            None,
            AccessCheck::new("default", |user: &Instance, key: &str| {
                Ok(key == "see_email" && user.get_bool("/email_public").unwrap_or(false))
            }),
        )?;
    Ok(builder.seal())
}

fn seed_posts() -> Vec<Instance> {
    vec![
        Instance::new(
            "post",
            json!({
                "id": 1,
                "title": "Sealing a registry",
                "body": "Populate once, freeze, then share freely.",
                "author": {"name": "ada", "email": "ada@example.net", "email_public": true},
            }),
        ),
        Instance::new(
            "post",
            json!({
                "id": 2,
                "title": "Guarded fields",
                "body": "The tree decides, the check answers.",
                "author": {"name": "brin", "email": "brin@example.net", "email_public": false},
            }),
        ),
    ]
}

async fn list_posts(State(state): State<AppState>) -> Response {
    respond(
        ResponseBuilder::new(&state.registry)
            .objects(state.posts.iter().cloned())
            .as_list()
            .build(),
    )
}

async fn get_post(State(state): State<AppState>, Path(id): Path<u64>) -> Response {
    let found = state
        .posts
        .iter()
        .find(|post| post.get_number("/id") == Some(id as f64));
    match found {
        Some(post) => respond(ResponseBuilder::new(&state.registry).object(post.clone()).build()),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    let registry = build_registry()?;
    info!(
        "registry sealed with {} representations and {} access checks",
        registry.representation_count(),
        registry.access_check_count()
    );

    let state = AppState {
        registry: Arc::new(registry),
        posts: Arc::new(seed_posts()),
    };
    let app = Router::new()
        .route("/posts", get(list_posts))
        .route("/posts/{id}", get(get_post))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", args.port)).await?;
    info!("blog API listening on port {}", args.port);
    axum::serve(listener, app).await?;

    Ok(())
}
