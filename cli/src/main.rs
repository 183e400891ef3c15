use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use uuid::Uuid;

/// Multipart field the server reads uploads from.
const MEME_FIELD: &str = "meme";

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned HTTP {status}: {message}")]
    ServerError { status: u16, message: String },
    #[error("file error for {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "memegen-cli", about = "Meme generator API CLI")]
struct Cli {
    #[arg(long, env = "MEMEGEN_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone)]
struct CliContext {
    base_url: String,
    client: reqwest::Client,
}

impl CliContext {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Ping `/healthz`.
    Health,
    /// Print saved meme URLs, newest first.
    List {
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Upload an image file and print its URL.
    Upload { path: PathBuf },
    /// Save a meme's image bytes to disk.
    Download {
        id: Uuid,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    url: String,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let ctx = CliContext {
        base_url: normalize_base_url(&cli.base_url)?,
        client: reqwest::Client::new(),
    };

    match cli.command {
        Command::Health => run_health(&ctx).await,
        Command::List { limit } => run_list(&ctx, limit).await,
        Command::Upload { path } => run_upload(&ctx, &path).await,
        Command::Download { id, output } => run_download(&ctx, id, output).await,
    }
}

async fn run_health(ctx: &CliContext) -> Result<(), CliError> {
    let response = ctx.client.get(ctx.url("/healthz")).send().await?;
    ensure_success(response).await?;
    println!("ok");
    Ok(())
}

async fn run_list(ctx: &CliContext, limit: Option<usize>) -> Result<(), CliError> {
    let response = ctx.client.get(ctx.url(&list_path(limit))).send().await?;
    let body = ensure_success(response).await?.text().await?;
    let urls: Vec<String> = serde_json::from_str(&body)?;
    for url in urls {
        println!("{url}");
    }
    Ok(())
}

async fn run_upload(ctx: &CliContext, path: &Path) -> Result<(), CliError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| CliError::File {
        path: path.to_owned(),
        source,
    })?;
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("meme.png")
        .to_owned();
    let part = Part::bytes(bytes)
        .file_name(file_name)
        .mime_str(mime_for_path(path))?;
    let form = Form::new().part(MEME_FIELD, part);

    let response = ctx
        .client
        .post(ctx.url("/upload"))
        .multipart(form)
        .send()
        .await?;
    let body = ensure_success(response).await?.text().await?;
    let uploaded: UploadResponse = serde_json::from_str(&body)?;
    println!("{}", uploaded.url);
    Ok(())
}

async fn run_download(ctx: &CliContext, id: Uuid, output: Option<PathBuf>) -> Result<(), CliError> {
    let response = ctx.client.get(ctx.url(&format!("/memes/{id}"))).send().await?;
    let response = ensure_success(response).await?;
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    let bytes = response.bytes().await?;

    let path = output.unwrap_or_else(|| default_download_path(id, &content_type));
    tokio::fs::write(&path, &bytes)
        .await
        .map_err(|source| CliError::File { path: path.clone(), source })?;
    println!("{} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, CliError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    Err(CliError::ServerError {
        status: status.as_u16(),
        message: if message.is_empty() {
            status.canonical_reason().unwrap_or("request failed").to_owned()
        } else {
            message
        },
    })
}

fn normalize_base_url(base_url: &str) -> Result<String, CliError> {
    let trimmed = base_url.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        return Ok(trimmed.to_owned());
    }
    Err(CliError::InvalidBaseUrl(base_url.to_owned()))
}

fn list_path(limit: Option<usize>) -> String {
    match limit {
        Some(limit) => format!("/memes?limit={limit}"),
        None => "/memes".to_owned(),
    }
}

fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

fn extension_for_mime(content_type: &str) -> &'static str {
    match content_type.split(';').next().map(str::trim) {
        Some("image/jpeg") => "jpg",
        Some("image/gif") => "gif",
        Some("image/webp") => "webp",
        _ => "png",
    }
}

fn default_download_path(id: Uuid, content_type: &str) -> PathBuf {
    PathBuf::from(format!("{id}.{}", extension_for_mime(content_type)))
}
