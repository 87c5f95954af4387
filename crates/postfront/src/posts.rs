use crate::prelude::{println, *};
use crate::service::PostOperations;
use crate::upstream::{UpstreamConfig, UpstreamOptions, UpstreamPostsClient};
use postfront_core::posts::{Post, PostPatch};

#[derive(Debug, clap::Parser)]
#[command(name = "posts")]
#[command(about = "Run post operations against the upstream service")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,

    #[clap(flatten)]
    pub upstream: UpstreamOptions,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Count distinct submitters across all posts
    #[clap(name = "count")]
    Count(CountOptions),

    /// Replace the title and body of the post at a 1-based position
    #[clap(name = "update")]
    Update(UpdateOptions),

    /// List every post served by the upstream service
    #[clap(name = "list")]
    List(ListOptions),
}

#[derive(Debug, clap::Args, Clone)]
pub struct CountOptions {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args, Clone)]
pub struct UpdateOptions {
    /// Position of the post to update (1-indexed)
    pub index: i64,

    /// New title
    #[arg(long)]
    pub title: String,

    /// New body
    #[arg(long)]
    pub body: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args, Clone)]
pub struct ListOptions {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let config = UpstreamConfig::from(app.upstream);

    if global.verbose {
        println!("Upstream posts service: {}", config.base_url);
        println!();
    }

    let operations = PostOperations::new(UpstreamPostsClient::new(&config)?);

    match app.command {
        Commands::Count(options) => count(&operations, options).await,
        Commands::Update(options) => update(&operations, options).await,
        Commands::List(options) => list(&operations, options).await,
    }
}

async fn count(operations: &PostOperations, options: CountOptions) -> Result<()> {
    let count = operations.count_distinct_submitters().await?;

    if options.json {
        println!("{count}");
    } else {
        println!("Distinct submitters: {count}");
    }

    Ok(())
}

async fn update(operations: &PostOperations, options: UpdateOptions) -> Result<()> {
    let patch = PostPatch::new(options.title, options.body).validate()?;
    let post = operations.update_at_position(options.index, patch).await?;

    if options.json {
        println!("{}", format_json(&post)?);
    } else {
        println!("{}", format_post_text(&post));
    }

    Ok(())
}

async fn list(operations: &PostOperations, options: ListOptions) -> Result<()> {
    let posts = operations.list_posts().await?;

    if options.json {
        println!("{}", format_json(&posts)?);
    } else {
        format_posts_table(&posts).printstd();
        println!("\n{} posts", posts.len());
    }

    Ok(())
}

fn format_json<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

fn format_post_text(post: &Post) -> String {
    f!(
        "Post {} (submitter {})\nTitle: {}\nBody: {}",
        post.id,
        post.submitter_id,
        post.title,
        post.body
    )
}

fn format_posts_table(posts: &[Post]) -> prettytable::Table {
    let mut table = new_table();
    table.set_titles(prettytable::row!["#", "USER ID", "ID", "TITLE"]);

    for (position, post) in posts.iter().enumerate() {
        table.add_row(prettytable::row![position + 1, post.submitter_id, post.id, post.title]);
    }

    table
}
