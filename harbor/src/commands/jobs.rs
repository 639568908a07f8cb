use anyhow::Context;
use clap::Subcommand;
use harbor_config::Config;
use harbor_core_bookmarks_contracts::BookmarkService;
use harbor_core_feed_contracts::{FeedFetchByIdError, JobFeedService};
use harbor_models::{
    job::{JobId, JobPosting},
    pagination::{PageNumber, PageSize},
    search::{self, SearchTerm},
};
use harbor_shared_contracts::time::TimeService;
use tracing::info;

use crate::{environment::Environment, render};

#[derive(Debug, Subcommand)]
pub enum JobsCommand {
    /// Show a single page of the feed
    #[command(aliases(["ls", "l"]))]
    List {
        /// The page to show, starting at 1
        #[arg(short, long, default_value = "1")]
        page: u32,
        /// The number of postings per page (defaults to the configured page size)
        #[arg(short, long)]
        limit: Option<u32>,
        /// Only show postings whose title, company or location contains this text
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Load consecutive pages like an infinitely scrolling list
    #[command(aliases(["b"]))]
    Browse {
        /// The maximum number of pages to load
        #[arg(short, long, default_value = "3")]
        pages: u32,
        /// Only show postings whose title, company or location contains this text
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Show all details of a posting
    #[command(aliases(["s", "get"]))]
    Show {
        /// The id of the posting
        id: String,
    },
}

impl JobsCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        let env = Environment::new(&config).await?;
        match self {
            JobsCommand::List {
                page,
                limit,
                search,
            } => list(&env, page, limit, search).await,
            JobsCommand::Browse { pages, search } => browse(&env, pages, search).await,
            JobsCommand::Show { id } => show(&env, id.into()).await,
        }
    }
}

async fn list(
    env: &Environment,
    page: u32,
    limit: Option<u32>,
    search: Option<String>,
) -> anyhow::Result<()> {
    let page = PageNumber::try_new(page).context("Invalid page number")?;
    let size = match limit {
        Some(limit) => PageSize::try_new(limit).context("Invalid page size")?,
        None => env.page_size(),
    };

    let jobs = env.feed().fetch_page(page, size).await;
    if jobs.is_empty() {
        println!("No jobs on page {page}.");
        return Ok(());
    }

    let term = SearchTerm::new(search.unwrap_or_default());
    print_cards(env, search::filter(&jobs, &term)).await;

    Ok(())
}

async fn browse(env: &Environment, pages: u32, search: Option<String>) -> anyhow::Result<()> {
    let mut pager = env.pager();

    pager.refresh().await;
    for _ in 1..pages {
        if !pager.load_more().await {
            break;
        }
    }

    info!(
        pages = pager.page().map_or(0, PageNumber::into_inner),
        jobs = pager.jobs().len(),
        has_more = pager.has_more(),
        "feed loaded"
    );

    let term = SearchTerm::new(search.unwrap_or_default());
    print_cards(env, pager.search(&term)).await;

    if pager.has_more() {
        println!("More jobs are available, use --pages to load further pages.");
    }

    Ok(())
}

async fn show(env: &Environment, id: JobId) -> anyhow::Result<()> {
    let job = match env.feed().fetch_by_id(&id).await {
        Ok(job) => job,
        Err(FeedFetchByIdError::NotFound) => anyhow::bail!("Job {id} not found"),
    };

    let bookmarks = env.bookmarks();
    bookmarks.wait_ready().await;

    print!(
        "{}",
        render::details(&job, bookmarks.is_bookmarked(&job.id), env.time().now())
    );

    Ok(())
}

async fn print_cards(env: &Environment, jobs: Vec<&JobPosting>) {
    if jobs.is_empty() {
        println!("No matching jobs.");
        return;
    }

    let bookmarks = env.bookmarks();
    bookmarks.wait_ready().await;
    let now = env.time().now();

    for job in jobs {
        println!("{}", render::card(job, bookmarks.is_bookmarked(&job.id), now));
    }
}
