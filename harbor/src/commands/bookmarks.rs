use clap::Subcommand;
use harbor_config::Config;
use harbor_core_bookmarks_contracts::BookmarkService;
use harbor_core_feed_contracts::{FeedFetchByIdError, JobFeedService};
use harbor_models::{
    job::{JobId, JobPosting},
    search::{self, SearchTerm},
};
use harbor_shared_contracts::time::TimeService;
use tracing::info;

use crate::{environment::Environment, render};

#[derive(Debug, Subcommand)]
pub enum BookmarksCommand {
    /// List all bookmarked postings
    #[command(aliases(["ls", "l"]))]
    List {
        /// Only show postings whose title, company or location contains this text
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Bookmark a posting from the feed
    #[command(aliases(["a", "+"]))]
    Add {
        /// The id of the posting
        id: String,
    },
    /// Remove a bookmark
    #[command(aliases(["rm", "r", "-"]))]
    Remove {
        /// The id of the posting
        id: String,
    },
}

impl BookmarksCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        let env = Environment::new(&config).await?;
        match self {
            BookmarksCommand::List { search } => list(&env, search).await,
            BookmarksCommand::Add { id } => add(&env, id.into()).await,
            BookmarksCommand::Remove { id } => remove(&env, id.into()).await,
        }
    }
}

async fn list(env: &Environment, search: Option<String>) -> anyhow::Result<()> {
    let bookmarks = env.bookmarks();
    bookmarks.wait_ready().await;

    let snapshot = bookmarks.snapshot();
    if snapshot.bookmarks.is_empty() {
        println!("No bookmarks yet.");
        return Ok(());
    }

    let term = SearchTerm::new(search.unwrap_or_default());
    let jobs = search::filter(&snapshot.bookmarks, &term);
    if jobs.is_empty() {
        println!("No matching bookmarks.");
        return Ok(());
    }

    let now = env.time().now();
    for job in jobs {
        println!("{}", render::card(job, true, now));
    }

    Ok(())
}

async fn add(env: &Environment, id: JobId) -> anyhow::Result<()> {
    let bookmarks = env.bookmarks();

    let job = match env.feed().fetch_by_id(&id).await {
        Ok(job) => job,
        Err(FeedFetchByIdError::NotFound) => anyhow::bail!("Job {id} not found"),
    };

    if !save(&bookmarks, job).await {
        println!("Job {id} is already bookmarked.");
        return Ok(());
    }

    info!(%id, "bookmark added");
    println!("Bookmarked job {id}.");

    Ok(())
}

async fn remove(env: &Environment, id: JobId) -> anyhow::Result<()> {
    if !unsave(&env.bookmarks(), &id).await {
        println!("Job {id} is not bookmarked.");
        return Ok(());
    }

    info!(%id, "bookmark removed");
    println!("Removed bookmark for job {id}.");

    Ok(())
}

/// Bookmarks `job` and waits until it has been persisted. Returns `false` if
/// it was bookmarked already.
async fn save(bookmarks: &impl BookmarkService, job: JobPosting) -> bool {
    bookmarks.wait_ready().await;
    if bookmarks.is_bookmarked(&job.id) {
        return false;
    }

    bookmarks.add_bookmark(job);
    bookmarks.flush().await;
    true
}

async fn unsave(bookmarks: &impl BookmarkService, id: &JobId) -> bool {
    bookmarks.wait_ready().await;
    if !bookmarks.is_bookmarked(id) {
        return false;
    }

    bookmarks.remove_bookmark(id);
    bookmarks.flush().await;
    true
}

#[cfg(test)]
mod tests {
    use harbor_core_bookmarks_contracts::MockBookmarkService;
    use harbor_demo::JOB_FOO;

    use super::*;

    #[tokio::test]
    async fn save_new() {
        // Arrange
        let bookmarks = MockBookmarkService::new()
            .with_wait_ready()
            .with_is_bookmarked(JOB_FOO.id.clone(), false)
            .with_add_bookmark(JOB_FOO.clone())
            .with_flush();

        // Act
        let result = save(&bookmarks, JOB_FOO.clone()).await;

        // Assert
        assert!(result);
    }

    #[tokio::test]
    async fn save_existing() {
        // Arrange
        let bookmarks = MockBookmarkService::new()
            .with_wait_ready()
            .with_is_bookmarked(JOB_FOO.id.clone(), true);

        // Act
        let result = save(&bookmarks, JOB_FOO.clone()).await;

        // Assert
        assert!(!result);
    }

    #[tokio::test]
    async fn unsave_existing() {
        // Arrange
        let bookmarks = MockBookmarkService::new()
            .with_wait_ready()
            .with_is_bookmarked(JOB_FOO.id.clone(), true)
            .with_remove_bookmark(JOB_FOO.id.clone())
            .with_flush();

        // Act
        let result = unsave(&bookmarks, &JOB_FOO.id).await;

        // Assert
        assert!(result);
    }

    #[tokio::test]
    async fn unsave_missing() {
        // Arrange
        let bookmarks = MockBookmarkService::new()
            .with_wait_ready()
            .with_is_bookmarked(JOB_FOO.id.clone(), false);

        // Act
        let result = unsave(&bookmarks, &JOB_FOO.id).await;

        // Assert
        assert!(!result);
    }
}
