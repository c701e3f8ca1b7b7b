//! One-shot population of an empty store from the built-in seed list.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use futures::future::try_join_all;
use metrics::counter;
use tracing::info;

use crate::application::repos::{PostsRepo, RepoError};
use crate::domain::posts::SeedPost;

/// Stores holding more than this many posts are left untouched.
pub const SEED_SKIP_THRESHOLD: u64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Inserted(usize),
    Skipped { existing: u64 },
    AlreadyRan,
}

pub struct Seeder {
    posts: Arc<dyn PostsRepo>,
    seed: &'static [SeedPost],
    started: AtomicBool,
}

impl Seeder {
    pub fn new(posts: Arc<dyn PostsRepo>, seed: &'static [SeedPost]) -> Self {
        Self {
            posts,
            seed,
            started: AtomicBool::new(false),
        }
    }

    /// Insert the seed list unless the store already holds posts.
    ///
    /// Only the first call per seeder does any work. Inserts are issued
    /// concurrently and the first failure fails the whole run; posts inserted
    /// before it stay in place.
    pub async fn run(&self) -> Result<SeedOutcome, RepoError> {
        if self.started.swap(true, Ordering::AcqRel) {
            return Ok(SeedOutcome::AlreadyRan);
        }

        let existing = self.posts.count_posts().await?;
        if existing > SEED_SKIP_THRESHOLD {
            info!(
                target = "postboard::seed",
                existing, "store already populated, skipping seed"
            );
            return Ok(SeedOutcome::Skipped { existing });
        }

        let inserts = self
            .seed
            .iter()
            .map(|post| self.posts.insert_post(post.to_new_post()));
        let inserted = try_join_all(inserts).await?;

        counter!("postboard_seed_inserted_total").increment(inserted.len() as u64);
        info!(
            target = "postboard::seed",
            inserted = inserted.len(),
            "seed posts added"
        );

        Ok(SeedOutcome::Inserted(inserted.len()))
    }
}
