mod data;

use super::entities::NewPost;

pub use data::SEED_POSTS;

/// One entry of the built-in seed list.
#[derive(Debug, Clone, Copy)]
pub struct SeedPost {
    pub user_id: i64,
    pub title: &'static str,
    pub body: &'static str,
}

impl SeedPost {
    pub fn to_new_post(&self) -> NewPost {
        NewPost {
            title: self.title.to_string(),
            body: self.body.to_string(),
            user_id: self.user_id,
        }
    }
}

pub fn seed_list() -> &'static [SeedPost] {
    &SEED_POSTS
}
