use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct GetPostsFilterDto {
    /// `0` behaves like no limit at all.
    pub limit: Option<u32>,
}
