pub mod post;
pub mod posts_response;
