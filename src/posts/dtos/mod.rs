pub mod create_post_dto;
pub mod get_posts_filter_dto;
