pub mod blog_post;
pub mod not_found;
