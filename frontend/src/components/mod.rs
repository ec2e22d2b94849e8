// Reusable components live here.

pub mod error_banner;
pub mod loading_spinner;
pub mod tag_list;
