mod create;
mod create_with_file;
mod delete;
mod edit;
mod files;
mod get;
mod get_all;
mod get_by_author;
mod get_by_title;
mod myposts;

pub use create::create;
pub use create_with_file::create_with_file;
pub use delete::delete;
pub use edit::edit;
pub use files::files;
pub use get::get;
pub use get_all::get_all;
pub use get_by_author::get_by_author;
pub use get_by_title::get_by_title;
pub use myposts::myposts;

use crate::config;

/// Resolve skip/limit query parameters to sane pagination bounds.
fn page_params(skip: Option<i64>, limit: Option<i64>) -> (i64, i64) {
    let skip = skip.unwrap_or(0).max(0);
    let limit = limit
        .unwrap_or(config::config().api.default_page_limit)
        .clamp(1, 100);
    (skip, limit)
}

#[cfg(test)]
mod tests {
    use super::page_params;

    #[test]
    fn defaults_apply_when_absent() {
        assert_eq!(page_params(None, None), (0, 10));
    }

    #[test]
    fn negative_values_are_clamped() {
        assert_eq!(page_params(Some(-5), Some(-1)), (0, 1));
    }

    #[test]
    fn oversized_limit_is_capped() {
        assert_eq!(page_params(Some(20), Some(5000)), (20, 100));
    }
}
