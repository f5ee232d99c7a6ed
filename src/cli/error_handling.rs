use crate::range::types::MultiRangeError;

pub type CliResult<T> = Result<T, String>;

/// Collapses a parse failure into the single validation message shown next
/// to the pages field; the error detail itself is not user-facing.
pub fn parse_error_to_cli_error(_error: MultiRangeError) -> String {
    "Page range not recognized. Please use one or more ranges, such as 1-3,5,2-".to_string()
}

/// The message shown when the expression reaches past the document's last
/// page.
pub fn page_limit_to_cli_error(limit: i64) -> String {
    format!("Page range out of bounds, limit is {}", limit)
}
