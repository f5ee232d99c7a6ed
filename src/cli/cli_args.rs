use crate::cli::error_handling::{page_limit_to_cli_error, parse_error_to_cli_error, CliResult};
use crate::range::bound::Bound;
use crate::range::multi_range::MultiRange;
use crate::range::types::ParseOptions;
use clap::Parser;

/// Validates a page-range expression and prints its normalized form.
///
/// Example usage: multirange '1-3,5,7-' --max-pages 20
///
/// The expression is a comma-separated list of pages ("5") and page ranges
/// ("1-3"). Open-ended ranges such as "7-" are accepted and select everything
/// from that page on; they always pass the --max-pages check.
#[derive(Parser, Debug)]
#[command(version)]
pub struct CliArgs {
    /// The page-range expression to validate.
    #[arg()]
    pub pages: String,

    /// The highest page number to allow.
    ///
    /// An expression whose largest page is finite and above this limit is
    /// rejected.
    #[arg(short, long)]
    pub max_pages: Option<i64>,

    /// Accept parenthesized negative numbers, such as "(-5)".
    #[arg(short, long, default_value_t = false)]
    pub negative: bool,
}

impl CliArgs {
    pub fn options(&self) -> ParseOptions {
        ParseOptions {
            parse_negative: self.negative,
            parse_unbounded: true,
        }
    }

    /// Parses the expression and checks it against the page limit.
    pub fn page_set(&self) -> CliResult<MultiRange> {
        let set = MultiRange::parse(&self.pages, self.options()).map_err(parse_error_to_cli_error)?;

        if let Some(limit) = self.max_pages {
            if let Some(Bound::Finite(max)) = set.max() {
                if max > limit {
                    return Err(page_limit_to_cli_error(limit));
                }
            }
        }

        Ok(set)
    }
}
