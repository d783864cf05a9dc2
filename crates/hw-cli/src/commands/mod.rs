pub mod check;
pub mod choices;
pub mod create;
pub mod list;

use std::fmt::Display;
use std::str::FromStr;

/// Parse a CLI string into a tag, rendering the parse error as the
/// command error.
fn parse_tag<T>(s: &str) -> Result<T, String>
where
    T: FromStr,
    T::Err: Display,
{
    s.parse().map_err(|e: T::Err| e.to_string())
}
