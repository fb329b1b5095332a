mod parser;
mod utils;

pub use parser::parse_timestamp;
pub use utils::format_timestamp;
