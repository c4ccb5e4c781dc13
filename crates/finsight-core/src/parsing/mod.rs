pub mod dates;
pub mod values;

pub use dates::parse_period_end_date;
pub use values::{parse_figure, Figure};
