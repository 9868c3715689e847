mod dialect;
mod example;
mod scan;

pub use dialect::present_dialects;
pub use example::present_example;
pub use scan::{headline, present_scan};
