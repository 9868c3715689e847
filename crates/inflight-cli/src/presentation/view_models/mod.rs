pub mod common;
pub mod dialect;
pub mod example;
pub mod result;
pub mod scan;

pub use common::{CreateView, Guidance, StatusBadge, StatusLevel, ViewMode};
pub use dialect::{DialectEntry, DialectListViewModel};
pub use example::ExampleViewModel;
pub use result::CommandResultViewModel;
pub use scan::ScanViewModel;
