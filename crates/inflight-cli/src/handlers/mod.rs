pub mod context;
pub mod dialects;
pub mod example;
pub mod scan;

pub use context::HandlerContext;
