pub mod pipeline;
pub mod routing;

pub use pipeline::*;
pub use routing::*;
