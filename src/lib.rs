pub mod error;
pub mod extract;
pub mod grouping;
pub mod hashvec;
pub mod matcher;
pub mod numeric;
pub mod parsers;
pub mod render;
pub mod resolver;
pub mod types;

pub use resolver::resolve_all;
pub use types::{DescriptionBlock, StatID, StatObservation};
