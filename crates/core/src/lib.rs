pub mod params;
pub mod reference;
pub mod requests;
pub mod segment;

pub use params::{QueryParams, QueryValue};
pub use segment::{InvalidSegment, PathSegment};
