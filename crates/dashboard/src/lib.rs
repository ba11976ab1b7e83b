//! Dashboard state for geodash.
//!
//! [`Dashboard`] holds the view state and one request lifecycle per concern;
//! [`Session`] drives it asynchronously against an assistant and a
//! shapefile decoder.

pub use decoder::ShapefileDecoder;
pub use layers::{CustomLayer, Layers};
pub use lifecycle::{Phase, RequestState, Ticket};
pub use session::Session;
pub use view::{AnalysisRequest, Dashboard, Marker, Panel, SearchRequest};

mod decoder;
mod layers;
mod lifecycle;
mod session;
mod view;
