//! Boundary to the shapefile decoder.

use anyhow::Result;
use serde_json::Value;

/// Decodes a zipped shapefile archive into a GeoJSON value.
///
/// A failure's message is shown to the user as is; an empty message is
/// replaced with a localized generic upload error.
pub trait ShapefileDecoder: Send + Sync {
    /// Decode `archive`.
    fn decode(&self, archive: &[u8]) -> impl Future<Output = Result<Value>> + Send;
}
