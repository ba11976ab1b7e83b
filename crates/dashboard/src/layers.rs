//! User-uploaded map layers. Held in memory only.

use gcore::catalog::LAYER_COLORS;
use serde::Serialize;
use serde_json::Value;
use ulid::Ulid;

/// A decoded shapefile overlaid on the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomLayer {
    /// Unique id, `layer-<ulid>`.
    pub id: String,
    /// Display name, the uploaded file name.
    pub name: String,
    /// Decoded geometry as GeoJSON.
    pub geojson: Value,
    /// Whether the layer is drawn.
    pub visible: bool,
    /// Fill color.
    pub color: &'static str,
}

/// Layers in upload order.
#[derive(Debug, Clone, Default)]
pub struct Layers {
    layers: Vec<CustomLayer>,
}

impl Layers {
    /// Add a visible layer. Its color follows the current layer count.
    pub fn add(&mut self, name: impl Into<String>, geojson: Value) -> &CustomLayer {
        let color = LAYER_COLORS[self.layers.len() % LAYER_COLORS.len()];
        let index = self.layers.len();
        self.layers.push(CustomLayer {
            id: format!("layer-{}", Ulid::new().to_string().to_lowercase()),
            name: name.into(),
            geojson,
            visible: true,
            color,
        });
        &self.layers[index]
    }

    /// Flip the visibility of `id`. Returns false if there is no such layer.
    pub fn toggle(&mut self, id: &str) -> bool {
        match self.layers.iter_mut().find(|layer| layer.id == id) {
            Some(layer) => {
                layer.visible = !layer.visible;
                true
            }
            None => false,
        }
    }

    /// Remove `id`. Returns false if there is no such layer.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.layers.len();
        self.layers.retain(|layer| layer.id != id);
        self.layers.len() != before
    }

    /// All layers, oldest first.
    pub fn as_slice(&self) -> &[CustomLayer] {
        &self.layers
    }

    /// Number of layers.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Whether there are no layers.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}
