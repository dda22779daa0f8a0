use crate::name::{find_by_name, HasName};
use serde::{Deserialize, Serialize};

/// A glazing type from the library stream.
///
/// Windows reference glass types by name only; the association is resolved by
/// the downstream engine, not at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlassType {
    pub name: String,
    pub diffuse_trans: f64,
    pub inside_refl: f64,
    /// Coefficients of the angular transmittance/reflectance fit.
    pub coefs: [f64; 6],
}

impl HasName for GlassType {
    fn get_name(&self) -> &str {
        &self.name
    }
}

/// The glazing-type library, an independent tree root beside the building.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Library {
    pub glass: Vec<GlassType>,
}

impl Library {
    /// Gets a glass type by name.
    pub fn get_glass(&self, name: &str) -> Option<&GlassType> {
        find_by_name(&self.glass, name)
    }
}
