//! Static catalog of countries and datasets shown on the map.

use crate::Language;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Colors assigned to uploaded layers, cycled in upload order.
pub const LAYER_COLORS: [&str; 6] = [
    "#34D399", "#F87171", "#60A5FA", "#FBBF24", "#A78BFA", "#EC4899",
];

/// Initial map center as `[longitude, latitude]`.
pub const MAP_CENTER: [f64; 2] = [-78.0, 0.0];

/// Initial map zoom.
pub const MAP_ZOOM: u8 = 4;

/// A string with one value per supported language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Localized {
    /// English text.
    pub en: &'static str,
    /// Spanish text.
    pub es: &'static str,
}

impl Localized {
    /// The text for `language`.
    pub fn get(&self, language: Language) -> &'static str {
        match language {
            Language::En => self.en,
            Language::Es => self.es,
        }
    }
}

/// Identifier of a selectable dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetId {
    /// Total estimated population.
    #[default]
    Population,
    /// Land area in km².
    LandArea,
    /// Protected area in km².
    ProtectedAreas,
    /// Relative biodiversity index (0-100).
    BiodiversityIndex,
}

impl DatasetId {
    /// Wire identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Population => "population",
            Self::LandArea => "land_area",
            Self::ProtectedAreas => "protected_areas",
            Self::BiodiversityIndex => "biodiversity_index",
        }
    }

    /// The dataset record for this id.
    pub fn dataset(self) -> &'static Dataset {
        DATASETS
            .iter()
            .find(|d| d.id == self)
            .unwrap_or(&DATASETS[0])
    }
}

impl fmt::Display for DatasetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatasetId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "population" => Ok(Self::Population),
            "land_area" => Ok(Self::LandArea),
            "protected_areas" => Ok(Self::ProtectedAreas),
            "biodiversity_index" => Ok(Self::BiodiversityIndex),
            other => anyhow::bail!("unknown dataset '{other}'"),
        }
    }
}

/// A selectable dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dataset {
    /// Dataset id.
    pub id: DatasetId,
    /// Display name.
    pub name: Localized,
    /// Unit of the metric.
    pub unit: Localized,
    /// Short description.
    pub description: Localized,
}

/// Metric values of a country. Missing metrics are `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CountryData {
    pub population: Option<f64>,
    pub land_area: Option<f64>,
    pub protected_areas: Option<f64>,
    pub biodiversity_index: Option<f64>,
}

impl CountryData {
    /// The value of `dataset`, if recorded.
    pub fn get(&self, dataset: DatasetId) -> Option<f64> {
        match dataset {
            DatasetId::Population => self.population,
            DatasetId::LandArea => self.land_area,
            DatasetId::ProtectedAreas => self.protected_areas,
            DatasetId::BiodiversityIndex => self.biodiversity_index,
        }
    }
}

/// A country with a marker on the map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Country {
    /// ISO 3166-1 alpha-2 code.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Marker position as `[longitude, latitude]`.
    pub coordinates: [f64; 2],
    /// Metric values.
    pub data: CountryData,
}

/// An organization whose documents back scoped questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Organization {
    /// Organization id, also the document directory name.
    pub id: String,
    /// Display name.
    pub name: String,
}

const fn metrics(population: f64, land_area: f64, protected: f64, biodiversity: f64) -> CountryData {
    CountryData {
        population: Some(population),
        land_area: Some(land_area),
        protected_areas: Some(protected),
        biodiversity_index: Some(biodiversity),
    }
}

/// The focused countries.
pub static COUNTRIES: [Country; 5] = [
    Country {
        id: "GT",
        name: "Guatemala",
        coordinates: [-90.2308, 15.7835],
        data: metrics(18_092_026.0, 107_159.0, 34_290.0, 80.0),
    },
    Country {
        id: "SV",
        name: "El Salvador",
        coordinates: [-88.8965, 13.7942],
        data: metrics(6_378_453.0, 20_721.0, 300.0, 45.0),
    },
    Country {
        id: "HN",
        name: "Honduras",
        coordinates: [-86.2419, 15.2],
        data: metrics(10_593_798.0, 111_888.0, 27_972.0, 75.0),
    },
    Country {
        id: "CO",
        name: "Colombia",
        coordinates: [-74.2973, 4.5709],
        data: metrics(52_085_168.0, 1_141_748.0, 312_535.0, 93.0),
    },
    Country {
        id: "EC",
        name: "Ecuador",
        coordinates: [-78.1834, -1.8312],
        data: metrics(18_190_484.0, 283_561.0, 56_160.0, 91.0),
    },
];

/// The selectable datasets.
pub static DATASETS: [Dataset; 4] = [
    Dataset {
        id: DatasetId::Population,
        name: Localized { en: "Population", es: "Población" },
        unit: Localized { en: "people", es: "personas" },
        description: Localized {
            en: "Total estimated population.",
            es: "Población total estimada.",
        },
    },
    Dataset {
        id: DatasetId::LandArea,
        name: Localized { en: "Land Area", es: "Superficie" },
        unit: Localized { en: "km²", es: "km²" },
        description: Localized {
            en: "Total land area in square kilometers.",
            es: "Superficie total en kilómetros cuadrados.",
        },
    },
    Dataset {
        id: DatasetId::ProtectedAreas,
        name: Localized { en: "Protected Area", es: "Área Protegida" },
        unit: Localized { en: "km²", es: "km²" },
        description: Localized {
            en: "Area of terrestrial and marine protected areas.",
            es: "Superficie de áreas protegidas terrestres y marinas.",
        },
    },
    Dataset {
        id: DatasetId::BiodiversityIndex,
        name: Localized { en: "Biodiversity Index", es: "Índice de Biodiversidad" },
        unit: Localized { en: "score", es: "puntaje" },
        description: Localized {
            en: "A relative index of biodiversity (0-100).",
            es: "Un índice relativo de biodiversidad (0-100).",
        },
    },
];

/// Look up a country by id or display name, ignoring ASCII case.
pub fn country(key: &str) -> Option<&'static Country> {
    let key = key.trim();
    COUNTRIES
        .iter()
        .find(|c| c.id.eq_ignore_ascii_case(key) || c.name.eq_ignore_ascii_case(key))
}
