//! Response payloads returned by the StellarForge API.
//!
//! Field names are camelCase on the wire. Each field also accepts the
//! snake_case spelling the StellarForge backend serializes and the PascalCase
//! spelling of .NET servers. Missing fields take their zero value and a `null`
//! sequence reads as empty, so a sparse reply still counts as a result.

use serde::{Deserialize, Deserializer, Serialize};

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Result of `POST /projects/generate`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerateResponse {
    #[serde(alias = "project_id", alias = "ProjectId")]
    pub project_id: String,
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(alias = "num_star_systems", alias = "NumStarSystems")]
    pub num_star_systems: u32,
    #[serde(alias = "num_stars_total", alias = "NumStarsTotal")]
    pub num_stars_total: u32,
    #[serde(alias = "solo_systems", alias = "SoloSystems")]
    pub solo_systems: u32,
    #[serde(alias = "binary_systems", alias = "BinarySystems")]
    pub binary_systems: u32,
    #[serde(alias = "trinary_systems", alias = "TrinarySystems")]
    pub trinary_systems: u32,
    #[serde(alias = "generation_time_ms", alias = "GenerationTimeMs")]
    pub generation_time_ms: u64,
}

/// One row of `GET /projects`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectSummary {
    #[serde(alias = "Id")]
    pub id: String,
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(alias = "num_star_systems", alias = "NumStarSystems")]
    pub num_star_systems: u32,
    #[serde(alias = "num_stars_total", alias = "NumStarsTotal")]
    pub num_stars_total: u32,
    #[serde(alias = "created_at", alias = "CreatedAt")]
    pub created_at: String,
    #[serde(alias = "distribution_type", alias = "DistributionType")]
    pub distribution_type: String,
}

/// Body of `GET /projects`, in server order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectListResponse {
    #[serde(alias = "Projects", deserialize_with = "null_as_empty")]
    pub projects: Vec<ProjectSummary>,
}

impl ProjectListResponse {
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }
}

/// Full project record from `GET /projects/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectDetail {
    #[serde(alias = "Id")]
    pub id: String,
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(alias = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(alias = "created_at", alias = "CreatedAt")]
    pub created_at: String,
    #[serde(alias = "updated_at", alias = "UpdatedAt")]
    pub updated_at: String,

    #[serde(alias = "distribution_type", alias = "DistributionType")]
    pub distribution_type: String,
    #[serde(alias = "num_star_systems", alias = "NumStarSystems")]
    pub num_star_systems: u32,

    #[serde(alias = "size_x_ly", alias = "SizeXLy", skip_serializing_if = "Option::is_none")]
    pub size_x_ly: Option<f64>,
    #[serde(alias = "size_y_ly", alias = "SizeYLy", skip_serializing_if = "Option::is_none")]
    pub size_y_ly: Option<f64>,
    #[serde(alias = "size_z_ly", alias = "SizeZLy", skip_serializing_if = "Option::is_none")]
    pub size_z_ly: Option<f64>,
    #[serde(alias = "radius_ly", alias = "RadiusLy", skip_serializing_if = "Option::is_none")]
    pub radius_ly: Option<f64>,

    #[serde(alias = "total_stars", alias = "TotalStars")]
    pub total_stars: u32,
    #[serde(alias = "solo_systems", alias = "SoloSystems")]
    pub solo_systems: u32,
    #[serde(alias = "binary_systems", alias = "BinarySystems")]
    pub binary_systems: u32,
    #[serde(alias = "trinary_systems", alias = "TrinarySystems")]
    pub trinary_systems: u32,
}

/// Body of `GET /projects/{id}/stars`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectStarsResponse {
    #[serde(alias = "project_id", alias = "ProjectId")]
    pub project_id: String,
    #[serde(alias = "project_name", alias = "ProjectName")]
    pub project_name: String,
    #[serde(alias = "Systems", deserialize_with = "null_as_empty")]
    pub systems: Vec<SystemWithStars>,
}

impl ProjectStarsResponse {
    /// Total number of stars across every system.
    pub fn star_count(&self) -> usize {
        self.systems.iter().map(|s| s.stars.len()).sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SystemWithStars {
    #[serde(alias = "system_name", alias = "SystemName")]
    pub system_name: String,
    /// "solo", "binary" or "trinary".
    #[serde(alias = "system_type", alias = "SystemType")]
    pub system_type: String,
    #[serde(alias = "Position")]
    pub position: Position,
    #[serde(alias = "Stars", deserialize_with = "null_as_empty")]
    pub stars: Vec<StarDetail>,
}

/// Coordinates in light years.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Position {
    #[serde(alias = "X")]
    pub x: f64,
    #[serde(alias = "Y")]
    pub y: f64,
    #[serde(alias = "Z")]
    pub z: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StarDetail {
    #[serde(alias = "Name")]
    pub name: String,
    /// Class letter plus subclass digit, e.g. "G2".
    #[serde(alias = "spectral_class", alias = "SpectralClass")]
    pub spectral_class: String,
    #[serde(alias = "temperature_k", alias = "TemperatureK")]
    pub temperature_k: f64,
    #[serde(alias = "mass_solar", alias = "MassSolar")]
    pub mass_solar: f64,
    #[serde(alias = "radius_solar", alias = "RadiusSolar")]
    pub radius_solar: f64,
    #[serde(alias = "luminosity_solar", alias = "LuminositySolar")]
    pub luminosity_solar: f64,
}

/// Error body the server returns with 4xx/5xx statuses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(alias = "Error")]
    pub error: String,
}
