//! Star-generation request sent to `POST /projects/generate`.

use crate::{Error, ErrorContext, Result};
use serde::{Deserialize, Serialize};

pub const DISTRIBUTION_SPHERE: &str = "sphere";
pub const DISTRIBUTION_CUBE: &str = "cube";

/// Upper bound the server accepts for `numStars`.
pub const MAX_STARS: u32 = 10_000;

/// Parameters for a new generated project.
///
/// `distribution_type` selects which of the spatial fields the server reads:
/// `size_*_ly` for `"cube"`, `radius_ly` for `"sphere"`. Unset optional fields
/// are omitted from the JSON body, so the server can tell "absent" from zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_num_stars")]
    pub num_stars: u32,
    #[serde(default = "default_distribution_type")]
    pub distribution_type: String,

    // Cube parameters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_x_ly: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_y_ly: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_z_ly: Option<f64>,

    // Sphere parameters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius_ly: Option<f64>,
}

fn default_num_stars() -> u32 {
    100
}

fn default_distribution_type() -> String {
    DISTRIBUTION_SPHERE.to_string()
}

impl Default for GenerateRequest {
    fn default() -> Self {
        Self {
            name: String::new(),
            num_stars: default_num_stars(),
            distribution_type: default_distribution_type(),
            size_x_ly: None,
            size_y_ly: None,
            size_z_ly: None,
            radius_ly: Some(100.0),
        }
    }
}

impl GenerateRequest {
    /// Spherical distribution of `num_stars` within `radius_ly`.
    pub fn sphere(name: impl Into<String>, num_stars: u32, radius_ly: f64) -> Self {
        Self {
            name: name.into(),
            num_stars,
            distribution_type: DISTRIBUTION_SPHERE.to_string(),
            radius_ly: Some(radius_ly),
            ..Self::default()
        }
    }

    /// Box-shaped distribution with the given edge lengths in light years.
    pub fn cube(name: impl Into<String>, num_stars: u32, x_ly: f64, y_ly: f64, z_ly: f64) -> Self {
        Self {
            name: name.into(),
            num_stars,
            distribution_type: DISTRIBUTION_CUBE.to_string(),
            size_x_ly: Some(x_ly),
            size_y_ly: Some(y_ly),
            size_z_ly: Some(z_ly),
            radius_ly: None,
        }
    }

    /// Check the request against the rules the server enforces.
    ///
    /// The client only calls this when preflight validation is enabled on the
    /// builder; otherwise the server remains the single authority.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(invalid("name", "Project name cannot be empty"));
        }

        if self.num_stars < 1 || self.num_stars > MAX_STARS {
            return Err(invalid(
                "numStars",
                "Number of stars must be between 1 and 10,000",
            ));
        }

        match self.distribution_type.as_str() {
            DISTRIBUTION_CUBE => {
                let (Some(x), Some(y), Some(z)) = (self.size_x_ly, self.size_y_ly, self.size_z_ly)
                else {
                    return Err(invalid(
                        "sizeXLy",
                        "Cube distribution requires sizeXLy, sizeYLy, and sizeZLy",
                    ));
                };
                if x <= 0.0 || y <= 0.0 || z <= 0.0 {
                    return Err(invalid("sizeXLy", "Cube dimensions must be positive"));
                }
            }
            DISTRIBUTION_SPHERE => match self.radius_ly {
                None => {
                    return Err(invalid("radiusLy", "Sphere distribution requires radiusLy"));
                }
                Some(r) if r <= 0.0 => {
                    return Err(invalid("radiusLy", "Sphere radius must be positive"));
                }
                Some(_) => {}
            },
            other => {
                return Err(Error::validation_with_context(
                    "distributionType must be 'cube' or 'sphere'",
                    ErrorContext::new()
                        .with_field_path("distributionType")
                        .with_details(format!("got '{}'", other))
                        .with_source("preflight"),
                ));
            }
        }

        Ok(())
    }
}

fn invalid(field: &str, msg: &str) -> Error {
    Error::validation_with_context(
        msg,
        ErrorContext::new()
            .with_field_path(field)
            .with_source("preflight"),
    )
}
