//! Crop reference data: growth phases, soil profiles and the in-memory catalog

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{IrrigationError, IrrigationResult};
use crate::types::ValueRange;
use crate::validation::validate_profile;

/// A stage of the crop's lifecycle with its own water needs
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GrowthPhase {
    #[serde(rename = "phase")]
    pub name: String,
    /// Days the phase normally lasts
    pub duration_days: ValueRange,
    /// Meters of water applied per irrigation event
    pub irrigation_depth_m: ValueRange,
    /// Days between irrigation events
    pub irrigation_interval_days: ValueRange,
    /// Desired volumetric soil moisture (m³/m³)
    #[serde(rename = "optimal_moisture_m3_per_m3")]
    pub optimal_moisture: ValueRange,
}

/// Growth phases and water-holding capacity for one crop grown in one soil type
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CropSoilProfile {
    pub crop_name: String,
    pub soil_type: String,
    /// Chronological; walked cumulatively by the phase resolver
    pub phases: Vec<GrowthPhase>,
    /// Volumetric water-holding capacity of the soil (m³/m³)
    pub moisture_capacity: ValueRange,
}

// ============================================================================
// Reference dataset file format
// ============================================================================

/// Root of `crop_data.json`
#[derive(Debug, Clone, Deserialize)]
pub struct CropDataset {
    pub crops: Vec<CropRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CropRecord {
    pub crop_name: String,
    pub soil_types: Vec<SoilRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SoilRecord {
    pub soil_type: String,
    pub moisture_holding_capacity_m3_per_m3: ValueRange,
    #[serde(default)]
    pub growth_phases: Vec<GrowthPhase>,
}

// ============================================================================
// Catalog
// ============================================================================

/// Read-only lookup of crop/soil profiles, built once at startup
#[derive(Debug, Clone, Default)]
pub struct CropCatalog {
    crops: BTreeMap<String, BTreeMap<String, CropSoilProfile>>,
}

/// Summary of one catalog entry for listing endpoints
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CropSoilSummary {
    pub crop_name: String,
    pub soil_type: String,
    pub phases: Vec<String>,
}

impl CropCatalog {
    /// Parse and validate the JSON reference dataset
    pub fn from_json_str(json: &str) -> IrrigationResult<Self> {
        let dataset: CropDataset =
            serde_json::from_str(json).map_err(|e| IrrigationError::Dataset(e.to_string()))?;
        Self::from_dataset(dataset)
    }

    /// Build the catalog, rejecting any profile the calculation cannot use
    pub fn from_dataset(dataset: CropDataset) -> IrrigationResult<Self> {
        let mut catalog = Self::default();

        for crop in dataset.crops {
            for soil in crop.soil_types {
                let profile = CropSoilProfile {
                    crop_name: crop.crop_name.clone(),
                    soil_type: soil.soil_type,
                    phases: soil.growth_phases,
                    moisture_capacity: soil.moisture_holding_capacity_m3_per_m3,
                };
                catalog.insert(profile)?;
            }
        }

        Ok(catalog)
    }

    fn insert(&mut self, profile: CropSoilProfile) -> IrrigationResult<()> {
        validate_profile(&profile).map_err(|reason| {
            IrrigationError::configuration(format!(
                "{}/{}: {}",
                profile.crop_name, profile.soil_type, reason
            ))
        })?;

        let soils = self.crops.entry(profile.crop_name.clone()).or_default();
        if soils.contains_key(&profile.soil_type) {
            return Err(IrrigationError::configuration(format!(
                "duplicate crop/soil combination {}/{}",
                profile.crop_name, profile.soil_type
            )));
        }
        soils.insert(profile.soil_type.clone(), profile);
        Ok(())
    }

    /// Exact, case-sensitive lookup
    pub fn get(&self, crop_name: &str, soil_type: &str) -> Option<&CropSoilProfile> {
        self.crops.get(crop_name)?.get(soil_type)
    }

    /// Number of crop/soil profiles loaded
    pub fn len(&self) -> usize {
        self.crops.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn profiles(&self) -> impl Iterator<Item = &CropSoilProfile> {
        self.crops.values().flat_map(BTreeMap::values)
    }

    pub fn summaries(&self) -> Vec<CropSoilSummary> {
        self.profiles()
            .map(|profile| CropSoilSummary {
                crop_name: profile.crop_name.clone(),
                soil_type: profile.soil_type.clone(),
                phases: profile.phases.iter().map(|p| p.name.clone()).collect(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATASET: &str = r#"{
        "crops": [
            {
                "crop_name": "Wheat",
                "soil_types": [
                    {
                        "soil_type": "Black",
                        "moisture_holding_capacity_m3_per_m3": { "min": 0.4, "max": 0.6 },
                        "growth_phases": [
                            {
                                "phase": "Germination",
                                "duration_days": { "min": 10, "max": 20 },
                                "irrigation_depth_m": { "min": 0.04, "max": 0.06 },
                                "irrigation_interval_days": { "min": 6, "max": 8 },
                                "optimal_moisture_m3_per_m3": { "min": 0.3, "max": 0.4 }
                            }
                        ]
                    },
                    {
                        "soil_type": "Sandy",
                        "moisture_holding_capacity_m3_per_m3": { "min": 0.1, "max": 0.2 },
                        "growth_phases": [
                            {
                                "phase": "Germination",
                                "duration_days": { "min": 10, "max": 20 },
                                "irrigation_depth_m": { "min": 0.03, "max": 0.05 },
                                "irrigation_interval_days": { "min": 3, "max": 5 },
                                "optimal_moisture_m3_per_m3": { "min": 0.15, "max": 0.2 }
                            }
                        ]
                    }
                ]
            }
        ]
    }"#;

    #[test]
    fn test_load_dataset() {
        let catalog = CropCatalog::from_json_str(DATASET).unwrap();
        assert_eq!(catalog.len(), 2);

        let profile = catalog.get("Wheat", "Black").unwrap();
        assert_eq!(profile.phases.len(), 1);
        assert_eq!(profile.phases[0].name, "Germination");
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let catalog = CropCatalog::from_json_str(DATASET).unwrap();
        assert!(catalog.get("wheat", "Black").is_none());
        assert!(catalog.get("Wheat", "black").is_none());
        assert!(catalog.get("Wheat ", "Black").is_none());
    }

    #[test]
    fn test_empty_phase_list_rejected() {
        let dataset = r#"{
            "crops": [{
                "crop_name": "Rice",
                "soil_types": [{
                    "soil_type": "Clay",
                    "moisture_holding_capacity_m3_per_m3": { "min": 0.4, "max": 0.5 },
                    "growth_phases": []
                }]
            }]
        }"#;
        let err = CropCatalog::from_json_str(dataset).unwrap_err();
        assert!(matches!(err, IrrigationError::Configuration(_)));
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let dataset = DATASET.replace("\"Sandy\"", "\"Black\"");
        let err = CropCatalog::from_json_str(&dataset).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = CropCatalog::from_json_str("{\"crops\": 5}").unwrap_err();
        assert!(matches!(err, IrrigationError::Dataset(_)));
    }

    #[test]
    fn test_summaries_list_phase_names() {
        let catalog = CropCatalog::from_json_str(DATASET).unwrap();
        let summaries = catalog.summaries();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].soil_type, "Black");
        assert_eq!(summaries[0].phases, vec!["Germination".to_string()]);
    }
}
