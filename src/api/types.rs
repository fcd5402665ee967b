//! Request and response wire types
//!
//! Field names and types are the external contract: the estimation service
//! rejects payloads whose names or types drift. Room-count and flag fields
//! are serialized as strings; everything else keeps its natural type.

use crate::estimate::ValidatedForm;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The JSON body POSTed to the estimation endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateRequest {
    pub area_value: f64,
    pub unit: String,
    pub marla_standard: String,
    pub quality: String,
    pub city: String,
    pub overall_length: String,
    pub overall_width: String,
    pub bedrooms: String,
    pub bathrooms: String,
    pub kitchen_size: String,
    pub living_rooms: String,
    pub drawing_dining: String,
    pub garage: String,
    pub floors: String,
    pub style: String,
}

impl From<&ValidatedForm> for EstimateRequest {
    fn from(form: &ValidatedForm) -> Self {
        Self {
            area_value: form.area_value,
            unit: form.unit.as_str().to_string(),
            marla_standard: form.marla_standard.as_str().to_string(),
            quality: form.quality.as_str().to_string(),
            city: form.city.as_str().to_string(),
            overall_length: form.overall_length.clone(),
            overall_width: form.overall_width.clone(),
            bedrooms: form.bedrooms.to_string(),
            bathrooms: form.bathrooms.to_string(),
            kitchen_size: form.kitchen_size.to_string(),
            living_rooms: form.living_rooms.to_string(),
            drawing_dining: form.drawing_dining.to_string(),
            garage: form.garage.clone(),
            floors: form.floors.as_str().to_string(),
            style: form.style.clone(),
        }
    }
}

/// Cost breakdown returned by the estimator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostSummary {
    pub covered_sqft: f64,
    pub grey_cost: f64,
    pub finishing_cost: f64,
    pub total_cost: f64,
    pub city_factor: f64,
}

/// A design concept card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignConcept {
    pub name: String,
    pub summary: String,
    pub best_for: String,
    pub note: String,
}

/// Retriever hit with up to two design-image URLs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrieverResult {
    pub content: String,
    pub metadata: RetrieverMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrieverMetadata {
    #[serde(rename = "URL_1", default)]
    pub url_1: Option<String>,
    #[serde(rename = "URL_2", default)]
    pub url_2: Option<String>,
}

/// The `result` object of a successful response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateResult {
    pub cost: CostSummary,
    pub materials: BTreeMap<String, f64>,
    pub plan: BTreeMap<String, serde_json::Value>,
    pub designs: Vec<DesignConcept>,
}

/// A successful estimation response.
///
/// The service has shipped two image shapes: `retriever_results` entries
/// with `metadata.URL_1`/`URL_2`, and plain top-level `image1`/`image2`.
/// Both are accepted; `design_images` selects on presence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateResponse {
    pub result: EstimateResult,
    #[serde(default)]
    pub retriever_results: Vec<RetrieverResult>,
    #[serde(default)]
    pub image1: Option<String>,
    #[serde(default)]
    pub image2: Option<String>,
}

/// A design image to display: caption plus URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignImage {
    pub caption: String,
    pub url: String,
}

impl EstimateResponse {
    /// Collect design-image URLs from whichever response shape is present.
    /// Non-empty `retriever_results` win over the direct image fields.
    pub fn design_images(&self) -> Vec<DesignImage> {
        let mut images = Vec::new();
        if !self.retriever_results.is_empty() {
            for result in &self.retriever_results {
                if let Some(url) = &result.metadata.url_1 {
                    images.push(DesignImage {
                        caption: result.content.clone(),
                        url: url.clone(),
                    });
                }
                if let Some(url) = &result.metadata.url_2 {
                    images.push(DesignImage {
                        caption: result.content.clone(),
                        url: url.clone(),
                    });
                }
            }
            return images;
        }
        if let Some(url) = &self.image1 {
            images.push(DesignImage {
                caption: "Design 1".to_string(),
                url: url.clone(),
            });
        }
        if let Some(url) = &self.image2 {
            images.push(DesignImage {
                caption: "Design 2".to_string(),
                url: url.clone(),
            });
        }
        images
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimate::{validate, City, Floors, Quality};
    use crate::state::EstimateForm;
    use pretty_assertions::assert_eq;

    fn validated_default() -> ValidatedForm {
        validate(&EstimateForm::new()).unwrap()
    }

    #[test]
    fn test_room_counts_serialize_as_strings() {
        let request = EstimateRequest::from(&validated_default());
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["bedrooms"], "3");
        assert_eq!(json["bathrooms"], "2");
        assert_eq!(json["kitchen_size"], "1");
        assert_eq!(json["living_rooms"], "1");
        assert_eq!(json["drawing_dining"], "0");
        // area stays numeric
        assert_eq!(json["area_value"], 5.0);
    }

    #[test]
    fn test_request_field_names_match_contract() {
        let request = EstimateRequest::from(&validated_default());
        let json = serde_json::to_value(&request).unwrap();
        let object = json.as_object().unwrap();
        for field in [
            "area_value",
            "unit",
            "marla_standard",
            "quality",
            "city",
            "overall_length",
            "overall_width",
            "bedrooms",
            "bathrooms",
            "kitchen_size",
            "living_rooms",
            "drawing_dining",
            "garage",
            "floors",
            "style",
        ] {
            assert!(object.contains_key(field), "missing field {field}");
        }
        assert_eq!(object.len(), 15);
    }

    #[test]
    fn test_request_enum_wire_values() {
        let mut form = EstimateForm::new();
        form.city = City::Islamabad;
        form.quality = Quality::Premium;
        form.floors = Floors::Triple;
        let validated = validate(&form).unwrap();
        let request = EstimateRequest::from(&validated);
        assert_eq!(request.unit, "marla");
        assert_eq!(request.marla_standard, "225 (Govt)");
        assert_eq!(request.quality, "premium");
        assert_eq!(request.city, "Islamabad");
        assert_eq!(request.floors, "triple story");
    }

    fn response_json(extra: &str) -> String {
        format!(
            r#"{{
                "result": {{
                    "cost": {{
                        "covered_sqft": 1125.0,
                        "grey_cost": 2500000.0,
                        "finishing_cost": 1800000.0,
                        "total_cost": 4300000.0,
                        "city_factor": 0.97
                    }},
                    "materials": {{
                        "Bricks (units)": 45000,
                        "Cement (50kg bags)": 520
                    }},
                    "plan": {{
                        "Bedrooms": "2 x 150 sqft",
                        "Kitchen": 80
                    }},
                    "designs": [
                        {{
                            "name": "Modern Minimal",
                            "summary": "Clean lines",
                            "best_for": "small plots",
                            "note": "south facing"
                        }}
                    ]
                }}{extra}
            }}"#
        )
    }

    #[test]
    fn test_response_parses_retriever_results_shape() {
        let json = response_json(
            r#", "retriever_results": [{
                "content": "5 marla modern elevation",
                "metadata": {"URL_1": "https://img.example/a.png", "URL_2": "https://img.example/b.png"}
            }]"#,
        );
        let response: EstimateResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(response.result.cost.total_cost, 4300000.0);
        assert_eq!(response.result.designs[0].name, "Modern Minimal");
        let images = response.design_images();
        assert_eq!(images.len(), 2);
        assert_eq!(images[0].url, "https://img.example/a.png");
        assert_eq!(images[0].caption, "5 marla modern elevation");
        assert_eq!(images[1].url, "https://img.example/b.png");
    }

    #[test]
    fn test_response_parses_direct_image_shape() {
        let json = response_json(
            r#", "image1": "https://img.example/1.png", "image2": "https://img.example/2.png""#,
        );
        let response: EstimateResponse = serde_json::from_str(&json).unwrap();
        let images = response.design_images();
        assert_eq!(images.len(), 2);
        assert_eq!(images[0].caption, "Design 1");
        assert_eq!(images[0].url, "https://img.example/1.png");
    }

    #[test]
    fn test_response_without_images_parses() {
        let response: EstimateResponse = serde_json::from_str(&response_json("")).unwrap();
        assert!(response.design_images().is_empty());
        assert_eq!(
            response.result.materials.get("Cement (50kg bags)"),
            Some(&520.0)
        );
    }

    #[test]
    fn test_retriever_results_win_over_direct_images() {
        let json = response_json(
            r#", "image1": "https://img.example/direct.png",
               "retriever_results": [{
                   "content": "plan",
                   "metadata": {"URL_1": "https://img.example/retr.png"}
               }]"#,
        );
        let response: EstimateResponse = serde_json::from_str(&json).unwrap();
        let images = response.design_images();
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].url, "https://img.example/retr.png");
    }

    #[test]
    fn test_missing_result_is_a_parse_error() {
        let err = serde_json::from_str::<EstimateResponse>(r#"{"unexpected": true}"#);
        assert!(err.is_err());
    }
}
