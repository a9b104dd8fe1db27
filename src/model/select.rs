use serde::{Deserialize, Serialize};

/// A single suggestion returned by a search-as-you-type endpoint
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SelectOptionDto {
    pub id: i64,
    pub text: String,
}

/// Search endpoint response, `results` is `null` when nothing matched
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SelectResultsDto {
    #[serde(default)]
    pub results: Option<Vec<SelectOptionDto>>,
}

impl SelectResultsDto {
    pub fn into_options(self) -> Vec<SelectOptionDto> {
        self.results.unwrap_or_default()
    }
}
