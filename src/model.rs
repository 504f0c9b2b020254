use serde::{Deserialize, Serialize};

pub const UNTITLED_RECIPE: &str = "Untitled Recipe";
pub const CHEF_NOTE_TITLE: &str = "Note from Chef";

/// One recipe as structured by the parser, optionally carrying a photo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRecord {
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    /// Prose found before any ingredients or instructions section
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
    #[serde(default)]
    pub image_data: Option<ImageRecord>,
}

impl RecipeRecord {
    pub fn new(title: impl Into<String>) -> Self {
        RecipeRecord {
            title: title.into(),
            ingredients: Vec::new(),
            instructions: Vec::new(),
            notes: Vec::new(),
            image_data: None,
        }
    }

    /// The record used when a whole response is a message rather than recipes.
    pub fn chef_note(message: impl Into<String>) -> Self {
        RecipeRecord {
            instructions: vec![message.into()],
            ..RecipeRecord::new(CHEF_NOTE_TITLE)
        }
    }

    pub fn is_chef_note(&self) -> bool {
        self.title == CHEF_NOTE_TITLE && self.ingredients.is_empty()
    }
}

/// Photo metadata attached to a recipe by enrichment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRecord {
    pub id: String,
    pub urls: ImageUrls,
    pub alt_description: String,
    pub photographer: Photographer,
    pub photo_link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUrls {
    pub small: String,
    pub regular: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photographer {
    pub name: String,
    pub profile_link: String,
}
