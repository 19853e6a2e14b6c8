//! Static option tables the builder draws from.
//!
//! Universal categories are world-independent. Role, clothing and environment
//! are world-scoped: each world owns its own list for those three only.

mod defaults;

use std::fmt;
use std::path::Path;

use anyhow::Context;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::subjects::SubjectKind;

/// World used when a request names none.
pub const DEFAULT_WORLD: &str = "Modern Day";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TraitCategory {
    Gender,
    Age,
    Body,
    SkinTone,
    SkinTexture,
    Tattoos,
    EyeColor,
    HairStyle,
    HairColor,
    FacialHair,
    FacialHairColor,
    FacialFeature,
    Emotion,
    Role,
    Clothing,
    Footwear,
    Environment,
    Lighting,
    Weather,
    Pose,
    Framing,
    Lens,
    Focus,
    Motion,
    ImageQuality,
}

impl TraitCategory {
    pub const ALL: [TraitCategory; 25] = [
        TraitCategory::Gender,
        TraitCategory::Age,
        TraitCategory::Body,
        TraitCategory::SkinTone,
        TraitCategory::SkinTexture,
        TraitCategory::Tattoos,
        TraitCategory::EyeColor,
        TraitCategory::HairStyle,
        TraitCategory::HairColor,
        TraitCategory::FacialHair,
        TraitCategory::FacialHairColor,
        TraitCategory::FacialFeature,
        TraitCategory::Emotion,
        TraitCategory::Role,
        TraitCategory::Clothing,
        TraitCategory::Footwear,
        TraitCategory::Environment,
        TraitCategory::Lighting,
        TraitCategory::Weather,
        TraitCategory::Pose,
        TraitCategory::Framing,
        TraitCategory::Lens,
        TraitCategory::Focus,
        TraitCategory::Motion,
        TraitCategory::ImageQuality,
    ];

    pub fn key(self) -> &'static str {
        match self {
            TraitCategory::Gender => "gender",
            TraitCategory::Age => "age",
            TraitCategory::Body => "body",
            TraitCategory::SkinTone => "skinTone",
            TraitCategory::SkinTexture => "skinTexture",
            TraitCategory::Tattoos => "tattoos",
            TraitCategory::EyeColor => "eyeColor",
            TraitCategory::HairStyle => "hairStyle",
            TraitCategory::HairColor => "hairColor",
            TraitCategory::FacialHair => "facialHair",
            TraitCategory::FacialHairColor => "facialHairColor",
            TraitCategory::FacialFeature => "facialFeature",
            TraitCategory::Emotion => "emotion",
            TraitCategory::Role => "role",
            TraitCategory::Clothing => "clothing",
            TraitCategory::Footwear => "footwear",
            TraitCategory::Environment => "environment",
            TraitCategory::Lighting => "lighting",
            TraitCategory::Weather => "weather",
            TraitCategory::Pose => "pose",
            TraitCategory::Framing => "framing",
            TraitCategory::Lens => "lens",
            TraitCategory::Focus => "focus",
            TraitCategory::Motion => "motion",
            TraitCategory::ImageQuality => "imageQuality",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.key() == key)
    }

    pub fn is_world_scoped(self) -> bool {
        matches!(
            self,
            TraitCategory::Role | TraitCategory::Clothing | TraitCategory::Environment
        )
    }
}

impl fmt::Display for TraitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldTables {
    pub roles: Vec<String>,
    pub clothing: Vec<String>,
    pub environments: Vec<String>,
}

impl WorldTables {
    pub fn options(&self, category: TraitCategory) -> Option<&[String]> {
        match category {
            TraitCategory::Role => Some(&self.roles),
            TraitCategory::Clothing => Some(&self.clothing),
            TraitCategory::Environment => Some(&self.environments),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickTemplate {
    pub label: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraitCatalog {
    universal: IndexMap<TraitCategory, Vec<String>>,
    worlds: IndexMap<String, WorldTables>,
    #[serde(default = "defaults::default_subjects")]
    subjects: IndexMap<SubjectKind, Vec<String>>,
    #[serde(default = "defaults::default_subject_actions")]
    subject_actions: Vec<String>,
    #[serde(default)]
    templates: Vec<QuickTemplate>,
}

impl Default for TraitCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TraitCatalog {
    pub fn builtin() -> Self {
        Self {
            universal: defaults::default_universal(),
            worlds: defaults::default_worlds(),
            subjects: defaults::default_subjects(),
            subject_actions: defaults::default_subject_actions(),
            templates: defaults::default_templates(),
        }
    }

    pub fn new(
        universal: IndexMap<TraitCategory, Vec<String>>,
        worlds: IndexMap<String, WorldTables>,
    ) -> Result<Self, CatalogError> {
        let catalog = Self {
            universal,
            worlds,
            subjects: defaults::default_subjects(),
            subject_actions: defaults::default_subject_actions(),
            templates: Vec::new(),
        };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_json_str(raw: &str) -> anyhow::Result<Self> {
        let catalog: TraitCatalog =
            serde_json::from_str(raw).context("trait catalog is not valid JSON")?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read trait catalog {}", path.display()))?;
        Self::from_json_str(&raw)
            .with_context(|| format!("invalid trait catalog {}", path.display()))
    }

    /// Every world must carry non-empty role/clothing/environment lists and
    /// every universal category must have at least one option.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for category in TraitCategory::ALL {
            if category.is_world_scoped() {
                continue;
            }
            if self
                .universal
                .get(&category)
                .map_or(true, |options| options.is_empty())
            {
                return Err(CatalogError::EmptyOptions {
                    category: category.key().to_string(),
                });
            }
        }
        for (name, tables) in &self.worlds {
            for (table, options) in [
                ("role", &tables.roles),
                ("clothing", &tables.clothing),
                ("environment", &tables.environments),
            ] {
                if options.is_empty() {
                    return Err(CatalogError::EmptyWorldTable {
                        world: name.clone(),
                        table: table.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn world(&self, name: &str) -> Result<&WorldTables, CatalogError> {
        self.worlds
            .get(name)
            .ok_or_else(|| CatalogError::UnknownWorld(name.to_string()))
    }

    pub fn world_names(&self) -> impl Iterator<Item = &str> {
        self.worlds.keys().map(String::as_str)
    }

    /// Options for `category`; world-scoped categories resolve through `world`.
    pub fn options(&self, category: TraitCategory, world: &str) -> Result<&[String], CatalogError> {
        let options = if category.is_world_scoped() {
            self.world(world)?.options(category).unwrap_or(&[])
        } else {
            self.universal
                .get(&category)
                .map(Vec::as_slice)
                .unwrap_or(&[])
        };
        if options.is_empty() {
            return Err(CatalogError::EmptyOptions {
                category: category.key().to_string(),
            });
        }
        Ok(options)
    }

    pub fn first_option(&self, category: TraitCategory, world: &str) -> Result<&str, CatalogError> {
        let options = self.options(category, world)?;
        Ok(options[0].as_str())
    }

    pub fn contains(&self, category: TraitCategory, world: &str, value: &str) -> bool {
        self.options(category, world)
            .map(|options| options.iter().any(|option| option == value))
            .unwrap_or(false)
    }

    pub fn subject_names(&self, kind: SubjectKind) -> &[String] {
        self.subjects.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn subject_actions(&self) -> &[String] {
        &self.subject_actions
    }

    pub fn templates(&self) -> &[QuickTemplate] {
        &self.templates
    }

    pub fn template(&self, label: &str) -> Option<&QuickTemplate> {
        self.templates.iter().find(|template| template.label == label)
    }
}
