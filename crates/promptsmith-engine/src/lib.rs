pub mod references;
pub mod render;
pub mod scene;
pub mod session;
pub mod variation;

use std::env;
use std::path::{Path, PathBuf};

use anyhow::Result;
use promptsmith_contracts::batch::BatchSettings;
use promptsmith_contracts::catalog::TraitCatalog;
use promptsmith_contracts::config::ComposerConfig;
use promptsmith_contracts::error::ComposeResult;
use promptsmith_contracts::random::RandomSource;
use promptsmith_contracts::request::{CompiledPrompt, ComposeRequest, RequestMode};
use promptsmith_contracts::style::ImageStyle;
use tracing::{debug, warn};

pub use promptsmith_contracts::weights::{
    add_negative_weight, format_token, merge_into_field, parse_token,
};
pub use references::{compile_reference_instructions, strength_descriptor};
pub use render::{append_suggestion, render_request_text};
pub use scene::{compile_scene, SceneText};
pub use session::ComposeSession;

pub const CATALOG_ENV: &str = "PROMPTSMITH_CATALOG";

/// Sequences scene compilation, weighted terms, reference instructions and
/// batch sampling over a read-only catalog.
///
/// Every method is a pure function of its arguments plus the injected random
/// source; a `Composer` can be shared freely across callers.
#[derive(Debug, Clone, Default)]
pub struct Composer {
    catalog: TraitCatalog,
    config: ComposerConfig,
}

impl Composer {
    pub fn new(catalog: TraitCatalog, config: ComposerConfig) -> Self {
        Self { catalog, config }
    }

    /// Loads the catalog from `catalog_path`, else from `PROMPTSMITH_CATALOG`,
    /// else uses the built-in tables. The config file is optional.
    pub fn from_sources(catalog_path: Option<&Path>, config_path: Option<&Path>) -> Result<Self> {
        let catalog_path = catalog_path
            .map(Path::to_path_buf)
            .or_else(|| non_empty_env(CATALOG_ENV).map(PathBuf::from));
        let catalog = match catalog_path {
            Some(path) => TraitCatalog::load(&path)?,
            None => TraitCatalog::builtin(),
        };
        let config = ComposerConfig::load_optional(config_path)?;
        // requests without a world resolve here
        catalog.world(&config.default_world)?;
        Ok(Self::new(catalog, config))
    }

    pub fn catalog(&self) -> &TraitCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &ComposerConfig {
        &self.config
    }

    pub fn world_for<'a>(&'a self, request: &'a ComposeRequest) -> &'a str {
        request
            .world
            .as_deref()
            .filter(|world| !world.trim().is_empty())
            .unwrap_or(&self.config.default_world)
    }

    /// Scene text, positive weight suffix and reference instructions become
    /// the positive prompt; negative weight tokens merge into the request's
    /// negative prompt without duplicates.
    pub fn compile(&self, request: &ComposeRequest) -> ComposeResult<CompiledPrompt> {
        let world = self.world_for(request);
        self.catalog.world(world)?;

        let missing = request.builder.missing();
        if !missing.is_empty() {
            warn!(
                world,
                missing = ?missing,
                "builder state has unset categories; rendering empty segments"
            );
        }

        let scene = compile_scene(
            &request.builder,
            &request.subjects,
            &request.weighted_terms,
            request.style,
        )?;
        let instructions = compile_reference_instructions(
            &request.references,
            self.config.high_intensity_threshold,
        )?;

        let mut positive_prompt = scene.text;
        positive_prompt.push_str(&instructions);
        let negative_prompt =
            merge_into_field(&request.negative_prompt, &scene.negative_weight_tokens);

        debug!(
            world,
            subjects = request.subjects.len(),
            weighted_terms = request.weighted_terms.len(),
            references = request.references.len(),
            chars = positive_prompt.len(),
            "compiled prompt"
        );
        Ok(CompiledPrompt {
            positive_prompt,
            negative_prompt,
        })
    }

    pub fn sample_variant<R: RandomSource + ?Sized>(
        &self,
        base: &str,
        settings: &BatchSettings,
        world: &str,
        rng: &mut R,
    ) -> ComposeResult<String> {
        let variant = variation::sample_variant(base, settings, world, &self.catalog, rng)?;
        debug!(world, flags = ?settings.enabled(), "sampled variant");
        Ok(variant)
    }

    pub fn sample_image_to_image_instruction<R: RandomSource + ?Sized>(
        &self,
        settings: &BatchSettings,
        world: &str,
        rng: &mut R,
    ) -> ComposeResult<String> {
        let instruction =
            variation::sample_image_to_image_instruction(settings, world, &self.catalog, rng)?;
        debug!(world, flags = ?settings.enabled(), "sampled image-to-image instruction");
        Ok(instruction)
    }

    /// `count` positive prompts for one request. A single item is the base
    /// prompt itself; larger batches draw independently per item.
    pub fn compile_batch<R: RandomSource + ?Sized>(
        &self,
        request: &ComposeRequest,
        settings: &BatchSettings,
        count: usize,
        rng: &mut R,
    ) -> ComposeResult<Vec<String>> {
        let compiled = self.compile(request)?;
        self.expand_batch(&compiled.positive_prompt, self.world_for(request), settings, count, rng)
    }

    /// Batch items for an already compiled base prompt.
    pub fn expand_batch<R: RandomSource + ?Sized>(
        &self,
        base: &str,
        world: &str,
        settings: &BatchSettings,
        count: usize,
        rng: &mut R,
    ) -> ComposeResult<Vec<String>> {
        if count <= 1 {
            return Ok(std::iter::repeat(base.to_string()).take(count).collect());
        }
        (0..count)
            .map(|_| self.sample_variant(base, settings, world, rng))
            .collect()
    }

    /// One line per unset builder category.
    pub fn warnings(&self, request: &ComposeRequest) -> Vec<String> {
        request
            .builder
            .missing()
            .into_iter()
            .map(|category| format!("unset category: {category}"))
            .collect()
    }

    pub fn render_request(&self, compiled: &CompiledPrompt, style: ImageStyle, mode: RequestMode) -> String {
        render_request_text(compiled, style, mode, self.config.append_style_suffix)
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use promptsmith_contracts::batch::{BatchSettings, VaryFlag};
    use promptsmith_contracts::builder::BuilderState;
    use promptsmith_contracts::catalog::{TraitCatalog, TraitCategory};
    use promptsmith_contracts::config::ComposerConfig;
    use promptsmith_contracts::error::{CatalogError, ComposeError, ValidationError};
    use promptsmith_contracts::random::{FixedRandom, SeededRandom};
    use promptsmith_contracts::references::{ReferenceImage, ReferenceUsage};
    use promptsmith_contracts::request::{ComposeRequest, RequestMode};
    use promptsmith_contracts::style::ImageStyle;
    use promptsmith_contracts::weights::{Scope, WeightedTerm};

    use super::Composer;

    fn request() -> anyhow::Result<ComposeRequest> {
        let catalog = TraitCatalog::builtin();
        Ok(ComposeRequest {
            builder: BuilderState::defaults(&catalog, "Modern Day")?,
            ..ComposeRequest::default()
        })
    }

    #[test]
    fn compile_merges_negative_tokens_idempotently() -> anyhow::Result<()> {
        let composer = Composer::default();
        let mut request = request()?;
        request.negative_prompt = "lowres".to_string();
        request.weighted_terms = vec![
            WeightedTerm::negative("blur", 1.5, Scope::Global),
            WeightedTerm::negative("hat", 0.8, Scope::Subject),
        ];
        let first = composer.compile(&request)?;
        assert_eq!(first.negative_prompt, "lowres, <blur:1.5>, Subject:<hat:0.8>");

        request.negative_prompt = first.negative_prompt.clone();
        let second = composer.compile(&request)?;
        assert_eq!(second.negative_prompt, first.negative_prompt);
        assert_eq!(second.positive_prompt, first.positive_prompt);
        Ok(())
    }

    #[test]
    fn compile_rejects_terms_that_would_split_the_negative_field() -> anyhow::Result<()> {
        let composer = Composer::default();
        let mut request = request()?;
        request.weighted_terms = vec![WeightedTerm::negative("hat, scarf", 1.0, Scope::Global)];
        assert!(matches!(
            composer.compile(&request),
            Err(ComposeError::Validation(ValidationError::ReservedCharacter { character: ',', .. }))
        ));

        request.weighted_terms = vec![
            WeightedTerm::negative("hat", 1.0, Scope::Global),
            WeightedTerm::negative("scarf", 1.0, Scope::Global),
        ];
        let first = composer.compile(&request)?;
        request.negative_prompt = first.negative_prompt.clone();
        let second = composer.compile(&request)?;
        assert_eq!(second.negative_prompt, "<hat:1.0>, <scarf:1.0>");
        assert_eq!(second.negative_prompt, first.negative_prompt);
        Ok(())
    }

    #[test]
    fn compile_appends_reference_instructions_after_weights() -> anyhow::Result<()> {
        let composer = Composer::default();
        let mut request = request()?;
        request.weighted_terms = vec![WeightedTerm::positive("fog", 1.2, Scope::Background)];
        request.references = vec![ReferenceImage::new("a.png", ReferenceUsage::Background, 0.5)];
        let compiled = composer.compile(&request)?;
        assert!(compiled.positive_prompt.contains(
            "Background:<fog:1.2> [REF_INSTRUCTION]: Use Reference Image 1 (Weight: 0.5) as the moderate influence source"
        ));
        Ok(())
    }

    #[test]
    fn compile_rejects_bad_intensity_and_unknown_world() -> anyhow::Result<()> {
        let composer = Composer::default();
        let mut request = request()?;
        request.references = vec![ReferenceImage::new("a.png", ReferenceUsage::Face, 0.05)];
        assert!(matches!(
            composer.compile(&request),
            Err(ComposeError::Validation(ValidationError::IntensityOutOfRange { index: 0, .. }))
        ));

        let mut request = self::request()?;
        request.world = Some("Atlantis".to_string());
        assert_eq!(
            composer.compile(&request),
            Err(ComposeError::Catalog(CatalogError::UnknownWorld("Atlantis".to_string())))
        );
        Ok(())
    }

    #[test]
    fn configured_threshold_changes_override() -> anyhow::Result<()> {
        let config = ComposerConfig {
            high_intensity_threshold: 0.95,
            ..ComposerConfig::default()
        };
        let composer = Composer::new(TraitCatalog::builtin(), config);
        let mut request = request()?;
        request.references = vec![ReferenceImage::new("a.png", ReferenceUsage::Character, 0.9)];
        let compiled = composer.compile(&request)?;
        assert!(!compiled.positive_prompt.contains("Strictly override"));
        Ok(())
    }

    #[test]
    fn compile_batch_single_item_is_base_prompt() -> anyhow::Result<()> {
        let composer = Composer::default();
        let request = request()?;
        let base = composer.compile(&request)?.positive_prompt;
        let mut rng = FixedRandom::constant(3);
        let batch = composer.compile_batch(&request, &BatchSettings::all(), 1, &mut rng)?;
        assert_eq!(batch, vec![base]);
        assert_eq!(rng.draws(), 0);
        assert!(composer
            .compile_batch(&request, &BatchSettings::all(), 0, &mut rng)?
            .is_empty());
        Ok(())
    }

    #[test]
    fn compile_batch_draws_per_item() -> anyhow::Result<()> {
        let composer = Composer::default();
        let request = request()?;
        let settings = BatchSettings::none().with(VaryFlag::Pose, true);
        let mut rng = FixedRandom::new(vec![0, 1, 2]);
        let batch = composer.compile_batch(&request, &settings, 3, &mut rng)?;
        assert_eq!(batch.len(), 3);
        let poses = composer.catalog().options(TraitCategory::Pose, "Modern Day")?;
        for (item, pose) in batch.iter().zip(poses) {
            assert!(item.ends_with(&format!(". Variation details: Pose: {pose}.")));
        }
        Ok(())
    }

    #[test]
    fn seeded_batches_are_reproducible() -> anyhow::Result<()> {
        let composer = Composer::default();
        let request = request()?;
        let settings = BatchSettings::default();
        let left = composer.compile_batch(&request, &settings, 4, &mut SeededRandom::new(11))?;
        let right = composer.compile_batch(&request, &settings, 4, &mut SeededRandom::new(11))?;
        assert_eq!(left, right);
        Ok(())
    }

    #[test]
    fn warnings_list_unset_categories() -> anyhow::Result<()> {
        let composer = Composer::default();
        assert!(composer.warnings(&request()?).is_empty());

        let sparse = ComposeRequest {
            builder: BuilderState::new().with(TraitCategory::Gender, "Female"),
            ..ComposeRequest::default()
        };
        let warnings = composer.warnings(&sparse);
        assert_eq!(warnings.len(), TraitCategory::ALL.len() - 1);
        assert!(warnings.contains(&"unset category: pose".to_string()));
        assert!(composer.compile(&sparse).is_ok());
        Ok(())
    }

    #[test]
    fn render_request_honours_style_suffix_config() -> anyhow::Result<()> {
        let request = request()?;
        let plain = Composer::new(
            TraitCatalog::builtin(),
            ComposerConfig {
                append_style_suffix: false,
                ..ComposerConfig::default()
            },
        );
        let compiled = plain.compile(&request)?;
        let text = plain.render_request(&compiled, ImageStyle::Anime, RequestMode::TextToImage);
        assert_eq!(text, compiled.positive_prompt);

        let styled = Composer::default();
        let text = styled.render_request(&compiled, ImageStyle::Anime, RequestMode::TextToImage);
        assert!(text.ends_with(". Art style: Anime. High quality, detailed."));
        Ok(())
    }

    #[test]
    fn from_sources_validates_default_world() -> anyhow::Result<()> {
        let temp = tempfile::tempdir()?;
        let config = temp.path().join("config.json");
        std::fs::write(&config, r#"{"default_world": "Atlantis"}"#)?;
        assert!(Composer::from_sources(None, Some(&config)).is_err());

        std::fs::write(&config, r#"{"default_world": "Historical"}"#)?;
        let composer = Composer::from_sources(None, Some(&config))?;
        assert_eq!(composer.world_for(&ComposeRequest::default()), "Historical");
        Ok(())
    }
}
