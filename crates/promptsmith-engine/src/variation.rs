//! Batch variation sampling.
//!
//! Both modes walk the vary flags in [`VaryFlag::ALL`] order and draw one
//! option per category through the injected [`RandomSource`], so a pinned
//! source yields exact, reproducible strings.

use promptsmith_contracts::batch::{BatchSettings, VaryFlag};
use promptsmith_contracts::catalog::{TraitCatalog, TraitCategory};
use promptsmith_contracts::error::CatalogError;
use promptsmith_contracts::random::RandomSource;

/// One uniformly drawn option for `category`. An empty table is an error,
/// never a silent skip.
pub fn draw<'a, R: RandomSource + ?Sized>(
    catalog: &'a TraitCatalog,
    category: TraitCategory,
    world: &str,
    rng: &mut R,
) -> Result<&'a str, CatalogError> {
    let options = catalog.options(category, world)?;
    let index = rng.pick_index(options.len()).min(options.len() - 1);
    Ok(options[index].as_str())
}

/// The sampled value for one flag; multi-category flags join with a space.
pub fn draw_flag<R: RandomSource + ?Sized>(
    catalog: &TraitCatalog,
    flag: VaryFlag,
    world: &str,
    rng: &mut R,
) -> Result<String, CatalogError> {
    let mut parts = Vec::with_capacity(flag.categories().len());
    for category in flag.categories() {
        parts.push(draw(catalog, *category, world, rng)?);
    }
    Ok(parts.join(" "))
}

/// Generation mode: `"{base}. Variation details: {Label}: {value}. ..."`.
/// Returns `base` unchanged when no flag is enabled.
pub fn sample_variant<R: RandomSource + ?Sized>(
    base: &str,
    settings: &BatchSettings,
    world: &str,
    catalog: &TraitCatalog,
    rng: &mut R,
) -> Result<String, CatalogError> {
    let mut changes = Vec::new();
    for flag in settings.enabled() {
        let value = draw_flag(catalog, flag, world, rng)?;
        changes.push(format!("{}: {value}", flag.label()));
    }
    if changes.is_empty() {
        return Ok(base.to_string());
    }
    Ok(format!("{base}. Variation details: {}.", changes.join(". ")))
}

/// Image-to-image mode: an explicit `Change ... to ...` per enabled flag.
/// Disabled outfit and location are pinned with a `Keep ...` instruction;
/// every other disabled flag is omitted.
pub fn sample_image_to_image_instruction<R: RandomSource + ?Sized>(
    settings: &BatchSettings,
    world: &str,
    catalog: &TraitCatalog,
    rng: &mut R,
) -> Result<String, CatalogError> {
    let mut instructions = Vec::new();
    for flag in VaryFlag::ALL {
        if settings.is_enabled(flag) {
            let value = draw_flag(catalog, flag, world, rng)?;
            instructions.push(format!("Change {} to {value}.", flag.attribute()));
        } else if flag.is_consistency_sensitive() {
            instructions.push(format!(
                "Keep {} EXACTLY the same as original.",
                flag.attribute()
            ));
        }
    }
    Ok(instructions.join(" "))
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;
    use promptsmith_contracts::batch::{BatchSettings, VaryFlag};
    use promptsmith_contracts::catalog::{TraitCatalog, TraitCategory, WorldTables};
    use promptsmith_contracts::error::CatalogError;
    use promptsmith_contracts::random::{FixedRandom, SeededRandom};

    use super::{draw, sample_image_to_image_instruction, sample_variant};

    const WORLD: &str = "Modern Day";

    fn tiny_catalog() -> anyhow::Result<TraitCatalog> {
        let mut universal = IndexMap::new();
        for category in TraitCategory::ALL {
            if category.is_world_scoped() {
                continue;
            }
            universal.insert(
                category,
                vec![format!("{category} A"), format!("{category} B")],
            );
        }
        let mut worlds = IndexMap::new();
        worlds.insert(
            WORLD.to_string(),
            WorldTables {
                roles: vec!["Doctor".to_string()],
                clothing: vec!["Business Suit".to_string(), "Scrubs".to_string()],
                environments: vec!["Modern Office".to_string(), "Rooftop".to_string()],
            },
        );
        Ok(TraitCatalog::new(universal, worlds)?)
    }

    #[test]
    fn no_flags_returns_base_unchanged() -> anyhow::Result<()> {
        let catalog = tiny_catalog()?;
        let mut rng = FixedRandom::constant(1);
        let base = "A portrait. Quality: 8K.";
        let out = sample_variant(base, &BatchSettings::none(), WORLD, &catalog, &mut rng)?;
        assert_eq!(out, base);
        assert_eq!(rng.draws(), 0);
        Ok(())
    }

    #[test]
    fn generation_mode_with_pinned_draws() -> anyhow::Result<()> {
        let catalog = tiny_catalog()?;
        let settings = BatchSettings::none()
            .with(VaryFlag::Outfit, true)
            .with(VaryFlag::Pose, true)
            .with(VaryFlag::Hair, true);
        let mut rng = FixedRandom::new(vec![1, 0, 1, 0]);
        let out = sample_variant("Base", &settings, WORLD, &catalog, &mut rng)?;
        assert_eq!(
            out,
            "Base. Variation details: Attire: Scrubs. Pose: pose A. Hair: hairStyle B hairColor A."
        );
        assert_eq!(rng.draws(), 4);
        Ok(())
    }

    #[test]
    fn image_to_image_pins_outfit_when_not_varied() -> anyhow::Result<()> {
        let catalog = tiny_catalog()?;
        let settings = BatchSettings::none().with(VaryFlag::Location, true);
        let mut rng = FixedRandom::constant(1);
        let out = sample_image_to_image_instruction(&settings, WORLD, &catalog, &mut rng)?;
        assert_eq!(
            out,
            "Keep outfit and clothing EXACTLY the same as original. Change location to Rooftop."
        );
        assert!(!out.contains("Keep location"));
        assert!(!out.contains("Change outfit"));
        Ok(())
    }

    #[test]
    fn image_to_image_omits_other_disabled_flags() -> anyhow::Result<()> {
        let catalog = tiny_catalog()?;
        let settings = BatchSettings::all().with(VaryFlag::Weather, false);
        let mut rng = FixedRandom::constant(0);
        let out = sample_image_to_image_instruction(&settings, WORLD, &catalog, &mut rng)?;
        assert!(out.starts_with("Change outfit and clothing to Business Suit. Change location to Modern Office."));
        assert!(!out.contains("weather"));
        assert!(!out.contains("Keep"));
        assert!(out.contains("Change facial expression to emotion A."));
        Ok(())
    }

    #[test]
    fn same_seed_reproduces_samples() -> anyhow::Result<()> {
        let catalog = TraitCatalog::builtin();
        let settings = BatchSettings::all();
        let left = sample_variant("Base", &settings, WORLD, &catalog, &mut SeededRandom::new(7))?;
        let right = sample_variant("Base", &settings, WORLD, &catalog, &mut SeededRandom::new(7))?;
        assert_eq!(left, right);
        assert!(left.starts_with("Base. Variation details: Attire: "));
        Ok(())
    }

    #[test]
    fn unknown_world_is_a_catalog_error() -> anyhow::Result<()> {
        let catalog = tiny_catalog()?;
        let mut rng = FixedRandom::constant(0);
        assert_eq!(
            draw(&catalog, TraitCategory::Clothing, "Atlantis", &mut rng),
            Err(CatalogError::UnknownWorld("Atlantis".to_string()))
        );
        let result = sample_variant("Base", &BatchSettings::default(), "Atlantis", &catalog, &mut rng);
        assert!(result.is_err());
        Ok(())
    }
}
