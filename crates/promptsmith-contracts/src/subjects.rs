use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::TraitCatalog;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubjectKind {
    Animal,
    Creature,
    Object,
    Weapon,
    Vehicle,
    Person,
}

impl SubjectKind {
    pub const ALL: [SubjectKind; 6] = [
        SubjectKind::Animal,
        SubjectKind::Creature,
        SubjectKind::Object,
        SubjectKind::Weapon,
        SubjectKind::Vehicle,
        SubjectKind::Person,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SubjectKind::Animal => "Animal",
            SubjectKind::Creature => "Creature",
            SubjectKind::Object => "Object",
            SubjectKind::Weapon => "Weapon",
            SubjectKind::Vehicle => "Vehicle",
            SubjectKind::Person => "Person",
        }
    }
}

impl fmt::Display for SubjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An extra subject sharing the scene with the main character.
///
/// `name` is normally a catalog entry for `kind` but free text is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecondarySubject {
    #[serde(rename = "type")]
    pub kind: SubjectKind,
    pub name: String,
    pub action: String,
}

impl Default for SecondarySubject {
    fn default() -> Self {
        Self {
            kind: SubjectKind::Animal,
            name: "Wolf".to_string(),
            action: "Standing next to".to_string(),
        }
    }
}

impl SecondarySubject {
    pub fn new(kind: SubjectKind, name: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            action: action.into(),
        }
    }

    /// Switching kind resets the name to the first catalog entry for the new
    /// kind, or clears it when the catalog has none.
    pub fn set_kind(&mut self, kind: SubjectKind, catalog: &TraitCatalog) {
        self.kind = kind;
        self.name = catalog
            .subject_names(kind)
            .first()
            .cloned()
            .unwrap_or_default();
    }

    pub fn phrase(&self) -> String {
        format!(
            "{} a {}",
            self.action.to_lowercase(),
            self.name.to_lowercase()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{SecondarySubject, SubjectKind};
    use crate::catalog::TraitCatalog;

    #[test]
    fn default_subject_is_wolf_standing_next_to() {
        let subject = SecondarySubject::default();
        assert_eq!(subject.kind, SubjectKind::Animal);
        assert_eq!(subject.phrase(), "standing next to a wolf");
    }

    #[test]
    fn changing_kind_resets_name_from_catalog() {
        let catalog = TraitCatalog::builtin();
        let mut subject = SecondarySubject::new(SubjectKind::Animal, "Owl", "Holding");
        subject.set_kind(SubjectKind::Weapon, &catalog);
        assert_eq!(subject.name, "Sword");
        assert_eq!(subject.action, "Holding");
    }

    #[test]
    fn subject_serializes_kind_as_type() -> anyhow::Result<()> {
        let subject = SecondarySubject::new(SubjectKind::Creature, "Dragon", "Riding");
        let value = serde_json::to_value(&subject)?;
        assert_eq!(value["type"], serde_json::json!("Creature"));
        Ok(())
    }
}
