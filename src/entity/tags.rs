//! Descriptive combatant tags
//!
//! Tags are queried as set membership. Families that are expected to hold
//! at most one member (physique, agility) are resolved through ordered
//! tables where the first present tag wins.

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tag {
    // Agility
    Agile,
    Clumsy,

    // Physique
    Anemic,
    Feeble,
    Puny,
    Strong,
    Brawny,
    Vigorous,
    Mighty,

    // Nature
    /// No discrete limb armor; every hit is mitigated by body armor
    Beast,
    /// Narrated as destroyed rather than killed
    Unliving,

    // Defensive restrictions
    CannotDodge,
    CannotBlock,
    CannotParry,

    // Immunities
    ImmunityBleed,
    ImmunityPoison,
}

/// Set of tags on a combatant
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagSet {
    tags: AHashSet<Tag>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has(&self, tag: Tag) -> bool {
        self.tags.contains(&tag)
    }

    pub fn insert(&mut self, tag: Tag) -> bool {
        self.tags.insert(tag)
    }

    /// Value of the first row whose tag is present
    pub fn first_match(&self, table: &[(Tag, f32)]) -> Option<f32> {
        table
            .iter()
            .find(|(tag, _)| self.has(*tag))
            .map(|(_, value)| *value)
    }
}

impl FromIterator<Tag> for TagSet {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        Self {
            tags: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: [(Tag, f32); 3] = [(Tag::Anemic, 0.5), (Tag::Strong, 1.1), (Tag::Mighty, 2.0)];

    #[test]
    fn test_membership() {
        let mut tags = TagSet::new();
        assert!(!tags.has(Tag::Agile));
        assert!(tags.insert(Tag::Agile));
        assert!(!tags.insert(Tag::Agile));
        assert!(tags.has(Tag::Agile));
        assert!(!tags.has(Tag::Clumsy));
    }

    #[test]
    fn test_first_match_follows_table_order() {
        let tags: TagSet = [Tag::Mighty, Tag::Anemic].into_iter().collect();
        assert_eq!(tags.first_match(&TABLE), Some(0.5));

        let tags: TagSet = [Tag::Mighty, Tag::Strong].into_iter().collect();
        assert_eq!(tags.first_match(&TABLE), Some(1.1));
    }

    #[test]
    fn test_first_match_none_present() {
        let tags: TagSet = [Tag::Beast].into_iter().collect();
        assert_eq!(tags.first_match(&TABLE), None);
    }
}
