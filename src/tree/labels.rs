//! Gender-aware display labels for relationship types
//!
//! A total mapping consumed by the rendering layer. Uncle/Aunt/Nephew/
//! Niece are already gendered terms and ignore the subject's gender;
//! everything else picks a variant, falling back to the neutral form for
//! unknown or other genders.

use crate::graph::{Gender, RelationshipType};

/// Display label for `kind`, as worn by a person of `gender`
pub fn display_label(kind: RelationshipType, gender: Gender) -> &'static str {
    use Gender::{Female, Male};
    use RelationshipType::*;

    match (kind, gender) {
        (Parent, Male) => "Father",
        (Parent, Female) => "Mother",
        (Parent, _) => "Parent",

        (Child, Male) => "Son",
        (Child, Female) => "Daughter",
        (Child, _) => "Child",

        (Spouse, Male) => "Husband",
        (Spouse, Female) => "Wife",
        (Spouse, _) => "Spouse",

        (Sibling, Male) => "Brother",
        (Sibling, Female) => "Sister",
        (Sibling, _) => "Sibling",

        (Grandparent, Male) => "Grandfather",
        (Grandparent, Female) => "Grandmother",
        (Grandparent, _) => "Grandparent",

        (Grandchild, Male) => "Grandson",
        (Grandchild, Female) => "Granddaughter",
        (Grandchild, _) => "Grandchild",

        (Uncle, _) => "Uncle",
        (Aunt, _) => "Aunt",
        (Nephew, _) => "Nephew",
        (Niece, _) => "Niece",

        (Cousin, Male) => "Male cousin",
        (Cousin, Female) => "Female cousin",
        (Cousin, _) => "Cousin",

        (GreatGrandparent, Male) => "Great-grandfather",
        (GreatGrandparent, Female) => "Great-grandmother",
        (GreatGrandparent, _) => "Great-grandparent",

        (GreatGrandchild, Male) => "Great-grandson",
        (GreatGrandchild, Female) => "Great-granddaughter",
        (GreatGrandchild, _) => "Great-grandchild",

        (StepParent, Male) => "Stepfather",
        (StepParent, Female) => "Stepmother",
        (StepParent, _) => "Step-parent",

        (StepChild, Male) => "Stepson",
        (StepChild, Female) => "Stepdaughter",
        (StepChild, _) => "Stepchild",

        (StepSibling, Male) => "Stepbrother",
        (StepSibling, Female) => "Stepsister",
        (StepSibling, _) => "Step-sibling",

        (HalfSibling, Male) => "Half-brother",
        (HalfSibling, Female) => "Half-sister",
        (HalfSibling, _) => "Half-sibling",

        (Other, _) => "Relative",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::ALL_RELATIONSHIP_TYPES;

    #[test]
    fn test_gendered_variants() {
        assert_eq!(display_label(RelationshipType::Parent, Gender::Male), "Father");
        assert_eq!(display_label(RelationshipType::Parent, Gender::Female), "Mother");
        assert_eq!(display_label(RelationshipType::Spouse, Gender::Female), "Wife");
        assert_eq!(
            display_label(RelationshipType::GreatGrandparent, Gender::Male),
            "Great-grandfather"
        );
        assert_eq!(
            display_label(RelationshipType::HalfSibling, Gender::Female),
            "Half-sister"
        );
    }

    #[test]
    fn test_neutral_fallbacks() {
        assert_eq!(display_label(RelationshipType::Parent, Gender::Unknown), "Parent");
        assert_eq!(display_label(RelationshipType::Child, Gender::Other), "Child");
        assert_eq!(display_label(RelationshipType::Other, Gender::Male), "Relative");
    }

    #[test]
    fn test_inherently_gendered_terms_ignore_subject_gender() {
        for gender in [Gender::Unknown, Gender::Male, Gender::Female, Gender::Other] {
            assert_eq!(display_label(RelationshipType::Uncle, gender), "Uncle");
            assert_eq!(display_label(RelationshipType::Aunt, gender), "Aunt");
            assert_eq!(display_label(RelationshipType::Nephew, gender), "Nephew");
            assert_eq!(display_label(RelationshipType::Niece, gender), "Niece");
        }
    }

    #[test]
    fn test_label_table_is_total() {
        for kind in ALL_RELATIONSHIP_TYPES {
            for gender in [Gender::Unknown, Gender::Male, Gender::Female, Gender::Other] {
                assert!(!display_label(kind, gender).is_empty());
            }
        }
    }
}
