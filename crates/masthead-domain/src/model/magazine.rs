//! Magazine - A named, categorized publication
//!
//! Magazine is an Entity. Its name and category may change over time,
//! but every change is re-validated and the identity stays the same.

use core::ops::RangeInclusive;

use crate::error::ValidationError;

/// Allowed magazine name length, in characters
pub const MAGAZINE_NAME_LEN: RangeInclusive<usize> = 2..=16;

/// Unique identifier for a Magazine
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MagazineId(String);

impl MagazineId {
    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        Self(format!("magazine-{}", uuid::Uuid::new_v4()))
    }
}

impl core::fmt::Display for MagazineId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Magazine - the publication side of an Article
#[derive(Debug, Clone)]
pub struct Magazine {
    id: MagazineId,
    name: String,
    category: String,
}

impl Magazine {
    /// Create a new Magazine with a generated id
    ///
    /// The magazine is not registered yet; see `Newsroom::create_magazine`.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let category = category.into();
        validate_name(&name)?;
        validate_category(&category)?;
        Ok(Self {
            id: MagazineId::generate(),
            name,
            category,
        })
    }

    // ========== Getters ==========

    pub fn id(&self) -> &MagazineId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    // ========== Mutations ==========

    /// Rename the magazine; the old name is kept on failure
    ///
    /// Registered magazines are renamed through `Newsroom::rename_magazine`.
    pub(crate) fn set_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        let name = name.into();
        validate_name(&name)?;
        self.name = name;
        Ok(())
    }

    /// Change the category; the old category is kept on failure
    pub(crate) fn set_category(&mut self, category: impl Into<String>) -> Result<(), ValidationError> {
        let category = category.into();
        validate_category(&category)?;
        self.category = category;
        Ok(())
    }
}

impl PartialEq for Magazine {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Magazine {}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    let len = name.chars().count();
    if !MAGAZINE_NAME_LEN.contains(&len) {
        return Err(ValidationError::MagazineNameLength { len });
    }
    Ok(())
}

fn validate_category(category: &str) -> Result<(), ValidationError> {
    if category.trim().is_empty() {
        return Err(ValidationError::EmptyCategory);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magazine_creation() {
        let magazine_1 = Magazine::new("Vogue", "Fashion").unwrap();
        let magazine_2 = Magazine::new("AD", "Architecture").unwrap();

        assert_eq!(magazine_1.name(), "Vogue");
        assert_eq!(magazine_1.category(), "Fashion");
        assert_eq!(magazine_2.name(), "AD");
    }

    #[test]
    fn test_name_length_bounds() {
        assert!(Magazine::new("AD", "Architecture").is_ok());
        assert!(Magazine::new("New Yorker Plus!", "Culture").is_ok());

        assert_eq!(
            Magazine::new("A", "X").unwrap_err(),
            ValidationError::MagazineNameLength { len: 1 }
        );
        assert_eq!(
            Magazine::new("New Yorker Plus X", "Culture").unwrap_err(),
            ValidationError::MagazineNameLength { len: 17 }
        );
    }

    #[test]
    fn test_name_length_counts_characters() {
        // 16 characters, more than 16 bytes
        let magazine = Magazine::new("Élan Été Ça Va É", "Lifestyle").unwrap();
        assert_eq!(magazine.name().chars().count(), 16);
    }

    #[test]
    fn test_name_is_mutable() {
        let mut magazine = Magazine::new("Vogue", "Fashion").unwrap();
        let id = magazine.id().clone();

        magazine.set_name("New Yorker").unwrap();
        assert_eq!(magazine.name(), "New Yorker");
        assert_eq!(magazine.id(), &id);
    }

    #[test]
    fn test_invalid_rename_keeps_old_name() {
        let mut magazine = Magazine::new("Vogue", "Fashion").unwrap();

        assert!(magazine.set_name("New Yorker Plus X").is_err());
        assert!(magazine.set_name("A").is_err());
        assert_eq!(magazine.name(), "Vogue");
    }

    #[test]
    fn test_category_is_mutable() {
        let mut magazine = Magazine::new("Vogue", "Fashion").unwrap();

        magazine.set_category("Life Style").unwrap();
        assert_eq!(magazine.category(), "Life Style");

        assert_eq!(
            magazine.set_category("").unwrap_err(),
            ValidationError::EmptyCategory
        );
        assert_eq!(
            magazine.set_category("   ").unwrap_err(),
            ValidationError::EmptyCategory
        );
        assert_eq!(magazine.category(), "Life Style");
    }

    #[test]
    fn test_blank_category_rejected_at_construction() {
        assert_eq!(
            Magazine::new("Vogue", " \t ").unwrap_err(),
            ValidationError::EmptyCategory
        );
    }
}
