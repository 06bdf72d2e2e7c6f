//! Magazine Repository - The registry of every Magazine

use super::RepositoryError;
use crate::model::magazine::{Magazine, MagazineId};

/// Magazine Repository Trait
///
/// This is a PORT in hexagonal architecture.
/// Implementations must return entries in registration order.
pub trait MagazineRepository {
    /// Append a magazine to the registry
    fn add(&mut self, magazine: Magazine) -> Result<(), RepositoryError>;

    /// Overwrite a registered magazine in place, keeping its position
    fn update(&mut self, magazine: &Magazine) -> Result<(), RepositoryError>;

    /// Find a magazine by ID
    fn find_by_id(&self, id: &MagazineId) -> Result<Option<Magazine>, RepositoryError>;

    /// All registered magazines, oldest first
    fn list_all(&self) -> Result<Vec<Magazine>, RepositoryError>;

    /// Count registered magazines
    fn count(&self) -> Result<usize, RepositoryError>;

    /// Check if a magazine is registered
    fn contains(&self, id: &MagazineId) -> Result<bool, RepositoryError> {
        Ok(self.find_by_id(id)?.is_some())
    }

    /// Drop every entry. Test harnesses only.
    fn clear(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::testing::VecMagazineRepo;

    #[test]
    fn test_registration_order() {
        let mut repo = VecMagazineRepo::default();

        let vogue = Magazine::new("Vogue", "Fashion").unwrap();
        let ad = Magazine::new("AD", "Architecture").unwrap();
        repo.add(vogue.clone()).unwrap();
        repo.add(ad.clone()).unwrap();

        let all = repo.list_all().unwrap();
        assert_eq!(all, vec![vogue.clone(), ad]);
        assert!(repo.contains(vogue.id()).unwrap());
        assert_eq!(repo.count().unwrap(), 2);
    }

    #[test]
    fn test_update_keeps_position() {
        let mut repo = VecMagazineRepo::default();

        let mut vogue = Magazine::new("Vogue", "Fashion").unwrap();
        let ad = Magazine::new("AD", "Architecture").unwrap();
        repo.add(vogue.clone()).unwrap();
        repo.add(ad).unwrap();

        vogue.set_name("New Yorker").unwrap();
        repo.update(&vogue).unwrap();

        let all = repo.list_all().unwrap();
        assert_eq!(all[0].name(), "New Yorker");
        assert_eq!(repo.count().unwrap(), 2);
    }

    #[test]
    fn test_update_unknown_is_not_found() {
        let mut repo = VecMagazineRepo::default();
        let vogue = Magazine::new("Vogue", "Fashion").unwrap();

        let err = repo.update(&vogue).unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound { .. }));
    }
}
