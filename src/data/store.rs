//! Single-owner cell for the registration record

use super::form::RegistrationForm;

/// Holds the canonical [`RegistrationForm`].
///
/// The wizard controller owns the store and lends it to the active step.
/// Writes go through [`FormStore::update`], which replaces the whole record.
#[derive(Debug, Clone, Default)]
pub struct FormStore {
    form: RegistrationForm,
    revision: u64,
}

impl FormStore {
    pub fn new(form: RegistrationForm) -> Self {
        Self { form, revision: 0 }
    }

    /// Current record
    pub fn get(&self) -> &RegistrationForm {
        &self.form
    }

    /// Number of updates that changed the record
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Produce a new record from the current one and install it
    pub fn update<F>(&mut self, f: F)
    where
        F: FnOnce(RegistrationForm) -> RegistrationForm,
    {
        let previous = std::mem::take(&mut self.form);
        let before = previous.clone();
        self.form = f(previous);
        if self.form != before {
            self.revision += 1;
            tracing::trace!(revision = self.revision, form = ?self.form, "Form updated");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Country;

    #[test]
    fn test_update_replaces_record() {
        let mut store = FormStore::default();
        store.update(|f| f.with_address("House 1, Street 2"));
        assert_eq!(store.get().complete_address, "House 1, Street 2");
        assert_eq!(store.revision(), 1);
    }

    #[test]
    fn test_unchanged_update_keeps_revision() {
        let mut store = FormStore::new(RegistrationForm::new(Country::India));
        store.update(|f| f);
        assert_eq!(store.revision(), 0);
        assert_eq!(store.get().country, Country::India);
    }
}
