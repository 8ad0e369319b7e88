//! Identity & Address step: focus, inline validation, and write-through edits
//!
//! [`IdentityStep`] owns only step-local state: the error map, which field has
//! focus, and cursor positions. Every shared value is read from and written to
//! the [`FormStore`] lent by the wizard controller.

use super::cnic::{format_cnic, is_valid_cnic, CNIC_FORMATTED_LEN};
use super::text_cursor::TextCursor;
use super::validation::{validate_field, FieldError, FieldErrors, FieldName};
use crate::data::{Country, DocumentType, FileAttachment, FormStore, UploadSlot};

/// Focusable elements of the step, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Address,
    Country,
    Province,
    DocumentType,
    /// CNIC or passport number, depending on the active document
    DocumentNumber,
    Upload(UploadSlot),
}

impl Focus {
    /// Tab order for the given document type
    pub fn order(document_type: DocumentType) -> Vec<Focus> {
        let mut order = vec![
            Focus::Address,
            Focus::Country,
            Focus::Province,
            Focus::DocumentType,
            Focus::DocumentNumber,
        ];
        order.extend(
            UploadSlot::for_document(document_type)
                .iter()
                .map(|slot| Focus::Upload(*slot)),
        );
        order
    }

    /// The validated text field behind this focus, if any
    pub fn field(self, document_type: DocumentType) -> Option<FieldName> {
        match self {
            Focus::Address => Some(FieldName::CompleteAddress),
            Focus::DocumentNumber => Some(match document_type {
                DocumentType::Cnic => FieldName::Cnic,
                DocumentType::Passport => FieldName::Passport,
            }),
            _ => None,
        }
    }
}

/// Something the step needs from its host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepRequest {
    /// Ask the user to pick a file for this slot
    PickFile(UploadSlot),
}

#[derive(Debug, Clone, Default)]
pub struct IdentityStep {
    errors: FieldErrors,
    focus: Focus,
    address_cursor: TextCursor,
    passport_cursor: TextCursor,
}

impl IdentityStep {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: FieldName) -> Option<FieldError> {
        self.errors.get(field)
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Cursor column (in chars) of the focused text field
    pub fn cursor_position(&self, store: &FormStore) -> Option<usize> {
        let form = store.get();
        match (self.focus, form.document_type) {
            (Focus::Address, _) => Some(self.address_cursor.position(&form.complete_address)),
            (Focus::DocumentNumber, DocumentType::Cnic) => Some(form.cnic.chars().count()),
            (Focus::DocumentNumber, DocumentType::Passport) => {
                Some(self.passport_cursor.position(&form.passport))
            }
            _ => None,
        }
    }

    // ========== Validation ==========

    /// Validate `field` against its stored value, as when it loses focus
    pub fn blur(&mut self, field: FieldName, store: &FormStore) {
        let form = store.get();
        let outcome = validate_field(field, field.value_in(form), form.document_type);
        if let Err(err) = outcome {
            tracing::debug!(?field, error = %err, "Field failed validation");
        }
        self.errors.record(field, outcome);
    }

    /// Reformat and store raw CNIC input.
    ///
    /// Only a complete (15 character) value can be flagged; partial input
    /// clears any previous CNIC error.
    pub fn on_cnic_input(&mut self, raw: &str, store: &mut FormStore) {
        let formatted = format_cnic(raw);
        let outcome = if formatted.len() == CNIC_FORMATTED_LEN && !is_valid_cnic(&formatted) {
            Err(FieldError::InvalidCnic)
        } else {
            Ok(())
        };
        store.update(|f| f.with_cnic(formatted));
        self.errors.record(FieldName::Cnic, outcome);
    }

    pub fn on_passport_input(&mut self, value: &str, store: &mut FormStore) {
        let value = value.to_string();
        store.update(|f| f.with_passport(value));
    }

    pub fn on_address_input(&mut self, value: &str, store: &mut FormStore) {
        let value = value.to_string();
        store.update(|f| f.with_address(value));
    }

    // ========== Selections ==========

    /// Change country. The province is always reset.
    pub fn select_country(&mut self, country: Country, store: &mut FormStore) {
        tracing::debug!(%country, "Country selected");
        store.update(|f| f.with_country(country));
    }

    /// Provinces offered for the currently selected country
    pub fn province_options(&self, store: &FormStore) -> &'static [&'static str] {
        store.get().country.provinces()
    }

    /// Select a province from the current country's list.
    ///
    /// Returns false (and leaves the record alone) for anything not in the
    /// list; there is no freeform entry. An empty string clears the selection.
    pub fn select_province(&mut self, province: &str, store: &mut FormStore) -> bool {
        let country = store.get().country;
        if !province.is_empty() && !country.has_province(province) {
            tracing::debug!(province, %country, "Ignoring province outside country list");
            return false;
        }
        let province = province.to_string();
        store.update(|f| f.with_province(province));
        true
    }

    /// Switch between CNIC and passport.
    ///
    /// Both document errors are cleared so the new type starts from a clean
    /// validation state.
    pub fn select_document_type(&mut self, document_type: DocumentType, store: &mut FormStore) {
        tracing::debug!(%document_type, "Document type selected");
        store.update(|f| f.with_document_type(document_type));
        self.errors.clear(FieldName::Cnic);
        self.errors.clear(FieldName::Passport);
        self.passport_cursor = TextCursor::at_end(&store.get().passport);

        // Focus may sit on an upload slot that no longer exists
        if let Focus::Upload(slot) = self.focus {
            if slot.document_type() != document_type {
                self.focus = Focus::DocumentType;
            }
        }
    }

    /// Attach a picked file. `None` means nothing was chosen.
    pub fn handle_file_upload(
        &mut self,
        slot: UploadSlot,
        file: Option<FileAttachment>,
        store: &mut FormStore,
    ) {
        let Some(file) = file else {
            tracing::debug!(?slot, "No file chosen");
            return;
        };
        tracing::debug!(?slot, name = %file.name, bytes = file.len(), "File attached");
        store.update(|f| f.with_attachment(slot, file));
    }

    // ========== Focus ==========

    pub fn set_focus(&mut self, focus: Focus, store: &FormStore) {
        if focus == self.focus {
            return;
        }
        let document_type = store.get().document_type;
        if let Some(field) = self.focus.field(document_type) {
            self.blur(field, store);
        }
        self.focus = focus;
        self.reset_cursor(store);
    }

    pub fn focus_next(&mut self, store: &FormStore) {
        let order = Focus::order(store.get().document_type);
        let idx = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.set_focus(order[(idx + 1) % order.len()], store);
    }

    pub fn focus_prev(&mut self, store: &FormStore) {
        let order = Focus::order(store.get().document_type);
        let idx = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.set_focus(order[(idx + order.len() - 1) % order.len()], store);
    }

    fn reset_cursor(&mut self, store: &FormStore) {
        let form = store.get();
        match self.focus {
            Focus::Address => self.address_cursor = TextCursor::at_end(&form.complete_address),
            Focus::DocumentNumber => self.passport_cursor = TextCursor::at_end(&form.passport),
            _ => {}
        }
    }

    // ========== Input ==========

    /// Apply an edit to the focused text field. The CNIC field is masked:
    /// edits always happen at its end and the result is reformatted.
    fn edit_text<F>(&mut self, store: &mut FormStore, edit: F)
    where
        F: FnOnce(&mut TextCursor, &str) -> String,
    {
        let form = store.get();
        match (self.focus, form.document_type) {
            (Focus::Address, _) => {
                let value = edit(&mut self.address_cursor, &form.complete_address);
                self.on_address_input(&value, store);
            }
            (Focus::DocumentNumber, DocumentType::Passport) => {
                let value = edit(&mut self.passport_cursor, &form.passport);
                self.on_passport_input(&value, store);
            }
            (Focus::DocumentNumber, DocumentType::Cnic) => {
                let mut cursor = TextCursor::at_end(&form.cnic);
                let raw = edit(&mut cursor, &form.cnic);
                self.on_cnic_input(&raw, store);
            }
            _ => {}
        }
    }

    pub fn insert_char(&mut self, c: char, store: &mut FormStore) {
        self.edit_text(store, |cursor, text| cursor.insert_char(text, c));
    }

    pub fn backspace(&mut self, store: &mut FormStore) {
        self.edit_text(store, |cursor, text| cursor.delete_char(text));
    }

    pub fn delete(&mut self, store: &mut FormStore) {
        self.edit_text(store, |cursor, text| cursor.delete_forward(text));
    }

    pub fn delete_word_back(&mut self, store: &mut FormStore) {
        self.edit_text(store, |cursor, text| cursor.delete_word(text));
    }

    pub fn delete_to_start(&mut self, store: &mut FormStore) {
        self.edit_text(store, |cursor, text| cursor.delete_to_start(text));
    }

    /// Left arrow: move the cursor, or pick the previous option on a selector
    pub fn left(&mut self, store: &mut FormStore) {
        let form = store.get();
        match (self.focus, form.document_type) {
            (Focus::Address, _) => self.address_cursor.move_left(&form.complete_address),
            (Focus::DocumentNumber, DocumentType::Passport) => {
                self.passport_cursor.move_left(&form.passport)
            }
            _ => self.cycle(store, false),
        }
    }

    /// Right arrow: move the cursor, or pick the next option on a selector
    pub fn right(&mut self, store: &mut FormStore) {
        let form = store.get();
        match (self.focus, form.document_type) {
            (Focus::Address, _) => self.address_cursor.move_right(&form.complete_address),
            (Focus::DocumentNumber, DocumentType::Passport) => {
                self.passport_cursor.move_right(&form.passport)
            }
            _ => self.cycle(store, true),
        }
    }

    pub fn move_start(&mut self) {
        match self.focus {
            Focus::Address => self.address_cursor.move_start(),
            Focus::DocumentNumber => self.passport_cursor.move_start(),
            _ => {}
        }
    }

    pub fn move_end(&mut self, store: &FormStore) {
        self.reset_cursor(store);
    }

    /// Enter on the focused element
    pub fn activate(&mut self, store: &mut FormStore) -> Option<StepRequest> {
        match self.focus {
            Focus::Upload(slot) => Some(StepRequest::PickFile(slot)),
            Focus::Country | Focus::Province | Focus::DocumentType => {
                self.cycle(store, true);
                None
            }
            Focus::Address | Focus::DocumentNumber => {
                self.focus_next(store);
                None
            }
        }
    }

    /// Step a selector forwards or backwards through its options
    fn cycle(&mut self, store: &mut FormStore, forward: bool) {
        let form = store.get();
        match self.focus {
            Focus::Country => {
                let country = if forward {
                    form.country.next()
                } else {
                    form.country.prev()
                };
                self.select_country(country, store);
            }
            Focus::Province => {
                // Index 0 is the empty "Select Province/State" entry
                let options = form.country.provinces();
                let slots = options.len() + 1;
                let current = options
                    .iter()
                    .position(|p| *p == form.province)
                    .map(|i| i + 1)
                    .unwrap_or(0);
                let next = if forward {
                    (current + 1) % slots
                } else {
                    (current + slots - 1) % slots
                };
                let province = if next == 0 { "" } else { options[next - 1] };
                self.select_province(province, store);
            }
            Focus::DocumentType => {
                let document_type = form.document_type.toggled();
                self.select_document_type(document_type, store);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::RegistrationForm;

    fn type_str(step: &mut IdentityStep, store: &mut FormStore, s: &str) {
        for c in s.chars() {
            step.insert_char(c, store);
        }
    }

    #[test]
    fn test_cnic_typing_is_formatted() {
        let mut store = FormStore::default();
        let mut step = IdentityStep::new();
        step.set_focus(Focus::DocumentNumber, &store);
        type_str(&mut step, &mut store, "3520112345671");
        assert_eq!(store.get().cnic, "35201-1234567-1");
        assert_eq!(step.error(FieldName::Cnic), None);

        // Extra digits are dropped
        type_str(&mut step, &mut store, "99");
        assert_eq!(store.get().cnic, "35201-1234567-1");

        step.backspace(&mut store);
        assert_eq!(store.get().cnic, "35201-1234567");
        step.backspace(&mut store);
        assert_eq!(store.get().cnic, "35201-123456");
    }

    #[test]
    fn test_partial_cnic_never_flagged() {
        let mut store = FormStore::default();
        let mut step = IdentityStep::new();
        step.on_cnic_input("35201-12", &mut store);
        assert_eq!(step.error(FieldName::Cnic), None);

        // Blur on a partial value is a different rule
        step.blur(FieldName::Cnic, &store);
        assert_eq!(step.error(FieldName::Cnic), Some(FieldError::InvalidCnic));

        // Completing the number clears it
        step.on_cnic_input("3520112345671", &mut store);
        assert_eq!(step.error(FieldName::Cnic), None);
    }

    #[test]
    fn test_blur_empty_address() {
        let mut store = FormStore::default();
        let mut step = IdentityStep::new();
        step.focus_next(&store);
        assert_eq!(step.focus(), Focus::Country);
        assert_eq!(
            step.error(FieldName::CompleteAddress).map(|e| e.to_string()),
            Some("Complete address is required".to_string())
        );

        step.set_focus(Focus::Address, &store);
        step.on_address_input("   ", &mut store);
        step.blur(FieldName::CompleteAddress, &store);
        assert_eq!(
            step.error(FieldName::CompleteAddress),
            Some(FieldError::AddressRequired)
        );
    }

    #[test]
    fn test_switch_to_passport_clears_errors_keeps_cnic() {
        let mut store = FormStore::default();
        let mut step = IdentityStep::new();
        step.on_cnic_input("35201", &mut store);
        step.blur(FieldName::Cnic, &store);
        step.blur(FieldName::Passport, &store);
        assert!(step.error(FieldName::Cnic).is_some());

        step.select_document_type(DocumentType::Passport, &mut store);
        assert_eq!(step.error(FieldName::Passport), None);
        assert_eq!(step.error(FieldName::Cnic), None);
        assert_eq!(store.get().cnic, "35201");
        assert_eq!(store.get().document_number(), "");
        assert_eq!(
            Focus::DocumentNumber.field(store.get().document_type),
            Some(FieldName::Passport)
        );
    }

    #[test]
    fn test_canada_resets_province() {
        let mut store = FormStore::new(RegistrationForm::default().with_province("Punjab"));
        let mut step = IdentityStep::new();
        step.select_country(Country::Canada, &mut store);
        assert_eq!(store.get().province, "");
        assert_eq!(
            step.province_options(&store),
            &["Ontario", "Quebec", "British Columbia", "Alberta", "Manitoba"]
        );
        assert!(step.select_province("Quebec", &mut store));
        assert!(!step.select_province("Punjab", &mut store));
        assert_eq!(store.get().province, "Quebec");
    }

    #[test]
    fn test_province_cycle_includes_unselected() {
        let mut store = FormStore::new(RegistrationForm::new(Country::UnitedKingdom));
        let mut step = IdentityStep::new();
        step.set_focus(Focus::Province, &store);
        step.left(&mut store);
        assert_eq!(store.get().province, "Northern Ireland");
        step.right(&mut store);
        assert_eq!(store.get().province, "");
        step.right(&mut store);
        assert_eq!(store.get().province, "England");
    }

    #[test]
    fn test_file_upload() {
        let mut store = FormStore::default();
        let mut step = IdentityStep::new();
        step.handle_file_upload(UploadSlot::CnicFront, None, &mut store);
        assert!(store.get().cnic_front.is_none());

        let file = FileAttachment::new("front.jpg", vec![1u8, 2]);
        step.handle_file_upload(UploadSlot::CnicFront, Some(file.clone()), &mut store);
        assert_eq!(store.get().cnic_front, Some(file));

        // Cancelling a later pick keeps the earlier file
        step.handle_file_upload(UploadSlot::CnicFront, None, &mut store);
        assert!(store.get().cnic_front.is_some());
    }

    #[test]
    fn test_focus_order_follows_document_type() {
        let mut store = FormStore::default();
        let mut step = IdentityStep::new();
        step.set_focus(Focus::Upload(UploadSlot::CnicBack), &store);
        step.select_document_type(DocumentType::Passport, &mut store);
        assert_eq!(step.focus(), Focus::DocumentType);

        step.set_focus(Focus::Upload(UploadSlot::PassportPhoto), &store);
        step.focus_next(&store);
        assert_eq!(step.focus(), Focus::Address);
        assert_eq!(
            step.activate(&mut store),
            None,
            "Enter on a text field moves focus"
        );
        step.set_focus(Focus::Upload(UploadSlot::PassportPhoto), &store);
        assert_eq!(
            step.activate(&mut store),
            Some(StepRequest::PickFile(UploadSlot::PassportPhoto))
        );
    }

    #[test]
    fn test_passport_editing_uses_cursor() {
        let mut store = FormStore::default();
        let mut step = IdentityStep::new();
        step.select_document_type(DocumentType::Passport, &mut store);
        step.set_focus(Focus::DocumentNumber, &store);
        type_str(&mut step, &mut store, "AB124");
        step.left(&mut store);
        step.insert_char('3', &mut store);
        assert_eq!(store.get().passport, "AB1234");
        assert_eq!(step.cursor_position(&store), Some(5));
    }
}
