use log::{info, warn};

use super::error::ContactError;
use super::form::{ContactForm, EquipmentPreset, FormPart, TextField};
use super::zip::{classify, sanitize_zip, ZipQuery};

#[derive(Debug, Clone, PartialEq)]
pub enum ZipStatus {
    Idle,
    Looking(String),
    Resolved(String),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitStatus {
    Idle,
    Sending,
    Succeeded(String),
    Failed(String),
}

/// Everything the contact form view needs between renders: the record being
/// edited plus where the lookup and submission stand.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactSession<F> {
    pub form: ContactForm<F>,
    pub zip: ZipStatus,
    pub submit: SubmitStatus,
}

impl<F: Clone> Default for ContactSession<F> {
    fn default() -> Self {
        Self {
            form: ContactForm::new(),
            zip: ZipStatus::Idle,
            submit: SubmitStatus::Idle,
        }
    }
}

impl<F: Clone> ContactSession<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_sending(&self) -> bool {
        self.submit == SubmitStatus::Sending
    }

    /// Writes a freight-card pick into the equipment select unless it is the
    /// same click that was already applied.
    pub fn apply_preset(
        &mut self,
        preset: Option<EquipmentPreset>,
        applied: Option<EquipmentPreset>,
    ) -> bool {
        match preset {
            Some(pick) if preset != applied => {
                self.form.set_text(TextField::EquipmentType, pick.equipment.value());
                true
            }
            _ => false,
        }
    }

    /// Stores the cleaned ZIP and returns it when a lookup should go out.
    pub fn zip_changed(&mut self, raw: &str) -> Option<String> {
        let zip = sanitize_zip(raw);
        self.form.set_text(TextField::ZipCode, zip.clone());

        match classify(&zip) {
            ZipQuery::Complete(zip) => {
                self.zip = ZipStatus::Looking(zip.clone());
                Some(zip)
            }
            ZipQuery::Partial => {
                self.form.set_text(TextField::Location, "");
                self.zip = ZipStatus::Idle;
                None
            }
        }
    }

    /// Applies a lookup result. Returns false when the ZIP has changed since
    /// the request went out and the result was dropped.
    pub fn lookup_finished(&mut self, zip: &str, result: Result<String, ContactError>) -> bool {
        if self.form.text(TextField::ZipCode) != zip {
            info!("Dropping stale ZIP lookup for {}", zip);
            return false;
        }

        match result {
            Ok(location) => {
                self.form.set_text(TextField::Location, location.clone());
                self.zip = ZipStatus::Resolved(location);
            }
            Err(err) => {
                warn!("ZIP lookup for {} failed: {:?}", zip, err);
                self.form.set_text(TextField::Location, "");
                self.zip = ZipStatus::Failed(err.to_string());
            }
        }
        true
    }

    pub fn begin_submit(&mut self) -> Result<Vec<FormPart<F>>, ContactError> {
        if self.is_sending() {
            return Err(ContactError::AlreadySubmitting);
        }
        if let Err(err) = self.form.validate() {
            self.submit = SubmitStatus::Failed(err.to_string());
            return Err(err);
        }
        self.submit = SubmitStatus::Sending;
        Ok(self.form.parts())
    }

    /// Returns true when the form was cleared and file inputs should be
    /// emptied too.
    pub fn submit_finished(&mut self, result: Result<String, ContactError>) -> bool {
        match result {
            Ok(message) => {
                self.form.reset();
                self.zip = ZipStatus::Idle;
                self.submit = SubmitStatus::Succeeded(message);
                true
            }
            Err(err) => {
                warn!("Contact submission failed: {:?}", err);
                self.submit = SubmitStatus::Failed(err.to_string());
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::form::{DocumentSlot, EquipmentType, PartValue};

    fn ready() -> ContactSession<&'static str> {
        let mut session = ContactSession::new();
        let form = &mut session.form;
        form.set_text(TextField::FullName, "Marcus Hill");
        form.set_text(TextField::Phone, "(312) 555-0110");
        form.set_text(TextField::Email, "marcus@hillfreight.net");
        form.set_text(TextField::McNumber, "987654");
        form.set_text(TextField::EquipmentType, EquipmentType::Flatbed.value());
        form.set_text(TextField::Comments, "Midwest lanes preferred");
        session.zip_changed("60601");
        session.lookup_finished("60601", Ok("Chicago, IL".to_string()));
        session
    }

    #[test]
    fn five_digits_request_exactly_one_lookup() {
        let mut session = ContactSession::<&str>::new();
        let requested: Vec<_> = ["6", "60", "606", "6060", "60601"]
            .iter()
            .filter_map(|raw| session.zip_changed(raw))
            .collect();
        assert_eq!(requested, ["60601"]);
        assert_eq!(session.zip, ZipStatus::Looking("60601".to_string()));
    }

    #[test]
    fn short_zip_clears_location_without_lookup() {
        let mut session = ready();
        assert_eq!(session.form.text(TextField::Location), "Chicago, IL");

        assert_eq!(session.zip_changed("6060"), None);
        assert_eq!(session.form.text(TextField::Location), "");
        assert_eq!(session.zip, ZipStatus::Idle);
    }

    #[test]
    fn failed_lookup_clears_location_and_shows_error() {
        let mut session = ready();
        session.zip_changed("00000");
        assert!(session.lookup_finished("00000", Err(ContactError::ZipNotFound("00000".into()))));

        assert_eq!(session.form.text(TextField::Location), "");
        match &session.zip {
            ZipStatus::Failed(message) => assert!(!message.is_empty()),
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[test]
    fn stale_lookup_is_dropped() {
        let mut session = ContactSession::<&str>::new();
        session.zip_changed("60601");
        session.zip_changed("10001");

        assert!(!session.lookup_finished("60601", Ok("Chicago, IL".to_string())));
        assert_eq!(session.form.text(TextField::Location), "");
        assert_eq!(session.zip, ZipStatus::Looking("10001".to_string()));

        assert!(session.lookup_finished("10001", Ok("New York, NY".to_string())));
        assert_eq!(session.form.text(TextField::Location), "New York, NY");
    }

    #[test]
    fn repeated_card_pick_overrides_a_manual_change() {
        let mut session = ready();
        let first = EquipmentPreset::next(None, EquipmentType::Reefer);
        assert!(session.apply_preset(Some(first), None));
        assert_eq!(session.form.text(TextField::EquipmentType), "reefer");

        session.form.set_text(TextField::EquipmentType, EquipmentType::DryVan.value());
        assert!(!session.apply_preset(Some(first), Some(first)));

        let again = EquipmentPreset::next(Some(first), EquipmentType::Reefer);
        assert!(session.apply_preset(Some(again), Some(first)));
        assert_eq!(session.form.text(TextField::EquipmentType), "reefer");
    }

    #[test]
    fn card_pick_after_successful_submit_refills_equipment() {
        let mut session = ready();
        let pick = EquipmentPreset::next(None, EquipmentType::Flatbed);
        session.apply_preset(Some(pick), None);
        session.begin_submit().unwrap();
        session.submit_finished(Ok("Thanks!".to_string()));
        assert_eq!(session.form.text(TextField::EquipmentType), "");

        let again = EquipmentPreset::next(Some(pick), EquipmentType::Flatbed);
        assert!(session.apply_preset(Some(again), Some(pick)));
        assert_eq!(session.form.text(TextField::EquipmentType), "flatbed");
    }

    #[test]
    fn any_address_the_browser_accepts_can_be_submitted() {
        let mut session = ready();
        session.form.set_text(TextField::Email, "ops@localhost");
        assert!(session.begin_submit().is_ok());
        assert_eq!(session.submit, SubmitStatus::Sending);
    }

    #[test]
    fn blank_required_fields_block_submission() {
        let mut session = ContactSession::<&str>::new();
        let err = session.begin_submit().unwrap_err();
        assert!(matches!(err, ContactError::MissingFields(_)));
        assert!(matches!(session.submit, SubmitStatus::Failed(_)));
    }

    #[test]
    fn submission_packages_fields_and_files() {
        let mut session = ready();
        session.form.attach(DocumentSlot::W9, Some("w9.pdf"));
        session.form.attach(DocumentSlot::McAuthority, Some("authority.pdf"));

        let parts = session.begin_submit().unwrap();
        assert_eq!(session.submit, SubmitStatus::Sending);
        let value = |name: &str| {
            parts
                .iter()
                .find(|p| p.name == name)
                .map(|p| p.value.clone())
        };
        assert_eq!(value("location"), Some(PartValue::Text("Chicago, IL".to_string())));
        assert_eq!(value("zip_code"), Some(PartValue::Text("60601".to_string())));
        assert_eq!(value("w9"), Some(PartValue::File("w9.pdf")));
        assert_eq!(value("mc_authority"), Some(PartValue::File("authority.pdf")));
        assert_eq!(value("coi"), None);
    }

    #[test]
    fn second_submit_while_sending_is_refused() {
        let mut session = ready();
        session.begin_submit().unwrap();
        assert_eq!(session.begin_submit(), Err(ContactError::AlreadySubmitting));
        assert_eq!(session.submit, SubmitStatus::Sending);
    }

    #[test]
    fn success_resets_everything() {
        let mut session = ready();
        session.form.attach(DocumentSlot::Coi, Some("coi.pdf"));
        session.begin_submit().unwrap();

        assert!(session.submit_finished(Ok("Thanks!".to_string())));
        assert_eq!(session.form, ContactForm::new());
        assert_eq!(session.zip, ZipStatus::Idle);
        assert_eq!(session.submit, SubmitStatus::Succeeded("Thanks!".to_string()));
    }

    #[test]
    fn failure_keeps_the_form_for_resubmission() {
        for err in [
            ContactError::Rejected("MC number not active".to_string()),
            ContactError::Network("connection refused".to_string()),
        ] {
            let mut session = ready();
            session.form.attach(DocumentSlot::Coi, Some("coi.pdf"));
            let before = session.form.clone();
            session.begin_submit().unwrap();

            assert!(!session.submit_finished(Err(err)));
            assert_eq!(session.form, before);
            match &session.submit {
                SubmitStatus::Failed(message) => assert!(!message.trim().is_empty()),
                other => panic!("expected failure, got {:?}", other),
            }
            assert!(session.begin_submit().is_ok());
        }
    }
}
