use super::error::ContactError;

/// Text inputs of the carrier contact form, in the order they are rendered
/// and sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    FullName,
    Phone,
    Email,
    McNumber,
    EquipmentType,
    ZipCode,
    Location,
    CurrentRate,
    Urgency,
    Comments,
}

impl TextField {
    pub const ALL: [TextField; 10] = [
        TextField::FullName,
        TextField::Phone,
        TextField::Email,
        TextField::McNumber,
        TextField::EquipmentType,
        TextField::ZipCode,
        TextField::Location,
        TextField::CurrentRate,
        TextField::Urgency,
        TextField::Comments,
    ];

    /// Multipart field name expected by the submission endpoint.
    pub fn name(self) -> &'static str {
        match self {
            TextField::FullName => "full_name",
            TextField::Phone => "phone",
            TextField::Email => "email",
            TextField::McNumber => "mc_number",
            TextField::EquipmentType => "equipment_type",
            TextField::ZipCode => "zip_code",
            TextField::Location => "location",
            TextField::CurrentRate => "current_rate",
            TextField::Urgency => "urgency",
            TextField::Comments => "comments",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TextField::FullName => "Full name",
            TextField::Phone => "Phone",
            TextField::Email => "Email",
            TextField::McNumber => "MC number",
            TextField::EquipmentType => "Equipment type",
            TextField::ZipCode => "ZIP code",
            TextField::Location => "Location",
            TextField::CurrentRate => "Current rate",
            TextField::Urgency => "How soon do you need loads?",
            TextField::Comments => "Comments",
        }
    }

    pub fn required(self) -> bool {
        matches!(
            self,
            TextField::FullName
                | TextField::Phone
                | TextField::Email
                | TextField::McNumber
                | TextField::EquipmentType
                | TextField::ZipCode
        )
    }
}

/// Optional document uploads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentSlot {
    W9,
    Coi,
    McAuthority,
    FactoringDoc,
}

impl DocumentSlot {
    pub const ALL: [DocumentSlot; 4] = [
        DocumentSlot::W9,
        DocumentSlot::Coi,
        DocumentSlot::McAuthority,
        DocumentSlot::FactoringDoc,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DocumentSlot::W9 => "w9",
            DocumentSlot::Coi => "coi",
            DocumentSlot::McAuthority => "mc_authority",
            DocumentSlot::FactoringDoc => "factoring_doc",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DocumentSlot::W9 => "W-9",
            DocumentSlot::Coi => "Certificate of insurance (COI)",
            DocumentSlot::McAuthority => "MC authority letter",
            DocumentSlot::FactoringDoc => "Factoring agreement / NOA",
        }
    }

    fn index(self) -> usize {
        match self {
            DocumentSlot::W9 => 0,
            DocumentSlot::Coi => 1,
            DocumentSlot::McAuthority => 2,
            DocumentSlot::FactoringDoc => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EquipmentType {
    DryVan,
    Reefer,
    Flatbed,
    StepDeck,
    PowerOnly,
    BoxTruck,
    Hotshot,
}

impl EquipmentType {
    pub const ALL: [EquipmentType; 7] = [
        EquipmentType::DryVan,
        EquipmentType::Reefer,
        EquipmentType::Flatbed,
        EquipmentType::StepDeck,
        EquipmentType::PowerOnly,
        EquipmentType::BoxTruck,
        EquipmentType::Hotshot,
    ];

    pub fn value(self) -> &'static str {
        match self {
            EquipmentType::DryVan => "dry_van",
            EquipmentType::Reefer => "reefer",
            EquipmentType::Flatbed => "flatbed",
            EquipmentType::StepDeck => "step_deck",
            EquipmentType::PowerOnly => "power_only",
            EquipmentType::BoxTruck => "box_truck",
            EquipmentType::Hotshot => "hotshot",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EquipmentType::DryVan => "Dry Van",
            EquipmentType::Reefer => "Reefer",
            EquipmentType::Flatbed => "Flatbed",
            EquipmentType::StepDeck => "Step Deck",
            EquipmentType::PowerOnly => "Power Only",
            EquipmentType::BoxTruck => "Box Truck",
            EquipmentType::Hotshot => "Hotshot",
        }
    }
}

/// Equipment picked from a freight card. `click` grows on every click so
/// picking the same card twice still reaches the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EquipmentPreset {
    pub equipment: EquipmentType,
    pub click: u32,
}

impl EquipmentPreset {
    pub fn next(previous: Option<EquipmentPreset>, equipment: EquipmentType) -> Self {
        Self {
            equipment,
            click: previous.map_or(1, |p| p.click.wrapping_add(1)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateBracket {
    Under2,
    From2To250,
    From250To3,
    Over3,
}

impl RateBracket {
    pub const ALL: [RateBracket; 4] = [
        RateBracket::Under2,
        RateBracket::From2To250,
        RateBracket::From250To3,
        RateBracket::Over3,
    ];

    pub fn value(self) -> &'static str {
        match self {
            RateBracket::Under2 => "under_2",
            RateBracket::From2To250 => "2_to_2.50",
            RateBracket::From250To3 => "2.50_to_3",
            RateBracket::Over3 => "over_3",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RateBracket::Under2 => "Under $2.00 / mile",
            RateBracket::From2To250 => "$2.00 - $2.50 / mile",
            RateBracket::From250To3 => "$2.50 - $3.00 / mile",
            RateBracket::Over3 => "Over $3.00 / mile",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    High,
    Medium,
    Low,
}

impl Urgency {
    pub const ALL: [Urgency; 3] = [Urgency::High, Urgency::Medium, Urgency::Low];

    pub fn value(self) -> &'static str {
        match self {
            Urgency::High => "high",
            Urgency::Medium => "medium",
            Urgency::Low => "low",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Urgency::High => "Right away - truck is empty",
            Urgency::Medium => "This week",
            Urgency::Low => "Just exploring",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PartValue<F> {
    Text(String),
    File(F),
}

/// One entry of the outbound multipart body.
#[derive(Debug, Clone, PartialEq)]
pub struct FormPart<F> {
    pub name: &'static str,
    pub value: PartValue<F>,
}

/// In-memory state of the lead form. `F` is the attachment handle, a browser
/// `File` in the app.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactForm<F> {
    texts: [String; 10],
    attachments: [Option<F>; 4],
}

impl<F> Default for ContactForm<F> {
    fn default() -> Self {
        Self {
            texts: Default::default(),
            attachments: [None, None, None, None],
        }
    }
}

impl<F: Clone> ContactForm<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self, field: TextField) -> &str {
        &self.texts[field as usize]
    }

    pub fn set_text(&mut self, field: TextField, value: impl Into<String>) {
        self.texts[field as usize] = value.into();
    }

    pub fn attachment(&self, slot: DocumentSlot) -> Option<&F> {
        self.attachments[slot.index()].as_ref()
    }

    pub fn attach(&mut self, slot: DocumentSlot, file: Option<F>) {
        self.attachments[slot.index()] = file;
    }

    pub fn missing_required(&self) -> Vec<TextField> {
        TextField::ALL
            .into_iter()
            .filter(|field| field.required() && self.text(*field).trim().is_empty())
            .collect()
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        let missing = self.missing_required();
        if !missing.is_empty() {
            return Err(ContactError::MissingFields(
                missing.into_iter().map(TextField::label).collect(),
            ));
        }
        Ok(())
    }

    /// Text fields are always sent, even when empty. Files only when chosen.
    pub fn parts(&self) -> Vec<FormPart<F>> {
        let texts = TextField::ALL.into_iter().map(|field| FormPart {
            name: field.name(),
            value: PartValue::Text(self.text(field).to_string()),
        });
        let files = DocumentSlot::ALL.into_iter().filter_map(|slot| {
            self.attachment(slot).map(|file| FormPart {
                name: slot.name(),
                value: PartValue::File(file.clone()),
            })
        });
        texts.chain(files).collect()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm<&'static str> {
        let mut form = ContactForm::new();
        form.set_text(TextField::FullName, "Dana Ortiz");
        form.set_text(TextField::Phone, "214-555-0199");
        form.set_text(TextField::Email, "dana@ortiztrucking.com");
        form.set_text(TextField::McNumber, "MC-1234567");
        form.set_text(TextField::EquipmentType, EquipmentType::Reefer.value());
        form.set_text(TextField::ZipCode, "75201");
        form
    }

    #[test]
    fn wire_names_match_the_endpoint_contract() {
        let names: Vec<_> = TextField::ALL.iter().map(|f| f.name()).collect();
        assert_eq!(
            names,
            [
                "full_name",
                "phone",
                "email",
                "mc_number",
                "equipment_type",
                "zip_code",
                "location",
                "current_rate",
                "urgency",
                "comments"
            ]
        );
        let docs: Vec<_> = DocumentSlot::ALL.iter().map(|s| s.name()).collect();
        assert_eq!(docs, ["w9", "coi", "mc_authority", "factoring_doc"]);
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let form = ContactForm::<&str>::new();
        assert_eq!(
            form.missing_required(),
            vec![
                TextField::FullName,
                TextField::Phone,
                TextField::Email,
                TextField::McNumber,
                TextField::EquipmentType,
                TextField::ZipCode,
            ]
        );
        assert!(matches!(form.validate(), Err(ContactError::MissingFields(labels)) if labels.len() == 6));
    }

    #[test]
    fn whitespace_does_not_satisfy_a_required_field() {
        let mut form = filled();
        form.set_text(TextField::McNumber, "   ");
        assert_eq!(
            form.validate(),
            Err(ContactError::MissingFields(vec!["MC number"]))
        );
    }

    #[test]
    fn optional_fields_may_stay_blank() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn email_format_is_left_to_the_browser() {
        let mut form = filled();
        form.set_text(TextField::Email, "ops@localhost");
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn required_fields_match_the_endpoint_contract() {
        let required: Vec<_> = TextField::ALL
            .iter()
            .filter(|f| f.required())
            .map(|f| f.name())
            .collect();
        assert_eq!(
            required,
            ["full_name", "phone", "email", "mc_number", "equipment_type", "zip_code"]
        );
    }

    #[test]
    fn parts_send_every_text_field_and_only_chosen_files() {
        let mut form = filled();
        form.attach(DocumentSlot::Coi, Some("coi.pdf"));
        form.attach(DocumentSlot::FactoringDoc, Some("noa.pdf"));

        let parts = form.parts();
        assert_eq!(parts.len(), 12);
        assert!(parts.contains(&FormPart {
            name: "comments",
            value: PartValue::Text(String::new()),
        }));
        let files: Vec<_> = parts
            .iter()
            .filter_map(|p| match &p.value {
                PartValue::File(f) => Some((p.name, *f)),
                PartValue::Text(_) => None,
            })
            .collect();
        assert_eq!(files, [("coi", "coi.pdf"), ("factoring_doc", "noa.pdf")]);
    }

    #[test]
    fn detaching_a_file_drops_it_from_the_payload() {
        let mut form = filled();
        form.attach(DocumentSlot::W9, Some("w9.pdf"));
        form.attach(DocumentSlot::W9, None);
        assert!(form.parts().iter().all(|p| p.name != "w9"));
    }

    #[test]
    fn reset_clears_text_and_attachments() {
        let mut form = filled();
        form.attach(DocumentSlot::W9, Some("w9.pdf"));
        form.reset();
        assert_eq!(form, ContactForm::new());
        assert!(TextField::ALL.iter().all(|f| form.text(*f).is_empty()));
        assert!(DocumentSlot::ALL.iter().all(|s| form.attachment(*s).is_none()));
    }
}
