/// Raw image bytes uploaded alongside a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    pub bytes: Vec<u8>,
    /// File extension of the upload (`jpg`, `png`, ...), without the dot.
    pub extension: Option<String>,
}

impl ImagePayload {
    #[must_use]
    pub const fn new(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            extension: None,
        }
    }

    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }
}

/// The user-supplied attributes of a new report.
///
/// Values are untrimmed as submitted. `reported_date` is free text; `None`
/// (or blank) means "today".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportFields {
    pub item_name: String,
    pub category: String,
    pub location: String,
    pub description: String,
    pub reported_date: Option<String>,
    pub contact_info: String,
    pub image: Option<ImagePayload>,
}
