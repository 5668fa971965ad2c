use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Optional patient details entered alongside the order note.
///
/// Every field is independently optional; the record as a whole is only
/// carried when at least one of them is present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientMetadata {
    pub name: Option<String>,
    pub age: Option<u8>,
    pub room: Option<String>,
    pub admission_date: Option<NaiveDate>,
}

impl PatientMetadata {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.age.is_none()
            && self.room.is_none()
            && self.admission_date.is_none()
    }

    /// `None` when no field is set.
    pub fn into_option(self) -> Option<Self> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}
