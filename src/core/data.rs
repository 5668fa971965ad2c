use validator::Validate;

use crate::error::NoteError;
use crate::models::{NoteForm, NoteInput, ObservationNote, OrderNote, PatientMetadata};

pub const EMPTY_ORDER_NOTE: &str = "Please enter the doctor's order note.";
pub const STALE_PROMPT: &str =
    "The edited prompt no longer contains the order note. Rebuild the prompt before generating.";

/// Turns a raw form submission into validated input.
///
/// This is the only gate in front of the prompt builder: an order note that
/// is empty after trimming never gets further than here.
pub fn collect(form: &NoteForm) -> Result<NoteInput, NoteError> {
    form.validate()?;

    let order_note = OrderNote::parse(&form.order_note)
        .ok_or_else(|| NoteError::Validation(EMPTY_ORDER_NOTE.to_string()))?;

    let patient = PatientMetadata {
        name: non_blank(form.patient_name.as_deref()),
        // range already checked by validate()
        age: form.age.and_then(|age| u8::try_from(age).ok()),
        room: non_blank(form.room.as_deref()),
        admission_date: form.admission_date,
    }
    .into_option();

    let edited_prompt = non_blank(form.prompt.as_deref());
    if let Some(prompt) = &edited_prompt {
        if !prompt.contains(order_note.as_str()) {
            return Err(NoteError::Validation(STALE_PROMPT.to_string()));
        }
    }

    Ok(NoteInput {
        order_note,
        observation_note: ObservationNote::new(form.observation_note.as_deref()),
        patient,
        edited_prompt,
    })
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use test_case::test_case;

    fn form(order_note: &str) -> NoteForm {
        NoteForm {
            order_note: order_note.to_string(),
            ..Default::default()
        }
    }

    #[test_case(""; "empty")]
    #[test_case("   "; "spaces")]
    #[test_case("\n\t \r\n"; "mixed whitespace")]
    fn blank_order_note_is_a_warning(order_note: &str) {
        let err = collect(&form(order_note)).unwrap_err();
        assert!(matches!(err, NoteError::Validation(ref msg) if msg == EMPTY_ORDER_NOTE));
        assert_eq!(err.level(), "warning");
    }

    #[test]
    fn order_note_is_trimmed() {
        let input = collect(&form("  Start heparin drip, serial troponins q6h \n")).unwrap();
        assert_eq!(
            input.order_note.as_str(),
            "Start heparin drip, serial troponins q6h"
        );
        assert!(input.observation_note.is_empty());
        assert!(input.patient.is_none());
        assert!(input.edited_prompt.is_none());
    }

    #[test]
    fn age_over_120_is_rejected() {
        let mut f = form("NPO after midnight");
        f.age = Some(121);
        let err = collect(&f).unwrap_err();
        assert!(matches!(err, NoteError::Validation(ref msg) if msg.contains("Age")));
    }

    #[test_case(0; "newborn")]
    #[test_case(120; "upper bound")]
    fn age_bounds_are_accepted(age: u32) {
        let mut f = form("NPO after midnight");
        f.age = Some(age);
        let input = collect(&f).unwrap();
        assert_eq!(input.patient.unwrap().age, Some(age as u8));
    }

    #[test]
    fn blank_metadata_counts_as_absent() {
        let mut f = form("Ambulate TID");
        f.patient_name = Some("   ".into());
        f.room = Some("".into());
        f.prompt = Some(" \n ".into());
        let input = collect(&f).unwrap();
        assert!(input.patient.is_none());
        assert!(input.edited_prompt.is_none());
    }

    #[test]
    fn metadata_fields_are_independent() {
        let mut f = form("Ambulate TID");
        f.room = Some(" 4B-12 ".into());
        f.admission_date = NaiveDate::from_ymd_opt(2024, 3, 1);
        let patient = collect(&f).unwrap().patient.unwrap();
        assert_eq!(patient.name, None);
        assert_eq!(patient.age, None);
        assert_eq!(patient.room.as_deref(), Some("4B-12"));
        assert_eq!(patient.admission_date, NaiveDate::from_ymd_opt(2024, 3, 1));
    }

    #[test]
    fn edited_prompt_must_still_carry_the_order_note() {
        let mut f = form(" Vancomycin 1g IV q12h ");
        f.prompt = Some("Heparin drip per protocol, write the note.".into());
        let err = collect(&f).unwrap_err();
        assert!(matches!(err, NoteError::Validation(ref msg) if msg == STALE_PROMPT));

        f.prompt = Some("Keep it short.\nVancomycin 1g IV q12h".into());
        let input = collect(&f).unwrap();
        assert_eq!(
            input.edited_prompt.as_deref(),
            Some("Keep it short.\nVancomycin 1g IV q12h")
        );
    }

    #[test]
    fn overlong_name_is_rejected() {
        let mut f = form("Ambulate TID");
        f.patient_name = Some("x".repeat(101));
        assert!(matches!(collect(&f), Err(NoteError::Validation(_))));
    }
}
