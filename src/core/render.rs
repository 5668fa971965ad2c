//! Display formatting and the downloadable plain-text record.
//!
//! The artifact layout is what clinicians file downstream, so its headings
//! and section order must not change.

use chrono::NaiveDateTime;

use crate::models::{
    DisplayedNote, DownloadArtifact, GeneratedNote, ObservationNote, OrderNote, PatientMetadata,
};

pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

const NO_OBSERVATIONS: &str = "None recorded.";

pub fn timestamp(at: NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Raw text verbatim, plus a tidied copy for display.
pub fn render(generated: &GeneratedNote) -> DisplayedNote {
    let raw = generated.as_str().to_string();

    let mut formatted = String::with_capacity(raw.len());
    let mut blank_run = false;
    for line in raw.replace("\r\n", "\n").replace('\r', "\n").lines() {
        let line = line.trim_end();
        if line.is_empty() {
            blank_run = true;
            continue;
        }
        if !formatted.is_empty() {
            formatted.push('\n');
            if blank_run {
                formatted.push('\n');
            }
        }
        blank_run = false;
        formatted.push_str(line);
    }

    DisplayedNote {
        formatted: formatted.trim().to_string(),
        raw,
    }
}

pub fn build_artifact(
    metadata: Option<&PatientMetadata>,
    order_note: &OrderNote,
    observation_note: &ObservationNote,
    generated: &GeneratedNote,
    at: NaiveDateTime,
) -> DownloadArtifact {
    let stamp = timestamp(at);
    let mut sections: Vec<String> = Vec::with_capacity(5);

    sections.push(format!("NURSING NOTES\nGenerated: {}", stamp));

    if let Some(patient) = metadata.filter(|p| !p.is_empty()) {
        let mut block = String::from("PATIENT INFORMATION");
        if let Some(name) = &patient.name {
            block.push_str(&format!("\nName: {}", name));
        }
        if let Some(age) = patient.age {
            block.push_str(&format!("\nAge: {}", age));
        }
        if let Some(room) = &patient.room {
            block.push_str(&format!("\nRoom: {}", room));
        }
        if let Some(date) = patient.admission_date {
            block.push_str(&format!("\nAdmission Date: {}", date.format("%Y-%m-%d")));
        }
        sections.push(block);
    }

    sections.push(format!("DOCTOR'S ORDER NOTE\n{}", order_note.as_str()));

    let observations = if observation_note.is_empty() {
        NO_OBSERVATIONS
    } else {
        observation_note.as_str()
    };
    sections.push(format!("NURSING OBSERVATIONS\n{}", observations));

    // trailing whitespace dropped so the document ends in exactly one newline
    sections.push(format!(
        "GENERATED NURSING NOTES\n{}",
        generated.as_str().trim_end()
    ));

    let mut content = sections.join("\n\n");
    content.push('\n');

    DownloadArtifact {
        filename: artifact_filename(metadata.and_then(|p| p.name.as_deref()), &stamp),
        content,
    }
}

/// `nursing_notes_<name>_<stamp>.txt`, or `nursing_notes_<stamp>.txt` without a name.
pub fn artifact_filename(patient_name: Option<&str>, stamp: &str) -> String {
    let name: String = patient_name
        .map(str::trim)
        .unwrap_or_default()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if name.is_empty() {
        format!("nursing_notes_{}.txt", stamp)
    } else {
        format!("nursing_notes_{}_{}.txt", name, stamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use fake::faker::name::en::Name;
    use fake::Fake;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 17)
            .unwrap()
            .and_hms_opt(14, 3, 9)
            .unwrap()
    }

    fn order() -> OrderNote {
        OrderNote::parse("Start heparin drip, serial troponins q6h").unwrap()
    }

    fn generated() -> GeneratedNote {
        GeneratedNote::new("Active Diagnoses\n- Suspected ACS\n").unwrap()
    }

    #[test]
    fn timestamp_is_compact() {
        assert_eq!(timestamp(at()), "20240517_140309");
    }

    #[test]
    fn render_keeps_raw_and_tidies_formatted() {
        let note = GeneratedNote::new("Heading  \r\n\r\n\r\n- item\t\n\n").unwrap();
        let displayed = render(&note);
        assert_eq!(displayed.raw, "Heading  \r\n\r\n\r\n- item\t\n\n");
        assert_eq!(displayed.formatted, "Heading\n\n- item");
    }

    #[test]
    fn artifact_without_metadata() {
        let artifact = build_artifact(
            None,
            &order(),
            &ObservationNote::default(),
            &generated(),
            at(),
        );
        assert_eq!(
            artifact.content,
            "NURSING NOTES\n\
             Generated: 20240517_140309\n\
             \n\
             DOCTOR'S ORDER NOTE\n\
             Start heparin drip, serial troponins q6h\n\
             \n\
             NURSING OBSERVATIONS\n\
             None recorded.\n\
             \n\
             GENERATED NURSING NOTES\n\
             Active Diagnoses\n\
             - Suspected ACS\n"
        );
        assert_eq!(artifact.filename, "nursing_notes_20240517_140309.txt");
    }

    #[test]
    fn artifact_sections_are_ordered() {
        let patient = PatientMetadata {
            name: Some("Jane Roe".into()),
            age: Some(67),
            room: Some("ICU-4".into()),
            admission_date: NaiveDate::from_ymd_opt(2024, 5, 15),
        };
        let artifact = build_artifact(
            Some(&patient),
            &order(),
            &ObservationNote::new(Some("Chest pain 6/10 at 0200")),
            &generated(),
            at(),
        );
        let c = &artifact.content;
        let positions: Vec<usize> = [
            "PATIENT INFORMATION",
            "Name: Jane Roe",
            "Age: 67",
            "Room: ICU-4",
            "Admission Date: 2024-05-15",
            "DOCTOR'S ORDER NOTE",
            "NURSING OBSERVATIONS\nChest pain 6/10 at 0200",
            "GENERATED NURSING NOTES",
        ]
        .iter()
        .map(|needle| c.find(needle).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(artifact.filename, "nursing_notes_Jane_Roe_20240517_140309.txt");
    }

    #[test]
    fn partial_metadata_only_lists_present_fields() {
        let patient = PatientMetadata {
            room: Some("3N-21".into()),
            ..Default::default()
        };
        let artifact = build_artifact(
            Some(&patient),
            &order(),
            &ObservationNote::default(),
            &generated(),
            at(),
        );
        assert!(artifact.content.contains("PATIENT INFORMATION\nRoom: 3N-21\n\n"));
        assert!(!artifact.content.contains("Name:"));
        assert_eq!(artifact.filename, "nursing_notes_20240517_140309.txt");
    }

    #[test]
    fn filename_is_sanitised() {
        assert_eq!(
            artifact_filename(Some(" O'Brien, J./bed 2 "), "20240517_140309"),
            "nursing_notes_O_Brien__J__bed_2_20240517_140309.txt"
        );
        assert_eq!(
            artifact_filename(Some("   "), "20240517_140309"),
            "nursing_notes_20240517_140309.txt"
        );
    }

    #[test]
    fn filename_is_always_safe_for_generated_names() {
        for _ in 0..20 {
            let name: String = Name().fake();
            let filename = artifact_filename(Some(&name), "20240517_140309");
            assert!(filename.starts_with("nursing_notes_"));
            assert!(filename.ends_with("_20240517_140309.txt"));
            assert!(filename
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.')));
        }
    }
}
