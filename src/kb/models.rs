use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Static knowledge base document. Every field carries `#[serde(default)]`
/// so an absent or malformed section deserializes to an empty value instead
/// of failing the load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KnowledgeBase {
    #[serde(default)]
    pub college: College,
    #[serde(default)]
    pub departments: Vec<Department>,
    #[serde(default)]
    pub fees: Fees,
    #[serde(default)]
    pub facilities: Vec<Facility>,
    #[serde(default)]
    pub labs: Vec<Lab>,
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub semester_qna: Vec<SemesterQna>,
    #[serde(default)]
    pub pdf_data: PdfData,
}

impl KnowledgeBase {
    pub fn calendar_events(&self) -> &[CalendarEvent] {
        &self.pdf_data.calendar_events
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.pdf_data.subjects
    }

    /// Timetable rows for section "B", any other label selects section A.
    pub fn timetable(&self, section: &str) -> &[TimetableRow] {
        if section.eq_ignore_ascii_case("b") {
            &self.pdf_data.timetable_b
        } else {
            &self.pdf_data.timetable_a
        }
    }
}

/// Envelope for the records extracted from the semester PDF.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PdfData {
    #[serde(default)]
    pub calendar_events: Vec<CalendarEvent>,
    #[serde(default, rename = "timetable_A")]
    pub timetable_a: Vec<TimetableRow>,
    #[serde(default, rename = "timetable_B")]
    pub timetable_b: Vec<TimetableRow>,
    #[serde(default)]
    pub subjects: Vec<Subject>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct College {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub principal: Person,
    #[serde(default, rename = "vice principal")]
    pub vice_principal: Person,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Person {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub specialization: String,
    #[serde(default)]
    pub contact: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Department {
    #[serde(default)]
    pub name: String,
    /// Short code, e.g. "CSE". Unique across departments, like the name.
    #[serde(default)]
    pub short: String,
    #[serde(default)]
    pub hod: String,
    #[serde(default)]
    pub faculty: Vec<FacultyMember>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub directions: String,
    #[serde(default)]
    pub courses: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FacultyMember {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Subject {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub faculty: String,
    #[serde(default)]
    pub credits: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalendarEvent {
    #[serde(default)]
    pub title: String,
    /// Free text, not a parsed date.
    #[serde(default)]
    pub date: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimetableRow {
    #[serde(default)]
    pub day: String,
    #[serde(default)]
    pub periods: Vec<String>,
}

/// Literal question/answer pair. A close enough query match returns the
/// stored answer verbatim, ahead of every other intent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SemesterQna {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Fees {
    #[serde(default)]
    pub tuition_fee_last_date: String,
    #[serde(default)]
    pub exam_fee_last_date: String,
    #[serde(default)]
    pub payment_portal: String,
    /// Keyed by lowercase department short code.
    #[serde(default)]
    pub department_fees: HashMap<String, DepartmentFees>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DepartmentFees {
    #[serde(default)]
    pub tuition: Option<String>,
    #[serde(default)]
    pub exam: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Facility {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub hours: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub directions: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Lab {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub directions: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Event {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub venue: String,
}
