use strum::{Display, EnumIter};

use crate::kb::models::KnowledgeBase;
use crate::text::capitalize;
use crate::text::similarity::{contains_any, intent_match};

use super::finders;
use super::timetable;

/// Help message returned when no intent matches, or a matched intent cannot
/// resolve anything. The single user-visible failure mode.
pub const FALLBACK_ANSWER: &str = "I can help with details about principal, <strong>vice principal</strong>, HOD, faculty, fees, <strong>timetable tables</strong>, departments, labs, facilities, semester calendar events, subjects, and academic calendar PDF. Try asking: 'Vice principal', 'CSE HOD', '<strong>Monday timetable for 7th sem A</strong>', 'Who teaches IoT?', or 'Exam fee last date?'.";

const CALENDAR_LINK_KEYWORDS: &[&str] =
    &["calendar", "schedule of events", "exam schedule", "academic schedule"];

const CALENDAR_EVENT_KEYWORDS: &[&str] = &[
    "independence day",
    "ganesha",
    "deepavali",
    "conference",
    "rajyotsava",
    "phase-1",
    "phase-2",
    "cie-1",
    "cie-2",
    "industrial visit",
    "last working day",
    "lab internals",
    "report submission",
    "practical exams",
    "theory exams",
];

const VICE_PRINCIPAL_WORDS: &[&str] =
    &["vice principal", "viceprincipal", "vp", "assistant principal"];

const PRINCIPAL_WORDS: &[&str] = &["principal", "head of college", "college principal"];

const HOD_KEYWORDS: &[&str] = &["hod", "head of department"];

const FACULTY_KEYWORDS: &[&str] = &["faculty", "professor", "staff"];

const FEE_KEYWORDS: &[&str] = &["fee", "exam fee", "payment", "tuition"];

const DEPARTMENT_KEYWORDS: &[&str] = &["department", "cse", "ece", "computer", "electronics"];

// Department info defers to the staff intents above it on keyword overlap.
const STAFF_KEYWORDS: &[&str] = &["hod", "faculty", "professor", "staff"];

const TIMETABLE_KEYWORDS: &[&str] = &["timetable", "class schedule", "time table", "periods"];

const WEEKDAYS: &[&str] = &["monday", "tuesday", "wednesday", "thursday", "friday"];

const SUBJECT_KEYWORDS: &[&str] =
    &["subject", "code", "credits", "faculty for", "who teaches", "teacher of"];

const FACILITY_KEYWORDS: &[&str] = &["library", "canteen", "hostel", "facility", "facilities"];

const LAB_KEYWORDS: &[&str] = &["lab", "laboratory"];

const EVENT_KEYWORDS: &[&str] = &["event", "orientation", "hackathon", "function"];

const COLLEGE_NAME_KEYWORDS: &[&str] =
    &["college name", "what is this college", "which college", "name of college"];

const DIRECTION_WORDS: &[&str] = &["where is", "location of", "how to reach", "how do i go"];

/// The intent chain. Declaration order is the routing order: the first
/// handler that produces an answer wins, and earlier intents deliberately
/// shadow later ones on keyword overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Intent {
    SemesterQna,
    CalendarLink,
    CalendarEvent,
    VicePrincipal,
    Principal,
    Hod,
    Faculty,
    Fees,
    DepartmentInfo,
    Timetable,
    Subject,
    Facilities,
    Labs,
    Events,
    CollegeName,
    Directions,
}

impl Intent {
    /// Run this intent against a normalized query. `None` means the gate did
    /// not match (or matched but resolved nothing and defers to later
    /// intents), so the router moves on.
    pub fn try_answer(self, q: &str, kb: &KnowledgeBase) -> Option<String> {
        match self {
            Intent::SemesterQna => semester_qna(q, kb),
            Intent::CalendarLink => calendar_link(q),
            Intent::CalendarEvent => calendar_event(q, kb),
            Intent::VicePrincipal => vice_principal(q, kb),
            Intent::Principal => principal(q, kb),
            Intent::Hod => hod(q, kb),
            Intent::Faculty => faculty(q, kb),
            Intent::Fees => fees(q, kb),
            Intent::DepartmentInfo => department_info(q, kb),
            Intent::Timetable => timetable_answer(q, kb),
            Intent::Subject => subject(q, kb),
            Intent::Facilities => facilities(q, kb),
            Intent::Labs => labs(q, kb),
            Intent::Events => events(q, kb),
            Intent::CollegeName => college_name(q, kb),
            Intent::Directions => directions(q, kb),
        }
    }
}

fn text_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}

fn semester_qna(q: &str, kb: &KnowledgeBase) -> Option<String> {
    let qa = finders::find_semester_qna(kb, q)?;
    Some(text_or(&qa.answer, "Information not available.").to_string())
}

fn calendar_link(q: &str) -> Option<String> {
    if !intent_match(q, CALENDAR_LINK_KEYWORDS) {
        return None;
    }
    Some(
        "You can view or download the Academic Calendar here: \
         <a href='/calendar' target='_blank'>Open Academic Calendar (PDF)</a>"
            .to_string(),
    )
}

fn calendar_event(q: &str, kb: &KnowledgeBase) -> Option<String> {
    if !intent_match(q, CALENDAR_EVENT_KEYWORDS) {
        return None;
    }
    // No close enough event: fall through to the later intents.
    let ev = finders::find_calendar_event(kb, q)?;
    Some(format!(
        "{}: {}.",
        text_or(&ev.title, "Event"),
        text_or(&ev.date, "Date not available")
    ))
}

fn vice_principal(q: &str, kb: &KnowledgeBase) -> Option<String> {
    if !contains_any(q, VICE_PRINCIPAL_WORDS) {
        return None;
    }
    let vp = &kb.college.vice_principal;
    let detail = if vp.specialization.is_empty() {
        String::new()
    } else {
        format!(" (Specialization: {})", vp.specialization)
    };
    Some(format!(
        "Vice Principal: {}{}",
        text_or(&vp.name, "Not available"),
        detail
    ))
}

fn principal(q: &str, kb: &KnowledgeBase) -> Option<String> {
    if !contains_any(q, PRINCIPAL_WORDS) {
        return None;
    }
    let p = &kb.college.principal;
    let mut extra = Vec::new();
    if !p.specialization.is_empty() {
        extra.push(format!("Specialization: {}", p.specialization));
    }
    if !p.contact.is_empty() {
        extra.push(format!("Contact: {}", p.contact));
    }
    let mut answer = format!("Principal: {}", text_or(&p.name, "Not available"));
    if !extra.is_empty() {
        answer.push_str(&format!(" ({})", extra.join(" · ")));
    }
    Some(answer)
}

fn hod(q: &str, kb: &KnowledgeBase) -> Option<String> {
    if !intent_match(q, HOD_KEYWORDS) {
        return None;
    }
    Some(match finders::find_department(kb, q) {
        Some(dept) => format!("HOD of {}: {}", dept.name, text_or(&dept.hod, "Not available")),
        None => "Please specify a valid department for HOD information.".to_string(),
    })
}

fn faculty(q: &str, kb: &KnowledgeBase) -> Option<String> {
    if !intent_match(q, FACULTY_KEYWORDS) {
        return None;
    }
    Some(match finders::find_department(kb, q) {
        Some(dept) => {
            let members: Vec<&str> = dept.faculty.iter().map(|f| f.name.as_str()).collect();
            format!("{} Faculty Members: {}", dept.name, members.join(", "))
        }
        None => "Please specify a valid department for faculty information.".to_string(),
    })
}

fn fees(q: &str, kb: &KnowledgeBase) -> Option<String> {
    if !intent_match(q, FEE_KEYWORDS) {
        return None;
    }
    let fees = &kb.fees;
    let tuition_last = text_or(&fees.tuition_fee_last_date, "N/A");
    let exam_last = text_or(&fees.exam_fee_last_date, "N/A");
    let portal = text_or(&fees.payment_portal, "N/A");

    if let Some(dept) = finders::find_department(kb, q) {
        let mut parts = Vec::new();
        if let Some(dept_fees) = fees.department_fees.get(&dept.short.to_lowercase()) {
            if let Some(tuition) = &dept_fees.tuition {
                parts.push(format!("{} Tuition: {}", dept.name, tuition));
            }
            if let Some(exam) = &dept_fees.exam {
                parts.push(format!("{} Exam Fee: {}", dept.name, exam));
            }
        }
        parts.push(format!("Tuition Last Date: {tuition_last}"));
        parts.push(format!("Exam Fee Last Date: {exam_last}"));
        parts.push(format!("Payment via: {portal}"));
        return Some(parts.join(" | "));
    }

    Some(format!(
        "Tuition Last Date: {tuition_last} | Exam Fee Last Date: {exam_last} | Payment via: {portal}"
    ))
}

fn department_info(q: &str, kb: &KnowledgeBase) -> Option<String> {
    // Staff questions about a department belong to the HOD/faculty intents.
    if !intent_match(q, DEPARTMENT_KEYWORDS) || intent_match(q, STAFF_KEYWORDS) {
        return None;
    }
    Some(match finders::find_department(kb, q) {
        Some(dept) => {
            let courses = if dept.courses.is_empty() {
                "Not specified".to_string()
            } else {
                dept.courses.join(", ")
            };
            format!(
                "{} is located at {}. Courses offered: {}.",
                text_or(&dept.name, "Department"),
                text_or(&dept.location, "Location not available"),
                courses
            )
        }
        None => "Please specify a valid department.".to_string(),
    })
}

fn timetable_answer(q: &str, kb: &KnowledgeBase) -> Option<String> {
    if !intent_match(q, TIMETABLE_KEYWORDS) {
        return None;
    }

    let section = if q.contains(" section b") || q.contains(" b ") || q.contains("sem b") {
        "B"
    } else {
        "A"
    };
    let rows = kb.timetable(section);

    let day_in_q = WEEKDAYS.iter().copied().find(|day| q.contains(day));
    Some(match day_in_q {
        Some(day) => match finders::find_day_row(rows, day) {
            Some(row) => timetable::render_single_day(row, section),
            None => format!(
                "Timetable for {} (7th sem {}) not available.",
                capitalize(day),
                section
            ),
        },
        None => timetable::render_full_week(rows, section),
    })
}

fn subject(q: &str, kb: &KnowledgeBase) -> Option<String> {
    if !intent_match(q, SUBJECT_KEYWORDS) {
        return None;
    }
    Some(match finders::find_subject(kb, q) {
        Some(subject) => {
            let mut parts = vec![
                format!("{} — {}", subject.code, subject.name),
                format!("Faculty: {}", text_or(&subject.faculty, "Faculty not specified")),
            ];
            if let Some(credits) = subject.credits {
                parts.push(format!("Credits: {credits}"));
            }
            parts.join(" | ")
        }
        None => "Please specify a valid subject.".to_string(),
    })
}

fn facilities(q: &str, kb: &KnowledgeBase) -> Option<String> {
    if !intent_match(q, FACILITY_KEYWORDS) {
        return None;
    }
    for facility in &kb.facilities {
        let name = facility.name.to_lowercase();
        if name.is_empty() || !q.contains(&name) {
            continue;
        }
        let mut parts = vec![format!(
            "{} — {}",
            facility.name,
            text_or(&facility.location, "Location not available")
        )];
        if !facility.hours.is_empty() {
            parts.push(format!("Hours: {}", facility.hours));
        }
        if !facility.notes.is_empty() {
            parts.push(format!("Notes: {}", facility.notes));
        }
        if !facility.directions.is_empty() {
            parts.push(format!("Directions: {}", facility.directions));
        }
        return Some(parts.join(" | "));
    }

    if kb.facilities.is_empty() {
        return None;
    }
    let brief: Vec<String> = kb
        .facilities
        .iter()
        .map(|f| {
            format!(
                "{} — {}",
                text_or(&f.name, "Facility"),
                text_or(&f.location, "Location not available")
            )
        })
        .collect();
    Some(format!("Facilities: {}", brief.join(" | ")))
}

fn labs(q: &str, kb: &KnowledgeBase) -> Option<String> {
    if !intent_match(q, LAB_KEYWORDS) {
        return None;
    }
    for lab in &kb.labs {
        let name = lab.name.to_lowercase();
        // A lab is also addressable by the first word of its name.
        let first_word_hit = name
            .split_whitespace()
            .next()
            .is_some_and(|word| q.contains(word));
        if name.is_empty() || !(q.contains(&name) || first_word_hit) {
            continue;
        }
        let mut parts = vec![format!(
            "{} — {}",
            lab.name,
            text_or(&lab.location, "Location not available")
        )];
        if !lab.directions.is_empty() {
            parts.push(format!("Directions: {}", lab.directions));
        }
        return Some(parts.join(" | "));
    }

    if kb.labs.is_empty() {
        return None;
    }
    let brief: Vec<String> = kb
        .labs
        .iter()
        .map(|lab| {
            format!(
                "{} — {}",
                text_or(&lab.name, "Lab"),
                text_or(&lab.location, "Location not available")
            )
        })
        .collect();
    Some(format!("Labs: {}", brief.join(" | ")))
}

fn events(q: &str, kb: &KnowledgeBase) -> Option<String> {
    if !intent_match(q, EVENT_KEYWORDS) {
        return None;
    }
    if kb.events.is_empty() {
        return Some("No events information is available right now.".to_string());
    }
    let lines: Vec<String> = kb
        .events
        .iter()
        .map(|e| {
            format!(
                "{} — {} at {}",
                text_or(&e.title, "Event"),
                text_or(&e.date, "Date N/A"),
                text_or(&e.venue, "Venue N/A")
            )
        })
        .collect();
    Some(format!("Upcoming / scheduled events: {}", lines.join(" | ")))
}

fn college_name(q: &str, kb: &KnowledgeBase) -> Option<String> {
    if !intent_match(q, COLLEGE_NAME_KEYWORDS) {
        return None;
    }
    Some(format!(
        "This helpdesk is for: {}.",
        text_or(&kb.college.name, "Our College")
    ))
}

fn directions(q: &str, kb: &KnowledgeBase) -> Option<String> {
    if !contains_any(q, DIRECTION_WORDS) {
        return None;
    }

    if let Some(dept) = finders::find_department(kb, q) {
        let mut answer = format!(
            "{} is at {}.",
            dept.name,
            text_or(&dept.location, "Location not available")
        );
        if !dept.directions.is_empty() {
            answer.push_str(&format!(" Directions: {}", dept.directions));
        }
        return Some(answer);
    }

    for facility in &kb.facilities {
        let name = facility.name.to_lowercase();
        if name.is_empty() || !q.contains(&name) {
            continue;
        }
        let mut answer = format!(
            "{} is at {}.",
            facility.name,
            text_or(&facility.location, "Location not available")
        );
        if !facility.directions.is_empty() {
            answer.push_str(&format!(" Directions: {}", facility.directions));
        }
        return Some(answer);
    }

    None
}
