use crate::kb::models::{CalendarEvent, Department, KnowledgeBase, SemesterQna, Subject, TimetableRow};
use crate::text::similarity::similarity;

// Acceptance thresholds are contractual values, tuned on the live question
// set. Lowering one trades unanswered queries for wrong-entity answers.
pub const DEPARTMENT_THRESHOLD: f64 = 0.6;
pub const CALENDAR_EVENT_THRESHOLD: f64 = 0.55;
pub const SEMESTER_QNA_THRESHOLD: f64 = 0.7;
pub const SUBJECT_THRESHOLD: f64 = 0.6;

/// Department lookup. A name or short code appearing verbatim in the query
/// wins outright; otherwise the best similarity score above the threshold.
/// Ties keep the first candidate in document order.
pub fn find_department<'a>(kb: &'a KnowledgeBase, q: &str) -> Option<&'a Department> {
    for dept in &kb.departments {
        let name = dept.name.to_lowercase();
        let short = dept.short.to_lowercase();
        if (!name.is_empty() && q.contains(&name)) || (!short.is_empty() && q.contains(&short)) {
            return Some(dept);
        }
    }

    let mut best: Option<&Department> = None;
    let mut best_score = 0.0;
    for dept in &kb.departments {
        for key in [&dept.name, &dept.short] {
            let score = similarity(q, &key.to_lowercase());
            if score > best_score {
                best_score = score;
                best = Some(dept);
            }
        }
    }
    if best_score > DEPARTMENT_THRESHOLD { best } else { None }
}

/// Best calendar event by its "title date" key: verbatim containment first,
/// then similarity.
pub fn find_calendar_event<'a>(kb: &'a KnowledgeBase, q: &str) -> Option<&'a CalendarEvent> {
    let mut best: Option<&CalendarEvent> = None;
    let mut best_score = 0.0;
    for ev in kb.calendar_events() {
        let text = format!("{} {}", ev.title, ev.date).to_lowercase();
        if !ev.title.is_empty() && q.contains(&ev.title.to_lowercase()) {
            return Some(ev);
        }
        let score = similarity(q, &text);
        if score > best_score {
            best_score = score;
            best = Some(ev);
        }
    }
    if best_score > CALENDAR_EVENT_THRESHOLD { best } else { None }
}

/// Near-exact match against the literal question bank.
pub fn find_semester_qna<'a>(kb: &'a KnowledgeBase, q: &str) -> Option<&'a SemesterQna> {
    let mut best: Option<&SemesterQna> = None;
    let mut best_score = 0.0;
    for qa in &kb.semester_qna {
        let question = qa.question.to_lowercase();
        if !question.is_empty() && q.contains(&question) {
            return Some(qa);
        }
        let score = similarity(q, &question);
        if score > best_score {
            best_score = score;
            best = Some(qa);
        }
    }
    if best_score > SEMESTER_QNA_THRESHOLD { best } else { None }
}

/// Best subject by name or code: verbatim containment first, then similarity.
pub fn find_subject<'a>(kb: &'a KnowledgeBase, q: &str) -> Option<&'a Subject> {
    for subject in kb.subjects() {
        let name = subject.name.to_lowercase();
        let code = subject.code.to_lowercase();
        if (!name.is_empty() && q.contains(&name)) || (!code.is_empty() && q.contains(&code)) {
            return Some(subject);
        }
    }

    let mut best: Option<&Subject> = None;
    let mut best_score = 0.0;
    for subject in kb.subjects() {
        for key in [&subject.name, &subject.code] {
            let score = similarity(q, &key.to_lowercase());
            if score > best_score {
                best_score = score;
                best = Some(subject);
            }
        }
    }
    if best_score > SUBJECT_THRESHOLD { best } else { None }
}

/// Row for one weekday, by case-insensitive day-name equality.
pub fn find_day_row<'a>(rows: &'a [TimetableRow], day: &str) -> Option<&'a TimetableRow> {
    rows.iter().find(|row| row.day.eq_ignore_ascii_case(day))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kb::models::{Department, KnowledgeBase, SemesterQna, Subject, TimetableRow};

    fn kb_with_departments() -> KnowledgeBase {
        let mut kb = KnowledgeBase::default();
        kb.departments = vec![
            Department {
                name: "Computer Science and Engineering".to_string(),
                short: "CSE".to_string(),
                hod: "Dr. K. Prasad".to_string(),
                ..Default::default()
            },
            Department {
                name: "Electronics and Communication Engineering".to_string(),
                short: "ECE".to_string(),
                ..Default::default()
            },
        ];
        kb
    }

    #[test]
    fn test_short_code_substring_wins() {
        let kb = kb_with_departments();
        let dept = find_department(&kb, "cse hod").unwrap();
        assert_eq!(dept.short, "CSE");
    }

    #[test]
    fn test_full_name_substring_wins() {
        let kb = kb_with_departments();
        let dept = find_department(&kb, "where is electronics and communication engineering").unwrap();
        assert_eq!(dept.short, "ECE");
    }

    #[test]
    fn test_department_below_threshold_is_none() {
        let kb = kb_with_departments();
        assert!(find_department(&kb, "exam fee last date").is_none());
        assert!(find_department(&kb, "xyzzy qwerty").is_none());
    }

    #[test]
    fn test_finder_is_deterministic() {
        let kb = kb_with_departments();
        let first = find_department(&kb, "cse hod").map(|d| d.short.clone());
        for _ in 0..5 {
            assert_eq!(find_department(&kb, "cse hod").map(|d| d.short.clone()), first);
        }
    }

    #[test]
    fn test_tie_keeps_first_candidate() {
        let mut kb = KnowledgeBase::default();
        // Identical keys: strict > while scanning keeps the earlier entry.
        kb.semester_qna = vec![
            SemesterQna {
                question: "when do classes start".to_string(),
                answer: "first".to_string(),
            },
            SemesterQna {
                question: "when do classes start".to_string(),
                answer: "second".to_string(),
            },
        ];
        let qa = find_semester_qna(&kb, "when do classes start").unwrap();
        assert_eq!(qa.answer, "first");
    }

    #[test]
    fn test_subject_by_code() {
        let mut kb = KnowledgeBase::default();
        kb.pdf_data.subjects = vec![Subject {
            code: "18CS71".to_string(),
            name: "Internet of Things".to_string(),
            faculty: "Prof. Rao".to_string(),
            credits: Some(4),
        }];
        let subject = find_subject(&kb, "who teaches internet of things").unwrap();
        assert_eq!(subject.code, "18CS71");
        assert!(find_subject(&kb, "xyzzy qwerty").is_none());
    }

    #[test]
    fn test_day_row_lookup() {
        let rows = vec![
            TimetableRow {
                day: "Monday".to_string(),
                periods: vec!["Maths".to_string()],
            },
            TimetableRow {
                day: "Tuesday".to_string(),
                periods: vec![],
            },
        ];
        assert_eq!(find_day_row(&rows, "monday").unwrap().day, "Monday");
        assert!(find_day_row(&rows, "friday").is_none());
    }
}
