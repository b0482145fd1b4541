use crate::model::student::Student;

/// Returns the records matching a search term, preserving their order.
///
/// A record matches when the term is a case-insensitive substring of its
/// name, email, course or enrollment id. An empty term matches everything.
pub fn filter_students<'a>(students: &'a [Student], term: &str) -> Vec<&'a Student> {
    if term.is_empty() {
        return students.iter().collect();
    }

    let needle = term.to_lowercase();
    students
        .iter()
        .filter(|s| {
            [&s.name, &s.email, &s.course, &s.enrollment_id]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}
