use crate::ranked::Ranked;
use core_types::StudentRecord;

/// Ranks students by average, highest first, using bubble sort.
///
/// Only students with at least one grade take part; the rest are left out of the
/// result rather than ranked at zero. A swap happens only when the left average is
/// strictly lower than the right one, so equal averages keep their input order.
pub fn bubble_sort_by_average(students: Vec<StudentRecord>) -> Vec<Ranked> {
    let mut ranked: Vec<Ranked> = students
        .into_iter()
        .filter(StudentRecord::has_grades)
        .map(|student| Ranked::new(student.average(), student))
        .collect();

    let n = ranked.len();
    for i in 0..n {
        for j in 0..n - i - 1 {
            if ranked[j].score < ranked[j + 1].score {
                ranked.swap(j, j + 1);
            }
        }
    }

    tracing::debug!(ranked = n, "Sorted students by average");
    ranked
}

/// Orders every student by name, A to Z, using bubble sort.
///
/// Names are compared as plain strings, so uppercase letters sort before lowercase.
pub fn bubble_sort_by_name(mut students: Vec<StudentRecord>) -> Vec<StudentRecord> {
    let n = students.len();
    for i in 0..n {
        for j in 0..n - i - 1 {
            if students[j].name > students[j + 1].name {
                students.swap(j, j + 1);
            }
        }
    }

    tracing::debug!(students = n, "Sorted students by name");
    students
}
