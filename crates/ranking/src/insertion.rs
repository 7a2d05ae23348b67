use crate::ranked::Ranked;
use core_types::StudentRecord;

/// Ranks students by their grade in `subject`, highest first, using insertion sort.
///
/// Students without a grade in the subject are excluded. Elements shift right only
/// while they are strictly lower than the key, so equal grades keep their input order.
/// The caller is responsible for checking that `subject` is a recognised subject.
pub fn insertion_sort_by_subject(students: Vec<StudentRecord>, subject: &str) -> Vec<Ranked> {
    let mut ranked: Vec<Ranked> = students
        .into_iter()
        .filter_map(|student| {
            student
                .grade(subject)
                .map(|grade| Ranked::new(grade.value(), student))
        })
        .collect();

    for i in 1..ranked.len() {
        let key = ranked[i].score;
        let mut j = i;
        while j > 0 && ranked[j - 1].score < key {
            j -= 1;
        }
        // Shift the lower-scoring run one slot right and drop the key in front of it.
        ranked[j..=i].rotate_right(1);
    }

    tracing::debug!(subject, ranked = ranked.len(), "Sorted students by subject");
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::check_grade;
    use indexmap::IndexMap;
    use rust_decimal_macros::dec;

    fn record(name: &str, grades: &[(&str, i32)]) -> StudentRecord {
        let grades: IndexMap<_, _> = grades
            .iter()
            .map(|&(subject, score)| (subject.to_string(), check_grade(score).unwrap()))
            .collect();
        StudentRecord::new(name, grades)
    }

    fn names(ranked: &[Ranked]) -> Vec<&str> {
        ranked.iter().map(Ranked::name).collect()
    }

    #[test]
    fn test_ties_keep_input_order() {
        let students = vec![
            record("A", &[("Math", 80)]),
            record("B", &[("Math", 80)]),
            record("C", &[("Math", 70)]),
        ];

        let ranked = insertion_sort_by_subject(students, "Math");

        assert_eq!(names(&ranked), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_descending_with_students_lacking_the_subject_excluded() {
        let students = vec![
            record("John", &[("Math", 85), ("English", 78)]),
            record("NoMath", &[("English", 99)]),
            record("David", &[("Math", 78)]),
            record("Sarah", &[("Math", 95)]),
            record("Empty", &[]),
        ];

        let ranked = insertion_sort_by_subject(students, "Math");

        assert_eq!(names(&ranked), vec!["Sarah", "John", "David"]);
        assert_eq!(ranked[0].score, dec!(95));
    }

    #[test]
    fn test_later_tie_does_not_jump_ahead() {
        let students = vec![
            record("First", &[("Science", 60)]),
            record("Top", &[("Science", 90)]),
            record("Second", &[("Science", 60)]),
        ];

        let ranked = insertion_sort_by_subject(students, "Science");

        assert_eq!(names(&ranked), vec!["Top", "First", "Second"]);
    }

    #[test]
    fn test_nobody_graded_yields_empty() {
        let ranked = insertion_sort_by_subject(vec![record("A", &[("Math", 50)])], "Science");
        assert!(ranked.is_empty());
    }
}
