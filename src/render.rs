//! Terminal tables for students, rankings and statistics.

use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use roster::{ClassReport, Ranked, StudentRecord, SubjectSet, SubjectStats};
use rust_decimal::Decimal;

const MISSING: &str = "-";
const NO_GRADE: &str = "No grade yet";

fn new_table<I, S>(header: I) -> Table
where
    I: IntoIterator<Item = S>,
    S: Into<comfy_table::Cell>,
{
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header.into_iter().map(Into::into).collect::<Vec<comfy_table::Cell>>());
    table
}

/// Averages are shown to two decimal places; grades are shown as recorded.
fn average(value: Decimal) -> String {
    value.round_dp(2).normalize().to_string()
}

/// One row per student with a column per subject and their average.
pub fn students_table(subjects: &SubjectSet, students: &[StudentRecord]) -> Table {
    let header = std::iter::once("Name")
        .chain(subjects.iter())
        .chain(std::iter::once("Average"));
    let mut table = new_table(header);

    for student in students {
        let mut row = vec![student.name.clone()];
        row.extend(subjects.iter().map(|subject| {
            student
                .grade(subject)
                .map_or_else(|| MISSING.to_string(), |g| g.to_string())
        }));
        row.push(if student.has_grades() {
            average(student.average())
        } else {
            MISSING.to_string()
        });
        table.add_row(row);
    }
    table
}

/// Position, name and the score the ranking was built on.
pub fn ranked_table(score_label: &str, ranked: &[Ranked]) -> Table {
    let mut table = new_table(["#", "Name", score_label]);
    for (position, entry) in ranked.iter().enumerate() {
        table.add_row(vec![
            (position + 1).to_string(),
            entry.name().to_string(),
            average(entry.score),
        ]);
    }
    table
}

pub fn names_table(students: &[StudentRecord]) -> Table {
    let mut table = new_table(["#", "Name"]);
    for (position, student) in students.iter().enumerate() {
        table.add_row(vec![(position + 1).to_string(), student.name.clone()]);
    }
    table
}

/// Every student's grade in one subject, in roster order.
pub fn subject_grades_table(subject: &str, students: &[StudentRecord]) -> Table {
    let mut table = new_table(["Name", subject]);
    for student in students {
        let grade = student
            .grade(subject)
            .map_or_else(|| NO_GRADE.to_string(), |g| g.to_string());
        table.add_row(vec![student.name.clone(), grade]);
    }
    table
}

pub fn subject_stats_table(stats: &SubjectStats) -> Table {
    let mut table = new_table([stats.subject.as_str(), ""]);
    table
        .add_row(vec!["Average".to_string(), average(stats.average)])
        .add_row(vec!["Highest".to_string(), stats.max.to_string()])
        .add_row(vec!["Lowest".to_string(), stats.min.to_string()])
        .add_row(vec!["Students graded".to_string(), stats.count.to_string()]);
    table
}

/// Per-subject statistics for the whole class.
pub fn class_report_table(report: &ClassReport) -> Table {
    let mut table = new_table(["Subject", "Average", "Highest", "Lowest", "Graded"]);
    for (subject, stats) in &report.subjects {
        let row = match stats {
            Some(stats) => vec![
                subject.clone(),
                average(stats.average),
                stats.max.to_string(),
                stats.min.to_string(),
                stats.count.to_string(),
            ],
            None => vec![
                subject.clone(),
                MISSING.to_string(),
                MISSING.to_string(),
                MISSING.to_string(),
                "0".to_string(),
            ],
        };
        table.add_row(row);
    }
    table
}

/// The one-line totals printed under the class report.
pub fn class_summary_line(report: &ClassReport) -> String {
    format!(
        "Students: {} ({} with grades), class average: {}",
        report.total_students,
        report.graded_students,
        average(report.class_average)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster::Gradebook;

    fn sample() -> Gradebook {
        let mut book = Gradebook::default();
        book.add("John").unwrap();
        book.update_grade("John", "Math", 85).unwrap();
        book.update_grade("John", "English", 78).unwrap();
        book.add("NewStudent").unwrap();
        book
    }

    #[test]
    fn test_students_table_marks_missing_grades() {
        let book = sample();

        let rendered = students_table(book.subjects(), &book.list_all()).to_string();

        assert!(rendered.contains("Science"));
        assert!(rendered.contains("John"));
        assert!(rendered.contains("81.5"));
        assert!(rendered.contains(MISSING));
    }

    #[test]
    fn test_average_is_rounded_to_two_places() {
        assert_eq!(average(Decimal::new(893333, 4)), "89.33");
        assert_eq!(average(Decimal::new(8900, 2)), "89");
    }

    #[test]
    fn test_subject_grades_table_marks_ungraded_students() {
        let book = sample();

        let rendered = subject_grades_table("Math", &book.list_all()).to_string();

        assert!(rendered.contains("John"));
        assert!(rendered.contains("85"));
        assert!(rendered.contains("NewStudent"));
        assert!(rendered.contains(NO_GRADE));
    }

    #[test]
    fn test_class_report_lists_ungraded_subject() {
        let book = sample();

        let report = book.class_report();
        let rendered = class_report_table(&report).to_string();

        assert!(rendered.contains("Science"));
        assert_eq!(
            class_summary_line(&report),
            "Students: 2 (1 with grades), class average: 81.5"
        );
    }
}
