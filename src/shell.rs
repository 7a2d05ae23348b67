//! The interactive menu shell.
//!
//! A thin loop over the gradebook: it prompts, calls one gradebook operation, and
//! prints the outcome. Every core error is reported and control returns to the menu
//! with the gradebook unchanged.

use crate::render;
use core_types::{check_subject, parse_grade, CoreError, Grade};
use roster::Gradebook;
use std::io::{self, BufRead, Write};

const MENU: &str = "\
GRADEBOOK MANAGEMENT SYSTEM
1. Add student
2. Remove student
3. Update student grade
4. View all students
5. Search student by name
6. Sort students by average
7. Sort students by subject
8. Sort students by name
9. View subject statistics
10. View class summary
11. Exit";

/// What the loop should do after handling one menu choice.
enum Flow {
    Continue,
    Exit,
}

pub struct Shell<'a, R, W> {
    book: &'a mut Gradebook,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(book: &'a mut Gradebook, input: R, output: W) -> Self {
        Self {
            book,
            input,
            output,
        }
    }

    /// Runs the menu until the user exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "Gradebook loaded with {} students",
            self.book.len()
        )?;

        loop {
            writeln!(self.output, "\n{MENU}")?;
            let Some(choice) = self.prompt("Enter your choice (1-11): ")? else {
                break;
            };

            match self.dispatch(choice.trim())? {
                Flow::Continue => {}
                Flow::Exit => break,
            }
        }

        writeln!(self.output, "Goodbye!")?;
        self.output.flush()
    }

    fn dispatch(&mut self, choice: &str) -> io::Result<Flow> {
        match choice {
            "1" => self.add_student()?,
            "2" => self.remove_student()?,
            "3" => self.update_grade()?,
            "4" => self.view_all()?,
            "5" => self.search()?,
            "6" => self.rank_by_average()?,
            "7" => self.rank_by_subject()?,
            "8" => self.rank_by_name()?,
            "9" => self.subject_stats()?,
            "10" => self.class_summary()?,
            "11" => return Ok(Flow::Exit),
            _ => writeln!(
                self.output,
                "Invalid choice! Please enter a number from 1 to 11."
            )?,
        }
        Ok(Flow::Continue)
    }

    // ==========================================================================
    // Menu actions
    // ==========================================================================

    fn add_student(&mut self) -> io::Result<()> {
        let Some(name) = self.prompt("Enter student name: ")? else {
            return Ok(());
        };
        match self.book.add(&name) {
            Ok(student) => {
                let message = format!("Added student: {}", student.name());
                writeln!(self.output, "{message}")
            }
            Err(e) => self.report(e),
        }
    }

    fn remove_student(&mut self) -> io::Result<()> {
        let Some(name) = self.prompt("Enter student name to remove: ")? else {
            return Ok(());
        };
        match self.book.remove(&name) {
            Ok(removed) => writeln!(self.output, "Removed student: {}", removed.name),
            Err(e) => self.report(e),
        }
    }

    fn update_grade(&mut self) -> io::Result<()> {
        let Some(name) = self.prompt("Enter student name: ")? else {
            return Ok(());
        };
        if let Err(e) = self.book.find(&name) {
            return self.report(e);
        }

        writeln!(self.output, "Available subjects: {}", self.book.subjects().joined())?;
        let Some(subject) = self.prompt("Enter subject: ")? else {
            return Ok(());
        };
        let subject = subject.trim().to_string();
        if let Err(e) = check_subject(self.book.subjects(), &subject) {
            return self.report(e);
        }

        let Some(grade) = self.prompt_grade(&format!("Enter grade for {subject}: "))? else {
            return Ok(());
        };
        match self.book.update_grade(&name, &subject, grade) {
            Ok(()) => writeln!(self.output, "Grade updated successfully!"),
            Err(e) => self.report(e),
        }
    }

    fn view_all(&mut self) -> io::Result<()> {
        if self.book.is_empty() {
            return writeln!(self.output, "No students in the gradebook.");
        }
        let table = render::students_table(self.book.subjects(), &self.book.list_all());
        writeln!(self.output, "\nALL STUDENTS\n{table}")
    }

    fn search(&mut self) -> io::Result<()> {
        let Some(term) = self.prompt("Enter student name to search: ")? else {
            return Ok(());
        };
        match self.book.search(&term) {
            Ok(found) if found.is_empty() => {
                writeln!(self.output, "No students found matching your search.")
            }
            Ok(found) => {
                let table = render::students_table(self.book.subjects(), &found);
                writeln!(self.output, "\nFound {} student(s):\n{table}", found.len())
            }
            Err(e) => self.report(e),
        }
    }

    fn rank_by_average(&mut self) -> io::Result<()> {
        let ranked = self.book.rank_by_average();
        if ranked.is_empty() {
            return writeln!(self.output, "No students with grades to sort.");
        }
        let table = render::ranked_table("Average", &ranked);
        writeln!(self.output, "\nSTUDENTS SORTED BY AVERAGE (Highest to Lowest)\n{table}")
    }

    fn rank_by_subject(&mut self) -> io::Result<()> {
        writeln!(self.output, "Available subjects: {}", self.book.subjects().joined())?;
        let Some(subject) = self.prompt("Enter subject to sort by: ")? else {
            return Ok(());
        };
        let subject = subject.trim();
        match self.book.rank_by_subject(subject) {
            Ok(ranked) if ranked.is_empty() => {
                writeln!(self.output, "No students have grades for {subject} yet.")
            }
            Ok(ranked) => {
                let table = render::ranked_table(subject, &ranked);
                writeln!(
                    self.output,
                    "\nSTUDENTS SORTED BY {} (Highest to Lowest)\n{table}",
                    subject.to_uppercase()
                )
            }
            Err(e) => self.report(e),
        }
    }

    fn rank_by_name(&mut self) -> io::Result<()> {
        let sorted = self.book.rank_by_name();
        if sorted.is_empty() {
            return writeln!(self.output, "No students to sort.");
        }
        let table = render::names_table(&sorted);
        writeln!(self.output, "\nSTUDENTS SORTED BY NAME (A to Z)\n{table}")
    }

    fn subject_stats(&mut self) -> io::Result<()> {
        writeln!(self.output, "Available subjects: {}", self.book.subjects().joined())?;
        let Some(subject) = self.prompt("Enter subject: ")? else {
            return Ok(());
        };
        let subject = subject.trim();
        let stats = match self.book.subject_stats(subject) {
            Ok(stats) => stats,
            Err(e) => return self.report(e),
        };

        let students = self.book.list_all();
        if !students.is_empty() {
            let grades = render::subject_grades_table(subject, &students);
            writeln!(self.output, "\n{} GRADES\n{grades}", subject.to_uppercase())?;
        }
        match stats {
            Some(stats) => {
                let table = render::subject_stats_table(&stats);
                writeln!(self.output, "\nClass Statistics:\n{table}")
            }
            None => writeln!(self.output, "No grades available for this subject yet."),
        }
    }

    fn class_summary(&mut self) -> io::Result<()> {
        let report = self.book.class_report();
        writeln!(
            self.output,
            "{}\n{}",
            render::class_report_table(&report),
            render::class_summary_line(&report)
        )
    }

    // ==========================================================================
    // Prompt helpers
    // ==========================================================================

    /// Prints `message` and reads one line. `None` means input has ended.
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Keeps asking until a valid grade is entered.
    fn prompt_grade(&mut self, message: &str) -> io::Result<Option<Grade>> {
        loop {
            let Some(raw) = self.prompt(message)? else {
                return Ok(None);
            };
            match parse_grade(&raw) {
                Ok(grade) => return Ok(Some(grade)),
                Err(e) => self.report(e)?,
            }
        }
    }

    fn report(&mut self, error: CoreError) -> io::Result<()> {
        tracing::warn!(error = %error, "Operation rejected");
        writeln!(self.output, "Error: {error}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Cursor;

    /// Feeds `script` (one input per line) to a shell over `book` and returns the output.
    fn run_script(book: &mut Gradebook, script: &[&str]) -> String {
        let input = Cursor::new(script.join("\n") + "\n");
        let mut output = Vec::new();
        Shell::new(book, input, &mut output).run().unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_add_and_grade_flow() {
        let mut book = Gradebook::default();

        let out = run_script(&mut book, &["1", "  Ada ", "3", "Ada", "Math", "91.5", "11"]);

        assert!(out.contains("Added student: Ada"));
        assert!(out.contains("Grade updated successfully!"));
        assert!(out.ends_with("Goodbye!\n"));
        assert_eq!(book.find("Ada").unwrap().grade("Math").map(|g| g.value()), Some(dec!(91.5)));
    }

    #[test]
    fn test_invalid_grade_reprompts() {
        let mut book = Gradebook::default();
        book.add("Ada").unwrap();

        let out = run_script(&mut book, &["3", "Ada", "Science", "abc", "150", "88", "11"]);

        assert_eq!(out.matches("Error: Invalid grade").count(), 2);
        assert_eq!(book.find("Ada").unwrap().grade("Science").map(|g| g.value()), Some(dec!(88)));
    }

    #[test]
    fn test_errors_return_to_menu_without_losing_state() {
        let mut book = Gradebook::default();
        book.add("Bob").unwrap();

        let out = run_script(
            &mut book,
            &["1", "Bob", "1", "Bob2", "2", "Ghost", "3", "Bob", "History", "4", "11"],
        );

        assert!(out.contains("Error: Student 'Bob' already exists"));
        assert!(out.contains("Error: Student name cannot contain numbers: 'Bob2'"));
        assert!(out.contains("Error: Student 'Ghost' not found"));
        assert!(out.contains("Error: 'History' is not a valid subject"));
        assert!(out.contains("ALL STUDENTS"));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_rankings_and_statistics() {
        let mut book = Gradebook::default();
        for (name, math) in [("Zed", 70), ("Amy", 90)] {
            book.add(name).unwrap();
            book.update_grade(name, "Math", math).unwrap();
        }
        book.add("Mona").unwrap();

        let script = [
            "6", "7", "Math", "7", "Science", "8", "9", "Math", "9", "English", "10", "11",
        ];
        let out = run_script(&mut book, &script);

        assert!(out.contains("STUDENTS SORTED BY AVERAGE"));
        assert!(out.contains("STUDENTS SORTED BY MATH"));
        assert!(out.contains("No students have grades for Science yet."));
        assert!(out.contains("STUDENTS SORTED BY NAME (A to Z)"));
        assert!(out.contains("Students graded"));
        assert!(out.contains("No grades available for this subject yet."));
        assert!(out.contains("Students: 3 (2 with grades), class average: 80"));
    }

    #[test]
    fn test_subject_view_lists_every_student_before_statistics() {
        let mut book = Gradebook::default();
        for (name, science) in [("John", Some(92)), ("NewStudent", None), ("Sarah", Some(85))] {
            book.add(name).unwrap();
            if let Some(score) = science {
                book.update_grade(name, "Science", score).unwrap();
            }
        }

        let out = run_script(&mut book, &["9", "Science", "9", "English", "9", "Art", "11"]);

        let listing = out.find("SCIENCE GRADES").expect("per-student listing printed");
        let stats = out.find("Class Statistics:").expect("statistics printed");
        assert!(listing < stats);
        assert!(out.contains("NewStudent"));
        assert!(out.contains("No grade yet"));
        assert!(out.contains("ENGLISH GRADES"));
        assert!(out.contains("No grades available for this subject yet."));
        assert!(out.contains("Error: 'Art' is not a valid subject"));
        assert!(!out.contains("ART GRADES"));
    }

    #[test]
    fn test_search_and_remove() {
        let mut book = Gradebook::default();
        for name in ["John", "Sarah", "David"] {
            book.add(name).unwrap();
        }

        let out = run_script(&mut book, &["5", "a", "5", "xyz", "2", "John", "2", "John", "11"]);

        assert!(out.contains("Found 2 student(s):"));
        assert!(out.contains("No students found matching your search."));
        assert!(out.contains("Removed student: John"));
        assert!(out.contains("Error: Student 'John' not found"));
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn test_empty_gradebook_messages() {
        let mut book = Gradebook::default();

        let out = run_script(&mut book, &["4", "6", "8", "11"]);

        assert!(out.contains("No students in the gradebook."));
        assert!(out.contains("No students with grades to sort."));
        assert!(out.contains("No students to sort."));
    }

    #[test]
    fn test_invalid_choice_and_end_of_input() {
        let mut book = Gradebook::default();

        let out = run_script(&mut book, &["42"]);

        assert!(out.contains("Invalid choice! Please enter a number from 1 to 11."));
        assert!(out.ends_with("Goodbye!\n"));
    }
}
