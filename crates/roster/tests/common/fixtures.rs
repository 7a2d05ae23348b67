//! Test fixtures and data for gradebook tests

use roster::Gradebook;

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    pub const SUBJECTS: [&'static str; 3] = ["Math", "English", "Science"];

    /// An empty gradebook over the standard subjects.
    pub fn empty() -> Gradebook {
        Gradebook::new(Self::SUBJECTS)
    }

    /// The classic sample class: three graded students and one without grades.
    pub fn sample_class() -> Gradebook {
        let mut book = Self::empty();
        Self::add_graded(&mut book, "John", &[("Math", 85), ("English", 78), ("Science", 92)]);
        Self::add_graded(&mut book, "Sarah", &[("Math", 95), ("English", 88), ("Science", 85)]);
        Self::add_graded(&mut book, "David", &[("Math", 78), ("English", 80)]);
        Self::add_graded(&mut book, "NewStudent", &[]);
        book
    }

    /// Adds `name` and records each `(subject, score)` pair, panicking on any error.
    pub fn add_graded(book: &mut Gradebook, name: &str, grades: &[(&str, i32)]) {
        book.add(name).expect("fixture student is valid");
        for &(subject, score) in grades {
            book.update_grade(name, subject, score)
                .expect("fixture grade is valid");
        }
    }
}
