use anyhow::{Context, Result};
use configuration::Config;
use roster::Gradebook;

/// Builds the start-up gradebook from the configured subjects, loading the seed
/// roster through the same validated calls the shell uses.
pub fn build_gradebook(config: &Config, seed: bool) -> Result<Gradebook> {
    let mut book = Gradebook::with_subjects(config.gradebook.subject_set());
    if !seed {
        return Ok(book);
    }

    for entry in &config.seed.students {
        let student = book
            .add(&entry.name)
            .with_context(|| format!("Invalid seed student '{}'", entry.name))?;
        for grade in &entry.grades {
            student.add_grade(&grade.subject, grade.score).with_context(|| {
                format!(
                    "Invalid seed grade for '{}' in {}",
                    entry.name, grade.subject
                )
            })?;
        }
    }

    tracing::info!(students = book.len(), "Seeded gradebook");
    Ok(book)
}
