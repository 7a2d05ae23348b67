use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Student name cannot be empty")]
    EmptyName,

    #[error("Student name cannot contain numbers: '{0}'")]
    InvalidName(String),

    #[error("Student '{0}' already exists")]
    DuplicateStudent(String),

    #[error("Student '{0}' not found")]
    StudentNotFound(String),

    #[error("'{0}' is not a valid subject")]
    InvalidSubject(String),

    #[error("Invalid grade: {0}")]
    InvalidGrade(String),
}

impl CoreError {
    /// Every core error is caused by caller input and leaves the gradebook untouched,
    /// so a shell can always report it and carry on.
    pub fn is_recoverable(&self) -> bool {
        match self {
            CoreError::EmptyName
            | CoreError::InvalidName(_)
            | CoreError::DuplicateStudent(_)
            | CoreError::StudentNotFound(_)
            | CoreError::InvalidSubject(_)
            | CoreError::InvalidGrade(_) => true,
        }
    }
}
