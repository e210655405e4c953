use thiserror::Error;

pub type TuningResult<T> = Result<T, TuningError>;

/// Failure class of a run. Each class ends the process with its own code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TuningErrorCategory {
    /// Bad command line, table contents or solver arguments.
    InputValidationError,
    /// Table file, curve output or ROOT process could not be used.
    IoSystemError,
    /// The solver produced an unusable intermediate length.
    ComputationError,
    InternalError,
}

impl TuningErrorCategory {
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::InputValidationError => 2,
            Self::IoSystemError => 3,
            Self::ComputationError => 4,
            Self::InternalError => 5,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InputValidationError => "InputValidationError",
            Self::IoSystemError => "IoSystemError",
            Self::ComputationError => "ComputationError",
            Self::InternalError => "InternalError",
        }
    }
}

/// Categorized failure carrying a stable placeholder such as
/// `INPUT.TABLE_PARSE` so diagnostics can be matched in scripts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} [{}] {}", .category.as_str(), .placeholder, .message)]
pub struct TuningError {
    category: TuningErrorCategory,
    placeholder: &'static str,
    message: String,
}

impl TuningError {
    fn categorized(
        category: TuningErrorCategory,
        placeholder: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            placeholder,
            message: message.into(),
        }
    }

    pub fn input_validation(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::categorized(TuningErrorCategory::InputValidationError, placeholder, message)
    }

    pub fn io_system(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::categorized(TuningErrorCategory::IoSystemError, placeholder, message)
    }

    pub fn computation(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::categorized(TuningErrorCategory::ComputationError, placeholder, message)
    }

    pub fn internal(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::categorized(TuningErrorCategory::InternalError, placeholder, message)
    }

    pub fn unknown_effect(name: &str) -> Self {
        Self::input_validation("INPUT.UNKNOWN_EFFECT", format!("Unknown effect '{name}'"))
    }

    /// Lengths, wavelengths and weights all have to be positive and finite.
    pub fn not_positive(placeholder: &'static str, label: &str, value: f64) -> Self {
        Self::input_validation(
            placeholder,
            format!("{label} must be a positive finite number, got {value}"),
        )
    }

    pub const fn category(&self) -> TuningErrorCategory {
        self.category
    }

    pub const fn placeholder(&self) -> &'static str {
        self.placeholder
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn exit_code(&self) -> i32 {
        self.category.exit_code()
    }

    pub fn diagnostic_line(&self) -> String {
        format!("ERROR: [{}] {}", self.placeholder, self.message)
    }

    pub fn fatal_exit_line(&self) -> String {
        format!("FATAL EXIT CODE: {}", self.exit_code())
    }
}
