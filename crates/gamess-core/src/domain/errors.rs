pub type BuilderResult<T> = Result<T, BuilderError>;
pub type LoadResult<T> = BuilderResult<T>;
pub type GenerateResult<T> = BuilderResult<T>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuilderErrorCategory {
    Success,
    InputValidationError,
    IoSystemError,
    InternalError,
}

impl BuilderErrorCategory {
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::InputValidationError => 2,
            Self::IoSystemError => 3,
            Self::InternalError => 5,
        }
    }

    pub const fn rust_category(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::InputValidationError => "InputValidationError",
            Self::IoSystemError => "IoSystemError",
            Self::InternalError => "InternalError",
        }
    }

    pub const fn is_fatal(self) -> bool {
        !matches!(self, Self::Success)
    }
}

/// Failure raised by a load or generate action.
///
/// `placeholder` is a stable dotted code (`IO.GEOMETRY_READ`,
/// `INPUT.GEOMETRY_EMPTY`, ...) and `message` carries the raw error text shown
/// to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{} [{}] {}", .category.rust_category(), .placeholder, .message)]
pub struct BuilderError {
    category: BuilderErrorCategory,
    placeholder: &'static str,
    message: String,
}

impl BuilderError {
    pub fn new(
        category: BuilderErrorCategory,
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
        Self::new(
            BuilderErrorCategory::InputValidationError,
            placeholder,
            message,
        )
    }

    pub fn io_system(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(BuilderErrorCategory::IoSystemError, placeholder, message)
    }

    pub fn internal(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(BuilderErrorCategory::InternalError, placeholder, message)
    }

    pub const fn category(&self) -> BuilderErrorCategory {
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
        let severity = if self.category.is_fatal() {
            "ERROR"
        } else {
            "INFO"
        };
        format!("{}: [{}] {}", severity, self.placeholder, self.message)
    }

    pub fn fatal_exit_line(&self) -> Option<String> {
        self.category
            .is_fatal()
            .then(|| format!("FATAL EXIT CODE: {}", self.exit_code()))
    }
}
