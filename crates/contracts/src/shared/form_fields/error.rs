use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Unknown form field: {0}")]
    UnknownField(String),

    #[error("Field dependency cycle between: {}", .0.join(", "))]
    DependencyCycle(Vec<String>),

    #[error("Field '{0}' cannot depend on itself")]
    SelfDependency(String),

    #[error("No form defined for model '{0}'")]
    UnknownModel(String),

    #[error("Invalid OPTIONS schema: {0}")]
    InvalidSchema(String),
}
