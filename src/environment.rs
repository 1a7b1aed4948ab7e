//! Pre-defined service environments.

use std::fmt;

/// Base URLs the SDK ships with.
///
/// ## Examples
///
/// ```rust
/// use petstore::Environment;
///
/// assert_eq!(
///     Environment::Production.url(),
///     "https://petstore3.swagger.io/api/v3"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// The public Swagger Petstore deployment.
    #[default]
    Production,
    /// The hosted mock server used by generated integration tests.
    MockServer,
}

impl Environment {
    /// Returns the base URL for this environment.
    pub fn url(&self) -> &'static str {
        match self {
            Self::Production => "https://petstore3.swagger.io/api/v3",
            Self::MockServer => "http://127.0.0.1:8082/v1/mock/demo/pets/0.2.0",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url())
    }
}
