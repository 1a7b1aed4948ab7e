//! HTTP method types for the generated endpoint surface.

use strum::{Display, EnumString};

/// HTTP methods used by the Petstore endpoints.
///
/// ## Examples
///
/// ```rust
/// use petstore::RestMethod;
///
/// assert_eq!(RestMethod::Delete.to_string(), "DELETE");
/// assert_eq!("POST".parse::<RestMethod>().unwrap(), RestMethod::Post);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "UPPERCASE")]
pub enum RestMethod {
    /// HTTP GET - Retrieve a resource.
    Get,
    /// HTTP POST - Create a resource or trigger an action.
    Post,
    /// HTTP PUT - Replace a resource entirely.
    Put,
    /// HTTP DELETE - Remove a resource.
    Delete,
}

impl RestMethod {
    /// Converts to the equivalent `reqwest::Method`.
    pub fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

impl From<RestMethod> for reqwest::Method {
    fn from(method: RestMethod) -> Self {
        method.to_reqwest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(RestMethod::Get.to_string(), "GET");
        assert_eq!(RestMethod::Put.to_string(), "PUT");
        assert_eq!(RestMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_parse() {
        assert_eq!("GET".parse::<RestMethod>().unwrap(), RestMethod::Get);
        assert!("CONNECT".parse::<RestMethod>().is_err());
    }

    #[test]
    fn test_to_reqwest() {
        assert_eq!(RestMethod::Post.to_reqwest(), reqwest::Method::POST);
        assert_eq!(reqwest::Method::from(RestMethod::Get), reqwest::Method::GET);
    }
}
