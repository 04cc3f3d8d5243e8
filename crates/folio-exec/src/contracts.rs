use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkScheme {
    Http,
    Https,
    Mailto,
}

impl LinkScheme {
    fn from_url(url: &str) -> Option<Self> {
        let (scheme, rest) = url.split_once(':')?;
        if rest.is_empty() {
            return None;
        }
        match scheme.to_ascii_lowercase().as_str() {
            "http" => Some(Self::Http),
            "https" => Some(Self::Https),
            "mailto" => Some(Self::Mailto),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRequest {
    pub url: String,
    pub scheme: LinkScheme,
}

impl LinkRequest {
    /// Only web and mail links are handed to the platform opener.
    pub fn parse(url: &str) -> Option<Self> {
        let url = url.trim();
        if url.chars().any(char::is_whitespace) {
            return None;
        }
        let scheme = LinkScheme::from_url(url)?;
        Some(Self {
            url: url.to_string(),
            scheme,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkOpenStatus {
    Launched,
    Simulated,
    Rejected,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkOutcome {
    pub url: String,
    pub status: LinkOpenStatus,
    pub logs: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HostColorScheme {
    Light,
    Dark,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn accepts_web_and_mail_links() {
        let request = LinkRequest::parse(" mailto:m.shahzad.ms72@gmail.com ").expect("mailto");
        assert_eq!(request.scheme, LinkScheme::Mailto);
        assert_eq!(request.url, "mailto:m.shahzad.ms72@gmail.com");
        assert_eq!(
            LinkRequest::parse("HTTPS://github.com/TheMR-777").map(|r| r.scheme),
            Some(LinkScheme::Https)
        );
    }

    #[test]
    fn rejects_other_schemes_and_shell_text() {
        assert_eq!(LinkRequest::parse("file:///etc/passwd"), None);
        assert_eq!(LinkRequest::parse("https://a.example & calc"), None);
        assert_eq!(LinkRequest::parse("https:"), None);
        assert_eq!(LinkRequest::parse("#"), None);
    }
}
