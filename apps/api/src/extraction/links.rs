use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref LINKEDIN_RE: Regex = Regex::new(r"(?i)https?://\S*linkedin\S*").unwrap();
    static ref GITHUB_RE: Regex = Regex::new(r"(?i)https?://\S*github\S*").unwrap();
}

/// Profile URLs found in a resume, first match per site.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileLinks {
    pub linkedin: Option<String>,
    pub github: Option<String>,
}

pub fn extract_links(text: &str) -> ProfileLinks {
    ProfileLinks {
        linkedin: first_match(&LINKEDIN_RE, text),
        github: first_match(&GITHUB_RE, text),
    }
}

fn first_match(re: &Regex, text: &str) -> Option<String> {
    re.find(text).map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_links_found() {
        let text = "Links: https://www.linkedin.com/in/janedoe | http://github.com/janedoe";
        let links = extract_links(text);
        assert_eq!(
            links.linkedin.as_deref(),
            Some("https://www.linkedin.com/in/janedoe")
        );
        assert_eq!(links.github.as_deref(), Some("http://github.com/janedoe"));
    }

    #[test]
    fn test_site_token_is_case_insensitive() {
        let links = extract_links("HTTPS://GitHub.com/JaneDoe");
        assert_eq!(links.github.as_deref(), Some("HTTPS://GitHub.com/JaneDoe"));
        assert_eq!(links.linkedin, None);
    }

    #[test]
    fn test_no_urls_yields_nothing() {
        assert_eq!(extract_links("linkedin: janedoe, github: janedoe"), ProfileLinks::default());
    }

    #[test]
    fn test_first_url_per_site_wins() {
        let text = "https://github.com/first\nhttps://github.com/second";
        assert_eq!(
            extract_links(text).github.as_deref(),
            Some("https://github.com/first")
        );
    }

    #[test]
    fn test_other_urls_are_ignored() {
        let links = extract_links("Portfolio: https://janedoe.dev/projects");
        assert_eq!(links, ProfileLinks::default());
    }
}
