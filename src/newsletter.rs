// Newsletter form and external links
// Submission is handed to the system browser; the outcome is never observed here.

use crate::error::LinkError;
use crate::model::FormTarget;
use url::Url;

/// Accepts the shape a browser's email input would: `local@domain.tld`.
pub fn validate_email(input: &str) -> Result<&str, LinkError> {
    let email = input.trim();
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return Err(LinkError::InvalidEmail);
    }
    let Some((local, domain)) = email.split_once('@') else {
        return Err(LinkError::InvalidEmail);
    };
    let domain_ok = !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.');
    if local.is_empty() || !domain_ok {
        return Err(LinkError::InvalidEmail);
    }
    Ok(email)
}

pub fn submission_url(target: &FormTarget, email: &str) -> Result<Url, LinkError> {
    let mut url = Url::parse(&target.action)?;
    url.query_pairs_mut().append_pair(&target.entry_key, email);
    Ok(url)
}

/// Validate `input` and open the filled-in form in the browser.
pub fn submit(target: &FormTarget, input: &str) -> Result<Url, LinkError> {
    let email = validate_email(input)?;
    let url = submission_url(target, email)?;
    tracing::info!(action = %target.action, "opening newsletter form");
    open_link(url.as_str())?;
    Ok(url)
}

pub fn open_link(href: &str) -> Result<(), LinkError> {
    open::that(href).map_err(|source| LinkError::Open {
        target: href.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> FormTarget {
        FormTarget {
            action: "https://docs.google.com/forms/d/e/abc/formResponse".to_string(),
            entry_key: "entry.765071488".to_string(),
        }
    }

    #[test]
    fn test_valid_emails() {
        assert_eq!(validate_email("reader@example.com").unwrap(), "reader@example.com");
        assert_eq!(validate_email("  a.b+c@mail.example.org \n").unwrap(), "a.b+c@mail.example.org");
    }

    #[test]
    fn test_invalid_emails() {
        for bad in ["", "   ", "reader", "@example.com", "reader@", "reader@localhost",
            "reader@@example.com", "a b@example.com", "reader@.com", "reader@example."]
        {
            assert!(
                matches!(validate_email(bad), Err(LinkError::InvalidEmail)),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_submission_url_encodes_email() {
        let url = submission_url(&target(), "a+b@example.com").unwrap();
        assert_eq!(url.host_str(), Some("docs.google.com"));
        assert_eq!(url.path(), "/forms/d/e/abc/formResponse");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![("entry.765071488".to_string(), "a+b@example.com".to_string())]
        );
        assert!(url.as_str().ends_with("entry.765071488=a%2Bb%40example.com"));
    }

    #[test]
    fn test_invalid_action_rejected() {
        let broken = FormTarget {
            action: "not a url".to_string(),
            entry_key: "entry.1".to_string(),
        };
        assert!(matches!(
            submission_url(&broken, "a@example.com"),
            Err(LinkError::Url(_))
        ));
    }

    #[test]
    fn test_submit_rejects_before_opening() {
        assert!(matches!(submit(&target(), "nope"), Err(LinkError::InvalidEmail)));
    }
}
