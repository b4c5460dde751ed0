use std::fs;
use std::path::PathBuf;

/// Name of the session cookie written by the login flow.
pub const TOKEN_COOKIE: &str = "_token";

/// Capability to produce the bearer token attached to every backend call.
///
/// The console never writes the token; how it got into the store is the
/// login flow's business. Returning `None` means the operator is not
/// logged in and the call fails locally instead of sending a bogus header.
pub trait TokenSource {
    fn token(&self) -> Option<String>;
}

/// Token source backed by a cookie file of `name=value` lines.
///
/// The file is re-read on every call so a login performed while the
/// console is running is picked up without a restart.
pub struct CookieFile {
    path: PathBuf,
}

impl CookieFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TokenSource for CookieFile {
    fn token(&self) -> Option<String> {
        let contents = fs::read_to_string(&self.path).ok()?;
        cookie_value(&contents, TOKEN_COOKIE)
    }
}

/// Fixed token, for tests and scripting.
pub struct StaticToken(pub String);

impl TokenSource for StaticToken {
    fn token(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// Looks up `name` in a cookie file body. Lines are `name=value`; blank
/// lines and `#` comments are skipped. An empty value counts as no token.
fn cookie_value(contents: &str, name: &str) -> Option<String> {
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            if key.trim() == name {
                let value = value.trim();
                if value.is_empty() {
                    return None;
                }
                return Some(value.to_string());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_the_token_cookie_among_others() {
        let contents = "# cookies written by the login flow\n\
                        theme=dark\n\
                        _token=abc.def.ghi\n";
        assert_eq!(
            cookie_value(contents, TOKEN_COOKIE),
            Some("abc.def.ghi".to_string())
        );
    }

    #[test]
    fn missing_or_empty_cookie_yields_none() {
        assert_eq!(cookie_value("theme=dark\n", TOKEN_COOKIE), None);
        assert_eq!(cookie_value("_token=\n", TOKEN_COOKIE), None);
        assert_eq!(cookie_value("", TOKEN_COOKIE), None);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(
            cookie_value("  _token =  tok123  \n", TOKEN_COOKIE),
            Some("tok123".to_string())
        );
    }

    #[test]
    fn cookie_file_reads_from_disk() {
        let dir = std::env::temp_dir().join("skyfly_admin_cookie_test");
        std::fs::create_dir_all(&dir).expect("Failed to create test directory");
        let path = dir.join("cookies.txt");
        std::fs::write(&path, "_token=from-disk\n").expect("Failed to write cookie file");

        let source = CookieFile::new(&path);
        assert_eq!(source.token(), Some("from-disk".to_string()));

        std::fs::remove_dir_all(&dir).expect("Failed to remove test directory");
    }

    #[test]
    fn cookie_file_missing_on_disk_yields_none() {
        let source = CookieFile::new("/nonexistent/skyfly/cookies.txt");
        assert_eq!(source.token(), None);
    }
}
