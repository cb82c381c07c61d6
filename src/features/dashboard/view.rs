use crate::features::auth::token::{ClaimSet, decode_for_display};

/// Characters of the token shown while it is truncated.
pub const TRUNCATED_CHARS: usize = 40;
const ELLIPSIS: &str = "...";

pub const FOOTER_TEXT: &str = "Shall rise my light in the darkness... I shall rise!";

/// Informational card rendered on the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Card {
    pub title: &'static str,
    pub description: &'static str,
}

pub const CARDS: [Card; 3] = [
    Card {
        title: "Overview",
        description: "Quick glance at your stats.",
    },
    Card {
        title: "Reports",
        description: "Detailed insights and analytics.",
    },
    Card {
        title: "Settings",
        description: "Manage your preferences.",
    },
];

/// Whether the bearer token is shown in full or truncated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TokenReveal {
    #[default]
    Truncated,
    Full,
}

impl TokenReveal {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            TokenReveal::Truncated => TokenReveal::Full,
            TokenReveal::Full => TokenReveal::Truncated,
        }
    }

    /// Label of the control that switches to the other state.
    pub fn toggle_label(self) -> &'static str {
        match self {
            TokenReveal::Truncated => "Show full",
            TokenReveal::Full => "Hide",
        }
    }

    pub fn render(self, token: &str) -> String {
        match self {
            TokenReveal::Full => token.to_string(),
            TokenReveal::Truncated => truncate_token(token),
        }
    }
}

/// First [`TRUNCATED_CHARS`] characters followed by an ellipsis.
pub fn truncate_token(token: &str) -> String {
    let mut short: String = token.chars().take(TRUNCATED_CHARS).collect();
    short.push_str(ELLIPSIS);
    short
}

/// Everything the dashboard derives from the stored token, computed once per
/// render. Absent tokens, tokens that fail to decode, and tokens without a
/// string `username` claim all greet with an empty name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DashboardView {
    pub token: Option<String>,
    pub display_name: String,
    pub role: Option<String>,
}

impl DashboardView {
    pub fn from_token(token: Option<String>) -> Self {
        let claims = token
            .as_deref()
            .and_then(decode_for_display)
            .unwrap_or_default();
        let ClaimSet { username, role, .. } = claims;

        Self {
            token,
            display_name: username.unwrap_or_default(),
            role,
        }
    }

    pub fn greeting(&self) -> String {
        format!("Welcome, {}", self.display_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64ct::{Base64UrlUnpadded, Encoding};

    const LONG_TOKEN: &str =
        "eyJhbGciOiJIUzI1NiJ9.eyJ1c2VybmFtZSI6ImFsaWNlIiwicm9sZSI6InVzZXIifQ.c2ln";

    fn token_for(username: &str, role: &str) -> String {
        let header = Base64UrlUnpadded::encode_string(br#"{"alg":"HS256"}"#);
        let payload = serde_json::json!({ "sub": 1, "username": username, "role": role });
        let payload = Base64UrlUnpadded::encode_string(payload.to_string().as_bytes());
        format!("{header}.{payload}.c2ln")
    }

    #[test]
    fn starts_truncated() {
        let reveal = TokenReveal::default();
        assert_eq!(reveal, TokenReveal::Truncated);
        assert_eq!(reveal.toggle_label(), "Show full");
    }

    #[test]
    fn toggling_twice_restores_truncated_text() {
        let reveal = TokenReveal::default();
        let before = reveal.render(LONG_TOKEN);

        let shown = reveal.toggled();
        assert_eq!(shown.render(LONG_TOKEN), LONG_TOKEN);
        assert_eq!(shown.toggle_label(), "Hide");

        let hidden = shown.toggled();
        assert_eq!(hidden.render(LONG_TOKEN), before);
    }

    #[test]
    fn truncation_keeps_forty_chars_and_appends_ellipsis() {
        let short = truncate_token(LONG_TOKEN);
        assert_eq!(short.len(), TRUNCATED_CHARS + ELLIPSIS.len());
        assert!(short.starts_with(&LONG_TOKEN[..TRUNCATED_CHARS]));
        assert!(short.ends_with("..."));
    }

    #[test]
    fn truncation_of_short_token_still_marks_ellipsis() {
        assert_eq!(truncate_token("abc"), "abc...");
    }

    #[test]
    fn view_derives_name_and_role() {
        let view = DashboardView::from_token(Some(token_for("alice", "admin")));
        assert_eq!(view.display_name, "alice");
        assert_eq!(view.role.as_deref(), Some("admin"));
        assert_eq!(view.greeting(), "Welcome, alice");
    }

    #[test]
    fn view_reads_username_claim() {
        let header = Base64UrlUnpadded::encode_string(br#"{"alg":"HS256"}"#);
        let payload = Base64UrlUnpadded::encode_string(br#"{"username":"alice"}"#);
        let view = DashboardView::from_token(Some(format!("{header}.{payload}.c2ln")));
        assert_eq!(view.display_name, "alice");
        assert_eq!(view.role, None);
    }

    #[test]
    fn view_keeps_name_when_role_is_not_a_string() {
        let header = Base64UrlUnpadded::encode_string(br#"{"alg":"HS256"}"#);
        let payload = Base64UrlUnpadded::encode_string(br#"{"username":"alice","role":["admin"]}"#);
        let view = DashboardView::from_token(Some(format!("{header}.{payload}.c2ln")));
        assert_eq!(view.display_name, "alice");
        assert_eq!(view.role, None);
    }

    #[test]
    fn view_without_username_claim_has_empty_name() {
        let header = Base64UrlUnpadded::encode_string(br#"{"alg":"HS256"}"#);
        let payload = Base64UrlUnpadded::encode_string(br#"{"sub":1}"#);
        let view = DashboardView::from_token(Some(format!("{header}.{payload}.c2ln")));
        assert_eq!(view.display_name, "");
    }

    #[test]
    fn view_degrades_on_unparseable_token() {
        let view = DashboardView::from_token(Some("garbage".to_string()));
        assert_eq!(view.display_name, "");
        assert_eq!(view.role, None);
        assert_eq!(view.token.as_deref(), Some("garbage"));
        assert_eq!(view.greeting(), "Welcome, ");
    }

    #[test]
    fn view_without_token_is_empty() {
        assert_eq!(DashboardView::from_token(None), DashboardView::default());
    }

    #[test]
    fn footer_keeps_closing_line() {
        assert_eq!(
            FOOTER_TEXT,
            "Shall rise my light in the darkness... I shall rise!"
        );
    }

    #[test]
    fn cards_are_fixed() {
        let titles: Vec<_> = CARDS.iter().map(|card| card.title).collect();
        assert_eq!(titles, ["Overview", "Reports", "Settings"]);
    }
}
