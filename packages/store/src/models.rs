use serde::{Deserialize, Serialize};

/// Profile of the signed-in user, as returned by `/api/auth/login` and
/// `/api/auth/me`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
}

impl User {
    /// Avatar letter for the sidebar; `'A'` when the name is empty.
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('A')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_initial() {
        let mut user = User {
            id: 1,
            name: "Marcos".to_string(),
            email: "marcos@akram.com".to_string(),
            role: "admin".to_string(),
        };
        assert_eq!(user.initial(), 'M');

        user.name.clear();
        assert_eq!(user.initial(), 'A');
    }

    #[test]
    fn test_user_role_defaults_when_missing() {
        let user: User =
            serde_json::from_str(r#"{"id": 7, "name": "Ana", "email": "ana@akram.com"}"#).unwrap();
        assert_eq!(user.role, "");
    }
}
