use serde::{Deserialize, Serialize};

/// The three fields a client may see. The password hash has no path
/// into this type.
#[derive(Debug, Serialize)]
pub struct Profile {
    pub email: String,
    pub phone: Option<String>,
    pub bio: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user: Profile,
}

/// Both fields overwrite the stored values; omitting one clears it.
/// "Omitted" and "cleared" are deliberately the same thing here.
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub phone: Option<String>,
    pub bio: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_serializes_null_for_unset_fields() {
        let json = serde_json::to_string(&ProfileResponse {
            user: Profile {
                email: "a@x.com".into(),
                phone: None,
                bio: None,
            },
        })
        .unwrap();
        assert_eq!(json, r#"{"user":{"email":"a@x.com","phone":null,"bio":null}}"#);
    }

    #[test]
    fn profile_never_contains_a_password_field() {
        let json = serde_json::to_string(&Profile {
            email: "a@x.com".into(),
            phone: Some("555".into()),
            bio: Some("hi".into()),
        })
        .unwrap();
        assert!(!json.contains("password"));
    }
}
