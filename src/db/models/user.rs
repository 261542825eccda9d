use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Body of `POST /api/users/`, `PATCH /api/users/{id}` and the landing page form.
/// Fields are optional so a missing one becomes a 400 with a readable message
/// instead of a deserialization rejection.
#[derive(Debug, Default, Deserialize)]
pub struct UserPayload {
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub email: Option<String>,
}

/// Numbers and booleans are taken as their text, so `{"name": 123}` names a user "123".
/// Arrays and objects are still rejected.
fn scalar_as_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Int(i64),
        UInt(u64),
        Float(f64),
        Bool(bool),
    }

    let value = Option::<Scalar>::deserialize(deserializer)?;
    Ok(value.map(|scalar| match scalar {
        Scalar::Text(s) => s,
        Scalar::Int(n) => n.to_string(),
        Scalar::UInt(n) => n.to_string(),
        Scalar::Float(n) => n.to_string(),
        Scalar::Bool(b) => b.to_string(),
    }))
}

/// A payload that passed validation; ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

fn required(value: Option<String>, message: &str) -> AppResult<String> {
    let value = value.map(|v| v.trim().to_string()).unwrap_or_default();
    if value.is_empty() {
        return Err(AppError::Validation(message.to_string()));
    }
    Ok(value)
}

impl UserPayload {
    pub fn validate(self) -> AppResult<NewUser> {
        let name = required(self.name, "Name cannot be blank")?;
        let email = required(self.email, "Email cannot be blank")?;
        Ok(NewUser { name, email })
    }
}
