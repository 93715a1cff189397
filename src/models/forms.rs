use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct SignupForm {
    pub username: String,
    pub password: String,
}

// Admin forms carry raw strings; handlers coerce them and skip on garbage.
#[derive(Debug, Deserialize)]
pub struct ChangeRoleForm {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub role: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteUserForm {
    #[serde(default)]
    pub id: String,
}
