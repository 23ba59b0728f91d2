/// Pure user model for inter-module communication (no serde/schemars)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub bio: String,
}

/// Data for creating a new user
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub bio: String,
}

/// Partial update data for a user.
///
/// `None` and empty strings both mean "not supplied": the stored value is kept.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
}

impl UserPatch {
    pub fn first_name(mut self, v: impl Into<String>) -> Self {
        self.first_name = Some(v.into());
        self
    }

    pub fn last_name(mut self, v: impl Into<String>) -> Self {
        self.last_name = Some(v.into());
        self
    }

    pub fn bio(mut self, v: impl Into<String>) -> Self {
        self.bio = Some(v.into());
        self
    }
}
