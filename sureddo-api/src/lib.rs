use chrono::Utc;

mod error;
pub use error::Error;

pub use uuid::{uuid, Uuid};
pub type Time = chrono::DateTime<Utc>;

pub const STUB_UUID: Uuid = uuid!("ffffffff-ffff-ffff-ffff-ffffffffffff");

#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
pub struct JobId(pub Uuid);

impl JobId {
    pub fn stub() -> JobId {
        JobId(STUB_UUID)
    }
}

#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
pub struct CommentId(pub Uuid);

impl CommentId {
    pub fn stub() -> CommentId {
        CommentId(STUB_UUID)
    }
}

#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
pub struct UserId(pub Uuid);

impl UserId {
    pub fn stub() -> UserId {
        UserId(STUB_UUID)
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct AuthToken(pub Uuid);

impl AuthToken {
    pub fn stub() -> AuthToken {
        AuthToken(STUB_UUID)
    }
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NewSession {
    pub user: String,
    pub password: String,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NewUser {
    pub id: UserId,
    pub name: String,
    pub password: String,
    pub avatar_url: Option<String>,
}

impl NewUser {
    pub fn new(name: String, password: String, avatar_url: Option<String>) -> NewUser {
        NewUser {
            id: UserId(Uuid::new_v4()),
            name,
            password,
            avatar_url,
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.name.contains('\0') {
            return Err(Error::NullByteInString(self.name.clone()));
        }
        if self.password.contains('\0') {
            return Err(Error::NullByteInString(String::from("<password>")));
        }
        if self.name.is_empty()
            || !self
                .name
                .chars()
                .all(|c| c.is_alphanumeric() || c == '-' || c == '_' || c == '.')
        {
            return Err(Error::InvalidName(self.name.clone()));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Job {
    pub id: JobId,
    pub name: String,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NewJob {
    pub id: JobId,
    pub name: String,
}

impl NewJob {
    pub fn new(name: String) -> NewJob {
        NewJob {
            id: JobId(Uuid::new_v4()),
            name,
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.name.contains('\0') {
            return Err(Error::NullByteInString(self.name.clone()));
        }
        if self.name.trim().is_empty() {
            return Err(Error::InvalidName(self.name.clone()));
        }
        Ok(())
    }
}

/// One comment as the server hands it out: flat, with only a parent link.
///
/// The nested thread shape is rebuilt client-side on every fetch.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Comment {
    pub id: CommentId,
    pub parent_id: Option<CommentId>,
    pub text: String,
    pub username: String,
    pub avatar_url: Option<String>,
    pub timestamp: Time,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NewComment {
    pub text: String,
    pub parent_id: Option<CommentId>,
}

impl NewComment {
    pub fn validate(&self) -> Result<(), Error> {
        if self.text.contains('\0') {
            return Err(Error::NullByteInString(self.text.clone()));
        }
        if self.text.trim().is_empty() {
            return Err(Error::EmptyComment);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_comment_validation() {
        let ok = NewComment {
            text: String::from("looks done to me"),
            parent_id: None,
        };
        assert_eq!(ok.validate(), Ok(()));

        let empty = NewComment {
            text: String::from("  \n\t "),
            parent_id: Some(CommentId::stub()),
        };
        assert_eq!(empty.validate(), Err(Error::EmptyComment));

        let nul = NewComment {
            text: String::from("foo\0bar"),
            parent_id: None,
        };
        assert_eq!(
            nul.validate(),
            Err(Error::NullByteInString(String::from("foo\0bar")))
        );
    }

    #[test]
    fn new_user_validation() {
        assert_eq!(
            NewUser::new(String::from("jdoe"), String::from("hunter2"), None).validate(),
            Ok(())
        );
        assert_eq!(
            NewUser::new(String::from("j doe"), String::from("hunter2"), None).validate(),
            Err(Error::InvalidName(String::from("j doe")))
        );
        assert_eq!(
            NewUser::new(String::from(""), String::from("hunter2"), None).validate(),
            Err(Error::InvalidName(String::from("")))
        );
    }
}
