use std::collections::{btree_map, BTreeMap, HashMap};

use sureddo_client::api::{
    AuthToken, Comment, CommentId, Error, Job, JobId, NewComment, NewJob, NewSession, NewUser,
    UserId, Uuid,
};

/// In-memory stand-in for sureddo-server, for tests.
///
/// Holds the same state the real database does, plus switches to make the
/// network misbehave on demand.
pub struct MockServer {
    users: BTreeMap<UserId, MockUser>,
    jobs: BTreeMap<JobId, MockJob>,
    unreachable: bool,
}

#[derive(Debug)]
struct MockUser {
    name: String,
    // tests don't actually use bcrypt
    pass: String,
    avatar_url: Option<String>,
    sessions: Vec<AuthToken>,
}

#[derive(Debug)]
struct MockJob {
    name: String,
    // flat and in arrival order, like the comments table
    comments: Vec<Comment>,
}

impl MockServer {
    pub fn new() -> MockServer {
        MockServer {
            users: BTreeMap::new(),
            jobs: BTreeMap::new(),
            unreachable: false,
        }
    }

    /// Return name & pass for user number `id`
    pub fn test_get_user_info(&self, id: usize) -> (&str, &str) {
        let u = self
            .users
            .values()
            .skip(id)
            .next()
            .unwrap_or_else(|| panic!("getting user {id} among {}", self.users.len()));
        (&u.name, &u.pass)
    }

    /// Make every subsequent operation fail as though the network was down
    pub fn test_set_unreachable(&mut self, unreachable: bool) {
        self.unreachable = unreachable;
    }

    fn check_reachable(&self) -> Result<(), Error> {
        match self.unreachable {
            true => Err(Error::Unknown(String::from("network unreachable"))),
            false => Ok(()),
        }
    }

    pub fn admin_create_user(&mut self, u: NewUser) -> Result<(), Error> {
        self.check_reachable()?;
        u.validate()?;

        if self.users.values().any(|db| db.name == u.name) {
            return Err(Error::NameAlreadyUsed(u.name));
        }

        match self.users.entry(u.id) {
            btree_map::Entry::Occupied(_) => Err(Error::UuidAlreadyUsed(u.id.0)),
            btree_map::Entry::Vacant(entry) => {
                entry.insert(MockUser {
                    name: u.name,
                    pass: u.password,
                    avatar_url: u.avatar_url,
                    sessions: Vec::new(),
                });
                Ok(())
            }
        }
    }

    pub fn admin_create_job(&mut self, j: NewJob) -> Result<(), Error> {
        self.check_reachable()?;
        j.validate()?;
        match self.jobs.entry(j.id) {
            btree_map::Entry::Occupied(_) => Err(Error::UuidAlreadyUsed(j.id.0)),
            btree_map::Entry::Vacant(entry) => {
                entry.insert(MockJob {
                    name: j.name,
                    comments: Vec::new(),
                });
                Ok(())
            }
        }
    }

    pub fn auth(&mut self, s: NewSession) -> Result<AuthToken, Error> {
        self.check_reachable()?;
        for u in self.users.values_mut() {
            if u.name == s.user {
                if s.password != u.pass {
                    return Err(Error::PermissionDenied);
                } else {
                    let tok = AuthToken(Uuid::new_v4());
                    u.sessions.push(tok);
                    return Ok(tok);
                }
            }
        }
        Err(Error::PermissionDenied)
    }

    pub fn unauth(&mut self, tok: AuthToken) -> Result<(), Error> {
        self.check_reachable()?;
        let u = self.resolve_mut(tok)?;
        u.sessions.retain(|s| *s != tok);
        Ok(())
    }

    fn resolve(&self, tok: AuthToken) -> Result<(UserId, &MockUser), Error> {
        for (id, u) in self.users.iter() {
            if u.sessions.contains(&tok) {
                return Ok((*id, u));
            }
        }
        Err(Error::PermissionDenied)
    }

    fn resolve_mut(&mut self, tok: AuthToken) -> Result<&mut MockUser, Error> {
        for u in self.users.values_mut() {
            if u.sessions.contains(&tok) {
                return Ok(u);
            }
        }
        Err(Error::PermissionDenied)
    }

    pub fn fetch_jobs(&self) -> Result<Vec<Job>, Error> {
        self.check_reachable()?;
        Ok(self
            .jobs
            .iter()
            .map(|(id, j)| Job {
                id: *id,
                name: j.name.clone(),
            })
            .collect())
    }

    pub fn list_comments(&self, job: JobId) -> Result<Vec<Comment>, Error> {
        self.check_reachable()?;
        Ok(self
            .jobs
            .get(&job)
            .ok_or(Error::JobNotFound(job))?
            .comments
            .clone())
    }

    pub fn post_comment(&mut self, tok: AuthToken, job: JobId, c: NewComment) -> Result<(), Error> {
        self.check_reachable()?;
        c.validate()?;
        let (_, user) = self.resolve(tok)?;
        let comment = Comment {
            id: CommentId(Uuid::new_v4()),
            parent_id: c.parent_id,
            text: c.text,
            username: user.name.clone(),
            avatar_url: user.avatar_url.clone(),
            timestamp: chrono::Utc::now(),
        };
        self.jobs
            .get_mut(&job)
            .ok_or(Error::JobNotFound(job))?
            .comments
            .push(comment);
        Ok(())
    }
}
