use crate::{
    api::{Comment, JobId},
    Thread,
};

/// Client-side state of one job's comment area.
///
/// Rebuilt wholesale from every fetch. The count backs the counter badge and
/// deliberately survives a failed refresh: the badge keeps its last known
/// value while the list area shows the fallback message.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ThreadDump {
    pub job: JobId,
    pub count: usize,
    pub status: ThreadStatus,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ThreadStatus {
    Loading,
    FetchFailed,
    Ready(Thread),
}

impl ThreadDump {
    pub fn stub(job: JobId) -> ThreadDump {
        ThreadDump {
            job,
            count: 0,
            status: ThreadStatus::Loading,
        }
    }

    /// Replace the whole forest with the result of a fresh fetch
    pub fn set_comments(&mut self, comments: Vec<Comment>) {
        self.count = comments.len();
        self.status = ThreadStatus::Ready(Thread::build(comments));
    }

    pub fn set_fetch_failed(&mut self) {
        self.status = ThreadStatus::FetchFailed;
    }

    pub fn thread(&self) -> Option<&Thread> {
        match &self.status {
            ThreadStatus::Ready(t) => Some(t),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{CommentId, Time, Uuid};
    use chrono::TimeZone;

    fn comment(n: u128) -> Comment {
        Comment {
            id: CommentId(Uuid::from_u128(n)),
            parent_id: None,
            text: format!("comment {n}"),
            username: String::from("jdoe"),
            avatar_url: None,
            timestamp: chrono::Utc.timestamp_opt(n as i64, 0).unwrap(),
        }
    }

    #[test]
    fn failed_refresh_keeps_the_counter() {
        let mut dump = ThreadDump::stub(JobId::stub());
        dump.set_comments(vec![comment(1), comment(2), comment(3)]);
        assert_eq!(dump.count, 3);

        dump.set_fetch_failed();
        assert_eq!(dump.status, ThreadStatus::FetchFailed);
        assert_eq!(dump.thread(), None);
        assert_eq!(dump.count, 3);
    }

    #[test]
    fn successful_refresh_replaces_everything() {
        let mut dump = ThreadDump::stub(JobId::stub());
        dump.set_comments(vec![comment(1), comment(2)]);
        dump.set_fetch_failed();
        dump.set_comments(vec![comment(3)]);
        assert_eq!(dump.count, 1);
        assert_eq!(dump.thread().map(|t| t.len()), Some(1));
    }
}
