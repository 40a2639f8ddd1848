#![cfg(test)]

use sureddo_client::{
    api::{self, AuthToken, Error, JobId, NewComment, NewJob, NewSession, NewUser, Uuid},
    clean_submission, ReplyController, ThreadDump, ThreadStatus,
};
use sureddo_mock_server::MockServer;

fn mock_with_fixtures() -> (MockServer, AuthToken, JobId) {
    let mut mock = MockServer::new();
    mock.admin_create_user(NewUser::new(
        String::from("jdoe"),
        String::from("hunter2"),
        None,
    ))
    .expect("creating test user");
    let job = NewJob::new(String::from("General Maintenance Task #1"));
    let job_id = job.id;
    mock.admin_create_job(job).expect("creating test job");
    let tok = mock
        .auth(NewSession {
            user: String::from("jdoe"),
            password: String::from("hunter2"),
        })
        .expect("opening test session");
    (mock, tok, job_id)
}

fn post(mock: &mut MockServer, tok: AuthToken, job: JobId, text: &str, parent: Option<api::CommentId>) {
    mock.post_comment(
        tok,
        job,
        NewComment {
            text: String::from(text),
            parent_id: parent,
        },
    )
    .expect("posting comment");
}

#[test]
fn end_to_end_reply_and_orphan() {
    let (mut mock, tok, job) = mock_with_fixtures();

    post(&mut mock, tok, job, "hi", None);
    let a = mock.list_comments(job).expect("listing comments")[0].id;
    post(&mut mock, tok, job, "reply", Some(a));
    // a parent id that never existed server-side
    post(&mut mock, tok, job, "orphan", Some(api::CommentId(Uuid::new_v4())));

    let comments = mock.list_comments(job).expect("listing comments");
    let mut dump = ThreadDump::stub(job);
    dump.set_comments(comments);
    assert_eq!(dump.count, 3);

    let thread = dump.thread().expect("thread should be ready");
    let roots = thread
        .roots()
        .iter()
        .map(|n| &n.comment.text as &str)
        .collect::<Vec<_>>();
    assert_eq!(roots, vec!["hi", "orphan"]);
    assert_eq!(thread.roots()[0].children.len(), 1);
    assert_eq!(thread.roots()[0].children[0].comment.text, "reply");

    let order = thread
        .flatten()
        .iter()
        .map(|c| &c.text as &str)
        .collect::<Vec<_>>();
    assert_eq!(order, vec!["hi", "reply", "orphan"]);
}

#[test]
fn reply_controller_drives_the_post() {
    let (mut mock, tok, job) = mock_with_fixtures();

    post(&mut mock, tok, job, "hi", None);
    let a = mock.list_comments(job).expect("listing comments")[0].id;

    // open a reply form under a, submit with surrounding whitespace
    let mut replies = ReplyController::new();
    replies.open(a);
    let text = clean_submission("  thanks!  ").expect("text should survive trimming");
    post(&mut mock, tok, job, &text, replies.target());
    replies.close();

    let comments = mock.list_comments(job).expect("listing comments");
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[1].text, "thanks!");
    assert_eq!(comments[1].parent_id, Some(a));
    assert_eq!(replies.target(), None);
}

#[test]
fn failed_fetch_keeps_previous_counter() {
    let (mut mock, tok, job) = mock_with_fixtures();
    post(&mut mock, tok, job, "hi", None);
    post(&mut mock, tok, job, "still there?", None);

    let mut dump = ThreadDump::stub(job);
    dump.set_comments(mock.list_comments(job).expect("listing comments"));
    assert_eq!(dump.count, 2);

    mock.test_set_unreachable(true);
    match mock.list_comments(job) {
        Err(Error::Unknown(_)) => dump.set_fetch_failed(),
        r => panic!("expected a network error, got {r:?}"),
    }
    assert_eq!(dump.status, ThreadStatus::FetchFailed);
    assert_eq!(dump.count, 2);
}

#[test]
fn empty_comment_rejected_server_side() {
    let (mut mock, tok, job) = mock_with_fixtures();
    let res = mock.post_comment(
        tok,
        job,
        NewComment {
            text: String::from("   \n "),
            parent_id: None,
        },
    );
    assert_eq!(res, Err(Error::EmptyComment));
    assert_eq!(mock.list_comments(job).expect("listing comments").len(), 0);
}

#[test]
fn posting_needs_a_live_session() {
    let (mut mock, tok, job) = mock_with_fixtures();

    let res = mock.post_comment(
        AuthToken::stub(),
        job,
        NewComment {
            text: String::from("hi"),
            parent_id: None,
        },
    );
    assert_eq!(res, Err(Error::PermissionDenied));

    mock.unauth(tok).expect("closing session");
    let res = mock.post_comment(
        tok,
        job,
        NewComment {
            text: String::from("hi"),
            parent_id: None,
        },
    );
    assert_eq!(res, Err(Error::PermissionDenied));

    // logging back in makes posting work again
    let (user, password) = mock.test_get_user_info(0);
    let session = NewSession {
        user: String::from(user),
        password: String::from(password),
    };
    let tok = mock.auth(session).expect("reopening session");
    post(&mut mock, tok, job, "hi", None);
    assert_eq!(mock.list_comments(job).expect("listing comments").len(), 1);
}

#[test]
fn unknown_job_is_a_404() {
    let (mock, _tok, _job) = mock_with_fixtures();
    let other = JobId(Uuid::new_v4());
    assert_eq!(mock.list_comments(other), Err(Error::JobNotFound(other)));
}

#[test]
fn job_listing_contains_created_jobs() {
    let (mut mock, _tok, job) = mock_with_fixtures();
    mock.admin_create_job(NewJob::new(String::from("Priority Alert Response #1")))
        .expect("creating second job");
    let jobs = mock.fetch_jobs().expect("listing jobs");
    assert_eq!(jobs.len(), 2);
    assert!(jobs.iter().any(|j| j.id == job));
}

#[test]
fn duplicate_user_name_is_a_conflict() {
    let (mut mock, _tok, _job) = mock_with_fixtures();
    let res = mock.admin_create_user(NewUser::new(
        String::from("jdoe"),
        String::from("other-password"),
        None,
    ));
    assert_eq!(res, Err(Error::NameAlreadyUsed(String::from("jdoe"))));
}
