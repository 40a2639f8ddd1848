use std::collections::HashMap;

use chrono::{Duration, TimeZone, Utc};
use rand::{seq::SliceRandom, Rng};
use sureddo_api::Uuid;

const NUM_USERS: usize = 3;
const NUM_JOBS: usize = 10;

const NUM_COMMENTS: usize = 200;
const COMMENT_WORD_COUNT: usize = 25;
// how often a comment replies to an earlier one instead of starting a thread
const REPLY_PROBABILITY: f64 = 0.6;

fn gen_n_items(table: &str, n: usize, mut f: impl FnMut(usize) -> String) {
    println!("INSERT INTO {} VALUES", table);
    for i in 0..n {
        if i != 0 {
            println!(",");
        }
        print!("    {}", f(i));
    }
    println!();
    println!("ON CONFLICT DO NOTHING;");
}

fn main() {
    let mut rng = rand::thread_rng();
    let epoch = Utc
        .with_ymd_and_hms(2022, 12, 14, 8, 0, 0)
        .single()
        .expect("fixture epoch is not a valid date");

    // Generate users. The password_hash column gets random garbage: the
    // fixture only exercises reads, these accounts cannot log in.
    let mut users = Vec::new();
    gen_n_items("users", NUM_USERS, |i| {
        let uuid = Uuid::new_v4();
        users.push(uuid);
        format!("('{}', 'user-{}', '{:032x}', NULL)", uuid, i, rng.gen::<u128>())
    });

    // Generate jobs
    let mut jobs = Vec::new();
    gen_n_items("jobs", NUM_JOBS, |i| {
        let uuid = Uuid::new_v4();
        jobs.push(uuid);
        format!("('{}', 'General Maintenance Task #{}')", uuid, i + 1)
    });

    // Generate comments, threaded: most reply to an earlier comment on the
    // same job
    let mut comments_by_job: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
    gen_n_items("comments", NUM_COMMENTS, |i| {
        let uuid = Uuid::new_v4();
        let job = *jobs.choose(&mut rng).expect("no jobs were generated");
        let earlier = comments_by_job.entry(job).or_default();
        let parent = match !earlier.is_empty() && rng.gen_bool(REPLY_PROBABILITY) {
            true => format!("'{}'", earlier.choose(&mut rng).expect("no earlier comment")),
            false => String::from("NULL"),
        };
        earlier.push(uuid);
        let date = epoch + Duration::minutes(i as i64);
        format!(
            "('{}', '{}', {}, '{}', '{}', '{}')",
            uuid,
            job,
            parent,
            users.choose(&mut rng).expect("no users were generated"),
            date.naive_utc(),
            lipsum::lipsum_words(COMMENT_WORD_COUNT),
        )
    });
}
