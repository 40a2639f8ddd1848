use std::str::FromStr;

use sureddo_client::api::Time;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(inline_js = "
    export function get_timezone() {
        return Intl.DateTimeFormat().resolvedOptions().timeZone;
    }
")]
extern "C" {
    fn get_timezone() -> String;
}

lazy_static::lazy_static! {
    static ref LOCAL_TZ: chrono_tz::Tz = {
        chrono_tz::Tz::from_str(&get_timezone())
            .expect("host js timezone is not in chrono-tz database")
    };
}

/// "Dec 14, 2022, 09:30 AM", in the browser's timezone
pub fn format_timestamp(t: &Time) -> String {
    t.with_timezone(&*LOCAL_TZ)
        .format("%b %-d, %Y, %I:%M %p")
        .to_string()
}
