//! Posts a plain text message.
//!
//! ```text
//! cargo run --example simple_message -- <WEBHOOK_URL>
//! ```

mod common;

use std::process::ExitCode;

fn main() -> ExitCode {
    let args = common::init();
    common::finish(hookmsg::blocking::send_simple(&args.url, "Hello, webhook!"))
}
