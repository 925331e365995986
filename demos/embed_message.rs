//! Posts a single embed with a hex color, timestamp and inline fields.
//!
//! ```text
//! cargo run --example embed_message -- <WEBHOOK_URL>
//! ```

mod common;

use std::process::ExitCode;

use hookmsg::{Embed, Field, blocking};

fn main() -> ExitCode {
    let args = common::init();

    let embed = Embed::new()
        .with_title("Server Alert")
        .with_description("The server has restarted successfully")
        .with_color_hex("#FF5733")
        .with_timestamp(&chrono::Utc::now())
        .add_field(Field::new("Status", "Success", true))
        .add_field(Field::new("Duration", "3m45s", true));

    if let Some(e) = embed.error() {
        tracing::warn!("Embed configuration problem: {e}");
    }

    common::finish(blocking::send_embed(&args.url, &embed))
}
