//! Posts a message with sender overrides and two embeds using the async client.
//!
//! ```text
//! cargo run --example multiple_embeds -- <WEBHOOK_URL>
//! ```

mod common;

use std::process::ExitCode;

use hookmsg::{Embed, Field, Message, Rgb, WebhookClient};

fn build_message() -> Message {
    let first = Embed::new()
        .with_title("Embed #1")
        .with_description("Lorem ipsum dolor sit amet.")
        .with_color_rgb(Rgb::new(100, 200, 300))
        .with_timestamp_now()
        .with_image("https://picsum.photos/400/200")
        .add_field(Field::new(
            "Field #1",
            "Lorem ipsum dolor sit amet consectetur adipiscing elit",
            true,
        ))
        .add_field(Field::new(
            "Field #2",
            "Dolor sit amet consectetur adipiscing elit quisque faucibus.",
            true,
        ));

    let field = Field::default()
        .with_name("Field #1")
        .with_value("Adipiscing elit quisque faucibus ex sapien vitae pellentesque.")
        .with_inline(true);

    let second = Embed::new()
        .with_title("Embed #2")
        .with_description("Lorem ipsum dolor sit amet.")
        .with_color_int(55_555)
        .with_thumbnail("https://picsum.photos/80")
        .with_footer("Some Footer Text", "https://picsum.photos/16")
        .add_field(field);

    Message::new()
        .with_content("Hello, webhook!")
        .with_username("hookmsg")
        .with_avatar_url("https://picsum.photos/64")
        .add_embed(first)
        .add_embed(second)
}

fn main() -> ExitCode {
    let args = common::init();

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!("Failed to create Tokio runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    let client = WebhookClient::new();
    let message = build_message();
    common::finish(runtime.block_on(client.send(&args.url, &message)))
}
