//! End-to-end smoke runner against a live Crosstalk deployment.
//!
//! Exercises the full channel lifecycle with real credentials, which makes
//! this an operator tool rather than a test: configure via `crosstalk.toml`
//! or `CROSSTALK__API_KEY` / `CROSSTALK__API_SECRET` and point `base_url`
//! at the deployment under test.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use rand::{distributions::Alphanumeric, Rng};
use serde_json::json;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use crosstalk_channels::{
    BanOptions, Channel, ChannelOptions, MarkReadOptions, Message, ReplyPagination,
};
use crosstalk_transport::{RestClient, Transport};

#[derive(Parser)]
#[command(name = "crosstalk-smoke")]
#[command(about = "Runs a channel lifecycle workflow against a live deployment")]
struct Cli {
    /// Channel type to create the scratch channel under
    #[arg(long, default_value = "messaging")]
    channel_type: String,

    /// Acting user id; must be allowed to create channels and moderate
    #[arg(long, default_value = "smoke-admin")]
    user: String,

    /// Keep the scratch channel instead of deleting it at the end
    #[arg(long)]
    keep: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_env_filter(env_filter)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    let cli = Cli::parse();

    let config = crosstalk_config::load().context("failed to load configuration")?;
    config
        .credentials()
        .context("smoke run needs API credentials")?;

    let transport: Arc<dyn Transport> =
        Arc::new(RestClient::new(&config).context("failed to build transport")?);

    let channel_id = format!("smoke-{}", random_suffix(12));
    info!(channel_type = %cli.channel_type, channel_id = %channel_id, "creating scratch channel");

    let mut channel = Channel::create_or_get(
        transport,
        ChannelOptions {
            channel_type: cli.channel_type.clone(),
            id: channel_id,
            created_by: cli.user.clone(),
            data: None,
        },
    )
    .await
    .context("create-or-get failed")?;
    info!(cid = %channel.cid, "channel created");

    let alice = format!("smoke-alice-{}", random_suffix(6));
    let bob = format!("smoke-bob-{}", random_suffix(6));

    channel
        .add_members(&[alice.as_str(), bob.as_str()], Some(Message::text("welcome aboard")))
        .await
        .context("add members failed")?;
    channel.refresh().await.context("refresh failed")?;
    info!(
        members = channel.members.len(),
        count = channel.member_count,
        "members added"
    );

    let sent = channel
        .send_message(Message::text("smoke test message"), &alice)
        .await
        .context("send message failed")?;
    info!(message_id = %sent.id, "message accepted");

    let reply = channel
        .send_message(Message::reply_to(sent.id.as_str(), "smoke reply"), &bob)
        .await
        .context("send reply failed")?;
    let replies = channel
        .get_replies(&sent.id, ReplyPagination::default())
        .await
        .context("get replies failed")?;
    info!(reply_id = %reply.id, thread_len = replies.len(), "thread round trip done");

    channel
        .mark_read(&bob, MarkReadOptions::default())
        .await
        .context("mark read failed")?;

    channel
        .add_moderators(&[alice.as_str()])
        .await
        .context("add moderators failed")?;
    channel
        .demote_moderators(&[alice.as_str()])
        .await
        .context("demote moderators failed")?;
    info!("moderator promotion cycle done");

    channel
        .ban_user(
            &bob,
            &cli.user,
            BanOptions {
                timeout: Some(60),
                reason: Some("smoke test ban".to_string()),
            },
        )
        .await
        .context("ban failed")?;
    channel
        .unban_user(&bob, BanOptions::default())
        .await
        .context("unban failed")?;
    info!("ban round trip done");

    let mut properties = serde_json::Map::new();
    properties.insert("color".to_string(), json!("blue"));
    channel
        .update(properties, Some(Message::text("color is blue")))
        .await
        .context("update failed")?;

    channel.truncate().await.context("truncate failed")?;
    channel.refresh().await.context("refresh failed")?;
    info!(
        messages = channel.messages.len(),
        "channel truncated"
    );

    if cli.keep {
        info!(cid = %channel.cid, "keeping scratch channel");
    } else {
        channel.delete().await.context("delete failed")?;
        info!("scratch channel deleted");
    }

    info!("smoke run complete");
    Ok(())
}

fn random_suffix(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}
