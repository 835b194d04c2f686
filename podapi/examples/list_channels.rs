//! Example: List registered channels and their latest episodes
//!
//! Run with: cargo run -p podapi --example list_channels
//! Or with a specific backend: cargo run -p podapi --example list_channels -- http://localhost:8000

use podapi::PodScribeClient;
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Get backend base URL from command line or use default
    let base_url = env::args()
        .nth(1)
        .unwrap_or_else(|| podapi::DEFAULT_BASE_URL.to_string());

    println!("Listing channels registered at {}...\n", base_url);

    let client = PodScribeClient::new(&base_url).await?;
    let channels = client.channel_list().await?;

    if channels.is_empty() {
        println!("No channels registered yet.");
        return Ok(());
    }

    for channel in &channels {
        println!("[{}] {}", channel.id, channel.title);
        println!("    feed: {}", channel.feed_url);

        match client.episodes(channel).await {
            Ok(episodes) => {
                for episode in episodes.iter().take(3) {
                    println!("    - {}", episode.title);
                }
                if episodes.len() > 3 {
                    println!("    ... and {} more", episodes.len() - 3);
                }
            }
            Err(e) => println!("    (failed to fetch episodes: {})", e),
        }
        println!();
    }

    Ok(())
}
