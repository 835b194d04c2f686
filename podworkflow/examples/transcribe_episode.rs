//! Example: Run the full workflow against a live backend
//!
//! Fetches the channel list, picks the first channel and episode,
//! requests a transcription and prints the segment timeline.
//!
//! Run with: cargo run -p podworkflow --example transcribe_episode
//! Or with a specific backend: cargo run -p podworkflow --example transcribe_episode -- http://localhost:8000

use podworkflow::WorkflowController;
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let base_url = env::args()
        .nth(1)
        .unwrap_or_else(|| podapi::DEFAULT_BASE_URL.to_string());

    let controller = WorkflowController::new(&base_url).await?;

    controller.load_channels().await;
    let channels = controller.snapshot().channels;
    let Some(channel) = channels.first().cloned() else {
        println!("No channels registered at {}.", base_url);
        return Ok(());
    };
    println!("Channel: {}", channel.title);

    controller.select_channel(channel);
    controller.load_episodes().await;
    if let Some(error) = controller.error() {
        println!("Could not fetch episodes: {}", error);
        return Ok(());
    }

    let episodes = controller.snapshot().episodes;
    let Some(episode) = episodes.first().cloned() else {
        println!("The channel has no episodes.");
        return Ok(());
    };
    println!("Episode: {}\n", episode.title);

    println!("Transcribing (this can take a while)...");
    controller.select_episode(episode);
    controller.load_transcription().await;
    if let Some(error) = controller.error() {
        println!("Transcription failed: {}", error);
        return Ok(());
    }

    let Some(transcription) = controller.snapshot().transcription else {
        println!("No transcription returned.");
        return Ok(());
    };

    println!("--- segments ({}) ---", transcription.segments.len());
    for segment in &transcription.segments {
        println!("[{:7.2} - {:7.2}] {}", segment.start, segment.end, segment.text);
    }

    println!("\n--- translation ---");
    println!("{}", transcription.translation);

    Ok(())
}
