//! Basic Speech Chunking
//!
//! The minimal example: chunk text into a playback queue.
//!
//! ```bash
//! RUST_LOG=speakable=debug cargo run --example 01_basic_chunking
//! ```

use speakable::{chunk, DEFAULT_MAX_CHARS};
use tracing_subscriber::EnvFilter;

fn main() -> speakable::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Text as it comes out of a PDF extractor: hard wraps, stray spaces
    let document = "Machine learning models learn patterns from data.   They\n\
        generalize these patterns to make predictions.\n\n\
        This is fundamentally different from traditional programming,\n\
        where humans write explicit rules, test them by hand, and revise\n\
        them whenever the world changes, which it always does. Deep learning\n\
        extends this with multiple hidden layers.";

    let chunks = chunk(document, DEFAULT_MAX_CHARS)?;

    println!("Document: {} chars", document.chars().count());
    println!("Chunks: {}\n", chunks.len());

    for (i, chunk) in chunks.iter().enumerate() {
        println!("[{}] {} chars: \"{}\"", i, chunk.chars().count(), chunk);
    }

    // Each chunk is one synthesis call; play them back in order.
    Ok(())
}
