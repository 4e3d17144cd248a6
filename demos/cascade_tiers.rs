//! Cascade Tiers
//!
//! Shows how shrinking the budget pushes the chunker down the cascade:
//! sentences, then clauses, then words.
//!
//! ```bash
//! RUST_LOG=speakable=trace cargo run --example cascade_tiers
//! ```

use speakable::{split_sentences, Measure, SpeechChunker};
use tracing_subscriber::EnvFilter;

fn main() -> speakable::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let document = "Call me Ishmael. Some years ago, never mind how long precisely, \
        having little or no money in my purse, and nothing particular to interest \
        me on shore, I thought I would sail about a little and see the watery part \
        of the world.\n\nIt is a way I have of driving off the spleen.";

    println!("Cascade Tiers");
    println!("=============\n");

    let sentences = split_sentences(document);
    println!("Sentences: {}", sentences.len());
    for (i, sentence) in sentences.iter().enumerate() {
        println!("  ({}) {} chars", i, sentence.chars().count());
    }

    for max in [280, 120, 60, 12] {
        let chunker = SpeechChunker::new(max)?;
        let chunks = chunker.chunk(document);

        println!("\nBudget {max}: {} chunks", chunks.len());
        for chunk in &chunks {
            let len = chunk.chars().count();
            let flag = if len > max { "  <- single word over budget" } else { "" };
            println!("  {len:>3} | {chunk}{flag}");
        }
    }

    // Same budget, different unit
    let text = "Ça coûte très cher, n'est-ce pas ?";
    for measure in [Measure::Chars, Measure::Bytes] {
        let chunker = SpeechChunker::new(20)?.with_measure(measure);
        println!("\n{measure:?}: {:?}", chunker.chunk(text));
    }

    Ok(())
}
