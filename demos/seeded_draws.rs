//! Seeded vs ambient generator sets.
//!
//! Two sets built from the same seed replay the same draws; the ambient
//! functions use the thread-local generator and differ between runs.

use tirage::{random_int, random_sample, Generators};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let deck: Vec<u32> = (1..=52).collect();

    for round in 0..2 {
        let mut g = Generators::seeded("abc");
        let die = g.int(1, 7)?;
        let hand = g.sample(&deck, 5)?;
        let suit = g.pick(&["clubs", "diamonds", "hearts", "spades"])?;
        println!("seeded round {round}: die={die} hand={hand:?} suit={suit}");
    }

    println!();
    println!("ambient die: {}", random_int(1, 7)?);
    println!("ambient hand: {:?}", random_sample(&deck, 5)?);

    Ok(())
}
