//! Search for a Hadamard matrix of order 20 (block size 5) and print it.
//!
//! This reproduces the original program surface: render the matrix as
//! space-separated rows, then a success/failure message. The process exits
//! 0 regardless of outcome.

use rand::rngs::StdRng;
use rand::SeedableRng;
use williamson::{Error, WilliamsonSearch};

fn main() {
    let search = WilliamsonSearch::new(5)
        .expect("block size 5 is valid")
        .with_max_attempts(1_000_000);

    let mut rng = StdRng::from_entropy();

    match search.run(&mut rng) {
        Ok(outcome) => {
            println!("{}", outcome.hadamard());
            if outcome.is_valid() {
                println!(
                    "Success: order-{} Hadamard matrix found after {} attempts (quadruple {:?})",
                    outcome.hadamard().order(),
                    outcome.attempts(),
                    outcome.quadruple()
                );
            } else {
                println!("Assembled matrix failed orthogonality validation:");
                for issue in &outcome.verification().issues {
                    println!("  {issue:?}");
                }
            }
        }
        Err(Error::SearchExhausted { attempts, .. }) => {
            println!("No Williamson quadruple found within {attempts} attempts");
        }
        Err(err) => {
            println!("Search failed: {err}");
        }
    }
}
