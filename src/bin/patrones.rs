//! patrones - prints triangular and pyramid asterisk patterns.
//!
//! No arguments; the row count is fixed at 5 and the exit code is
//! always 0.

use predecir::pattern::{lower_triangular, pyramid, upper_triangular};

const ROWS: usize = 5;

fn main() {
    println!("Lower Triangular:");
    println!("{}", lower_triangular(ROWS));
    println!();
    println!("Upper Triangular:");
    println!("{}", upper_triangular(ROWS));
    println!();
    println!("Pyramid:");
    println!("{}", pyramid(ROWS));
}
