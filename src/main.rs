// This binary crate is intentionally minimal.
// All of the math lives in the library (src/lib.rs and its modules).
// Run the walkthrough with:
//   cargo run --example lesson
fn main() {
    println!("nn-primitives: softmax and binary cross-entropy, from scratch in Rust.");
    println!("Run `cargo run --example lesson` for a short walkthrough.");
}
