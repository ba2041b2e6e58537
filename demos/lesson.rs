use nn_primitives::{softmax, BceLoss};

fn main() {
    let scores = vec![5.0, 6.0, 7.0];
    let probabilities = softmax(&scores);
    println!("Scores: {scores:?}");
    println!("Softmax: {probabilities:?}");
    println!("Sum: {:.12}", probabilities.iter().sum::<f64>());

    let labels = vec![1.0, 0.0, 1.0, 1.0];
    let predicted = vec![0.4, 0.6, 0.1, 0.5];
    let ce = BceLoss::loss(&predicted, &labels);
    println!("Labels: {labels:?}");
    println!("Predicted: {predicted:?}");
    println!("Cross-entropy: {ce:.4}");

    // A sharper model assigns higher probability to the labelled outcomes,
    // so its cross-entropy is lower.
    let sharper = vec![0.9, 0.1, 0.8, 0.7];
    println!(
        "Sharper predictions {:?} -> cross-entropy {:.4}",
        sharper,
        BceLoss::loss(&sharper, &labels)
    );
}
