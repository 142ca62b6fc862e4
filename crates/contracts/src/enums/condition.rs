use super::closed_set;

closed_set! {
    /// Physical condition of a piece of hardware.
    Condition {
        Excellent => ("excellent", "Excellent"),
        Good => ("good", "Good"),
        Fair => ("fair", "Fair"),
        Poor => ("poor", "Poor"),
    }
}
