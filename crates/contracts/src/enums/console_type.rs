use super::closed_set;

closed_set! {
    /// Console generation, shared by consoles and controllers.
    ConsoleType {
        Ps4 => ("ps4", "PS4"),
        Ps5 => ("ps5", "PS5"),
    }
}
