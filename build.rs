fn main() {
    // Only the ESP-IDF build needs the sysenv passthrough; host test
    // builds have no embuild dependency.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
