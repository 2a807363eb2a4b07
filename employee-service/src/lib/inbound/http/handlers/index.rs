/// Plaintext acknowledgment for the service root.
pub async fn index() -> &'static str {
    "Employee Management REST API - Protected"
}
