/// Sink for user-facing success and error messages.
pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}
