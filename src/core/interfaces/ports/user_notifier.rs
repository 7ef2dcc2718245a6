pub trait UserNotifier: Send + Sync {
    fn notify(&self, message: &str);
}
