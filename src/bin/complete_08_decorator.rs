//! Decorator: wrap a notifier in more notifiers. Each wrapper forwards the
//! message to what it wraps, then adds its own channel.
//!
//! Run with: cargo run --bin complete_08_decorator

use colored::Colorize;

pub trait Notification {
    /// Returns the deliveries made, in order.
    fn send(&self, message: &str) -> Vec<String>;
}

pub struct BasicNotification;

impl Notification for BasicNotification {
    fn send(&self, message: &str) -> Vec<String> {
        vec![format!("Sending basic notification: {message}")]
    }
}

pub struct EmailDecorator<N> {
    inner: N,
}

impl<N: Notification> EmailDecorator<N> {
    pub fn new(inner: N) -> Self {
        Self { inner }
    }
}

impl<N: Notification> Notification for EmailDecorator<N> {
    fn send(&self, message: &str) -> Vec<String> {
        let mut sent = self.inner.send(message);
        sent.push(format!("Sending notification by email: {message}"));
        sent
    }
}

pub struct SmsDecorator<N> {
    inner: N,
}

impl<N: Notification> SmsDecorator<N> {
    pub fn new(inner: N) -> Self {
        Self { inner }
    }
}

impl<N: Notification> Notification for SmsDecorator<N> {
    fn send(&self, message: &str) -> Vec<String> {
        let mut sent = self.inner.send(message);
        sent.push(format!("Sending notification by SMS: {message}"));
        sent
    }
}

/// Lets decorators be stacked at runtime too.
impl Notification for Box<dyn Notification> {
    fn send(&self, message: &str) -> Vec<String> {
        (**self).send(message)
    }
}

fn main() {
    let notification = SmsDecorator::new(EmailDecorator::new(BasicNotification));

    for line in notification.send("system alert") {
        if line.contains("email") {
            println!("{}", line.red());
        } else if line.contains("SMS") {
            println!("{}", line.yellow());
        } else {
            println!("{}", line.cyan());
        }
    }

    println!("\n{}", "Chosen at runtime:".blue());
    let mut dynamic: Box<dyn Notification> = Box::new(BasicNotification);
    for channel in ["sms", "email"] {
        dynamic = match channel {
            "sms" => Box::new(SmsDecorator::new(dynamic)),
            "email" => Box::new(EmailDecorator::new(dynamic)),
            _ => dynamic,
        };
    }
    for line in dynamic.send("backup finished") {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_only() {
        assert_eq!(
            BasicNotification.send("hi"),
            vec!["Sending basic notification: hi"]
        );
    }

    #[test]
    fn test_stacked_order() {
        let notification = SmsDecorator::new(EmailDecorator::new(BasicNotification));
        assert_eq!(
            notification.send("system alert"),
            vec![
                "Sending basic notification: system alert",
                "Sending notification by email: system alert",
                "Sending notification by SMS: system alert",
            ]
        );
    }

    #[test]
    fn test_boxed_stacking() {
        let boxed: Box<dyn Notification> = Box::new(EmailDecorator::new(BasicNotification));
        let wrapped = SmsDecorator::new(boxed);
        assert_eq!(wrapped.send("x").len(), 3);
    }
}
