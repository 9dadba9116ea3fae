/// Short-lived notification text shown over the ring.
///
/// Each `show` bumps a generation; an expiry timer only hides the toast it
/// was armed for, so a quick second click keeps its full display time.
#[derive(Debug, Clone, Default)]
pub struct Toast {
    message: String,
    generation: u64,
    visible: bool,
}

impl Toast {
    pub fn show(&mut self, message: impl Into<String>) -> u64 {
        self.message = message.into();
        self.visible = true;
        self.generation += 1;
        self.generation
    }

    /// Returns whether the toast was hidden.
    pub fn expire(&mut self, generation: u64) -> bool {
        if !self.visible || generation != self.generation {
            return false;
        }
        self.visible = false;
        true
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_then_expire() {
        let mut toast = Toast::default();
        assert!(!toast.is_visible());

        let id = toast.show("Center Button Clicked");
        assert!(toast.is_visible());
        assert_eq!(toast.message(), "Center Button Clicked");

        assert!(toast.expire(id));
        assert!(!toast.is_visible());
        assert!(!toast.expire(id));
    }

    #[test]
    fn test_stale_timer_keeps_newer_toast() {
        let mut toast = Toast::default();
        let first = toast.show("Button 0 clicked");
        let second = toast.show("Button 1 clicked");

        assert!(!toast.expire(first));
        assert!(toast.is_visible());
        assert_eq!(toast.message(), "Button 1 clicked");
        assert!(toast.expire(second));
    }
}
