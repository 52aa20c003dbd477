use std::time::Duration;

/// Physical (or stand-in) push button used to dismiss the banner
pub trait Button {
    /// Wait at most `timeout` for a press; `true` if one happened
    fn wait_for_press(&mut self, timeout: Duration) -> bool;
}

impl<B: Button + ?Sized> Button for &mut B {
    fn wait_for_press(&mut self, timeout: Duration) -> bool {
        (**self).wait_for_press(timeout)
    }
}
