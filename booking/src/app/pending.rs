//! Loading indicator guard

use crate::domain::ports::Notifier;

/// Shows the loading indicator on creation and hides it on drop
///
/// The indicator is cleared whether the call succeeded, failed, or the future
/// was dropped mid-flight.
pub struct LoadingGuard<'a, N: Notifier + ?Sized> {
    notifier: &'a N,
}

impl<'a, N: Notifier + ?Sized> LoadingGuard<'a, N> {
    pub fn show(notifier: &'a N) -> Self {
        notifier.show_loading();
        Self { notifier }
    }
}

impl<N: Notifier + ?Sized> Drop for LoadingGuard<'_, N> {
    fn drop(&mut self) {
        self.notifier.hide_loading();
    }
}
