//! Success banner shown above a form after a valid submission.

/// Proof of a particular `show`. Hiding with an older ticket does nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HideTicket(u64);

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SuccessBanner {
    text: Option<String>,
    visible: bool,
    generation: u64,
    scroll_requested: bool,
}

impl SuccessBanner {
    /// Creates the banner on first use, shows `message` and asks for a scroll.
    pub fn show(&mut self, message: &str) -> HideTicket {
        match self.text.as_mut() {
            Some(text) => {
                text.clear();
                text.push_str(message);
            }
            None => self.text = Some(message.to_string()),
        }
        self.visible = true;
        self.scroll_requested = true;
        self.generation += 1;
        HideTicket(self.generation)
    }

    /// Hides the banner if `ticket` belongs to the latest `show`.
    pub fn hide(&mut self, ticket: HideTicket) -> bool {
        if ticket.0 != self.generation || !self.visible {
            return false;
        }
        self.visible = false;
        true
    }

    /// Invalidates every outstanding ticket and takes the banner down.
    pub fn cancel_pending(&mut self) {
        self.generation += 1;
        self.visible = false;
        self.scroll_requested = false;
    }

    /// Returns and clears the pending scroll-into-view request.
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_requested)
    }

    pub fn scroll_requested(&self) -> bool {
        self.scroll_requested
    }

    /// Whether the banner element has been created.
    pub fn exists(&self) -> bool {
        self.text.is_some()
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
