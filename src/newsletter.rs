use crate::constants::*;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum FormPhase {
    Idle,       // Waiting for input
    Sending,    // Simulated submission in flight
    Subscribed, // Confirmation shown before the form resets
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum FormGlyph {
    None,
    Spinner,
    Check,
}

/// Newsletter subscription form. Submission is simulated: a fixed
/// "sending" delay, a confirmation window, then the form resets. While
/// the submission runs the button is disabled and its label and glyph
/// swap through the loading and confirmation looks.
pub struct Newsletter {
    pub input: String,
    pub focused: bool,
    phase: FormPhase,
    phase_timer: f32,
    pub error: Option<&'static str>,
}

impl Newsletter {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            focused: false,
            phase: FormPhase::Idle,
            phase_timer: 0.0,
            error: None,
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// The field only accepts typing while idle.
    pub fn type_char(&mut self, c: char) {
        if self.phase == FormPhase::Idle
            && self.input.len() < FORM_MAX_INPUT
            && !c.is_control()
        {
            self.input.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if self.phase == FormPhase::Idle {
            self.input.pop();
        }
    }

    pub fn submit(&mut self) {
        if self.phase != FormPhase::Idle {
            return;
        }
        if self.input.is_empty() || !self.input.contains('@') {
            self.error = Some("Please enter a valid e-mail address.");
            return;
        }
        self.error = None;
        self.phase = FormPhase::Sending;
        self.phase_timer = 0.0;
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn update(&mut self, dt: f32) {
        match self.phase {
            FormPhase::Idle => {}
            FormPhase::Sending => {
                self.phase_timer += dt;
                if self.phase_timer >= FORM_SEND_DELAY {
                    self.phase = FormPhase::Subscribed;
                    self.phase_timer = 0.0;
                }
            }
            FormPhase::Subscribed => {
                self.phase_timer += dt;
                if self.phase_timer >= FORM_CONFIRM_DELAY {
                    self.phase = FormPhase::Idle;
                    self.phase_timer = 0.0;
                    self.input.clear();
                }
            }
        }
    }

    /// True while the submit control is disabled.
    pub fn busy(&self) -> bool {
        self.phase != FormPhase::Idle
    }

    pub fn button_label(&self) -> &'static str {
        match self.phase {
            FormPhase::Idle => "Subscribe",
            FormPhase::Sending => "Sending...",
            FormPhase::Subscribed => "Subscribed!",
        }
    }

    pub fn button_glyph(&self) -> FormGlyph {
        match self.phase {
            FormPhase::Idle => FormGlyph::None,
            FormPhase::Sending => FormGlyph::Spinner,
            FormPhase::Subscribed => FormGlyph::Check,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn form_with(input: &str) -> Newsletter {
        let mut f = Newsletter::new();
        for c in input.chars() {
            f.type_char(c);
        }
        f
    }

    #[test]
    fn rejects_addresses_without_an_at_sign() {
        let mut f = form_with("not-an-address");
        f.submit();
        assert_eq!(f.phase(), FormPhase::Idle);
        assert!(f.error.is_some());
    }

    #[test]
    fn rejects_an_empty_field() {
        let mut f = Newsletter::new();
        f.submit();
        assert!(f.error.is_some());
    }

    #[test]
    fn walks_the_submission_phases_on_schedule() {
        let mut f = form_with("ana@example.com");
        f.submit();
        assert_eq!(f.phase(), FormPhase::Sending);
        assert_eq!(f.button_label(), "Sending...");
        assert_eq!(f.button_glyph(), FormGlyph::Spinner);
        assert!(f.busy());

        f.update(FORM_SEND_DELAY - 0.1);
        assert_eq!(f.phase(), FormPhase::Sending);
        f.update(0.1);
        assert_eq!(f.phase(), FormPhase::Subscribed);
        assert_eq!(f.button_label(), "Subscribed!");
        assert_eq!(f.button_glyph(), FormGlyph::Check);

        f.update(FORM_CONFIRM_DELAY);
        assert_eq!(f.phase(), FormPhase::Idle);
        assert_eq!(f.button_label(), "Subscribe");
        assert_eq!(f.input, ""); // form reset
        assert!(!f.busy());
    }

    #[test]
    fn resubmit_while_busy_is_ignored() {
        let mut f = form_with("ana@example.com");
        f.submit();
        f.update(FORM_SEND_DELAY / 2.0);
        f.submit(); // must not restart the timer
        f.update(FORM_SEND_DELAY / 2.0);
        assert_eq!(f.phase(), FormPhase::Subscribed);
    }

    #[test]
    fn typing_is_locked_while_busy() {
        let mut f = form_with("ana@example.com");
        f.submit();
        f.type_char('x');
        f.backspace();
        assert_eq!(f.input, "ana@example.com");
    }

    #[test]
    fn error_clears_on_dismiss_and_successful_submit() {
        let mut f = form_with("nope");
        f.submit();
        assert!(f.error.is_some());
        f.dismiss_error();
        assert!(f.error.is_none());
        f.type_char('@');
        f.submit();
        assert_eq!(f.phase(), FormPhase::Sending);
    }
}
