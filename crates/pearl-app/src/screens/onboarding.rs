//! Onboarding screen focus.

/// Buttons on the onboarding screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OnboardingButton {
    /// "Create An Account"
    #[default]
    CreateAccount,
    /// "Sign In"
    SignIn,
}

impl OnboardingButton {
    /// Button label.
    pub fn label(self) -> &'static str {
        match self {
            Self::CreateAccount => "Create An Account",
            Self::SignIn => "Sign In",
        }
    }
}

/// Which onboarding button has focus. Both lead to the login screen.
#[derive(Debug, Clone, Default)]
pub struct OnboardingState {
    focus: OnboardingButton,
}

impl OnboardingState {
    /// Focused button.
    pub fn focus(&self) -> OnboardingButton {
        self.focus
    }

    /// Move focus to the other button.
    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            OnboardingButton::CreateAccount => OnboardingButton::SignIn,
            OnboardingButton::SignIn => OnboardingButton::CreateAccount,
        };
    }
}
