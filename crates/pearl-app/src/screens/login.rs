//! Login form state.
//!
//! Credentials are never checked. The form exists to collect text and route
//! to the Home screen; its contents are dropped when the route is left.

use std::fmt;

/// Focusable elements of the login form, in tab order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoginField {
    /// Username text field
    #[default]
    Username,
    /// Password text field
    Password,
    /// "Sign In" button
    SignIn,
    /// "Sign in with Google" button
    Google,
}

const TAB_ORDER: [LoginField; 4] =
    [LoginField::Username, LoginField::Password, LoginField::SignIn, LoginField::Google];

impl LoginField {
    fn index(self) -> usize {
        TAB_ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }
}

/// How the user chose to sign in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignInMethod {
    /// Username and password form
    Password,
    /// Third-party button
    Google,
}

/// Login form.
#[derive(Clone, Default)]
pub struct LoginState {
    username: String,
    password: String,
    focus: LoginField,
}

impl fmt::Debug for LoginState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginState")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("focus", &self.focus)
            .finish()
    }
}

impl LoginState {
    /// Entered username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Entered password.
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Password with every character replaced by a bullet.
    pub fn masked_password(&self) -> String {
        "•".repeat(self.password.chars().count())
    }

    /// Focused element.
    pub fn focus(&self) -> LoginField {
        self.focus
    }

    /// Move focus forward, wrapping.
    pub fn focus_next(&mut self) {
        self.focus = TAB_ORDER[(self.focus.index() + 1) % TAB_ORDER.len()];
    }

    /// Move focus backward, wrapping.
    pub fn focus_prev(&mut self) {
        self.focus = TAB_ORDER[(self.focus.index() + TAB_ORDER.len() - 1) % TAB_ORDER.len()];
    }

    /// Type a character into the focused text field. Ignored on buttons.
    pub fn insert_char(&mut self, c: char) {
        match self.focus {
            LoginField::Username => self.username.push(c),
            LoginField::Password => self.password.push(c),
            LoginField::SignIn | LoginField::Google => {},
        }
    }

    /// Delete the last character of the focused text field.
    pub fn backspace(&mut self) {
        match self.focus {
            LoginField::Username => {
                self.username.pop();
            },
            LoginField::Password => {
                self.password.pop();
            },
            LoginField::SignIn | LoginField::Google => {},
        }
    }

    /// Confirm the focused element.
    ///
    /// On the username field this advances to the password field and returns
    /// `None`. Everywhere else it submits.
    pub fn confirm(&mut self) -> Option<SignInMethod> {
        match self.focus {
            LoginField::Username => {
                self.focus = LoginField::Password;
                None
            },
            LoginField::Password | LoginField::SignIn => Some(SignInMethod::Password),
            LoginField::Google => Some(SignInMethod::Google),
        }
    }
}
