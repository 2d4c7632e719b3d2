//! Settings screen state.
//!
//! Switches are local to the screen and reset when it is left. Informational
//! rows and "Sign Out" do nothing when activated.

/// On/off preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Switch {
    /// Block traffic when the tunnel drops
    KillSwitch,
    /// Connect on launch
    AutoConnect,
    /// Connection notifications
    Notifications,
}

impl Switch {
    /// Row title.
    pub fn title(self) -> &'static str {
        match self {
            Self::KillSwitch => "Kill Switch",
            Self::AutoConnect => "Auto Connect",
            Self::Notifications => "Notifications",
        }
    }

    /// Row subtitle.
    pub fn subtitle(self) -> &'static str {
        match self {
            Self::KillSwitch => "Block internet if VPN disconnects",
            Self::AutoConnect => "Connect automatically on app start",
            Self::Notifications => "Receive connection status updates",
        }
    }
}

/// Informational rows as (title, subtitle).
pub const INFO_ROWS: [(&str, &str); 7] = [
    ("Protocol", "OpenVPN"),
    ("Split Tunneling", "Choose apps to bypass VPN"),
    ("DNS Settings", "Custom DNS configuration"),
    ("Help & Support", "Get help and contact support"),
    ("Privacy Policy", "Read our privacy policy"),
    ("Terms of Service", "Read our terms of service"),
    ("About", "App version and information"),
];

/// Version footer.
pub const VERSION_LABEL: &str = "Pearl VPN v1.0.0";

/// One row of the settings screen, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsRow {
    /// Profile card with the upgrade button
    Upgrade,
    /// Toggleable preference
    Switch(Switch),
    /// Static navigation entry
    Info {
        /// Title
        title: &'static str,
        /// Subtitle
        subtitle: &'static str,
    },
    /// Sign-out button
    SignOut,
}

/// Result of activating a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsCommand {
    /// Open the premium screen
    OpenPremium,
    /// A switch changed
    Toggled {
        /// Which switch
        switch: Switch,
        /// New value
        on: bool,
    },
    /// Row has no behaviour
    Nothing,
}

/// Settings screen state.
#[derive(Debug, Clone)]
pub struct SettingsState {
    kill_switch: bool,
    auto_connect: bool,
    notifications: bool,
    cursor: usize,
}

impl Default for SettingsState {
    fn default() -> Self {
        Self { kill_switch: false, auto_connect: false, notifications: true, cursor: 0 }
    }
}

impl SettingsState {
    /// Every row in display order.
    pub fn rows() -> Vec<SettingsRow> {
        let mut rows = vec![SettingsRow::Upgrade];
        rows.extend(
            [Switch::KillSwitch, Switch::AutoConnect, Switch::Notifications]
                .map(SettingsRow::Switch),
        );
        rows.extend(INFO_ROWS.map(|(title, subtitle)| SettingsRow::Info { title, subtitle }));
        rows.push(SettingsRow::SignOut);
        rows
    }

    /// Current value of a switch.
    pub fn is_on(&self, switch: Switch) -> bool {
        match switch {
            Switch::KillSwitch => self.kill_switch,
            Switch::AutoConnect => self.auto_connect,
            Switch::Notifications => self.notifications,
        }
    }

    /// Flip a switch. Returns the new value.
    pub fn toggle(&mut self, switch: Switch) -> bool {
        let value = match switch {
            Switch::KillSwitch => &mut self.kill_switch,
            Switch::AutoConnect => &mut self.auto_connect,
            Switch::Notifications => &mut self.notifications,
        };
        *value = !*value;
        *value
    }

    /// Index of the highlighted row.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Highlighted row.
    pub fn selected_row(&self) -> Option<SettingsRow> {
        Self::rows().get(self.cursor).copied()
    }

    /// Move the highlight up, stopping at the first row.
    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the highlight down, stopping at the last row.
    pub fn move_down(&mut self) {
        let last = Self::rows().len().saturating_sub(1);
        self.cursor = self.cursor.saturating_add(1).min(last);
    }

    /// Activate the highlighted row.
    pub fn activate(&mut self) -> SettingsCommand {
        match self.selected_row() {
            Some(SettingsRow::Upgrade) => SettingsCommand::OpenPremium,
            Some(SettingsRow::Switch(switch)) => {
                let on = self.toggle(switch);
                SettingsCommand::Toggled { switch, on }
            },
            Some(SettingsRow::Info { .. } | SettingsRow::SignOut) | None => SettingsCommand::Nothing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_switches() {
        let settings = SettingsState::default();
        assert!(!settings.is_on(Switch::KillSwitch));
        assert!(!settings.is_on(Switch::AutoConnect));
        assert!(settings.is_on(Switch::Notifications));
    }

    #[test]
    fn row_layout() {
        let rows = SettingsState::rows();
        assert_eq!(rows.len(), 1 + 3 + 7 + 1);
        assert_eq!(rows[0], SettingsRow::Upgrade);
        assert_eq!(rows[4], SettingsRow::Info { title: "Protocol", subtitle: "OpenVPN" });
        assert_eq!(rows.last(), Some(&SettingsRow::SignOut));
    }

    #[test]
    fn activate_switch_flips_it() {
        let mut settings = SettingsState::default();
        settings.move_down();
        assert_eq!(settings.activate(), SettingsCommand::Toggled {
            switch: Switch::KillSwitch,
            on: true
        });
        assert!(settings.is_on(Switch::KillSwitch));
    }

    #[test]
    fn upgrade_opens_premium_and_sign_out_is_inert() {
        let mut settings = SettingsState::default();
        assert_eq!(settings.activate(), SettingsCommand::OpenPremium);

        for _ in 0..50 {
            settings.move_down();
        }
        assert_eq!(settings.selected_row(), Some(SettingsRow::SignOut));
        assert_eq!(settings.activate(), SettingsCommand::Nothing);
    }
}
