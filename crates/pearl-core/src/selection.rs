//! Server selection shown on the Home screen.

use crate::{SelectionError, Server, servers};

/// The server currently chosen for display.
///
/// Refers to a catalog entry by name and carries a copy of its display
/// fields. Starts on [`servers::NETHERLANDS`] and changes only when the user
/// confirms a choice in the server list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSelection {
    name: &'static str,
    flag: &'static str,
    location: &'static str,
    ping: u8,
}

impl Default for ServerSelection {
    fn default() -> Self {
        Self::from_server(&servers::NETHERLANDS)
    }
}

impl ServerSelection {
    /// Selection pointing at the given entry.
    pub fn from_server(server: &Server) -> Self {
        Self {
            name: server.name,
            flag: server.flag,
            location: server.location,
            ping: server.ping,
        }
    }

    /// Selection for a selectable catalog entry.
    ///
    /// # Errors
    ///
    /// - `SelectionError::UnknownServer` if no leaf or sub-server has this name
    pub fn by_name(name: &str) -> Result<Self, SelectionError> {
        servers::find_selectable(name)
            .map(Self::from_server)
            .ok_or_else(|| SelectionError::UnknownServer(name.to_string()))
    }

    /// Replace the selection with the entry named `name`.
    ///
    /// The current selection is kept when the name is unknown.
    pub fn update(&mut self, name: &str) -> Result<(), SelectionError> {
        *self = Self::by_name(name)?;
        Ok(())
    }

    /// Server name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Flag glyph.
    pub fn flag(&self) -> &'static str {
        self.flag
    }

    /// City label.
    pub fn location(&self) -> &'static str {
        self.location
    }

    /// Ping/quality percentage.
    pub fn ping(&self) -> u8 {
        self.ping
    }

    /// Ping as a percentage string.
    pub fn ping_label(&self) -> String {
        crate::format_ping(self.ping)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_netherlands() {
        let selection = ServerSelection::default();
        assert_eq!(selection.name(), "Netherlands");
        assert_eq!(selection.flag(), "🇳🇱");
        assert_eq!(selection.location(), "Amsterdam");
        assert_eq!(selection.ping_label(), "16%");
    }

    #[test]
    fn update_to_sub_server() {
        let mut selection = ServerSelection::default();
        assert_eq!(selection.update("Italy#2"), Ok(()));
        assert_eq!(selection.name(), "Italy#2");
        assert_eq!(selection.location(), "Milano");
        assert_eq!(selection.ping(), 23);
    }

    #[test]
    fn unknown_name_keeps_selection() {
        let mut selection = ServerSelection::default();
        let result = selection.update("Atlantis");
        assert_eq!(result, Err(SelectionError::UnknownServer("Atlantis".into())));
        assert_eq!(selection.name(), "Netherlands");
    }

    #[test]
    fn parent_is_not_selectable() {
        assert!(ServerSelection::by_name("Italy").is_err());
    }
}
