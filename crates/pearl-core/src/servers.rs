//! Static server catalog.
//!
//! Entries are hand-authored display records. None of them point at a real
//! endpoint; they exist so the selection flow has something to select.

use crate::format_ping;

/// A selectable server entry.
///
/// Top-level entries are countries. An entry with sub-servers is a parent: it
/// expands in the list view instead of being selected, and its sub-servers
/// (nested one level only) are the selectable locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Server {
    /// Stable identifier (`"2"`, or `"1.3"` for a sub-server)
    pub id: &'static str,
    /// Display name, unique across the catalog
    pub name: &'static str,
    /// Flag glyph
    pub flag: &'static str,
    /// City shown under the name
    pub location: &'static str,
    /// Ping/quality percentage
    pub ping: u8,
    /// Only available on the premium plan
    pub premium: bool,
    /// Finer-grained locations under this entry
    pub sub_servers: &'static [Server],
}

impl Server {
    /// Whether this entry expands into sub-servers.
    pub fn has_sub_servers(&self) -> bool {
        !self.sub_servers.is_empty()
    }

    /// Secondary label: the location count for parents, the city otherwise.
    pub fn location_label(&self) -> String {
        if self.has_sub_servers() {
            format!("{} Locations", self.sub_servers.len())
        } else {
            self.location.to_string()
        }
    }

    /// Ping as a percentage string.
    pub fn ping_label(&self) -> String {
        format_ping(self.ping)
    }

    /// Signal quality derived from the ping percentage.
    pub fn signal(&self) -> Signal {
        Signal::from_ping(self.ping)
    }
}

/// Signal quality indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Below 20%
    Good,
    /// Below 50%
    Fair,
    /// Below 80%
    Poor,
    /// 80% and above
    Bad,
}

impl Signal {
    /// Classify a ping percentage.
    pub fn from_ping(ping: u8) -> Self {
        match ping {
            0..20 => Self::Good,
            20..50 => Self::Fair,
            50..80 => Self::Poor,
            _ => Self::Bad,
        }
    }

    /// Coloured dot glyph.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Good => "🟢",
            Self::Fair => "🟡",
            Self::Poor => "🟠",
            Self::Bad => "🔴",
        }
    }
}

const ITALY_LOCATIONS: &[Server] = &[
    sub_server("1.1", "Italy#1", 16),
    sub_server("1.2", "Italy#2", 23),
    sub_server("1.3", "Italy#3", 54),
    sub_server("1.4", "Italy#4", 81),
];

const fn sub_server(id: &'static str, name: &'static str, ping: u8) -> Server {
    Server { id, name, flag: "🇮🇹", location: "Milano", ping, premium: false, sub_servers: &[] }
}

/// Server selected on startup.
pub const NETHERLANDS: Server = Server {
    id: "2",
    name: "Netherlands",
    flag: "🇳🇱",
    location: "Amsterdam",
    ping: 16,
    premium: false,
    sub_servers: &[],
};

/// Every server, in display order.
pub static CATALOG: &[Server] = &[
    Server {
        id: "1",
        name: "Italy",
        flag: "🇮🇹",
        location: "Milano",
        ping: 16,
        premium: false,
        sub_servers: ITALY_LOCATIONS,
    },
    NETHERLANDS,
    Server {
        id: "3",
        name: "Germany",
        flag: "🇩🇪",
        location: "Frankfurt",
        ping: 23,
        premium: false,
        sub_servers: &[],
    },
    Server {
        id: "4",
        name: "United States",
        flag: "🇺🇸",
        location: "New York",
        ping: 45,
        premium: true,
        sub_servers: &[],
    },
    Server {
        id: "5",
        name: "Brazil",
        flag: "🇧🇷",
        location: "São Paulo",
        ping: 67,
        premium: true,
        sub_servers: &[],
    },
    Server {
        id: "6",
        name: "France",
        flag: "🇫🇷",
        location: "Paris",
        ping: 34,
        premium: true,
        sub_servers: &[],
    },
    Server {
        id: "7",
        name: "Canada",
        flag: "🇨🇦",
        location: "Toronto",
        ping: 56,
        premium: true,
        sub_servers: &[],
    },
];

/// Find a selectable entry (leaf or sub-server) by exact name.
///
/// Parents are not selectable, so a parent's name resolves to `None`.
pub fn find_selectable(name: &str) -> Option<&'static Server> {
    CATALOG.iter().find_map(|server| {
        if server.has_sub_servers() {
            server.sub_servers.iter().find(|sub| sub.name == name)
        } else {
            (server.name == name).then_some(server)
        }
    })
}

/// Find a top-level entry by id.
pub fn find_by_id(id: &str) -> Option<&'static Server> {
    CATALOG.iter().find(|server| server.id == id)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn names_are_unique() {
        let mut names = HashSet::new();
        for server in CATALOG {
            assert!(names.insert(server.name), "duplicate {}", server.name);
            for sub in server.sub_servers {
                assert!(names.insert(sub.name), "duplicate {}", sub.name);
            }
        }
    }

    #[test]
    fn sub_servers_nest_one_level() {
        for server in CATALOG {
            for sub in server.sub_servers {
                assert!(!sub.has_sub_servers());
                assert_eq!(sub.flag, server.flag);
                assert_eq!(sub.premium, server.premium);
            }
        }
    }

    #[test]
    fn parent_location_label_counts_children() {
        let italy = find_by_id("1");
        assert_eq!(italy.map(Server::location_label).as_deref(), Some("4 Locations"));
        assert_eq!(NETHERLANDS.location_label(), "Amsterdam");
    }

    #[test]
    fn signal_thresholds() {
        let signals: Vec<_> = ITALY_LOCATIONS.iter().map(Server::signal).collect();
        assert_eq!(signals, vec![Signal::Good, Signal::Fair, Signal::Poor, Signal::Bad]);
    }

    #[test]
    fn find_selectable_skips_parents() {
        assert!(find_selectable("Italy").is_none());
        assert_eq!(find_selectable("Italy#3").map(|s| s.id), Some("1.3"));
        assert_eq!(find_selectable("Canada").map(|s| s.id), Some("7"));
        assert!(find_selectable("Atlantis").is_none());
    }
}
