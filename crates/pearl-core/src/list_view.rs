//! Server list view state.
//!
//! Filters the static catalog by a free-text query, partitions the result into
//! free and premium groups, and tracks which parents are expanded. Expansion
//! is local view state: it never changes the selection. Only activating a leaf
//! or a sub-server produces a [`ServerSelection`].

use std::collections::BTreeSet;

use crate::{CATALOG, Server, ServerSelection, servers};

/// Section of the server list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerGroup {
    /// Free locations
    Free,
    /// Premium-only locations
    Premium,
}

impl ServerGroup {
    /// Section title.
    pub fn title(self) -> &'static str {
        match self {
            Self::Free => "Free Locations",
            Self::Premium => "Premium Locations",
        }
    }
}

/// Filtered catalog split by plan, preserving catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    /// Entries available on the free plan
    pub free: Vec<&'static Server>,
    /// Premium-only entries
    pub premium: Vec<&'static Server>,
}

/// One visible row of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row {
    /// Section header with the number of entries in the section.
    Header {
        /// Section
        group: ServerGroup,
        /// Entries in the section
        count: usize,
    },

    /// Top-level entry (a leaf, or a parent with sub-servers).
    Server(&'static Server),

    /// Sub-server of an expanded parent.
    SubServer {
        /// Expanded parent
        parent: &'static Server,
        /// The sub-server
        server: &'static Server,
    },
}

impl Row {
    /// Whether the cursor can rest on this row.
    pub fn is_selectable(&self) -> bool {
        !matches!(self, Self::Header { .. })
    }
}

/// Search, partition and expansion state of the server list.
#[derive(Debug, Clone, Default)]
pub struct ServerListView {
    /// Free-text search query.
    query: String,
    /// Ids of expanded parents.
    expanded: BTreeSet<&'static str>,
    /// Index into the selectable rows.
    cursor: usize,
}

impl ServerListView {
    /// Empty query, nothing expanded, cursor on the first row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current search query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the search query.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.clamp_cursor();
    }

    /// Append a character to the query.
    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.clamp_cursor();
    }

    /// Remove the last character of the query.
    pub fn pop_char(&mut self) {
        self.query.pop();
        self.clamp_cursor();
    }

    /// Top-level entries whose name contains the query, ignoring case.
    pub fn filtered(&self) -> Vec<&'static Server> {
        let needle = self.query.to_lowercase();
        CATALOG.iter().filter(|server| server.name.to_lowercase().contains(&needle)).collect()
    }

    /// Filtered entries split into free and premium groups.
    pub fn partition(&self) -> Partition {
        let (premium, free): (Vec<_>, Vec<_>) =
            self.filtered().into_iter().partition(|server| server.premium);
        Partition { free, premium }
    }

    /// Whether the parent with this id is expanded.
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    /// Flip expansion of the parent with this id.
    ///
    /// Entries without sub-servers never expand. Returns whether the entry is
    /// expanded afterwards.
    pub fn toggle_expanded(&mut self, id: &str) -> bool {
        let Some(server) = servers::find_by_id(id).filter(|s| s.has_sub_servers()) else {
            return false;
        };

        let expanded = if self.expanded.remove(server.id) {
            false
        } else {
            self.expanded.insert(server.id);
            true
        };
        self.clamp_cursor();
        expanded
    }

    /// All visible rows: free section, then premium section.
    pub fn rows(&self) -> Vec<Row> {
        let partition = self.partition();
        let mut rows = Vec::new();

        for (group, servers) in
            [(ServerGroup::Free, &partition.free), (ServerGroup::Premium, &partition.premium)]
        {
            rows.push(Row::Header { group, count: servers.len() });
            for &server in servers {
                rows.push(Row::Server(server));
                if self.is_expanded(server.id) {
                    rows.extend(
                        server
                            .sub_servers
                            .iter()
                            .map(|sub| Row::SubServer { parent: server, server: sub }),
                    );
                }
            }
        }

        rows
    }

    /// Rows the cursor can rest on.
    pub fn selectable_rows(&self) -> Vec<Row> {
        self.rows().into_iter().filter(Row::is_selectable).collect()
    }

    /// Cursor position within [`Self::selectable_rows`].
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Row under the cursor. `None` if the filter matches nothing.
    pub fn selected_row(&self) -> Option<Row> {
        self.selectable_rows().get(self.cursor).copied()
    }

    /// Move the cursor up, stopping at the first row.
    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor down, stopping at the last row.
    pub fn move_down(&mut self) {
        let last = self.selectable_rows().len().saturating_sub(1);
        self.cursor = self.cursor.saturating_add(1).min(last);
    }

    /// Activate the row under the cursor.
    ///
    /// A parent toggles its expansion and yields nothing. A leaf or sub-server
    /// yields the selection to hand back to the Home screen.
    pub fn activate(&mut self) -> Option<ServerSelection> {
        match self.selected_row()? {
            Row::Server(server) if server.has_sub_servers() => {
                self.toggle_expanded(server.id);
                None
            },
            Row::Server(server) | Row::SubServer { server, .. } => {
                Some(ServerSelection::from_server(server))
            },
            Row::Header { .. } => None,
        }
    }

    fn clamp_cursor(&mut self) {
        let last = self.selectable_rows().len().saturating_sub(1);
        self.cursor = self.cursor.min(last);
    }
}
