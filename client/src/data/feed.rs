//! Right drawer feed: notifications, activity, and contacts.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Bug,
    User,
    Subscription,
}

impl NotificationKind {
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Bug => "🐞",
            Self::User => "👤",
            Self::Subscription => "📡",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: &'static str,
    pub kind: NotificationKind,
    pub title: &'static str,
    pub timestamp: &'static str,
}

pub const NOTIFICATIONS: [Notification; 4] = [
    Notification { id: "1", kind: NotificationKind::Bug, title: "You have a bug that needs...", timestamp: "Just now" },
    Notification { id: "2", kind: NotificationKind::User, title: "New user registered", timestamp: "59 minutes ago" },
    Notification {
        id: "3",
        kind: NotificationKind::Bug,
        title: "You have a bug that needs...",
        timestamp: "12 hours ago",
    },
    Notification {
        id: "4",
        kind: NotificationKind::Subscription,
        title: "Andi Lane subscribed to you",
        timestamp: "Today, 11:59 AM",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Activity {
    pub id: &'static str,
    pub user: &'static str,
    pub action: &'static str,
    pub timestamp: &'static str,
}

pub const ACTIVITIES: [Activity; 5] = [
    Activity { id: "1", user: "User", action: "You have a bug that needs...", timestamp: "Just now" },
    Activity { id: "2", user: "Developer", action: "Released a new version", timestamp: "59 minutes ago" },
    Activity { id: "3", user: "Admin", action: "Submitted a bug", timestamp: "12 hours ago" },
    Activity { id: "4", user: "Manager", action: "Modified A data in Page X", timestamp: "Today, 11:59 AM" },
    Activity { id: "5", user: "Designer", action: "Deleted a page in Project X", timestamp: "Feb 2, 2023" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Presence {
    Online,
    Offline,
    Away,
}

impl Presence {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Offline => "offline",
            Self::Away => "away",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Contact {
    pub id: &'static str,
    pub name: &'static str,
    pub presence: Presence,
}

pub const CONTACTS: [Contact; 6] = [
    Contact { id: "1", name: "Natali Craig", presence: Presence::Online },
    Contact { id: "2", name: "Drew Cano", presence: Presence::Online },
    Contact { id: "3", name: "Orlando Diggs", presence: Presence::Offline },
    Contact { id: "4", name: "Andi Lane", presence: Presence::Online },
    Contact { id: "5", name: "Kate Morrison", presence: Presence::Online },
    Contact { id: "6", name: "Koray Okumus", presence: Presence::Away },
];

/// Up to two uppercase initials for an avatar placeholder.
#[must_use]
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_first_two_words() {
        assert_eq!(initials("Orlando Diggs"), "OD");
        assert_eq!(initials("admin"), "A");
        assert_eq!(initials("Mary Jane Watson"), "MJ");
        assert_eq!(initials(""), "");
    }
}
