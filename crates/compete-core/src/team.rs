//! Team collaboration
//!
//! A team workspace holds the roster, a chat log, and shared resources.
//! Messages and resources are attributed to the signed-in user, or to "Me"
//! when nobody is signed in.

use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::auth::User;
use crate::ids::IdGenerator;
use crate::models::today;

/// Author name used when no user is signed in
pub const ANONYMOUS_AUTHOR: &str = "Me";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub role: String,
    /// Initials shown in place of a picture
    pub avatar: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub name: String,
    pub project_title: String,
    pub members: Vec<TeamMember>,
    pub score: u32,
    pub rank: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    pub id: u64,
    pub sender: String,
    pub text: String,
    /// Local wall-clock time, e.g. "10:30 AM"
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    pub uploaded_by: String,
    pub date: String,
}

/// Partial resource; missing fields get defaults
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceDraft {
    pub name: Option<String>,
    pub kind: Option<String>,
    pub url: Option<String>,
}

/// Team roster, chat, and shared resources
#[derive(Debug, Clone)]
pub struct TeamWorkspace {
    team: Team,
    messages: Vec<Message>,
    resources: Vec<Resource>,
    ids: IdGenerator,
}

impl Default for TeamWorkspace {
    fn default() -> Self {
        Self::seeded()
    }
}

impl TeamWorkspace {
    /// Workspace for the given team with empty chat and resources
    pub fn new(team: Team) -> Self {
        Self {
            team,
            messages: Vec::new(),
            resources: Vec::new(),
            ids: IdGenerator::new(),
        }
    }

    /// The demo team with its starting conversation and files
    pub fn seeded() -> Self {
        let member = |id: &str, name: &str, role: &str, avatar: &str| TeamMember {
            id: id.to_string(),
            name: name.to_string(),
            role: role.to_string(),
            avatar: avatar.to_string(),
        };

        let mut workspace = Self::new(Team {
            id: "team-001".to_string(),
            name: "The Innovators".to_string(),
            project_title: "Eco-Friendly Water Purification".to_string(),
            members: vec![
                member("u1", "Alice Johnson", "Leader", "AJ"),
                member("u2", "Bob Smith", "Member", "BS"),
                member("u3", "Charlie Brown", "Member", "CB"),
            ],
            score: 1250,
            rank: 3,
        });

        workspace.messages = vec![
            Message {
                id: 1,
                sender: "Alice Johnson".to_string(),
                text: "Hey team, did we finalize the slide deck?".to_string(),
                timestamp: "10:30 AM".to_string(),
            },
            Message {
                id: 2,
                sender: "Bob Smith".to_string(),
                text: "Almost, just need to add the financial projections.".to_string(),
                timestamp: "10:32 AM".to_string(),
            },
        ];

        workspace.resources = vec![
            Resource {
                id: 1,
                name: "Project Proposal.pdf".to_string(),
                kind: "document".to_string(),
                url: "#".to_string(),
                uploaded_by: "Alice Johnson".to_string(),
                date: "2023-10-05".to_string(),
            },
            Resource {
                id: 2,
                name: "Market Research Links".to_string(),
                kind: "link".to_string(),
                url: "#".to_string(),
                uploaded_by: "Charlie Brown".to_string(),
                date: "2023-10-06".to_string(),
            },
        ];

        workspace
    }

    pub fn team(&self) -> &Team {
        &self.team
    }

    /// Chat log, oldest first
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// Append a chat message from `sender`
    pub fn send_message(&mut self, text: impl Into<String>, sender: Option<&User>) -> &Message {
        let message = Message {
            id: self.ids.next_id(),
            sender: author(sender),
            text: text.into(),
            timestamp: Local::now().format("%I:%M %p").to_string(),
        };
        debug!("message {} from {}", message.id, message.sender);
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }

    /// Share a resource uploaded by `uploader`
    pub fn add_resource(&mut self, draft: ResourceDraft, uploader: Option<&User>) -> &Resource {
        let resource = Resource {
            id: self.ids.next_id(),
            name: draft.name.unwrap_or_else(|| "Untitled".to_string()),
            kind: draft.kind.unwrap_or_else(|| "unknown".to_string()),
            url: draft.url.unwrap_or_else(|| "#".to_string()),
            uploaded_by: author(uploader),
            date: today(),
        };
        debug!("resource {} ({}) shared", resource.id, resource.name);
        self.resources.push(resource);
        &self.resources[self.resources.len() - 1]
    }
}

fn author(user: Option<&User>) -> String {
    user.map(|u| u.name.clone())
        .unwrap_or_else(|| ANONYMOUS_AUTHOR.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Role;

    fn student() -> User {
        User {
            id: "u9".to_string(),
            name: "Student User".to_string(),
            role: Role::Student,
        }
    }

    #[test]
    fn test_seeded_workspace() {
        let workspace = TeamWorkspace::seeded();
        assert_eq!(workspace.team().name, "The Innovators");
        assert_eq!(workspace.team().members.len(), 3);
        assert_eq!(workspace.team().rank, 3);
        assert_eq!(workspace.messages().len(), 2);
        assert_eq!(workspace.resources().len(), 2);
    }

    #[test]
    fn test_send_message_attribution() {
        let mut workspace = TeamWorkspace::seeded();
        let user = student();

        let id = workspace.send_message("Slides are done", Some(&user)).id;
        workspace.send_message("Thanks!", None);

        let messages = workspace.messages();
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[2].id, id);
        assert_eq!(messages[2].sender, "Student User");
        assert_eq!(messages[3].sender, ANONYMOUS_AUTHOR);
        assert!(messages[3].id > messages[2].id);
        assert!(messages[3].timestamp.ends_with("AM") || messages[3].timestamp.ends_with("PM"));
    }

    #[test]
    fn test_add_resource_defaults() {
        let mut workspace = TeamWorkspace::seeded();

        let resource = workspace.add_resource(ResourceDraft::default(), None).clone();

        assert_eq!(resource.name, "Untitled");
        assert_eq!(resource.kind, "unknown");
        assert_eq!(resource.url, "#");
        assert_eq!(resource.uploaded_by, ANONYMOUS_AUTHOR);
        assert_eq!(resource.date, today());
        assert_eq!(workspace.resources().last(), Some(&resource));
    }

    #[test]
    fn test_add_resource_by_user() {
        let mut workspace = TeamWorkspace::new(TeamWorkspace::seeded().team().clone());
        let user = student();

        let draft = ResourceDraft {
            name: Some("Budget.xlsx".to_string()),
            kind: Some("document".to_string()),
            url: Some("https://example.com/budget".to_string()),
        };
        let resource = workspace.add_resource(draft, Some(&user));

        assert_eq!(resource.uploaded_by, "Student User");
        assert_eq!(resource.name, "Budget.xlsx");
        assert_eq!(workspace.resources().len(), 1);
    }
}
