//! Player (roster entry) model.

use serde::{Deserialize, Deserializer, Serialize};

use super::{PlacementLabel, PlayerId, TeamId};

/// Team name shown for players added by hand.
pub const FREE_AGENT_TEAM_NAME: &str = "No Team";

/// Role tag on a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Tank,
    Damage,
    Support,
    #[serde(other)]
    Other,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Tank => "Tank",
            Role::Damage => "Damage",
            Role::Support => "Support",
            Role::Other => "Other",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A player and their circuit points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "PlayerRecord")]
pub struct Player {
    #[serde(rename = "playerId")]
    pub id: PlayerId,

    /// In-game name
    #[serde(rename = "ign")]
    pub name: String,

    /// Team the player is listed under
    pub team_name: String,

    /// Team the player most recently represented (used for the stacking cap)
    #[serde(rename = "prevTeamId")]
    pub origin_team_id: TeamId,

    /// Current team id, when the feed carries one separately
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<TeamId>,

    /// Circuit points; missing or null counts as zero
    pub points: f64,

    #[serde(rename = "role")]
    pub roles: Vec<Role>,

    /// Bracket finish of the player's team, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place: Option<PlacementLabel>,
}

/// Wire shape of a player record. Team feeds carry `prevTeamId`, the player
/// pool only `teamId`, and some records carry both.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlayerRecord {
    player_id: PlayerId,
    ign: String,
    #[serde(default)]
    team_name: String,
    #[serde(default)]
    prev_team_id: Option<TeamId>,
    #[serde(default)]
    team_id: Option<TeamId>,
    #[serde(default, deserialize_with = "points_or_zero")]
    points: f64,
    #[serde(default)]
    role: Vec<Role>,
    #[serde(default)]
    place: Option<PlacementLabel>,
}

impl From<PlayerRecord> for Player {
    fn from(record: PlayerRecord) -> Self {
        let origin_team_id = record
            .prev_team_id
            .or_else(|| record.team_id.clone())
            .unwrap_or_default();
        Self {
            id: record.player_id,
            name: record.ign,
            team_name: record.team_name,
            origin_team_id,
            team_id: record.team_id,
            points: record.points,
            roles: record.role,
            place: record.place,
        }
    }
}

fn points_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

impl Player {
    pub fn new(
        id: impl Into<PlayerId>,
        name: impl Into<String>,
        origin_team_id: impl Into<TeamId>,
        points: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            team_name: String::new(),
            origin_team_id: origin_team_id.into(),
            team_id: None,
            points,
            roles: Vec::new(),
            place: None,
        }
    }

    /// A hand-added player with no team history and no points.
    ///
    /// The origin id should be unique so the player never joins a stacking group.
    pub fn free_agent(id: PlayerId, origin_team_id: TeamId, name: impl Into<String>) -> Self {
        Self::new(id, name, origin_team_id, 0.0)
            .with_team_name(FREE_AGENT_TEAM_NAME)
            .with_roles(vec![Role::Tank, Role::Damage, Role::Support])
    }

    pub fn with_team_name(mut self, team_name: impl Into<String>) -> Self {
        self.team_name = team_name.into();
        self
    }

    pub fn with_roles(mut self, roles: Vec<Role>) -> Self {
        self.roles = roles;
        self
    }

    pub fn with_place(mut self, place: PlacementLabel) -> Self {
        self.place = Some(place);
        self
    }

    /// Points as used by the scoring functions: never negative, never NaN.
    pub fn scoring_points(&self) -> f64 {
        if self.points.is_finite() && self.points > 0.0 {
            self.points
        } else {
            0.0
        }
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    pub fn is_tank(&self) -> bool {
        self.has_role(Role::Tank)
    }

    pub fn is_damage(&self) -> bool {
        self.has_role(Role::Damage)
    }

    pub fn is_support(&self) -> bool {
        self.has_role(Role::Support)
    }

    /// Name of the first role tag, empty when the player has none.
    pub fn primary_role_name(&self) -> &'static str {
        self.roles.first().map(Role::as_str).unwrap_or("")
    }
}
