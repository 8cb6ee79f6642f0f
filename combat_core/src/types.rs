//! Actor records, break states and action kinds

use serde::{Deserialize, Serialize};

// ============================================================================
// Break / combat state
// ============================================================================

/// Break status of the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerStatus {
    #[default]
    Normal,
    Broken,
    Superbroken,
}

impl PlayerStatus {
    /// Posture is pinned at 0 while broken or superbroken
    pub fn is_broken(self) -> bool {
        matches!(self, PlayerStatus::Broken | PlayerStatus::Superbroken)
    }
}

/// Combat state of an enemy. `Dead` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnemyState {
    #[default]
    Normal,
    Preparing,
    Broken,
    Superbroken,
    Dead,
}

impl EnemyState {
    /// Posture is pinned at 0 while broken or superbroken
    pub fn is_broken(self) -> bool {
        matches!(self, EnemyState::Broken | EnemyState::Superbroken)
    }

    pub fn is_dead(self) -> bool {
        self == EnemyState::Dead
    }
}

/// What kind of action produced a hit sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Auto,
    Skill,
    EnemyAttack,
    EnemySkill,
    Dot,
    Break,
    #[default]
    Unknown,
}

// ============================================================================
// Actor attributes
// ============================================================================

/// Player stat record, created per encounter from content definitions.
///
/// `hp <= max_hp` and `posture <= max_posture` are kept by the applicators,
/// not by this struct. Percentages are whole numbers (25.0 = 25%).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerAttributes {
    pub max_hp: f64,
    pub hp: f64,
    pub max_posture: f64,
    pub posture: f64,
    pub attack: f64,
    pub defense: f64,
    /// Chance to crit per hit, in percent
    pub crit_chance: f64,
    /// Bonus damage on crit, in percent (50.0 = x1.5)
    pub crit_damage: f64,
    pub multi_hit_chance: f64,
    pub dot_chance: f64,
    pub penetration: f64,
    pub energy_regen_percent: f64,
    pub damage_bonus_percent: Option<f64>,
    pub damage_reduction_percent: Option<f64>,
    pub heal_bonus_percent: Option<f64>,
    pub posture_damage_bonus_percent: Option<f64>,
}

impl PlayerAttributes {
    /// Create a record with full HP and posture pools and no other stats
    pub fn with_pools(max_hp: f64, max_posture: f64) -> Self {
        PlayerAttributes {
            max_hp,
            hp: max_hp,
            max_posture,
            posture: max_posture,
            ..Default::default()
        }
    }
}

/// Enemy stat record
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyAttributes {
    pub max_hp: f64,
    pub hp: f64,
    pub max_posture: f64,
    pub posture: f64,
    pub attack: f64,
    pub defense: f64,
    pub crit_chance: f64,
    pub crit_damage: f64,
    pub multi_hit_chance: f64,
    pub dot_chance: f64,
    /// Innate number of hits per attack
    pub base_hit_count: Option<f64>,
    pub strong_attack_ready: bool,
}

impl EnemyAttributes {
    /// Create a record with full HP and posture pools and no other stats
    pub fn with_pools(max_hp: f64, max_posture: f64) -> Self {
        EnemyAttributes {
            max_hp,
            hp: max_hp,
            max_posture,
            posture: max_posture,
            ..Default::default()
        }
    }
}

// ============================================================================
// Live actors
// ============================================================================

/// The player as tracked by the encounter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub attributes: PlayerAttributes,
    #[serde(default)]
    pub status: PlayerStatus,
}

impl Player {
    pub fn new(id: impl Into<String>, attributes: PlayerAttributes) -> Self {
        Player {
            id: id.into(),
            attributes,
            status: PlayerStatus::Normal,
        }
    }
}

/// An enemy as tracked by the encounter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: String,
    pub attributes: EnemyAttributes,
    #[serde(default)]
    pub state: EnemyState,
}

impl Enemy {
    pub fn new(id: impl Into<String>, attributes: EnemyAttributes) -> Self {
        Enemy {
            id: id.into(),
            attributes,
            state: EnemyState::Normal,
        }
    }
}

/// Which side of the encounter an actor is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Player,
    Enemy,
}

/// Borrowed view of either actor
#[derive(Debug, Clone, Copy)]
pub enum ActorRef<'a> {
    Player(&'a Player),
    Enemy(&'a Enemy),
}

impl ActorRef<'_> {
    pub fn side(&self) -> Side {
        match self {
            ActorRef::Player(_) => Side::Player,
            ActorRef::Enemy(_) => Side::Enemy,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            ActorRef::Player(p) => &p.id,
            ActorRef::Enemy(e) => &e.id,
        }
    }

    pub fn crit_chance(&self) -> f64 {
        match self {
            ActorRef::Player(p) => p.attributes.crit_chance,
            ActorRef::Enemy(e) => e.attributes.crit_chance,
        }
    }

    pub fn crit_damage(&self) -> f64 {
        match self {
            ActorRef::Player(p) => p.attributes.crit_damage,
            ActorRef::Enemy(e) => e.attributes.crit_damage,
        }
    }
}

/// Resolves a source id to the actor that owns it
pub trait ActorLookup {
    fn actor(&self, source_id: &str) -> Option<ActorRef<'_>>;
}

/// The two actors of a single encounter
#[derive(Debug, Clone, Copy)]
pub struct Combatants<'a> {
    pub player: &'a Player,
    pub enemy: &'a Enemy,
}

impl<'a> Combatants<'a> {
    pub fn new(player: &'a Player, enemy: &'a Enemy) -> Self {
        Combatants { player, enemy }
    }

    /// Borrow one side of the encounter
    pub fn side(&self, side: Side) -> ActorRef<'a> {
        match side {
            Side::Player => ActorRef::Player(self.player),
            Side::Enemy => ActorRef::Enemy(self.enemy),
        }
    }
}

impl ActorLookup for Combatants<'_> {
    fn actor(&self, source_id: &str) -> Option<ActorRef<'_>> {
        if source_id == self.player.id {
            Some(ActorRef::Player(self.player))
        } else if source_id == self.enemy.id {
            Some(ActorRef::Enemy(self.enemy))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_break_predicates() {
        assert!(!PlayerStatus::Normal.is_broken());
        assert!(PlayerStatus::Broken.is_broken());
        assert!(PlayerStatus::Superbroken.is_broken());
        assert!(!EnemyState::Preparing.is_broken());
        assert!(EnemyState::Superbroken.is_broken());
        assert!(EnemyState::Dead.is_dead());
        assert!(!EnemyState::Dead.is_broken());
    }

    #[test]
    fn test_lookup_by_source_id() {
        let player = Player::new("hero", PlayerAttributes::with_pools(100.0, 30.0));
        let enemy = Enemy::new("goblin", EnemyAttributes::with_pools(80.0, 20.0));
        let combatants = Combatants::new(&player, &enemy);

        assert_eq!(combatants.actor("hero").map(|a| a.side()), Some(Side::Player));
        assert_eq!(combatants.actor("goblin").map(|a| a.side()), Some(Side::Enemy));
        assert!(combatants.actor("nobody").is_none());
    }

    #[test]
    fn test_parse_enemy_state() {
        let state: EnemyState = serde_json::from_str("\"superbroken\"").unwrap();
        assert_eq!(state, EnemyState::Superbroken);
    }

    #[test]
    fn test_partial_attribute_record() {
        let json = r#"{ "max_hp": 120, "hp": 90, "base_hit_count": 2 }"#;
        let attrs: EnemyAttributes = serde_json::from_str(json).unwrap();
        assert!((attrs.hp - 90.0).abs() < f64::EPSILON);
        assert_eq!(attrs.base_hit_count, Some(2.0));
        assert!(!attrs.strong_attack_ready);
    }
}
