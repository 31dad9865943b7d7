use crate::engine::combat::Combatant;

/// Name of the in-game currency, also the item name used to pick it up.
pub const CURRENCY_NAME: &str = "silver";

pub const KEYBOARD: &str = "keyboard";
pub const GLASSES: &str = "glasses";
pub const SWORD: &str = "sword";
pub const SHIELD: &str = "shield";

/// Every item name the game knows about.
pub const ITEM_VOCABULARY: [&str; 5] = [CURRENCY_NAME, KEYBOARD, GLASSES, SWORD, SHIELD];

pub const PLAYER_MAX_HEALTH: f64 = 750.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerClass {
    Programmer,
    Warrior,
}

/// Per-class numbers and flavor text. Combat reads its modifiers from here.
#[derive(Debug, Clone, Copy)]
pub struct ClassProfile {
    pub name: &'static str,
    pub base_damage: f64,
    pub primary_item: &'static str,
    pub secondary_item: &'static str,
    /// Percent chance to miss while the secondary item is missing, and what
    /// the player is told when it happens.
    pub miss_without_secondary: Option<(f64, &'static str)>,
    /// Percent chance to block while holding the secondary item.
    pub block_with_secondary: Option<(f64, &'static str)>,
    pub garbles_on_primary_hit: bool,
    pub primary_pickup_text: &'static str,
    pub secondary_pickup_text: &'static str,
    /// Floor text for the secondary item ("There are glasses" vs "There is a shield").
    pub secondary_floor_text: &'static str,
}

const PROGRAMMER: ClassProfile = ClassProfile {
    name: "Computer Programmer",
    base_damage: 60.0,
    primary_item: KEYBOARD,
    secondary_item: GLASSES,
    miss_without_secondary: Some((50.0, "Your weak sight prevents you from hitting the monster.")),
    block_with_secondary: None,
    garbles_on_primary_hit: true,
    primary_pickup_text: "You found a keyboard! You can use it as a weapon, increasing your damage by 240%",
    secondary_pickup_text: "You acquire glasses! Now you can see monsters very well. Your accuracy increases to 100%",
    secondary_floor_text: "There are glasses on the floor in front of you.",
};

const WARRIOR: ClassProfile = ClassProfile {
    name: "Warrior",
    base_damage: 40.0,
    primary_item: SWORD,
    secondary_item: SHIELD,
    miss_without_secondary: None,
    block_with_secondary: Some((40.0, "You block the monster's attack!")),
    garbles_on_primary_hit: false,
    primary_pickup_text: "You pick up a sword, increasing your damage by 240%",
    secondary_pickup_text: "You acquire shield! Now you have a 40% chance of blocking attacks!",
    secondary_floor_text: "There is a shield on the floor in front of you.",
};

impl PlayerClass {
    pub const ALL: [PlayerClass; 2] = [PlayerClass::Programmer, PlayerClass::Warrior];

    pub fn profile(self) -> &'static ClassProfile {
        match self {
            PlayerClass::Programmer => &PROGRAMMER,
            PlayerClass::Warrior => &WARRIOR,
        }
    }

    pub fn name(self) -> &'static str {
        self.profile().name
    }

    /// Class picked at the start prompt: "2" is a warrior, anything else a programmer.
    pub fn from_selection(input: &str) -> PlayerClass {
        match input.trim() {
            "2" => PlayerClass::Warrior,
            _ => PlayerClass::Programmer,
        }
    }

    /// Items this class may pick up.
    pub fn allowed_items(self) -> [&'static str; 3] {
        let p = self.profile();
        [p.primary_item, p.secondary_item, CURRENCY_NAME]
    }
}

pub fn item_exists(name: &str) -> bool {
    ITEM_VOCABULARY.contains(&name)
}

#[derive(Debug, Clone)]
pub struct Player {
    pub class: PlayerClass,
    pub room: usize,
    pub currency: u32,
    pub has_primary_weapon: bool,
    pub has_secondary_weapon: bool,
    health: f64,
}

impl Player {
    pub fn new(class: PlayerClass, room: usize) -> Self {
        Player {
            class,
            room,
            currency: 0,
            has_primary_weapon: false,
            has_secondary_weapon: false,
            health: PLAYER_MAX_HEALTH,
        }
    }

    pub fn can_carry(&self, item: &str) -> bool {
        self.class.allowed_items().contains(&item)
    }

    /// Give the player their class's primary item. Returns the line to show.
    pub fn equip_primary(&mut self) -> &'static str {
        let already = self.has_primary_weapon;
        self.has_primary_weapon = true;
        if already {
            "You already have this item!"
        } else {
            self.class.profile().primary_pickup_text
        }
    }

    /// Give the player their class's secondary item. Returns the line to show.
    pub fn equip_secondary(&mut self) -> &'static str {
        let already = self.has_secondary_weapon;
        self.has_secondary_weapon = true;
        if already {
            "You already have this item!"
        } else {
            self.class.profile().secondary_pickup_text
        }
    }
}

impl Combatant for Player {
    fn health(&self) -> f64 {
        self.health
    }

    fn full_health(&self) -> f64 {
        PLAYER_MAX_HEALTH
    }

    fn set_health(&mut self, health: f64) -> f64 {
        let before = self.health;
        self.health = health.clamp(0.0, PLAYER_MAX_HEALTH);
        (before - self.health).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_class_starts_full_and_broke() {
        for class in PlayerClass::ALL {
            let p = Player::new(class, 4);
            assert_eq!(p.health(), 750.0);
            assert_eq!(p.currency, 0);
            assert_eq!(p.room, 4);
            assert!(!p.has_primary_weapon && !p.has_secondary_weapon);
        }
    }

    #[test]
    fn health_is_clamped_and_change_reported() {
        let mut p = Player::new(PlayerClass::Warrior, 1);
        assert_eq!(p.set_health(2000.0), 0.0);
        assert_eq!(p.health(), 750.0);
        assert_eq!(p.set_health(-40.0), 750.0);
        assert_eq!(p.health(), 0.0);
        assert!(p.is_defeated());
        assert_eq!(p.set_health(75.0), 75.0);
    }

    #[test]
    fn class_selection_defaults_to_programmer() {
        assert_eq!(PlayerClass::from_selection("1"), PlayerClass::Programmer);
        assert_eq!(PlayerClass::from_selection(" 2 "), PlayerClass::Warrior);
        assert_eq!(PlayerClass::from_selection("wizard"), PlayerClass::Programmer);
        assert_eq!(PlayerClass::from_selection(""), PlayerClass::Programmer);
    }

    #[test]
    fn items_are_class_specific() {
        let p = Player::new(PlayerClass::Programmer, 1);
        assert!(p.can_carry("keyboard"));
        assert!(p.can_carry("silver"));
        assert!(!p.can_carry("sword"));
        assert!(item_exists("shield"));
        assert!(!item_exists("banana"));
    }

    #[test]
    fn equipping_twice_reports_duplicate() {
        let mut p = Player::new(PlayerClass::Warrior, 1);
        assert!(p.equip_secondary().contains("40% chance of blocking"));
        assert!(p.has_secondary_weapon);
        assert_eq!(p.equip_secondary(), "You already have this item!");
        assert!(p.has_secondary_weapon);
    }
}
