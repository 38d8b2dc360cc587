use combat_core::{
    Amount, AttackOutcome, Attackable, Character, CombatError, Encounter, EncounterError,
    ErrorSeverity, GameError, Thing,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn skirmish_between_two_factions() {
    init_tracing();
    let mut encounter = Encounter::new();
    let knight = encounter.spawn_character(Character::melee()).unwrap();
    let cleric = encounter.spawn_character(Character::ranged()).unwrap();
    let orc = encounter.spawn_character(Character::melee()).unwrap();
    encounter.join(knight, "crown").unwrap();
    encounter.join(cleric, "crown").unwrap();
    encounter.join(orc, "horde").unwrap();

    // Orc hits the knight, friendly fire is ignored, the cleric patches him up.
    encounter.attack(orc, knight, Amount::from(600), 1.5).unwrap();
    let friendly = encounter.attack(cleric, knight, Amount::from(600), 3.0).unwrap();
    encounter.heal(cleric, knight, Amount::from(500)).unwrap();

    assert_eq!(friendly, AttackOutcome::Friendly);
    assert_eq!(encounter.character(knight).unwrap().health(), Amount::from(900));

    // The orc cannot be healed by the crown.
    assert_eq!(
        encounter.heal(cleric, orc, Amount::from(10)),
        Err(EncounterError::Rule(CombatError::CannotHeal))
    );
}

#[test]
fn level_gap_scaling_through_encounter() {
    let mut encounter = Encounter::new();
    let veteran = encounter.spawn_character(Character::melee()).unwrap();
    let recruit = encounter.spawn_character(Character::melee()).unwrap();
    for _ in 0..5 {
        encounter.increase_level(veteran).unwrap();
    }

    let empowered = encounter.attack(veteran, recruit, Amount::from(100), 0.0).unwrap();
    let weakened = encounter.attack(recruit, veteran, Amount::from(100), 0.0).unwrap();

    assert_eq!(empowered.damage_dealt(), Amount::from(150));
    assert_eq!(weakened.damage_dealt(), Amount::from(50));
    assert_eq!(encounter.character(recruit).unwrap().health(), Amount::from(850));
    assert_eq!(encounter.character(veteran).unwrap().health(), Amount::from(950));
}

#[test]
fn leaving_a_faction_ends_the_alliance() {
    let mut a = Character::melee();
    let mut b = Character::melee();
    a.join("guild");
    b.join("guild");
    assert!(a.is_ally(&b));

    b.leave("guild");

    assert!(!a.is_ally(&b));
    assert!(a.attack(&mut b, Amount::from(100)).is_hit());
    assert_eq!(b.health(), Amount::from(900));
}

#[test]
fn scenery_is_destroyed_without_scaling() {
    let mut hero = Character::ranged();
    for _ in 0..10 {
        hero.increase_level();
    }
    let mut door = Thing::new(Amount::from(500));

    assert_eq!(
        hero.attack_from(&mut door, Amount::from(300), 19.0),
        AttackOutcome::Hit { damage: Amount::from(300) }
    );
    hero.attack_from(&mut door, Amount::from(300), 19.0);

    assert!(door.is_destroyed());
    assert_eq!(Attackable::health(&door), Amount::ZERO);
}

#[test]
fn errors_carry_codes_and_severity() {
    let err: EncounterError = CombatError::DeadCharacter.into();

    assert_eq!(err.error_code(), "COMBAT_DEAD_CHARACTER");
    assert_eq!(err.severity(), ErrorSeverity::Validation);
    assert_eq!(err.to_string(), "dead characters cannot be healed");
    assert!(!err.severity().is_fatal());
    assert_eq!(
        EncounterError::EntityIdOverflow { current: 7 }.severity(),
        ErrorSeverity::Fatal
    );
}

#[test]
fn dead_stay_dead() {
    let mut encounter = Encounter::new();
    let a = encounter.spawn_character(Character::melee()).unwrap();
    let b = encounter.spawn_character(Character::melee()).unwrap();
    encounter.attack(a, b, Amount::from(2000), 0.0).unwrap();

    assert!(encounter.character(b).unwrap().is_dead());
    assert_eq!(
        encounter.heal(b, b, Amount::from(100)),
        Err(EncounterError::Rule(CombatError::DeadCharacter))
    );
    // Still able to swing back.
    assert!(encounter.attack(b, a, Amount::from(100), 0.0).unwrap().is_hit());
}
