//! Definition-time validation: exhaustiveness, duplicates, domain fencing,
//! and the post-finalization registration lock.

use totem::{
    BuildError, CacheStrategy, DispatchError, HandlerSetBuilder, Key, RegisterError,
    RegistrationMeta, SetCell,
};

mod common;
use common::{Capital, Color};

#[test]
fn non_exhaustive_definitions_fail() {
    let err = HandlerSetBuilder::new()
        .register([Color::Red], |_, ()| "red")
        .register([Color::Green], |_, ()| "green")
        .build()
        .unwrap_err();

    assert_eq!(
        err,
        BuildError::NonExhaustive {
            missing: vec![Color::Blue],
        }
    );
}

#[test]
fn missing_members_are_all_listed() {
    let err = HandlerSetBuilder::new()
        .register([Capital::Canberra], |_, ()| "Australia")
        .build()
        .unwrap_err();

    match err {
        BuildError::NonExhaustive { missing } => {
            assert_eq!(missing.len(), Capital::MEMBERS.len() - 1);
            assert!(!missing.contains(&Capital::Canberra));
        }
        other => panic!("expected NonExhaustive, got {other:?}"),
    }
}

#[test]
fn duplicate_definitions_fail() {
    let err = HandlerSetBuilder::new()
        .register_with(
            [Color::Red, Color::Green, Color::Blue],
            RegistrationMeta::new().with_name("color"),
            |_, ()| "color",
        )
        .register_with(
            [Color::Red],
            RegistrationMeta::new().with_name("clash"),
            |_, ()| "duplicate",
        )
        .build()
        .unwrap_err();

    assert_eq!(
        err,
        BuildError::DuplicateHandler {
            member: Color::Red,
            first: "`color`".to_string(),
            second: "`clash`".to_string(),
        }
    );
}

#[test]
fn duplicate_reports_fall_back_to_registration_positions() {
    let err = HandlerSetBuilder::new()
        .register([Color::Red], |_, ()| "red")
        .register([Color::Red], |_, ()| "red again")
        .build()
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "multiple handlers registered for Red: registration #0 and registration #1"
    );
}

#[test]
fn disjoint_registrations_covering_the_domain_succeed() {
    let set = common::continents(CacheStrategy::Eager);
    assert_eq!(set.members(), Capital::MEMBERS);
}

// ============================================================================
// Domain fencing
// ============================================================================

// Registering a member of a different enum type does not compile; the runtime
// fence covers values excluded from a hand-written `MEMBERS` list.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

// Domain deliberately restricted to weekdays.
impl Key for Day {
    const MEMBERS: &'static [Self] = &[
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
    ];
}

#[test]
fn registering_outside_the_declared_domain_fails() {
    let err = HandlerSetBuilder::new()
        .register(Day::MEMBERS.iter().copied(), |_, ()| "work")
        .register([Day::Saturday, Day::Sunday], |_, ()| "rest")
        .build()
        .unwrap_err();

    assert_eq!(
        err,
        BuildError::ForeignMember {
            members: vec![Day::Saturday, Day::Sunday],
        }
    );
}

#[test]
fn out_of_domain_values_cannot_be_bound() {
    let weekdays = HandlerSetBuilder::new()
        .register(Day::MEMBERS.iter().copied(), |_, ()| "work")
        .build()
        .unwrap();

    assert_eq!(weekdays.invoke(Day::Friday, ()).unwrap(), "work");
    assert!(matches!(
        weekdays.bind(Day::Sunday),
        Err(DispatchError::UnknownMember { .. })
    ));
}

// ============================================================================
// Post-finalization lock
// ============================================================================

#[test]
fn registering_after_finalization_fails() {
    let cell: SetCell<Color, (), &'static str> = SetCell::new(CacheStrategy::Eager);
    cell.register([Color::Red], |_, ()| "Red").unwrap();
    cell.register([Color::Green], |_, ()| "Green").unwrap();
    cell.register([Color::Blue], |_, ()| "Blue").unwrap();
    cell.finalize().unwrap();

    assert_eq!(
        cell.register([Color::Red], |_, ()| "again"),
        Err(RegisterError::Finalized)
    );
}

#[test]
fn registration_lock_applies_under_every_cache_strategy() {
    for strategy in [CacheStrategy::None, CacheStrategy::Eager, CacheStrategy::Lazy] {
        let cell: SetCell<Color, (), &'static str> = SetCell::new(strategy);
        cell.register(Color::MEMBERS.iter().copied(), |_, ()| "color")
            .unwrap();
        cell.finalize().unwrap();
        assert_eq!(
            cell.register([Color::Blue], |_, ()| "late"),
            Err(RegisterError::Finalized),
            "finalized cell accepted a registration under {strategy:?}"
        );
    }
}

// ============================================================================
// Declarative definition
// ============================================================================

#[test]
fn handler_sets_defined_via_the_macro_work() {
    let is_color = totem::handlers! {
        [Color::Red, Color::Green, Color::Blue] => |_, ()| true,
    }
    .unwrap();

    assert!(is_color.invoke(Color::Blue, ()).unwrap());
}

#[test]
fn macro_definitions_validate_like_the_builder() {
    let err = totem::handlers! {
        cache: CacheStrategy::Lazy;
        [Color::Red, Color::Green] => |_, ()| "warm",
    }
    .unwrap_err();

    assert_eq!(
        err,
        BuildError::NonExhaustive {
            missing: vec![Color::Blue],
        }
    );
}
