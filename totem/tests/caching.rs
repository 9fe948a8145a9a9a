//! Instance caching: identity guarantees per strategy, cache population, and
//! lazy construction under contention.

use std::thread;

use totem::{BoundHandler, CacheStrategy, Key};

mod common;
use common::{Capital, Color};

#[test]
fn instances_are_cached_eagerly_by_default() {
    let continents = common::continents(CacheStrategy::default());
    assert_eq!(continents.strategy(), CacheStrategy::Eager);

    // Fully populated before anything is bound.
    assert_eq!(continents.cached(), Capital::MEMBERS.len());

    for &capital in Capital::MEMBERS {
        let left = continents.bind(capital).unwrap();
        let right = continents.bind(capital).unwrap();
        assert_eq!(left.call(()), right.call(()));
        assert!(
            BoundHandler::ptr_eq(&left, &right),
            "eager binds of {capital:?} returned distinct instances"
        );
    }
}

#[test]
fn instances_are_cached_lazily_on_first_bind() {
    let names = common::color_names(CacheStrategy::Lazy);
    assert_eq!(names.cached(), 0);

    for (n, &color) in Color::MEMBERS.iter().enumerate() {
        assert_eq!(names.cached(), n);
        let first = names.bind(color).unwrap();
        let second = names.bind(color).unwrap();
        assert!(BoundHandler::ptr_eq(&first, &second));
    }

    // Re-binding an already-cached member does not grow the cache.
    names.bind(Color::Red).unwrap();
    assert_eq!(names.cached(), Color::MEMBERS.len());
}

#[test]
fn instances_are_not_cached_under_the_no_cache_strategy() {
    let names = common::color_names(CacheStrategy::None);

    for &color in Color::MEMBERS {
        let left = names.bind(color).unwrap();
        let right = names.bind(color).unwrap();
        assert_eq!(left.call(()), right.call(()));
        assert!(
            !BoundHandler::ptr_eq(&left, &right),
            "uncached binds of {color:?} returned the same instance"
        );
    }

    assert_eq!(names.cached(), 0);
}

#[test]
fn clones_of_a_cached_instance_share_identity() {
    let names = common::color_names(CacheStrategy::Eager);
    let bound = names.bind(Color::Red).unwrap();
    let cloned = bound.clone();
    assert!(BoundHandler::ptr_eq(&bound, &cloned));
}

#[test]
fn concurrent_first_binds_observe_one_instance() {
    let names = common::color_names(CacheStrategy::Lazy);

    let bound: Vec<BoundHandler<Color, (), &'static str>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| names.bind(Color::Blue).unwrap()))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    assert_eq!(names.cached(), 1);
    for instance in &bound[1..] {
        assert!(BoundHandler::ptr_eq(&bound[0], instance));
    }
}
