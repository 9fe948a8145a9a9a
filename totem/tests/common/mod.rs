#![allow(dead_code)]

use totem::{CacheStrategy, HandlerSet, HandlerSetBuilder, Key};

// ============================================================================
// Test Key Domains
// ============================================================================

#[derive(Key, Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Color {
    Red,
    Green,
    Blue,
}

#[derive(Key, Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Capital {
    Amsterdam,
    Canberra,
    Hanoi,
    London,
    Moscow,
    Paris,
    Tokyo,
    WashingtonDc,
}

// ============================================================================
// Test Handler Sets
// ============================================================================

pub fn continents(strategy: CacheStrategy) -> HandlerSet<Capital, (), &'static str> {
    HandlerSetBuilder::new()
        .cache(strategy)
        .register(
            [
                Capital::Amsterdam,
                Capital::London,
                Capital::Moscow,
                Capital::Paris,
            ],
            |_, ()| "Europe",
        )
        .register([Capital::WashingtonDc], |_, ()| "North America")
        .register([Capital::Hanoi, Capital::Tokyo], |_, ()| "Asia")
        .register([Capital::Canberra], |_, ()| "Australia")
        .build()
        .expect("continent set covers every capital")
}

pub fn expected_continent(capital: Capital) -> &'static str {
    match capital {
        Capital::Amsterdam | Capital::London | Capital::Moscow | Capital::Paris => "Europe",
        Capital::WashingtonDc => "North America",
        Capital::Hanoi | Capital::Tokyo => "Asia",
        Capital::Canberra => "Australia",
    }
}

pub fn color_names(strategy: CacheStrategy) -> HandlerSet<Color, (), &'static str> {
    HandlerSetBuilder::new()
        .cache(strategy)
        .register([Color::Red], |_, ()| "Red")
        .register([Color::Green], |_, ()| "Green")
        .register([Color::Blue], |_, ()| "Blue")
        .build()
        .expect("color set covers every color")
}
