pub mod cards;
pub mod charts;
pub mod empty_state;
pub mod layout;
pub mod theme;
