pub mod orbit;
pub mod time;
pub mod timers;
