mod crunch;
pub use crunch::Crunch;

mod briefing;
pub use briefing::Briefing;
