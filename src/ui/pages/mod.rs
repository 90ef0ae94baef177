pub mod influencers;
pub mod my_selections;
pub mod venues;

pub use influencers::InfluencerPage;
pub use my_selections::MySelectionsPage;
pub use venues::VenuePage;
