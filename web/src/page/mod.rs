mod about;
pub use about::AboutPage;

mod group;
pub use group::GroupDetailsPage;
