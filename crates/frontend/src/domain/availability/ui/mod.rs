mod list;

pub use list::AvailabilityPage;
