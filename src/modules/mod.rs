pub mod cataloguing;
pub mod integrations;
