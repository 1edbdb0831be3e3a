pub mod chat;
pub mod messenger;
pub mod settings;
pub mod shared;

pub use chat::ChatView;
pub use messenger::MessengerView;
pub use settings::SettingsView;
