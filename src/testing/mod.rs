mod fake_registrar;
mod memory_defaults_store;
mod recording_browser;
mod recording_runner;
mod scripted_prompter;

pub use fake_registrar::FakeRegistrar;
pub use memory_defaults_store::MemoryDefaultsStore;
pub use recording_browser::RecordingBrowser;
pub use recording_runner::RecordingRunner;
pub use scripted_prompter::ScriptedPrompter;
