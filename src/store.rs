mod intent;
mod memory;
mod state;

#[cfg(test)]
mod tests;

pub use intent::Intent;
pub use memory::MemoryStore;
pub use state::SessionState;

/// Global annotation state the panel reads from and dispatches intents to.
pub trait Store {
    fn state(&self) -> &SessionState;
    fn dispatch(&mut self, intent: Intent);
}
