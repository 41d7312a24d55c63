//! Next-action suggestion command.

use focusfuel_core::{suggest, SessionStore};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let store = SessionStore::open()?;
    println!("{}", suggest(store.sessions()));
    Ok(())
}
