//! Interactive session - list, render, prompt, dispatch, repeat
//!
//! A failed action never ends the session: its error is printed, the user
//! acknowledges it and the menu comes back. The loop ends on the Exit action
//! or when the input stream closes.

use std::io::{BufRead, Write};

use crate::entry::MenuAction;
use crate::storage::StoreHandle;
use crate::ui::Console;
use crate::{Error, Result};

pub struct Session<R, W> {
    store: StoreHandle,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(store: StoreHandle, console: Console<R, W>) -> Self {
        Self { store, console }
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Run until the user exits or input runs out
    pub fn run(&mut self) -> Result<()> {
        loop {
            let table = self.store.with(|store| store.list_all())?;
            self.console.render_table(&table)?;

            let code = match self.console.prompt_menu(&MenuAction::options()) {
                Ok(code) => code,
                Err(Error::InputClosed) => return Ok(()),
                Err(e) => return Err(e),
            };
            let Some(action) = MenuAction::from_code(code) else {
                continue;
            };
            if action == MenuAction::Exit {
                tracing::debug!("Exit selected");
                return Ok(());
            }

            match self.dispatch(action) {
                Ok(()) => {}
                Err(Error::InputClosed) => return Ok(()),
                Err(e) => {
                    tracing::warn!("{:?} failed: {}", action, e);
                    self.console.report_error(&e)?;
                    match self.console.acknowledge() {
                        Ok(()) => {}
                        Err(Error::InputClosed) => return Ok(()),
                        Err(e) => return Err(e),
                    }
                }
            }
        }
    }

    fn dispatch(&mut self, action: MenuAction) -> Result<()> {
        match action {
            MenuAction::Add => {
                let title = self.console.prompt_new_title()?;
                self.store.with(|store| store.add(&title))?;
            }
            MenuAction::UpdateCount => {
                let (id, count) = self.console.prompt_update()?;
                self.store.with(|store| store.update_count(id, count))?;
            }
            MenuAction::Delete => {
                let id = self.console.prompt_delete()?;
                self.store.with(|store| store.delete(id))?;
            }
            MenuAction::Exit => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::ChestStore;
    use std::io::Cursor;

    fn run_script(store: &StoreHandle, script: &str) -> String {
        let console = Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
        let mut session = Session::new(store.clone(), console);
        session.run().unwrap();
        String::from_utf8(session.into_console().into_output()).unwrap()
    }

    fn handle() -> StoreHandle {
        StoreHandle::new(ChestStore::open_in_memory().unwrap())
    }

    #[test]
    fn test_add_then_exit() {
        let store = handle();

        run_script(&store, "1\nrun1\n4\n");

        let table = store.with(|s| s.list_all()).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.entries[0].video_title, "run1");
        assert_eq!(table.entries[0].chest_number, Some(0));
    }

    #[test]
    fn test_add_update_delete_flow() {
        let store = handle();
        let keep = store.with(|s| s.add("keep")).unwrap();
        let gone = store.with(|s| s.add("gone")).unwrap();

        let script = format!("2\n{keep}\n42\n3\n{gone}\n4\n");
        run_script(&store, &script);

        let table = store.with(|s| s.list_all()).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(keep).unwrap().chest_number, Some(42));
        assert!(table.get(gone).is_none());
    }

    #[test]
    fn test_update_missing_id_reports_and_continues() {
        let store = handle();
        let id = store.with(|s| s.add("a")).unwrap();

        let script = format!("2\n{}\n5\n\n4\n", id + 1);
        let out = run_script(&store, &script);

        assert!(out.contains(&format!("Error: No entry found with id {}", id + 1)));
        assert!(out.contains("Press enter to continue..."));
        assert_eq!(out.matches("What would you like to do?").count(), 2);
        assert_eq!(store.with(|s| s.list_all()).unwrap().get(id).unwrap().chest_number, Some(0));
    }

    #[test]
    fn test_delete_missing_id_is_silent() {
        let store = handle();
        store.with(|s| s.add("a")).unwrap();

        let out = run_script(&store, "3\n99\n4\n");

        assert!(!out.contains("Error:"));
        assert_eq!(store.with(|s| s.count()).unwrap(), 1);
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let store = handle();

        run_script(&store, "1\n");

        assert_eq!(store.with(|s| s.count()).unwrap(), 0);
    }

    #[test]
    fn test_closed_store_propagates() {
        let store = handle();
        store.close().unwrap();

        let console = Console::new(Cursor::new(b"4\n".to_vec()), Vec::new());
        let mut session = Session::new(store, console);

        assert!(matches!(session.run(), Err(Error::StoreClosed)));
    }
}
