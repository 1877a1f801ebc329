//! Interactive menu loop.
//!
//! Each iteration lists the operations, reads a selection and dispatches it.
//! Errors raised inside an iteration are reported as
//! `Error: <message> Try again.` and the loop continues. Only a blank
//! selection (or closed input) ends the loop.

use crate::{AddProject, AppResult, InputError, MenuOperation, ProjectService, Prompt};

use std::collections::BTreeMap;
use std::sync::Arc;

use log::{debug, info, warn};

const MENU_HEADER: &str = "These are the available selections. Press the ENTER key to quit:";
const SELECTION_PROMPT: &str = "Enter a menu selection";

/// Code for the "Add a project" operation
pub const ADD_PROJECT: i32 = 1;

/// What the user picked at the selection prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Blank answer: leave the menu
    Exit,
    /// Any integer, valid or not
    Operation(i32),
}

enum Flow {
    Continue,
    Exit,
}

pub struct Menu<P> {
    console: P,
    service: Arc<dyn ProjectService>,
    operations: BTreeMap<i32, Box<dyn MenuOperation>>,
}

impl<P: Prompt> Menu<P> {
    /// Menu with the standard operations registered.
    pub fn new(console: P, service: Arc<dyn ProjectService>) -> Self {
        let mut menu = Self::empty(console, service);
        menu.register(ADD_PROJECT, Box::new(AddProject));
        menu
    }

    /// Menu with no operations; only exit is available.
    pub fn empty(console: P, service: Arc<dyn ProjectService>) -> Self {
        Self {
            console,
            service,
            operations: BTreeMap::new(),
        }
    }

    /// Register `operation` under `code`, replacing any previous entry.
    pub fn register(&mut self, code: i32, operation: Box<dyn MenuOperation>) {
        self.operations.insert(code, operation);
    }

    pub fn into_console(self) -> P {
        self.console
    }

    /// Run until the user exits.
    ///
    /// Returns an error only when the console can no longer be written to.
    pub async fn run(&mut self) -> AppResult<()> {
        loop {
            match self.process_selection().await {
                Ok(Flow::Exit) => return Ok(()),
                Ok(Flow::Continue) => {}
                Err(e) => {
                    warn!("Menu operation failed: {e:?}");
                    self.console.write_line("")?;
                    self.console.write_line(&format!("Error: {e} Try again."))?;
                }
            }
        }
    }

    async fn process_selection(&mut self) -> AppResult<Flow> {
        match self.get_user_selection()? {
            Selection::Exit => {
                self.exit_menu()?;
                Ok(Flow::Exit)
            }
            Selection::Operation(code) => match self.operations.get(&code) {
                Some(operation) => {
                    debug!("Selected {}) {}", code, operation.label());
                    operation
                        .perform(&mut self.console, self.service.as_ref())
                        .await?;
                    Ok(Flow::Continue)
                }
                None => {
                    self.console.write_line("")?;
                    self.console
                        .write_line(&format!("{code} is not a valid selection. Try again."))?;
                    Ok(Flow::Continue)
                }
            },
        }
    }

    fn get_user_selection(&mut self) -> AppResult<Selection> {
        self.print_operations()?;

        match self.console.read_int(SELECTION_PROMPT) {
            Ok(Some(code)) => Ok(Selection::Operation(code)),
            Ok(None) => Ok(Selection::Exit),
            Err(InputError::Closed) => {
                debug!("Input closed at selection prompt");
                Ok(Selection::Exit)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn print_operations(&mut self) -> AppResult<()> {
        self.console.write_line("")?;
        self.console.write_line(MENU_HEADER)?;
        for (code, operation) in &self.operations {
            self.console
                .write_line(&format!("   {code}) {}", operation.label()))?;
        }
        Ok(())
    }

    fn exit_menu(&mut self) -> AppResult<()> {
        info!("Exiting the menu");
        self.console.write_line("")?;
        self.console.write_line("Exiting the menu.")?;
        Ok(())
    }
}
